//! Boxed labels shared by the tab strip and the widget bar

use crate::constants::BOX_BORDER_COLUMNS;
use unicode_width::UnicodeWidthStr;

/// Visual state of a boxed label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxStyle {
    Active,
    Inactive,
    Disabled,
}

struct Glyphs {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
}

impl BoxStyle {
    fn glyphs(self) -> Glyphs {
        match self {
            BoxStyle::Active => Glyphs {
                top_left: "╔",
                top_right: "╗",
                bottom_left: "╚",
                bottom_right: "╝",
                horizontal: "═",
            },
            BoxStyle::Inactive => Glyphs {
                top_left: "╭",
                top_right: "╮",
                bottom_left: "╰",
                bottom_right: "╯",
                horizontal: "─",
            },
            BoxStyle::Disabled => Glyphs {
                top_left: "╭",
                top_right: "╮",
                bottom_left: "╰",
                bottom_right: "╯",
                horizontal: "┄",
            },
        }
    }
}

/// Flatten a label to a single row: control characters (line breaks, tabs,
/// escapes) become spaces so every box stays three rows high.
pub fn single_line(text: &str) -> String {
    text.chars().map(|c| if c.is_control() { ' ' } else { c }).collect()
}

/// Columns a boxed label occupies, borders included
pub fn box_width(text: &str, left_padding: u16, right_padding: u16) -> usize {
    text.width() + left_padding as usize + right_padding as usize + BOX_BORDER_COLUMNS
}

/// Render the three rows (top, middle, bottom) of a boxed label.
///
/// The middle row uses tee glyphs so the box sits on the strip's rule line.
pub fn render_box(text: &str, left_padding: u16, right_padding: u16, style: BoxStyle) -> [String; 3] {
    let glyphs = style.glyphs();
    let inner = box_width(text, left_padding, right_padding) - BOX_BORDER_COLUMNS;
    let rule = glyphs.horizontal.repeat(inner);

    [
        format!("{}{}{}", glyphs.top_left, rule, glyphs.top_right),
        format!(
            "┤{}{}{}├",
            " ".repeat(left_padding as usize),
            text,
            " ".repeat(right_padding as usize)
        ),
        format!("{}{}{}", glyphs.bottom_left, rule, glyphs.bottom_right),
    ]
}
