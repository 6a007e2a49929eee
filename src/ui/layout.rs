//! Layout management and calculations

use crate::config::PageAlignment;
use crate::constants::{
    DEFAULT_TERMINAL_HEIGHT, DEFAULT_TERMINAL_WIDTH, EMPTY_WIDGET_BAR_HEIGHT, FRAME_BORDER_COLUMNS, HEADER_HEIGHT,
    WIDGET_BAR_HEIGHT,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal size as last reported by a resize event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINAL_WIDTH, DEFAULT_TERMINAL_HEIGHT)
    }
}

/// Manages layout calculations for the composed frame
pub struct LayoutManager;

impl LayoutManager {
    /// Area left for the page between the header and the widget bar
    #[must_use]
    pub fn body_area(viewport: Viewport, has_widgets: bool) -> Viewport {
        let bar_height = if has_widgets {
            WIDGET_BAR_HEIGHT
        } else {
            EMPTY_WIDGET_BAR_HEIGHT
        };
        Viewport::new(
            viewport.width.saturating_sub(FRAME_BORDER_COLUMNS as u16),
            viewport.height.saturating_sub(HEADER_HEIGHT + bar_height),
        )
    }

    /// Fit page text into the body area: exactly `area.height` lines, each
    /// clipped and aligned to `area.width` columns
    #[must_use]
    pub fn fit_body(content: &str, area: Viewport, alignment: PageAlignment) -> Vec<String> {
        let width = area.width as usize;
        let mut lines: Vec<String> = content
            .lines()
            .take(area.height as usize)
            .map(|line| Self::align_line(&Self::clip(line, width), width, alignment))
            .collect();

        while lines.len() < area.height as usize {
            lines.push(" ".repeat(width));
        }
        lines
    }

    /// Pad a line to `width` columns according to the alignment
    #[must_use]
    pub fn align_line(line: &str, width: usize, alignment: PageAlignment) -> String {
        let free = width.saturating_sub(line.width());
        let (left, right) = match alignment {
            PageAlignment::Left => (0, free),
            PageAlignment::Center => (free / 2, free - free / 2),
            PageAlignment::Right => (free, 0),
        };
        format!("{}{}{}", " ".repeat(left), line, " ".repeat(right))
    }

    /// Cut a line to at most `width` display columns
    #[must_use]
    pub fn clip(line: &str, width: usize) -> String {
        if line.width() <= width {
            return line.to_string();
        }

        let mut used = 0;
        let mut clipped = String::new();
        for c in line.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            clipped.push(c);
        }
        clipped
    }
}
