//! Status strip of key/value widgets shown below the page body.

use super::tab_box::{box_width, render_box, single_line, BoxStyle};
use crate::config::WidgetsConfig;
use crate::constants::FRAME_BORDER_COLUMNS;
use crate::ui::core::actions::Strip;
use crate::ui::core::command_queue::Commander;
use crate::ui::layout::Viewport;

/// A keyed status entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetEntry {
    pub key: String,
    pub value: String,
}

/// Insertion-ordered widget set with its own fit predicate
#[derive(Debug)]
pub struct WidgetBar {
    widgets: Vec<WidgetEntry>,
    left_padding: u16,
    right_padding: u16,
    width: u16,
    widgets_width: usize,
    fits: bool,
    reported: Option<bool>,
    commander: Commander,
}

impl WidgetBar {
    pub fn new(config: &WidgetsConfig, viewport: Viewport, commander: Commander) -> Self {
        Self {
            widgets: Vec::new(),
            left_padding: config.left_padding,
            right_padding: config.right_padding,
            width: viewport.width,
            widgets_width: 0,
            fits: true,
            reported: None,
            commander,
        }
    }

    pub fn init(&mut self) {
        self.recompute_fit();
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.width = viewport.width;
        self.recompute_fit();
    }

    /// Append a widget unless the key exists
    pub fn add(&mut self, key: &str, value: &str) -> bool {
        if self.get(key).is_some() {
            return false;
        }

        self.widgets.push(WidgetEntry {
            key: key.to_string(),
            value: single_line(value),
        });
        self.recompute_fit();
        true
    }

    /// Insert, or overwrite the value in place keeping the render position
    pub fn upsert(&mut self, key: &str, value: &str) {
        match self.widgets.iter_mut().find(|w| w.key == key) {
            Some(widget) => widget.value = single_line(value),
            None => self.widgets.push(WidgetEntry {
                key: key.to_string(),
                value: single_line(value),
            }),
        }
        self.recompute_fit();
    }

    pub fn remove(&mut self, key: &str) -> bool {
        let Some(index) = self.widgets.iter().position(|w| w.key == key) else {
            return false;
        };

        self.widgets.remove(index);
        self.recompute_fit();
        true
    }

    pub fn clear(&mut self) {
        self.widgets.clear();
        self.recompute_fit();
    }

    pub fn get(&self, key: &str) -> Option<&WidgetEntry> {
        self.widgets.iter().find(|w| w.key == key)
    }

    pub fn widgets(&self) -> &[WidgetEntry] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Change the box paddings and recompute the fit
    pub fn set_paddings(&mut self, left: u16, right: u16) {
        self.left_padding = left;
        self.right_padding = right;
        self.recompute_fit();
    }

    pub fn paddings(&self) -> (u16, u16) {
        (self.left_padding, self.right_padding)
    }

    pub fn fits(&self) -> bool {
        self.fits
    }

    fn recompute_fit(&mut self) {
        self.widgets_width = self
            .widgets
            .iter()
            .map(|w| box_width(&w.value, self.left_padding, self.right_padding))
            .sum();
        self.fits = self.widgets_width + FRAME_BORDER_COLUMNS <= self.width as usize;

        if self.reported != Some(self.fits) {
            self.reported = Some(self.fits);
            self.commander.report_size(Strip::Widgets, self.fits);
        }
    }

    /// Render the bottom frame with the widgets right-aligned on it
    pub fn render(&self) -> String {
        if !self.fits {
            return String::new();
        }

        let line_len = self.width as usize - (self.widgets_width + FRAME_BORDER_COLUMNS);

        if self.widgets.is_empty() {
            return format!("│{}│\n╰{}╯", " ".repeat(line_len), "─".repeat(line_len));
        }

        let mut rows = [
            format!("│{}", " ".repeat(line_len)),
            format!("╰{}", "─".repeat(line_len)),
            " ".repeat(line_len + 1),
        ];

        for widget in &self.widgets {
            let parts = render_box(&widget.value, self.left_padding, self.right_padding, BoxStyle::Inactive);
            for (row, part) in rows.iter_mut().zip(parts) {
                row.push_str(&part);
            }
        }

        rows[0].push('│');
        rows[1].push('╯');
        rows[2].push(' ');

        rows.join("\n")
    }
}
