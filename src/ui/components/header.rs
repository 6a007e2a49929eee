//! Tab strip shown above the page body.

use super::tab_box::{box_width, render_box, single_line, BoxStyle};
use crate::config::HeaderConfig;
use crate::constants::FRAME_BORDER_COLUMNS;
use crate::ui::core::actions::Strip;
use crate::ui::core::command_queue::Commander;
use crate::ui::core::keymap::KeyAction;
use crate::ui::layout::Viewport;

/// Key and title of one tab, parallel in index to the engine's pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor {
    pub key: String,
    pub title: String,
}

/// Owns the tab descriptors, the current index, the lock flag and the fit
/// predicate of the tab strip.
///
/// Every change to the tab set or the width recomputes the predicate; a
/// changed result is reported to the engine as a `SizeReport` command.
#[derive(Debug)]
pub struct Header {
    tabs: Vec<TabDescriptor>,
    current: usize,
    locked: bool,
    left_padding: u16,
    right_padding: u16,
    width: u16,
    titles_width: usize,
    fits: bool,
    reported: Option<bool>,
    commander: Commander,
}

impl Header {
    pub fn new(config: &HeaderConfig, viewport: Viewport, commander: Commander) -> Self {
        Self {
            tabs: Vec::new(),
            current: 0,
            locked: config.lock_tabs,
            left_padding: config.tab_left_padding,
            right_padding: config.tab_right_padding,
            width: viewport.width,
            titles_width: 0,
            fits: true,
            reported: None,
            commander,
        }
    }

    /// Compute and report the initial fit
    pub fn init(&mut self) {
        self.recompute_fit();
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.width = viewport.width;
        self.recompute_fit();
    }

    /// Append a tab. Returns `false` and changes nothing when the key exists.
    pub fn add_tab(&mut self, key: &str, title: &str) -> bool {
        if self.position(key).is_some() {
            return false;
        }

        self.tabs.push(TabDescriptor {
            key: key.to_string(),
            title: single_line(title),
        });
        self.recompute_fit();
        true
    }

    pub fn rename_tab(&mut self, key: &str, title: &str) -> bool {
        let Some(index) = self.position(key) else {
            return false;
        };

        self.tabs[index].title = single_line(title);
        self.recompute_fit();
        true
    }

    /// Remove a tab and return the index it had.
    ///
    /// Removing the current tab resets the current index to 0; removing a tab
    /// before it shifts the index so the same tab stays current.
    pub fn remove_tab(&mut self, key: &str) -> Option<usize> {
        let index = self.position(key)?;
        self.tabs.remove(index);

        if index == self.current {
            self.current = 0;
        } else if index < self.current {
            self.current -= 1;
        }

        self.recompute_fit();
        Some(index)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.key == key)
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Select a tab by index, clamped to the tab range
    pub fn set_current(&mut self, index: usize) {
        self.current = index.min(self.tabs.len().saturating_sub(1));
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_key(&self) -> Option<&str> {
        self.tabs.get(self.current).map(|tab| tab.key.as_str())
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Move the current tab one step. No wraparound; ignored while locked.
    /// Returns whether the current index changed.
    pub fn handle_input(&mut self, action: KeyAction) -> bool {
        if self.locked {
            return false;
        }

        let before = self.current;
        match action {
            KeyAction::NextTab => self.set_current(self.current + 1),
            KeyAction::PrevTab => self.set_current(self.current.saturating_sub(1)),
            KeyAction::Quit => {}
        }
        self.current != before
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

    /// Columns taken by all tab boxes
    pub fn titles_width(&self) -> usize {
        self.titles_width
    }

    fn recompute_fit(&mut self) {
        self.titles_width = self
            .tabs
            .iter()
            .map(|tab| box_width(&tab.title, self.left_padding, self.right_padding))
            .sum();
        self.fits = self.titles_width + FRAME_BORDER_COLUMNS <= self.width as usize;

        if self.reported != Some(self.fits) {
            self.reported = Some(self.fits);
            self.commander.report_size(Strip::Header, self.fits);
        }
    }

    /// Render the three-row strip, or an empty string when it does not fit
    pub fn render(&self) -> String {
        if !self.fits {
            return String::new();
        }

        let line_len = self.width as usize - (self.titles_width + FRAME_BORDER_COLUMNS);
        let mut rows = [" ".to_string(), "╭".to_string(), "│".to_string()];

        for (i, tab) in self.tabs.iter().enumerate() {
            let style = if i == self.current {
                BoxStyle::Active
            } else if self.locked {
                BoxStyle::Disabled
            } else {
                BoxStyle::Inactive
            };

            let parts = render_box(&tab.title, self.left_padding, self.right_padding, style);
            for (row, part) in rows.iter_mut().zip(parts) {
                row.push_str(&part);
            }
        }

        rows[0].push_str(&" ".repeat(line_len + 1));
        rows[1].push_str(&"─".repeat(line_len));
        rows[1].push('╮');
        rows[2].push_str(&" ".repeat(line_len));
        rows[2].push('│');

        rows.join("\n")
    }
}
