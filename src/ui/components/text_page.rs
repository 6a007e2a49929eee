use crate::ui::core::{Commander, Effects, Event, Page};
use crate::ui::layout::Viewport;

/// Static text page, vertically centered in the body.
///
/// Optionally publishes a status widget each time it becomes the active page.
pub struct TextPage {
    text: String,
    status: Option<(Commander, String, String)>,
    show_size: bool,
    activations: usize,
}

impl TextPage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: None,
            show_size: false,
            activations: 0,
        }
    }

    /// Publish `key = value` on the widget bar whenever this page is activated
    #[must_use]
    pub fn with_status(mut self, commander: Commander, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.status = Some((commander, key.into(), value.into()));
        self
    }

    /// Append the body size (`| W x H`) to the text
    #[must_use]
    pub fn with_size(mut self) -> Self {
        self.show_size = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// How many times this page has been made active
    pub fn activations(&self) -> usize {
        self.activations
    }

    fn publish_status(&self) {
        if let Some((commander, key, value)) = &self.status {
            commander.upsert_widget(key.clone(), value.clone());
        }
    }
}

impl Page for TextPage {
    fn update(&mut self, event: &Event) -> Effects {
        if let Event::BecameActive = event {
            self.activations += 1;
            self.publish_status();
        }
        Vec::new()
    }

    fn render(&self, area: Viewport) -> String {
        let text_height = self.text.lines().count().max(1);
        let top = (area.height as usize).saturating_sub(text_height) / 2;
        let padding = "\n".repeat(top);
        if self.show_size {
            format!("{}{} | {} x {}", padding, self.text, area.width, area.height)
        } else {
            format!("{}{}", padding, self.text)
        }
    }
}
