use super::actions::{Effects, Event};
use crate::ui::layout::Viewport;

/// One selectable unit of content shown in the body frame.
///
/// The engine never looks inside a page: it initializes it once, forwards
/// events while it is current and asks it for text to draw. Pages that need
/// to mutate the layout (widgets, other pages, their own removal) keep a
/// [`Commander`](super::command_queue::Commander) handle.
pub trait Page: Send {
    fn init(&mut self) -> Effects {
        Vec::new()
    }

    fn update(&mut self, event: &Event) -> Effects;

    /// Render the page for a body area of the given size
    fn render(&self, area: Viewport) -> String;
}
