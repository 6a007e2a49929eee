//! Reusable UI components

pub mod header;
pub mod tab_box;
pub mod text_page;
pub mod widget_bar;

// Component exports
pub use header::{Header, TabDescriptor};
pub use text_page::TextPage;
pub use widget_bar::{WidgetBar, WidgetEntry};
