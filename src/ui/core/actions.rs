use super::component::Page;
use crate::config::PageAlignment;
use crossterm::event::KeyEvent;
use std::fmt;

/// Which strip a size report refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strip {
    Header,
    Widgets,
}

/// Structural mutation requests funneled through the command queue
pub enum Command {
    // Page operations
    AddPage {
        key: String,
        title: String,
        page: Box<dyn Page>,
    },
    RenamePage {
        key: String,
        title: String,
    },
    DeletePage {
        key: String,
    },
    SetActivePage {
        key: String,
    },
    LockTabs(bool),

    // Widget operations
    AddWidget {
        key: String,
        value: String,
    },
    UpsertWidget {
        key: String,
        value: String,
    },
    DeleteWidget {
        key: String,
    },
    ClearWidgets,

    // Layout settings
    SetPaddings {
        strip: Strip,
        left: u16,
        right: u16,
    },
    SetPageAlignment(PageAlignment),

    // Fit predicate changes reported by the strips
    SizeReport {
        strip: Strip,
        fits: bool,
    },

    /// No mutation, only forces another update and render
    Refresh,
}

impl Command {
    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddPage { .. } => "AddPage",
            Command::RenamePage { .. } => "RenamePage",
            Command::DeletePage { .. } => "DeletePage",
            Command::SetActivePage { .. } => "SetActivePage",
            Command::LockTabs(_) => "LockTabs",
            Command::AddWidget { .. } => "AddWidget",
            Command::UpsertWidget { .. } => "UpsertWidget",
            Command::DeleteWidget { .. } => "DeleteWidget",
            Command::ClearWidgets => "ClearWidgets",
            Command::SetPaddings { .. } => "SetPaddings",
            Command::SetPageAlignment(_) => "SetPageAlignment",
            Command::SizeReport { .. } => "SizeReport",
            Command::Refresh => "Refresh",
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AddPage { key, title, .. } => f
                .debug_struct("AddPage")
                .field("key", key)
                .field("title", title)
                .finish_non_exhaustive(),
            Command::RenamePage { key, title } => f
                .debug_struct("RenamePage")
                .field("key", key)
                .field("title", title)
                .finish(),
            Command::DeletePage { key } => f.debug_struct("DeletePage").field("key", key).finish(),
            Command::SetActivePage { key } => f.debug_struct("SetActivePage").field("key", key).finish(),
            Command::LockTabs(lock) => f.debug_tuple("LockTabs").field(lock).finish(),
            Command::AddWidget { key, value } => f
                .debug_struct("AddWidget")
                .field("key", key)
                .field("value", value)
                .finish(),
            Command::UpsertWidget { key, value } => f
                .debug_struct("UpsertWidget")
                .field("key", key)
                .field("value", value)
                .finish(),
            Command::DeleteWidget { key } => f.debug_struct("DeleteWidget").field("key", key).finish(),
            Command::ClearWidgets => f.write_str("ClearWidgets"),
            Command::SetPaddings { strip, left, right } => f
                .debug_struct("SetPaddings")
                .field("strip", strip)
                .field("left", left)
                .field("right", right)
                .finish(),
            Command::SetPageAlignment(alignment) => f.debug_tuple("SetPageAlignment").field(alignment).finish(),
            Command::SizeReport { strip, fits } => f
                .debug_struct("SizeReport")
                .field("strip", strip)
                .field("fits", fits)
                .finish(),
            Command::Refresh => f.write_str("Refresh"),
        }
    }
}

/// Everything the engine's update loop reacts to
#[derive(Debug)]
pub enum Event {
    Resize { width: u16, height: u16 },
    Key(KeyEvent),
    /// A command drained from the queue
    Command(Command),
    /// Sent to a page right after it became the current page
    BecameActive,
    Tick,
    Other,
}

/// Follow-up work returned to the host loop
#[derive(Debug)]
pub enum Effect {
    /// Re-arm the command listener so the next queued command gets drained
    Listen,
    /// Stop the host loop
    Quit,
    /// Feed an event back into the update loop
    Dispatch(Event),
}

/// Effect list returned by `init` and `update` calls
pub type Effects = Vec<Effect>;
