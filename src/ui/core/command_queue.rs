use super::actions::{Command, Strip};
use super::component::Page;
use crate::config::PageAlignment;
use tokio::sync::mpsc;

/// Cloneable, non-blocking handle for queueing layout mutations.
///
/// Safe to use from any thread or task. Sending never fails from the caller's
/// point of view: conflicts (duplicate keys, unknown keys, deleting the last
/// page) are absorbed when the engine applies the command.
#[derive(Debug, Clone)]
pub struct Commander {
    command_sender: mpsc::UnboundedSender<Command>,
}

impl Commander {
    /// Queue a raw command
    pub fn send(&self, command: Command) {
        if let Err(e) = self.command_sender.send(command) {
            log::debug!("Command {} dropped, engine is gone", e.0.name());
        }
    }

    pub fn add_page(&self, key: impl Into<String>, title: impl Into<String>, page: impl Page + 'static) {
        self.send(Command::AddPage {
            key: key.into(),
            title: title.into(),
            page: Box::new(page),
        });
    }

    pub fn rename_page(&self, key: impl Into<String>, title: impl Into<String>) {
        self.send(Command::RenamePage {
            key: key.into(),
            title: title.into(),
        });
    }

    pub fn delete_page(&self, key: impl Into<String>) {
        self.send(Command::DeletePage { key: key.into() });
    }

    pub fn set_active_page(&self, key: impl Into<String>) {
        self.send(Command::SetActivePage { key: key.into() });
    }

    pub fn lock_tabs(&self) {
        self.send(Command::LockTabs(true));
    }

    pub fn unlock_tabs(&self) {
        self.send(Command::LockTabs(false));
    }

    pub fn add_widget(&self, key: impl Into<String>, value: impl Into<String>) {
        self.send(Command::AddWidget {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Add the widget, or overwrite its value in place when the key exists
    pub fn upsert_widget(&self, key: impl Into<String>, value: impl Into<String>) {
        self.send(Command::UpsertWidget {
            key: key.into(),
            value: value.into(),
        });
    }

    pub fn delete_widget(&self, key: impl Into<String>) {
        self.send(Command::DeleteWidget { key: key.into() });
    }

    pub fn clear_widgets(&self) {
        self.send(Command::ClearWidgets);
    }

    /// Paddings above the configured maximum are clamped when applied
    pub fn set_tab_paddings(&self, left: u16, right: u16) {
        self.send(Command::SetPaddings {
            strip: Strip::Header,
            left,
            right,
        });
    }

    pub fn set_widget_paddings(&self, left: u16, right: u16) {
        self.send(Command::SetPaddings {
            strip: Strip::Widgets,
            left,
            right,
        });
    }

    pub fn set_page_alignment(&self, alignment: PageAlignment) {
        self.send(Command::SetPageAlignment(alignment));
    }

    pub fn refresh(&self) {
        self.send(Command::Refresh);
    }

    pub(crate) fn report_size(&self, strip: Strip, fits: bool) {
        self.send(Command::SizeReport { strip, fits });
    }
}

/// Multi-producer, single-consumer queue of structural commands.
///
/// The consumer side follows a drain-then-rearm contract: the listener must
/// be armed before a command can be drained, and draining disarms it. The
/// engine hands back an `Effect::Listen` after every applied command; if that
/// effect is lost the queue stalls.
#[derive(Debug)]
pub struct CommandQueue {
    command_sender: mpsc::UnboundedSender<Command>,
    command_receiver: mpsc::UnboundedReceiver<Command>,
    armed: bool,
}

impl CommandQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            command_sender: tx,
            command_receiver: rx,
            armed: false,
        }
    }

    /// Create a new producer handle
    pub fn commander(&self) -> Commander {
        Commander {
            command_sender: self.command_sender.clone(),
        }
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Wait for the next command.
    ///
    /// Returns `None` right away when the listener is not armed. Cancel safe:
    /// dropping the future before a command arrives keeps the listener armed.
    pub async fn drain_next(&mut self) -> Option<Command> {
        if !self.armed {
            return None;
        }
        let command = self.command_receiver.recv().await?;
        self.armed = false;
        Some(command)
    }

    /// Take the next command if one is already queued and the listener is armed
    pub fn try_drain_next(&mut self) -> Option<Command> {
        if !self.armed {
            return None;
        }
        let command = self.command_receiver.try_recv().ok()?;
        self.armed = false;
        Some(command)
    }

    /// Number of commands waiting to be drained
    pub fn pending(&self) -> usize {
        self.command_receiver.len()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}
