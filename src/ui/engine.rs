//! The layout engine: header, pages, widget bar and the command queue that
//! mutates them.

use crate::config::{Config, PageAlignment};
use crate::constants::{MAX_PADDING, MSG_HEADERS_TOO_SMALL, MSG_SETTING_UP_TERMINAL, MSG_WIDGETS_TOO_SMALL};
use crate::ui::components::{Header, WidgetBar};
use crate::ui::core::{
    actions::{Command, Effect, Effects, Event, Strip},
    command_queue::{CommandQueue, Commander},
    component::Page,
    keymap::{KeyAction, KeyBindingError, KeyBindings},
};
use crate::ui::layout::{LayoutManager, Viewport};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no pages added, add at least one page before init")]
    NoPages,
    #[error(transparent)]
    KeyBinding(#[from] KeyBindingError),
}

/// Composes the viewport, header, widget bar and pages.
///
/// The engine is the only writer of layout state. Other code mutates it by
/// queueing commands through a [`Commander`]; the host loop drains them one at
/// a time and feeds them back through [`Engine::update`].
pub struct Engine {
    // Settings
    bindings: KeyBindings,
    alignment: PageAlignment,
    clear_widgets_on_activation: bool,

    // Terminal state
    viewport: Viewport,
    ready: bool,
    header_fits: bool,
    widgets_fit: bool,

    // Component composition
    header: Header,
    widgets: WidgetBar,
    pages: Vec<Box<dyn Page>>,

    queue: CommandQueue,
    initialized: bool,
}

impl Engine {
    pub fn new(config: &Config) -> Result<Self, EngineError> {
        let bindings = KeyBindings::from_config(&config.keys)?;
        let queue = CommandQueue::new();
        let viewport = Viewport::default();

        Ok(Self {
            bindings,
            alignment: config.layout.page_alignment,
            clear_widgets_on_activation: config.widgets.clear_on_activation,
            viewport,
            ready: false,
            header_fits: true,
            widgets_fit: true,
            header: Header::new(&config.header, viewport, queue.commander()),
            widgets: WidgetBar::new(&config.widgets, viewport, queue.commander()),
            pages: Vec::new(),
            queue,
            initialized: false,
        })
    }

    /// Handle for queueing mutations from anywhere
    pub fn commander(&self) -> Commander {
        self.queue.commander()
    }

    /// Register a page.
    ///
    /// Before `init` the page is added right away and initialized by `init`.
    /// Afterwards it goes through the command queue like any other mutation.
    pub fn add_page(&mut self, key: impl Into<String>, title: impl Into<String>, page: impl Page + 'static) {
        let (key, title) = (key.into(), title.into());

        if self.initialized {
            self.queue.commander().add_page(key, title, page);
            return;
        }

        if self.header.add_tab(&key, &title) {
            self.pages.push(Box::new(page));
        } else {
            log::debug!("Page '{}' already exists, ignoring", key);
        }
    }

    /// Start the engine: arm the listener, compute both fit predicates,
    /// initialize the registered pages and activate the first one.
    ///
    /// Fails when no page was added; running without pages is a programming
    /// error on the host side.
    pub fn init(&mut self) -> Result<Effects, EngineError> {
        if self.pages.is_empty() {
            return Err(EngineError::NoPages);
        }

        self.initialized = true;
        self.header.init();
        self.widgets.init();

        let mut effects = vec![Effect::Listen];
        for page in &mut self.pages {
            effects.extend(page.init());
        }
        effects.extend(self.activate_current());

        log::info!("Engine initialized with {} pages", self.pages.len());
        Ok(effects)
    }

    /// Re-arm the command listener
    pub fn listen(&mut self) {
        self.queue.arm();
    }

    pub fn is_listening(&self) -> bool {
        self.queue.is_armed()
    }

    /// Wait for the next queued command. `None` while the listener is not armed.
    pub async fn drain_next(&mut self) -> Option<Command> {
        self.queue.drain_next().await
    }

    /// Take the next queued command without waiting
    pub fn try_drain_next(&mut self) -> Option<Command> {
        self.queue.try_drain_next()
    }

    pub fn pending_commands(&self) -> usize {
        self.queue.pending()
    }

    /// Process one event and return the follow-up effects
    pub fn update(&mut self, event: Event) -> Effects {
        match event {
            Event::Resize { width, height } => {
                if !self.ready && width > 0 && height > 0 {
                    self.ready = true;
                    log::info!("Terminal ready at {}x{}", width, height);
                }
                self.viewport = Viewport::new(width, height);
                self.header.resize(self.viewport);
                self.widgets.resize(self.viewport);
                self.forward(&Event::Resize { width, height })
            }
            Event::Key(key) => match self.bindings.resolve(&key) {
                Some(KeyAction::Quit) => {
                    log::info!("Quit requested");
                    vec![Effect::Quit]
                }
                Some(action) => {
                    let mut effects = Vec::new();
                    if self.header.handle_input(action) {
                        effects.extend(self.activate_current());
                    }
                    effects.push(Effect::Listen);
                    effects
                }
                None => self.forward(&Event::Key(key)),
            },
            Event::Command(command) => self.apply(command),
            event => self.forward(&event),
        }
    }

    /// Header and widget bar only react to resizes and commands, so anything
    /// else goes straight to the current page.
    fn forward(&mut self, event: &Event) -> Effects {
        let current = self.header.current();
        let mut effects = match self.pages.get_mut(current) {
            Some(page) => page.update(event),
            None => Vec::new(),
        };
        effects.push(Effect::Listen);
        effects
    }

    fn apply(&mut self, command: Command) -> Effects {
        log::debug!("Applying {:?}", command);
        let mut effects = Vec::new();

        match command {
            Command::AddPage { key, title, mut page } => {
                if self.header.add_tab(&key, &title) {
                    effects.extend(page.init());
                    self.pages.push(page);
                } else {
                    log::debug!("Page '{}' already exists, ignoring", key);
                }
            }
            Command::RenamePage { key, title } => {
                if !self.header.rename_tab(&key, &title) {
                    log::debug!("No page '{}' to rename", key);
                }
            }
            Command::DeletePage { key } => effects.extend(self.delete_page(&key)),
            Command::SetActivePage { key } => match self.header.position(&key) {
                Some(index) if index != self.header.current() => {
                    self.header.set_current(index);
                    effects.extend(self.activate_current());
                }
                Some(_) => {}
                None => log::debug!("No page '{}' to activate", key),
            },
            Command::LockTabs(locked) => self.header.set_locked(locked),
            Command::SetPaddings { strip, left, right } => {
                let (left, right) = (clamp_padding(left), clamp_padding(right));
                match strip {
                    Strip::Header => self.header.set_paddings(left, right),
                    Strip::Widgets => self.widgets.set_paddings(left, right),
                }
            }
            Command::SetPageAlignment(alignment) => self.alignment = alignment,
            Command::AddWidget { key, value } => {
                if !self.widgets.add(&key, &value) {
                    log::debug!("Widget '{}' already exists, ignoring", key);
                }
            }
            Command::UpsertWidget { key, value } => self.widgets.upsert(&key, &value),
            Command::DeleteWidget { key } => {
                if !self.widgets.remove(&key) {
                    log::debug!("No widget '{}' to delete", key);
                }
            }
            Command::ClearWidgets => self.widgets.clear(),
            Command::SizeReport { strip, fits } => match strip {
                Strip::Header => self.header_fits = fits,
                Strip::Widgets => self.widgets_fit = fits,
            },
            Command::Refresh => {}
        }

        effects.push(Effect::Listen);
        effects
    }

    fn delete_page(&mut self, key: &str) -> Effects {
        if self.pages.len() <= 1 {
            log::warn!("Refusing to delete page '{}', at least one page must remain", key);
            return Vec::new();
        }

        let was_current = self.header.current_key() == Some(key);
        let Some(index) = self.header.remove_tab(key) else {
            log::debug!("No page '{}' to delete", key);
            return Vec::new();
        };
        self.pages.remove(index);

        if was_current {
            self.activate_current()
        } else {
            Vec::new()
        }
    }

    fn activate_current(&mut self) -> Effects {
        if self.clear_widgets_on_activation {
            self.widgets.clear();
        }
        log::debug!("Page '{}' became active", self.header.current_key().unwrap_or_default());
        vec![Effect::Dispatch(Event::BecameActive)]
    }

    /// Compose the full frame
    pub fn render(&self) -> String {
        if !self.ready {
            return MSG_SETTING_UP_TERMINAL.to_string();
        }
        // A strip's own predicate flips before its SizeReport is drained
        if !self.header_fits || !self.header.fits() {
            return MSG_HEADERS_TOO_SMALL.to_string();
        }
        if !self.widgets_fit || !self.widgets.fits() {
            return MSG_WIDGETS_TOO_SMALL.to_string();
        }

        let area = LayoutManager::body_area(self.viewport, !self.widgets.is_empty());
        let content = self
            .pages
            .get(self.header.current())
            .map(|page| page.render(area))
            .unwrap_or_default();

        let mut frame = vec![self.header.render()];
        frame.extend(
            LayoutManager::fit_body(&content, area, self.alignment)
                .into_iter()
                .map(|line| format!("│{}│", line)),
        );
        frame.push(self.widgets.render());
        frame.join("\n")
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn terminal_width(&self) -> u16 {
        self.viewport.width
    }

    pub fn terminal_height(&self) -> u16 {
        self.viewport.height
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn widgets(&self) -> &WidgetBar {
        &self.widgets
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_index(&self) -> usize {
        self.header.current()
    }

    /// Key of the current page
    pub fn active_page(&self) -> Option<&str> {
        self.header.current_key()
    }

    pub fn page_alignment(&self) -> PageAlignment {
        self.alignment
    }

    pub fn is_tabs_locked(&self) -> bool {
        self.header.is_locked()
    }

    pub fn header_fits(&self) -> bool {
        self.header_fits
    }

    pub fn widgets_fit(&self) -> bool {
        self.widgets_fit
    }
}

fn clamp_padding(padding: u16) -> u16 {
    if padding > MAX_PADDING {
        log::warn!("Padding {} exceeds {} columns, clamping", padding, MAX_PADDING);
    }
    padding.min(MAX_PADDING)
}
