//! Core UI functionality for the Tabframe engine.
//!
//! This module contains the fundamental building blocks shared by the engine
//! and the host loop: event and command types, the page abstraction, the
//! command queue, key bindings and terminal input handling.
//!
//! # Module Components
//!
//! - [`actions`] - Events, structural commands and effects
//! - [`component`] - The [`Page`] trait implemented by content pages
//! - [`command_queue`] - Multi-producer command queue and its [`Commander`] handle
//! - [`event_handler`] - Terminal input reader feeding the async loop
//! - [`keymap`] - Key bindings for quitting and switching tabs
//!
//! # Architecture
//!
//! 1. **Pages** implement [`Page`] and stay opaque to the engine
//! 2. **Commands** are the only way to mutate tabs and widgets from outside
//!    the update loop
//! 3. **Effects** tell the host what to do next (re-arm, quit, dispatch)
//! 4. **Input** is read on a blocking thread by the [`EventHandler`]

// Core UI modules
pub mod actions;
pub mod command_queue;
pub mod component;
pub mod event_handler;
pub mod keymap;

// Re-export core types for easier access from other modules
pub use actions::{Command, Effect, Effects, Event, Strip};
pub use command_queue::{CommandQueue, Commander};
pub use component::Page;
pub use event_handler::EventHandler;
pub use keymap::{KeyAction, KeyBinding, KeyBindingError, KeyBindings};
