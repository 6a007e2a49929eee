//! Tabframe - a tabbed terminal layout engine
//!
//! This library owns a tabbed page area, a header strip showing the tab
//! titles and a bottom strip of key/value widgets, and keeps them consistent
//! while the terminal is resized and pages or widgets come and go at runtime.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`constants`] - Placeholder texts and layout measurements
//! * [`logger`] - File logging setup
//! * [`ui`] - Engine, components and the terminal loop

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup for debugging without touching the terminal
pub mod logger;

/// Layout engine, components and rendering
pub mod ui;

pub use ui::core::{Command, Commander, Effect, Event, Page};
pub use ui::{Engine, EngineError, Host};
