//! UI module for Tabframe
//!
//! This module owns the layout engine, its components and the terminal loop.

pub mod components;
pub mod core;
pub mod engine;
pub mod host;
pub mod layout;
pub mod renderer;

pub use engine::{Engine, EngineError};
pub use host::Host;
pub use layout::{LayoutManager, Viewport};
pub use renderer::run_app;
