//! Key bindings for the engine's own actions.
//!
//! Bindings are written as `modifier+…+key` strings in the config file
//! (`"ctrl+right"`, `"alt+l"`, `"f2"`) and parsed into crossterm key codes.

use crate::config::KeysConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

/// Logical actions handled by the engine itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    NextTab,
    PrevTab,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyBindingError {
    #[error("empty key spec")]
    Empty,
    #[error("unknown modifier '{modifier}' in key spec '{spec}'")]
    UnknownModifier { spec: String, modifier: String },
    #[error("unknown key '{key}' in key spec '{spec}'")]
    UnknownKey { spec: String, key: String },
}

/// A single key combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Parse a `modifier+…+key` spec
    pub fn parse(spec: &str) -> Result<Self, KeyBindingError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(KeyBindingError::Empty);
        }

        // "ctrl++" binds the plus key itself
        let (mods, key) = match spec.strip_suffix("++") {
            Some(rest) => (rest, "+"),
            None => match spec.rsplit_once('+') {
                Some((mods, key)) => (mods, key),
                None => ("", spec),
            },
        };

        let mut modifiers = KeyModifiers::NONE;
        for modifier in mods.split('+').filter(|m| !m.is_empty()) {
            modifiers |= match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" | "meta" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => {
                    return Err(KeyBindingError::UnknownModifier {
                        spec: spec.to_string(),
                        modifier: modifier.to_string(),
                    })
                }
            };
        }

        let code = parse_key_code(key).ok_or_else(|| KeyBindingError::UnknownKey {
            spec: spec.to_string(),
            key: key.to_string(),
        })?;

        Ok(Self { code, modifiers })
    }

    /// Check whether a key event triggers this binding.
    ///
    /// Shift is ignored for character keys since terminals already report the
    /// shifted character.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        match (self.code, key.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => {
                let ignore = KeyModifiers::SHIFT;
                a == b && (self.modifiers - ignore) == (key.modifiers - ignore)
            }
            (a, b) => a == b && self.modifiers == key.modifiers,
        }
    }
}

fn parse_key_code(key: &str) -> Option<KeyCode> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let lower = key.to_ascii_lowercase();
    let code = match lower.as_str() {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        _ => {
            let n: u8 = lower.strip_prefix('f')?.parse().ok()?;
            if (1..=12).contains(&n) {
                KeyCode::F(n)
            } else {
                return None;
            }
        }
    };
    Some(code)
}

/// Table mapping engine actions to key combinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub next_tab: Vec<KeyBinding>,
    pub prev_tab: Vec<KeyBinding>,
    pub quit: Vec<KeyBinding>,
}

impl KeyBindings {
    pub fn from_config(config: &KeysConfig) -> Result<Self, KeyBindingError> {
        let parse_all = |specs: &[String]| specs.iter().map(|s| KeyBinding::parse(s)).collect::<Result<Vec<_>, _>>();

        Ok(Self {
            next_tab: parse_all(&config.next_tab)?,
            prev_tab: parse_all(&config.prev_tab)?,
            quit: parse_all(&config.quit)?,
        })
    }

    /// Resolve a key event to an engine action. Quit wins over tab switching
    /// when the same key is bound twice.
    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        let hit = |bindings: &[KeyBinding]| bindings.iter().any(|b| b.matches(key));

        if hit(&self.quit) {
            Some(KeyAction::Quit)
        } else if hit(&self.next_tab) {
            Some(KeyAction::NextTab)
        } else if hit(&self.prev_tab) {
            Some(KeyAction::PrevTab)
        } else {
            None
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            next_tab: vec![KeyBinding::new(KeyCode::Right, KeyModifiers::CONTROL)],
            prev_tab: vec![KeyBinding::new(KeyCode::Left, KeyModifiers::CONTROL)],
            quit: vec![KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL)],
        }
    }
}
