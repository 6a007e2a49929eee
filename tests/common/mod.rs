#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, Mutex};
use tabframe::config::Config;
use tabframe::ui::components::TextPage;
use tabframe::ui::core::{Effects, Event, Page};
use tabframe::ui::layout::Viewport;
use tabframe::{Engine, Host};

/// What a probe page has seen so far
#[derive(Debug, Default)]
pub struct ProbeLog {
    pub inits: usize,
    pub activations: usize,
    pub keys: Vec<KeyCode>,
    pub resizes: usize,
}

/// Page that records the events it receives
pub struct ProbePage {
    name: String,
    log: Arc<Mutex<ProbeLog>>,
}

impl Page for ProbePage {
    fn init(&mut self) -> Effects {
        self.log.lock().unwrap().inits += 1;
        Vec::new()
    }

    fn update(&mut self, event: &Event) -> Effects {
        let mut log = self.log.lock().unwrap();
        match event {
            Event::BecameActive => log.activations += 1,
            Event::Key(key) => log.keys.push(key.code),
            Event::Resize { .. } => log.resizes += 1,
            _ => {}
        }
        Vec::new()
    }

    fn render(&self, area: Viewport) -> String {
        format!("{} {}x{}", self.name, area.width, area.height)
    }
}

pub fn probe(name: &str) -> (ProbePage, Arc<Mutex<ProbeLog>>) {
    let log = Arc::new(Mutex::new(ProbeLog::default()));
    (
        ProbePage {
            name: name.to_string(),
            log: Arc::clone(&log),
        },
        log,
    )
}

/// Started host with one text page per key (title == key), not yet resized
pub fn started_host_with_config(keys: &[&str], config: &Config) -> Host {
    let mut engine = Engine::new(config).unwrap();
    for key in keys {
        engine.add_page(*key, *key, TextPage::new(*key));
    }
    let mut host = Host::new(engine);
    host.start().unwrap();
    host.drain_ready();
    host
}

pub fn started_host(keys: &[&str]) -> Host {
    started_host_with_config(keys, &Config::default())
}

/// Started host that already received a resize
pub fn ready_host(keys: &[&str], width: u16, height: u16) -> Host {
    let mut host = started_host(keys);
    resize(&mut host, width, height);
    host
}

pub fn resize(host: &mut Host, width: u16, height: u16) {
    host.dispatch(Event::Resize { width, height });
    host.drain_ready();
}

pub fn press(host: &mut Host, code: KeyCode, modifiers: KeyModifiers) {
    host.dispatch(Event::Key(KeyEvent::new(code, modifiers)));
    host.drain_ready();
}

pub fn next_tab(host: &mut Host) {
    press(host, KeyCode::Right, KeyModifiers::CONTROL);
}

pub fn prev_tab(host: &mut Host) {
    press(host, KeyCode::Left, KeyModifiers::CONTROL);
}

pub fn tab_keys(host: &Host) -> Vec<String> {
    host.engine().header().tabs().iter().map(|t| t.key.clone()).collect()
}

pub fn widget_keys(host: &Host) -> Vec<String> {
    host.engine().widgets().widgets().iter().map(|w| w.key.clone()).collect()
}
