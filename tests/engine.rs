mod common;

use common::*;
use crossterm::event::{KeyCode, KeyModifiers};
use tabframe::config::{Config, PageAlignment};
use tabframe::constants::{MSG_HEADERS_TOO_SMALL, MSG_SETTING_UP_TERMINAL, MSG_WIDGETS_TOO_SMALL};
use tabframe::ui::components::TextPage;
use tabframe::ui::core::{Commander, Effect, Effects, Event, Page};
use tabframe::ui::layout::Viewport;
use tabframe::{Engine, EngineError, Host};
use unicode_width::UnicodeWidthStr;

#[test]
fn test_init_without_pages_fails() {
    let mut engine = Engine::new(&Config::default()).unwrap();
    assert!(matches!(engine.init(), Err(EngineError::NoPages)));
}

#[test]
fn test_init_returns_listen_and_activation() {
    let mut engine = Engine::new(&Config::default()).unwrap();
    let (page, log) = probe("first");
    engine.add_page("first", "First", page);

    let effects = engine.init().unwrap();
    assert!(effects.iter().any(|e| matches!(e, Effect::Listen)));
    assert!(effects
        .iter()
        .any(|e| matches!(e, Effect::Dispatch(tabframe::Event::BecameActive))));
    assert_eq!(log.lock().unwrap().inits, 1);
}

#[test]
fn test_host_start_runs_startup_effects() {
    let mut engine = Engine::new(&Config::default()).unwrap();
    let (page, log) = probe("first");
    engine.add_page("first", "First", page);
    let mut host = Host::new(engine);
    host.start().unwrap();

    assert!(host.is_listening());
    assert_eq!(log.lock().unwrap().inits, 1);
    assert_eq!(log.lock().unwrap().activations, 1);
}

#[test]
fn test_render_placeholder_until_terminal_ready() {
    let mut host = started_host(&["first"]);
    assert_eq!(host.render(), MSG_SETTING_UP_TERMINAL);

    resize(&mut host, 0, 0);
    assert!(!host.engine().is_ready());
    assert_eq!(host.render(), MSG_SETTING_UP_TERMINAL);

    resize(&mut host, 80, 24);
    assert!(host.engine().is_ready());
    assert_ne!(host.render(), MSG_SETTING_UP_TERMINAL);

    // Ready is permanent
    resize(&mut host, 0, 0);
    assert!(host.engine().is_ready());
}

#[test]
fn test_commands_before_first_resize_are_kept() {
    let mut host = started_host(&["first"]);
    let commander = host.engine().commander();
    commander.add_widget("battery", "Battery %92");
    host.drain_ready();

    assert_eq!(widget_keys(&host), vec!["battery"]);

    resize(&mut host, 80, 24);
    assert!(host.render().contains("Battery %92"));
}

#[test]
fn test_composed_frame_fills_terminal() {
    let mut host = ready_host(&["home"], 20, 8);
    let frame = host.render();
    let lines: Vec<&str> = frame.lines().collect();

    assert_eq!(lines.len(), 8);
    assert!(lines.iter().all(|line| line.width() == 20), "{frame}");
    assert_eq!(lines[4], "│       home       │");
    assert_eq!(lines[7], "╰──────────────────╯");

    host.engine().commander().add_widget("w", "ok");
    host.drain_ready();
    let frame = host.render();
    let lines: Vec<&str> = frame.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines.iter().all(|line| line.width() == 20), "{frame}");
    assert!(lines[6].contains("ok"));
}

#[test]
fn test_narrow_terminal_shows_header_message() {
    // "first" + "second" + "third" with 2+2 padding and borders need 36 columns
    let mut host = ready_host(&["first", "second", "third"], 80, 24);
    assert!(host.engine().header_fits());

    resize(&mut host, 30, 24);
    assert!(!host.engine().header_fits());
    assert_eq!(host.render(), MSG_HEADERS_TOO_SMALL);

    resize(&mut host, 36, 24);
    assert!(host.engine().header_fits());
    assert_ne!(host.render(), MSG_HEADERS_TOO_SMALL);
}

#[test]
fn test_wide_widgets_show_widget_message() {
    let mut host = ready_host(&["first", "second", "third"], 40, 24);
    host.engine().commander().add_widget("long", "x".repeat(50));
    host.drain_ready();

    assert!(host.engine().header_fits());
    assert!(!host.engine().widgets_fit());
    assert_eq!(host.render(), MSG_WIDGETS_TOO_SMALL);

    host.engine().commander().delete_widget("long");
    host.drain_ready();
    assert!(host.engine().widgets_fit());
}

#[test]
fn test_multiline_labels_keep_frame_shape() {
    let mut host = ready_host(&["first", "second"], 40, 10);
    let commander = host.engine().commander();
    commander.rename_page("second", "two\nlines");
    commander.add_widget("w", "a\nb");
    host.drain_ready();

    assert_eq!(host.engine().header().tabs()[1].title, "two lines");
    let frame = host.render();
    let lines: Vec<&str> = frame.lines().collect();
    assert_eq!(lines.len(), 10, "{frame}");
    assert!(lines.iter().all(|line| line.width() == 40), "{frame}");
}

#[test]
fn test_shrink_shows_message_before_report_is_drained() {
    let mut host = ready_host(&["first", "second", "third"], 80, 24);

    host.dispatch(Event::Resize { width: 30, height: 24 });
    assert!(host.engine().header_fits(), "report still queued");
    assert_eq!(host.render(), MSG_HEADERS_TOO_SMALL);

    let mut host = ready_host(&["a"], 80, 24);
    host.engine().commander().add_widget("wide", "x".repeat(30));
    host.drain_ready();

    host.dispatch(Event::Resize { width: 30, height: 24 });
    assert!(host.engine().widgets_fit(), "report still queued");
    assert_eq!(host.render(), MSG_WIDGETS_TOO_SMALL);
}

#[test]
fn test_runtime_paddings_recompute_fit() {
    let mut host = ready_host(&["first", "second", "third"], 40, 24);
    let commander = host.engine().commander();
    assert!(host.engine().header_fits());

    commander.set_tab_paddings(4, 4);
    host.drain_ready();
    assert!(!host.engine().header_fits());
    assert_eq!(host.render(), MSG_HEADERS_TOO_SMALL);

    commander.set_tab_paddings(100, 100);
    host.drain_ready();
    assert_eq!(host.engine().header().paddings(), (16, 16));

    commander.set_tab_paddings(0, 0);
    commander.add_widget("w", "ok");
    commander.set_widget_paddings(1, 0);
    host.drain_ready();
    assert!(host.engine().header_fits());
    assert_eq!(host.engine().widgets().paddings(), (1, 0));
    assert!(host.render().contains("┤ ok├"));
}

#[test]
fn test_runtime_page_alignment() {
    let mut host = ready_host(&["home"], 20, 8);
    host.engine().commander().set_page_alignment(PageAlignment::Left);
    host.drain_ready();

    assert_eq!(host.engine().page_alignment(), PageAlignment::Left);
    let frame = host.render();
    let lines: Vec<&str> = frame.lines().collect();
    assert_eq!(lines[4], "│home              │");
}

#[test]
fn test_tab_switching_is_clamped() {
    let mut host = ready_host(&["first", "second", "third"], 80, 24);

    prev_tab(&mut host);
    assert_eq!(host.engine().current_index(), 0);

    next_tab(&mut host);
    next_tab(&mut host);
    assert_eq!(host.engine().active_page(), Some("third"));

    next_tab(&mut host);
    assert_eq!(host.engine().current_index(), 2);
}

#[test]
fn test_locked_tabs_ignore_switch_keys() {
    let mut host = ready_host(&["first", "second"], 80, 24);
    let commander = host.engine().commander();

    commander.lock_tabs();
    host.drain_ready();
    assert!(host.engine().is_tabs_locked());

    next_tab(&mut host);
    assert_eq!(host.engine().current_index(), 0);

    commander.unlock_tabs();
    host.drain_ready();
    next_tab(&mut host);
    assert_eq!(host.engine().current_index(), 1);
}

#[test]
fn test_switching_notifies_new_page() {
    let mut engine = Engine::new(&Config::default()).unwrap();
    let (first, first_log) = probe("first");
    let (second, second_log) = probe("second");
    engine.add_page("first", "First", first);
    engine.add_page("second", "Second", second);
    let mut host = Host::new(engine);
    host.start().unwrap();
    resize(&mut host, 80, 24);

    next_tab(&mut host);
    assert_eq!(second_log.lock().unwrap().activations, 1);

    // Already at the last tab, nothing changes
    next_tab(&mut host);
    assert_eq!(second_log.lock().unwrap().activations, 1);

    // Plain keys reach the current page only
    press(&mut host, KeyCode::Char('x'), KeyModifiers::NONE);
    assert_eq!(second_log.lock().unwrap().keys, vec![KeyCode::Char('x')]);
    assert!(first_log.lock().unwrap().keys.is_empty());
}

#[test]
fn test_quit_key_stops_host() {
    let mut host = ready_host(&["first"], 80, 24);
    press(&mut host, KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(host.should_quit());
}

#[test]
fn test_add_page_through_queue() {
    let mut host = ready_host(&["first"], 80, 24);
    let (page, log) = probe("later");
    host.engine().commander().add_page("later", "Later", page);
    host.drain_ready();

    assert_eq!(tab_keys(&host), vec!["first", "later"]);
    assert_eq!(host.engine().page_count(), 2);
    assert_eq!(log.lock().unwrap().inits, 1);
}

#[test]
fn test_add_page_after_init_goes_through_queue() {
    let mut host = ready_host(&["first"], 80, 24);
    host.engine_mut().add_page("second", "Second", TextPage::new("second"));
    assert_eq!(host.engine().page_count(), 1);

    host.drain_ready();
    assert_eq!(host.engine().page_count(), 2);
}

#[test]
fn test_duplicate_page_key_is_ignored() {
    let mut host = ready_host(&["first", "second"], 80, 24);
    host.engine().commander().add_page("first", "Other", TextPage::new("other"));
    host.drain_ready();

    assert_eq!(tab_keys(&host), vec!["first", "second"]);
    assert_eq!(host.engine().header().tabs()[0].title, "first");
    assert_eq!(host.engine().page_count(), 2);
}

#[test]
fn test_rename_page() {
    let mut host = ready_host(&["first", "second"], 80, 24);
    let commander = host.engine().commander();
    commander.rename_page("second", "Deuxième");
    commander.rename_page("missing", "Nope");
    host.drain_ready();

    let titles: Vec<&str> = host.engine().header().tabs().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "Deuxième"]);
    assert!(host.render().contains("Deuxième"));
}

#[test]
fn test_delete_active_page_selects_first() {
    let mut engine = Engine::new(&Config::default()).unwrap();
    let (first, first_log) = probe("first");
    engine.add_page("first", "first", first);
    engine.add_page("second", "second", TextPage::new("second"));
    engine.add_page("third", "third", TextPage::new("third"));
    let mut host = Host::new(engine);
    host.start().unwrap();
    resize(&mut host, 80, 24);

    let commander = host.engine().commander();
    commander.set_active_page("second");
    host.drain_ready();
    assert_eq!(host.engine().current_index(), 1);

    commander.delete_page("second");
    host.drain_ready();

    assert_eq!(host.engine().current_index(), 0);
    assert_eq!(tab_keys(&host), vec!["first", "third"]);
    assert_eq!(host.engine().page_count(), 2);
    // Once at startup, once after the delete
    assert_eq!(first_log.lock().unwrap().activations, 2);
}

#[test]
fn test_delete_page_before_current_keeps_current_page() {
    let mut host = ready_host(&["a", "b", "c"], 80, 24);
    let commander = host.engine().commander();
    commander.set_active_page("c");
    commander.delete_page("a");
    host.drain_ready();

    assert_eq!(host.engine().active_page(), Some("c"));
    assert_eq!(host.engine().current_index(), 1);

    // Body of page "c" sits on the middle row of the 19-row body
    let frame = host.render();
    let lines: Vec<&str> = frame.lines().collect();
    assert_eq!(lines[12].trim_matches('│').trim(), "c");
}

/// Page that removes itself when 'x' is pressed
struct ClosablePage {
    key: String,
    commander: Commander,
}

impl Page for ClosablePage {
    fn update(&mut self, event: &Event) -> Effects {
        if let Event::Key(key) = event {
            if key.code == KeyCode::Char('x') {
                self.commander.delete_page(self.key.clone());
            }
        }
        Vec::new()
    }

    fn render(&self, _area: Viewport) -> String {
        "closable".to_string()
    }
}

#[test]
fn test_page_can_delete_itself() {
    let mut engine = Engine::new(&Config::default()).unwrap();
    let commander = engine.commander();
    engine.add_page("keep", "Keep", TextPage::new("kept"));
    engine.add_page(
        "closable",
        "Closable",
        ClosablePage {
            key: "closable".to_string(),
            commander,
        },
    );
    let mut host = Host::new(engine);
    host.start().unwrap();
    resize(&mut host, 80, 24);

    next_tab(&mut host);
    assert_eq!(host.engine().active_page(), Some("closable"));
    assert!(host.render().contains("closable"));

    press(&mut host, KeyCode::Char('x'), KeyModifiers::NONE);
    assert_eq!(host.engine().page_count(), 1);
    assert_eq!(host.engine().active_page(), Some("keep"));
    assert!(host.render().contains("kept"));
}

#[test]
fn test_delete_last_page_is_refused() {
    let mut host = ready_host(&["only"], 80, 24);
    host.engine().commander().delete_page("only");
    host.drain_ready();

    assert_eq!(host.engine().page_count(), 1);
    assert_eq!(tab_keys(&host), vec!["only"]);
}

#[test]
fn test_delete_unknown_page_is_ignored() {
    let mut host = ready_host(&["first", "second"], 80, 24);
    host.engine().commander().delete_page("missing");
    host.drain_ready();
    assert_eq!(host.engine().page_count(), 2);
}

#[test]
fn test_tabs_and_pages_stay_in_lockstep() {
    let mut host = ready_host(&["p0"], 80, 24);
    let commander = host.engine().commander();

    for i in 1..8 {
        commander.add_page(format!("p{i}"), format!("P{i}"), TextPage::new("x"));
        if i % 3 == 0 {
            commander.delete_page(format!("p{}", i - 1));
        }
        commander.add_page("p0", "dup", TextPage::new("dup"));
    }
    commander.delete_page("p0");

    loop {
        let Some(command) = host.engine_mut().try_drain_next() else {
            break;
        };
        host.dispatch(tabframe::Event::Command(command));
        let engine = host.engine();
        assert_eq!(engine.header().len(), engine.page_count());
        assert!(engine.current_index() < engine.page_count());
    }
}

#[test]
fn test_upsert_widget_keeps_position() {
    let mut host = ready_host(&["first"], 80, 24);
    let commander = host.engine().commander();
    commander.upsert_widget("time", "10:00:00");
    commander.add_widget("battery", "Battery %92");
    commander.upsert_widget("time", "10:00:01");
    host.drain_ready();

    assert_eq!(widget_keys(&host), vec!["time", "battery"]);
    assert_eq!(host.engine().widgets().get("time").unwrap().value, "10:00:01");
}

#[test]
fn test_duplicate_widget_key_is_ignored() {
    let mut host = ready_host(&["first"], 80, 24);
    let commander = host.engine().commander();
    commander.add_widget("battery", "Battery %92");
    commander.add_widget("battery", "Battery %10");
    host.drain_ready();

    assert_eq!(host.engine().widgets().len(), 1);
    assert_eq!(host.engine().widgets().get("battery").unwrap().value, "Battery %92");
}

#[test]
fn test_clear_widgets() {
    let mut host = ready_host(&["first"], 80, 24);
    let commander = host.engine().commander();
    commander.add_widget("a", "1");
    commander.add_widget("b", "2");
    commander.clear_widgets();
    host.drain_ready();
    assert!(host.engine().widgets().is_empty());
}

#[test]
fn test_widgets_survive_activation_by_default() {
    let mut host = ready_host(&["first", "second"], 80, 24);
    host.engine().commander().add_widget("a", "1");
    host.drain_ready();

    next_tab(&mut host);
    assert_eq!(widget_keys(&host), vec!["a"]);
}

#[test]
fn test_clear_on_activation_policy() {
    let mut config = Config::default();
    config.widgets.clear_on_activation = true;
    let mut host = started_host_with_config(&["first", "second"], &config);
    resize(&mut host, 80, 24);

    host.engine().commander().add_widget("a", "1");
    host.drain_ready();
    assert_eq!(widget_keys(&host), vec!["a"]);

    next_tab(&mut host);
    assert!(host.engine().widgets().is_empty());
}

#[test]
fn test_text_page_publishes_status_on_activation() {
    let mut engine = Engine::new(&Config::default()).unwrap();
    let commander = engine.commander();
    engine.add_page("first", "First", TextPage::new("First").with_status(commander.clone(), "page", "one"));
    engine.add_page("second", "Second", TextPage::new("Second").with_status(commander, "page", "two"));
    let mut host = Host::new(engine);
    host.start().unwrap();
    host.drain_ready();
    assert_eq!(host.engine().widgets().get("page").unwrap().value, "one");

    resize(&mut host, 80, 24);
    next_tab(&mut host);
    assert_eq!(host.engine().widgets().get("page").unwrap().value, "two");
    assert_eq!(host.engine().widgets().len(), 1);
}

#[test]
fn test_listener_must_be_rearmed() {
    let mut engine = Engine::new(&Config::default()).unwrap();
    engine.add_page("first", "First", TextPage::new("first"));
    let commander = engine.commander();

    // Effects dropped on purpose: nothing re-arms the listener
    let _ = engine.init().unwrap();
    commander.refresh();
    assert!(engine.try_drain_next().is_none());

    engine.listen();
    let command = engine.try_drain_next().unwrap();
    let effects = engine.update(tabframe::Event::Command(command));
    assert!(effects.iter().any(|e| matches!(e, Effect::Listen)));
    assert!(!engine.is_listening());
}
