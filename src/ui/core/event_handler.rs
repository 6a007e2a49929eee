use super::actions::Event;
use crossterm::event::{poll, Event as TermEvent, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Duration;

/// Reads terminal input on a blocking thread and hands it to the async loop
pub struct EventHandler {
    input_receiver: mpsc::UnboundedReceiver<Event>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    /// Start the reader. Emits `Event::Tick` whenever no input arrived within
    /// `tick`.
    pub fn new(tick: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        tokio::task::spawn_blocking(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                let event = match poll(tick) {
                    Ok(true) => match crossterm::event::read() {
                        Ok(event) => translate(event),
                        Err(e) => {
                            log::warn!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => Some(Event::Tick),
                    Err(e) => {
                        log::warn!("Failed to poll terminal events: {}", e);
                        break;
                    }
                };

                if let Some(event) = event {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
            log::debug!("Input reader stopped");
        });

        Self {
            input_receiver: rx,
            stop,
        }
    }

    /// Next input event, `None` once the reader thread has stopped
    pub async fn next_event(&mut self) -> Option<Event> {
        self.input_receiver.recv().await
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

/// Map a raw terminal event to an engine event, dropping key releases
pub fn translate(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        TermEvent::Key(_) => None,
        TermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => Some(Event::Other),
    }
}
