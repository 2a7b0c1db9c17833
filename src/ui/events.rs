use crossterm::event::{self, Event, KeyEvent};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Terminal input, read on a dedicated thread and forwarded to the host.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    /// `poll_interval` bounds how long the reader takes to notice that the
    /// handler was dropped.
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        thread::spawn(move || loop {
            if tx.is_closed() {
                break;
            }

            let ready = match event::poll(poll_interval) {
                Ok(ready) => ready,
                Err(err) => {
                    tracing::error!("Terminal poll failed: {}", err);
                    break;
                }
            };
            if !ready {
                continue;
            }

            let forwarded = match event::read() {
                Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                Ok(_) => None,
                Err(err) => {
                    tracing::error!("Terminal read failed: {}", err);
                    break;
                }
            };
            if let Some(event) = forwarded {
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}
