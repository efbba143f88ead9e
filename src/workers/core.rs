//! Core worker utilities

use crate::docente::Docente;
use crate::error_classifier::LogLevel;
use crate::events::{Event, EventType, PanelMessage};
use tokio::sync::mpsc;

/// Common message sending utilities for workers
#[derive(Clone, Debug)]
pub struct EventSender {
    sender: mpsc::Sender<PanelMessage>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<PanelMessage>) -> Self {
        Self { sender }
    }

    /// Send a raw panel message. A closed receiver means the panel is gone,
    /// so send failures are dropped.
    pub async fn send(&self, message: PanelMessage) {
        let _ = self.sender.send(message).await;
    }

    pub async fn send_snapshot(&self, seq: u64, records: Vec<Docente>) {
        self.send(PanelMessage::Snapshot { seq, records }).await;
    }

    pub async fn send_poll_event(&self, message: String, event_type: EventType, log_level: LogLevel) {
        self.send(PanelMessage::Activity(Event::poller_with_level(
            message, event_type, log_level,
        )))
        .await;
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
