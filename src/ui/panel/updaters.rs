//! Panel state update logic
//!
//! Applies messages from the poller and the effect timers.

use super::state::PanelState;
use crate::error_classifier::LogLevel;
use crate::events::{Event, EventType, PanelMessage};

use chrono::Local;
use tokio::sync::mpsc;

impl PanelState {
    /// Advance the animation tick.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Apply every message currently queued, in arrival order.
    pub fn drain_messages(&mut self, receiver: &mut mpsc::Receiver<PanelMessage>) {
        while let Ok(message) = receiver.try_recv() {
            self.apply_message(message);
        }
    }

    /// Apply one message. Everything is dropped once the panel is torn down.
    pub fn apply_message(&mut self, message: PanelMessage) {
        if !self.is_active() {
            return;
        }
        match message {
            PanelMessage::Snapshot { seq, records } => self.apply_snapshot(seq, records),
            PanelMessage::Activity(event) => {
                if event.event_type == EventType::Error {
                    self.record_failed_poll();
                }
                self.add_to_activity_log(event);
            }
            PanelMessage::EffectExpired { effect, epoch } => self.expire_effect(effect, epoch),
        }
    }

    /// Replace the record set wholesale. Completion order wins, so an older
    /// fetch that lands late still replaces a newer one.
    fn apply_snapshot(&mut self, seq: u64, records: Vec<crate::docente::Docente>) {
        let applied_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.replace_records(seq, records, applied_at);

        let failures = self.take_failed_polls();
        if failures > 0 {
            self.add_to_activity_log(Event::poller_with_level(
                format!("Conexión restablecida tras {} intentos fallidos", failures),
                EventType::Success,
                LogLevel::Info,
            ));
        }
    }

    /// Tear the panel down: cancel both effect timers, return to `Idle`, and
    /// ignore any message that arrives afterwards. Stopping the poller is the
    /// owner's job (see `App::shutdown`).
    pub fn teardown(&mut self) {
        if self.is_active() {
            self.deactivate();
        }
    }
}
