//! Event System
//!
//! Messages sent from background tasks to the UI loop, and the activity
//! events shown in the log panel.

use crate::docente::Docente;
use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// The background task that polls the directory endpoint.
    Poller,
    /// The panel itself (user interaction, effects).
    Panel,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Interaction,
}

/// The two celebratory effects, each with its own expiry timer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Effect {
    Card,
    Chart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn poller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Poller, msg, event_type, log_level)
    }

    pub fn panel_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Panel, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        if self.event_type == EventType::Success {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

/// Everything the UI loop receives from background tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMessage {
    /// A completed poll. `seq` is the issue order of the fetch, kept for reporting.
    Snapshot { seq: u64, records: Vec<Docente> },
    /// Something worth showing in the activity log.
    Activity(Event),
    /// An effect timer fired. Ignored unless `epoch` matches the live timer.
    EffectExpired { effect: Effect, epoch: u64 },
}
