//! Fixed-cadence polling of the docente directory
//!
//! One fetch is issued immediately on activation and then one per interval.
//! Ticks are never coalesced: a slow fetch does not delay the next one, and
//! whichever fetch completes last is the snapshot the panel ends up showing.

use super::core::EventSender;
use crate::directory::DocenteSource;
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::EventType;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, MissedTickBehavior};

#[derive(Clone)]
pub struct Poller {
    source: Arc<dyn DocenteSource>,
    event_sender: EventSender,
    interval: Duration,
    error_classifier: ErrorClassifier,
}

impl Poller {
    pub fn new(source: Arc<dyn DocenteSource>, event_sender: EventSender, interval: Duration) -> Self {
        Self {
            source,
            event_sender,
            interval,
            error_classifier: ErrorClassifier::new(),
        }
    }

    /// Fetch the record list once and forward the outcome.
    ///
    /// Returns whether a snapshot was produced. Failures leave the panel's
    /// record set untouched; they are only reported.
    pub async fn fetch_once(&self, seq: u64) -> bool {
        match self.source.fetch_docentes().await {
            Ok(records) => {
                let count = records.len();
                self.event_sender.send_snapshot(seq, records).await;
                self.event_sender
                    .send_poll_event(
                        format!("Poll #{}: {} docentes", seq, count),
                        EventType::Refresh,
                        LogLevel::Debug,
                    )
                    .await;
                true
            }
            Err(e) => {
                let log_level = self.error_classifier.classify_fetch_error(&e);
                let level: log::Level = log_level.into();
                log::log!(level, "poll #{} against {} failed: {}", seq, self.source.endpoint(), e);
                self.event_sender
                    .send_poll_event(
                        format!("Error al obtener los datos: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
                false
            }
        }
    }

    /// Start polling on a background task until `shutdown` fires.
    pub fn spawn(self, shutdown: broadcast::Receiver<()>) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }

    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut in_flight: JoinSet<bool> = JoinSet::new();
        let mut seq: u64 = 0;

        loop {
            tokio::select! {
                biased;
                _ = shutdown.recv() => break,
                _ = ticker.tick() => {
                    // A closed channel counts as shutdown too.
                    if self.event_sender.is_closed() {
                        break;
                    }
                    seq += 1;
                    let poller = self.clone();
                    in_flight.spawn(async move { poller.fetch_once(seq).await });
                }
                Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
            }
        }

        // Late completions must not reach the panel after teardown.
        in_flight.abort_all();
        log::debug!("poller stopped after {} ticks", seq);
    }
}
