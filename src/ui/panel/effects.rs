//! Celebratory effect timers
//!
//! Each effect flag owns a cancellable expiry task. Restarting replaces the
//! task instead of stacking a second one, and every start bumps an epoch so an
//! expiry that was already queued for a replaced task is ignored.

use crate::events::{Effect, PanelMessage};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct EffectTimer {
    effect: Effect,
    active: bool,
    epoch: u64,
    handle: Option<JoinHandle<()>>,
}

impl EffectTimer {
    pub fn new(effect: Effect) -> Self {
        Self {
            effect,
            active: false,
            epoch: 0,
            handle: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Turn the effect on and (re)schedule its expiry `duration` from now.
    pub fn restart(&mut self, duration: Duration, sender: mpsc::Sender<PanelMessage>) {
        self.abort_pending();
        self.epoch += 1;
        self.active = true;

        let effect = self.effect;
        let epoch = self.epoch;
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = sender
                .send(PanelMessage::EffectExpired { effect, epoch })
                .await;
        }));
    }

    /// Apply an expiry. Returns true if the flag went from on to off.
    pub fn expire(&mut self, epoch: u64) -> bool {
        if !self.active || epoch != self.epoch {
            return false;
        }
        self.active = false;
        self.handle = None;
        true
    }

    /// Turn the effect off and drop any pending expiry.
    pub fn cancel(&mut self) {
        self.abort_pending();
        self.active = false;
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for EffectTimer {
    fn drop(&mut self) {
        self.abort_pending();
    }
}
