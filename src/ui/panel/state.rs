//! Panel state management
//!
//! Owns the record set, the presentation state machine and the two effect
//! flags for one panel instance.

use super::effects::EffectTimer;
use super::presentation::Presentation;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::docente::Docente;
use crate::error_classifier::LogLevel;
use crate::events::{Effect, Event, EventType, PanelMessage};
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::mpsc;

/// Bookkeeping about the snapshot currently shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotInfo {
    /// Issue order of the fetch that produced it
    pub seq: u64,
    /// Local time it was applied, "YYYY-MM-DD HH:MM:SS"
    pub applied_at: String,
}

#[derive(Debug)]
pub struct PanelState {
    /// Endpoint the poller reads from, shown in the header.
    pub endpoint: String,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to paint the dark background
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    records: Vec<Docente>,
    presentation: Presentation,
    card_effect: EffectTimer,
    chart_effect: EffectTimer,
    effect_duration: Duration,
    /// Handed to effect timers so their expiries come back through the UI loop
    message_sender: mpsc::Sender<PanelMessage>,
    /// Index of the card with keyboard focus
    focused: usize,
    last_snapshot: Option<SnapshotInfo>,
    failed_polls: u32,
    /// Bumped on every mutation that changes what is drawn
    revision: u64,
    /// Cleared by teardown; an inactive panel ignores everything
    active: bool,
}

impl PanelState {
    pub fn new(
        endpoint: String,
        message_sender: mpsc::Sender<PanelMessage>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            endpoint,
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            records: Vec::new(),
            presentation: Presentation::Idle,
            card_effect: EffectTimer::new(Effect::Card),
            chart_effect: EffectTimer::new(Effect::Chart),
            effect_duration: ui_config.effect_duration,
            message_sender,
            focused: 0,
            last_snapshot: None,
            failed_polls: 0,
            revision: 0,
            active: true,
        }
    }

    pub fn records(&self) -> &[Docente] {
        &self.records
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn is_card_effect_active(&self) -> bool {
        self.card_effect.is_active()
    }

    pub fn is_chart_effect_active(&self) -> bool {
        self.chart_effect.is_active()
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn last_snapshot(&self) -> Option<&SnapshotInfo> {
        self.last_snapshot.as_ref()
    }

    pub fn failed_polls(&self) -> u32 {
        self.failed_polls
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(super) fn touch(&mut self) {
        self.revision += 1;
    }

    /// `* -> RecordDetail(r)` and (re)start the card effect.
    pub fn select_record(&mut self, docente: Docente) {
        if !self.active {
            return;
        }
        self.add_to_activity_log(Event::panel_with_level(
            format!("Docente seleccionado: {}", docente.nombre),
            EventType::Interaction,
            LogLevel::Debug,
        ));
        self.presentation = Presentation::RecordDetail(docente);
        self.card_effect
            .restart(self.effect_duration, self.message_sender.clone());
        self.touch();
    }

    /// Select the record under keyboard focus, if any.
    pub fn select_focused_record(&mut self) {
        if let Some(docente) = self.records.get(self.focused).cloned() {
            self.select_record(docente);
        }
    }

    /// `RecordDetail(_) -> Idle`. The card effect keeps running.
    pub fn close_record_detail(&mut self) {
        if self.presentation.close_record_detail() {
            self.touch();
        }
    }

    /// `* -> ChartDetail(index)` and (re)start the chart effect.
    pub fn select_chart(&mut self, index: usize) {
        if !self.active {
            return;
        }
        self.presentation = Presentation::ChartDetail(index);
        self.chart_effect
            .restart(self.effect_duration, self.message_sender.clone());
        self.touch();
    }

    /// `ChartDetail(_) -> Idle`. Idempotent.
    pub fn close_chart_detail(&mut self) {
        if self.presentation.close_chart_detail() {
            self.touch();
        }
    }

    /// Move keyboard focus by `delta` cards, clamped to the record set.
    pub fn move_focus(&mut self, delta: isize) {
        if self.records.is_empty() {
            return;
        }
        let last = self.records.len() - 1;
        let target = self.focused.saturating_add_signed(delta).min(last);
        if target != self.focused {
            self.focused = target;
            self.touch();
        }
    }

    pub fn set_focus(&mut self, index: usize) {
        if index < self.records.len() && index != self.focused {
            self.focused = index;
            self.touch();
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
        self.touch();
    }

    pub(super) fn replace_records(&mut self, seq: u64, records: Vec<Docente>, applied_at: String) {
        self.records = records;
        if self.focused >= self.records.len() {
            self.focused = self.records.len().saturating_sub(1);
        }
        self.last_snapshot = Some(SnapshotInfo { seq, applied_at });
        self.touch();
    }

    pub(super) fn record_failed_poll(&mut self) {
        self.failed_polls += 1;
    }

    /// Reset the failure streak, returning how long it was.
    pub(super) fn take_failed_polls(&mut self) -> u32 {
        std::mem::take(&mut self.failed_polls)
    }

    pub(super) fn expire_effect(&mut self, effect: Effect, epoch: u64) {
        let expired = match effect {
            Effect::Card => self.card_effect.expire(epoch),
            Effect::Chart => self.chart_effect.expire(epoch),
        };
        if expired {
            self.touch();
        }
    }

    /// Stop reacting to anything and drop back to the initial presentation.
    pub(super) fn deactivate(&mut self) {
        self.active = false;
        self.card_effect.cancel();
        self.chart_effect.cancel();
        self.presentation = Presentation::Idle;
        self.touch();
    }
}
