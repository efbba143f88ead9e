//! Main application state and UI loop
//!
//! Owns the panel, feeds it poller and timer messages, and maps terminal
//! input to panel operations.

use crate::consts::cli_consts::ui::{CARD_COLUMNS, INPUT_POLL_MS};
use crate::events::PanelMessage;
use crate::ui::input::{Action, action_for_key, action_for_mouse};
use crate::ui::panel::layout::{PanelLayout, card_slots};
use crate::ui::panel::{PanelState, render_panel};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// How long a celebration effect stays mounted after a selection
    pub effect_duration: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, effect_duration: Duration) -> Self {
        Self {
            with_background_color,
            effect_duration,
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    state: PanelState,

    /// Receives snapshots, activity and effect expiries.
    message_receiver: mpsc::Receiver<PanelMessage>,

    /// Broadcasts shutdown signal to the poller.
    shutdown_sender: broadcast::Sender<()>,

    /// Frame size used for the last draw, for mouse hit-testing.
    last_area: Rect,

    /// Panel revision drawn last; `None` forces a draw.
    last_rendered_revision: Option<u64>,
}

impl App {
    pub fn new(
        endpoint: String,
        message_sender: mpsc::Sender<PanelMessage>,
        message_receiver: mpsc::Receiver<PanelMessage>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            state: PanelState::new(endpoint, message_sender, ui_config),
            message_receiver,
            shutdown_sender,
            last_area: Rect::default(),
            last_rendered_revision: None,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Apply one input action. Returns false when the app should exit.
    pub fn apply_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return false,
            Action::MoveFocus(delta) => self.state.move_focus(delta),
            Action::FocusAndSelect(index) => {
                self.state.set_focus(index);
                self.state.select_focused_record();
            }
            Action::SelectFocused => self.state.select_focused_record(),
            Action::SelectChart(index) => self.state.select_chart(index),
            Action::CloseRecordDetail => self.state.close_record_detail(),
            Action::CloseChartDetail => self.state.close_chart_detail(),
        }
        true
    }

    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => {
                // Skip events that are not KeyEventKind::Press
                if key.kind != KeyEventKind::Press {
                    return true;
                }
                match action_for_key(key, self.state.presentation(), CARD_COLUMNS) {
                    Some(action) => self.apply_action(action),
                    None => true,
                }
            }
            Event::Mouse(mouse) => {
                let layout = PanelLayout::new(self.last_area);
                let slots = card_slots(
                    layout.cards,
                    self.state.records().len(),
                    self.state.focused(),
                );
                match action_for_mouse(
                    mouse,
                    self.state.presentation(),
                    self.last_area,
                    &layout,
                    &slots,
                ) {
                    Some(action) => self.apply_action(action),
                    None => true,
                }
            }
            Event::Resize(_, _) => {
                self.last_rendered_revision = None;
                true
            }
            _ => true,
        }
    }

    fn needs_redraw(&self) -> bool {
        // Confetti animates every tick while an effect is mounted.
        self.last_rendered_revision != Some(self.state.revision())
            || self.state.is_card_effect_active()
            || self.state.is_chart_effect_active()
    }

    /// Tear the panel down and stop the poller.
    pub fn shutdown(&mut self) {
        self.state.teardown();
        let _ = self.shutdown_sender.send(());
        self.message_receiver.close();
    }
}

/// Runs the panel UI in a loop until the user quits.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        app.state.drain_messages(&mut app.message_receiver);
        app.state.update();

        if app.needs_redraw() {
            let frame = terminal.draw(|f| render_panel(f, &app.state))?;
            app.last_area = frame.area;
            app.last_rendered_revision = Some(app.state.revision());
        }

        // Let the poller and timers make progress between input polls.
        tokio::task::yield_now().await;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            let keep_running = app.handle_event(event::read()?);
            if !keep_running {
                app.shutdown();
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docente::Docente;
    use crate::ui::panel::Presentation;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn new_app() -> (App, broadcast::Receiver<()>) {
        let (message_sender, message_receiver) = mpsc::channel(100);
        let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);
        let app = App::new(
            "http://test/api.php".to_string(),
            message_sender,
            message_receiver,
            shutdown_sender,
            UIConfig::new(false, Duration::from_millis(5000)),
        );
        (app, shutdown_receiver)
    }

    fn load(app: &mut App, n: i64) {
        let records = (1..=n)
            .map(|id| Docente::new(id, format!("K{}", id), format!("N{}", id), "555", "F"))
            .collect();
        app.state
            .apply_message(PanelMessage::Snapshot { seq: 1, records });
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_keyboard_selection_flow() {
        let (mut app, _shutdown) = new_app();
        load(&mut app, 4);

        assert!(app.handle_event(press(KeyCode::Right)));
        assert!(app.handle_event(press(KeyCode::Enter)));
        assert!(matches!(
            app.state().presentation(),
            Presentation::RecordDetail(d) if d.id == 2
        ));

        assert!(app.handle_event(press(KeyCode::Esc)));
        assert_eq!(app.state().presentation(), &Presentation::Idle);
        assert!(app.state().is_card_effect_active());

        assert!(app.handle_event(press(KeyCode::Char('g'))));
        assert_eq!(app.state().presentation(), &Presentation::ChartDetail(0));
    }

    #[tokio::test]
    async fn test_quit_stops_poller() {
        let (mut app, mut shutdown) = new_app();
        load(&mut app, 1);
        app.state.select_chart(0);

        assert!(!app.handle_event(press(KeyCode::Char('q'))));
        app.shutdown();

        assert!(shutdown.try_recv().is_ok());
        assert!(!app.state().is_active());
        assert_eq!(app.state().presentation(), &Presentation::Idle);
        assert!(!app.state().is_chart_effect_active());
    }

    #[tokio::test]
    async fn test_release_events_are_ignored() {
        let (mut app, _shutdown) = new_app();
        load(&mut app, 2);
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(app.handle_event(Event::Key(release)));
        assert_eq!(app.state().presentation(), &Presentation::Idle);
    }

    #[tokio::test]
    async fn test_redraw_only_on_change_or_effect() {
        let (mut app, _shutdown) = new_app();
        assert!(app.needs_redraw());
        app.last_rendered_revision = Some(app.state.revision());
        assert!(!app.needs_redraw());

        load(&mut app, 1);
        assert!(app.needs_redraw());
        app.last_rendered_revision = Some(app.state.revision());

        app.state.select_focused_record();
        app.last_rendered_revision = Some(app.state.revision());
        // Still animating.
        assert!(app.needs_redraw());
    }
}
