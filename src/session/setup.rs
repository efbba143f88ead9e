//! Session setup and initialization

use crate::config::Settings;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::directory::{DirectoryClient, DocenteSource};
use crate::events::PanelMessage;
use crate::workers::{Poller, core::EventSender};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Receives snapshots and activity from the poller
    pub message_receiver: mpsc::Receiver<PanelMessage>,
    /// Handed to the panel so effect timers share the poller's channel
    pub message_sender: mpsc::Sender<PanelMessage>,
    /// Join handle for the poller task
    pub poll_handle: JoinHandle<()>,
    /// Shutdown sender to stop the poller
    pub shutdown_sender: broadcast::Sender<()>,
    /// Endpoint being polled
    pub endpoint: String,
    /// How long a celebration effect stays mounted
    pub effect_duration: Duration,
}

/// Sets up a polling session against the configured endpoint
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Builds the HTTP directory client
/// 2. Sets up the message and shutdown channels
/// 3. Starts the poller
pub fn setup_session(settings: Settings) -> Result<SessionData, Box<dyn Error>> {
    let client = DirectoryClient::new(settings.endpoint.clone())?;
    let source: Arc<dyn DocenteSource> = Arc::new(client);
    Ok(start_session(source, &settings))
}

/// Wire a source into a running session. Split out so tests can poll a mock.
pub fn start_session(source: Arc<dyn DocenteSource>, settings: &Settings) -> SessionData {
    let (message_sender, message_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let endpoint = source.endpoint().to_string();
    let poller = Poller::new(
        source,
        EventSender::new(message_sender.clone()),
        settings.poll_interval,
    );
    let poll_handle = poller.spawn(shutdown_sender.subscribe());

    SessionData {
        message_receiver,
        message_sender,
        poll_handle,
        shutdown_sender,
        endpoint,
        effect_duration: settings.effect_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::MockDocenteSource;
    use crate::docente::Docente;
    use crate::ui::UIConfig;
    use crate::ui::panel::view::build_view;
    use crate::ui::panel::{PanelState, Presentation};
    use tokio::time;

    fn settings() -> Settings {
        Settings {
            endpoint: "http://mock/api.php".to_string(),
            poll_interval: Duration::from_millis(1000),
            effect_duration: Duration::from_millis(5000),
        }
    }

    fn single_record_source() -> MockDocenteSource {
        let mut mock = MockDocenteSource::new();
        mock.expect_endpoint()
            .return_const("http://mock/api.php".to_string());
        mock.expect_fetch_docentes()
            .returning(|| Ok(vec![Docente::new(1, "A1", "X", "555", "M")]));
        mock
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_polls_until_shutdown() {
        let mut session = start_session(Arc::new(single_record_source()), &settings());
        assert_eq!(session.endpoint, "http://mock/api.php");

        let first = session.message_receiver.recv().await;
        assert!(matches!(first, Some(PanelMessage::Snapshot { seq: 1, .. })));

        session.shutdown_sender.send(()).unwrap();
        session.poll_handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_select_and_expire() {
        let settings = settings();
        let mut session = start_session(Arc::new(single_record_source()), &settings);
        let mut state = PanelState::new(
            session.endpoint.clone(),
            session.message_sender.clone(),
            UIConfig::new(false, settings.effect_duration),
        );

        time::sleep(Duration::from_millis(10)).await;
        state.drain_messages(&mut session.message_receiver);

        let view = build_view(&state);
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.chart.labels, vec!["ID: 1"]);
        assert_eq!(view.chart.datasets[0].data, vec![1]);

        state.select_focused_record();
        assert!(matches!(
            state.presentation(),
            Presentation::RecordDetail(d) if d.nombre == "X"
        ));
        assert!(state.is_card_effect_active());

        time::sleep(Duration::from_millis(5001)).await;
        state.drain_messages(&mut session.message_receiver);
        assert!(!state.is_card_effect_active());

        state.teardown();
        session.shutdown_sender.send(()).unwrap();
        session.poll_handle.await.unwrap();
    }
}
