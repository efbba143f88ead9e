//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::docente::Docente;
use crate::events::PanelMessage;
use std::error::Error;

/// One-line summary of an applied snapshot
fn snapshot_summary(seq: u64, records: &[Docente]) -> String {
    let ids = records
        .iter()
        .map(|d| d.id.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Snapshot #{}: {} docentes [{}]", seq, records.len(), ids)
}

/// Runs the poller without a terminal UI, printing activity to stdout
/// until Ctrl+C.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.endpoint);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();

    // Event loop: log events to console until shutdown
    loop {
        tokio::select! {
            Some(message) = session.message_receiver.recv() => match message {
                PanelMessage::Snapshot { seq, records } => {
                    println!("{}", snapshot_summary(seq, &records));
                }
                PanelMessage::Activity(event) => {
                    if event.should_display() {
                        println!("{}", event);
                    }
                }
                // No effects run without a panel.
                PanelMessage::EffectExpired { .. } => {}
            },
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    let _ = session.poll_handle.await;
    print_session_exit_success();

    Ok(())
}
