use std::time::Duration;

use chrono::Local;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::common::UiEvent;

/// Cadence of the one shared tick every live label listens to.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Start the shared tick. It stops by itself once the UI drops its receiver.
pub fn spawn(sender: mpsc::Sender<UiEvent>, ctx: egui::Context) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately; the UI already rendered `now`.
        interval.tick().await;

        log::info!("Tick source started ({TICK_PERIOD:?})");
        loop {
            interval.tick().await;
            if sender.send(UiEvent::Tick(Local::now())).await.is_err() {
                log::debug!("UI event channel closed; stopping tick source");
                break;
            }
            ctx.request_repaint();
        }
    })
}
