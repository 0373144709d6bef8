//! Server-Sent Events: live playback streams and data change notifications.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use notify::{Event as NotifyEvent, EventKind, PollWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use player::clock::SystemClock;
use player::controller::PlaybackController;
use player::core::generate::generate;
use player::core::playback::{DEFAULT_SPEED, clamp_speed};
use player::core::types::ExecutionStep;

use crate::state::{AppState, ChangeEvent};

#[derive(Serialize)]
struct SsePayload {
    #[serde(rename = "type")]
    event_type: String,
}

impl From<&ChangeEvent> for SsePayload {
    fn from(event: &ChangeEvent) -> Self {
        match event {
            ChangeEvent::CatalogChanged => SsePayload {
                event_type: "catalog_changed".to_string(),
            },
            ChangeEvent::SubmissionsChanged => SsePayload {
                event_type: "submissions_changed".to_string(),
            },
        }
    }
}

/// SSE endpoint handler for data change notifications.
pub async fn events_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut rx = state.event_tx.subscribe();

    let stream = async_stream::stream! {
        // Send initial connected event
        yield Ok(Event::default().event("connected").data("{}"));

        loop {
            match rx.recv().await {
                Ok(change_event) => {
                    let payload = SsePayload::from(&change_event);
                    if let Ok(json) = serde_json::to_string(&payload) {
                        yield Ok(Event::default().event("change").data(json));
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!(skipped = n, "SSE client lagged, some events dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    break;
                }
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15)).text("ping"))
}

#[derive(Debug, Deserialize)]
pub struct PlaybackQuery {
    /// Playback speed 1-100; defaults to the standard speed.
    pub speed: Option<u8>,
}

#[derive(Serialize)]
struct StepFrame {
    index: usize,
    total: usize,
    step: ExecutionStep,
}

/// GET /playback/:id?speed=N - stream a problem's steps as they play.
///
/// Drives a real playback controller: one `step` event per position change
/// at the controller's own cadence, then a final `complete` event when
/// playback auto-stops at the end. Dropping the connection drops the
/// controller and with it any pending tick.
pub async fn playback_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PlaybackQuery>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, StatusCode> {
    let catalog = state.catalog().map_err(|err| {
        warn!(error = %err, "catalog load failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let problem = catalog.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    let steps = generate(problem);
    let speed = clamp_speed(query.speed.unwrap_or(DEFAULT_SPEED));
    info!(problem = %id, speed, "playback stream started");

    let stream = async_stream::stream! {
        let total = steps.len();
        let mut controller = PlaybackController::new(steps, SystemClock);
        controller.set_speed(speed);
        controller.play();

        if let Some(event) = frame_event(&controller, total) {
            yield Ok(event);
        }

        while controller.is_playing() {
            if let Some(remaining) = controller.time_until_tick()
                && !remaining.is_zero()
            {
                tokio::time::sleep(remaining).await;
            }
            if controller.poll() > 0
                && let Some(event) = frame_event(&controller, total)
            {
                yield Ok(event);
            }
        }

        yield Ok(Event::default().event("complete").data("{}"));
    };

    Ok(Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15)).text("ping")))
}

fn frame_event(controller: &PlaybackController<SystemClock>, total: usize) -> Option<Event> {
    let step = controller.current_step()?;
    let frame = StepFrame {
        index: controller.current_index(),
        total,
        step: step.clone(),
    };
    let json = serde_json::to_string(&frame).ok()?;
    Some(Event::default().event("step").data(json))
}

/// Start the data file watcher in a background task.
pub fn start_file_watcher(state: AppState) {
    tokio::spawn(async move {
        if let Err(e) = run_file_watcher(state).await {
            warn!(error = %e, "file watcher failed");
        }
    });
}

async fn run_file_watcher(state: AppState) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::channel::<NotifyEvent>(100);

    let tx_clone = tx.clone();
    let mut watcher = PollWatcher::new(
        move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx_clone.try_send(event);
            }
        },
        notify::Config::default().with_poll_interval(Duration::from_millis(100)),
    )?;

    for path in [&state.catalog_path, &state.submissions_path]
        .into_iter()
        .flatten()
    {
        if path.exists() {
            watcher.watch(path, RecursiveMode::NonRecursive)?;
            info!(path = %path.display(), "watching data file");
        }
    }

    while let Some(event) = rx.recv().await {
        process_event(&state, &event);
    }

    Ok(())
}

fn process_event(state: &AppState, event: &NotifyEvent) {
    // Only care about create/modify events
    if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
        return;
    }

    for path in &event.paths {
        if Some(path) == state.catalog_path.as_ref() {
            debug!("broadcasting catalog change");
            let _ = state.event_tx.send(ChangeEvent::CatalogChanged);
        } else if Some(path) == state.submissions_path.as_ref() {
            debug!("broadcasting submissions change");
            let _ = state.event_tx.send(ChangeEvent::SubmissionsChanged);
        }
    }
}
