//! Live stats worker that recomputes derived values with debouncing.
//!
//! Receives domain events via an mpsc channel, debounces them within a short
//! window, and then runs one recomputation against the latest store
//! snapshots, publishing the results through watch channels.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Months, NaiveDate};
use log::{debug, error, info};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::constants::{DEFAULT_DAILY_GOAL_ML, LIVE_DEBOUNCE_MS};
use crate::errors::Error;
use crate::events::DomainEvent;
use crate::goals::GoalRepositoryTrait;
use crate::insights::{compute_insights, Insights};
use crate::intake::{IntakeRecord, IntakeRepositoryTrait};
use crate::stats::{compute_daily_stats, expand_range, DailyStats};
use crate::utils::time_utils;

/// Published live value: the derived result, or the store read failure that
/// prevented deriving it. Failures are surfaced, never papered over with a
/// stale or default value.
pub type LiveResult<T> = std::result::Result<T, Arc<Error>>;

/// Continuously-updated derived values over the event store.
///
/// Owns a background worker task fed by a `ChannelDomainEventSink` receiver.
/// Every recomputation re-reads BOTH current snapshots (records and goal)
/// regardless of which one the triggering event touched, so the published
/// values are always a consistent join of the latest inputs.
pub struct LiveStatsService {
    today_stats_rx: watch::Receiver<LiveResult<DailyStats>>,
    insights_rx: watch::Receiver<LiveResult<Insights>>,
    worker: JoinHandle<()>,
}

impl LiveStatsService {
    /// Computes the initial values and starts the recompute worker, with
    /// insights over the trailing calendar month ending today.
    ///
    /// Must be called from within a tokio runtime. Subscribers never observe
    /// an unset value: the watch channels are seeded before the worker runs.
    pub fn spawn(
        intake_repository: Arc<dyn IntakeRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        receiver: mpsc::UnboundedReceiver<DomainEvent>,
    ) -> Self {
        Self::spawn_inner(intake_repository, goal_repository, receiver, None)
    }

    /// Like [`spawn`](Self::spawn), but with insights over a fixed date
    /// range instead of the sliding trailing month.
    pub fn spawn_with_range(
        intake_repository: Arc<dyn IntakeRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        receiver: mpsc::UnboundedReceiver<DomainEvent>,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Self {
        Self::spawn_inner(
            intake_repository,
            goal_repository,
            receiver,
            Some((range_start, range_end)),
        )
    }

    fn spawn_inner(
        intake_repository: Arc<dyn IntakeRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        receiver: mpsc::UnboundedReceiver<DomainEvent>,
        insights_range: Option<(NaiveDate, NaiveDate)>,
    ) -> Self {
        let (initial_today, initial_insights) =
            recompute(&intake_repository, &goal_repository, insights_range);
        let (today_tx, today_stats_rx) = watch::channel(initial_today);
        let (insights_tx, insights_rx) = watch::channel(initial_insights);

        let worker = tokio::spawn(live_stats_worker(
            intake_repository,
            goal_repository,
            receiver,
            today_tx,
            insights_tx,
            insights_range,
        ));

        Self {
            today_stats_rx,
            insights_rx,
            worker,
        }
    }

    /// The continuously-updated statistics for "today".
    pub fn subscribe_today_stats(&self) -> watch::Receiver<LiveResult<DailyStats>> {
        self.today_stats_rx.clone()
    }

    /// The continuously-updated insights over the configured window.
    pub fn subscribe_insights(&self) -> watch::Receiver<LiveResult<Insights>> {
        self.insights_rx.clone()
    }

    /// Stops the worker immediately. Dropping every event sink achieves the
    /// same thing gracefully; this is for deterministic teardown.
    pub fn shutdown(&self) {
        self.worker.abort();
    }
}

/// Runs the recompute worker.
///
/// Waits for the first event, then keeps collecting until the debounce
/// window passes without another one; the whole burst becomes one
/// recomputation. The worker is a single task, so recomputations are
/// serialized; events arriving mid-recompute queue up and coalesce into at
/// most one follow-up run.
async fn live_stats_worker(
    intake_repository: Arc<dyn IntakeRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    mut receiver: mpsc::UnboundedReceiver<DomainEvent>,
    today_tx: watch::Sender<LiveResult<DailyStats>>,
    insights_tx: watch::Sender<LiveResult<Insights>>,
    insights_range: Option<(NaiveDate, NaiveDate)>,
) {
    let debounce_duration = Duration::from_millis(LIVE_DEBOUNCE_MS);
    let mut event_buffer: Vec<DomainEvent> = Vec::new();

    loop {
        // With an empty buffer, wait indefinitely for the first event.
        // With buffered events, wait for more until the window expires.
        let maybe_event = if event_buffer.is_empty() {
            receiver.recv().await
        } else {
            tokio::select! {
                event = receiver.recv() => event,
                _ = tokio::time::sleep(debounce_duration) => None,
            }
        };

        match maybe_event {
            Some(event) => {
                event_buffer.push(event);
            }
            None if !event_buffer.is_empty() => {
                // Window expired or channel closed with events pending
                let events = std::mem::take(&mut event_buffer);
                debug!(
                    "Recomputing live stats after {} change notifications",
                    events.len()
                );

                let (today_stats, insights) =
                    recompute(&intake_repository, &goal_repository, insights_range);
                let today_closed = today_tx.send(today_stats).is_err();
                let insights_closed = insights_tx.send(insights).is_err();
                if today_closed && insights_closed {
                    info!("All live stats subscribers dropped, stopping worker");
                    break;
                }
            }
            None => {
                // Channel closed and buffer is empty - every sink is gone
                info!("Live stats worker shutting down");
                break;
            }
        }
    }
}

/// One full recomputation from fresh snapshots of both inputs.
///
/// "Today" is read per invocation, so without an explicit range the
/// trailing-month window slides across midnight on the next change. A store
/// read failure is returned as the published value for both outputs.
fn recompute(
    intake_repository: &Arc<dyn IntakeRepositoryTrait>,
    goal_repository: &Arc<dyn GoalRepositoryTrait>,
    insights_range: Option<(NaiveDate, NaiveDate)>,
) -> (LiveResult<DailyStats>, LiveResult<Insights>) {
    let snapshot = read_snapshot(intake_repository, goal_repository);

    match snapshot {
        Ok((records, goal_ml)) => {
            let today = time_utils::local_date_today();
            let today_stats = compute_daily_stats(&records, goal_ml, today);

            let (range_start, range_end) = insights_range.unwrap_or_else(|| {
                let month_start = today.checked_sub_months(Months::new(1)).unwrap_or(today);
                (month_start, today)
            });
            let series = expand_range(&records, goal_ml, range_start, range_end);
            let insights = compute_insights(&series, today);

            (Ok(today_stats), Ok(insights))
        }
        Err(e) => {
            error!("Live stats recomputation failed to read store: {}", e);
            let shared = Arc::new(e);
            (Err(shared.clone()), Err(shared))
        }
    }
}

fn read_snapshot(
    intake_repository: &Arc<dyn IntakeRepositoryTrait>,
    goal_repository: &Arc<dyn GoalRepositoryTrait>,
) -> crate::Result<(Vec<IntakeRecord>, i32)> {
    let records = intake_repository.get_records()?;
    let goal_ml = goal_repository
        .get_goal()?
        .unwrap_or(DEFAULT_DAILY_GOAL_ML);
    Ok((records, goal_ml))
}
