use crate::core::engine::ReportEngine;
use crate::domain::ports::{DealSource, Storage};
use chrono::{DateTime, Datelike, Duration, Local, NaiveTime, Weekday};

/// How often the loop checks whether the trigger is due.
pub const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

/// A fixed weekly trigger: one weekday, one time of day, local clock.
#[derive(Debug, Clone, Copy)]
pub struct WeeklySchedule {
    pub weekday: Weekday,
    pub at: NaiveTime,
}

impl WeeklySchedule {
    /// Every Monday at 09:00 local time.
    pub fn monday_morning() -> Self {
        Self {
            weekday: Weekday::Mon,
            at: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
        }
    }

    /// The next wall-clock instant strictly after `after` that falls on the
    /// scheduled weekday at the scheduled time. A candidate that does not
    /// exist locally (DST gap) is skipped a week forward.
    pub fn next_occurrence(&self, after: DateTime<Local>) -> DateTime<Local> {
        let days_ahead = (7 + self.weekday.num_days_from_monday() as i64
            - after.weekday().num_days_from_monday() as i64)
            % 7;
        let mut date = after.date_naive() + Duration::days(days_ahead);

        loop {
            if let Some(candidate) = date.and_time(self.at).and_local_timezone(Local).earliest() {
                if candidate > after {
                    return candidate;
                }
            }
            date += Duration::days(7);
        }
    }
}

/// Polls once a minute and runs the full fetch -> export sequence when the
/// trigger is due. A failed run is logged and the loop keeps polling; runs
/// are strictly sequential, and ticks missed during a long run are not
/// caught up. Terminates only by external signal.
pub async fn run_forever<D: DealSource, S: Storage>(
    schedule: WeeklySchedule,
    engine: ReportEngine<D, S>,
) {
    let mut next_run = schedule.next_occurrence(Local::now());
    tracing::info!(
        "Next report scheduled for {}",
        next_run.format("%Y-%m-%d %H:%M:%S")
    );

    loop {
        tokio::time::sleep(POLL_INTERVAL).await;

        let now = Local::now();
        if now < next_run {
            continue;
        }

        tracing::info!(
            "Starting scheduled report generation at {}",
            now.format("%Y-%m-%d %H:%M:%S")
        );

        match engine.run().await {
            Ok(Some(path)) => tracing::info!("Report generation completed: {}", path),
            Ok(None) => tracing::info!("Report generation completed, nothing to export"),
            Err(e) => tracing::error!("Error during scheduled report generation: {}", e),
        }

        next_run = schedule.next_occurrence(Local::now());
        tracing::info!(
            "Next report scheduled for {}",
            next_run.format("%Y-%m-%d %H:%M:%S")
        );
    }
}
