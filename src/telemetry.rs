use std::time::Duration;

use metrics::{counter, histogram};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber. Output goes to stderr; stdout is reserved for the rendered view.
pub fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .unwrap_or_else(|_| "text".to_string()) == "json";

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,study_planner_client=debug".into());

    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Plan,
    Rejected,
    Failed,
}

impl SubmissionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionOutcome::Plan => "plan",
            SubmissionOutcome::Rejected => "rejected",
            SubmissionOutcome::Failed => "failed",
        }
    }
}

/// No-op unless the embedding program installed a `metrics` recorder
pub fn record_submission(outcome: SubmissionOutcome, elapsed: Duration) {
    counter!(
        "study_plan_submissions_total",
        "outcome" => outcome.as_str()
    )
    .increment(1);

    histogram!(
        "study_plan_request_duration_seconds",
        "outcome" => outcome.as_str()
    )
    .record(elapsed.as_secs_f64());
}
