use std::time::Instant;

use tracing::Instrument;
use uuid::Uuid;

use crate::client::PlanApi;
use crate::models::{ApiResponse, FormSnapshot, StudyPlan, StudyRequest};
use crate::render::ResultView;
use crate::telemetry::{self, SubmissionOutcome};

/// Shown for every transport or decode failure; the underlying error only goes to the log
pub const GENERIC_ERROR_MESSAGE: &str = "Error generating study plan. Please try again.";

/// What a submission asks the result container to do
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Plan { plan: StudyPlan, reload: bool },
    Error(String),
}

impl RenderCommand {
    pub fn apply<V: ResultView + ?Sized>(&self, view: &mut V) {
        match self {
            RenderCommand::Plan { plan, reload } => {
                view.render_plan(plan);
                if *reload {
                    view.reload();
                }
            }
            RenderCommand::Error(message) => view.render_error(message),
        }
    }

    pub fn is_plan(&self) -> bool {
        matches!(self, RenderCommand::Plan { .. })
    }
}

/// Submits the study form. Overlapping submissions are not serialized; the last one applied wins.
pub struct FormController<A> {
    api: A,
}

impl<A: PlanApi> FormController<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn submit(&self, form: &FormSnapshot) -> RenderCommand {
        let submission_id = Uuid::new_v4();
        let span = tracing::info_span!("submission", %submission_id);

        async move {
            let request = StudyRequest::from(form);
            let started = Instant::now();
            let result = self.api.generate_plan(&request).await;
            let elapsed = started.elapsed();

            let (command, outcome) = match result {
                Ok(ApiResponse::Success { plan, plan_id }) => {
                    tracing::info!(
                        days = plan.days.len(),
                        items = plan.item_count(),
                        plan_id,
                        "Study plan generated"
                    );
                    (
                        RenderCommand::Plan { plan, reload: true },
                        SubmissionOutcome::Plan,
                    )
                }
                Ok(ApiResponse::Failure { message }) => {
                    tracing::info!(reason = %message, "Backend rejected study plan request");
                    (RenderCommand::Error(message), SubmissionOutcome::Rejected)
                }
                Err(e) => {
                    tracing::warn!(error = %e, kind = e.kind(), "Study plan request failed");
                    (
                        RenderCommand::Error(GENERIC_ERROR_MESSAGE.to_string()),
                        SubmissionOutcome::Failed,
                    )
                }
            };

            telemetry::record_submission(outcome, elapsed);
            command
        }
        .instrument(span)
        .await
    }

    /// Submit and write the result into `view`
    pub async fn handle<V: ResultView + ?Sized>(
        &self,
        form: &FormSnapshot,
        view: &mut V,
    ) -> RenderCommand {
        let command = self.submit(form).await;
        command.apply(view);
        command
    }
}
