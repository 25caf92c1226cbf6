pub mod http;

use async_trait::async_trait;

use crate::models::{ApiResponse, StudyRequest};
use crate::AppResult;

pub use http::HttpPlanClient;

/// Path of the plan generation endpoint, relative to the backend base URL
pub const GENERATE_PLAN_PATH: &str = "/generate-plan";

/// The backend's plan generation call. One invocation is one request; no retries.
#[async_trait]
pub trait PlanApi: Send + Sync {
    async fn generate_plan(&self, request: &StudyRequest) -> AppResult<ApiResponse>;
}
