use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, COOKIE};

use super::{PlanApi, GENERATE_PLAN_PATH};
use crate::models::{ApiResponse, StudyRequest};
use crate::{AppConfig, AppError, AppResult};

#[derive(Clone, Debug)]
pub struct HttpPlanClient {
    http: reqwest::Client,
    endpoint: String,
    session_cookie: Option<String>,
}

impl HttpPlanClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            tracing::error!(error = %e, "Failed to build HTTP client");
            AppError::Config(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            http,
            endpoint: format!("{}{}", config.base_url, GENERATE_PLAN_PATH),
            session_cookie: config.session_cookie.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PlanApi for HttpPlanClient {
    async fn generate_plan(&self, request: &StudyRequest) -> AppResult<ApiResponse> {
        tracing::debug!(endpoint = %self.endpoint, "Posting study plan request");

        let mut builder = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request);
        if let Some(cookie) = &self.session_cookie {
            builder = builder.header(COOKIE, cookie);
        }

        let response = builder.send().await?;

        // The body decides the outcome; an error status with a JSON body is still decoded
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(status = %status, bytes = body.len(), "Study plan response received");

        ApiResponse::from_slice(&body)
    }
}
