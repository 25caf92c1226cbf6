use serde_json::Value;

use super::StudyPlan;
use crate::{AppError, AppResult};

/// Decoded body of `POST /generate-plan`
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Success {
        plan: StudyPlan,
        plan_id: Option<i64>,
    },
    Failure {
        message: String,
    },
}

impl ApiResponse {
    pub fn from_slice(body: &[u8]) -> AppResult<Self> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    /// Checks the shape field by field instead of trusting `success`/`plan` to be present
    pub fn from_value(value: Value) -> AppResult<Self> {
        let Value::Object(mut body) = value else {
            return Err(AppError::MalformedResponse(
                "response body is not a JSON object".to_string(),
            ));
        };

        let success = match body.get("success") {
            Some(Value::Bool(flag)) => *flag,
            Some(_) => {
                return Err(AppError::MalformedResponse(
                    "`success` is not a boolean".to_string(),
                ))
            }
            None => {
                return Err(AppError::MalformedResponse(
                    "`success` flag is missing".to_string(),
                ))
            }
        };

        if !success {
            return match body.remove("message") {
                Some(Value::String(message)) => Ok(ApiResponse::Failure { message }),
                _ => Err(AppError::MalformedResponse(
                    "failure response has no `message` string".to_string(),
                )),
            };
        }

        let plan = match body.remove("plan") {
            Some(plan @ Value::Array(_)) => serde_json::from_value::<StudyPlan>(plan)
                .map_err(|e| AppError::MalformedResponse(format!("invalid `plan`: {}", e)))?,
            Some(_) => {
                return Err(AppError::MalformedResponse(
                    "`plan` is not an array".to_string(),
                ))
            }
            None => {
                return Err(AppError::MalformedResponse(
                    "success response has no `plan`".to_string(),
                ))
            }
        };

        let plan_id = body.get("plan_id").and_then(Value::as_i64);

        Ok(ApiResponse::Success { plan, plan_id })
    }
}
