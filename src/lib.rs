pub mod calendar;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod render;
pub mod telemetry;

pub use client::{HttpPlanClient, PlanApi};
pub use config::{AppConfig, OutputFormat};
pub use error::{AppError, AppResult};
pub use form::{FormController, RenderCommand, GENERIC_ERROR_MESSAGE};
pub use models::{ApiResponse, FormSnapshot, StudyPlan, StudyRequest};
pub use render::{HtmlResultView, ResultView, TextResultView};
