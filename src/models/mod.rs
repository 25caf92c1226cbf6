pub mod api_response;
pub mod study_plan;
pub mod study_request;

pub use api_response::ApiResponse;
pub use study_plan::{DayPlan, Hours, ScheduleItem, StudyPlan};
pub use study_request::{FormSnapshot, StudyRequest};
