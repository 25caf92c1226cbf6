use serde::{Deserialize, Serialize};

/// Current values of the three form inputs at the moment of submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub subjects: String,
    pub deadline: String,
    pub hours: String,
}

impl FormSnapshot {
    pub fn new(
        subjects: impl Into<String>,
        deadline: impl Into<String>,
        hours: impl Into<String>,
    ) -> Self {
        Self {
            subjects: subjects.into(),
            deadline: deadline.into(),
            hours: hours.into(),
        }
    }
}

/// Body of `POST /generate-plan`. Values are passed through unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRequest {
    pub subjects: String,
    pub deadline: String,
    pub hours_per_day: String,
}

impl From<&FormSnapshot> for StudyRequest {
    fn from(form: &FormSnapshot) -> Self {
        Self {
            subjects: form.subjects.clone(),
            deadline: form.deadline.clone(),
            hours_per_day: form.hours.clone(),
        }
    }
}
