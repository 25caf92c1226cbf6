use std::fmt;

use serde::{Deserialize, Serialize};

/// A generated plan, one entry per calendar day, in server order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudyPlan {
    pub days: Vec<DayPlan>,
}

impl StudyPlan {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.days.iter().map(|d| d.schedule.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: String,
    pub schedule: Vec<ScheduleItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub time: String,
    pub subject: String,
    pub duration: Hours,
}

impl ScheduleItem {
    /// `"<time>: <subject> (<duration> hours)"`, also used by the backend as the progress task name
    pub fn task_label(&self) -> String {
        format!("{}: {} ({} hours)", self.time, self.subject, self.duration)
    }
}

/// Session length; the backend may send it as a JSON number or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Hours {
    Number(serde_json::Number),
    Text(String),
}

impl Hours {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Hours::Number(n) => n.as_f64(),
            Hours::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hours::Text(s) => f.write_str(s),
            Hours::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    return write!(f, "{}", n);
                }
                match n.as_f64() {
                    // whole floats print without a fractional part: 2.0 -> "2"
                    Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", v as i64),
                    Some(v) if v != 0.0 && (v.abs() >= 1e21 || v.abs() < 1e-6) => {
                        write_exponent(f, v)
                    }
                    Some(v) => write!(f, "{}", v),
                    None => write!(f, "{}", n),
                }
            }
        }
    }
}

// same shape as JavaScript's Number#toString: 1e+21, 1.5e-7
fn write_exponent(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&formatted),
    }
}
