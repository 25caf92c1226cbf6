use super::{ResultView, PLAN_HEADING};
use crate::models::StudyPlan;

/// Plain-text rendering for a terminal
#[derive(Debug, Default, Clone)]
pub struct TextResultView {
    content: String,
    is_error: bool,
    reload_requested: bool,
}

impl TextResultView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn reload_requested(&self) -> bool {
        self.reload_requested
    }
}

impl ResultView for TextResultView {
    fn render_plan(&mut self, plan: &StudyPlan) {
        let mut out = format!("{}\n{}\n", PLAN_HEADING, "=".repeat(PLAN_HEADING.len()));
        for day in &plan.days {
            out.push('\n');
            out.push_str(&day.date);
            out.push('\n');
            for item in &day.schedule {
                out.push_str("  - ");
                out.push_str(&item.task_label());
                out.push('\n');
            }
        }
        self.content = out;
        self.is_error = false;
    }

    fn render_error(&mut self, message: &str) {
        self.content = format!("error: {}\n", message);
        self.is_error = true;
    }

    // nothing to refresh on a terminal; the plan stays on screen
    fn reload(&mut self) {
        self.reload_requested = true;
    }
}
