pub mod html;
pub mod text;

use crate::models::StudyPlan;

pub use html::HtmlResultView;
pub use text::TextResultView;

pub const PLAN_HEADING: &str = "Your Study Plan";

/// The result container. Every render replaces whatever the container held before.
pub trait ResultView {
    fn render_plan(&mut self, plan: &StudyPlan);

    /// `message` is untrusted text and must never be interpreted as markup
    fn render_error(&mut self, message: &str);

    /// Called after a successful render so the surrounding page can refresh
    /// its server-rendered list of saved plans
    fn reload(&mut self);
}
