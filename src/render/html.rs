use super::{ResultView, PLAN_HEADING};
use crate::models::StudyPlan;

/// Renders the fragment placed inside the `result` container
#[derive(Debug, Default, Clone)]
pub struct HtmlResultView {
    content: String,
    reload_requested: bool,
}

impl HtmlResultView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn reload_requested(&self) -> bool {
        self.reload_requested
    }
}

impl ResultView for HtmlResultView {
    fn render_plan(&mut self, plan: &StudyPlan) {
        let mut html = String::from(r#"<div class="bg-white p-6 rounded-lg shadow-md">"#);
        html.push_str(&format!(
            r#"<h2 class="text-2xl font-bold mb-4">{}</h2>"#,
            PLAN_HEADING
        ));

        for day in &plan.days {
            html.push_str(r#"<div class="mb-4">"#);
            html.push_str(&format!(
                r#"<h3 class="text-lg font-semibold">{}</h3>"#,
                escape_html(&day.date)
            ));
            html.push_str("<ul>");
            for item in &day.schedule {
                html.push_str(&format!(
                    r#"<li class="py-2">{}</li>"#,
                    escape_html(&item.task_label())
                ));
            }
            html.push_str("</ul></div>");
        }

        html.push_str("</div>");
        self.content = html;
    }

    fn render_error(&mut self, message: &str) {
        self.content = format!(
            r#"<div class="bg-red-100 border-l-4 border-red-500 text-red-700 p-4"><p>{}</p></div>"#,
            escape_html(message)
        );
    }

    fn reload(&mut self) {
        self.reload_requested = true;
    }
}

/// Escapes text for use in element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
