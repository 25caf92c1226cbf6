use std::process::ExitCode;

use study_planner_client::{
    calendar, telemetry, AppConfig, AppError, FormController, FormSnapshot, HtmlResultView,
    HttpPlanClient, OutputFormat, RenderCommand, TextResultView,
};

const USAGE: &str = "usage: study-planner <subjects> <deadline> <hours>";

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    telemetry::init_tracing();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether a plan (rather than an error view) was rendered
async fn run() -> Result<bool, Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let form = read_form()?;
    let client = HttpPlanClient::new(&config)?;
    tracing::info!(endpoint = client.endpoint(), "Submitting study form");

    let controller = FormController::new(client);

    let command = match config.output {
        OutputFormat::Text => {
            let mut view = TextResultView::new();
            let command = controller.handle(&form, &mut view).await;
            print!("{}", view.content());
            if view.reload_requested() {
                tracing::debug!("Reload requested; saved plans are listed on the planner page");
            }
            command
        }
        OutputFormat::Html => {
            let mut view = HtmlResultView::new();
            let command = controller.handle(&form, &mut view).await;
            println!("{}", view.content());
            command
        }
    };

    if let (RenderCommand::Plan { plan, .. }, Some(path)) = (&command, &config.ics_path) {
        let export = calendar::plan_to_events(plan);
        if export.skipped > 0 {
            tracing::warn!(skipped = export.skipped, "Some schedule items were left out of the calendar export");
        }
        calendar::write_ics(path, &export.events).await?;
    }

    Ok(command.is_plan())
}

/// Positional arguments first, then `STUDY_PLANNER_*` variables for whatever is missing
fn read_form() -> Result<FormSnapshot, AppError> {
    let mut args = std::env::args().skip(1);
    let mut field = |env_key: &str| {
        args.next()
            .or_else(|| std::env::var(env_key).ok())
            .ok_or_else(|| AppError::Config(format!("{} (or set {})", USAGE, env_key)))
    };

    let subjects = field("STUDY_PLANNER_SUBJECTS")?;
    let deadline = field("STUDY_PLANNER_DEADLINE")?;
    let hours = field("STUDY_PLANNER_HOURS")?;

    Ok(FormSnapshot::new(subjects, deadline, hours))
}
