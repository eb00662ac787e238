mod analyze;
mod error;
mod jira;
mod model;
mod report;
mod utils;

use crate::analyze::analyzer::Analyzer;
use crate::analyze::SprintAnalysis;
use crate::error::{Error, Result};
use crate::jira::{JiraClient, JiraFetcher};
use crate::model::{previous_sprint, real_sprint_names, Issue, JiraConfig, Sprint, Timestamp};
use crate::report::console::{
    render_boards, render_connection, render_fields, render_team_totals, SprintListing,
};
use crate::report::markdown::MarkdownReport;
use crate::utils::{MultiProgressNew, ProgressStyleTemplate};
use chrono::Utc;
use clap::{Parser, Subcommand};
use indicatif::{MultiProgress, ProgressBar};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_OUTPUT_DIR: &str = "reports";

#[derive(Parser, Debug, Clone)]
#[command(name = "sprint-metrics")]
#[command(about = "Planned, unplanned and carried over work of a Jira sprint")]
struct Args {
    #[arg(long = "config", default_value = "jira.json", global = true)]
    config_path: String,
    #[arg(long = "jira_token", env = "JIRA_TOKEN", hide_env_values = true, global = true)]
    jira_token: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Categorize a sprint's issues and write the Markdown report
    Report {
        /// Sprint id; defaults to the last closed sprint before the active one
        #[arg(long)]
        sprint: Option<u64>,
        /// Directory the report is written to
        #[arg(long = "output", default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },
    /// List the board's sprints by state
    Sprints,
    /// Check the connection and list fields and agile boards
    Check,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "sprint_metrics=info".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();
    if let Err(error) = run(&args).await {
        tracing::error!("{error}");
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    let config = JiraConfig::from_config(&args.config_path)?;
    let Some(token) = args.jira_token.clone() else {
        return Err(Error::Config(
            "Jira token is required (--jira_token or JIRA_TOKEN)".into(),
        ));
    };
    let client = JiraClient::new(config, token)?;
    tracing::info!(
        url = %client.config().url,
        board = client.config().board,
        "using Jira board"
    );

    match args.command.clone() {
        Some(Command::Report { sprint, output_dir }) => {
            report(&client, sprint, &output_dir).await
        }
        Some(Command::Sprints) => sprints(&client).await,
        Some(Command::Check) => check(&client).await,
        None => report(&client, None, Path::new(DEFAULT_OUTPUT_DIR)).await,
    }
}

async fn report(client: &JiraClient, sprint_id: Option<u64>, output_dir: &Path) -> Result<()> {
    let now: Timestamp = Utc::now().into();
    let multi_progress = MultiProgress::new();

    let (board_sprints, target, issues) = match sprint_id {
        Some(sprint_id) => {
            let (board_sprints, target, issues) = futures::join!(
                fetch_board_sprints(client, &multi_progress),
                client.fetch_sprint(sprint_id),
                fetch_issues(client, sprint_id, &multi_progress),
            );
            (board_sprints?, target?, issues?)
        }
        None => {
            let board_sprints = fetch_board_sprints(client, &multi_progress).await?;
            let (target, active) = previous_sprint(&board_sprints)?;
            tracing::info!(
                active = %active.name,
                active_id = active.id,
                "reporting on the sprint before the active one"
            );
            let target = target.clone();
            let issues = fetch_issues(client, target.id, &multi_progress).await?;
            (board_sprints, target, issues)
        }
    };

    let real_sprint_names = real_sprint_names(&board_sprints, &now);
    tracing::info!(
        sprint = %target.name,
        id = target.id,
        period = %target.period(),
        real_sprints = real_sprint_names.len(),
        issues = issues.len(),
        "categorizing sprint"
    );

    let analyzed = SprintAnalysis::new(target, issues, real_sprint_names).analyze_sprint()?;
    let path = analyzed.report_create(output_dir)?;

    tracing::info!(
        developers = analyzed.developers.len(),
        "team totals: {}",
        render_team_totals(&analyzed.team_totals())
    );
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}

async fn sprints(client: &JiraClient) -> Result<()> {
    let multi_progress = MultiProgress::new();
    let sprints = fetch_board_sprints(client, &multi_progress).await?;
    let listing = SprintListing::new(&sprints);
    if listing.is_empty() {
        tracing::warn!(board = client.config().board, "board has no sprints");
    }
    println!("{}", listing.render());
    Ok(())
}

async fn check(client: &JiraClient) -> Result<()> {
    let (server, user, fields, boards) = futures::join!(
        client.fetch_server_info(),
        client.fetch_myself(),
        client.fetch_fields(),
        client.fetch_boards(),
    );
    let boards = boards?;
    let first_board_sprints = match boards.values.first() {
        Some(board) => {
            client
                .fetch_board_sprints(board.id, Box::new(|_: u64, _: Option<u64>| {}))
                .await?
        }
        None => Vec::new(),
    };

    println!("{}", render_connection(&server?, &user?));
    println!("{}", render_fields(&fields?));
    println!("{}", render_boards(&boards, &first_board_sprints));
    Ok(())
}

async fn fetch_board_sprints(
    client: &JiraClient,
    multi_progress: &MultiProgress,
) -> Result<Vec<Sprint>> {
    let pb = multi_progress.add_spinner("Fetch board sprints ...");
    let progress_pb = pb.clone();
    let progress = move |fetched: u64, _total: Option<u64>| {
        progress_pb.set_message(format!("Fetch board sprints ({fetched} so far) ..."));
    };
    let sprints = client.fetch_sprints(Box::new(progress)).await?;
    pb.finish_with_message(format!(
        "✅ Completed fetch board sprints (find {} sprints)",
        sprints.len()
    ));
    Ok(sprints)
}

async fn fetch_issues(
    client: &JiraClient,
    sprint_id: u64,
    multi_progress: &MultiProgress,
) -> Result<Vec<Issue>> {
    let pb = multi_progress.add_with_style(
        ProgressBar::no_length(),
        ProgressStyleTemplate::pages_bar(),
    );
    pb.set_message("Fetch sprint issues");
    let progress_pb = pb.clone();
    let progress = move |fetched: u64, total: Option<u64>| {
        if let Some(total) = total {
            progress_pb.set_length(total);
        }
        progress_pb.set_position(fetched);
    };
    let issues = client.fetch_sprint_issues(sprint_id, Box::new(progress)).await?;
    pb.set_style(ProgressStyleTemplate::only_message());
    pb.finish_with_message(format!(
        "✅ Completed fetch sprint issues (find {} issues)",
        issues.len()
    ));
    Ok(issues)
}
