use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use scorecard_core::{
    health::{AccountHealth, FieldCheck},
    FileLeadSummarySource, FileScorecardSource, LeadSummaryBoard, NotificationSink,
    ScorecardController, Toast,
};
use shared::{
    domain::{AccountId, Category},
    protocol::AccountHealthDetails,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod render;

use config::load_settings;

#[derive(Parser, Debug)]
#[command(name = "scorecard", about = "Account data-quality scorecard")]
struct Cli {
    /// Settings file layered over `scorecard.toml`.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Scorecard JSON document; overrides `source_path`.
    #[arg(long)]
    source: Option<PathBuf>,
    #[arg(long)]
    page_size: Option<usize>,
    /// Print the display contract as JSON.
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Per-category counts and the average completeness score.
    Summary,
    /// One page of a category.
    List {
        #[arg(long, default_value = "critical", value_parser = parse_category)]
        category: Category,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Missing-field suggestions for one account.
    Suggest { account_id: String },
    /// Health tiles from an account health JSON document.
    Health { file: PathBuf },
    /// Lead quality from `Label=value` pairs; an empty value counts as missing.
    LeadQuality {
        #[arg(required = true)]
        fields: Vec<String>,
    },
    /// Average lead score and poorly scored leads from a lead summary JSON document.
    LeadSummary {
        file: PathBuf,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

fn parse_category(raw: &str) -> Result<Category, String> {
    Category::from_label(raw).ok_or_else(|| format!("unknown category '{raw}'"))
}

fn parse_field_check(raw: &str) -> FieldCheck {
    match raw.split_once('=') {
        Some((label, value)) => FieldCheck::new(label.trim(), Some(value.to_string())),
        None => FieldCheck::new(raw.trim(), None),
    }
}

struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, toast: Toast) {
        eprintln!("[{:?}] {}: {}", toast.variant, toast.title, toast.message);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(source) = cli.source {
        settings.source_path = source;
    }
    if let Some(page_size) = cli.page_size {
        settings.page_size = page_size;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut controller = ScorecardController::new(
        FileScorecardSource::new(&settings.source_path),
        ConsoleSink,
        settings.page_size(),
    );

    match cli.command {
        Command::Summary => {
            controller
                .refresh()
                .await
                .map_err(|err| anyhow!(err.user_message()))?;
            let view = controller.view();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render::summary(&view)?);
            }
        }
        Command::List { category, page } => {
            controller
                .refresh()
                .await
                .map_err(|err| anyhow!(err.user_message()))?;
            controller.select_category(category);
            let window = controller.go_to_page(page);
            info!(category = %category, page = window.current_page, "listing");
            let view = controller.view();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render::list(&view)?);
            }
        }
        Command::Suggest { account_id } => {
            controller
                .request_suggestions(&AccountId::new(account_id))
                .await;
        }
        Command::Health { file } => {
            let raw = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("failed to read '{}'", file.display()))?;
            let details: AccountHealthDetails = serde_json::from_str(&raw)
                .with_context(|| format!("'{}' is not an account health document", file.display()))?;
            print!("{}", render::health(&AccountHealth::new(Some(details)))?);
        }
        Command::LeadQuality { fields } => {
            let checks: Vec<FieldCheck> = fields.iter().map(|raw| parse_field_check(raw)).collect();
            print!("{}", render::lead_quality(&checks)?);
        }
        Command::LeadSummary { file, page } => {
            let mut board = LeadSummaryBoard::new();
            board.refresh(&FileLeadSummarySource::new(file)).await;
            board.go_to_page(page);
            let view = board.view();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render::lead_summary(&view)?);
            }
        }
    }

    Ok(())
}
