use clap::{Parser, Subcommand};
use complaint_triage::models::ComplaintRecord;
use complaint_triage::pipeline::{TriageEngine, TriageRequest};
use complaint_triage::TriageConfig;
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "triage-cli")]
#[command(about = "Complaint triage diagnostics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline on one complaint
    Triage {
        #[arg(value_name = "TEXT")]
        text: String,

        /// Manual category override (exact display name)
        #[arg(short, long)]
        category: Option<String>,

        /// Manual priority override (Low, Medium, or High)
        #[arg(short, long)]
        priority: Option<String>,

        /// Pending-complaint count used to set the workload factor first
        #[arg(short = 'w', long)]
        pending: Option<usize>,
    },

    /// Rank category suggestions for a complaint text
    Suggest {
        #[arg(value_name = "TEXT")]
        text: String,

        /// Number of suggestions to show
        #[arg(short = 'n', long, default_value = "3")]
        top: usize,
    },

    /// Predict resolution time for a category and priority
    Predict {
        #[arg(value_name = "CATEGORY")]
        category: String,

        #[arg(value_name = "PRIORITY")]
        priority: String,

        /// Pending-complaint count used to set the workload factor first
        #[arg(short = 'w', long)]
        pending: Option<usize>,
    },

    /// Aggregate category statistics from a JSON complaint log
    Stats {
        /// Path to a JSON array of {category, status, resolution_time_hours}
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "complaint_triage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = TriageConfig::load()?;
    let engine = TriageEngine::from_config(&config)?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Triage {
            text,
            category,
            priority,
            pending,
        } => {
            if let Some(pending) = pending {
                engine.predictor().update_workload(pending);
            }

            let mut request = TriageRequest::new(text);
            if let Some(category) = category {
                request = request.with_category(category);
            }
            if let Some(priority) = priority {
                request = request.with_priority(priority);
            }

            let outcome = engine.triage(&request);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }

        Commands::Suggest { text, top } => {
            let suggestions = engine.suggest(&text, top);
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        }

        Commands::Predict {
            category,
            priority,
            pending,
        } => {
            if let Some(pending) = pending {
                engine.predictor().update_workload(pending);
            }

            let prediction = engine.predictor().predict_named(&category, &priority, None);
            println!("{}", serde_json::to_string_pretty(&prediction)?);
        }

        Commands::Stats { file } => {
            let body = std::fs::read_to_string(&file)?;
            let records: Vec<ComplaintRecord> = serde_json::from_str(&body)?;
            let stats = engine.category_statistics(&records);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
