mod config;
mod errors;
mod expense;
mod llm_client;
mod resume;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;
use crate::expense::loader::load_expenses;
use crate::expense::models::sample_records;
use crate::expense::predictor::{predict_next, ExpensePredictor, Forecast, DEFAULT_HORIZON_DAYS};
use crate::llm_client::OpenAiClient;
use crate::resume::analyzer::ResumeAnalyzer;
use crate::resume::ingest::load_resume_text;

/// Resume assessment and expense prediction utilities.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send a resume (.txt, .md or .pdf) for assessment and print the response
    Analyze {
        path: PathBuf,

        /// Model identifier (defaults to FOLIO_MODEL, then gpt-4o)
        #[arg(long)]
        model: Option<String>,
    },

    /// Predict the expense a number of days past the latest record in a JSON file
    Predict {
        path: PathBuf,

        /// Days past the latest record to extrapolate to
        #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS)]
        horizon: u32,

        /// Print the full forecast as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the predictor on the built-in sample expenses
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries command output only
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli.command, &config).await {
        e.log();
        eprintln!("error [{}]: {e}", e.code());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Command, config: &Config) -> Result<(), AppError> {
    match command {
        Command::Analyze { path, model } => {
            let client = OpenAiClient::new(config.require_api_key()?.to_string())
                .with_base_url(config.openai_base_url.clone());
            let analyzer = ResumeAnalyzer::new(Arc::new(client))
                .with_model(model.unwrap_or_else(|| config.model.clone()));
            info!("Resume analyzer initialized (model: {})", analyzer.model());

            let resume_text = load_resume_text(&path)?;
            let assessment = analyzer.get_resume_assessment(&resume_text).await?;
            println!("{assessment}");
        }
        Command::Predict {
            path,
            horizon,
            json,
        } => {
            let records = load_expenses(&path)?;
            let predictor = ExpensePredictor::with_horizon(horizon);
            info!("Forecasting {} days ahead", predictor.horizon_days());
            let forecast = predictor.forecast(&records)?;
            println!("{}", render_forecast(&forecast, json)?);
        }
        Command::Demo => {
            let predicted = predict_next(&sample_records())?;
            println!("Predicted expense for next month: ${predicted:.2}");
        }
    }
    Ok(())
}

fn render_forecast(forecast: &Forecast, json: bool) -> Result<String, AppError> {
    if json {
        let out = serde_json::to_string_pretty(forecast).map_err(anyhow::Error::from)?;
        Ok(out)
    } else {
        Ok(format!(
            "Predicted expense {} days past the latest record: ${:.2}",
            forecast.target_offset - forecast.last_offset,
            forecast.predicted
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    use crate::expense::regression::LinearModel;

    fn declining_forecast() -> Forecast {
        Forecast {
            model: LinearModel {
                slope: -100.0,
                intercept: 1000.0,
            },
            sample_count: 2,
            last_offset: 10,
            target_offset: 40,
            raw: -3000.0,
            predicted: 0.0,
        }
    }

    #[test]
    fn test_json_forecast_carries_fit_and_prediction() {
        let out = render_forecast(&declining_forecast(), true).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["model"]["slope"], -100.0);
        assert_eq!(value["model"]["intercept"], 1000.0);
        assert_eq!(value["sample_count"], 2);
        assert_eq!(value["last_offset"], 10);
        assert_eq!(value["target_offset"], 40);
        assert_eq!(value["raw"], -3000.0);
        assert_eq!(value["predicted"], 0.0);
    }

    #[test]
    fn test_text_forecast_reports_horizon_and_amount() {
        let forecast = ExpensePredictor::default()
            .forecast(&sample_records())
            .unwrap();
        let out = render_forecast(&forecast, false).unwrap();
        assert_eq!(
            out,
            format!(
                "Predicted expense 30 days past the latest record: ${:.2}",
                forecast.predicted
            )
        );
        assert!(out.ends_with("$121.13"), "{out}");
    }
}
