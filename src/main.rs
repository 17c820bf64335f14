//! Fence, gate and wall planning permission check
//!
//! Command-line front end for the permission evaluator.

use clap::{Parser, Subcommand};
use fence_permission::{
    Result,
    config::{LogFormat, OutputFormat, load_config},
    report::EvaluationReport,
    request::{EvaluationRequest, request_schema},
    rules::{CategoryCode, Condition, ConditionSet, explain},
    scenarios::scenarios,
};
use std::io::Read;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Planning permission check for fences, gates and walls
#[derive(Parser, Debug)]
#[command(name = "fence-permission")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "FENCE_PERMISSION_CONFIG", global = true)]
    config: Option<String>,

    /// Log level (off, trace, debug, info, warn, error)
    #[arg(long, env = "FENCE_PERMISSION_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Report format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Explain which family and conditions decided the outcome
    #[arg(long, global = true)]
    explain: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a category with the given conditions
    Check {
        /// Site category code, e.g. 2U1 or 2A3
        category: String,

        /// Condition that applies to the site (repeatable), e.g. is_highway_adjacent
        #[arg(short = 'C', long = "condition", value_parser = parse_condition)]
        conditions: Vec<Condition>,
    },
    /// Evaluate a JSON request document (from the argument, or stdin if omitted or "-")
    Eval {
        /// Request document, e.g. '{"category": "2A1", "is_highway_adjacent": true}'
        json: Option<String>,
    },
    /// Run the built-in demonstration scenarios
    Scenarios,
    /// Print the JSON Schema of the request document
    Schema,
}

fn parse_condition(name: &str) -> std::result::Result<Condition, String> {
    Condition::try_parse(name).ok_or_else(|| {
        let known: Vec<&str> = Condition::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown condition '{}' (expected one of: {})", name, known.join(", "))
    })
}

fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn read_request(json: Option<String>) -> std::io::Result<String> {
    match json {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn run(command: Command, format: OutputFormat, explain_output: bool) -> Result<()> {
    match command {
        Command::Check {
            category,
            conditions,
        } => {
            let conditions: ConditionSet = conditions.into_iter().collect();
            let category = CategoryCode::new(category);
            let evaluation = explain(category.as_str(), &conditions);
            let report = EvaluationReport::new(category, evaluation);
            println!("{}", report.render(format, explain_output)?);
        }
        Command::Eval { json } => {
            let text = read_request(json)?;
            let request = EvaluationRequest::from_json_str(&text)?;
            let evaluation = request.explain();
            let report = EvaluationReport::new(request.category, evaluation);
            println!("{}", report.render(format, explain_output)?);
        }
        Command::Scenarios => {
            let mut rendered = Vec::new();
            for scenario in scenarios() {
                let report = EvaluationReport::new(scenario.category.into(), scenario.run());
                match format {
                    OutputFormat::Json => rendered.push(serde_json::json!({
                        "description": scenario.description,
                        "report": report,
                    })),
                    OutputFormat::Text => println!(
                        "{}: {}",
                        scenario.description,
                        report.render(OutputFormat::Text, true)?
                    ),
                }
            }
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&rendered)?);
            }
        }
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&request_schema())?);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = load_config(args.config.as_deref())?;

    // Initialize logging
    let log_level = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_str());
    init_logging(log_level, config.logging.format);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting fence-permission"
    );

    let format = args.format.unwrap_or(config.output.format);
    let explain_output = args.explain || config.output.explain;

    run(args.command, format, explain_output)
        .inspect_err(|e| error!(error = %e, "Command failed"))?;

    Ok(())
}
