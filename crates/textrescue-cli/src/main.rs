//! textrescue: extract narrative treasures from a text and annotate their sentiment.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use textrescue_core::RescueConfig;
use textrescue_runtime::RescueAgent;
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "TEXTRESCUE_CONFIG";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Rescue { input: Option<PathBuf>, isolated: bool },
    Help,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut input: Option<&str> = None;
    let mut isolated = false;

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" | "help" => return Ok(Command::Help),
            "--isolated" => isolated = true,
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(format!(
                    "Unknown option: {}. Use 'textrescue --help' for usage.",
                    flag
                ))
            }
            path => {
                if input.is_some() {
                    return Err("Only one input file may be given.".into());
                }
                input = Some(path);
            }
        }
    }

    // "-" names stdin
    let input = input.filter(|p| *p != "-").map(PathBuf::from);
    Ok(Command::Rescue { input, isolated })
}

fn print_help() {
    println!("textrescue: extract narrative treasures and annotate their sentiment");
    println!();
    println!("Usage: textrescue [--isolated] [FILE]");
    println!();
    println!("Reads FILE (or stdin when FILE is absent or '-') and prints the result as JSON.");
    println!();
    println!("Options:");
    println!("  --isolated    Report failed treasures separately instead of failing the run");
    println!("  -h, --help    Show this help message");
    println!();
    println!("Environment:");
    println!("  {}                  Path to a JSON config file", CONFIG_ENV);
    println!("  TEXTRESCUE_MAX_CONCURRENCY         Parallel model calls (default 4)");
    println!("  TEXTRESCUE_CALL_TIMEOUT_SECS       Per-call timeout (default 30)");
    println!("  TEXTRESCUE_SIMULATED_LATENCY_MS    Canned model latency (default 500)");
    println!("  RUST_LOG                           Log filter (default info)");
}

fn load_config() -> RescueConfig {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => RescueConfig::load(Path::new(&path)),
        Err(_) => RescueConfig::from_env(),
    }
}

fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input, isolated) = match parse_args(&args) {
        Ok(Command::Help) => {
            print_help();
            return Ok(());
        }
        Ok(Command::Rescue { input, isolated }) => (input, isolated),
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(1);
        }
    };

    let config = load_config();
    let agent = RescueAgent::new(&config)?;
    let text = read_input(input.as_deref())?;
    info!("Read {} bytes of source text", text.len());

    let output = if isolated {
        let result = agent.rescue_isolated(&text).await;
        serde_json::to_string_pretty(&result)?
    } else {
        let result = agent.rescue(&text).await?;
        serde_json::to_string_pretty(&result)?
    };
    println!("{}", output);

    Ok(())
}
