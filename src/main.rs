// ABOUTME: Entry point for the docker-facts CLI application.
// ABOUTME: Parses arguments, runs one resolution cycle and prints the facts.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use docker_facts::config::{self, Config};
use docker_facts::correlate::INTERFACES_FACT;
use docker_facts::error::{Error, Result};
use docker_facts::host::SystemHost;
use docker_facts::output::{Output, OutputMode};
use docker_facts::resolve::ResolutionCycle;
use docker_facts::types::FactName;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Cycle warnings are printed by Output; logs only surface errors unless verbose.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("error")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { force } => {
            let cwd = env::current_dir()?;
            config::init_config(&cwd, force)
        }
        Commands::List => {
            for name in FactName::ALL {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Resolve {
            facts,
            json,
            quiet,
            interfaces,
            facts_file,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let names = requested_facts(&facts)?;
            let host = build_host(facts_file, interfaces)?.with_platform(config.platform);

            let mode = if json {
                OutputMode::Json
            } else if quiet {
                OutputMode::Quiet
            } else {
                OutputMode::Normal
            };
            resolve(config, host, &names, mode).await;
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover_or_default(&env::current_dir()?),
    }
}

fn requested_facts(facts: &[String]) -> Result<Vec<FactName>> {
    if facts.is_empty() {
        return Ok(FactName::ALL.to_vec());
    }
    facts
        .iter()
        .map(|f| f.parse::<FactName>().map_err(Error::from))
        .collect()
}

fn build_host(facts_file: Option<PathBuf>, interfaces: Option<String>) -> Result<SystemHost> {
    let mut host = SystemHost::new();

    if let Some(path) = facts_file {
        let content = std::fs::read_to_string(&path)?;
        let facts: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)
            .map_err(|e| Error::FactsFile {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        host = host.with_facts(facts);
    }

    if let Some(list) = interfaces {
        host = host.with_fact(INTERFACES_FACT, serde_json::Value::String(list));
    }

    Ok(host)
}

/// Run one cycle; absent facts are printed as unset, never treated as errors.
async fn resolve(config: Config, host: SystemHost, names: &[FactName], mode: OutputMode) {
    let mut output = Output::new(mode);
    output.start_timer();

    let cycle = ResolutionCycle::new(Arc::new(host), config);
    let resolved = cycle.resolve().await;

    for warning in resolved.diagnostics.warnings() {
        output.warning(warning);
    }

    let facts: Vec<_> = names
        .iter()
        .map(|name| (*name, resolved.value(*name)))
        .collect();
    output.facts(&facts);
}
