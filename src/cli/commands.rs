//! CLI command implementations

use std::fs;
use std::path::Path;

use crate::advisor::{Advisor, AdvisorError};
use crate::catalog::RuleCatalog;
use crate::config::AdvisorConfig;
use crate::rest_api::AdvisorServer;
use crate::render::{DisabledRephraser, HttpRephraser, Rephraser};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Advise {
            facts,
            config,
            offline,
        } => advise(&facts, &config, offline),
        Command::Serve { config } => serve(&config),
        Command::Rules => rules(),
    }
}

/// Missing config file means defaults; a present but malformed one is fatal.
fn load_config(path: &Path) -> CliResult<AdvisorConfig> {
    if path.exists() {
        Ok(AdvisorConfig::load(path)?)
    } else {
        Ok(AdvisorConfig::default())
    }
}

fn build_rephraser(config: &AdvisorConfig, offline: bool) -> CliResult<Box<dyn Rephraser>> {
    if offline || !config.rephrase.enabled {
        Ok(Box::new(DisabledRephraser))
    } else {
        Ok(Box::new(HttpRephraser::from_config(&config.rephrase)?))
    }
}

/// One-shot evaluation: facts file in, pretty-printed advice JSON out
fn advise(facts_path: &Path, config_path: &Path, offline: bool) -> CliResult<()> {
    let config = load_config(config_path)?;
    let rephraser = build_rephraser(&config, offline)?;
    let advisor = Advisor::new(&config, rephraser)?;

    let raw = fs::read_to_string(facts_path)?;
    let input: serde_json::Value = serde_json::from_str(&raw)?;
    let advice = advisor.advise_json(&input)?;

    println!("{}", serde_json::to_string_pretty(&advice)?);
    Ok(())
}

/// Start the HTTP surface and serve until shutdown
fn serve(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let rephraser = build_rephraser(&config, false)?;
    let advisor = Advisor::new(&config, rephraser)?;
    let server = AdvisorServer::new(advisor);
    let addr = config.bind_addr();

    let runtime = tokio::runtime::Runtime::new().map_err(|e| CliError::Server(e.to_string()))?;
    runtime
        .block_on(server.serve(&addr))
        .map_err(|e| CliError::Server(e.to_string()))
}

/// Print the builtin catalog
fn rules() -> CliResult<()> {
    let catalog = RuleCatalog::builtin().map_err(AdvisorError::from)?;
    for rule in catalog.iter() {
        println!("{:<22} {:>3}%  {}", rule.name, rule.confidence, rule.recommendation);
    }
    Ok(())
}
