//! API Access Check
//!
//! Loads accounts and policies from configuration, registers the role-based
//! checker and answers one access question per invocation.
//!
//! # Usage
//!
//! ```bash
//! api-access-check --config acl.yaml check --account A2 --operation listVMs
//! api-access-check --config acl.yaml check --account A2 --operation deleteVM --json
//! api-access-check --config acl.yaml validate
//! ```
//!
//! Exit codes: `0` allowed / valid, `2` denied, `1` configuration or
//! infrastructure error.

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use api_access::{CheckerRegistry, register_checker};
use api_access_sdk::{Decision, DenialDisclosure, Identity};
use clap::{Parser, Subcommand};
use static_acl_plugin::Service as StaticAclService;

use crate::config::AppConfig;

const EXIT_DENIED: u8 = 2;

/// Role-based API access checker
#[derive(Parser, Debug)]
#[command(name = "api-access-check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide whether an account may invoke an operation
    Check {
        /// Account identifier of the caller
        #[arg(long)]
        account: String,

        /// User identifier, reported in logs only
        #[arg(long)]
        user: Option<String>,

        /// Operation (command) name, matched exactly
        #[arg(long)]
        operation: String,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate configuration and exit
    Validate,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load(cli.config.as_deref())?;
    logging::init(cli.verbose, &config.logging.level);

    if cli.print_config {
        let rendered =
            serde_json::to_string_pretty(&config).context("failed to render configuration")?;
        println!("{rendered}");
        return Ok(ExitCode::SUCCESS);
    }

    let plugin = Arc::new(StaticAclService::from_config(&config.static_acl));
    let registry = CheckerRegistry::new();
    register_checker(&registry, &config.api_access, plugin.clone(), plugin.clone());

    match cli.command {
        None | Some(Commands::Validate) => {
            println!(
                "configuration OK: {} accounts, {} policies ({} bound), checkers: {}",
                plugin.account_count(),
                plugin.policy_count(),
                plugin.bound_policy_count(),
                registry.names().join(", ")
            );
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Check {
            account,
            user,
            operation,
            json,
        }) => {
            let identity = match user {
                Some(user) => Identity::for_user(account, user),
                None => Identity::for_account(account),
            };
            let checker = registry.get(&config.api_access.checker_name)?;
            let decision = checker.decide(&identity, &operation).await?;

            if json {
                println!("{}", render_json(decision, config.api_access.disclosure));
            } else {
                match decision {
                    Decision::Allowed => println!("allowed"),
                    Decision::Denied(reason) => println!(
                        "denied: {}",
                        reason.public_message(config.api_access.disclosure)
                    ),
                }
            }

            Ok(if decision.is_allowed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_DENIED)
            })
        }
    }
}

/// Denial reasons are only included with `Detailed` disclosure.
fn render_json(decision: Decision, disclosure: DenialDisclosure) -> serde_json::Value {
    match (decision, disclosure) {
        (Decision::Allowed, _) => serde_json::json!({ "decision": "allowed" }),
        (Decision::Denied(reason), DenialDisclosure::Detailed) => serde_json::json!({
            "decision": "denied",
            "reason": reason,
            "message": reason.public_message(disclosure),
        }),
        (Decision::Denied(reason), DenialDisclosure::Uniform) => serde_json::json!({
            "decision": "denied",
            "message": reason.public_message(disclosure),
        }),
    }
}
