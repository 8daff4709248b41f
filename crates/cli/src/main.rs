//! # dns-check
//!
//! Checks that each hostname resolves over IPv4 (A) or IPv6 (AAAA).
//! Exit status: 0 all healthy, 1 at least one failed, 2 configuration error.

mod bootstrap;
mod report;

use bootstrap::{init_logging, load_config};
use clap::Parser;
use dns_check_application::use_cases::DualStackCheckUseCase;
use dns_check_domain::{CliOverrides, Config, HealthCheckRequest};
use dns_check_infrastructure::HickoryRecordResolver;
use futures::future::join_all;
use report::CheckReport;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "dns-check")]
#[command(version)]
#[command(about = "Check that hostnames resolve over IPv4 or IPv6")]
struct Cli {
    /// Hostnames to check
    #[arg(required = true)]
    hostnames: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Per-query timeout in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    timeout: Option<u64>,

    /// Attempts per query
    #[arg(short = 'r', long)]
    tries: Option<u32>,

    /// Resolver server to use instead of the system default (repeatable)
    #[arg(short = 's', long = "server", value_name = "ADDR")]
    servers: Vec<String>,

    /// Log level: trace, debug, info, warn or error
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Print one JSON object per hostname
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            timeout: self.timeout,
            tries: self.tries,
            servers: self.servers.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref(), cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    init_logging(&config);
    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        timeout_ms = ?config.resolver.timeout,
        tries = ?config.resolver.tries,
        servers = ?config.resolver.servers,
        "Configuration loaded"
    );

    match run(&cli, &config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether every hostname passed.
async fn run(cli: &Cli, config: &Config) -> anyhow::Result<bool> {
    let use_case = Arc::new(DualStackCheckUseCase::new(Arc::new(
        HickoryRecordResolver::new(),
    )));

    let checks = cli.hostnames.iter().map(|hostname| {
        let use_case = Arc::clone(&use_case);
        let request =
            HealthCheckRequest::new(hostname.as_str()).with_options(Some(config.resolver.clone()));
        async move {
            let outcome = use_case.execute(&request).await;
            if let Err(ref failure) = outcome {
                warn!(hostname = %request.hostname, detail = %failure.detail(), "{}", failure);
            }
            CheckReport::from_outcome(&request.hostname, outcome)
        }
    });

    let reports = join_all(checks).await;

    for report in &reports {
        if cli.json {
            println!("{}", report.to_json()?);
        } else {
            println!("{}", report.to_line());
        }
    }

    Ok(reports.iter().all(|r| r.healthy))
}
