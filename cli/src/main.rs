//! scout CLI binary: research a company or serve the HTTP API.
//!
//! Subcommands: `research` (one run, report to stdout), `serve` (HTTP API).
//! Credentials and defaults come from the process env, `.env`, and `~/.config/scout/config.toml`.

mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scout::{build_research_runner, ResearchBuildConfig, RunResult};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "scout")]
#[command(about = "Scout: company research with web search and social lookups")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    cmd: Command,

    /// Verbose: debug logs for steps, routing and tool calls
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH", env = "SCOUT_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Research one company and print the report
    Research(ResearchArgs),
    /// Run the HTTP API (GET /, POST /search)
    Serve(ServeArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct ResearchArgs {
    /// Company name, e.g. "Acme Corp"
    company: String,

    /// Max reasoning steps before a partial report (default 50 or SCOUT_MAX_ITERATIONS)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    max_iterations: Option<u32>,

    /// Print {"query", "report", "termination", "iterations"} as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug, Clone)]
struct ServeArgs {
    /// Listen address (default 127.0.0.1:8000 or SCOUT_SERVE_ADDR)
    #[arg(long, value_name = "ADDR")]
    addr: Option<String>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    query: &'a str,
    report: String,
    termination: &'a scout::Termination,
    iterations: u32,
}

fn print_result(
    company: &str,
    result: &RunResult,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let out = JsonReport {
            query: company,
            report: result.report(),
            termination: result.termination(),
            iterations: result.iterations(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", result.report());
        if result.is_partial() {
            eprintln!("scout: {} (report is partial)", result.termination());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let _log_guard = logging::init(args.verbose, args.log_file.as_deref())?;

    let settings = match config::load_settings(&config::LoadOptions::default()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("scout: config error: {}", e);
            std::process::exit(1);
        }
    };
    let mut build = ResearchBuildConfig::from_settings(&settings);
    tracing::debug!(
        model = %build.model,
        max_iterations = build.max_iterations,
        tool_timeout = ?build.tool_timeout,
        "Settings loaded"
    );

    match args.cmd {
        Command::Research(ra) => {
            if ra.company.trim().is_empty() {
                eprintln!("scout: company name must not be empty");
                std::process::exit(2);
            }
            if let Some(n) = ra.max_iterations {
                build.max_iterations = n;
            }
            let runner = match build_research_runner(&build) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("scout: {}", e);
                    std::process::exit(1);
                }
            };
            if args.verbose {
                eprint!("{}", scout::graph::generate_text(runner.graph()));
            }
            match runner.research(&ra.company).await {
                Ok(result) => print_result(ra.company.trim(), &result, ra.json)?,
                Err(e) => {
                    eprintln!("scout: research failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Serve(sa) => {
            let runner = match build_research_runner(&build) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("scout: {}", e);
                    std::process::exit(1);
                }
            };
            let addr = sa.addr.unwrap_or(settings.serve_addr);
            if let Err(e) = serve::run_serve(Some(&addr), runner).await {
                eprintln!("serve error: {}", e);
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
