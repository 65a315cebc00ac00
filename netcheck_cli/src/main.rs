//! netcheck CLI
//!
//! Loads a network snapshot produced by a simulation run and verifies a
//! named postcondition against it.

use clap::Parser;
use netcheck_core::checks::{
    check_all_alive, check_all_failed, check_bfs_tree, check_bfs_tree_with_children,
    check_bounded_failures, check_broadcast, check_consensus, check_consensus_in_value_set,
    check_consensus_on_default_value, check_leader_election, check_luby_mis, check_no_consensus,
    check_ring_failure_all_fail, check_ring_failure_no_consensus, FaultRule,
};
use netcheck_core::{CheckError, CheckId, ReportConfig, Reporter};
use netcheck_net::{AlgorithmParams, Network, Snapshot, Value};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Verify distributed-algorithm postconditions against a network snapshot
#[derive(Parser, Debug)]
#[command(name = "netcheck")]
#[command(about = "Run a verification check over a simulated network snapshot", long_about = None)]
struct Args {
    /// Snapshot JSON file produced by the simulation harness
    #[arg(short, long, required_unless_present = "list")]
    snapshot: Option<PathBuf>,

    /// Check to run (see --list)
    #[arg(short, long, required_unless_present = "list")]
    check: Option<String>,

    /// Attribute name for the broadcast check
    #[arg(long)]
    attr: Option<String>,

    /// Threshold interpretation for bounded_failures (strict|legacy)
    #[arg(long, default_value = "strict")]
    rule: String,

    /// Legal value set V, comma separated (overrides snapshot params)
    #[arg(long)]
    values: Option<String>,

    /// Default value v_0 (overrides snapshot params)
    #[arg(long)]
    default_value: Option<String>,

    /// Fault threshold f (overrides snapshot params)
    #[arg(long)]
    fault_threshold: Option<usize>,

    /// List available checks and exit
    #[arg(long)]
    list: bool,

    /// JSON output for CI parsing
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Merges snapshot-embedded params with CLI overrides.
fn resolve_params(snapshot: Option<AlgorithmParams>, args: &Args) -> AlgorithmParams {
    let mut params = snapshot.unwrap_or_default();
    if let Some(values) = &args.values {
        params.initial_values = values
            .split(',')
            .map(|v| Value::new(v.trim()))
            .collect();
    }
    if let Some(v_0) = &args.default_value {
        params.default_value = Some(Value::new(v_0.as_str()));
    }
    if let Some(f) = args.fault_threshold {
        params.fault_threshold = Some(f);
    }
    params
}

fn run_check(
    check: CheckId,
    network: &Network,
    params: &AlgorithmParams,
    attr: Option<&str>,
    rule: FaultRule,
) -> Result<(), CheckError> {
    match check {
        CheckId::LeaderElection => check_leader_election(network),
        CheckId::Broadcast => {
            // main validates --attr before dispatch
            check_broadcast(network, attr.unwrap_or("attr"))
        }
        CheckId::BfsTree => check_bfs_tree(network),
        CheckId::BfsTreeWithChildren => check_bfs_tree_with_children(network),
        CheckId::LubyMis => check_luby_mis(network),
        CheckId::Consensus => check_consensus(network),
        CheckId::ConsensusInValueSet => check_consensus_in_value_set(network, params),
        CheckId::ConsensusOnDefaultValue => check_consensus_on_default_value(network, params),
        CheckId::NoConsensus => check_no_consensus(network),
        CheckId::BoundedFailures => check_bounded_failures(network, params, rule),
        CheckId::RingFailureNoConsensus => check_ring_failure_no_consensus(network),
        CheckId::RingFailureAllFail => check_ring_failure_all_fail(network),
        CheckId::AllFailed => check_all_failed(network),
        CheckId::AllAlive => check_all_alive(network),
    }
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    if args.list {
        for check in CheckId::all() {
            println!("{:<28} {}", check.name(), check.description());
        }
        return;
    }

    // required_unless_present guarantees both are set past this point
    let snapshot_path = args.snapshot.clone().unwrap_or_default();
    let check_name = args.check.clone().unwrap_or_default();

    let check: CheckId = check_name.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Run with --list to see available checks");
        std::process::exit(2);
    });

    if check == CheckId::Broadcast && args.attr.is_none() {
        eprintln!("Error: --attr is required for the broadcast check");
        std::process::exit(2);
    }

    let rule: FaultRule = args.rule.parse().unwrap_or_else(|e: String| {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    });

    let snapshot = Snapshot::read_from_file(&snapshot_path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", snapshot_path.display(), e);
        std::process::exit(2);
    });
    info!(
        processes = snapshot.network.len(),
        algorithm = snapshot.algorithm.as_deref().unwrap_or("unknown"),
        "loaded snapshot"
    );

    let params = resolve_params(snapshot.params.clone(), &args);
    if check.requires_params() && params.initial_values.is_empty() {
        debug!("descriptor check running without a value domain");
    }

    let result = run_check(check, &snapshot.network, &params, args.attr.as_deref(), rule);

    if args.json {
        let summary = serde_json::json!({
            "check": check.name(),
            "snapshot": snapshot_path.display().to_string(),
            "processes": snapshot.network.len(),
            "passed": result.is_ok(),
            "failure_reason": result.as_ref().err().map(|e| e.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&summary).unwrap());
    } else {
        let mut reporter = Reporter::new(ReportConfig {
            color: !args.no_color,
        });
        match &result {
            Ok(()) => reporter.pass(check.name()),
            Err(e) => reporter.fail(check.name(), e),
        }
        reporter.summarize();
    }

    if result.is_err() {
        std::process::exit(1);
    }
}
