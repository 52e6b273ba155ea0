use std::{
    thread,
    time::{Duration, Instant},
};

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};
use waypath_core::{
    geopoint::GeoPoint,
    search::{
        search_algorithm::SearchAlgorithm,
        search_result::{SearchOutcome, SearchResult},
    },
    task::{orchestrator::SearchOrchestrator, search_task::TaskStatus},
};

use crate::{
    format::{format_bytes, format_distance, format_duration},
    map_args::MapArgs,
    parsers,
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Args)]
pub struct RouteArgs {
    #[command(flatten)]
    map: MapArgs,

    /// Start point as <lat>,<lng>
    #[arg(short, long, value_parser = parsers::parse_geopoint, allow_hyphen_values = true)]
    from: GeoPoint,

    /// End point as <lat>,<lng>
    #[arg(short, long, value_parser = parsers::parse_geopoint, allow_hyphen_values = true)]
    to: GeoPoint,

    /// Algorithms to run (dfs, bfs, greedy, ucs, astar)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "dfs,bfs,greedy,ucs,astar"
    )]
    algorithms: Vec<SearchAlgorithm>,

    /// Searches still running after this long are canceled (e.g., "30s", "2m")
    #[arg(long, value_parser = parsers::parse_duration, default_value = "30s")]
    timeout: jiff::SignedDuration,
}

pub fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let waypath = args.map.load()?;
    let timeout = Duration::try_from(args.timeout)?;

    let start = waypath.snap(&args.from)?;
    let end = waypath.snap(&args.to)?;
    let graph = waypath.graph();
    info!(
        "Routing from node {} to node {}",
        graph.node(start).id,
        graph.node(end).id
    );

    let mut orchestrator = waypath.orchestrator();
    for algorithm in SearchAlgorithm::ALL {
        orchestrator.set_enabled(algorithm, args.algorithms.contains(&algorithm))?;
    }
    orchestrator.set_endpoints(start, end)?;

    wait(&orchestrator, timeout)?;
    print_results(&orchestrator);

    orchestrator.reset_all();

    Ok(())
}

fn wait(orchestrator: &SearchOrchestrator, timeout: Duration) -> Result<(), anyhow::Error> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} [{elapsed}] {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let started_at = Instant::now();
    let mut canceled = false;

    while orchestrator.is_running() {
        if !canceled && started_at.elapsed() >= timeout {
            warn!("Timeout reached, canceling remaining searches");
            orchestrator.cancel_all();
            canceled = true;
        }

        let running: Vec<_> = orchestrator
            .statuses()
            .into_iter()
            .filter(|(_, status)| matches!(status, TaskStatus::Running { .. }))
            .map(|(algorithm, _)| algorithm.short_name())
            .collect();
        spinner.set_message(format!("running {}", running.join(", ")));

        thread::sleep(POLL_INTERVAL);
    }

    spinner.finish_and_clear();
    Ok(())
}

fn print_results(orchestrator: &SearchOrchestrator) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Algorithm",
        "Status",
        "Distance",
        "Path nodes",
        "Time",
        "Peak memory",
        "Total memory",
    ]);

    for (algorithm, status) in orchestrator.statuses() {
        match status {
            TaskStatus::Finished { result, elapsed } => {
                table.add_row(result_row(algorithm, &result, elapsed));
            }
            TaskStatus::Running { elapsed } => {
                table.add_row(vec![
                    algorithm.long_name().to_string(),
                    "running".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    format_duration(elapsed),
                    "-".to_string(),
                    "-".to_string(),
                ]);
            }
            TaskStatus::NotStarted => {}
        }
    }

    println!("{table}");
}

fn result_row(algorithm: SearchAlgorithm, result: &SearchResult, elapsed: Duration) -> Vec<String> {
    let (status, distance, nodes) = match &result.outcome {
        SearchOutcome::Found { path, distance } => (
            "found",
            format_distance(*distance),
            path.len().to_string(),
        ),
        SearchOutcome::NotFound => ("no path", "-".to_string(), "-".to_string()),
        SearchOutcome::Canceled => ("canceled", "-".to_string(), "-".to_string()),
    };

    vec![
        algorithm.long_name().to_string(),
        status.to_string(),
        distance,
        nodes,
        format_duration(elapsed),
        format_bytes(result.memory.peak_allocated),
        format_bytes(result.memory.total_allocated),
    ]
}
