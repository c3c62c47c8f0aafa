use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use trolley_network::network::{NetworkBuilder, TrolleyGraph};
use trolley_network::search::{POLICY_VAR, Planner, SearchConfig, SearchPolicy};

/// Environment variables naming the stations to route between.
const FROM_VAR: &str = "TROLLEY_FROM";
const TO_VAR: &str = "TROLLEY_TO";

const DEFAULT_FROM: &str = "Depot";
const DEFAULT_TO: &str = "Harbour";

/// The built-in demonstration network. Route payloads are line colours.
fn sample_network() -> TrolleyGraph<&'static str> {
    NetworkBuilder::new()
        .station("Depot", 0, 0)
        .station("Market", 40, 30)
        .station("Library", 80, 0)
        .station("Campus", 120, 40)
        .station("Hospital", 60, 90)
        .station("Park", 20, 120)
        .station("Stadium", 140, 120)
        .station("Harbour", 200, 80)
        .station("Museum", 250, 250)
        // Red line
        .link("Depot", "Market", "red")
        .link("Market", "Hospital", "red")
        .link("Hospital", "Stadium", "red")
        .link("Stadium", "Harbour", "red")
        // Blue line
        .link("Depot", "Library", "blue")
        .link("Library", "Campus", "blue")
        .link("Campus", "Harbour", "blue")
        // Green line
        .link("Park", "Hospital", "green")
        .link("Hospital", "Campus", "green")
        .build()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let lookup = |key: &str| std::env::var(key).ok();

    let base = match SearchConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Run every policy unless one was asked for
    let policies = if lookup(POLICY_VAR).is_some() {
        vec![base.policy]
    } else {
        SearchPolicy::ALL.to_vec()
    };

    let from = lookup(FROM_VAR).unwrap_or_else(|| DEFAULT_FROM.to_string());
    let to = lookup(TO_VAR).unwrap_or_else(|| DEFAULT_TO.to_string());

    let graph = sample_network();
    tracing::info!(
        stations = graph.station_count(),
        routes = graph.route_count(),
        "loaded sample network"
    );

    for policy in policies {
        let config = base.with_policy(policy);
        let result = Planner::new(&graph, &config).search(&from, &to);

        match serde_json::to_string(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to render result: {e}");
                return ExitCode::FAILURE;
            }
        }

        if let Some(path) = &result.path {
            let lines: Vec<&str> = path
                .stations()
                .windows(2)
                .filter_map(|pair| graph.route_between(&pair[0], &pair[1]))
                .map(|route| *route.display())
                .collect();
            match path.total_weight(&graph) {
                Ok(weight) => println!("  {policy}: distance {weight} via {}", lines.join(" > ")),
                Err(e) => eprintln!("  {policy}: {e}"),
            }
        } else {
            println!("  {policy}: no path from {from} to {to}");
        }
    }

    ExitCode::SUCCESS
}
