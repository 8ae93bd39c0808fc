//! floor-route — smallest end-to-end run of the indoor-nav engine.
//!
//! Loads one floor of GeoJSON, routes to a room, and shows how the display
//! gate hides the route while another floor is on screen.
//!
//! ```text
//! floor-route [DESTINATION] [--floor FILE.geojson] [--config FILE.json] [--transport KIND]
//! ```
//!
//! Without `--floor` the embedded sample in `floor.rs` is used.  Set
//! `RUST_LOG=nav_graph=debug` to watch graph construction.

mod floor;


use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};

use nav_controller::{NavState, NavigationController, RouteSink};
use nav_core::geojson::{load_feature_collection, parse_feature_collection};
use nav_core::{FloorId, Point2, TransportKind};
use nav_graph::{build_floor_graph, AStar, GraphBuildConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_DESTINATION: &str = "103";
const ROUTED_FLOOR:        &str = "L1";
const OTHER_FLOOR:         &str = "L2";

// ── Arguments ─────────────────────────────────────────────────────────────────

struct Args {
    destination: String,
    floor:       Option<PathBuf>,
    config:      Option<PathBuf>,
    transport:   TransportKind,
    origin:      Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        destination: DEFAULT_DESTINATION.to_owned(),
        floor:       None,
        config:      None,
        transport:   TransportKind::Any,
        origin:      None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        let mut value = || it.next().with_context(|| format!("{arg} needs a value"));
        match arg.as_str() {
            "--floor"     => args.floor = Some(value()?.into()),
            "--config"    => args.config = Some(value()?.into()),
            "--transport" => args.transport = value()?.parse()?,
            "--origin"    => args.origin = Some(value()?),
            s if s.starts_with("--") => bail!("unknown flag {s}"),
            s => args.destination = s.to_owned(),
        }
    }
    Ok(args)
}

// ── Console sink ──────────────────────────────────────────────────────────────

struct ConsoleSink;

impl RouteSink for ConsoleSink {
    fn show_route(&mut self, floor: &FloorId, line: &[Point2]) {
        println!("  [{floor}] drawing {} points", line.len());
        for p in line {
            println!("    {p}");
        }
    }

    fn clear_route(&mut self) {
        println!("  (nothing drawn on this floor)");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = parse_args()?;
    println!("=== floor-route — indoor-nav ===");

    // 1. Load features.
    let features = match &args.floor {
        Some(path) => load_feature_collection(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => parse_feature_collection(floor::FLOOR_L1)?,
    };
    println!("Loaded {} features", features.len());

    // 2. Graph build configuration.
    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<GraphBuildConfig>(&text)?
        }
        None => GraphBuildConfig::default(),
    };
    tracing::debug!(?config, "graph build config");

    // 3. Graph summary.
    let graph = build_floor_graph(&features, &config)?;
    println!("Floor graph: {} nodes, {} edges", graph.len(), graph.edge_count());
    println!();

    // 4. Route.
    let mut nav = NavigationController::with_pathfinder(AStar, config)?;
    nav.view_floor(FloorId::from(ROUTED_FLOOR));
    nav.set_floor(FloorId::from(ROUTED_FLOOR), features)?;
    nav.set_transport(args.transport)?;
    nav.set_origin(args.origin.clone())?;

    let t0 = Instant::now();
    let state = nav.set_destination(Some(args.destination.clone()))?;
    let elapsed = t0.elapsed();

    println!(
        "Destination {} via {} → {:?} in {:.3} ms",
        args.destination,
        args.transport,
        state,
        elapsed.as_secs_f64() * 1e3
    );

    if let (NavState::Routed, Some(route)) = (state, nav.route()) {
        println!(
            "  start: {:?}  |  nodes: {}  |  length: {:.1}",
            route.start,
            route.nodes.len(),
            route.length
        );
        println!("{:<4} {:<32}", "#", "Node");
        println!("{}", "-".repeat(36));
        for (i, id) in route.nodes.iter().enumerate() {
            println!("{i:<4} {id:<32}");
        }
    }
    println!();

    // 5. Display gate.
    let mut sink = ConsoleSink;
    println!("Viewing {ROUTED_FLOOR}:");
    nav.present(&mut sink);

    nav.view_floor(FloorId::from(OTHER_FLOOR));
    println!("Viewing {OTHER_FLOOR}:");
    nav.present(&mut sink);

    nav.view_floor(FloorId::from(ROUTED_FLOOR));
    println!("Back on {ROUTED_FLOOR}: route {}", if nav.visible_route().is_some() { "restored" } else { "missing" });

    Ok(())
}
