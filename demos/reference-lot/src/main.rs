//! reference-lot — drives the 10×10 reference lot through a seeded script of
//! allocations and releases.
//!
//! The run opens with the fixed arrivals used to check the layout (two
//! four-wheelers at entrance 100, a two-wheeler at entrance 101), then
//! continues with `--requests` random arrivals and departures.  Every
//! allocation's strategy timings are streamed to `<output>/benchmarks.csv`
//! and summarised at the end.  `small-lot.json` next to this crate shows the
//! `--config` format.
//!
//! ```bash
//! RUST_LOG=reference_lot=debug,pk_alloc=info \
//!   cargo run --release -p reference-lot -- --requests 200 --seed 7
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use pk_alloc::{
    AllocError, Allocation, AllocationRequest, BenchmarkCsvObserver, ParkingLot, Release,
    ReleaseRequest,
};
use pk_bench::CsvBenchmarkWriter;
use pk_core::{LotConfig, ParkingTerm, SpotId, VehicleClass};
use pk_graph::{Route, SearchStrategy};

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Parking-lot allocation and route benchmark demo
#[derive(Parser, Debug)]
#[command(name = "reference-lot")]
struct Args {
    /// JSON lot configuration; the reference layout if omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for benchmarks.csv
    #[arg(long, default_value = "output/reference-lot")]
    output: PathBuf,

    /// Random requests after the opening script
    #[arg(long, default_value_t = 40)]
    requests: usize,

    /// Seed for the request script
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Strategy for allocation routes and exit resolution
    #[arg(long, default_value = "combined")]
    strategy: SearchStrategy,

    /// Chance that a request is an arrival rather than a departure (0–1)
    #[arg(long, default_value_t = 0.65, value_parser = parse_rate)]
    arrival_rate: f64,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("{s:?} is not a number: {e}"))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(format!("{rate} is outside 0..=1"))
    }
}

fn load_config(path: Option<&Path>) -> Result<LotConfig> {
    let Some(path) = path else {
        return Ok(LotConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading lot config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing lot config {}", path.display()))
}

fn fmt_route(route: &Route) -> String {
    if route.is_unreachable() {
        return "unreachable".into();
    }
    route.spots.iter().map(SpotId::to_string).collect::<Vec<_>>().join(" → ")
}

fn print_allocation(a: &Allocation) {
    let distance = a.distance().map_or_else(|| "-".into(), |d| d.to_string());
    println!(
        "  park   {:>4} from {:>4}  term={:<10} dist={distance:>2}  {}",
        a.spot.to_string(),
        a.entrance.to_string(),
        a.term.to_string(),
        fmt_route(&a.route),
    );
}

fn print_release(r: &Release) {
    println!(
        "  leave  {:>4} via  {:>4}  overstay={:>4}s  dist={:>2}  {}",
        r.spot.to_string(),
        r.exit_id().to_string(),
        r.overstayed_secs,
        r.distance(),
        fmt_route(&r.exit.route),
    );
}

/// Allocate, treating a full lot as an expected outcome.
fn arrive(
    lot:     &mut ParkingLot,
    obs:     &mut BenchmarkCsvObserver<CsvBenchmarkWriter>,
    parked:  &mut Vec<SpotId>,
    request: AllocationRequest,
) -> Result<()> {
    match lot.allocate(request, obs) {
        Ok(a) => {
            print_allocation(&a);
            parked.push(a.spot);
            Ok(())
        }
        Err(AllocError::NoSpotAvailable { vehicle }) => {
            println!("  full   no {vehicle} spot for arrival at {}", request.entrance);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("reference_lot=info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    println!("=== reference-lot ===");
    println!(
        "Grid: {}×{}  |  Requests: {}  |  Seed: {}  |  Routing: {}",
        config.grid_width, config.grid_height, args.requests, args.seed, args.strategy
    );

    let mut lot = ParkingLot::new(config)?.with_routing(args.strategy);
    println!(
        "Lot graph: {} spots, {} links, entrances {:?}, exits {:?}",
        lot.graph().spot_count(),
        lot.graph().link_count(),
        lot.entrances(),
        lot.exits(),
    );

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut obs = BenchmarkCsvObserver::new(CsvBenchmarkWriter::new(&args.output)?);

    let entrances = lot.entrances().to_vec();
    let mut parked: Vec<SpotId> = Vec::new();
    let t0 = Instant::now();

    // 1. Opening script.
    println!();
    println!("Opening arrivals:");
    let first = entrances[0];
    let last = entrances[entrances.len() - 1];
    for (vehicle, entrance) in [
        (VehicleClass::FourWheeler, first),
        (VehicleClass::FourWheeler, first),
        (VehicleClass::TwoWheeler, last),
    ] {
        let request = AllocationRequest { vehicle, term: ParkingTerm::ShortTerm, entrance };
        arrive(&mut lot, &mut obs, &mut parked, request)?;
    }

    // 2. Seeded arrivals and departures.
    println!();
    println!("Random requests:");
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut departures = 0usize;
    for _ in 0..args.requests {
        if parked.is_empty() || rng.gen_bool(args.arrival_rate) {
            let vehicle = if rng.gen_bool(0.5) { VehicleClass::FourWheeler } else { VehicleClass::TwoWheeler };
            let term = if rng.gen_bool(0.5) { ParkingTerm::ShortTerm } else { ParkingTerm::LongTerm };
            let entrance = entrances[rng.gen_range(0..entrances.len())];
            arrive(&mut lot, &mut obs, &mut parked, AllocationRequest { vehicle, term, entrance })?;
        } else {
            let spot = parked.swap_remove(rng.gen_range(0..parked.len()));
            let overstayed_secs = if rng.gen_bool(0.2) { rng.gen_range(60..3_600) } else { 0 };
            let release = lot.release(ReleaseRequest { spot, overstayed_secs }, &mut obs)?;
            print_release(&release);
            departures += 1;
        }
    }
    let elapsed = t0.elapsed();

    obs.finish();
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing benchmarks.csv");
    }

    // 3. Summary.
    let log = lot.benchmarks();
    println!();
    println!("Mean search time over {} allocations:", log.len());
    println!("  {:<14} {:>12}", "strategy", "mean (ns)");
    for strategy in SearchStrategy::ALL {
        let mean = log.mean_ns(strategy).map_or_else(|| "-".into(), |m| format!("{m:.0}"));
        println!("  {:<14} {:>12}", strategy.to_string(), mean);
    }

    println!();
    println!(
        "Free spots: {} four-wheeler, {} two-wheeler  |  departures: {departures}",
        lot.free_count(VehicleClass::FourWheeler),
        lot.free_count(VehicleClass::TwoWheeler),
    );
    println!(
        "Benchmarks → {}  ({} rows)",
        args.output.join("benchmarks.csv").display(),
        obs.written()
    );
    info!(elapsed_ms = elapsed.as_millis() as u64, requests = args.requests, "run complete");
    Ok(())
}
