//! village — compare mail robots on the village map.
//!
//! Runs every selected robot against the same random scenarios and prints
//! the average number of turns each needed.  `--narrate <robot>` also prints
//! a turn-by-turn account of one scenario.
//!
//! Set `RUST_LOG=debug` to see every comparison run.

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mr_core::{RunRng, SimConfig, SimRng};
use mr_graph::{BfsRouter, village};
use mr_robot::{GoalRobot, NearestParcelRobot, RandomRobot, Robot, RouteRobot};
use mr_sim::{Contender, Narrator, Runner, compare_robots};
use mr_world::WorldState;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum RobotKind {
    Random,
    Route,
    Goal,
    Nearest,
}

#[derive(Parser, Debug)]
#[command(about = "Compare mail-delivery robots on the village map")]
struct Args {
    /// Master RNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Scenarios per robot.
    #[arg(long, default_value_t = 100)]
    runs: usize,

    /// Parcels per scenario.
    #[arg(long, default_value_t = 5)]
    parcels: usize,

    /// Abort a run after this many turns.
    #[arg(long)]
    max_turns: Option<u64>,

    /// Worker threads (with the `parallel` feature).
    #[arg(long)]
    threads: Option<usize>,

    /// Robots to compare.
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = [
        RobotKind::Random, RobotKind::Route, RobotKind::Goal, RobotKind::Nearest,
    ])]
    robots: Vec<RobotKind>,

    /// Print a turn-by-turn account of one scenario for this robot.
    #[arg(long, value_enum)]
    narrate: Option<RobotKind>,
}

impl Args {
    fn config(&self) -> SimConfig {
        SimConfig {
            seed:        self.seed,
            runs:        self.runs,
            parcels:     self.parcels,
            max_turns:   self.max_turns,
            num_threads: self.threads,
        }
    }
}

/// One instance of every stock robot, borrowed by the comparison.
struct Robots {
    random:  RandomRobot,
    route:   RouteRobot,
    goal:    GoalRobot,
    nearest: NearestParcelRobot,
}

impl Robots {
    fn get(&self, kind: RobotKind) -> &dyn Robot {
        match kind {
            RobotKind::Random  => &self.random,
            RobotKind::Route   => &self.route,
            RobotKind::Goal    => &self.goal,
            RobotKind::Nearest => &self.nearest,
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.config();
    if args.robots.is_empty() {
        bail!("select at least one robot");
    }

    let graph = village::graph()?;
    let origin = village::post_office(&graph)?;
    println!(
        "Village: {} places, {} roads",
        graph.node_count(),
        graph.half_edge_count() / 2
    );

    let robots = Robots {
        random:  RandomRobot,
        route:   RouteRobot::mail_route(&graph)?,
        goal:    GoalRobot,
        nearest: NearestParcelRobot,
    };

    // 1. Optional narrated run.
    if let Some(kind) = args.narrate {
        let robot = robots.get(kind);
        let state = WorldState::random(&graph, origin, config.parcels, &mut SimRng::new(config.seed))?;
        println!();
        println!("=== {} robot, {} parcels ===", robot.name(), state.parcel_count());
        let mut narrator = Narrator::new(&graph);
        Runner::new(&graph, &BfsRouter)
            .max_turns(config.max_turns)
            .run(state, robot, robot.initial_memory(), &mut RunRng::new(config.seed, 0), &mut narrator)?;
        for line in narrator.lines() {
            println!("  {line}");
        }
    }

    // 2. Comparison.
    tracing::info!(seed = config.seed, runs = config.runs, parcels = config.parcels, "comparing robots");
    let contenders: Vec<Contender<'_>> = args.robots.iter().map(|&k| Contender::new(robots.get(k))).collect();
    let result = compare_robots(&graph, origin, &contenders, &config)?;

    println!();
    println!(
        "{} runs × {} parcels  |  seed {}",
        result.runs, config.parcels, config.seed
    );
    println!("{:<10} {:>12}", "Robot", "Avg turns");
    println!("{}", "-".repeat(23));
    for score in &result.scores {
        println!("{:<10} {:>12.2}", score.label, score.average);
    }
    if let Some(best) = result.winner() {
        println!();
        println!("Fewest turns: {}", best.label);
    }

    Ok(())
}
