//! Side-by-side robot comparison over shared random scenarios.
//!
//! # Fairness
//!
//! All scenarios are generated up front from one [`SimRng`] seeded with
//! `SimConfig::seed`.  In run `i` every contender starts from the same
//! scenario and gets a fresh [`RunRng`] for run `i`, so two identical robots
//! always score identically and the `parallel` feature cannot change any
//! result.

use mr_core::{LocationId, RunRng, SimConfig, SimRng};
use mr_graph::{BfsRouter, Graph};
use mr_robot::{Memory, Robot};
use mr_world::WorldState;

use crate::{NoopObserver, Runner, SimError, SimResult};

// ── Inputs ────────────────────────────────────────────────────────────────────

/// A robot entered into a comparison, with its report label and the memory
/// it starts each run with.
#[derive(Clone)]
pub struct Contender<'r> {
    pub label:  String,
    pub robot:  &'r dyn Robot,
    pub memory: Memory,
}

impl<'r> Contender<'r> {
    /// Label from `robot.name()`, memory from `robot.initial_memory()`.
    pub fn new(robot: &'r dyn Robot) -> Self {
        Self {
            label:  robot.name().to_owned(),
            robot,
            memory: robot.initial_memory(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_memory(mut self, memory: Memory) -> Self {
        self.memory = memory;
        self
    }
}

// ── Results ───────────────────────────────────────────────────────────────────

/// Aggregate result for one contender.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub label:       String,
    pub total_turns: u64,
    /// `total_turns / runs`.
    pub average:     f64,
}

/// Outcome of [`compare_robots`], with scores in contender order.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub runs:   usize,
    pub scores: Vec<Score>,
}

impl Comparison {
    /// Average turns for `label`; the first match if labels repeat.
    pub fn average(&self, label: &str) -> Option<f64> {
        self.scores.iter().find(|s| s.label == label).map(|s| s.average)
    }

    /// Lowest average.  Ties go to the earlier contender.
    pub fn winner(&self) -> Option<&Score> {
        self.scores
            .iter()
            .reduce(|best, s| if s.average < best.average { s } else { best })
    }
}

// ── Harness ───────────────────────────────────────────────────────────────────

/// Run every contender against `config.runs` shared random scenarios
/// starting at `origin` and report each contender's average turn count.
pub fn compare_robots(
    graph:      &Graph,
    origin:     LocationId,
    contenders: &[Contender<'_>],
    config:     &SimConfig,
) -> SimResult<Comparison> {
    config.validate()?;
    if contenders.is_empty() {
        return Err(SimError::NoContenders);
    }

    let mut scenario_rng = SimRng::new(config.seed);
    let scenarios = (0..config.runs)
        .map(|_| WorldState::random(graph, origin, config.parcels, &mut scenario_rng))
        .collect::<Result<Vec<_>, _>>()?;

    let runner = Runner::new(graph, &BfsRouter).max_turns(config.max_turns);
    let per_run = run_all(&runner, &scenarios, contenders, config)?;

    let runs = config.runs;
    let scores: Vec<Score> = contenders
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let total_turns: u64 = per_run.iter().map(|turns| turns[i]).sum();
            Score {
                label: c.label.clone(),
                total_turns,
                average: total_turns as f64 / runs as f64,
            }
        })
        .collect();

    for s in &scores {
        tracing::info!(robot = %s.label, runs, average = s.average, "comparison finished");
    }
    Ok(Comparison { runs, scores })
}

/// The two-contender form: `(robot, initial memory, label)` per side.
pub fn compare_pair(
    graph:  &Graph,
    origin: LocationId,
    first:  (&dyn Robot, Memory, &str),
    second: (&dyn Robot, Memory, &str),
    config: &SimConfig,
) -> SimResult<Comparison> {
    let contenders = [first, second].map(|(robot, memory, label)| {
        Contender::new(robot).with_memory(memory).with_label(label)
    });
    compare_robots(graph, origin, &contenders, config)
}

/// Turn counts for every contender in run `run`.
fn run_one(
    runner:     &Runner<'_>,
    run:        usize,
    scenario:   &WorldState,
    contenders: &[Contender<'_>],
    seed:       u64,
) -> SimResult<Vec<u64>> {
    let turns = contenders
        .iter()
        .map(|c| {
            let mut rng = RunRng::new(seed, run as u64);
            runner
                .run(scenario.clone(), c.robot, c.memory.clone(), &mut rng, &mut NoopObserver)
                .map(|outcome| outcome.turns)
        })
        .collect::<SimResult<Vec<u64>>>()?;
    tracing::debug!(run, ?turns, "comparison run");
    Ok(turns)
}

#[cfg(not(feature = "parallel"))]
fn run_all(
    runner:     &Runner<'_>,
    scenarios:  &[WorldState],
    contenders: &[Contender<'_>],
    config:     &SimConfig,
) -> SimResult<Vec<Vec<u64>>> {
    scenarios
        .iter()
        .enumerate()
        .map(|(run, scenario)| run_one(runner, run, scenario, contenders, config.seed))
        .collect()
}

#[cfg(feature = "parallel")]
fn run_all(
    runner:     &Runner<'_>,
    scenarios:  &[WorldState],
    contenders: &[Contender<'_>],
    config:     &SimConfig,
) -> SimResult<Vec<Vec<u64>>> {
    use rayon::prelude::*;

    let work = || -> SimResult<Vec<Vec<u64>>> {
        scenarios
            .par_iter()
            .enumerate()
            .map(|(run, scenario)| run_one(runner, run, scenario, contenders, config.seed))
            .collect()
    };

    match config.num_threads {
        None => work(),
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .map_err(|e| SimError::Config(mr_core::CoreError::Config(e.to_string())))?
            .install(work),
    }
}
