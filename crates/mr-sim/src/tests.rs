//! Integration tests for mr-sim.

use mr_core::{LocationId, RunRng, SimConfig, Turn};
use mr_graph::{BfsRouter, Graph, village};
use mr_robot::{GoalRobot, RandomRobot, RouteRobot};
use mr_world::{Parcel, WorldState};

use crate::{NoopObserver, Runner, SimError, TurnEvent, TurnObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(runs: usize) -> SimConfig {
    SimConfig {
        seed:        42,
        runs,
        parcels:     5,
        max_turns:   Some(10_000),
        num_threads: Some(1),
    }
}

/// Line graph A - B - C.
fn line() -> (Graph, [LocationId; 3]) {
    let graph = Graph::from_edges(["A-B", "B-C"]).unwrap();
    let ids = ["A", "B", "C"].map(|l| graph.location(l).unwrap());
    (graph, ids)
}

/// Records every event for later inspection.
#[derive(Default)]
struct Recorder {
    started: Vec<String>,
    turns:   Vec<(Turn, LocationId, LocationId, bool, usize)>,
    ended:   Option<u64>,
}

impl TurnObserver for Recorder {
    fn on_run_start(&mut self, robot: &str, _state: &WorldState) {
        self.started.push(robot.to_owned());
    }

    fn on_turn(&mut self, e: &TurnEvent<'_>) {
        self.turns.push((e.turn, e.from, e.direction, e.moved, e.state.parcel_count()));
    }

    fn on_run_end(&mut self, turns: u64, _state: &WorldState) {
        self.ended = Some(turns);
    }
}

// ── Runner ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod runner_tests {
    use mr_core::SimRng;
    use mr_graph::distances_from;

    use super::*;
    use crate::run_robot;

    #[test]
    fn goal_robot_clears_line_in_two_turns() {
        let (graph, [a, b, c]) = line();
        let state = WorldState::new(a, vec![Parcel::new(a, c)]);
        let mut rec = Recorder::default();
        let outcome = Runner::new(&graph, &BfsRouter)
            .run(state, &GoalRobot, vec![], &mut RunRng::new(0, 0), &mut rec)
            .unwrap();

        assert_eq!(outcome.turns, 2);
        assert!(outcome.final_state.is_done());
        assert_eq!(outcome.final_state.place(), c);
        assert_eq!(rec.started, vec!["goal".to_owned()]);
        assert_eq!(
            rec.turns,
            vec![(Turn(0), a, b, true, 1), (Turn(1), b, c, true, 0)]
        );
        assert_eq!(rec.ended, Some(2));
    }

    #[test]
    fn finished_state_takes_zero_turns() {
        let (graph, [a, ..]) = line();
        let mut rec = Recorder::default();
        let outcome = Runner::new(&graph, &BfsRouter)
            .run(WorldState::new(a, vec![]), &RandomRobot, vec![], &mut RunRng::new(0, 0), &mut rec)
            .unwrap();
        assert_eq!(outcome.turns, 0);
        assert!(rec.turns.is_empty());
        assert_eq!(rec.ended, Some(0));
    }

    #[test]
    fn ignored_moves_still_count_as_turns() {
        let (graph, [a, b, c]) = line();
        let robot = RouteRobot::new(vec![c, b, c]).unwrap();
        let state = WorldState::new(a, vec![Parcel::new(a, c)]);
        let mut rec = Recorder::default();
        let outcome = Runner::new(&graph, &BfsRouter)
            .run(state, &robot, vec![], &mut RunRng::new(0, 0), &mut rec)
            .unwrap();
        assert_eq!(outcome.turns, 3);
        assert_eq!(rec.turns[0], (Turn(0), a, c, false, 1));
    }

    #[test]
    fn turn_limit_stops_a_slow_robot() {
        let (graph, [a, _b, c]) = line();
        let state = WorldState::new(a, vec![Parcel::new(c, a)]);
        let err = Runner::new(&graph, &BfsRouter)
            .max_turns(Some(1))
            .run(state, &RandomRobot, vec![], &mut RunRng::new(0, 0), &mut NoopObserver)
            .unwrap_err();
        match err {
            SimError::TurnLimit { robot, limit } => {
                assert_eq!(robot, "random");
                assert_eq!(limit, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn robot_failure_reports_turn() {
        let graph = Graph::from_edges(["A-B", "C-D"]).unwrap();
        let [a, c, d] = ["A", "C", "D"].map(|l| graph.location(l).unwrap());
        let state = WorldState::new(a, vec![Parcel::new(c, d)]);
        let err = run_robot(&graph, state, &GoalRobot, vec![], &mut RunRng::new(0, 0)).unwrap_err();
        assert!(matches!(err, SimError::Robot { turn: Turn(0), .. }), "got {err}");
    }

    #[test]
    fn mail_route_finishes_within_two_laps() {
        let graph = village::graph().unwrap();
        let origin = village::post_office(&graph).unwrap();
        let robot = RouteRobot::mail_route(&graph).unwrap();
        let mut scenarios = SimRng::new(5);
        for run in 0..50 {
            let state = WorldState::random(&graph, origin, 5, &mut scenarios).unwrap();
            let turns = run_robot(&graph, state, &robot, vec![], &mut RunRng::new(5, run)).unwrap();
            assert!(turns <= 26, "run {run} took {turns} turns");
        }
    }

    #[test]
    fn goal_robot_terminates_within_diameter_bound() {
        let graph = village::graph().unwrap();
        let origin = village::post_office(&graph).unwrap();
        let diameter = graph
            .locations()
            .flat_map(|l| distances_from(&graph, l))
            .map(|d| d.unwrap() as u64)
            .max()
            .unwrap();
        let mut scenarios = SimRng::new(11);
        for run in 0..50 {
            let parcels = 1 + run as usize % 8;
            let state = WorldState::random(&graph, origin, parcels, &mut scenarios).unwrap();
            let turns = run_robot(&graph, state, &GoalRobot, vec![], &mut RunRng::new(11, run)).unwrap();
            assert!(turns <= 2 * diameter * parcels as u64, "run {run}: {turns} turns");
        }
    }
}

// ── Observers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::{Narrator, TraceObserver};

    #[test]
    fn narrator_uses_labels() {
        let (graph, [a, b, c]) = line();
        let robot = RouteRobot::new(vec![c, b, c]).unwrap();
        let state = WorldState::new(a, vec![Parcel::new(a, c)]);
        let mut narrator = Narrator::new(&graph);
        Runner::new(&graph, &BfsRouter)
            .run(state, &robot, vec![], &mut RunRng::new(0, 0), &mut narrator)
            .unwrap();
        assert_eq!(
            narrator.into_lines(),
            vec![
                "Stayed at A (no road to C)".to_owned(),
                "Moved to B".to_owned(),
                "Moved to C".to_owned(),
                "Done in 3 turns".to_owned(),
            ]
        );
    }

    #[test]
    fn trace_observer_runs_without_subscriber() {
        let (graph, [a, _b, c]) = line();
        let state = WorldState::new(a, vec![Parcel::new(a, c)]);
        let outcome = Runner::new(&graph, &BfsRouter)
            .run(state, &GoalRobot, vec![], &mut RunRng::new(0, 0), &mut TraceObserver)
            .unwrap();
        assert_eq!(outcome.turns, 2);
    }
}

// ── Comparison ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod compare_tests {
    use super::*;
    use crate::{Contender, compare_pair, compare_robots};

    #[test]
    fn identical_robots_score_identically() {
        let graph = village::graph().unwrap();
        let origin = village::post_office(&graph).unwrap();
        let result = compare_robots(
            &graph,
            origin,
            &[
                Contender::new(&RandomRobot).with_label("left"),
                Contender::new(&RandomRobot).with_label("right"),
            ],
            &test_config(20),
        )
        .unwrap();
        assert_eq!(result.runs, 20);
        assert_eq!(result.average("left"), result.average("right"));
        assert_eq!(result.scores[0].total_turns, result.scores[1].total_turns);
    }

    #[test]
    fn same_seed_same_result() {
        let graph = village::graph().unwrap();
        let origin = village::post_office(&graph).unwrap();
        let contenders = [Contender::new(&GoalRobot), Contender::new(&RandomRobot)];
        let first = compare_robots(&graph, origin, &contenders, &test_config(10)).unwrap();
        let second = compare_robots(&graph, origin, &contenders, &test_config(10)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn goal_robot_beats_random_walk() {
        let graph = village::graph().unwrap();
        let origin = village::post_office(&graph).unwrap();
        let route = RouteRobot::mail_route(&graph).unwrap();
        let result = compare_robots(
            &graph,
            origin,
            &[
                Contender::new(&RandomRobot),
                Contender::new(&route),
                Contender::new(&GoalRobot),
            ],
            &test_config(100),
        )
        .unwrap();

        let random = result.average("random").unwrap();
        let route = result.average("route").unwrap();
        let goal = result.average("goal").unwrap();
        assert!(goal < random, "goal {goal} vs random {random}");
        assert!(route <= 26.0, "route averaged {route}");
        assert_ne!(result.winner().unwrap().label, "random");
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn thread_pool_size_does_not_change_scores() {
        use mr_robot::NearestParcelRobot;

        let graph = village::graph().unwrap();
        let origin = village::post_office(&graph).unwrap();
        let route = RouteRobot::mail_route(&graph).unwrap();
        let contenders = [
            Contender::new(&RandomRobot),
            Contender::new(&route),
            Contender::new(&GoalRobot),
            Contender::new(&NearestParcelRobot),
        ];
        let single = compare_robots(&graph, origin, &contenders, &test_config(200)).unwrap();
        let pooled = SimConfig { num_threads: None, ..test_config(200) };
        let pooled = compare_robots(&graph, origin, &contenders, &pooled).unwrap();
        assert_eq!(single, pooled);
    }

    #[test]
    fn pair_form_uses_given_labels_and_memory() {
        let graph = village::graph().unwrap();
        let origin = village::post_office(&graph).unwrap();
        let route = RouteRobot::mail_route(&graph).unwrap();
        let result = compare_pair(
            &graph,
            origin,
            (&route, vec![], "mail"),
            (&GoalRobot, vec![], "planner"),
            &test_config(10),
        )
        .unwrap();
        assert_eq!(result.scores.len(), 2);
        assert!(result.average("mail").is_some());
        assert!(result.average("planner").is_some());
        assert!(result.average("goal").is_none());
    }

    #[test]
    fn zero_parcels_average_zero() {
        let graph = village::graph().unwrap();
        let origin = village::post_office(&graph).unwrap();
        let config = SimConfig { parcels: 0, ..test_config(5) };
        let result = compare_robots(&graph, origin, &[Contender::new(&GoalRobot)], &config).unwrap();
        assert_eq!(result.average("goal"), Some(0.0));
    }

    #[test]
    fn bad_inputs_are_rejected() {
        let graph = village::graph().unwrap();
        let origin = village::post_office(&graph).unwrap();
        let zero_runs = SimConfig { runs: 0, ..test_config(1) };
        assert!(matches!(
            compare_robots(&graph, origin, &[Contender::new(&GoalRobot)], &zero_runs),
            Err(SimError::Config(_))
        ));
        assert!(matches!(
            compare_robots(&graph, origin, &[], &test_config(1)),
            Err(SimError::NoContenders)
        ));
        let tiny = Graph::from_edges(["A-A"]).unwrap();
        let a = tiny.location("A").unwrap();
        assert!(matches!(
            compare_robots(&tiny, a, &[Contender::new(&GoalRobot)], &test_config(1)),
            Err(SimError::World(_))
        ));
    }
}
