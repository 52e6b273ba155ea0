mod common;

use std::{
    thread,
    time::{Duration, Instant},
};

use waypath_core::{
    search::search_algorithm::SearchAlgorithm,
    task::{search_task::TaskStatus, orchestrator::SearchOrchestrator},
    waypath::Waypath,
};

fn wait_for(orchestrator: &SearchOrchestrator) {
    let deadline = Instant::now() + Duration::from_secs(30);
    while orchestrator.is_running() {
        assert!(Instant::now() < deadline, "searches did not finish in time");
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn concurrent_searches_on_a_shared_graph() {
    let waypath = Waypath::from_map_data(&common::grid(60, 60)).unwrap();
    let mut orchestrator = waypath.orchestrator();
    let end = waypath.graph().node_count() - 1;

    orchestrator.set_endpoints(0, end).unwrap();
    wait_for(&orchestrator);

    let mut distances = Vec::new();
    for (algorithm, status) in orchestrator.statuses() {
        let TaskStatus::Finished { result, elapsed } = status else {
            panic!("{algorithm} did not finish");
        };
        assert!(result.is_found(), "{algorithm}");
        assert!(elapsed < Duration::from_secs(30), "{algorithm}");
        assert_eq!(result.memory.current_allocated, 0, "{algorithm}");
        distances.push((algorithm, result.distance().unwrap()));
    }

    assert_eq!(distances.len(), SearchAlgorithm::ALL.len());
    let ucs = distances[SearchAlgorithm::UniformCost.index()].1;
    let astar = distances[SearchAlgorithm::AStar.index()].1;
    assert_eq!(ucs, astar);
    for (algorithm, distance) in distances {
        assert!(distance >= ucs, "{algorithm}");
    }
}

#[test]
fn new_endpoints_replace_previous_runs() {
    let waypath = Waypath::from_map_data(&common::grid(40, 40)).unwrap();
    let mut orchestrator = waypath.orchestrator();

    orchestrator.set_endpoints(0, 1599).unwrap();
    orchestrator.set_endpoints(5, 5).unwrap();
    wait_for(&orchestrator);

    for (algorithm, status) in orchestrator.statuses() {
        let TaskStatus::Finished { result, .. } = status else {
            panic!("{algorithm} did not finish");
        };
        assert_eq!(result.path(), &[5], "{algorithm}");
    }
}

#[test]
fn cancel_all_stops_every_run() {
    let waypath = Waypath::from_map_data(&common::grid(150, 150)).unwrap();
    let mut orchestrator = waypath.orchestrator();

    orchestrator.set_endpoints(0, 150 * 150 - 1).unwrap();
    orchestrator.cancel_all();
    wait_for(&orchestrator);

    for (algorithm, status) in orchestrator.statuses() {
        // A search may legitimately finish before the cancellation lands
        let TaskStatus::Finished { result, .. } = status else {
            panic!("{algorithm} did not finish");
        };
        assert!(result.is_found() || result.is_canceled(), "{algorithm}");
    }

    orchestrator.reset_all();
    assert!(!orchestrator.is_running());
}
