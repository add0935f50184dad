use std::path::PathBuf;

use waygraph_lib::{
    load_graph, plan_route, plan_route_budgeted, Error, NavGraph, RouteAlgorithm,
    RouteConstraints, RouteRequest,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/patrol.json")
}

fn patrol_graph() -> NavGraph {
    load_graph(&fixture_path()).expect("fixture loads")
}

fn step_names(graph: &NavGraph, plan: &waygraph_lib::RoutePlan) -> Vec<String> {
    plan.steps
        .iter()
        .map(|&id| graph.node_name(id).expect("step resolves").to_string())
        .collect()
}

#[test]
fn astar_plan_finds_cheapest_route() {
    let graph = patrol_graph();
    let request = RouteRequest::astar("Hangar", "Landing Pad");
    let plan = plan_route(&graph, &request).expect("route exists");

    assert_eq!(plan.algorithm, RouteAlgorithm::AStar);
    assert_eq!(
        step_names(&graph, &plan),
        vec!["Hangar", "Workshop", "Fuel Depot", "Landing Pad"]
    );
    assert_eq!(plan.total_cost, 124.0);
    assert_eq!(plan.hop_count(), 3);
}

#[test]
fn dijkstra_plan_matches_astar_cost() {
    let graph = patrol_graph();
    let astar = plan_route(&graph, &RouteRequest::astar("Hangar", "Landing Pad"))
        .expect("astar route");
    let dijkstra = plan_route(&graph, &RouteRequest::dijkstra("Hangar", "Landing Pad"))
        .expect("dijkstra route");

    assert_eq!(astar.total_cost, dijkstra.total_cost);
}

#[test]
fn avoided_node_forces_detour() {
    let graph = patrol_graph();
    let request = RouteRequest {
        start: "Hangar".to_string(),
        goal: "Landing Pad".to_string(),
        algorithm: RouteAlgorithm::Dijkstra,
        constraints: RouteConstraints {
            avoid: vec!["Fuel Depot".to_string()],
            max_edge_cost: None,
        },
    };

    let plan = plan_route(&graph, &request).expect("detour exists");
    assert_eq!(
        step_names(&graph, &plan),
        vec!["Hangar", "North Gate", "Watchtower", "Landing Pad"]
    );
    assert_eq!(plan.total_cost, 174.0);
}

#[test]
fn max_edge_cost_excludes_long_hops() {
    let graph = patrol_graph();
    let request = RouteRequest {
        start: "Hangar".to_string(),
        goal: "Landing Pad".to_string(),
        algorithm: RouteAlgorithm::AStar,
        constraints: RouteConstraints {
            avoid: Vec::new(),
            max_edge_cost: Some(50.0),
        },
    };

    let plan = plan_route(&graph, &request).expect("route exists");
    assert_eq!(
        step_names(&graph, &plan),
        vec![
            "Hangar",
            "Workshop",
            "Fuel Depot",
            "Watchtower",
            "Landing Pad"
        ]
    );
    assert_eq!(plan.total_cost, 150.0);
}

#[test]
fn avoided_goal_rejects_route() {
    let graph = patrol_graph();
    let request = RouteRequest {
        start: "Hangar".to_string(),
        goal: "Landing Pad".to_string(),
        algorithm: RouteAlgorithm::AStar,
        constraints: RouteConstraints {
            avoid: vec!["Landing Pad".to_string()],
            max_edge_cost: None,
        },
    };

    let error = plan_route(&graph, &request).expect_err("avoided goal");
    assert!(format!("{error}").contains("no route found"));
}

#[test]
fn unreachable_goal_is_route_not_found() {
    let graph = patrol_graph();
    let request = RouteRequest::astar("Hangar", "Isolated Bunker");
    let error = plan_route(&graph, &request).expect_err("bunker is disconnected");
    assert!(matches!(error, Error::RouteNotFound { .. }));
}

#[test]
fn unknown_start_suggests_close_names() {
    let graph = patrol_graph();
    let request = RouteRequest::astar("Hangr", "Landing Pad");
    let error = plan_route(&graph, &request).expect_err("typo rejected");

    match error {
        Error::UnknownNode { name, suggestions } => {
            assert_eq!(name, "Hangr");
            assert_eq!(suggestions.first().map(String::as_str), Some("Hangar"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn start_equals_goal_yields_single_node_plan() {
    let graph = patrol_graph();
    let request = RouteRequest::dijkstra("Workshop", "Workshop");
    let plan = plan_route(&graph, &request).expect("trivial plan");

    assert_eq!(plan.hop_count(), 0);
    assert_eq!(plan.total_cost, 0.0);
    assert_eq!(step_names(&graph, &plan), vec!["Workshop"]);
}

#[test]
fn generous_budget_matches_exhaustive_plan() {
    let graph = patrol_graph();
    let request = RouteRequest::astar("Hangar", "Landing Pad");

    let exhaustive = plan_route(&graph, &request).expect("route exists");
    let budgeted = plan_route_budgeted(&graph, &request, 1_000)
        .expect("no planning error")
        .expect("budget large enough");

    assert_eq!(budgeted.steps, exhaustive.steps);
    assert_eq!(budgeted.total_cost, exhaustive.total_cost);
}

#[test]
fn exhausted_budget_reports_still_running() {
    let graph = patrol_graph();
    let request = RouteRequest::dijkstra("Hangar", "Landing Pad");

    let outcome = plan_route_budgeted(&graph, &request, 1).expect("no planning error");
    assert!(outcome.is_none());
}

#[test]
fn budgeted_unreachable_goal_still_fails_cleanly() {
    let graph = patrol_graph();
    let request = RouteRequest::dijkstra("Hangar", "Isolated Bunker");

    let error = plan_route_budgeted(&graph, &request, 1_000).expect_err("bunker unreachable");
    assert!(matches!(error, Error::RouteNotFound { .. }));
}
