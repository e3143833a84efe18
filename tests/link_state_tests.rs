use linkstate_spf::algorithm::{Cell, PathCost};
use linkstate_spf::graph::{generators, samples, Graph, Topology};
use linkstate_spf::{
    Dijkstra, EngineConfig, Error, LinkState, ShortestPathAlgorithm, TieBreak, UnreachablePolicy,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

fn s(name: &str) -> String {
    name.to_string()
}

// Minimum path cost to every node by enumerating all simple paths
fn brute_force_costs(topology: &Topology<usize, u32>, source: usize) -> BTreeMap<usize, u32> {
    fn walk(
        topology: &Topology<usize, u32>,
        node: usize,
        cost: u32,
        visited: &mut Vec<usize>,
        best: &mut BTreeMap<usize, u32>,
    ) {
        let entry = best.entry(node).or_insert(cost);
        if cost < *entry {
            *entry = cost;
        }
        for (&next, link_cost) in topology.neighbors(&node) {
            if !visited.contains(&next) {
                visited.push(next);
                walk(topology, next, cost + link_cost, visited, best);
                visited.pop();
            }
        }
    }

    let mut best = BTreeMap::new();
    let mut visited = vec![source];
    walk(topology, source, 0, &mut visited, &mut best);
    best
}

#[test]
fn test_three_node_scenario() {
    let topology = samples::three_node().unwrap();
    let engine = LinkState::new();
    let result = engine.compute_shortest_paths(&topology, &s("y")).unwrap();

    assert_eq!(result.predecessors.get(&s("x")), Some(&s("y")));
    assert_eq!(result.predecessors.get(&s("z")), Some(&s("y")));
    assert_eq!(result.predecessors.len(), 2);

    assert_eq!(result.distances.get(&s("x")), Some(PathCost::Finite(10)));
    assert_eq!(result.distances.get(&s("z")), Some(PathCost::Finite(20)));
    assert_eq!(result.distance(&s("y")), Some(PathCost::Finite(0)));
    assert!(result.unreachable().is_empty());
}

#[test]
fn test_three_node_trace() {
    let topology = samples::three_node().unwrap();
    let result = LinkState::new()
        .compute_shortest_paths(&topology, &s("y"))
        .unwrap();
    let trace = &result.trace;

    assert_eq!(trace.len(), 3);

    let initial = trace.get(0).unwrap();
    assert_eq!(initial.step(), 0);
    assert_eq!(initial.relay(), None);
    assert_eq!(initial.settled().iter().collect::<Vec<_>>(), vec![&s("y")]);
    assert_eq!(
        initial.cell(&s("x")),
        Some(Cell::Tentative {
            cost: PathCost::Finite(10),
            predecessor: Some(&s("y")),
        })
    );
    assert_eq!(initial.cell(&s("y")), Some(Cell::Settled));

    let first = trace.get(1).unwrap();
    assert_eq!(first.relay(), Some(&s("x")));
    assert_eq!(first.cell(&s("x")), Some(Cell::Settled));
    // 10 + 40 does not beat the direct link
    assert_eq!(
        first.cell(&s("z")),
        Some(Cell::Tentative {
            cost: PathCost::Finite(20),
            predecessor: Some(&s("y")),
        })
    );

    let last = trace.last().unwrap();
    assert_eq!(last.relay(), Some(&s("z")));
    assert_eq!(last.settled().len(), 3);
    assert_eq!(last.cell(&s("z")), Some(Cell::Settled));
}

#[test]
fn test_textbook_golden_from_z() {
    let topology = samples::textbook().unwrap();
    let result = LinkState::new()
        .compute_shortest_paths(&topology, &s("z"))
        .unwrap();

    let expected = [
        ("t", "v", 15),
        ("u", "v", 14),
        ("v", "x", 11),
        ("w", "x", 14),
        ("x", "z", 8),
        ("y", "z", 12),
    ];
    for (node, pred, cost) in expected {
        assert_eq!(result.predecessors.get(&s(node)), Some(&s(pred)), "p({})", node);
        assert_eq!(
            result.distances.get(&s(node)),
            Some(PathCost::Finite(cost)),
            "D({})",
            node
        );
    }

    // u and w tie at 14; the lower id is settled first
    let order: Vec<String> = result
        .trace
        .iter()
        .filter_map(|record| record.relay().cloned())
        .collect();
    assert_eq!(order, vec![s("x"), s("v"), s("y"), s("u"), s("w"), s("t")]);
}

#[test]
fn test_highest_id_tie_break() {
    let topology = samples::textbook().unwrap();
    let engine = LinkState::with_config(EngineConfig::new().with_tie_break(TieBreak::HighestId));
    let result = engine.compute_shortest_paths(&topology, &s("z")).unwrap();

    let order: Vec<String> = result
        .trace
        .iter()
        .filter_map(|record| record.relay().cloned())
        .collect();
    assert_eq!(order, vec![s("x"), s("v"), s("y"), s("w"), s("u"), s("t")]);

    // Same costs either way
    let lowest = LinkState::new()
        .compute_shortest_paths(&topology, &s("z"))
        .unwrap();
    assert_eq!(result.distances, lowest.distances);
}

#[test]
fn test_invalid_source() {
    let topology = samples::three_node().unwrap();
    let result = LinkState::new().compute_shortest_paths(&topology, &s("q"));
    assert!(matches!(result, Err(Error::SourceNotFound(_))));

    let result = Dijkstra::new().compute_shortest_paths(&topology, &s("q"));
    assert!(matches!(result, Err(Error::SourceNotFound(_))));
}

#[test]
fn test_single_node_topology() {
    let topology: Topology<u32, u32> =
        Topology::from_parts([7], Vec::<(u32, u32, u32)>::new()).unwrap();
    let result = LinkState::new().compute_shortest_paths(&topology, &7).unwrap();

    assert!(result.distances.is_empty());
    assert!(result.predecessors.is_empty());
    assert_eq!(result.trace.len(), 1);
}

#[test]
fn test_disconnected_settle_all() {
    let topology: Topology<char, u32> =
        Topology::from_parts(['a', 'b', 'c', 'd'], [('a', 'b', 1), ('c', 'd', 2)]).unwrap();
    let result = LinkState::new().compute_shortest_paths(&topology, &'a').unwrap();

    // Every node ends up settled, unreachable ones included
    assert_eq!(result.trace.len(), 4);
    assert_eq!(result.trace.last().unwrap().settled().len(), 4);

    assert_eq!(result.distances.get(&'b'), Some(PathCost::Finite(1)));
    assert_eq!(result.distances.get(&'c'), Some(PathCost::Unreachable));
    assert_eq!(result.distances.get(&'d'), Some(PathCost::Unreachable));
    assert_eq!(result.predecessors.get(&'c'), None);
    assert_eq!(result.predecessors.get(&'d'), None);
    assert_eq!(result.unreachable(), vec![&'c', &'d']);
    assert_eq!(result.path_to(&'d'), None);
}

#[test]
fn test_disconnected_stop_early() {
    let topology: Topology<char, u32> =
        Topology::from_parts(['a', 'b', 'c', 'd'], [('a', 'b', 1), ('c', 'd', 2)]).unwrap();
    let engine = LinkState::with_config(
        EngineConfig::new().with_unreachable(UnreachablePolicy::StopEarly),
    );
    let result = engine.compute_shortest_paths(&topology, &'a').unwrap();

    assert_eq!(result.trace.len(), 2);
    let settled: Vec<char> = result.trace.last().unwrap().settled().iter().cloned().collect();
    assert_eq!(settled, vec!['a', 'b']);
    assert_eq!(result.unreachable(), vec![&'c', &'d']);
}

#[test]
fn test_zero_cost_links_relax() {
    let topology: Topology<char, u32> = Topology::from_parts(
        ['a', 'b', 'c'],
        [('a', 'b', 0), ('b', 'c', 0), ('a', 'c', 5)],
    )
    .unwrap();
    let result = LinkState::new().compute_shortest_paths(&topology, &'a').unwrap();

    assert_eq!(result.distances.get(&'c'), Some(PathCost::Finite(0)));
    assert_eq!(result.predecessors.get(&'c'), Some(&'b'));
}

#[test]
fn test_trace_disabled() {
    let topology = samples::textbook().unwrap();
    let engine = LinkState::with_config(EngineConfig::new().with_trace(false));
    let result = engine.compute_shortest_paths(&topology, &s("u")).unwrap();

    assert!(result.trace.is_empty());
    assert_eq!(result.distances.reachable().count(), 6);
}

#[test]
fn test_path_reconstruction() {
    let topology = samples::textbook().unwrap();
    let engine = LinkState::new();
    let result = engine.compute_shortest_paths(&topology, &s("z")).unwrap();

    let path = <LinkState as ShortestPathAlgorithm<String, u32, Topology<String, u32>>>::get_path(
        &engine,
        &result,
        &s("t"),
    )
    .unwrap();
    assert_eq!(path, vec![s("z"), s("x"), s("v"), s("t")]);

    // Path continuity and cost
    let mut cost = 0;
    for pair in path.windows(2) {
        cost += topology.link_cost(&pair[0], &pair[1]).expect("path uses existing links");
    }
    assert_eq!(PathCost::Finite(cost), result.distances.get(&s("t")).unwrap());

    assert_eq!(result.path_to(&s("z")), Some(vec![s("z")]));
}

#[test]
fn test_into_parts() {
    let topology = samples::three_node().unwrap();
    let result = LinkState::new()
        .compute_shortest_paths(&topology, &s("y"))
        .unwrap();
    let (predecessors, trace) = result.into_parts();

    assert_eq!(predecessors.source(), &s("y"));
    assert_eq!(
        predecessors.reached().collect::<Vec<_>>(),
        vec![(&s("x"), &s("y")), (&s("z"), &s("y"))]
    );
    assert_eq!(trace.len(), 3);
}

#[test]
fn test_matches_brute_force_on_random_topologies() {
    let mut rng = StdRng::seed_from_u64(42);
    let engine = LinkState::new();

    for round in 0..40 {
        let topology = if round % 2 == 0 {
            generators::random_connected(6, 4, 10, &mut rng)
        } else {
            generators::random_sparse(6, 0.35, 10, &mut rng)
        };
        let source = round % 6;
        let result = engine.compute_shortest_paths(&topology, &source).unwrap();
        let expected = brute_force_costs(&topology, source);

        for node in topology.nodes() {
            let got = result.distance(node).unwrap();
            match expected.get(node) {
                Some(&cost) => {
                    assert_eq!(got, PathCost::Finite(cost), "round {} node {}", round, node)
                }
                None => {
                    assert_eq!(got, PathCost::Unreachable, "round {} node {}", round, node)
                }
            }
        }
    }
}

#[test]
fn test_trace_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    let engine = LinkState::new();

    for _ in 0..20 {
        let topology = generators::random_sparse(8, 0.3, 20, &mut rng);
        let result = engine.compute_shortest_paths(&topology, &0).unwrap();
        let trace = &result.trace;

        // |nodes| - 1 iterations after initialization
        assert_eq!(trace.len(), topology.node_count());

        for (index, record) in trace.iter().enumerate() {
            assert_eq!(record.step(), index);
            assert_eq!(record.settled().len(), index + 1);
        }

        // Distances never increase
        for pair in trace.iter().collect::<Vec<_>>().windows(2) {
            for (node, before) in pair[0].distances().iter() {
                let after = pair[1].distances().get(node).unwrap();
                assert!(after <= before, "D({}) increased", node);
            }
        }
    }
}

#[test]
fn test_idempotent() {
    let mut rng = StdRng::seed_from_u64(99);
    let topology = generators::random_connected(10, 12, 5, &mut rng);
    let engine = LinkState::new();

    let first = engine.compute_shortest_paths(&topology, &3).unwrap();
    let second = engine.compute_shortest_paths(&topology, &3).unwrap();
    assert_eq!(first.distances, second.distances);
    assert_eq!(first.predecessors, second.predecessors);
}

#[test]
fn test_dijkstra_agrees_with_link_state() {
    let mut rng = StdRng::seed_from_u64(2024);
    let link_state = LinkState::new();
    let dijkstra = Dijkstra::new();

    for round in 0..30 {
        let topology = if round % 3 == 0 {
            generators::random_sparse(12, 0.2, 9, &mut rng)
        } else {
            generators::random_connected(12, 10, 9, &mut rng)
        };
        let a = link_state.compute_shortest_paths(&topology, &0).unwrap();
        let b = dijkstra.compute_shortest_paths(&topology, &0).unwrap();

        assert_eq!(a.distances, b.distances, "round {}", round);
        assert_eq!(a.predecessors, b.predecessors, "round {}", round);
        assert!(b.trace.is_empty());
    }
}

#[test]
fn test_path_cost_overflow_is_an_error() {
    let topology =
        Topology::<char, u32>::from_parts(['a', 'b', 'c'], [('a', 'b', u32::MAX), ('b', 'c', 1)])
            .unwrap();

    let link_state = LinkState::new().compute_shortest_paths(&topology, &'a');
    assert!(matches!(link_state, Err(Error::CostOverflow(_, _))));

    let dijkstra = Dijkstra::new().compute_shortest_paths(&topology, &'a');
    assert!(matches!(dijkstra, Err(Error::CostOverflow(_, _))));
}

#[test]
fn test_maximum_link_cost_without_overflow() {
    let topology =
        Topology::<char, u32>::from_parts(['a', 'b'], [('a', 'b', u32::MAX)]).unwrap();

    for result in [
        LinkState::new().compute_shortest_paths(&topology, &'a').unwrap(),
        Dijkstra::new().compute_shortest_paths(&topology, &'a').unwrap(),
    ] {
        assert_eq!(result.distance(&'b'), Some(PathCost::Finite(u32::MAX)));
    }
    assert!(topology.total_cost().is_ok());
}

#[test]
fn test_float_cost_overflow_is_an_error() {
    let topology = Topology::<char, OrderedFloat<f64>>::from_parts(
        ['a', 'b', 'c'],
        [('a', 'b', OrderedFloat(f64::MAX)), ('b', 'c', OrderedFloat(f64::MAX))],
    )
    .unwrap();

    let result = LinkState::new().compute_shortest_paths(&topology, &'a');
    assert!(matches!(result, Err(Error::CostOverflow(_, _))));
    assert!(matches!(topology.total_cost(), Err(Error::TotalCostOverflow)));
}
