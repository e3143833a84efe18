use linkstate_spf::algorithm::PredecessorTable;
use linkstate_spf::graph::{generators, samples, Graph, Topology};
use linkstate_spf::{
    Error, ForwardingTable, LinkKey, LinkState, ShortestPathAlgorithm, TreeBuilder,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn s(name: &str) -> String {
    name.to_string()
}

fn key(a: &str, b: &str) -> LinkKey<String> {
    LinkKey::new(s(a), s(b))
}

#[test]
fn test_three_node_tree() {
    let topology = samples::three_node().unwrap();
    let result = LinkState::new()
        .compute_shortest_paths(&topology, &s("y"))
        .unwrap();
    let tree = TreeBuilder::build(&result.predecessors, &topology).unwrap();

    assert_eq!(tree.root(), &s("y"));
    assert_eq!(tree.node_count(), 3);
    assert_eq!(tree.edge_count(), 2);
    assert_eq!(tree.links().get(&key("x", "y")), Some(&10));
    assert_eq!(tree.links().get(&key("y", "z")), Some(&20));
    assert_eq!(tree.link_cost(&s("z"), &s("y")), Some(20));
    // The expensive direct link is not part of the tree
    assert_eq!(tree.link_cost(&s("x"), &s("z")), None);
    assert_eq!(tree.total_cost().unwrap(), 30);
}

#[test]
fn test_textbook_tree() {
    let topology = samples::textbook().unwrap();
    let result = LinkState::new()
        .compute_shortest_paths(&topology, &s("z"))
        .unwrap();
    let tree = TreeBuilder::build(&result.predecessors, &topology).unwrap();

    let links: Vec<(LinkKey<String>, u32)> =
        tree.links().iter().map(|(k, c)| (k.clone(), *c)).collect();
    assert_eq!(
        links,
        vec![
            (key("t", "v"), 4),
            (key("u", "v"), 3),
            (key("v", "x"), 3),
            (key("w", "x"), 6),
            (key("x", "z"), 8),
            (key("y", "z"), 12),
        ]
    );
    assert!(tree.is_acyclic());
    assert!(tree.is_connected());
}

#[test]
fn test_missing_link_fails_fast() {
    let topology = samples::three_node().unwrap();
    let result = LinkState::new()
        .compute_shortest_paths(&topology, &s("y"))
        .unwrap();

    // Same nodes, but x and y aren't linked
    let other: Topology<String, u32> = Topology::from_parts(
        [s("x"), s("y"), s("z")],
        [(s("y"), s("z"), 20), (s("x"), s("z"), 40)],
    )
    .unwrap();

    let built = TreeBuilder::build(&result.predecessors, &other);
    assert!(matches!(built, Err(Error::MissingLink(_, _))));
}

#[test]
fn test_unreachable_nodes_left_out_of_tree() {
    let topology: Topology<char, u32> =
        Topology::from_parts(['a', 'b', 'c', 'd'], [('a', 'b', 1), ('c', 'd', 2)]).unwrap();
    let result = LinkState::new().compute_shortest_paths(&topology, &'a').unwrap();
    let tree = TreeBuilder::build(&result.predecessors, &topology).unwrap();

    assert_eq!(tree.nodes().iter().cloned().collect::<Vec<_>>(), vec!['a', 'b']);
    assert_eq!(tree.edge_count(), 1);
    assert!(!tree.contains_node(&'c'));
}

#[test]
fn test_tree_properties_on_random_topologies() {
    let mut rng = StdRng::seed_from_u64(5);
    let engine = LinkState::new();

    for round in 0..30 {
        let topology = generators::random_sparse(9, 0.3, 15, &mut rng);
        let result = engine.compute_shortest_paths(&topology, &0).unwrap();
        let tree = TreeBuilder::build(&result.predecessors, &topology).unwrap();

        // Reachable nodes, source included
        let reachable = result.distances.reachable().count() + 1;
        assert_eq!(tree.node_count(), reachable, "round {}", round);
        assert_eq!(tree.edge_count(), reachable - 1, "round {}", round);
        assert!(tree.is_acyclic(), "round {}", round);
        assert!(tree.is_connected(), "round {}", round);

        for (link, cost) in tree.links() {
            assert_eq!(topology.link_cost(link.low(), link.high()), Some(*cost));
        }
    }
}

#[test]
fn test_forwarding_table() {
    let topology = samples::textbook().unwrap();
    let result = LinkState::new()
        .compute_shortest_paths(&topology, &s("z"))
        .unwrap();
    let forwarding = ForwardingTable::from_predecessors(&result.predecessors).unwrap();

    assert_eq!(forwarding.source(), &s("z"));
    assert_eq!(forwarding.len(), 6);
    assert_eq!(forwarding.next_hop(&s("y")), Some(&s("y")));
    for destination in ["t", "u", "v", "w", "x"] {
        assert_eq!(forwarding.next_hop(&s(destination)), Some(&s("x")), "{}", destination);
    }
    assert_eq!(forwarding.next_hop(&s("z")), None);
}

#[test]
fn test_forwarding_table_rejects_cycles() {
    let predecessors =
        PredecessorTable::from_entries('s', [('a', Some('b')), ('b', Some('a'))]);
    let table = ForwardingTable::from_predecessors(&predecessors);
    assert!(matches!(table, Err(Error::InconsistentPredecessors(_))));
}

#[test]
fn test_forwarding_table_rejects_dangling_predecessor() {
    let predecessors = PredecessorTable::from_entries('s', [('a', Some('q'))]);
    let table = ForwardingTable::from_predecessors(&predecessors);
    assert!(matches!(table, Err(Error::InconsistentPredecessors(_))));
}

#[test]
fn test_tree_from_hand_built_table() {
    let topology = samples::three_node().unwrap();
    let predecessors = PredecessorTable::from_entries(
        s("x"),
        [(s("y"), Some(s("x"))), (s("z"), Some(s("x")))],
    );
    let tree = TreeBuilder::build(&predecessors, &topology).unwrap();

    assert_eq!(tree.link_cost(&s("x"), &s("y")), Some(10));
    assert_eq!(tree.link_cost(&s("x"), &s("z")), Some(40));
    assert_eq!(tree.edge_count(), 2);
}

#[test]
fn test_tree_skips_self_predecessor_entries() {
    let topology = samples::three_node().unwrap();
    let predecessors = PredecessorTable::from_entries(
        s("y"),
        [(s("x"), Some(s("y"))), (s("z"), Some(s("z")))],
    );
    let tree = TreeBuilder::build(&predecessors, &topology).unwrap();

    assert_eq!(tree.edge_count(), 1);
    assert_eq!(tree.nodes().iter().cloned().collect::<Vec<_>>(), vec![s("x"), s("y")]);
    assert_eq!(tree.link_cost(&s("x"), &s("y")), Some(10));
}
