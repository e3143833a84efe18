use crate::graph::{Graph, MutableGraph, Topology};
use rand::prelude::*;

/// Generates a random connected topology with n nodes numbered `0..n`
///
/// A random spanning tree guarantees connectivity; `extra_links` more links are
/// then added between random unlinked pairs. Costs are drawn from `0..=max_cost`.
pub fn random_connected<R: Rng>(
    n: usize,
    extra_links: usize,
    max_cost: u32,
    rng: &mut R,
) -> Topology<usize, u32> {
    let mut topology = Topology::new();
    for node in 0..n {
        topology.add_node(node);
    }

    // Attach each node to a random earlier one
    for node in 1..n {
        let parent = rng.gen_range(0..node);
        let cost = rng.gen_range(0..=max_cost);
        // Endpoints exist and the pair is new
        let added = topology.add_link(parent, node, cost);
        debug_assert!(added.is_ok());
    }

    add_random_links(&mut topology, n, extra_links, max_cost, rng);
    topology
}

/// Generates a random topology where each node pair is linked with probability `p`
///
/// The result may be disconnected.
pub fn random_sparse<R: Rng>(n: usize, p: f64, max_cost: u32, rng: &mut R) -> Topology<usize, u32> {
    let mut topology = Topology::new();
    for node in 0..n {
        topology.add_node(node);
    }

    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen_bool(p) {
                let cost = rng.gen_range(0..=max_cost);
                let added = topology.add_link(a, b, cost);
                debug_assert!(added.is_ok());
            }
        }
    }

    topology
}

fn add_random_links<R: Rng>(
    topology: &mut Topology<usize, u32>,
    n: usize,
    count: usize,
    max_cost: u32,
    rng: &mut R,
) {
    let max_links = n * n.saturating_sub(1) / 2;
    let mut added = 0;
    while added < count && topology.link_count() < max_links {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b && !topology.has_link(&a, &b) {
            let cost = rng.gen_range(0..=max_cost);
            if topology.add_link(a, b, cost).is_ok() {
                added += 1;
            }
        }
    }
}
