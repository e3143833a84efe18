//! Reference topologies used in demos and tests

use crate::graph::Topology;
use crate::Result;

fn named(nodes: &[&str], links: &[(&str, &str, u32)]) -> Result<Topology<String, u32>> {
    Topology::from_parts(
        nodes.iter().map(|n| n.to_string()),
        links
            .iter()
            .map(|&(a, b, cost)| (a.to_string(), b.to_string(), cost)),
    )
}

/// Three routers `x`, `y`, `z` in a triangle
pub fn three_node() -> Result<Topology<String, u32>> {
    named(
        &["x", "y", "z"],
        &[("x", "y", 10), ("y", "z", 20), ("x", "z", 40)],
    )
}

/// The seven-router textbook topology (`z`, `x`, `y`, `w`, `v`, `u`, `t`)
pub fn textbook() -> Result<Topology<String, u32>> {
    named(
        &["z", "x", "y", "w", "v", "u", "t"],
        &[
            ("z", "x", 8),
            ("z", "y", 12),
            ("x", "y", 6),
            ("x", "w", 6),
            ("x", "v", 3),
            ("y", "t", 7),
            ("y", "v", 8),
            ("v", "t", 4),
            ("v", "w", 4),
            ("v", "u", 3),
            ("t", "u", 2),
            ("w", "u", 3),
        ],
    )
}
