use serde::{Deserialize, Serialize};

use crate::graph::{Cost, Graph, NodeId};
use crate::spt::ShortestPathTree;
use crate::Result;

/// A link for drawing, labeled with its cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkExport<N, W> {
    pub source: N,
    pub target: N,
    pub cost: W,
}

/// Node/link/cost structure handed to an external drawing tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphExport<N, W> {
    pub nodes: Vec<N>,
    pub links: Vec<LinkExport<N, W>>,
}

impl<N, W> GraphExport<N, W>
where
    N: NodeId,
    W: Cost,
{
    pub fn from_graph<G: Graph<N, W>>(graph: &G) -> Self {
        GraphExport {
            nodes: graph.nodes().cloned().collect(),
            links: graph
                .links()
                .map(|(key, cost)| LinkExport {
                    source: key.low().clone(),
                    target: key.high().clone(),
                    cost,
                })
                .collect(),
        }
    }

    pub fn from_tree(tree: &ShortestPathTree<N, W>) -> Self {
        GraphExport {
            nodes: tree.nodes().iter().cloned().collect(),
            links: tree
                .links()
                .iter()
                .map(|(key, cost)| LinkExport {
                    source: key.low().clone(),
                    target: key.high().clone(),
                    cost: *cost,
                })
                .collect(),
        }
    }
}

impl<N, W> GraphExport<N, W>
where
    N: Serialize,
    W: Serialize,
{
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
