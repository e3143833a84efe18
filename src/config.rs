use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::graph::Topology;
use crate::{Error, Result};

/// How to choose between unsettled nodes with the same tentative cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// The smallest node id wins
    #[default]
    LowestId,
    /// The largest node id wins
    HighestId,
}

/// What to do once every remaining unsettled node is unreachable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnreachablePolicy {
    /// Keep settling until the settled set covers every node, unreachable nodes
    /// included (with unreachable cost and no predecessor)
    #[default]
    SettleAll,
    /// Stop as soon as no reachable node is left unsettled
    StopEarly,
}

/// Configuration for the link-state engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tie_break: TieBreak,
    pub unreachable: UnreachablePolicy,
    /// Whether to keep a per-step trace of the computation
    pub record_trace: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::LowestId,
            unreachable: UnreachablePolicy::SettleAll,
            record_trace: true,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tie-break rule for relay selection
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set the policy for unreachable nodes
    pub fn with_unreachable(mut self, policy: UnreachablePolicy) -> Self {
        self.unreachable = policy;
        self
    }

    /// Enable or disable trace recording
    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }
}

/// A link entry in a topology file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSpec {
    pub a: String,
    pub b: String,
    pub cost: f64,
}

/// On-disk topology description
///
/// ```json
/// { "nodes": ["x", "y", "z"],
///   "links": [{ "a": "x", "b": "y", "cost": 10 }] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyFile {
    pub nodes: Vec<String>,
    #[serde(default)]
    pub links: Vec<LinkSpec>,
    /// Optional default source node
    #[serde(default)]
    pub source: Option<String>,
}

impl TopologyFile {
    /// Reads and parses a topology file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let file: TopologyFile = serde_json::from_str(contents)?;
        if file.nodes.is_empty() {
            return Err(Error::Config("topology has no nodes".to_string()));
        }
        Ok(file)
    }

    /// Converts the description into a validated topology
    pub fn to_topology(&self) -> Result<Topology<String, OrderedFloat<f64>>> {
        Topology::from_parts(
            self.nodes.iter().cloned(),
            self.links
                .iter()
                .map(|link| (link.a.clone(), link.b.clone(), OrderedFloat(link.cost))),
        )
    }
}
