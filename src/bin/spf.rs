use std::fmt::Display;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use linkstate_spf::graph::{samples, Cost, Graph};
use linkstate_spf::report::{GraphExport, TraceTable};
use linkstate_spf::{
    EngineConfig, ForwardingTable, LinkState, ShortestPathAlgorithm, TieBreak, Topology,
    TreeBuilder, UnreachablePolicy,
};
use serde::Serialize;

/// Runs a link-state shortest path computation and prints the step table,
/// the shortest-path tree and the forwarding table of the source.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Topology file (JSON)
    #[arg(short, long, conflicts_with = "sample")]
    topology: Option<PathBuf>,
    /// Built-in sample topology
    #[arg(long, value_enum)]
    sample: Option<Sample>,
    /// Source node; defaults to the topology file's source or the first node
    #[arg(short, long)]
    source: Option<String>,
    /// Break cost ties towards the highest node id
    #[arg(long)]
    highest_id_first: bool,
    /// Stop once every reachable node is settled
    #[arg(long)]
    stop_early: bool,
    /// Print the topology and tree as JSON instead of tables
    #[arg(long)]
    json: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, ValueEnum, Clone, Copy)]
enum Sample {
    ThreeNode,
    Textbook,
}

#[derive(Serialize)]
struct JsonReport<W> {
    topology: GraphExport<String, W>,
    tree: GraphExport<String, W>,
}

fn run<W>(
    topology: Topology<String, W>,
    source: Option<String>,
    args: &Args,
) -> linkstate_spf::Result<()>
where
    W: Cost + Display + Serialize,
{
    let source = match source.or_else(|| topology.nodes().next().cloned()) {
        Some(source) => source,
        None => return Err(linkstate_spf::Error::Config("empty topology".to_string())),
    };

    let config = EngineConfig::new()
        .with_tie_break(if args.highest_id_first {
            TieBreak::HighestId
        } else {
            TieBreak::LowestId
        })
        .with_unreachable(if args.stop_early {
            UnreachablePolicy::StopEarly
        } else {
            UnreachablePolicy::SettleAll
        });
    let engine = LinkState::with_config(config);

    let result = engine.compute_shortest_paths(&topology, &source)?;
    let tree = TreeBuilder::build(&result.predecessors, &topology)?;

    if args.json {
        let report = JsonReport {
            topology: GraphExport::from_graph(&topology),
            tree: GraphExport::from_tree(&tree),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", TraceTable::new(&result.trace));

    println!("Shortest-path tree rooted at {}:", tree.root());
    for (link, cost) in tree.links() {
        println!("  {} - {}: {}", link.low(), link.high(), cost);
    }

    let forwarding = ForwardingTable::from_predecessors(&result.predecessors)?;
    println!("Forwarding table for {}:", forwarding.source());
    for (destination, next_hop) in forwarding.iter() {
        println!("  {} via {}", destination, next_hop);
    }

    let unreachable = result.unreachable();
    if !unreachable.is_empty() {
        let names: Vec<&str> = unreachable.iter().map(|n| n.as_str()).collect();
        println!("Unreachable: {}", names.join(", "));
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Some(path) = &args.topology {
        let file = linkstate_spf::config::TopologyFile::load(path)?;
        let source = args.source.clone().or_else(|| file.source.clone());
        run(file.to_topology()?, source, &args)?;
    } else {
        let topology = match args.sample.unwrap_or(Sample::ThreeNode) {
            Sample::ThreeNode => samples::three_node()?,
            Sample::Textbook => samples::textbook()?,
        };
        run(topology, args.source.clone(), &args)?;
    }

    Ok(())
}
