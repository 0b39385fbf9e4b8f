#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use edpaths::io::{read_graph_file, write_paths_file, Indexing};
use edpaths::{DecompositionPolicy, DefaultDecomposer, EdmondsKarp, FlowNetwork, PathDecomposer};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    /// Unit decrements, edge-disjoint paths (unit-capacity graphs only)
    Unit,
    /// Bottleneck decrements, general flow decomposition
    Bottleneck,
}

impl From<Policy> for DecompositionPolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::Unit => DecompositionPolicy::UnitCapacity,
            Policy::Bottleneck => DecompositionPolicy::Bottleneck,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Edge-disjoint paths via Edmonds-Karp max flow")]
struct Cli {
    /// Edge-list file: vertex count, then `from to [capacity]` per line
    graph: PathBuf,

    #[arg(short, long)]
    source: usize,

    #[arg(short = 't', long)]
    sink: usize,

    /// Vertices in the graph file (and in the output) are numbered from 1
    #[arg(long)]
    one_based: bool,

    #[arg(short, long, value_enum, default_value_t = Policy::Unit)]
    policy: Policy,

    /// Also export the paths as CSV
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verify the paths against the input graph
    #[arg(long)]
    check: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    TermLogger::init(
        level(cli.verbose),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let indexing = if cli.one_based {
        Indexing::OneBased
    } else {
        Indexing::ZeroBased
    };
    let external = |v: usize| if cli.one_based { v + 1 } else { v };
    let internal = |v: usize| -> Result<usize, Box<dyn Error>> {
        if cli.one_based {
            v.checked_sub(1)
                .ok_or_else(|| "vertex 0 does not exist with --one-based".into())
        } else {
            Ok(v)
        }
    };

    let network: FlowNetwork<i64> = read_graph_file(&cli.graph, indexing)?;
    let (source, sink) = (internal(cli.source)?, internal(cli.sink)?);

    let mut decomposer: DefaultDecomposer<i64, _> =
        DefaultDecomposer::with_policy(EdmondsKarp, cli.policy.into());
    let decomposition = decomposer.decompose(&network, source, sink)?;
    if cli.check {
        decomposer.check(&network, &decomposition)?;
    }

    println!("source: {}", external(source));
    println!("sink: {}", external(sink));
    println!("max flow: {}", decomposition.max_flow());
    println!("paths: {}", decomposition.path_count());
    println!("elapsed: {} ms", decomposition.elapsed_millis());
    for (n, path) in decomposition.paths().iter().enumerate() {
        let vertices: Vec<String> = path
            .vertices()
            .iter()
            .map(|&v| external(v).to_string())
            .collect();
        println!("  #{} [flow {}]: {}", n + 1, path.flow(), vertices.join(" -> "));
    }

    if let Some(output) = &cli.output {
        write_paths_file(output, decomposition.paths(), indexing)?;
        log::info!("paths written to {}", output.display());
    }

    Ok(())
}
