//! CLI entry point for the `wgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use weighted_graph::cli::commands;
use weighted_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "wgraph",
    about = "Weighted undirected graphs: traversals and minimum spanning trees"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a graph
    Info {
        /// Path to the description file
        file: PathBuf,
    },
    /// List nodes in insertion order
    Nodes {
        /// Path to the description file
        file: PathBuf,
    },
    /// Show each node's adjacency list
    Edges {
        /// Path to the description file
        file: PathBuf,
    },
    /// Show the weight matrix
    Matrix {
        /// Path to the description file
        file: PathBuf,
    },
    /// Depth-first traversal from a node
    Dfs {
        /// Path to the description file
        file: PathBuf,
        /// Starting node label
        start: String,
    },
    /// Breadth-first traversal from a node
    Bfs {
        /// Path to the description file
        file: PathBuf,
        /// Starting node label
        start: String,
    },
    /// Minimum-cost spanning tree grown from a node
    Mst {
        /// Path to the description file
        file: PathBuf,
        /// Starting node label
        start: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Nodes { file } => commands::cmd_nodes(&file, json),
        Commands::Edges { file } => commands::cmd_edges(&file, json),
        Commands::Matrix { file } => commands::cmd_matrix(&file, json),
        Commands::Dfs { file, start } => commands::cmd_dfs(&file, &start),
        Commands::Bfs { file, start } => commands::cmd_bfs(&file, &start),
        Commands::Mst { file, start } => commands::cmd_mst(&file, &start, json),
    };

    match result {
        Ok(output) => println!("{}", output.trim_end_matches('\n')),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                GraphError::Io(_) => 1,
                GraphError::Json(_)
                | GraphError::InvalidLabel(_)
                | GraphError::CapacityTooLarge { .. } => 2,
                GraphError::UnknownLabel(_) => 4,
                _ => 5,
            };
            process::exit(code);
        }
    }
}
