use clap::{Parser, Subcommand};
use flowsheet::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(
    name = "flowsheet-cli",
    version,
    about = "Convert pipeline YAML documents to editable graphs and back"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a pipeline document and print the graph snapshot as JSON
    Graph {
        /// Path to the pipeline YAML file
        input: PathBuf,
    },
    /// Read a graph snapshot (JSON) and print the regenerated document
    Yaml {
        /// Path to the graph JSON file
        input: PathBuf,
    },
    /// Round-trip a document and report what survived
    Check {
        /// Path to the pipeline YAML file
        input: PathBuf,
    },
    /// Print the starter pipeline document
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(message) = run(cli.command) {
        eprintln!("{message}");
        process::exit(1);
    }
}

fn run(command: Command) -> std::result::Result<(), String> {
    match command {
        Command::Graph { input } => {
            let text = read(&input)?;
            let graph = document_to_graph(&text).map_err(|e| e.to_string())?;
            let json = graph
                .to_json()
                .map_err(|e| format!("Failed to encode graph snapshot: {e}"))?;
            println!("{json}");
        }
        Command::Yaml { input } => {
            let text = read(&input)?;
            let graph = Graph::from_json(&text)
                .map_err(|e| format!("Failed to decode graph snapshot: {e}"))?;
            print!("{}", graph_to_document(&graph));
        }
        Command::Check { input } => {
            let text = read(&input)?;
            let graph = document_to_graph(&text).map_err(|e| e.to_string())?;
            let regenerated = graph_to_document(&graph);
            let reparsed = document_to_graph(&regenerated).map_err(|e| e.to_string())?;
            println!(
                "{} nodes, {} edges; after round-trip: {} nodes, {} edges",
                graph.nodes.len(),
                graph.edges.len(),
                reparsed.nodes.len(),
                reparsed.edges.len()
            );
        }
        Command::Init => print!("{STARTER_PIPELINE}"),
    }
    Ok(())
}

fn read(path: &Path) -> std::result::Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path.display(), e))
}
