use std::{path::PathBuf, process::ExitCode};

use bidi_paths::graphs::graph_factory::GraphFactory;
use clap::Parser;
use log::error;

/// Reading a .bincode file is way faster than a .gr or .fmi file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Infile in .gr or .fmi format
    #[arg(short, long)]
    graph: PathBuf,
    /// Outfile in .bincode format
    #[arg(short, long)]
    bincode: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = GraphFactory::from_file(&args.graph)
        .and_then(|graph| GraphFactory::to_bincode_file(&graph, &args.bincode));

    if let Err(err) = result {
        error!("{}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
