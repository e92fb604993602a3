// Swap Router – Plans the swaps for a sequence of desired interactions
// Copyright (C) 2026  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use swap_router::config::RouterConfig;
use swap_router::input::{InputDocument, OutputDocument};
use swap_router::router::Router;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Works out the swaps needed to realize each desired interaction in
/// turn.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with the G_swaps, G_interactions and SODDI fields
    #[arg(short, long)]
    input: PathBuf,

    /// File to write the result to instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also consider pins this many levels further than the closest
    #[arg(long, allow_negative_numbers = true)]
    extra_levels: Option<i64>,

    /// JSON file with the router configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<RouterConfig, String> {
    let mut config = match &args.config {
        Some(path) => RouterConfig::load(path)
            .map_err(|e| format!("{}: {}", path.display(), e))?,
        None => RouterConfig::default(),
    };

    if let Some(extra_levels) = args.extra_levels {
        config.extra_levels = extra_levels;
    }

    Ok(config)
}

fn read_input(path: &Path) -> Result<InputDocument, String> {
    let file = File::open(path)
        .map_err(|e| format!("{}: {}", path.display(), e))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("{}: {}", path.display(), e))
}

fn write_output(
    path: Option<&Path>,
    document: &OutputDocument,
) -> Result<(), String> {
    let writer: Box<dyn Write> = match path {
        Some(path) => Box::new(
            File::create(path)
                .map_err(|e| format!("{}: {}", path.display(), e))?
        ),
        None => Box::new(io::stdout()),
    };

    let mut writer = BufWriter::new(writer);

    serde_json::to_writer_pretty(&mut writer, document)
        .map_err(|e| e.to_string())?;
    writeln!(writer).and_then(|_| writer.flush()).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .with_writer(io::stderr)
        .init();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let document = match read_input(&args.input) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let (ids, problem) = match document.to_problem() {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("{}: {}", args.input.display(), e);
            return ExitCode::FAILURE;
        },
    };

    info!(
        nodes = problem.n_nodes(),
        interactions = problem.soddi.len(),
        "routing"
    );

    let router = Router::new(&problem.topology, &problem.capability, config);

    let (output, status) = match router.route(&problem.soddi) {
        Ok(report) => (
            OutputDocument::new(&ids, &problem, &report, None),
            ExitCode::SUCCESS,
        ),
        Err(failure) => {
            eprintln!("{}", failure);

            (
                OutputDocument::new(&ids, &problem, &failure.report, Some(&failure)),
                ExitCode::FAILURE,
            )
        },
    };

    if let Err(e) = write_output(args.output.as_deref(), &output) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    status
}
