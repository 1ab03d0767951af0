use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use log::info;

use eqlp::{render, Problem, SolverResult, TableauSimplexSolver, DEFAULT_MAX_ITER};

/// Solves `maximize c·x subject to A x = b, x ≥ 0` with the two-phase simplex method.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem description
    input: PathBuf,

    /// File the result is written to
    output: PathBuf,

    /// Maximum number of pivots per simplex phase
    #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
    max_iter: u64,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logger(log_level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    use fern::colors::{Color, ColoredLevelConfig};
    let colors = ColoredLevelConfig::new()
        .debug(Color::White)
        .info(Color::Green)
        .warn(Color::BrightYellow)
        .error(Color::BrightRed);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} | {:5} | {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
                colors.color(record.level()),
                message
            ))
        })
        .level(log_level)
        .chain(std::io::stderr())
        .apply()
}

fn run(opts: &Opts) -> Result<(), String> {
    let text = std::fs::read_to_string(&opts.input)
        .map_err(|e| format!("could not open {}: {}", opts.input.display(), e))?;

    let mut out = File::create(&opts.output)
        .map_err(|e| format!("could not open {}: {}", opts.output.display(), e))?;

    let prob: Problem = text.parse().map_err(|e| format!("{}", e))?;

    let solver = TableauSimplexSolver::new(Some(opts.max_iter));
    let result = solver.solve(&prob).map_err(|e| format!("{}", e))?;

    let rendered = match render(&result) {
        Some(rendered) => rendered,
        None => {
            return Err(match result {
                SolverResult::MaxIter { .. } => format!(
                    "no result after {} pivots, raise --max-iter",
                    opts.max_iter
                ),
                _ => "solver produced no reportable result".to_string(),
            })
        }
    };

    out.write_all(rendered.as_bytes())
        .map_err(|e| format!("could not write {}: {}", opts.output.display(), e))?;

    info!("wrote result to {}", opts.output.display());
    Ok(())
}

fn main() {
    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            exit(code);
        }
    };

    let log_level = match opts.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    if let Err(e) = setup_logger(log_level) {
        eprintln!("could not set up logging: {}", e);
    }

    if let Err(msg) = run(&opts) {
        eprintln!("eqlp: {}", msg);
        exit(1);
    }
}
