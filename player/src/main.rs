//! Step-through visualizer CLI for coding-practice problems.
//!
//! Resolves a problem from the catalog, generates its execution steps, and
//! either prints them or plays them on a timer in the terminal.

use std::path::{Path, PathBuf};
use std::process;
use std::thread;

use anyhow::Result;
use clap::{Parser, Subcommand};

use player::autoplay::run_autoplay;
use player::clock::SystemClock;
use player::controller::PlaybackController;
use player::core::generate::generate;
use player::exit_codes;
use player::io::catalog::{Catalog, builtin_catalog, load_catalog};
use player::io::config::{PlayerConfig, load_config};
use player::render::render_step;

#[derive(Parser)]
#[command(
    name = "player",
    version,
    about = "Step-through visualizer for coding-practice problems"
)]
struct Cli {
    /// Catalog JSON file (defaults to the built-in problem set).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Config file (defaults to ./player.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List catalog problems.
    List,
    /// Print one problem's metadata and test cases.
    Show { id: String },
    /// Print the full generated step sequence for a problem.
    Steps { id: String },
    /// Play a problem's step sequence in the terminal.
    Play {
        id: String,

        /// Playback speed 1-100 (overrides the configured default).
        #[arg(long)]
        speed: Option<u8>,
    },
    /// Check a catalog file against the schema and invariants.
    Validate { path: PathBuf },
}

fn main() {
    player::logging::init();
    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("player.toml"));
    let config = load_config(&config_path)?;
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => builtin_catalog()?,
    };

    match cli.command {
        Command::List => Ok(cmd_list(&catalog)),
        Command::Show { id } => Ok(cmd_show(&catalog, &id)),
        Command::Steps { id } => Ok(cmd_steps(&catalog, &id, &config)),
        Command::Play { id, speed } => Ok(cmd_play(&catalog, &id, speed, &config)),
        Command::Validate { path } => cmd_validate(&path),
    }
}

fn cmd_list(catalog: &Catalog) -> i32 {
    for problem in catalog.problems() {
        println!(
            "{:>3}  {:<6}  {:<32}  [{}]",
            problem.id,
            problem.difficulty,
            problem.title,
            problem.topics.join(", ")
        );
    }
    exit_codes::OK
}

fn cmd_show(catalog: &Catalog, id: &str) -> i32 {
    let Some(problem) = catalog.get(id) else {
        return report_not_found(id);
    };
    println!("{} ({})", problem.title, problem.difficulty);
    println!("topics: {}", problem.topics.join(", "));
    for (i, case) in problem.test_cases.iter().enumerate() {
        println!("case {}: {} => {}", i + 1, case.input, case.expected);
    }
    exit_codes::OK
}

fn cmd_steps(catalog: &Catalog, id: &str, config: &PlayerConfig) -> i32 {
    let Some(problem) = catalog.get(id) else {
        return report_not_found(id);
    };
    let steps = generate(problem);
    for (index, step) in steps.iter().enumerate() {
        print!("{}", render_step(index, steps.len(), step, config.show_code));
    }
    exit_codes::OK
}

fn cmd_play(catalog: &Catalog, id: &str, speed: Option<u8>, config: &PlayerConfig) -> i32 {
    let Some(problem) = catalog.get(id) else {
        return report_not_found(id);
    };
    println!("{} ({})", problem.title, problem.difficulty);

    let steps = generate(problem);
    let total = steps.len();
    let mut controller = PlaybackController::new(steps, SystemClock);
    controller.set_speed(speed.unwrap_or(config.default_speed));

    let outcome = run_autoplay(
        &mut controller,
        |index, step| {
            print!("{}", render_step(index, total, step, config.show_code));
        },
        thread::sleep,
    );
    println!("done after {} steps", outcome.frames_emitted);
    exit_codes::OK
}

fn cmd_validate(path: &Path) -> Result<i32> {
    let catalog = load_catalog(path)?;
    println!("catalog ok: {} problems", catalog.len());
    Ok(exit_codes::OK)
}

fn report_not_found(id: &str) -> i32 {
    eprintln!("problem not found: {}", id);
    exit_codes::NOT_FOUND
}
