use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use strata::{CompositionTable, Evaluator, Progress};

#[derive(Parser, Debug)]
#[command(name = "strata", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a composition table JSON (fail-fast configuration checks).
    Validate(ValidateArgs),
    /// Evaluate every channel at one progress value and print the frame.
    Eval(EvalArgs),
    /// Evaluate evenly spaced progress values and print one frame per line.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input composition table JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Input composition table JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Progress value in [0,1]; out-of-range input is clamped.
    #[arg(long)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Input composition table JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of steps from 0 to 1 inclusive.
    #[arg(long, default_value_t = 100)]
    steps: u32,
}

fn load_table(path: &PathBuf) -> anyhow::Result<CompositionTable> {
    let file =
        File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;
    let table: CompositionTable = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse '{}'", path.display()))?;
    table
        .validate()
        .with_context(|| format!("invalid composition table '{}'", path.display()))?;
    Ok(table)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Validate(args) => {
            let table = load_table(&args.in_path)?;
            println!("ok: {} channels", table.channels.len());
        }
        Command::Eval(args) => {
            let table = load_table(&args.in_path)?;
            let frame = Evaluator::eval_frame(&table, Progress::new(args.progress))?;
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
        Command::Sweep(args) => {
            anyhow::ensure!(args.steps > 0, "--steps must be > 0");
            let table = load_table(&args.in_path)?;
            for i in 0..=args.steps {
                let p = Progress::new(f64::from(i) / f64::from(args.steps));
                let frame = Evaluator::eval_frame(&table, p)?;
                println!("{}", serde_json::to_string(&frame)?);
            }
        }
    }

    Ok(())
}
