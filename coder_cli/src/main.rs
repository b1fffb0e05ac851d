use coder_core::*;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "healthy-coder")]
#[command(about = "BMI calculator and diet advisor for coders", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute BMI for a single weight/height pair
    Bmi {
        /// Weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Height in meters
        #[arg(long, allow_negative_numbers = true)]
        height: f64,
    },

    /// Check whether a diet is recommended
    Diet {
        /// Weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Height in meters
        #[arg(long, allow_negative_numbers = true)]
        height: f64,
    },

    /// Print BMI scores for every coder, in order
    Scores(CoderInput),

    /// Show the coder with the worst BMI
    Worst(CoderInput),
}

/// Where a group of coders comes from
///
/// Explicit `--coder` values win, then `--stdin`, then the team from the
/// config file.
#[derive(Args)]
struct CoderInput {
    /// A coder as HEIGHT,WEIGHT (repeatable)
    #[arg(long = "coder", value_name = "HEIGHT,WEIGHT")]
    coders: Vec<Coder>,

    /// Read a JSON array of {"height", "weight"} objects from stdin
    #[arg(long, conflicts_with = "coders")]
    stdin: bool,
}

fn main() -> Result<()> {
    coder_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    match cli.command {
        Commands::Bmi { weight, height } => cmd_bmi(weight, height),
        Commands::Diet { weight, height } => cmd_diet(weight, height),
        Commands::Scores(input) => cmd_scores(resolve_coders(input, cli.config)?),
        Commands::Worst(input) => cmd_worst(resolve_coders(input, cli.config)?),
    }
}

fn resolve_coders(input: CoderInput, config_path: Option<PathBuf>) -> Result<Vec<Coder>> {
    if input.stdin {
        return read_coders_json(std::io::stdin().lock());
    }

    if !input.coders.is_empty() {
        return Ok(input.coders);
    }

    let config = match config_path {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };
    tracing::info!("Using {} coders from config team", config.team.coders.len());
    Ok(config.team.coders)
}

fn cmd_bmi(weight: f64, height: f64) -> Result<()> {
    let bmi = compute_bmi(weight, height)?;
    println!("BMI: {:.2}", calculator::round_to_two_places(bmi));
    Ok(())
}

fn cmd_diet(weight: f64, height: f64) -> Result<()> {
    if is_diet_recommended(weight, height)? {
        println!("Diet recommended (BMI >= {})", DIET_THRESHOLD);
    } else {
        println!("Diet not recommended (BMI < {})", DIET_THRESHOLD);
    }
    Ok(())
}

fn cmd_scores(coders: Vec<Coder>) -> Result<()> {
    if coders.is_empty() {
        println!("No coders given");
        return Ok(());
    }

    let scores = get_bmi_scores(&coders)?;
    for (i, (coder, score)) in coders.iter().zip(scores).enumerate() {
        println!(
            "{:>3}. {:.2} m {:.1} kg  BMI: {:.2}",
            i + 1,
            coder.height(),
            coder.weight(),
            score
        );
    }
    Ok(())
}

fn cmd_worst(coders: Vec<Coder>) -> Result<()> {
    match find_coder_with_worst_bmi(&coders)? {
        Some(coder) => {
            let bmi = compute_bmi(coder.weight(), coder.height())?;
            println!(
                "Worst BMI: {:.2} (height {} m, weight {} kg)",
                calculator::round_to_two_places(bmi),
                coder.height(),
                coder.weight()
            );
        }
        None => println!("No coders given"),
    }
    Ok(())
}
