use clap::{Parser, Subcommand, ValueEnum};
use dicefit::dice::{ExpectedValues, moments};
use dicefit::error::InputError;
use dicefit::parser::{DicePreset, parse_dice_list};
use dicefit::search::{SearchConfig, SearchRequest, SearchResult, SearchStatistics, run_search};
use std::time::Duration;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "dicefit")]
#[command(about = "dicefit - find dice combinations matching a target distribution")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// CLI dice preset selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliPreset {
    /// d4 d6 d8 d10 d12 d20 d100
    Standard,
    /// d2 d4 d6 d8 d10 d12 d20 d100
    Polyhedral,
    /// d6 d20
    Classic,
}

impl From<CliPreset> for DicePreset {
    fn from(cli: CliPreset) -> Self {
        match cli {
            CliPreset::Standard => DicePreset::Standard,
            CliPreset::Polyhedral => DicePreset::Polyhedral,
            CliPreset::Classic => DicePreset::Classic,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search for the dice combinations closest to a target mean and standard deviation
    Find {
        /// Target mean of the summed dice
        #[arg(long, allow_hyphen_values = true)]
        mean: f64,
        /// Target standard deviation (omit to match the mean only)
        #[arg(long)]
        std_dev: Option<f64>,
        /// Allowed dice, e.g. `4 6 8`, `d6 d20` or `[3, 5, 7]`
        #[arg(long, num_args = 1..)]
        dice: Vec<String>,
        /// Named die set; custom --dice are added to it
        #[arg(long, value_enum)]
        preset: Option<CliPreset>,
        /// Number of matches to report
        #[arg(long, default_value = "5")]
        top: usize,
        /// Stop after expanding this many states
        #[arg(long, default_value = "1000000")]
        max_expansions: u64,
        /// Timeout in seconds for the search
        #[arg(long)]
        timeout: Option<u64>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
        /// Enable verbose output
        #[arg(long, short)]
        verbose: bool,
    },
    /// Print the expected value and spread of each die
    Moments {
        /// Dice to describe, e.g. `4 6 8`, `d6 d20` or `[3, 5, 7]`
        #[arg(long, num_args = 1..)]
        dice: Vec<String>,
        /// Named die set; custom --dice are added to it
        #[arg(long, value_enum)]
        preset: Option<CliPreset>,
    },
}

/// Options for a find run
struct FindOptions {
    top: usize,
    max_expansions: u64,
    timeout: Option<Duration>,
    json: bool,
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Combine a preset with custom dice lists. With neither, the standard set is used.
fn resolve_dice(preset: Option<CliPreset>, lists: &[String]) -> Result<Vec<u32>, InputError> {
    let mut dice = match preset {
        Some(p) => DicePreset::from(p).dice(),
        None if lists.is_empty() => DicePreset::default().dice(),
        None => Vec::new(),
    };
    for list in lists {
        dice.extend(parse_dice_list(list)?);
    }
    Ok(dice)
}

// --- Find ---

fn run_find(
    mean: f64,
    std_dev: Option<f64>,
    dice: &[u32],
    options: &FindOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = SearchRequest::new(mean, std_dev, dice)?;

    let config = SearchConfig::default()
        .with_capacity(options.top)
        .with_max_expansions(options.max_expansions)
        .with_timeout_option(options.timeout)
        .with_verbose(options.verbose);

    if !options.json {
        println!("Target Mean: {}", request.target.mean);
        if let Some(std_dev) = request.target.std_dev {
            println!("Target Standard Deviation: {}", std_dev);
        }
        println!("Allowed Dice: {:?}", request.dice.dice());
        println!("Pre-calculated Expected Values: {}", request.dice);
    }

    let result = run_search(&request, &config);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_matches(&result);
        if options.verbose {
            print_search_statistics(&result.statistics);
        }
    }

    Ok(())
}

fn print_matches(result: &SearchResult) {
    println!();
    print!("{}", result);
}

/// Print search statistics
fn print_search_statistics(stats: &SearchStatistics) {
    println!("\nSearch Statistics:");
    for line in stats.format_summary().lines() {
        println!("  {}", line);
    }
}

// --- Moments ---

fn run_moments(dice: &[u32]) -> Result<(), Box<dyn std::error::Error>> {
    dicefit::validation::validate_die_sizes(dice)?;
    let table = ExpectedValues::from_dice(dice);

    println!("{:>6} {:>10} {:>12} {:>10}", "Die", "Mean", "Variance", "Std Dev");
    for (die, mean) in table.iter() {
        println!(
            "{:>6} {:>10.2} {:>12.2} {:>10.2}",
            format!("d{}", die),
            mean,
            moments::variance(die),
            moments::std_dev(die)
        );
    }
    Ok(())
}

// --- Main Function ---
fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Find {
            mean,
            std_dev,
            dice,
            preset,
            top,
            max_expansions,
            timeout,
            json,
            verbose,
        } => {
            init_logging(verbose);

            let dice = match resolve_dice(preset, &dice) {
                Ok(dice) => dice,
                Err(e) => {
                    eprintln!("Error parsing dice: {}", e);
                    std::process::exit(1);
                }
            };

            let options = FindOptions {
                top,
                max_expansions,
                timeout: timeout.map(Duration::from_secs),
                json,
                verbose,
            };

            if let Err(e) = run_find(mean, std_dev, &dice, &options) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Moments { dice, preset } => {
            init_logging(false);

            let dice = match resolve_dice(preset, &dice) {
                Ok(dice) => dice,
                Err(e) => {
                    eprintln!("Error parsing dice: {}", e);
                    std::process::exit(1);
                }
            };

            if let Err(e) = run_moments(&dice) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_dice_defaults_to_standard() {
        assert_eq!(
            resolve_dice(None, &[]).unwrap(),
            vec![4, 6, 8, 10, 12, 20, 100]
        );
    }

    #[test]
    fn test_resolve_dice_custom_only() {
        let lists = vec!["d6".to_string(), "[3, 5]".to_string()];
        assert_eq!(resolve_dice(None, &lists).unwrap(), vec![6, 3, 5]);
    }

    #[test]
    fn test_resolve_dice_preset_plus_custom() {
        let lists = vec!["7".to_string()];
        assert_eq!(
            resolve_dice(Some(CliPreset::Classic), &lists).unwrap(),
            vec![6, 20, 7]
        );
    }

    #[test]
    fn test_resolve_dice_rejects_garbage() {
        let lists = vec!["[1, two]".to_string()];
        assert!(matches!(
            resolve_dice(None, &lists),
            Err(InputError::Parse(_))
        ));
    }

    #[test]
    fn test_cli_parses_find() {
        let args = Args::try_parse_from([
            "dicefit", "find", "--mean", "10.5", "--std-dev", "2", "--dice", "4", "6", "d8",
        ])
        .unwrap();
        match args.command {
            Commands::Find {
                mean,
                std_dev,
                dice,
                top,
                ..
            } => {
                assert_eq!(mean, 10.5);
                assert_eq!(std_dev, Some(2.0));
                assert_eq!(dice, vec!["4", "6", "d8"]);
                assert_eq!(top, 5);
            }
            _ => panic!("expected find"),
        }
    }
}
