use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;

use roomforge::{corridor_table, load_config, load_input, Error, Solver};

#[derive(Parser, Debug)]
#[command(name = "roomforge")]
#[command(version)]
#[command(about = "Assigns hotel housekeeping tasks to workers and teams")]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Assign today's room tasks and print the result as JSON
    Assign(AssignArgs),

    /// Print the corridor table
    Corridors,
}

#[derive(Parser, Debug)]
struct AssignArgs {
    /// Input snapshot (JSON with employees, roomTasks and teams)
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Engine configuration (TOML or YAML). Defaults to ./roomforge.toml if present
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,

    /// Do not print progress to stderr
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let outcome = match args.command {
        Commands::Assign(args) => assign(args),
        Commands::Corridors => {
            print!("{}", corridor_table());
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn assign(args: AssignArgs) -> Result<(), Error> {
    if !args.quiet {
        roomforge::console::init();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = load_config(args.config.as_deref(), &cwd)?;
    let input = load_input(&args.input)?;

    let result = Solver::new(config).solve(&input)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);
    Ok(())
}
