mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bluecarbon",
    version,
    about = "Industrial emissions calculator and blue carbon credit estimator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate CO2e emissions and the credits needed to offset them
    Calculate {
        /// Industry code (e.g., "manufacturing"). Required unless set in --form
        #[arg(short, long)]
        industry: Option<String>,

        /// Energy consumption in kWh
        #[arg(long, value_name = "KWH")]
        energy: Option<String>,

        /// Fuel consumption in liters
        #[arg(long, value_name = "LITERS")]
        fuel: Option<String>,

        /// Transportation distance in km
        #[arg(long, value_name = "KM")]
        transport: Option<String>,

        /// Waste generated in kg
        #[arg(long, value_name = "KG")]
        waste: Option<String>,

        /// JSON form file with the same fields; flags override it
        #[arg(short, long, value_name = "FILE")]
        form: Option<PathBuf>,

        /// Price per credit in USD (default: reference market price)
        #[arg(long, value_name = "USD")]
        price: Option<String>,

        /// Custom JSON industry profile file (default: built-in table)
        #[arg(short, long, value_name = "FILE")]
        profiles: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show how each number was derived
        #[arg(long)]
        verbose: bool,
    },
    /// Manage and inspect industry profiles
    Industries {
        #[command(subcommand)]
        action: IndustriesAction,
    },
    /// Ask the sustainability assistant a question
    Ask {
        /// The question
        question: Option<String>,

        /// List the suggested quick questions
        #[arg(long)]
        quick: bool,

        /// Simulated response latency in milliseconds (0 disables)
        #[arg(long, default_value_t = 1500)]
        delay_ms: u64,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// List general emission reduction strategies
    Strategies,
}

#[derive(Subcommand)]
enum IndustriesAction {
    /// List industry profiles and their emission factors
    List {
        /// Custom JSON industry profile file (default: built-in table)
        #[arg(short, long, value_name = "FILE")]
        profiles: Option<PathBuf>,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom industry profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Calculate {
            industry,
            energy,
            fuel,
            transport,
            waste,
            form,
            price,
            profiles,
            output,
            verbose,
        } => commands::calculate::run(
            commands::calculate::FormArgs {
                industry,
                energy,
                fuel,
                transport,
                waste,
                form,
            },
            price.as_deref(),
            profiles.as_deref(),
            &output,
            verbose,
        ),
        Commands::Industries { action } => match action {
            IndustriesAction::List { profiles } => commands::industries::list(profiles.as_deref()),
            IndustriesAction::Schema => commands::industries::schema(),
            IndustriesAction::Validate { file } => commands::industries::validate(&file),
        },
        Commands::Ask {
            question,
            quick,
            delay_ms,
            output,
        } => {
            if quick {
                commands::ask::quick()
            } else {
                commands::ask::run(question.as_deref().unwrap_or(""), delay_ms, &output)
            }
        }
        Commands::Strategies => commands::ask::strategies(),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
