//! Workshop CLI - terminal access to the workshop API.
//!
//! # Usage
//!
//! ```bash
//! # Print the attendee count once, or keep polling until Ctrl+C
//! workshop count
//! workshop count --watch
//!
//! # Register an attendee
//! workshop register -n "Asha Rao" -e asha@example.com -d "Tech Lead"
//!
//! # Sessions with their speakers
//! workshop schedule
//!
//! # Attendees, optionally filtered
//! workshop attendees --search eng
//!
//! # Designation breakdown
//! workshop analytics
//! ```
//!
//! # Environment Variables
//!
//! - `WORKSHOP_API_URL` - Base URL of the workshop API

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "workshop")]
#[command(author, version, about = "AppDirect India AI Workshop CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the number of registered attendees
    Count {
        /// Keep polling every 5 seconds until Ctrl+C
        #[arg(short, long)]
        watch: bool,
    },
    /// Register an attendee
    Register {
        /// Full name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Designation (e.g. "Software Engineer")
        #[arg(short, long)]
        designation: String,
    },
    /// Print sessions with their speakers
    Schedule,
    /// List registered attendees
    Attendees {
        /// Only show attendees whose name, email or designation contains TERM
        #[arg(short, long, value_name = "TERM")]
        search: Option<String>,
    },
    /// Print the designation breakdown
    Analytics,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    let client = commands::client()?;

    match cli.command {
        Commands::Count { watch: false } => commands::count::once(&client).await?,
        Commands::Count { watch: true } => commands::count::watch(client).await,
        Commands::Register {
            name,
            email,
            designation,
        } => commands::register::run(&client, name, email, designation).await?,
        Commands::Schedule => commands::schedule::run(&client).await?,
        Commands::Attendees { search } => {
            commands::attendees::list(&client, search.as_deref().unwrap_or_default()).await?;
        }
        Commands::Analytics => commands::attendees::analytics(&client).await?,
    }
    Ok(())
}
