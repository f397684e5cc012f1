//! askdb CLI - ask questions of the sample store in plain English.
//!
//! # Usage
//!
//! ```bash
//! # Generate and run a query (requires CLAUDE_API_KEY)
//! askdb ask "Which customer has spent the most money?"
//!
//! # Use the flat three-table dataset instead of the relational one
//! askdb ask --flat "Show all customers"
//!
//! # Print the schema descriptor the model sees
//! askdb schema
//!
//! # Dump every seeded table
//! askdb seed
//! ```
//!
//! # Commands
//!
//! - `ask` - Generate SQL from a question and execute it
//! - `schema` - Print the generated schema descriptor
//! - `seed` - Provision a dataset and dump its tables

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary's whole job is writing to stdout.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use askdb_engine::{ClaudeClient, DatasetVariant, EngineConfig, EngineError};
use askdb_engine::{dataset, exec, format, pipeline};

#[derive(Parser)]
#[command(name = "askdb")]
#[command(author, version, about = "Natural-language questions answered with SQL")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate SQL from a question and execute it against a fresh dataset
    Ask {
        /// The question, in plain English
        question: String,

        /// Use the flat three-table dataset (no foreign keys)
        #[arg(long)]
        flat: bool,
    },
    /// Print the schema descriptor handed to the model
    Schema {
        /// Use the flat three-table dataset (no foreign keys)
        #[arg(long)]
        flat: bool,
    },
    /// Provision a dataset and dump every table
    Seed {
        /// Use the flat three-table dataset (no foreign keys)
        #[arg(long)]
        flat: bool,
    },
}

const fn variant(flat: bool) -> DatasetVariant {
    if flat {
        DatasetVariant::Flat
    } else {
        DatasetVariant::Relational
    }
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

async fn run(cli: Cli) -> Result<(), EngineError> {
    match cli.command {
        Commands::Ask { question, flat } => {
            let config = EngineConfig::from_env()?;
            let client = ClaudeClient::new(&config.claude)?;
            let answer = pipeline::run(&client, variant(flat), &question).await;

            println!("Generated SQL:\n{}\n", answer.query);
            println!("{}", answer.result);
        }
        Commands::Schema { flat } => {
            println!("{}", variant(flat).descriptor());
        }
        Commands::Seed { flat } => {
            for table in variant(flat).tables() {
                let conn = dataset::provision(variant(flat)).await?;
                let sql = format!("SELECT * FROM {}", table.name);
                let output = exec::execute(conn, &sql).await?;
                println!("{}:\n{}\n", table.name, format::format_table(&output));
            }
        }
    }
    Ok(())
}
