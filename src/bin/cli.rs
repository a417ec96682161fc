//! Cadastro CLI
//!
//! Offline administration of a record file, without a running server.

use cadastro::{CadastroError, Config, Fields, Filter, IdStrategy, Registry};
use clap::{Parser, Subcommand};
use serde_json::Value;

/// Cadastro CLI
#[derive(Parser, Debug)]
#[command(name = "cadastro-cli")]
#[command(about = "CLI for a Cadastro record file")]
struct Args {
    /// JSON file holding the records
    #[arg(short, long, default_value = "./data/users.json")]
    data_file: String,

    /// Id strategy for `add`: sequential or uuid
    #[arg(short, long, default_value = "sequential")]
    id_strategy: IdStrategy,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List records, optionally filtered
    List {
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        level: Option<String>,
    },

    /// Show one record
    Get {
        id: String,
    },

    /// Add a record from key=value pairs
    Add {
        fields: Vec<String>,
    },

    /// Merge key=value pairs into a record
    Update {
        id: String,

        fields: Vec<String>,
    },

    /// Delete a record
    Del {
        id: String,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> cadastro::Result<()> {
    let config = Config::builder()
        .data_file(&args.data_file)
        .id_strategy(args.id_strategy)
        .create_if_missing(matches!(args.command, Commands::Add { .. }))
        .build();
    let registry = Registry::open(&config)?;

    let output: Value = match args.command {
        Commands::List { id, name, level } => {
            let filter = Filter { id, name, level };
            Value::Array(registry.list(&filter)?.into_iter().map(Value::from).collect())
        }
        Commands::Get { id } => registry.get(&id)?.into(),
        Commands::Add { fields } => registry.create(parse_pairs(&fields)?)?.into(),
        Commands::Update { id, fields } => registry.update(&id, parse_pairs(&fields)?)?.into(),
        Commands::Del { id } => {
            registry.delete(&id)?;
            println!("deleted {}", id);
            return Ok(());
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Parse `key=value` arguments; values are JSON when they parse as JSON,
/// plain strings otherwise
fn parse_pairs(pairs: &[String]) -> cadastro::Result<Fields> {
    let mut fields = Fields::new();
    for pair in pairs {
        let (key, raw) = pair.split_once('=').ok_or_else(|| {
            CadastroError::InvalidBody(format!("expected key=value, got '{}'", pair))
        })?;
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        fields.insert(key.to_string(), value);
    }
    Ok(fields)
}
