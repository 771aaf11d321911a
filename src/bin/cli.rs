//! A small demo CLI over a [`KeywordIndex`], gated behind the `cli`
//! feature so the library itself never pulls in an argument parser.

use ansi_term::Colour::{Green, Red, Yellow};
use clap::{Parser, Subcommand};
use redis_ac_keywords::{KeywordIndex, StoreConfig};

#[derive(Parser)]
#[command(about = "Query and maintain a redis-ac-keywords instance")]
struct Cli {
    /// Instance name (the keyspace prefix on the backing store).
    #[arg(long, default_value = "RedisACKeywords")]
    name: String,
    /// Redis host.
    #[arg(long, default_value = "localhost")]
    host: String,
    /// Redis port.
    #[arg(long, default_value_t = 6379)]
    port: u16,
    /// Redis database index.
    #[arg(long, default_value_t = 12)]
    db: i64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a keyword to the dictionary.
    Add { keyword: String },
    /// Remove a keyword from the dictionary.
    Remove { keyword: String },
    /// Find every matched keyword in a piece of text.
    Find { text: String },
    /// List keywords starting with a prefix.
    Suggest { query: String },
    /// Report keyword and node counts.
    Info,
    /// Drop the entire instance.
    Flush,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = StoreConfig::new(&cli.host, cli.port, cli.db, &cli.name, Default::default());
    let index = match KeywordIndex::connect(config) {
        Ok(index) => index,
        Err(err) => {
            eprintln!("{}: {err}", Red.paint("connection failed"));
            std::process::exit(1);
        }
    };

    let outcome = match cli.command {
        Command::Add { keyword } => index.add(&keyword).map(|n| format!("{n} keywords")),
        Command::Remove { keyword } => index.remove(&keyword).map(|n| format!("{n} keywords")),
        Command::Find { text } => index.find(&text).map(|hits| hits.join(", ")),
        Command::Suggest { query } => index.suggest(&query).map(|hits| hits.join(", ")),
        Command::Info => index.info().map(|info| {
            format!(
                "{} keywords, {} nodes",
                Yellow.paint(info.keywords.to_string()),
                Yellow.paint(info.nodes.to_string())
            )
        }),
        Command::Flush => index.flush().map(|_| "flushed".to_string()),
    };

    match outcome {
        Ok(message) => println!("{} {message}", Green.paint("ok")),
        Err(err) => eprintln!("{}: {err}", Red.paint("error")),
    }
}
