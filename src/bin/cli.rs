//! invex CLI
//!
//! Loads a delimited data file into the in-memory index and serves
//! interactive lookups on stdin.

use std::io::{self, BufRead, Write};

use clap::Parser;
use invex::command::{self, Command};
use invex::{loader, Config};
use tracing_subscriber::{fmt, EnvFilter};

/// invex interactive index
#[derive(Parser, Debug)]
#[command(name = "invex")]
#[command(about = "In-memory tabular-data index over a delimited data file")]
#[command(version)]
struct Args {
    /// Path to the data file
    #[arg(short, long, default_value = "amazon_dataset.csv")]
    data: String,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("invex v{}", invex::VERSION);
    tracing::info!("Data file: {}", args.data);

    let config = Config::builder().data_file(&args.data).build();

    // Load the index; any load failure halts startup with exit code 1
    let (inventory, report) = match loader::load_file(&config) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Failed to load data file: {}", e);
            std::process::exit(1);
        }
    };

    println!("Successfully imported {} products", report.imported);
    println!("Inventory index ready");
    println!("Available commands: find <ID>, listInventory <category>, exit");

    run_loop(&inventory);
}

/// Interactive command loop (blocking until exit or end of input)
fn run_loop(inventory: &invex::Inventory) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("Enter command: ");
        let _ = stdout.flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // end of input
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        }

        let cmd = match Command::parse(&line) {
            Some(cmd) => cmd,
            None => continue, // blank line
        };

        if cmd == Command::Exit {
            break;
        }

        println!("{}", command::dispatch(inventory, &cmd));
    }
}
