//! slotdb CLI
//!
//! One operation per invocation. Mutating commands (create, set,
//! delete) persist the whole image before exiting; everything else is
//! read-only. Exit status is 0 on success, 1 on any failure, with a
//! human-readable message on stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use slotdb::{Store, StoreError, CAPACITY};

/// slotdb — fixed-slot address record store
#[derive(Parser, Debug)]
#[command(name = "slotdb")]
#[command(about = "Fixed-slot, file-backed address record store")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize an empty table and write it to disk
    Create {
        /// Storage path for the image
        path: PathBuf,
    },

    /// Print the record in a slot
    Get {
        path: PathBuf,

        /// Slot id (0-based)
        id: i64,
    },

    /// Store a record in an empty slot
    Set {
        path: PathBuf,

        /// Slot id (0-based)
        id: i64,

        name: String,

        email: String,
    },

    /// Clear a slot (no-op if already empty)
    Delete {
        path: PathBuf,

        /// Slot id (0-based)
        id: i64,
    },

    /// Find the first record with an exactly matching name
    Find {
        path: PathBuf,

        name: String,
    },

    /// Print all occupied records, one per line
    List {
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    // Logging goes to stderr so record output stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> slotdb::Result<()> {
    match command {
        Command::Create { path } => {
            let mut store = Store::create(&path)?;
            store.save()?;
            store.close()
        }

        Command::Get { path, id } => {
            let store = Store::open(&path)?;
            let record = store.get(slot_id(id)?)?;
            println!("{record}");
            store.close()
        }

        Command::Set {
            path,
            id,
            name,
            email,
        } => {
            let mut store = Store::open(&path)?;
            store.set(slot_id(id)?, &name, &email)?;
            store.save()?;
            store.close()
        }

        Command::Delete { path, id } => {
            let mut store = Store::open(&path)?;
            store.delete(slot_id(id)?)?;
            store.save()?;
            store.close()
        }

        Command::Find { path, name } => {
            let store = Store::open(&path)?;
            match store.find(&name) {
                Ok(record) => println!("Found {}, id is {}", record.name, record.id),
                // A miss is a reported outcome, not a failure
                Err(StoreError::NotFound { name }) => {
                    println!("Failed to find a record with name {name}")
                }
                Err(e) => return Err(e),
            }
            store.close()
        }

        Command::List { path } => {
            let store = Store::open(&path)?;
            for record in store.records() {
                println!("{record}");
            }
            store.close()
        }
    }
}

/// Convert a CLI slot id to a table index; negatives are out of range,
/// not a parse error.
fn slot_id(id: i64) -> slotdb::Result<usize> {
    usize::try_from(id).map_err(|_| StoreError::IndexOutOfRange {
        id,
        capacity: CAPACITY,
    })
}
