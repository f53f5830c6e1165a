//! Trailhead CLI
//!
//! Command-line admin surface for the marketing-site settings document:
//! toggle and retitle homepage sections, edit the entries of their
//! collection fields, and bulk-import media URLs.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use trailhead_core::SettingsStore;

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "trailhead")]
#[command(about = "Trailhead - content manager for the Saddle South marketing site")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or edit a homepage section
    Section {
        #[command(subcommand)]
        command: SectionCommands,
    },
    /// Manage entries of a collection field
    Entry {
        #[command(subcommand)]
        command: EntryCommands,
    },
    /// Bulk-import media URLs into a collection
    Import {
        /// Target collection (gallery.images or social.posts)
        collection: String,
        /// Read URLs from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
        /// Pair captions from this file, one line per surviving URL
        #[arg(long)]
        captions_file: Option<PathBuf>,
        /// Parse and report without saving anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the whole settings document
    Show,
    /// Show settings location and a per-section summary
    Status,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum SectionCommands {
    /// Show a section
    Show {
        /// Section key (hero, faq, team, gallery, testimonials, menu, social, seo)
        key: String,
    },
    /// Update scalar fields of a section
    Set {
        /// Section key
        key: String,
        /// Enable or disable the section
        #[arg(long)]
        enabled: Option<bool>,
        /// Display title
        #[arg(long)]
        title: Option<String>,
        /// Extra fields as key=value pairs (e.g. subtitle=..., handle=...)
        #[arg(short, long = "field", value_name = "KEY=VALUE")]
        field: Vec<String>,
    },
}

#[derive(Subcommand)]
enum EntryCommands {
    /// Add an entry to a collection
    #[command(alias = "create")]
    Add {
        /// Collection key (e.g. faq.items, gallery.images)
        collection: String,
        /// Entry fields as key=value pairs
        #[arg(short, long = "field", value_name = "KEY=VALUE")]
        field: Vec<String>,
    },
    /// List entries of a collection
    #[command(alias = "ls")]
    List {
        /// Collection key
        collection: String,
    },
    /// Update fields of an entry by id
    Update {
        /// Collection key
        collection: String,
        /// Entry id
        id: String,
        /// Fields to change as key=value pairs
        #[arg(short, long = "field", value_name = "KEY=VALUE")]
        field: Vec<String>,
    },
    /// Remove an entry by id
    #[command(alias = "rm")]
    Remove {
        /// Collection key
        collection: String,
        /// Entry id
        id: String,
    },
    /// Move an entry from one display position to another
    Move {
        /// Collection key
        collection: String,
        /// Current position (zero-based)
        from: usize,
        /// Target position (zero-based)
        to: usize,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, settings_key, autosave)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config doesn't need the settings document
    if let Commands::Config { command } = &cli.command {
        return match command.clone() {
            Some(ConfigCommands::Show) | None => commands::config::show(&output),
            Some(ConfigCommands::Set { key, value }) => {
                commands::config::set(key, value, &output)
            }
        };
    }

    let mut store = SettingsStore::open()?;

    match cli.command {
        Commands::Section { command } => match command {
            SectionCommands::Show { key } => commands::section::show(&store, key, &output),
            SectionCommands::Set {
                key,
                enabled,
                title,
                field,
            } => commands::section::set(&mut store, key, enabled, title, field, &output),
        },
        Commands::Entry { command } => match command {
            EntryCommands::Add { collection, field } => {
                commands::entry::add(&mut store, collection, field, &output)
            }
            EntryCommands::List { collection } => {
                commands::entry::list(&store, collection, &output)
            }
            EntryCommands::Update {
                collection,
                id,
                field,
            } => commands::entry::update(&mut store, collection, id, field, &output),
            EntryCommands::Remove { collection, id } => {
                commands::entry::remove(&mut store, collection, id, &output)
            }
            EntryCommands::Move {
                collection,
                from,
                to,
            } => commands::entry::move_entry(&mut store, collection, from, to, &output),
        },
        Commands::Import {
            collection,
            file,
            captions_file,
            dry_run,
        } => commands::import::run(&mut store, collection, file, captions_file, dry_run, &output),
        Commands::Show => commands::status::show_document(&store, &output),
        Commands::Status => commands::status::show(&store, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
