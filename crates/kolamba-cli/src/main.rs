//! Command-line access to Kolamba favorites lists

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kolamba::config::favorites::STORAGE_KEY;
use kolamba::config::storage::DATA_DIR_ENV;
use kolamba::data::{ArtistId, FavoriteList, FavoritesStore};
use kolamba::storage::FileStore;

#[derive(Parser)]
#[command(name = "kolamba", about = "Manage favorite artist lists", version)]
struct Cli {
    /// Directory holding the favorites data (defaults to the config directory)
    #[arg(long, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Storage key of the favorites slot
    #[arg(long, default_value = STORAGE_KEY)]
    key: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every list
    Lists,
    /// Create a new empty list
    Create { name: String },
    /// Add an artist to a list
    Add { list_id: String, artist_id: ArtistId },
    /// Remove an artist from a list
    Remove { list_id: String, artist_id: ArtistId },
    /// Check whether an artist is in any list
    Check { artist_id: ArtistId },
    /// Favorite or unfavorite an artist
    Toggle { artist_id: ArtistId, name: String },
    /// Rename a list
    Rename { list_id: String, name: String },
    /// Delete a list
    Delete { list_id: String },
    /// Remove all lists
    Clear,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_list(list: &FavoriteList) {
    let members: Vec<String> = list.artist_ids.iter().map(|id| id.to_string()).collect();
    println!("{}\t{}\t[{}]", list.id, list.name, members.join(", "));
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let backend = match cli.data_dir {
        Some(dir) => FileStore::new(dir),
        None => match FileStore::open_default() {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    };
    tracing::debug!(root = ?backend.root(), key = %cli.key, "opening favorites");

    let mut store = FavoritesStore::with_key(backend, cli.key);

    match cli.command {
        Command::Lists => {
            for list in store.get_favorite_lists() {
                print_list(&list);
            }
        }
        Command::Create { name } => {
            let list = store.create_list(&name);
            println!("{}", list.id);
        }
        Command::Add { list_id, artist_id } => store.add_to_list(&list_id, artist_id),
        Command::Remove { list_id, artist_id } => store.remove_from_list(&list_id, artist_id),
        Command::Check { artist_id } => {
            if store.is_in_any_list(artist_id) {
                println!("favorited");
            } else {
                println!("not favorited");
            }
        }
        Command::Toggle { artist_id, name } => {
            if store.toggle_favorite(artist_id, &name) {
                println!("favorited");
            } else {
                println!("not favorited");
            }
        }
        Command::Rename { list_id, name } => {
            if !store.rename_list(&list_id, &name) {
                eprintln!("No list with ID '{}'", list_id);
            }
        }
        Command::Delete { list_id } => match store.delete_list(&list_id) {
            Some(list) => print_list(&list),
            None => eprintln!("No list with ID '{}'", list_id),
        },
        Command::Clear => store.clear(),
    }
}
