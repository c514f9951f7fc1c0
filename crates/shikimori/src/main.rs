//! Shikimori catalog CLI application.

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use shared::{Config, LogConfig};
use shikimori::api::types;
use shikimori::{season, CatalogClient, ListQuery, Record};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "shikimori")]
#[command(author, version, about = "Look up anime on Shikimori", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print raw JSON instead of one line per record
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Most popular titles
    Top {
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
        #[arg(short, long, default_value = "popularity")]
        order: String,
    },
    /// Search titles by name
    Search {
        query: String,
        #[arg(short, long, default_value_t = 5)]
        limit: u32,
    },
    /// Listing with filters
    List(ListArgs),
    /// Show one title by id
    Show { id: u64 },
    /// List all genres
    Genres,
    /// List all studios
    Studios,
    /// Print the top 10 and a sample search
    Demo,
}

#[derive(ClapArgs, Debug)]
struct ListArgs {
    #[arg(short, long, default_value_t = 20)]
    limit: u32,
    #[arg(short, long, default_value_t = 1)]
    page: u32,
    #[arg(short, long, default_value = "popularity")]
    order: String,
    /// tv, movie, ova, ona, special, music
    #[arg(long)]
    kind: Option<String>,
    /// anons, ongoing, released
    #[arg(long)]
    status: Option<String>,
    /// e.g. 2024_fall
    #[arg(long, conflicts_with = "current_season")]
    season: Option<String>,
    /// Filter by the season airing now
    #[arg(long)]
    current_season: bool,
    /// Minimum score
    #[arg(long)]
    score: Option<u32>,
    /// Genre id, repeatable
    #[arg(short, long = "genre")]
    genres: Vec<u64>,
    #[arg(long)]
    search: Option<String>,
}

impl ListArgs {
    fn into_query(self) -> ListQuery {
        let mut query = ListQuery::default()
            .limit(self.limit)
            .page(self.page)
            .order(self.order);
        query.kind = self.kind;
        query.status = self.status;
        query.season = if self.current_season {
            Some(season::current_season_filter())
        } else {
            self.season
        };
        query.score = self.score;
        query.search = self.search;
        if !self.genres.is_empty() {
            query = query.genres(&self.genres);
        }
        query
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration; logging settings come from it, so report after init
    let (config, found) = load_config(&args.config)?;

    // Initialize logging
    let mut log_config = LogConfig::from_settings("shikimori", &config.logging);
    if args.verbose {
        log_config.default_level = tracing::Level::DEBUG;
    }
    shared::logging::init(log_config)?;

    if found {
        debug!(config_file = %args.config.display(), base_url = %config.catalog.base_url, "Loaded configuration");
    } else {
        warn!(config_file = %args.config.display(), "Config file not found, using defaults");
    }

    let client = CatalogClient::from_config(&config.catalog)
        .context("Failed to create Shikimori client")?;

    match args.command.unwrap_or(Command::Demo) {
        Command::Top { limit, order } => {
            let entries = client
                .list_entries(&ListQuery::default().limit(limit).order(order))
                .await;
            print_entries(&entries, args.json)?;
        }
        Command::Search { query, limit } => {
            let results = client.search_entries(&query, limit).await;
            print_names(&results, args.json)?;
        }
        Command::List(list) => {
            let query = list.into_query();
            info!(params = ?query.to_params(), "Listing anime");
            let entries = client.list_entries(&query).await;
            print_entries(&entries, args.json)?;
        }
        Command::Show { id } => match client.get_entry_by_id(id).await {
            Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
            None => println!("Anime {} not found", id),
        },
        Command::Genres => {
            let genres = client.list_genres().await;
            print_catalog(&genres, args.json)?;
        }
        Command::Studios => {
            let studios = client.list_studios().await;
            print_catalog(&studios, args.json)?;
        }
        Command::Demo => {
            println!("Top 10 popular anime:");
            let entries = client
                .list_entries(&ListQuery::default().limit(10).order("popularity"))
                .await;
            print_entries(&entries, args.json)?;

            println!("\nSearch 'Naruto':");
            let results = client.search_entries("Naruto", 5).await;
            print_names(&results, args.json)?;
        }
    }

    Ok(())
}

/// Configuration from `path`, or defaults when the file is missing.
///
/// The flag tells whether the file was found.
fn load_config(path: &Path) -> Result<(Config, bool)> {
    let loaded = Config::from_file(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    let found = loaded.is_some();
    Ok((loaded.unwrap_or_default(), found))
}

fn print_json(records: &[Record]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

fn print_entries(entries: &[Record], json: bool) -> Result<()> {
    if json {
        return print_json(entries);
    }
    for entry in entries {
        let title = types::display_title(entry).unwrap_or("?");
        match types::score(entry) {
            Some(score) => println!("- {} (Score: {})", title, score),
            None => println!("- {} (Score: -)", title),
        }
    }
    Ok(())
}

fn print_names(entries: &[Record], json: bool) -> Result<()> {
    if json {
        return print_json(entries);
    }
    for entry in entries {
        println!("- {}", types::name(entry).unwrap_or("?"));
    }
    Ok(())
}

fn print_catalog(records: &[Record], json: bool) -> Result<()> {
    if json {
        return print_json(records);
    }
    for record in records {
        let id = types::id(record).map(|id| id.to_string()).unwrap_or_default();
        println!("{}: {}", id, types::name(record).unwrap_or("?"));
    }
    Ok(())
}
