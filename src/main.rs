use clap::Parser;
use pokedex::core::config::{self, CliOverrides};
use pokedex::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "pokedex", about = "Terminal Pokédex backed by a GraphQL API")]
struct Args {
    /// GraphQL endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Path to open at start, e.g. /pokemon/Pikachu
    #[arg(short, long)]
    path: Option<String>,

    /// How many Pokémon the list asks for
    #[arg(short = 'n', long)]
    list_size: Option<u32>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Ignoring config file: {e}");
            config::PokedexConfig::default()
        }
    };
    let cli = CliOverrides {
        endpoint: args.endpoint,
        list_size: args.list_size,
        path: args.path,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - writes to pokedex.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("pokedex.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "Pokédex starting up: endpoint={}, list_size={}, path={}",
        resolved.endpoint,
        resolved.list_size,
        resolved.start_path
    );

    tui::run(resolved)
}
