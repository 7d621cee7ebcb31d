use clap::{Parser, Subcommand};
use eyre::{eyre, Result, WrapErr};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
    prelude::*,
};

use base::database::open_database;
use base::setting::{generate_default, load, to_toml, Settings};
use base::CLI_NAME;
use gigbook::{api, seed, store::Store};

#[derive(Parser)]
#[command(name = CLI_NAME, author, version, about, long_about = None)]
#[command(next_line_help = true)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Overrides the configured listen address
    #[arg(short, long, name = "ADDRESS")]
    listen_address: Option<String>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Prints the default configuration
    DefaultConfig,
    /// Applies pending migrations and exits
    Migrate,
    /// Fills an empty database with demo venues, artists and shows
    Seed,
    /// Runs the web server (default)
    Serve,
}

async fn connect(settings: &Settings) -> Result<DatabaseConnection> {
    let db = open_database(&settings.database).await?;
    migration::Migrator::up(&db, None)
        .await
        .wrap_err("Could not apply migrations")?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<()> {
    // logging
    color_eyre::install()?;
    let tracing_builder = tracing_subscriber::registry().with(fmt::layer());
    if std::env::var(base::GIGBOOK_LOGLEVEL).is_ok() {
        tracing_builder.with(EnvFilter::from_env(base::GIGBOOK_LOGLEVEL))
    } else {
        tracing_builder.with(EnvFilter::default().add_directive(LevelFilter::INFO.into()))
    }
    .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::DefaultConfig => {
            let default = generate_default(Settings::default())?;
            println!("{}", to_toml(&default)?);
            Ok(())
        }
        Command::Migrate => {
            let settings = load(cli.config)?;
            connect(&settings).await?;
            tracing::info!("Database is up to date");
            Ok(())
        }
        Command::Seed => {
            let settings = load(cli.config)?;
            let store = Store::new(connect(&settings).await?);
            let seeded = seed::seed(&store).await?;
            println!(
                "Added {} venues, {} artists and {} shows",
                seeded.venues, seeded.artists, seeded.shows
            );
            Ok(())
        }
        Command::Serve => {
            let mut settings = load(cli.config)?;
            if let Some(address) = cli.listen_address {
                settings.listen_address = address;
            }
            let addr: SocketAddr = settings
                .listen_address
                .parse()
                .wrap_err(eyre!("Invalid listen address"))?;

            let store = Store::new(connect(&settings).await?);
            let router = api::router(api::AppState::new(store, settings));

            tracing::info! {%addr, "Listening"};
            axum::Server::bind(&addr)
                .serve(router.into_make_service())
                .await
                .wrap_err("Server error")?;
            Ok(())
        }
    }
}
