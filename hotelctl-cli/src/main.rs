//! hotelctl CLI - single-user hotel reservation dashboard
//!
//! Lists reservations and clients, searches free rooms over a stay, and
//! records new clients and reservations in a local SQLite database:
//! - one subcommand per dashboard action (`reservations`, `clients`,
//!   `available`, `add-client`, `add-reservation`)
//! - an interactive menu over the same actions (`menu`)
//! - database bootstrap with seed data (`init`) and reference listings

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use hotelctl_core::{HotelConfig, HotelStore, NewClient, NewReservation};
use tracing::info;

mod action;
mod config;
mod menu;
mod protocol;
mod render;
mod tracing_setup;

use action::{dispatch, Action};
use render::Renderer;

#[derive(Parser, Debug)]
#[command(
    name = "hotelctl",
    author,
    version,
    about = "Hotel reservation dashboard: bookings, clients and room availability",
    long_about = "Manage a small hotel reservation database from the terminal. List bookings \
                  and clients, search rooms free over a stay, and record new clients and \
                  reservations."
)]
struct Cli {
    /// SQLite database file (default: config file, then ~/.hotelctl/hotel.db)
    #[arg(long, global = true, env = "HOTELCTL_DB", value_name = "PATH")]
    db: Option<PathBuf>,

    /// Print results as a JSON envelope
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the schema and load the seed data
    Init(InitArgs),
    /// List all reservations with client, hotel, room and room type
    Reservations,
    /// List all clients
    Clients,
    /// Search rooms with no reservation overlapping the stay
    Available(StayArgs),
    /// Add a client (name, email and phone are required)
    AddClient(AddClientArgs),
    /// Add a reservation for an available room
    AddReservation(AddReservationArgs),
    /// List hotels
    Hotels,
    /// List room types
    RoomTypes,
    /// List rooms with their hotel and type references
    Rooms,
    /// List services offered
    Prestations,
    /// List guest evaluations
    Evaluations,
    /// Row counts per table
    Stats,
    /// Interactive menu over the five dashboard actions
    Menu,
    /// Manage hotelctl configuration (init, show, path)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Create the tables only, without seed rows
    #[arg(long)]
    no_seed: bool,
}

#[derive(Parser, Debug)]
struct StayArgs {
    /// Arrival date (YYYY-MM-DD)
    #[arg(long = "from", value_name = "DATE")]
    arrival: NaiveDate,

    /// Departure date (YYYY-MM-DD), after the arrival date
    #[arg(long = "to", value_name = "DATE")]
    departure: NaiveDate,
}

#[derive(Parser, Debug)]
struct AddClientArgs {
    /// Full name
    #[arg(long)]
    name: String,

    /// Email address
    #[arg(long)]
    email: String,

    /// Phone number
    #[arg(long)]
    phone: String,

    /// Street address
    #[arg(long)]
    address: Option<String>,

    /// City
    #[arg(long)]
    city: Option<String>,

    /// Postal code
    #[arg(long)]
    postal_code: Option<String>,
}

#[derive(Parser, Debug)]
struct AddReservationArgs {
    /// Client id (see `hotelctl clients`)
    #[arg(long)]
    client: i64,

    /// Room id (see `hotelctl available`)
    #[arg(long)]
    room: i64,

    #[command(flatten)]
    stay: StayArgs,
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();
    protocol::init_json_mode(cli.json);

    match protocol::handle_result(run(cli).await) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !protocol::is_json_mode() {
                eprintln!("❌ {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = HotelConfig::load().context("failed to load configuration")?;
    let db_flag = cli.db.as_deref();

    let command = match cli.command {
        Commands::Config(args) => return config::run_config(args, &config, db_flag),
        Commands::Completions(args) => return run_completions(args),
        command => command,
    };

    let renderer = Renderer::new(&config.display);
    let db_path = config.resolve_db_path(db_flag);
    let store = HotelStore::open(&db_path)
        .await
        .with_context(|| format!("failed to open database {}", db_path.display()))?;

    let result = run_store_command(command, &store, &renderer, &config).await;
    store.close().await;
    result
}

async fn run_store_command(
    command: Commands,
    store: &HotelStore,
    renderer: &Renderer,
    config: &HotelConfig,
) -> Result<()> {
    let action = match command {
        Commands::Init(args) => return run_init(args, store, renderer, config).await,
        Commands::Hotels => {
            renderer.hotels(store.list_hotels().await?);
            return Ok(());
        }
        Commands::RoomTypes => {
            renderer.room_types(store.list_room_types().await?);
            return Ok(());
        }
        Commands::Rooms => {
            renderer.rooms(store.list_rooms().await?);
            return Ok(());
        }
        Commands::Prestations => {
            renderer.prestations(store.list_prestations().await?);
            return Ok(());
        }
        Commands::Evaluations => {
            renderer.evaluations(store.list_evaluations().await?);
            return Ok(());
        }
        Commands::Stats => {
            renderer.stats(store.stats().await?);
            return Ok(());
        }
        Commands::Menu => return menu::run_menu(store, renderer).await,
        Commands::Reservations => Action::ListReservations,
        Commands::Clients => Action::ListClients,
        Commands::Available(stay) => Action::SearchAvailableRooms {
            arrival: stay.arrival,
            departure: stay.departure,
        },
        Commands::AddClient(args) => Action::AddClient(NewClient {
            name: args.name,
            email: args.email,
            phone: args.phone,
            address: args.address,
            city: args.city,
            postal_code: args.postal_code,
        }),
        Commands::AddReservation(args) => Action::AddReservation(NewReservation {
            client_id: args.client,
            room_id: args.room,
            arrival: args.stay.arrival,
            departure: args.stay.departure,
        }),
        Commands::Config(_) | Commands::Completions(_) => return Ok(()),
    };

    let outcome = dispatch(store, action).await?;
    renderer.outcome(outcome);
    Ok(())
}

async fn run_init(
    args: InitArgs,
    store: &HotelStore,
    renderer: &Renderer,
    config: &HotelConfig,
) -> Result<()> {
    if !args.no_seed && config.database.seed {
        let inserted = store.seed().await.context("failed to load seed data")?;
        info!(inserted, "database initialised");
    }
    renderer.stats(store.stats().await?);
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
