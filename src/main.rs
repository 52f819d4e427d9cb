//! Motdesk CLI - Booking lifecycle and MOT reminder console for garages and admins

use clap::Parser;
use motdesk::cli::commands::{bookings, reminders, transitions};
use motdesk::cli::{AppContext, BookingCommands, Cli, Commands, ReminderCommands};
use motdesk::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the verbosity flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> motdesk::Result<()> {
    let Some(command) = cli.command else {
        // Default to showing help - clap handles this
        println!("Use --help for usage information");
        return Ok(());
    };

    let ctx = AppContext::load(cli.cwd.as_deref(), cli.api_url.as_deref(), cli.role.as_deref())?;

    match command {
        Commands::Bookings { command } => match command {
            BookingCommands::List {
                status,
                search,
                page,
                limit,
                json,
            } => {
                bookings::list(&ctx, status.as_deref(), search.as_deref(), page, limit, json).await
            }
            BookingCommands::Actions { id, json } => bookings::actions(&ctx, &id, json).await,
            BookingCommands::SetStatus { id, status, yes } => {
                bookings::set_status(&ctx, &id, &status, yes).await
            }
        },
        Commands::Transitions { from, json } => transitions::run(&ctx, from.as_deref(), json).await,
        Commands::Reminders { command } => match command {
            ReminderCommands::Due { date, json } => reminders::due(&ctx, date.as_deref(), json).await,
            ReminderCommands::Settings { json } => reminders::settings(&ctx, json).await,
            ReminderCommands::Configure(args) => reminders::configure(&ctx, &args).await,
            ReminderCommands::Send {
                date,
                by_driver,
                message,
                yes,
            } => {
                reminders::send(&ctx, date.as_deref(), by_driver, message.as_deref(), yes).await
            }
        },
    }
}
