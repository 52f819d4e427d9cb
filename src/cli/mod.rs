//! CLI module for motdesk
//!
//! Provides the command-line interface using clap.

pub mod commands;
mod context;
mod prompt;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use context::AppContext;
pub use prompt::{ask, StdinConfirmer};

/// motdesk - Booking lifecycle and MOT reminder console for garages and admins
#[derive(Parser, Debug)]
#[command(name = "motdesk")]
#[command(version)]
#[command(about = "Booking lifecycle and MOT reminder console for garages and admins")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Act as this role (admin, garage, driver)
    #[arg(long, global = true)]
    pub role: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect and update bookings
    Bookings {
        #[command(subcommand)]
        command: BookingCommands,
    },

    /// Show the status transitions available to the current role
    Transitions {
        /// Only show transitions out of this status
        #[arg(long)]
        from: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// MOT reminder eligibility, settings and dispatch
    Reminders {
        #[command(subcommand)]
        command: ReminderCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum BookingCommands {
    /// List bookings with optional filtering
    List {
        /// Filter by status (pending, accepted, rejected, completed, cancelled)
        #[arg(long)]
        status: Option<String>,

        /// Free-text search (driver, garage, registration)
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the status actions offered for a booking
    Actions {
        /// Booking ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move a booking to a new status
    SetStatus {
        /// Booking ID
        id: String,

        /// Target status
        status: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReminderCommands {
    /// List vehicles due a reminder and vehicles already expired
    Due {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the current reminder settings
    Settings {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change the reminder settings
    Configure(ConfigureArgs),

    /// Send reminders for every vehicle currently due one
    Send {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Address one reminder per driver instead of per vehicle
        #[arg(long)]
        by_driver: bool,

        /// Message to send instead of the configured one
        #[arg(long)]
        message: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
pub struct ConfigureArgs {
    /// Turn reminders on
    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    /// Turn reminders off
    #[arg(long)]
    pub disable: bool,

    /// Lead time in days (7, 14, 21 or 30)
    #[arg(long)]
    pub days: Option<u32>,

    /// Reminder message (blank restores the default)
    #[arg(long)]
    pub message: Option<String>,
}
