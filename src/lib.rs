//! Motdesk - Booking lifecycle and MOT reminder console for garages and admins
//!
//! This library provides the core functionality for the motdesk CLI, including:
//! - Schema definitions for bookings, vehicles, roles and reminder settings
//! - Domain logic for role-keyed status transitions and reminder eligibility
//! - Workflows that confirm, apply and report status changes and reminder sends
//! - A backend port with an HTTP adapter for the booking platform API
//! - Configuration loading and the local reminder settings mirror

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod workflow;

// Re-export commonly used types
pub use errors::{MotdeskError, Result};
pub use schemas::{Booking, BookingStatus, Config, ReminderConfig, Role, Vehicle};
