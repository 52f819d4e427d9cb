//! Bookings commands - list, inspect actions, change status

use std::sync::Arc;

use crate::cli::{AppContext, StdinConfirmer};
use crate::domain::{booking_actions, parse_status};
use crate::errors::{MotdeskError, Result};
use crate::schemas::{Booking, BookingQuery};
use crate::workflow::{AutoConfirm, Confirmer, LogNotifier, StatusChangeOutcome, StatusChangeService};

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| MotdeskError::InvalidJson(e.to_string()))
}

fn print_booking_row(booking: &Booking) {
    let driver = booking.driver.as_ref().map(|d| d.name.as_str()).unwrap_or("-");
    let garage = booking.garage.as_ref().map(|g| g.name.as_str()).unwrap_or("-");
    let registration = booking.vehicle_registration.as_deref().unwrap_or("-");
    println!(
        "{:<24} {:<10} {}  {:<20} {:<20} {:<10} {:>9}",
        booking.id,
        booking.status.label(),
        booking.order_date.format("%Y-%m-%d %H:%M"),
        driver,
        garage,
        registration,
        booking.total_amount.round_dp(2),
    );
}

/// List bookings with optional filtering
pub async fn list(
    ctx: &AppContext,
    status: Option<&str>,
    search: Option<&str>,
    page: Option<u32>,
    limit: Option<u32>,
    json: bool,
) -> Result<()> {
    let query = BookingQuery {
        status: status.map(parse_status).transpose()?,
        search: search.map(str::to_string),
        page,
        limit: Some(limit.unwrap_or(ctx.config.page_limit)),
    };

    let bookings = ctx.backend.list_bookings(&query).await?;

    if json {
        println!("{}", to_json(&bookings)?);
        return Ok(());
    }

    if bookings.is_empty() {
        println!("No bookings found");
        return Ok(());
    }

    for booking in &bookings.items {
        print_booking_row(booking);
    }
    println!(
        "\nPage {} · {} of {} booking(s)",
        bookings.page,
        bookings.items.len(),
        bookings.total
    );
    Ok(())
}

/// Show the status actions the current role may take on a booking
pub async fn actions(ctx: &AppContext, id: &str, json: bool) -> Result<()> {
    let booking = ctx.backend.get_booking(id).await?;
    let actions = booking_actions(ctx.role, &booking);

    if json {
        println!("{}", to_json(&actions)?);
        return Ok(());
    }

    println!("{} is {}", booking.subject(), booking.status.label());
    if actions.is_empty() {
        if booking.is_closed() {
            println!("Booking is closed; no further changes are possible");
        } else {
            println!("No status changes available to {}", ctx.role);
        }
        return Ok(());
    }
    for action in actions {
        println!("  → {} ({})", action.label, action.target);
    }
    Ok(())
}

/// Move a booking to `status` after confirmation
pub async fn set_status(ctx: &AppContext, id: &str, status: &str, yes: bool) -> Result<()> {
    let booking = ctx.backend.get_booking(id).await?;

    let confirmer: Arc<dyn Confirmer> = if yes {
        Arc::new(AutoConfirm)
    } else {
        Arc::new(StdinConfirmer)
    };
    let service = StatusChangeService::new(ctx.backend.clone(), confirmer, Arc::new(LogNotifier));

    let refresh = BookingQuery {
        limit: Some(ctx.config.page_limit),
        ..Default::default()
    };

    match service
        .request_status_change(&booking, status, ctx.role, &refresh)
        .await?
    {
        StatusChangeOutcome::Declined => println!("No changes made"),
        StatusChangeOutcome::Applied { booking, refreshed } => {
            println!("{} is now {}", booking.subject(), booking.status.label());
            println!();
            for row in &refreshed.items {
                print_booking_row(row);
            }
        }
    }
    Ok(())
}
