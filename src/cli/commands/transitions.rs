//! Transitions command - Print the current role's transition table

use serde::Serialize;

use crate::cli::AppContext;
use crate::domain::{allowed_transitions, parse_status, BOOKING_STATUSES};
use crate::errors::{MotdeskError, Result};
use crate::schemas::BookingStatus;

#[derive(Serialize)]
struct Row {
    from: BookingStatus,
    to: Vec<BookingStatus>,
}

pub async fn run(ctx: &AppContext, from: Option<&str>, json: bool) -> Result<()> {
    let statuses = match from {
        Some(raw) => vec![parse_status(raw)?],
        None => BOOKING_STATUSES.to_vec(),
    };

    let rows: Vec<Row> = statuses
        .into_iter()
        .map(|from| Row {
            from,
            to: allowed_transitions(ctx.role, from),
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&rows)
            .map_err(|e| MotdeskError::InvalidJson(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    println!("Transitions for {}:", ctx.role);
    for row in rows {
        let targets = if row.to.is_empty() {
            "(none)".to_string()
        } else {
            row.to
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!("  {:<10} → {}", row.from, targets);
    }
    Ok(())
}
