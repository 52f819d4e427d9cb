//! Reminders commands - eligibility, settings and dispatch

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::api::BackendPort;
use crate::cli::{ask, AppContext, ConfigureArgs};
use crate::config::ReminderConfigStore;
use crate::domain::{compute_reminder_eligibility, days_until_expiry, ReminderEligibility};
use crate::errors::{MotdeskError, Result};
use crate::schemas::{LeadTime, ReminderConfig, Vehicle, VehicleQuery};
use crate::workflow::{LogNotifier, ReminderDispatcher, ReminderTarget};

fn parse_date(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
            MotdeskError::Validation(format!("invalid date {} (expected YYYY-MM-DD): {}", raw, e))
        }),
        None => Ok(Local::now().date_naive()),
    }
}

/// Fresh settings from the backend, or the mirror when the backend is unreachable.
async fn current_config(store: &ReminderConfigStore) -> ReminderConfig {
    match store.load_config().await {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "could not refresh reminder settings, using cached copy");
            store.cached()
        }
    }
}

/// Walk every page of the vehicle list.
async fn fetch_all_vehicles(backend: &dyn BackendPort, limit: u32) -> Result<Vec<Vehicle>> {
    let mut vehicles = Vec::new();
    let mut page = 1;
    loop {
        let query = VehicleQuery {
            page: Some(page),
            limit: Some(limit),
            ..Default::default()
        };
        let batch = backend.list_vehicles(&query).await?;
        let fetched = batch.items.len();
        vehicles.extend(batch.items);
        debug!(page, fetched, total = batch.total, "vehicle page fetched");

        // Servers may cap the page size below `limit`, so only the total ends the walk
        if fetched == 0 || vehicles.len() as u64 >= batch.total {
            break;
        }
        page += 1;
    }
    Ok(vehicles)
}

async fn eligibility(ctx: &AppContext, config: &ReminderConfig, date: NaiveDate) -> Result<ReminderEligibility> {
    let vehicles = fetch_all_vehicles(ctx.backend.as_ref(), ctx.config.page_limit.max(1)).await?;
    Ok(compute_reminder_eligibility(&vehicles, config, date))
}

fn print_vehicle(vehicle: &Vehicle, reference: NaiveDate) {
    let days = days_until_expiry(vehicle, reference).unwrap_or_default();
    println!(
        "  {:<12} {:<20} {}  ({} day(s))",
        vehicle.registration,
        vehicle.driver_name.as_deref().unwrap_or("-"),
        vehicle.mot_expiry.as_deref().unwrap_or("-"),
        days
    );
}

/// List vehicles due a reminder and vehicles already expired
pub async fn due(ctx: &AppContext, date: Option<&str>, json: bool) -> Result<()> {
    let reference = parse_date(date)?;
    let config = current_config(&ctx.reminder_store()).await;
    let result = eligibility(ctx, &config, reference).await?;

    if json {
        let out = serde_json::to_string_pretty(&result)
            .map_err(|e| MotdeskError::InvalidJson(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    if !config.enabled {
        println!("MOT reminders are disabled");
        return Ok(());
    }

    println!(
        "{} vehicle(s) due a reminder within {} of {}",
        result.eligible_count(),
        config.lead_time,
        reference
    );
    for vehicle in &result.needs_reminder {
        print_vehicle(vehicle, reference);
    }
    if !result.expired.is_empty() {
        println!("\n{} vehicle(s) with an expired MOT", result.expired_count());
        for vehicle in &result.expired {
            print_vehicle(vehicle, reference);
        }
    }
    Ok(())
}

/// Show the current reminder settings
pub async fn settings(ctx: &AppContext, json: bool) -> Result<()> {
    let config = ctx.reminder_store().load_config().await?;

    if json {
        let out = serde_json::to_string_pretty(&config)
            .map_err(|e| MotdeskError::InvalidJson(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    println!("Enabled:   {}", if config.enabled { "yes" } else { "no" });
    println!("Lead time: {}", config.lead_time);
    println!("Message:   {}", config.message);
    Ok(())
}

/// Change the reminder settings, starting from what the backend holds
pub async fn configure(ctx: &AppContext, args: &ConfigureArgs) -> Result<()> {
    // Reject a bad lead time before touching the backend or the mirror
    let days = args.days.map(LeadTime::new).transpose()?;

    let store = ctx.reminder_store();
    let current = store.load_config().await?;

    let enabled = if args.enable {
        true
    } else if args.disable {
        false
    } else {
        current.enabled
    };
    let lead_time = days.unwrap_or(current.lead_time);
    let message = args.message.clone().unwrap_or(current.message);

    let saved = store
        .save_config(&ReminderConfig::new(enabled, lead_time, message))
        .await?;
    println!(
        "Reminders {} · lead time {}",
        if saved.enabled { "enabled" } else { "disabled" },
        saved.lead_time
    );
    Ok(())
}

/// Send reminders for every vehicle currently due one
pub async fn send(
    ctx: &AppContext,
    date: Option<&str>,
    by_driver: bool,
    message: Option<&str>,
    yes: bool,
) -> Result<()> {
    let reference = parse_date(date)?;
    let config = current_config(&ctx.reminder_store()).await;
    if !config.enabled {
        return Err(MotdeskError::Validation(
            "MOT reminders are disabled; enable them with `reminders configure --enable`".to_string(),
        ));
    }

    let result = eligibility(ctx, &config, reference).await?;
    let target = if by_driver {
        ReminderTarget::Drivers
    } else {
        ReminderTarget::Vehicles
    };

    if !yes && !result.is_empty() {
        let question = format!("Send MOT reminders for {} vehicle(s)?", result.eligible_count());
        if !ask(&question) {
            println!("No reminders sent");
            return Ok(());
        }
    }

    let dispatcher = ReminderDispatcher::new(ctx.backend.clone(), Arc::new(LogNotifier));
    let receipt = dispatcher.send(&result, target, &config, message).await?;
    println!("{} reminder(s) sent, {} failed", receipt.sent, receipt.failed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::memory::{Call, InMemoryBackend};
    use crate::fs::ReminderCache;
    use crate::schemas::{Config, ReminderSettings, Role};
    use tempfile::TempDir;

    fn context(root: &TempDir, backend: Arc<InMemoryBackend>) -> AppContext {
        let backend: Arc<dyn BackendPort> = backend;
        AppContext {
            root: root.path().to_path_buf(),
            config: Config::default(),
            role: Role::Admin,
            backend,
        }
    }

    fn configure_args(days: Option<u32>) -> ConfigureArgs {
        ConfigureArgs {
            enable: true,
            disable: false,
            days,
            message: None,
        }
    }

    fn settings(days: u32) -> ReminderSettings {
        ReminderSettings {
            enabled: false,
            reminder_periods: vec![days],
            reminder_message: Some("Book now".to_string()),
        }
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Some("2024-01-08")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
        );
        assert!(matches!(parse_date(Some("08/01/2024")), Err(MotdeskError::Validation(_))));
        assert!(parse_date(None).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_all_vehicles_walks_pages() {
        let vehicles: Vec<Vehicle> = (0..3)
            .map(|i| Vehicle::new(format!("v{}", i), format!("REG{}", i)))
            .collect();
        // The in-memory backend returns everything on one page
        let backend = InMemoryBackend::new().with_vehicles(vehicles);

        let all = fetch_all_vehicles(&backend, 50).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(backend.calls().len(), 1);
        assert!(matches!(&backend.calls()[0], Call::ListVehicles(q) if q.page == Some(1)));
    }

    #[tokio::test]
    async fn test_fetch_all_vehicles_follows_total_past_capped_pages() {
        let vehicles: Vec<Vehicle> = (0..5)
            .map(|i| Vehicle::new(format!("v{}", i), format!("REG{}", i)))
            .collect();
        // Server hands out two vehicles per page whatever limit is asked for
        let backend = InMemoryBackend::new()
            .with_vehicles(vehicles)
            .with_page_cap(2);

        let all = fetch_all_vehicles(&backend, 50).await.unwrap();

        let ids: Vec<&str> = all.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v0", "v1", "v2", "v3", "v4"]);
        assert_eq!(backend.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_configure_rejects_bad_lead_time_before_any_call() {
        let temp = TempDir::new().unwrap();
        let cache = ReminderCache::for_root(temp.path());
        let previous = ReminderConfig::new(false, LeadTime::new(21).unwrap(), "kept");
        cache.write(&previous).unwrap();

        let backend = Arc::new(InMemoryBackend::new().with_settings(settings(14)));
        let ctx = context(&temp, backend.clone());

        let err = configure(&ctx, &configure_args(Some(10))).await.unwrap_err();

        assert!(matches!(err, MotdeskError::Validation(_)));
        assert!(backend.calls().is_empty());
        assert_eq!(cache.read().unwrap(), Some(previous));
    }

    #[tokio::test]
    async fn test_configure_saves_merged_settings() {
        let temp = TempDir::new().unwrap();
        let backend = Arc::new(InMemoryBackend::new().with_settings(settings(14)));
        let ctx = context(&temp, backend.clone());

        configure(&ctx, &configure_args(Some(30))).await.unwrap();

        assert_eq!(
            backend.calls(),
            vec![
                Call::GetSettings,
                Call::UpdateSettings(ReminderSettings {
                    enabled: true,
                    reminder_periods: vec![30],
                    reminder_message: Some("Book now".to_string()),
                }),
            ]
        );
    }
}
