//! Render resolved event times into the command blocks and the combined
//! schedule announcement.

use std::collections::HashMap;

use chrono::{DateTime, Utc, Weekday};

use crate::config::Config;
use crate::error::{Result, ScheduleError};
use crate::resolve::{self, ResolvedInstant};
use crate::template;

/// Which resolution strategy drives the run. Both delegate to the named
/// functions in [`resolve`]; see that module for how they differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveMode {
    /// Anchor every event to the shared week-reset date.
    #[default]
    Reset,
    /// Resolve each event independently from "now" plus one day.
    Rolling,
}

/// One event's key paired with its resolved UTC instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEvent {
    pub key: String,
    pub instant: ResolvedInstant,
}

/// Resolve every configured event for the week containing (or following) `now`.
///
/// Results are in the configuration's announcement order.
///
/// # Errors
/// Propagates resolution errors; cannot fail for configs whose slots were
/// validated at load.
pub fn resolve_all(
    config: &Config,
    mode: ResolveMode,
    now: DateTime<Utc>,
) -> Result<Vec<ResolvedEvent>> {
    match mode {
        ResolveMode::Reset => {
            let reset = resolve::resolve_week_reset(config.event_tz, config.reset_weekday, now);
            config
                .events
                .iter()
                .map(|event| {
                    resolve::resolve_from_reset(reset, config.event_tz, &event.slot).map(|instant| {
                        ResolvedEvent {
                            key: event.key.clone(),
                            instant,
                        }
                    })
                })
                .collect()
        }
        ResolveMode::Rolling => config
            .events
            .iter()
            .map(|event| {
                resolve::resolve_rolling(now, config.event_tz, &event.slot).map(|instant| {
                    ResolvedEvent {
                        key: event.key.clone(),
                        instant,
                    }
                })
            })
            .collect(),
    }
}

/// Render every event's chat-bot create command as a titled block.
///
/// # Errors
/// Fails on a template placeholder with no value or a missing signup link.
pub fn render_commands(config: &Config, resolved: &[ResolvedEvent]) -> Result<String> {
    let mut out = String::new();

    for event in &config.events {
        let instant = instant_for(resolved, &event.key)?;
        let display = instant.with_timezone(config.display_tz);

        let mut values = HashMap::new();
        values.insert(
            "sr_link".to_string(),
            config.signup_link(&event.key)?.to_string(),
        );
        values.insert(
            "raid_discord_date".to_string(),
            display.format("%Y-%m-%d").to_string(),
        );
        values.insert(
            "raid_discord_time".to_string(),
            display.format("%H:%M").to_string(),
        );
        values.insert(
            "raid_utc_timestamp".to_string(),
            instant.unix_timestamp().to_string(),
        );

        let text = template::render(&event.command_template, &values)?;
        out.push_str(&event.key);
        out.push_str(" Create Raid Command\n");
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&text);
        out.push_str("\n\n");
    }

    Ok(out)
}

/// Render the combined schedule announcement: every event's weekday name and
/// Unix timestamp substituted into the schedule template.
///
/// # Errors
/// Fails when the schedule template references an event key with no resolved
/// instant (or any other unknown placeholder).
pub fn render_schedule(config: &Config, resolved: &[ResolvedEvent]) -> Result<String> {
    let mut values = HashMap::new();
    for event in &config.events {
        let instant = instant_for(resolved, &event.key)?;
        values.insert(
            format!("{}_day", event.key),
            weekday_name(event.slot.weekday()).to_string(),
        );
        values.insert(
            format!("{}_timestamp", event.key),
            instant.unix_timestamp().to_string(),
        );
    }

    let mut out = String::new();
    out.push_str("RAID SCHEDULE\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&template::render(&config.schedule_template, &values)?);
    out.push_str("\n\n");
    Ok(out)
}

const RULE: &str = "-----------------------------------------------------------------------------------------------------------";

fn instant_for(resolved: &[ResolvedEvent], key: &str) -> Result<ResolvedInstant> {
    resolved
        .iter()
        .find(|r| r.key == key)
        .map(|r| r.instant)
        .ok_or_else(|| ScheduleError::UnknownEvent(key.to_string()))
}

/// Full English weekday name, as the announcement displays it.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
