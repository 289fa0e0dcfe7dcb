//! Static run configuration: the event table, timezones, signup links, and
//! template text.
//!
//! The built-in defaults describe the guild's standing weekly roster. A JSON
//! file with the same shape can replace them wholesale via [`Config::from_json`]
//! (weekdays and times are strings there and validated into typed values at
//! load, so every configuration mistake aborts the run up front).

use std::collections::HashMap;

use chrono::{NaiveTime, Weekday};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{Result, ScheduleError};
use crate::resolve::WeekdaySlot;

/// One recurring event: stable key, weekly slot, and its chat-bot command
/// template.
#[derive(Debug, Clone)]
pub struct EventDef {
    pub key: String,
    pub slot: WeekdaySlot,
    pub command_template: String,
}

/// The full validated run configuration. Constructed once at startup, never
/// mutated.
#[derive(Debug, Clone)]
pub struct Config {
    /// Events in announcement order.
    pub events: Vec<EventDef>,
    /// Soft-reserve link per event key. Updated week to week, so kept separate
    /// from the event table.
    pub signup_links: HashMap<String, String>,
    /// Timezone the slot times are written in.
    pub event_tz: Tz,
    /// Timezone the chat-bot wants `date:`/`time:` arguments in.
    pub display_tz: Tz,
    /// Weekday the raid week resets on.
    pub reset_weekday: Weekday,
    /// Combined announcement template with `{key}_day` / `{key}_timestamp`
    /// placeholders.
    pub schedule_template: String,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    event_timezone: String,
    display_timezone: String,
    reset_weekday: String,
    events: Vec<RawEvent>,
    #[serde(default)]
    signup_links: HashMap<String, String>,
    schedule_template: String,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    key: String,
    weekday: String,
    time: String,
    command_template: String,
}

impl Config {
    /// The built-in weekly roster.
    pub fn builtin() -> Self {
        // `new` only fails on out-of-range clock values; these are literals.
        let slot = |weekday, hour, minute| {
            WeekdaySlot::new(weekday, hour, minute).unwrap_or_else(|e| {
                unreachable!("built-in slot is valid by construction: {e}")
            })
        };
        let event = |key: &str, s: WeekdaySlot, template: &str| EventDef {
            key: key.to_string(),
            slot: s,
            command_template: template.to_string(),
        };

        Self {
            events: vec![
                event("mc_na", slot(Weekday::Wed, 19, 0), COMMAND_MC_NA),
                event("es", slot(Weekday::Thu, 14, 30), COMMAND_ES),
                event("bwl", slot(Weekday::Thu, 15, 0), COMMAND_BWL),
                event("aq40", slot(Weekday::Fri, 14, 30), COMMAND_AQ40),
                event("naxx_day1", slot(Weekday::Sat, 14, 30), COMMAND_NAXX_DAY1),
                event("naxx_day2", slot(Weekday::Sun, 14, 30), COMMAND_NAXX_DAY2),
                event("mc_eu", slot(Weekday::Mon, 14, 30), COMMAND_MC_EU),
            ],
            signup_links: [
                "mc_na",
                "es",
                "bwl",
                "aq40",
                "naxx_day1",
                "naxx_day2",
                "mc_eu",
            ]
            .into_iter()
            .map(|k| (k.to_string(), String::new()))
            .collect(),
            event_tz: chrono_tz::US::Central,
            display_tz: chrono_tz::US::Eastern,
            reset_weekday: Weekday::Tue,
            schedule_template: SCHEDULE_TEXT.to_string(),
        }
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    /// Any malformed weekday/time/timezone, duplicate event key, or event with
    /// no signup-link entry is rejected here -- there is no partial success.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(text)
            .map_err(|e| ScheduleError::Config(format!("not valid config JSON: {e}")))?;

        let event_tz = parse_tz(&raw.event_timezone)?;
        let display_tz = parse_tz(&raw.display_timezone)?;
        let reset_weekday = parse_weekday(&raw.reset_weekday)?;

        let mut events = Vec::with_capacity(raw.events.len());
        for raw_event in raw.events {
            let weekday = parse_weekday(&raw_event.weekday)?;
            let time = parse_time(&raw_event.time)?;
            if events
                .iter()
                .any(|e: &EventDef| e.key == raw_event.key)
            {
                return Err(ScheduleError::Config(format!(
                    "duplicate event key: {}",
                    raw_event.key
                )));
            }
            if !raw.signup_links.contains_key(&raw_event.key) {
                return Err(ScheduleError::Config(format!(
                    "event '{}' has no signup_links entry",
                    raw_event.key
                )));
            }
            events.push(EventDef {
                key: raw_event.key,
                slot: WeekdaySlot::new(weekday, time.0, time.1)?,
                command_template: raw_event.command_template,
            });
        }

        if events.is_empty() {
            return Err(ScheduleError::Config("no events defined".to_string()));
        }

        Ok(Self {
            events,
            signup_links: raw.signup_links,
            event_tz,
            display_tz,
            reset_weekday,
            schedule_template: raw.schedule_template,
        })
    }

    /// Signup link for an event key.
    ///
    /// # Errors
    /// `ScheduleError::UnknownEvent` when the key has no link entry (impossible
    /// for configs built through [`Config::from_json`], which cross-checks).
    pub fn signup_link(&self, key: &str) -> Result<&str> {
        self.signup_links
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ScheduleError::UnknownEvent(key.to_string()))
    }
}

fn parse_tz(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| ScheduleError::InvalidTimezone(name.to_string()))
}

fn parse_weekday(name: &str) -> Result<Weekday> {
    name.parse()
        .map_err(|_| ScheduleError::InvalidWeekday(name.to_string()))
}

/// Parse `"HH:MM"` into (hour, minute).
fn parse_time(text: &str) -> Result<(u32, u32)> {
    use chrono::Timelike;
    let t = NaiveTime::parse_from_str(text, "%H:%M")
        .map_err(|_| ScheduleError::InvalidTime(format!("'{text}' is not HH:MM")))?;
    Ok((t.hour(), t.minute()))
}

// ---------------------------------------------------------------------------
// Built-in template text. Placeholders: {sr_link}, {raid_discord_date},
// {raid_discord_time}, {raid_utc_timestamp}; the schedule template uses
// {<key>_day} and {<key>_timestamp}.
// ---------------------------------------------------------------------------

const COMMAND_MC_NA: &str = "
/quickcreate arguments:[template:02][title:Wednesday Weekly MC PUG][description:Bindings + mats HR. All others (eye, neck) open to SR. Non-class tier gear BOEs will be random rolled to the raid by the loot master (you don't need to roll - unless it is SR'ed).

We will start invites at the time noted for raid time, and start clearing ASAP. Clear time will depend on our DPS but average time is about 1 hour 15 minutes.

{sr_link}][channel:#wednesday-mc-pug][date:{raid_discord_date}][time:{raid_discord_time}]
";

const COMMAND_MC_EU: &str = "
/quickcreate arguments:[template:02][title:Molten Core][description:Bindings + mats HR. All others (eye, neck) open to SR. Non-class tier gear BOEs will be random rolled to the raid by the loot master (you don't need to roll - unless it is SR'ed).

We will start invites at the time noted for raid time, and start clearing ASAP. Clear time will depend on our DPS but average time is about 1 hour 15 minutes.

{sr_link}][channel:#monday-mc-pug][date:{raid_discord_date}][time:{raid_discord_time}]
";

const COMMAND_ES: &str = "
/quickcreate arguments:[template:02][title:Emerald Sanctum][description:We do ES Hard Mode which means Erennius will **NOT** die. Do not SR loot that Erennius drops.

Legendary enchant HR for the guild.

{sr_link}][channel:#es-signup][date:{raid_discord_date}][time:{raid_discord_time}]
";

const COMMAND_BWL: &str = "
/quickcreate arguments:[template:02][title:Blackwing Lair][description:This run will start right after our ES run ends; at approximately <t:{raid_utc_timestamp}:f>

**DFT, Nelth Tear, and Rejuv Gem have specific loot rules.** Read the pinned post in this channel for details!

{sr_link}][channel:#bwl-signup][date:{raid_discord_date}][time:{raid_discord_time}]
";

const COMMAND_AQ40: &str = "
/quickcreate arguments:[template:02][title:Temple of Ahn'Qiraj][description:Please refer to the pinned post in this channel for additional **REQUIRED** consumes for this raid.

**For anyone hoping to soft reserve Bug Trio loot; we kill Vem last.** So please make sure you are NOT soft reserving loot that drops only when Princess Yauj or Lord Kri are killed last.

{sr_link}][channel:#aq40-signup][date:{raid_discord_date}][time:{raid_discord_time}]
";

const COMMAND_NAXX_DAY1: &str = "
/quickcreate arguments:[template:02][title:Naxxramas Day 1][description:Please refer to the pinned post in this channel for additional **REQUIRED** consumes for this raid.

We will clear wings in the following order:
1. Abom Wing
2. DK Wing up to and including Gothik (Possibly 4hm - see note below)
3. Plague Wing
4. Spider Wing

**Four Horsemen - If we have the right composition with tanks & healers we will do it Day 1. We will decide before we start clearing and give a note and a moment to adjust SRs.**

Please soft reserve accordingly, as soft reserves from day 1 do **NOT** rollover into day 2, and soft reserves from day 2 do **NOT** apply to day 1; **NO EXCEPTIONS**.

{sr_link}][channel:#naxx-day-1-signup][date:{raid_discord_date}][time:{raid_discord_time}]
";

const COMMAND_NAXX_DAY2: &str = "
/quickcreate arguments:[template:02][title:Naxxramas Day 2][description:Please refer to the pinned post in this channel for additional **REQUIRED** consumes for this raid.

On day 2 we will pickup wherever we left off on day 1 (if you didn't attend, don't hesitate to ask what we have left). Please place a soft reserve when signing up and revisit the soft reserve after day 1 is finished. Soft reserves from day 1 do **NOT** rollover into day 2, and soft reserves from day 2 do **NOT** apply to day 1; **NO EXCEPTIONS**.

{sr_link}][channel:#naxx-day-2-signup][date:{raid_discord_date}][time:{raid_discord_time}]
";

const SCHEDULE_TEXT: &str = "
*The times posted below are **local to you** and are when we start the first pull; invites begin 30 minutes prior. Invites go out on a first come first serve basis (for Naxx/AQ40 we reserve the right to **choose** who we invite when we have an overabundance of signups). Don't be late!*

Our raid schedule for this week is:

{mc_na_day} <t:{mc_na_timestamp}:f> - Molten Core (Hosted by USA boyz) <#1219397594862714930>

{es_day} <t:{es_timestamp}:f> - Emerald Sanctum Hard Mode <#1194352240023060521>
{bwl_day} <t:{bwl_timestamp}:f> - Black Wing Lair (Start time approximate; begins after ES) <#1194351759741694083>

{aq40_day} <t:{aq40_timestamp}:f> - Temple of Ahn'Qiraj (Gear check required) <#1194351823323144202>

{naxx_day1_day} <t:{naxx_day1_timestamp}:f> - Naxxramas Day 1 (Gear check required) <#1207362552959344640>

{naxx_day2_day} <t:{naxx_day2_timestamp}:f> - Naxxramas Day 2 (Gear check required) <#1257103049261056050>

{mc_eu_day} <t:{mc_eu_timestamp}:f> - Molten Core (Hosted by guild) <#1191746258990276638>

*The times posted above are **local to you** and are when we start the first pull; invites begin 30 minutes prior. Invites go out on a first come first serve basis (for Naxx/AQ40 we reserve the right to **choose** who we invite when we have an overabundance of signups). Don't be late!*
";
