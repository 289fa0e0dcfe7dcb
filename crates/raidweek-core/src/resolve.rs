//! Event time resolution -- next weekday occurrence relative to an anchor.
//!
//! A raid is a (weekday, wall-clock time) pair with no calendar date of its own.
//! Resolution pins it to a concrete date using the "weekday on-or-after" rule:
//! starting from an anchor date in the raid timezone, take the first date whose
//! weekday matches (the anchor's own date when it already matches), attach the
//! wall-clock time, and convert to UTC.
//!
//! Two resolution strategies exist and are deliberately kept as separate named
//! functions because they disagree on the same-weekday edge case:
//!
//! - [`resolve_from_reset`] anchors every event to a shared week-reset date, so
//!   an event on the reset weekday itself resolves to that same date.
//! - [`resolve_rolling`] nudges "now" forward one day and resolves each event
//!   independently, so an event whose weekday is today always lands next week.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday,
};
use chrono_tz::Tz;

use crate::error::{Result, ScheduleError};

/// A recurring weekly slot: weekday plus 24-hour wall-clock time, detached from
/// any calendar date and any timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdaySlot {
    weekday: Weekday,
    hour: u32,
    minute: u32,
}

impl WeekdaySlot {
    /// Construct a slot, rejecting out-of-range clock values.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidTime` if `hour > 23` or `minute > 59`.
    pub fn new(weekday: Weekday, hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 {
            return Err(ScheduleError::InvalidTime(format!(
                "hour {hour} out of range 0-23"
            )));
        }
        if minute > 59 {
            return Err(ScheduleError::InvalidTime(format!(
                "minute {minute} out of range 0-59"
            )));
        }
        Ok(Self {
            weekday,
            hour,
            minute,
        })
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

/// An absolute UTC instant produced by resolving a [`WeekdaySlot`] against an
/// anchor. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResolvedInstant {
    utc: DateTime<Utc>,
}

impl ResolvedInstant {
    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    /// Unix epoch seconds, for embedding in chat-bot timestamp markup.
    pub fn unix_timestamp(&self) -> i64 {
        self.utc.timestamp()
    }

    /// View the instant in another timezone for civil date/time formatting.
    pub fn with_timezone(&self, tz: Tz) -> DateTime<Tz> {
        self.utc.with_timezone(&tz)
    }
}

/// First date with weekday `target` that is on or after `date`.
///
/// Returns `date` itself when its weekday already matches -- never skips a week.
pub fn next_weekday_on_or_after(date: NaiveDate, target: Weekday) -> NaiveDate {
    let ahead =
        (target.num_days_from_monday() + 7 - date.weekday().num_days_from_monday()) % 7;
    date + Duration::days(i64::from(ahead))
}

/// The week-reset anchor: next occurrence of `reset_weekday` on or after "now",
/// evaluated as a civil date in `tz`.
///
/// Computed this way so the full schedule for the upcoming week can be generated
/// as soon as the reset weekday has passed, rather than after every individual
/// event.
pub fn resolve_week_reset(tz: Tz, reset_weekday: Weekday, now: DateTime<Utc>) -> NaiveDate {
    let today = now.with_timezone(&tz).date_naive();
    next_weekday_on_or_after(today, reset_weekday)
}

/// Mode 1: resolve `slot` relative to a shared week-reset anchor date.
///
/// An event on the reset weekday itself resolves to the reset date, not a week
/// later.
///
/// # Errors
/// Returns `ScheduleError::InvalidTime` if the wall-clock time cannot be mapped
/// to any instant in `tz` (never happens for slots built via [`WeekdaySlot::new`]).
pub fn resolve_from_reset(
    reset_date: NaiveDate,
    tz: Tz,
    slot: &WeekdaySlot,
) -> Result<ResolvedInstant> {
    let date = next_weekday_on_or_after(reset_date, slot.weekday);
    civil_slot_to_instant(tz, date, slot)
}

/// Mode 2: resolve `slot` relative to "now" advanced by one day, with no shared
/// anchor.
///
/// The one-day nudge guards against an event occurring today being misreported
/// as already past due to time-of-day comparison. It masks the same-day edge
/// case rather than resolving it: an event whose weekday equals today's always
/// lands next week, unlike mode 1. This discrepancy is intentional, kept from
/// the two generations of the tool.
pub fn resolve_rolling(now: DateTime<Utc>, tz: Tz, slot: &WeekdaySlot) -> Result<ResolvedInstant> {
    let nudged = now.with_timezone(&tz).date_naive() + Duration::days(1);
    let date = next_weekday_on_or_after(nudged, slot.weekday);
    civil_slot_to_instant(tz, date, slot)
}

fn civil_slot_to_instant(tz: Tz, date: NaiveDate, slot: &WeekdaySlot) -> Result<ResolvedInstant> {
    let local = date.and_hms_opt(slot.hour, slot.minute, 0).ok_or_else(|| {
        ScheduleError::InvalidTime(format!(
            "{:02}:{:02} is not a valid time",
            slot.hour, slot.minute
        ))
    })?;
    Ok(ResolvedInstant {
        utc: civil_to_utc(tz, local)?,
    })
}

/// Convert a civil datetime in `tz` to UTC under a wall-clock DST policy:
/// ambiguous times (fall-back) take the earlier offset; nonexistent times
/// (spring-forward gap) shift forward to the first valid instant.
fn civil_to_utc(tz: Tz, local: NaiveDateTime) -> Result<DateTime<Utc>> {
    let mut probe = local;
    // Minute steps, so the first valid instant after a gap is hit exactly no
    // matter how the slot's minute aligns with the gap boundary. One day of
    // steps bounds even exotic transitions.
    for _ in 0..24 * 60 {
        match tz.from_local_datetime(&probe) {
            LocalResult::Single(dt) => return Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earlier, _) => return Ok(earlier.with_timezone(&Utc)),
            LocalResult::None => probe += Duration::minutes(1),
        }
    }
    Err(ScheduleError::InvalidTime(format!(
        "{local} has no valid instant in {tz}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_rejects_bad_hour() {
        assert!(WeekdaySlot::new(Weekday::Mon, 24, 0).is_err());
    }

    #[test]
    fn slot_rejects_bad_minute() {
        assert!(WeekdaySlot::new(Weekday::Mon, 12, 60).is_err());
    }

    #[test]
    fn slot_accepts_boundary_values() {
        assert!(WeekdaySlot::new(Weekday::Sun, 23, 59).is_ok());
        assert!(WeekdaySlot::new(Weekday::Mon, 0, 0).is_ok());
    }
}
