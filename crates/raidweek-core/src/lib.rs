//! # raidweek-core
//!
//! Weekly raid schedule resolution: turns a static table of (weekday,
//! wall-clock time) raid slots into concrete UTC instants for the upcoming raid
//! week, and renders them into chat-bot signup commands and a combined schedule
//! announcement.
//!
//! The raid week is anchored on a fixed reset weekday (Tuesday by default).
//! Event slots are written in the raid timezone and resolved to absolute time
//! on each run; nothing is persisted between runs.
//!
//! ## Modules
//!
//! - [`resolve`] — weekday/time slots → UTC instants (reset-anchored and
//!   rolling strategies)
//! - [`config`] — the event table, timezones, and template text
//! - [`template`] — `{name}` placeholder substitution
//! - [`render`] — per-event command blocks and the combined announcement
//! - [`error`] — error types

pub mod config;
pub mod error;
pub mod render;
pub mod resolve;
pub mod template;

pub use config::{Config, EventDef};
pub use error::ScheduleError;
pub use render::{render_commands, render_schedule, resolve_all, ResolveMode, ResolvedEvent};
pub use resolve::{
    next_weekday_on_or_after, resolve_from_reset, resolve_rolling, resolve_week_reset,
    ResolvedInstant, WeekdaySlot,
};
