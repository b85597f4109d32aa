/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Pure arithmetic helpers: instant differences and 5-minute rounding.
//!
//! These are free functions rather than methods so they can be used and tested
//! independently of the timeline builder.
//!
//! Rounding is done in integer milliseconds, never through `f64`, so a value
//! that sits exactly on a half bucket (2.5 min, 7.5 min, ...) always rounds
//! toward positive infinity.

use chrono::{DateTime, Duration, Utc};

/// Size of one rounding bucket in milliseconds (5 minutes).
const BUCKET_MS: i64 = 5 * 60_000;

/// Signed milliseconds from `earlier` to `later`.
///
/// Negative when `later` is actually before `earlier`.
pub fn millis_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    (later - earlier).num_milliseconds()
}

/// Round a signed millisecond span to the nearest multiple of 5 minutes and
/// return it in minutes.
///
/// Ties round half up: `floor(x / 5 + 0.5) * 5`.
pub fn round5_millis(ms: i64) -> i64 {
    (ms + BUCKET_MS / 2).div_euclid(BUCKET_MS) * 5
}

/// `round5` of the minutes between two instants (may be negative).
pub fn round5_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    round5_millis(millis_between(earlier, later))
}

/// `instant - minutes`, exact.
///
/// Saturates at `DateTime::<Utc>::MIN_UTC` instead of overflowing.
pub fn minus_minutes(instant: DateTime<Utc>, minutes: u32) -> DateTime<Utc> {
    instant
        .checked_sub_signed(Duration::minutes(i64::from(minutes)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// `instant + minutes`, exact.
///
/// Saturates at `DateTime::<Utc>::MAX_UTC` instead of overflowing.
pub fn plus_minutes(instant: DateTime<Utc>, minutes: u32) -> DateTime<Utc> {
    instant
        .checked_add_signed(Duration::minutes(i64::from(minutes)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
