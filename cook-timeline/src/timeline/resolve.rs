/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Duration and serve-time resolution.
//!
//! Fills the two holes an input may have with fixed policy defaults:
//!
//! | Missing | Resolved to | Flag |
//! |---|---|---|
//! | `Meal::serve_at` | `now + 90 min` | `is_estimated`, lead time surfaced |
//! | `Step::duration_min` (active) | 2 min | `is_estimated` |
//! | `Step::duration_min` (passive / rest) | 5 min | `is_estimated` |
//!
//! Nothing here can fail and nothing reads the clock.

use chrono::{DateTime, Utc};

use super::rounding::plus_minutes;
use crate::step::{ActiveType, Step};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Lead time used when the meal has no serve time.
pub const DEFAULT_SERVE_LEAD_MIN: u32 = 90;

/// Default duration for a step whose duration is unknown.
pub fn default_duration_min(active_type: ActiveType) -> u32 {
    match active_type {
        ActiveType::Active => 2,
        ActiveType::Passive => 5,
        ActiveType::Rest => 5,
    }
}

// ── Serve time ────────────────────────────────────────────────────────────────

/// Resolved serve instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedServeAt {
    pub at: DateTime<Utc>,
    /// `Some(lead)` when `at` was synthesised as `now + lead`.
    pub estimated_lead_min: Option<u32>,
}

impl ResolvedServeAt {
    pub fn is_estimated(&self) -> bool {
        self.estimated_lead_min.is_some()
    }
}

pub fn resolve_serve_at(serve_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> ResolvedServeAt {
    match serve_at {
        Some(at) => ResolvedServeAt {
            at,
            estimated_lead_min: None,
        },
        None => ResolvedServeAt {
            at: plus_minutes(now, DEFAULT_SERVE_LEAD_MIN),
            estimated_lead_min: Some(DEFAULT_SERVE_LEAD_MIN),
        },
    }
}

// ── Step duration ─────────────────────────────────────────────────────────────

/// Resolved step duration: `(minutes, is_estimated)`.
pub fn resolve_duration(step: &Step) -> (u32, bool) {
    match step.duration_min {
        Some(min) => (min, false),
        None => (default_duration_min(step.active_type), true),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
