//! Cook timeline builder.
//!
//! [`build_cook_timeline`] turns a meal and its recipes into one unified,
//! backward-scheduled timeline: every recipe's last step ends exactly at the
//! serve instant, and all steps from all recipes are bucketed by their
//! rounded distance from the earliest step.
//!
//! # Pipeline
//!
//! ```text
//! TimelineInput
//!   │  resolve::resolve_serve_at          serve instant (+ estimate flag)
//!   ▼
//! per recipe: schedule_recipe             backward walk, last step first
//!   │  resolve::resolve_duration          per-step duration (+ estimate flag)
//!   ▼
//! flat Vec<ScheduledStep>, sorted by start
//!   │  assign_start_offsets               round5 from the earliest start
//!   ▼
//! group_by_offset                         BTreeMap<offset, steps>
//!   ▼
//! TimelineResult
//! ```
//!
//! # Design decisions
//!
//! | Topic | Choice |
//! |---|---|
//! | State | None – a pure function of its input, safe to call concurrently |
//! | Input | Borrowed; each recipe is sorted in a local `Vec<&Step>` |
//! | Recipe cursors | Independent – recipes never share a cursor |
//! | Rounding | Integer milliseconds, round half toward +∞, clamped ≥ 0 |
//! | Group order | `BTreeMap` keyed by offset – deterministic |
//!
//! `t_minus_min` and `start_offset_min` are two separate rounding passes.
//! The baseline for `start_offset_min` is only known once every recipe has
//! been scheduled, so it cannot be derived from `t_minus_min`.
//!
//! # Example
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use cook_timeline::step::{Meal, Recipe, Step, TimelineInput};
//! use cook_timeline::timeline::build_cook_timeline;
//!
//! let serve_at = Utc.with_ymd_and_hms(2025, 1, 1, 19, 0, 0).unwrap();
//! let input = TimelineInput {
//!     meal: Meal { id: "m1".into(), title: "Dinner".into(), serve_at: Some(serve_at) },
//!     recipes: vec![Recipe {
//!         id: "r1".into(),
//!         title: "Rice".into(),
//!         steps: vec![Step { id: "s1".into(), order: 1, duration_min: Some(20), ..Default::default() }],
//!     }],
//!     now: serve_at,
//! };
//!
//! let timeline = build_cook_timeline(&input);
//! assert_eq!(timeline.steps[0].end_time, serve_at);
//! assert_eq!(timeline.steps[0].t_minus_min, 20);
//! ```

pub mod follow;
pub mod resolve;
pub mod rounding;

pub use follow::FollowAlong;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::step::{Recipe, ScheduledStep, Step, TimelineGroup, TimelineInput, TimelineResult};

use resolve::{resolve_duration, resolve_serve_at};
use rounding::{minus_minutes, round5_between};

// ── Public entry point ────────────────────────────────────────────────────────

/// Build the cook timeline for one meal.
///
/// Total over its input: missing durations and a missing serve time are
/// filled with policy defaults and flagged, never reported as errors.
/// Identical input always produces identical output.
pub fn build_cook_timeline(input: &TimelineInput) -> TimelineResult {
    let serve = resolve_serve_at(input.meal.serve_at, input.now);

    if let Some(lead) = serve.estimated_lead_min {
        warn!(
            meal = %input.meal.id,
            lead_min = lead,
            serve_at = %serve.at,
            "meal has no serve time, estimating from now"
        );
    }

    // ── Backward pass, one recipe at a time ───────────────────────────────────
    let mut steps: Vec<ScheduledStep> = Vec::new();
    for recipe in &input.recipes {
        schedule_recipe(recipe, serve.at, &mut steps);
    }

    // Stable: ties keep the order they were emitted in.
    steps.sort_by_key(|s| s.start_time);

    // ── Offsets and buckets ───────────────────────────────────────────────────
    let baseline = steps.first().map(|s| s.start_time).unwrap_or(serve.at);
    assign_start_offsets(&mut steps, baseline);
    let groups = group_by_offset(&steps);

    info!(
        meal = %input.meal.id,
        recipe_count = input.recipes.len(),
        step_count = steps.len(),
        group_count = groups.len(),
        serve_at = %serve.at,
        serve_at_is_estimated = serve.is_estimated(),
        "cook timeline built"
    );

    TimelineResult {
        serve_at: serve.at,
        serve_at_is_estimated: serve.is_estimated(),
        estimated_serve_in_min: serve.estimated_lead_min,
        steps,
        groups,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Backward scheduler
// ─────────────────────────────────────────────────────────────────────────────

/// Schedule one recipe backward from `serve_at`, appending to `out`.
///
/// Steps are emitted last-first.  Each step ends where the following one
/// starts, and the highest-`order` step ends exactly at `serve_at`.
/// Start instants clamp at the earliest representable instant.
fn schedule_recipe(recipe: &Recipe, serve_at: DateTime<Utc>, out: &mut Vec<ScheduledStep>) {
    if recipe.steps.is_empty() {
        debug!(recipe = %recipe.id, "recipe has no steps, nothing to schedule");
        return;
    }

    let mut sorted: Vec<&Step> = recipe.steps.iter().collect();
    sorted.sort_by_key(|s| s.order);

    let mut cursor = serve_at;

    for step in sorted.into_iter().rev() {
        let (duration_min, is_estimated_duration) = resolve_duration(step);
        let end_time = cursor;
        let start_time = minus_minutes(end_time, duration_min);
        let t_minus_min = round5_between(start_time, serve_at).max(0);

        if is_estimated_duration {
            debug!(
                recipe = %recipe.id,
                step = %step.id,
                active_type = %step.active_type,
                duration_min,
                "step has no duration, using default"
            );
        }

        debug!(
            recipe = %recipe.id,
            step = %step.id,
            order = step.order,
            start = %start_time,
            end = %end_time,
            t_minus_min,
            "step scheduled"
        );

        out.push(ScheduledStep {
            id: format!("{}:{}", recipe.id, step.id),
            recipe_id: recipe.id.clone(),
            recipe_title: recipe.title.clone(),
            step_id: step.id.clone(),
            order: step.order,
            instruction: step.instruction.clone(),
            active_type: step.active_type,
            can_pause: step.can_pause,
            equipment_used: step.equipment_used.clone(),
            temperature: step.temperature,
            duration_min,
            is_estimated_duration,
            start_time,
            end_time,
            t_minus_min,
            start_offset_min: 0,
        });

        cursor = start_time;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Offsets and grouping
// ─────────────────────────────────────────────────────────────────────────────

/// Set `start_offset_min` on every step relative to `baseline`.
fn assign_start_offsets(steps: &mut [ScheduledStep], baseline: DateTime<Utc>) {
    for step in steps.iter_mut() {
        step.start_offset_min = round5_between(baseline, step.start_time).max(0);
    }
}

/// Bucket steps by `start_offset_min`.
///
/// `steps` must already be sorted by start instant; each bucket keeps that
/// order.  Buckets come out ascending by offset.
fn group_by_offset(steps: &[ScheduledStep]) -> Vec<TimelineGroup> {
    let mut buckets: BTreeMap<i64, Vec<ScheduledStep>> = BTreeMap::new();
    for step in steps {
        buckets
            .entry(step.start_offset_min)
            .or_default()
            .push(step.clone());
    }

    buckets
        .into_iter()
        .map(|(start_offset_min, steps)| TimelineGroup {
            start_offset_min,
            label: format!("{start_offset_min} min"),
            steps,
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
