/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Plain-text views of a [`TimelineResult`].
//!
//! * [`render_groups`] – one block per time bucket.
//! * [`render_follow_along`] – the flat list walked with [`FollowAlong`],
//!   each step followed by a "next" hint.

use std::fmt::Write;

use chrono::SecondsFormat;

use crate::step::{ScheduledStep, TimelineResult};
use crate::timeline::FollowAlong;

/// Header lines shared by both views.
fn render_header(timeline: &TimelineResult, out: &mut String) {
    let serve = timeline.serve_at.to_rfc3339_opts(SecondsFormat::Secs, true);
    match timeline.estimated_serve_in_min {
        Some(lead) => {
            let _ = writeln!(out, "Serve at: {serve} (estimated, {lead} min from now)");
            let _ = writeln!(
                out,
                "Total cooking time: ~{} minutes.",
                timeline.total_duration_min()
            );
        }
        None => {
            let _ = writeln!(out, "Serve at: {serve}");
        }
    }
    let _ = writeln!(out, "One plan, across {} steps.", timeline.step_count());
}

/// `[passive] Dish A: Bake · 30 min · T-30 · Oven: 400°F`
fn render_step_line(step: &ScheduledStep) -> String {
    let mut line = format!(
        "[{}] {}: {} · {} min",
        step.active_type, step.recipe_title, step.instruction, step.duration_min
    );
    if step.is_estimated_duration {
        line.push_str(" (estimated)");
    }
    let _ = write!(line, " · T-{}", step.t_minus_min);
    if let Some(temp) = step.temperature_label() {
        let _ = write!(line, " · {temp}");
    }
    line
}

pub fn render_groups(timeline: &TimelineResult) -> String {
    let mut out = String::new();
    render_header(timeline, &mut out);

    for group in &timeline.groups {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", group.label);
        for step in &group.steps {
            let _ = writeln!(out, "  {}", render_step_line(step));
        }
    }
    out
}

pub fn render_follow_along(timeline: &TimelineResult) -> String {
    let mut out = String::new();
    render_header(timeline, &mut out);

    let mut follow = FollowAlong::new(&timeline.steps);
    let total = timeline.steps.len();
    if total == 0 {
        let _ = writeln!(out, "No steps yet.");
        return out;
    }

    loop {
        let Some(step) = follow.current() else {
            break;
        };
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Step {}/{} · {} min from start",
            follow.position() + 1,
            total,
            step.start_offset_min
        );
        let _ = writeln!(out, "  {}", render_step_line(step));
        match follow.next_step() {
            Some(next) => {
                let _ = writeln!(
                    out,
                    "  Next: {}: {} ({} min · {} min)",
                    next.recipe_title, next.instruction, next.start_offset_min, next.duration_min
                );
            }
            None => {
                let _ = writeln!(out, "  Last step");
            }
        }

        if follow.is_last() {
            break;
        }
        follow.mark_done_and_advance();
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
