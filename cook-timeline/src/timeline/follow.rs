/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Follow-along cursor over a built timeline.
//!
//! Walks the flat step list (start order) one step at a time and tracks
//! which steps the cook has ticked off.  Movement saturates at both ends.

use std::collections::BTreeSet;

use crate::step::ScheduledStep;

#[derive(Debug, Clone)]
pub struct FollowAlong<'a> {
    steps: &'a [ScheduledStep],
    cursor: usize,
    done: BTreeSet<String>,
}

impl<'a> FollowAlong<'a> {
    pub fn new(steps: &'a [ScheduledStep]) -> Self {
        Self {
            steps,
            cursor: 0,
            done: BTreeSet::new(),
        }
    }

    /// Zero-based index of the current step.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&'a ScheduledStep> {
        self.steps.get(self.cursor)
    }

    /// The step after the current one, if any.
    pub fn next_step(&self) -> Option<&'a ScheduledStep> {
        self.steps.get(self.cursor + 1)
    }

    /// `true` on the last step, and on an empty timeline.
    pub fn is_last(&self) -> bool {
        self.cursor + 1 >= self.steps.len()
    }

    pub fn advance(&mut self) {
        if !self.is_last() {
            self.cursor += 1;
        }
    }

    pub fn back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Mark the current step done, then move to the next one.
    pub fn mark_done_and_advance(&mut self) {
        let Some(step) = self.current() else {
            return;
        };
        self.done.insert(step.id.clone());
        self.advance();
    }

    /// Flip the done state of the step with the given composite id.
    pub fn toggle_done(&mut self, id: &str) {
        if !self.done.remove(id) {
            self.done.insert(id.to_string());
        }
    }

    pub fn is_done(&self, id: &str) -> bool {
        self.done.contains(id)
    }

    pub fn done_count(&self) -> usize {
        self.done.len()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{ActiveType, Meal, Recipe, Step, TimelineInput};
    use crate::timeline::build_cook_timeline;
    use chrono::{TimeZone, Utc};

    fn three_step_timeline() -> crate::step::TimelineResult {
        let serve_at = Utc.with_ymd_and_hms(2025, 1, 1, 1, 0, 0).unwrap();
        let steps = (1..=3)
            .map(|i| Step {
                id: format!("s{i}"),
                order: i,
                duration_min: Some(10),
                active_type: ActiveType::Active,
                ..Default::default()
            })
            .collect();
        build_cook_timeline(&TimelineInput {
            meal: Meal {
                id: "m1".into(),
                title: "Dinner".into(),
                serve_at: Some(serve_at),
            },
            recipes: vec![Recipe {
                id: "r1".into(),
                title: "Dish".into(),
                steps,
            }],
            now: serve_at,
        })
    }

    #[test]
    fn starts_at_first_step() {
        let t = three_step_timeline();
        let f = FollowAlong::new(&t.steps);
        assert_eq!(f.position(), 0);
        assert_eq!(f.current().map(|s| s.id.as_str()), Some("r1:s1"));
        assert_eq!(f.next_step().map(|s| s.id.as_str()), Some("r1:s2"));
        assert!(!f.is_last());
    }

    #[test]
    fn advance_saturates_at_last_step() {
        let t = three_step_timeline();
        let mut f = FollowAlong::new(&t.steps);
        for _ in 0..10 {
            f.advance();
        }
        assert_eq!(f.position(), 2);
        assert!(f.is_last());
        assert!(f.next_step().is_none());
    }

    #[test]
    fn back_saturates_at_zero() {
        let t = three_step_timeline();
        let mut f = FollowAlong::new(&t.steps);
        f.advance();
        f.back();
        f.back();
        assert_eq!(f.position(), 0);
    }

    #[test]
    fn mark_done_and_advance_records_current_step() {
        let t = three_step_timeline();
        let mut f = FollowAlong::new(&t.steps);
        f.mark_done_and_advance();
        assert!(f.is_done("r1:s1"));
        assert_eq!(f.position(), 1);

        // On the last step the cursor stays put but the step is still ticked
        f.advance();
        f.mark_done_and_advance();
        assert!(f.is_done("r1:s3"));
        assert_eq!(f.position(), 2);
        assert_eq!(f.done_count(), 2);
    }

    #[test]
    fn toggle_done_flips_state() {
        let t = three_step_timeline();
        let mut f = FollowAlong::new(&t.steps);
        f.toggle_done("r1:s2");
        assert!(f.is_done("r1:s2"));
        f.toggle_done("r1:s2");
        assert!(!f.is_done("r1:s2"));
    }

    #[test]
    fn empty_timeline_has_no_current_step() {
        let mut f = FollowAlong::new(&[]);
        assert!(f.current().is_none());
        assert!(f.is_last());
        f.mark_done_and_advance();
        f.advance();
        assert_eq!(f.position(), 0);
        assert_eq!(f.done_count(), 0);
    }
}
