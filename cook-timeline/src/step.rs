/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core data structures for the cook timeline.
//!
//! Two distinct sets of types model the two sides of the pipeline:
//!
//! ```text
//! meal plan  ──►  Meal + Recipe + Step  ──(build_cook_timeline)──►  TimelineResult
//!                  ↑ input                                            ↑ output
//!                  immutable, borrowed                                ScheduledStep / TimelineGroup
//! ```
//!
//! # Ownership model
//! The scheduler only ever **borrows** the input.  Each recipe's steps are
//! sorted in a local `Vec<&Step>`, so the caller's recipes stay in their
//! original order for any other view that reads them.  Every output value is
//! freshly owned by the returned [`TimelineResult`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Active type ───────────────────────────────────────────────────────────────

/// How much attention a step needs from the cook.
///
/// Only affects the default duration of a step whose duration is unknown; it
/// never changes the scheduling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveType {
    /// Hands-on work (chopping, stirring, seasoning).
    #[default]
    Active,
    /// Unattended cooking (baking, simmering, boiling).
    Passive,
    /// Resting or cooling.
    Rest,
}

impl ActiveType {
    /// Lowercase name, as shown on badges and in YAML.
    pub fn as_str(self) -> &'static str {
        match self {
            ActiveType::Active => "active",
            ActiveType::Passive => "passive",
            ActiveType::Rest => "rest",
        }
    }
}

impl std::fmt::Display for ActiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Temperature ───────────────────────────────────────────────────────────────

/// Temperature scale of a step's target temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "C")]
    Celsius,
}

impl TemperatureUnit {
    /// Degree symbol with the unit letter, e.g. `°F`.
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
        }
    }
}

/// Target temperature for a step.  Value and unit always travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
    pub value: u32,
    pub unit: TemperatureUnit,
}

// ── Inputs ────────────────────────────────────────────────────────────────────

/// One cooking step of a recipe, already structured by whoever extracted it
/// from the instruction text.
///
/// `order` defines the position within the recipe.  Values need not be
/// contiguous and the steps need not arrive sorted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Step {
    /// Identifier, unique within its recipe.
    pub id: String,

    pub order: i32,

    /// Free text; never interpreted here.
    pub instruction: String,

    /// Duration in whole minutes.  `None` means "estimate from `active_type`".
    #[serde(default)]
    pub duration_min: Option<u32>,

    #[serde(default)]
    pub active_type: ActiveType,

    /// Whether the step can be paused.  Informational only.
    #[serde(default)]
    pub can_pause: bool,

    #[serde(default)]
    pub equipment_used: Option<Vec<String>>,

    #[serde(default)]
    pub temperature: Option<Temperature>,
}

/// A recipe and its steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A meal: the thing being served.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub title: String,

    /// When the meal should be on the table.  `None` means "estimate from now".
    #[serde(default)]
    pub serve_at: Option<DateTime<Utc>>,
}

/// Everything [`build_cook_timeline`](crate::timeline::build_cook_timeline)
/// needs for one run.
///
/// `now` is supplied by the caller and is only used when the meal has no
/// serve time.  The library never reads the wall clock.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineInput {
    pub meal: Meal,
    pub recipes: Vec<Recipe>,
    pub now: DateTime<Utc>,
}

// ── Outputs ───────────────────────────────────────────────────────────────────

/// One input [`Step`] placed on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledStep {
    /// `"<recipe_id>:<step_id>"`, unique across the whole timeline.
    pub id: String,
    pub recipe_id: String,
    pub recipe_title: String,
    pub step_id: String,
    pub order: i32,
    pub instruction: String,
    pub active_type: ActiveType,
    pub can_pause: bool,
    pub equipment_used: Option<Vec<String>>,
    pub temperature: Option<Temperature>,

    /// Resolved duration in minutes (defaulted when the input had none).
    pub duration_min: u32,
    /// `true` when `duration_min` came from the default table.
    pub is_estimated_duration: bool,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    /// Minutes from `start_time` to the serve instant, rounded to 5, ≥ 0.
    pub t_minus_min: i64,
    /// Minutes from the earliest step of the whole timeline, rounded to 5, ≥ 0.
    pub start_offset_min: i64,
}

impl ScheduledStep {
    /// Human-readable temperature, e.g. `"Oven: 400°F"` or `"180°C"`.
    ///
    /// The `Oven:` prefix is added when the equipment list mentions an oven.
    /// Returns `None` when the step has no temperature or a zero value.
    pub fn temperature_label(&self) -> Option<String> {
        let temp = self.temperature.filter(|t| t.value > 0)?;
        let value = format!("{}{}", temp.value, temp.unit.symbol());

        let uses_oven = self
            .equipment_used
            .iter()
            .flatten()
            .any(|e| e.eq_ignore_ascii_case("oven"));

        if uses_oven {
            Some(format!("Oven: {value}"))
        } else {
            Some(value)
        }
    }
}

/// Steps from any recipe that share the same rounded start offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineGroup {
    pub start_offset_min: i64,
    /// `"<offset> min"`.
    pub label: String,
    /// Ordered by exact start instant.
    pub steps: Vec<ScheduledStep>,
}

/// Result of one [`build_cook_timeline`](crate::timeline::build_cook_timeline) run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineResult {
    pub serve_at: DateTime<Utc>,
    pub serve_at_is_estimated: bool,
    /// Lead time used to synthesise `serve_at`; `Some` iff it was estimated.
    pub estimated_serve_in_min: Option<u32>,
    /// Every scheduled step, ordered by exact start instant.
    pub steps: Vec<ScheduledStep>,
    /// Ascending by `start_offset_min`.
    pub groups: Vec<TimelineGroup>,
}

impl TimelineResult {
    /// Total number of scheduled steps across all groups.
    pub fn step_count(&self) -> usize {
        self.groups.iter().map(|g| g.steps.len()).sum()
    }

    /// Span from the earliest start to the latest end, rounded to 5 minutes.
    ///
    /// Returns `0` for an empty timeline.
    pub fn total_duration_min(&self) -> i64 {
        let earliest = self.steps.iter().map(|s| s.start_time).min();
        let latest = self.steps.iter().map(|s| s.end_time).max();

        match (earliest, latest) {
            (Some(start), Some(end)) => {
                crate::timeline::rounding::round5_between(start, end).max(0)
            }
            _ => 0,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn scheduled(temperature: Option<Temperature>, equipment: Option<Vec<&str>>) -> ScheduledStep {
        let t = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        ScheduledStep {
            id: "r1:s1".into(),
            recipe_id: "r1".into(),
            recipe_title: "Dish".into(),
            step_id: "s1".into(),
            order: 1,
            instruction: "Bake".into(),
            active_type: ActiveType::Passive,
            can_pause: true,
            equipment_used: equipment.map(|v| v.into_iter().map(String::from).collect()),
            temperature,
            duration_min: 30,
            is_estimated_duration: false,
            start_time: t,
            end_time: t,
            t_minus_min: 0,
            start_offset_min: 0,
        }
    }

    // ── ActiveType ────────────────────────────────────────────────────────────

    #[test]
    fn active_type_deserializes_lowercase_names() {
        let parsed: Vec<ActiveType> = serde_yaml::from_str("[active, passive, rest]").unwrap();
        assert_eq!(
            parsed,
            vec![ActiveType::Active, ActiveType::Passive, ActiveType::Rest]
        );
    }

    #[test]
    fn active_type_defaults_to_active() {
        assert_eq!(ActiveType::default(), ActiveType::Active);
        assert_eq!(ActiveType::Rest.to_string(), "rest");
    }

    #[test]
    fn temperature_unit_uses_single_letter_on_the_wire() {
        let t: Temperature = serde_yaml::from_str("{ value: 400, unit: F }").unwrap();
        assert_eq!(t.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(serde_json::to_string(&TemperatureUnit::Celsius).unwrap(), "\"C\"");
    }

    // ── Step ──────────────────────────────────────────────────────────────────

    #[test]
    fn step_optional_fields_default_when_absent() {
        let step: Step = serde_yaml::from_str("{ id: s1, order: 3, instruction: Stir }").unwrap();
        assert_eq!(step.duration_min, None);
        assert_eq!(step.active_type, ActiveType::Active);
        assert!(!step.can_pause);
        assert!(step.equipment_used.is_none());
        assert!(step.temperature.is_none());
    }

    #[test]
    fn negative_duration_is_rejected_by_the_type() {
        let result: Result<Step, _> =
            serde_yaml::from_str("{ id: s1, order: 1, instruction: x, duration_min: -5 }");
        assert!(result.is_err());
    }

    // ── temperature_label ─────────────────────────────────────────────────────

    #[test]
    fn temperature_label_prefixes_oven() {
        let temp = Temperature {
            value: 400,
            unit: TemperatureUnit::Fahrenheit,
        };
        let step = scheduled(Some(temp), Some(vec!["Oven"]));
        assert_eq!(step.temperature_label().as_deref(), Some("Oven: 400°F"));
    }

    #[test]
    fn temperature_label_without_oven_is_bare_value() {
        let temp = Temperature {
            value: 180,
            unit: TemperatureUnit::Celsius,
        };
        let step = scheduled(Some(temp), Some(vec!["pan"]));
        assert_eq!(step.temperature_label().as_deref(), Some("180°C"));
    }

    #[test]
    fn temperature_label_absent_or_zero_is_none() {
        assert_eq!(scheduled(None, Some(vec!["oven"])).temperature_label(), None);
        let zero = Temperature {
            value: 0,
            unit: TemperatureUnit::Celsius,
        };
        assert_eq!(scheduled(Some(zero), None).temperature_label(), None);
    }
}
