/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Cook timeline – backward scheduling for a multi-recipe meal.
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── step         – input (Meal, Recipe, Step) and output (ScheduledStep, TimelineGroup, TimelineResult) types
//! ├── timeline/    – build_cook_timeline: resolver, backward pass, rounding, grouping, follow-along cursor
//! ├── config/      – YAML meal plan loading and validation
//! └── render       – plain-text grouped / follow-along views
//! ```

pub mod config;
pub mod render;
pub mod step;
pub mod timeline;
