/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured validation errors for meal plan files.
//!
//! Parsing failures (I/O, YAML syntax, negative durations) are reported as
//! `anyhow` errors with file context.  Once the YAML is well-formed, the
//! checks below guarantee the timeline's composite `"<recipe>:<step>"` ids
//! are unique: recipe ids are unique plan-wide, step ids are unique within
//! their recipe, and neither may contain the `:` separator.

use thiserror::Error;

/// Why a well-formed meal plan was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The meal has an empty `id`.
    #[error("meal has an empty id")]
    EmptyMealId,

    /// A recipe has an empty `id`.
    #[error("recipe '{title}' has an empty id")]
    EmptyRecipeId { title: String },

    /// Two recipes share the same `id`.
    #[error("recipe id '{recipe}' appears more than once")]
    DuplicateRecipeId { recipe: String },

    /// A step has an empty `id`.
    #[error("recipe '{recipe}' has a step with an empty id (order {order})")]
    EmptyStepId { recipe: String, order: i32 },

    /// A recipe or step id contains the `:` separator used in composite ids.
    #[error("id '{id}' must not contain ':'")]
    SeparatorInId { id: String },

    /// Two steps of one recipe share the same `id`.
    #[error("recipe '{recipe}' has step id '{step}' more than once")]
    DuplicateStepId { recipe: String, step: String },
}
