//! Meal plan loading.
//!
//! A meal plan file describes one meal and the recipes cooked for it, with
//! each recipe's instructions already split into structured steps:
//!
//! ```yaml
//! meal:
//!   id: m1
//!   title: "Dinner"
//!   serve_at: "2025-01-01T19:00:00Z"   # optional, RFC 3339
//! recipes:
//!   - id: r1
//!     title: "Roast chicken"
//!     steps:
//!       - id: s1
//!         order: 1
//!         instruction: "Preheat the oven to 425F"
//!         duration_min: 15
//!         active_type: passive
//!         equipment_used: [oven]
//!         temperature: { value: 425, unit: F }
//! ```
//!
//! Every step field except `id`, `order` and `instruction` is optional.

pub mod error;

pub use error::PlanError;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::step::{ActiveType, Meal, Recipe, Step, TimelineInput};

/// Instruction used for the step substituted into a recipe with no steps.
pub const PLACEHOLDER_INSTRUCTION: &str = "Cook and serve.";

/// Joins recipe and step ids into a timeline-wide step id.
const ID_SEPARATOR: char = ':';

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
#[derive(Debug, Deserialize)]
struct MealPlanFile {
    meal: Meal,
    #[serde(default)]
    recipes: Vec<Recipe>,
}

// ── Public data structures ────────────────────────────────────────────────────

/// A validated meal with its recipes, ready to be scheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlan {
    pub meal: Meal,
    pub recipes: Vec<Recipe>,
}

impl MealPlan {
    /// Pair the plan with the caller's clock reading.
    pub fn into_input(self, now: DateTime<Utc>) -> TimelineInput {
        TimelineInput {
            meal: self.meal,
            recipes: self.recipes,
            now,
        }
    }

    /// Check id uniqueness and substitute placeholder steps.
    ///
    /// Recipes with no steps get a single placeholder step so every recipe
    /// still shows up on the timeline.
    fn validate(mut self) -> Result<Self, PlanError> {
        if self.meal.id.is_empty() {
            return Err(PlanError::EmptyMealId);
        }

        let mut recipe_ids = HashSet::new();
        for recipe in &mut self.recipes {
            if recipe.id.is_empty() {
                return Err(PlanError::EmptyRecipeId {
                    title: recipe.title.clone(),
                });
            }
            if recipe.id.contains(ID_SEPARATOR) {
                return Err(PlanError::SeparatorInId {
                    id: recipe.id.clone(),
                });
            }
            if !recipe_ids.insert(recipe.id.clone()) {
                return Err(PlanError::DuplicateRecipeId {
                    recipe: recipe.id.clone(),
                });
            }

            let mut step_ids = HashSet::new();
            for step in &recipe.steps {
                if step.id.is_empty() {
                    return Err(PlanError::EmptyStepId {
                        recipe: recipe.id.clone(),
                        order: step.order,
                    });
                }
                if step.id.contains(ID_SEPARATOR) {
                    return Err(PlanError::SeparatorInId {
                        id: step.id.clone(),
                    });
                }
                if !step_ids.insert(step.id.clone()) {
                    return Err(PlanError::DuplicateStepId {
                        recipe: recipe.id.clone(),
                        step: step.id.clone(),
                    });
                }
            }

            if recipe.steps.is_empty() {
                warn!(recipe = %recipe.id, "recipe has no steps, adding placeholder step");
                recipe.steps.push(placeholder_step(&recipe.id));
            }
        }

        Ok(self)
    }
}

/// The single step given to a recipe that has none.
pub fn placeholder_step(recipe_id: &str) -> Step {
    Step {
        id: format!("{recipe_id}-step-1"),
        order: 1,
        instruction: PLACEHOLDER_INSTRUCTION.to_string(),
        duration_min: None,
        active_type: ActiveType::Active,
        can_pause: false,
        equipment_used: None,
        temperature: None,
    }
}

// ── MealPlanLoader ────────────────────────────────────────────────────────────

/// Loads and validates a meal plan from YAML.
#[derive(Debug, Default)]
pub struct MealPlanLoader {
    plan: Option<MealPlan>,
}

impl MealPlanLoader {
    /// Creates a new, empty `MealPlanLoader`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and parses `path`.
    ///
    /// Calling this method a second time replaces the previously loaded plan.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, the YAML is invalid,
    /// or the plan fails validation ([`PlanError`]).
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        info!("Loading meal plan from: {}", path.display());
        self.plan = None;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open meal plan file: {}", path.display()))?;

        self.load_from_str(&content)
            .with_context(|| format!("Invalid meal plan file: {}", path.display()))
    }

    /// Parses a YAML document directly.
    pub fn load_from_str(&mut self, yaml: &str) -> Result<()> {
        self.plan = None;

        let file: MealPlanFile =
            serde_yaml::from_str(yaml).context("Failed to parse meal plan YAML")?;

        let plan = MealPlan {
            meal: file.meal,
            recipes: file.recipes,
        }
        .validate()?;

        for recipe in &plan.recipes {
            debug!(
                "  Recipe: {} | {} | steps: {}",
                recipe.id,
                recipe.title,
                recipe.steps.len()
            );
        }

        info!(
            meal = %plan.meal.id,
            recipe_count = plan.recipes.len(),
            serve_at = ?plan.meal.serve_at,
            "meal plan loaded"
        );

        self.plan = Some(plan);
        Ok(())
    }

    /// The loaded plan, or `None` before a successful load.
    pub fn plan(&self) -> Option<&MealPlan> {
        self.plan.as_ref()
    }

    /// Moves the loaded plan out, leaving the loader empty.
    pub fn take_plan(&mut self) -> Option<MealPlan> {
        self.plan.take()
    }

    /// Returns `true` after a successful load.
    pub fn is_loaded(&self) -> bool {
        self.plan.is_some()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
