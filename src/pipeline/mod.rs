//! The three-stage generation pipeline.
//!
//! Every stage has the same shape: build a prompt plus a structured-output
//! schema, make one generation call, strip any markdown fence, parse the
//! JSON into the local model. One attempt per stage; any failure surfaces
//! as a `PlannerError` and commits nothing.

pub mod prompts;

use log::debug;

use crate::error::PlannerError;
use crate::images::ImageCatalog;
use crate::model::{DailyPlan, Dish, PlanDetails};
use crate::providers::TextGenerator;
use crate::sanitize::clean_json;

/// Stage A: fetch a batch of 12 candidate dishes and resolve a photo for
/// each. A fresh batch carries fresh ids; selections against an older batch
/// are meaningless afterwards.
pub async fn fetch_recommendations(
    generator: &dyn TextGenerator,
    catalog: &ImageCatalog,
) -> Result<Vec<Dish>, PlannerError> {
    let raw = generator
        .generate(prompts::RECOMMENDATION_PROMPT, &prompts::recommendation_schema())
        .await?;
    let text = clean_json(&raw);
    let mut dishes: Vec<Dish> = serde_json::from_str(&text)?;

    for dish in &mut dishes {
        dish.image = catalog.resolve(&dish.name, &dish.tags).to_string();
    }
    debug!("fetched {} recommendations", dishes.len());

    Ok(dishes)
}

/// Stage B: turn the selected dish names into a Monday-to-Friday plan.
///
/// Five entries are requested via prompt and schema; the count is a contract
/// with the service and is not repaired locally. Callers are responsible for
/// never invoking this with an empty selection.
pub async fn generate_week_plan(
    generator: &dyn TextGenerator,
    selected_names: &[String],
) -> Result<Vec<DailyPlan>, PlannerError> {
    let prompt = prompts::week_plan_prompt(selected_names);
    let raw = generator
        .generate(&prompt, &prompts::week_plan_schema())
        .await?;
    let text = clean_json(&raw);
    let plan: Vec<DailyPlan> = serde_json::from_str(&text)?;
    debug!("generated plan for {} days", plan.len());

    Ok(plan)
}

/// Stage C: expand a committed plan into a shopping list and per-dish
/// recipes. Takes the full Stage B output; never runs before it.
pub async fn generate_plan_details(
    generator: &dyn TextGenerator,
    plan: &[DailyPlan],
) -> Result<PlanDetails, PlannerError> {
    let prompt = prompts::details_prompt(plan);
    let raw = generator
        .generate(&prompt, &prompts::details_schema())
        .await?;
    let text = clean_json(&raw);
    let details: PlanDetails = serde_json::from_str(&text)?;
    debug!(
        "generated {} shopping categories, {} recipes",
        details.shopping_list.len(),
        details.recipes.len()
    );

    Ok(details)
}
