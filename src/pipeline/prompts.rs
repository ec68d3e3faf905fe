//! Prompt and response-schema pairs for the three generation stages.
//!
//! Each schema is the Gemini structured-output description of the exact
//! fields the stage parser expects. The schema is a request, not a
//! guarantee; parsing stays defensive either way.

use serde_json::{json, Value};

use crate::model::DailyPlan;

/// Stage A prompt; static, so it lives in a text file.
pub const RECOMMENDATION_PROMPT: &str = include_str!("recommend_prompt.txt");

pub fn recommendation_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "name": { "type": "STRING" },
                "description": { "type": "STRING" },
                "tags": { "type": "ARRAY", "items": { "type": "STRING" } },
                "calories": { "type": "STRING" }
            },
            "required": ["id", "name", "description", "tags", "calories"]
        }
    })
}

/// Stage B prompt: spread the selected dishes over a Monday-to-Friday week,
/// repeating or varying them when fewer than five were picked.
pub fn week_plan_prompt(selected_names: &[String]) -> String {
    format!(
        "User selected these dishes: {}.\n\
         Create a 5-day dinner plan (Monday to Friday) suitable for weight loss.\n\
         Distribute the selected dishes across the week.\n\
         If there are fewer than 5 selected, repeat the best ones or suggest a very similar simple variation to fill the gap.\n\
         \n\
         Return a JSON array of 5 objects (one for each day).\n\
         Each object:\n\
         - day: string (e.g., \"周一\")\n\
         - mainDish: string (name from selection or variation)\n\
         - sideDish: string (a simple side dish to pair with, e.g., \"清炒西兰花\", \"拍黄瓜\")\n\
         - reason: string (why this combo is good)",
        selected_names.join(", ")
    )
}

pub fn week_plan_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "day": { "type": "STRING" },
                "mainDish": { "type": "STRING" },
                "sideDish": { "type": "STRING" },
                "reason": { "type": "STRING" }
            },
            "required": ["day", "mainDish", "sideDish", "reason"]
        }
    })
}

/// Stage C prompt over the flattened plan: one consolidated shopping list
/// plus a recipe for every unique main and side dish.
pub fn details_prompt(plan: &[DailyPlan]) -> String {
    let all_dishes = plan
        .iter()
        .map(|d| format!("{} (Main) + {} (Side)", d.main_dish, d.side_dish))
        .collect::<Vec<_>>()
        .join("; ");

    format!(
        "Based on this weekly plan: {all_dishes}.\n\
         \n\
         Task 1: Generate a consolidated shopping list.\n\
         Task 2: Provide simple, beginner-friendly recipes for EVERY unique MAIN dish and SIDE dish mentioned in the plan.\n\
         Keep steps concise and clear.\n\
         \n\
         Return JSON object:\n\
         {{\n\
           \"shoppingList\": [\n\
             {{ \"category\": \"category name (e.g. 蔬菜, 肉类, 调味品)\", \"items\": [\"item 1\", \"item 2\"] }}\n\
           ],\n\
           \"recipes\": [\n\
             {{\n\
               \"dishName\": \"name\",\n\
               \"type\": \"Main\" or \"Side\",\n\
               \"ingredients\": [\"ing 1\", \"ing 2\"],\n\
               \"steps\": [\"step 1\", \"step 2\"],\n\
               \"tips\": \"useful tip for beginners\"\n\
             }}\n\
           ]\n\
         }}"
    )
}

pub fn details_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "shoppingList": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "category": { "type": "STRING" },
                        "items": { "type": "ARRAY", "items": { "type": "STRING" } }
                    }
                }
            },
            "recipes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "dishName": { "type": "STRING" },
                        "type": { "type": "STRING" },
                        "ingredients": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "steps": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "tips": { "type": "STRING" }
                    }
                }
            }
        }
    })
}
