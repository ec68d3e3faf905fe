//! Terminal rendering. Pure view plumbing: every function formats a slice
//! of state into a `String` and holds no state of its own.

use crate::model::{DailyPlan, DishType, Recipe, ShoppingCategory};
use crate::state::AppState;

pub fn render_welcome() -> String {
    "周度减脂晚餐规划\n\
     不知道下周吃什么？专为厨艺小白设计，简单食材，健康低脂。\n\
     选择您心仪的菜品，剩下的交给我们。\n\
     \n\
     按回车开始选菜，输入 q 退出。"
        .to_string()
}

pub fn render_selection(state: &AppState) -> String {
    let mut out = String::from("第一步：选择你想吃的（至少选择 1 道菜）\n\n");
    for (index, dish) in state.recommendations.iter().enumerate() {
        let mark = if state.selected.contains(&dish.id) {
            "[x]"
        } else {
            "[ ]"
        };
        out.push_str(&format!(
            "{mark} {:>2}. {} · {} · {}\n      {}\n      图片：{}\n",
            index + 1,
            dish.name,
            dish.tags.join("/"),
            dish.calories,
            dish.description,
            dish.image,
        ));
    }
    out.push_str("\n输入编号切换选择，r 换一批，go 生成计划，q 退出。");
    out
}

pub fn render_plan(plan: &[DailyPlan]) -> String {
    let mut out = String::from("本周晚餐安排\n");
    for day in plan {
        out.push_str(&format!(
            "{}  主菜：{}  配菜：{}\n    {}\n",
            day.day, day.main_dish, day.side_dish, day.reason
        ));
    }
    out
}

pub fn render_shopping_list(list: &[ShoppingCategory]) -> String {
    let mut out = String::from("购物清单\n");
    for category in list {
        out.push_str(&format!("[{}] {}\n", category.category, category.items.join("、")));
    }
    out
}

pub fn render_recipes(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "暂无食谱，请尝试重新生成。\n".to_string();
    }
    let mut out = String::from("制作步骤\n");
    for recipe in recipes {
        let role = match recipe.dish_type {
            DishType::Main => "主菜",
            DishType::Side => "配菜",
        };
        out.push_str(&format!("\n{}（{}）\n", recipe.dish_name, role));
        out.push_str(&format!("  用料：{}\n", recipe.ingredients.join("、")));
        for (index, step) in recipe.steps.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", index + 1, step));
        }
        if !recipe.tips.is_empty() {
            out.push_str(&format!("  小贴士：{}\n", recipe.tips));
        }
    }
    out
}
