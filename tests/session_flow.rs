//! End-to-end session scenarios against a scripted generator.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use mealplan::session::{MSG_ERR_MISSING_KEY, MSG_ERR_PLANNING};
use mealplan::{GoogleProvider, Phase, PlannerError, PlannerSession, TextGenerator};

/// Pops one scripted response per generation call.
struct ScriptedGenerator {
    responses: Mutex<VecDeque<Result<String, PlannerError>>>,
}

impl ScriptedGenerator {
    fn new(responses: Vec<Result<String, PlannerError>>) -> Self {
        ScriptedGenerator {
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, _prompt: &str, _schema: &Value) -> Result<String, PlannerError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("generator called more times than scripted")
    }
}

fn recommendation_batch() -> String {
    let dishes: Vec<Value> = (0..12)
        .map(|n| {
            json!({
                "id": format!("dish-{n}"),
                "name": if n % 2 == 0 { "清蒸鲈鱼" } else { "凉拌鸡丝" },
                "description": "清淡低脂",
                "tags": ["高蛋白", "低脂"],
                "calories": "250大卡"
            })
        })
        .collect();
    serde_json::to_string(&dishes).unwrap()
}

fn week_plan() -> String {
    let days: Vec<Value> = ["周一", "周二", "周三", "周四", "周五"]
        .iter()
        .map(|day| {
            json!({
                "day": day,
                "mainDish": "清蒸鲈鱼",
                "sideDish": "拍黄瓜",
                "reason": "高蛋白低脂，适合减脂期"
            })
        })
        .collect();
    serde_json::to_string(&days).unwrap()
}

fn plan_details() -> String {
    json!({
        "shoppingList": [
            { "category": "蔬菜", "items": ["黄瓜", "西兰花"] },
            { "category": "肉类", "items": ["鲈鱼"] }
        ],
        "recipes": [
            {
                "dishName": "清蒸鲈鱼",
                "type": "Main",
                "ingredients": ["鲈鱼一条", "姜丝", "蒸鱼豉油"],
                "steps": ["鱼身划刀铺姜丝", "水开上锅蒸8分钟", "淋豉油和热油"],
                "tips": "蒸之前用厨房纸吸干鱼身水分"
            },
            {
                "dishName": "拍黄瓜",
                "type": "Side",
                "ingredients": ["黄瓜两根", "蒜末", "香醋"],
                "steps": ["黄瓜拍裂切段", "加蒜末香醋拌匀"],
                "tips": "冷藏十分钟更爽口"
            }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn recommendations_fill_the_selection_screen() {
    let generator = ScriptedGenerator::new(vec![Ok(recommendation_batch())]);
    let mut session = PlannerSession::new(generator);

    session.start().await;

    let state = &session.state;
    assert_eq!(state.phase, Phase::Selection);
    assert_eq!(state.recommendations.len(), 12);
    assert!(state.error.is_none());
    assert!(!state.loading);
    // Every dish got a photo resolved locally
    assert!(state
        .recommendations
        .iter()
        .all(|dish| dish.image.starts_with("https://images.unsplash.com/")));
}

#[tokio::test]
async fn full_flow_reaches_the_dashboard() {
    let generator = ScriptedGenerator::new(vec![
        Ok(recommendation_batch()),
        Ok(week_plan()),
        Ok(plan_details()),
    ]);
    let mut session = PlannerSession::new(generator);

    session.start().await;
    session.toggle_dish("dish-0");
    session.toggle_dish("dish-1");
    session.confirm_selection().await;

    let state = &session.state;
    assert_eq!(state.phase, Phase::Dashboard);
    assert_eq!(state.plan.len(), 5);
    assert!(!state.shopping_list.is_empty());
    assert!(!state.recipes.is_empty());
    assert!(state.error.is_none());
    assert!(!state.loading);
}

#[tokio::test]
async fn details_failure_reverts_to_selection_keeping_the_picks() {
    let generator = ScriptedGenerator::new(vec![
        Ok(recommendation_batch()),
        Ok(week_plan()),
        Ok("not valid json".to_string()),
    ]);
    let mut session = PlannerSession::new(generator);

    session.start().await;
    session.toggle_dish("dish-3");
    session.confirm_selection().await;

    let state = &session.state;
    assert_eq!(state.phase, Phase::Selection);
    assert!(state.selected.contains("dish-3"));
    assert_eq!(state.error.as_deref(), Some(MSG_ERR_PLANNING));
    // The schedule was committed before the details stage ran; the
    // details themselves were not.
    assert_eq!(state.plan.len(), 5);
    assert!(state.shopping_list.is_empty());
    assert!(state.recipes.is_empty());
    assert!(!state.loading);
}

#[tokio::test]
async fn plan_failure_reverts_to_selection() {
    let generator = ScriptedGenerator::new(vec![
        Ok(recommendation_batch()),
        Err(PlannerError::MalformedResponse("no text part".to_string())),
    ]);
    let mut session = PlannerSession::new(generator);

    session.start().await;
    session.toggle_dish("dish-0");
    session.confirm_selection().await;

    let state = &session.state;
    assert_eq!(state.phase, Phase::Selection);
    assert_eq!(state.error.as_deref(), Some(MSG_ERR_PLANNING));
    assert!(state.plan.is_empty());
}

#[tokio::test]
async fn empty_credential_is_a_config_error_with_no_network_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", mockito::Matcher::Any)
        .expect(0)
        .create();

    let provider = GoogleProvider::with_base_url(
        String::new(),
        server.url(),
        "gemini-2.5-flash".to_string(),
    );
    let mut session = PlannerSession::new(provider);

    session.start().await;

    let state = &session.state;
    assert_eq!(state.phase, Phase::Welcome);
    assert_eq!(state.error.as_deref(), Some(MSG_ERR_MISSING_KEY));
    mock.assert();
}

#[tokio::test]
async fn refresh_resolves_identical_images_for_identical_names() {
    let generator = ScriptedGenerator::new(vec![
        Ok(recommendation_batch()),
        Ok(recommendation_batch()),
    ]);
    let mut session = PlannerSession::new(generator);

    session.start().await;
    session.toggle_dish("dish-0");
    let first_batch = session.state.recommendations.clone();

    session.refresh().await;
    let second_batch = &session.state.recommendations;

    // Refresh invalidated the old selection
    assert!(session.state.selected.is_empty());
    for (a, b) in first_batch.iter().zip(second_batch.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.image, b.image);
    }
}

#[tokio::test]
async fn recommendation_failure_keeps_the_welcome_screen() {
    let generator = ScriptedGenerator::new(vec![Err(PlannerError::MalformedResponse(
        "no text part".to_string(),
    ))]);
    let mut session = PlannerSession::new(generator);

    session.start().await;

    let state = &session.state;
    assert_eq!(state.phase, Phase::Welcome);
    assert!(state.error.is_some());
    assert!(state.recommendations.is_empty());
}
