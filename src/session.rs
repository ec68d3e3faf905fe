//! Async driver tying the state machine to the generation pipeline.
//!
//! The session owns the state, a generator and the photo catalog, and runs
//! the effects `AppState::dispatch` emits. Stages run strictly one at a
//! time; the details stage only starts after the plan has been committed.

use log::error;

use crate::error::PlannerError;
use crate::images::ImageCatalog;
use crate::pipeline;
use crate::providers::TextGenerator;
use crate::state::{Action, AppState, Effect};

/// User-facing messages, fixed zh-CN locale.
pub const MSG_LOADING_RECOMMENDATIONS: &str = "正在为您挑选适合减脂的家常菜...";
pub const MSG_LOADING_PLAN: &str = "正在根据您的选择规划下周食谱...";
pub const MSG_LOADING_DETAILS: &str = "正在生成购物清单和制作步骤...";
pub const MSG_ERR_MISSING_KEY: &str = "未检测到 API Key。请配置 MEALPLAN__API_KEY 或 GEMINI_API_KEY 环境变量。";
pub const MSG_ERR_RECOMMENDATIONS: &str = "获取推荐失败，请检查网络或 API 配置。";
pub const MSG_ERR_PLANNING: &str = "生成计划失败，请重试。";

pub struct PlannerSession<G> {
    generator: G,
    catalog: ImageCatalog,
    pub state: AppState,
}

impl<G: TextGenerator> PlannerSession<G> {
    pub fn new(generator: G) -> Self {
        Self::with_catalog(generator, ImageCatalog::default())
    }

    pub fn with_catalog(generator: G, catalog: ImageCatalog) -> Self {
        PlannerSession {
            generator,
            catalog,
            state: AppState::default(),
        }
    }

    /// Fetch the first recommendation batch (welcome screen action).
    pub async fn start(&mut self) {
        self.run(Action::Start).await;
    }

    /// Swap the batch for a fresh one, dropping the current selection.
    pub async fn refresh(&mut self) {
        self.run(Action::Refresh).await;
    }

    pub fn toggle_dish(&mut self, id: &str) {
        self.state.dispatch(Action::ToggleDish(id.to_string()));
    }

    /// Generate the week plan, shopping list and recipes for the selection.
    pub async fn confirm_selection(&mut self) {
        self.run(Action::ConfirmSelection).await;
    }

    /// Leave the dashboard and pick again from the same batch.
    pub fn restart(&mut self) {
        self.state.dispatch(Action::Restart);
    }

    async fn run(&mut self, action: Action) {
        let Some(effect) = self.state.dispatch(action) else {
            return;
        };

        match effect {
            Effect::FetchRecommendations => self.fetch_recommendations().await,
            Effect::GeneratePlan(names) => self.generate_plan(&names).await,
        }
    }

    async fn fetch_recommendations(&mut self) {
        self.state.begin_loading(MSG_LOADING_RECOMMENDATIONS);

        match pipeline::fetch_recommendations(&self.generator, &self.catalog).await {
            Ok(dishes) => self.state.commit_recommendations(dishes),
            Err(err) => {
                error!("recommendation stage failed: {err}");
                self.state.fail_recommendations(recommendation_message(&err));
            }
        }
    }

    async fn generate_plan(&mut self, selected_names: &[String]) {
        self.state.begin_loading(MSG_LOADING_PLAN);

        let plan = match pipeline::generate_week_plan(&self.generator, selected_names).await {
            Ok(plan) => plan,
            Err(err) => {
                error!("plan stage failed: {err}");
                self.state.fail_planning(MSG_ERR_PLANNING);
                return;
            }
        };
        // The plan is committed before the details stage runs; a details
        // failure keeps it but blocks the dashboard.
        self.state.commit_plan(plan);

        self.state.begin_loading(MSG_LOADING_DETAILS);
        match pipeline::generate_plan_details(&self.generator, &self.state.plan).await {
            Ok(details) => self.state.commit_details(details),
            Err(err) => {
                error!("details stage failed: {err}");
                self.state.fail_planning(MSG_ERR_PLANNING);
            }
        }
    }
}

fn recommendation_message(err: &PlannerError) -> &'static str {
    match err {
        PlannerError::MissingApiKey => MSG_ERR_MISSING_KEY,
        _ => MSG_ERR_RECOMMENDATIONS,
    }
}
