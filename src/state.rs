//! Application state machine.
//!
//! A single owned record holds everything the session knows; transitions are
//! explicit functions so the whole flow is unit-testable without a renderer
//! or a network. `dispatch` maps a user action onto the next state plus an
//! optional side effect (which generation call to issue); the commit/fail
//! appliers fold pipeline results back in. No field is ever partially
//! updated, each stage replaces its data wholesale.

use std::collections::HashSet;

use crate::model::{DailyPlan, Dish, PlanDetails, Recipe, ShoppingCategory};

/// The four interactive phases. Loading is orthogonal (a flag plus a
/// message on `AppState`), not a fifth phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Welcome,
    Selection,
    Planning,
    Dashboard,
}

/// User actions, one per UI entry point.
#[derive(Debug, Clone)]
pub enum Action {
    /// Fetch the first recommendation batch
    Start,
    /// Fetch a fresh batch, invalidating the current selection
    Refresh,
    /// Toggle one dish in or out of the selection
    ToggleDish(String),
    /// Generate the week plan from the current selection
    ConfirmSelection,
    /// Back from the dashboard to selection, keeping the batch
    Restart,
}

/// Side effects a transition asks the session to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchRecommendations,
    GeneratePlan(Vec<String>),
}

#[derive(Debug)]
pub struct AppState {
    pub phase: Phase,
    pub recommendations: Vec<Dish>,
    /// Dish ids marked by the user; only meaningful against the current
    /// recommendation batch.
    pub selected: HashSet<String>,
    pub plan: Vec<DailyPlan>,
    pub shopping_list: Vec<ShoppingCategory>,
    pub recipes: Vec<Recipe>,
    pub loading: bool,
    pub loading_message: String,
    pub error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            phase: Phase::Welcome,
            recommendations: Vec::new(),
            selected: HashSet::new(),
            plan: Vec::new(),
            shopping_list: Vec::new(),
            recipes: Vec::new(),
            loading: false,
            loading_message: String::new(),
            error: None,
        }
    }
}

impl AppState {
    /// Apply a user action. Returns the effect the session must run, if any.
    ///
    /// While a stage is in flight every action is ignored; only one
    /// generation call may be outstanding at a time.
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        if self.loading {
            return None;
        }

        match (self.phase, action) {
            (Phase::Welcome, Action::Start) => Some(Effect::FetchRecommendations),
            (Phase::Selection, Action::Refresh) => {
                // New batch means new ids; stale selections are meaningless
                self.selected.clear();
                Some(Effect::FetchRecommendations)
            }
            (Phase::Selection, Action::ToggleDish(id)) => {
                if !self.selected.remove(&id) {
                    self.selected.insert(id);
                }
                None
            }
            (Phase::Selection, Action::ConfirmSelection) => {
                if self.selected.is_empty() {
                    return None;
                }
                // Optimistic transition; reverted if either stage fails
                self.phase = Phase::Planning;
                Some(Effect::GeneratePlan(self.selected_names()))
            }
            (Phase::Dashboard, Action::Restart) => {
                self.phase = Phase::Selection;
                self.plan.clear();
                self.shopping_list.clear();
                self.recipes.clear();
                None
            }
            _ => None,
        }
    }

    /// Names of the selected dishes, in recommendation-batch order.
    pub fn selected_names(&self) -> Vec<String> {
        self.recommendations
            .iter()
            .filter(|dish| self.selected.contains(&dish.id))
            .map(|dish| dish.name.clone())
            .collect()
    }

    pub fn begin_loading(&mut self, message: &str) {
        self.loading = true;
        self.loading_message = message.to_string();
        self.error = None;
    }

    fn finish_loading(&mut self) {
        self.loading = false;
        self.loading_message.clear();
    }

    /// Stage A success: replace the batch, drop stale selections.
    pub fn commit_recommendations(&mut self, dishes: Vec<Dish>) {
        self.recommendations = dishes;
        self.selected.clear();
        self.phase = Phase::Selection;
        self.error = None;
        self.finish_loading();
    }

    /// Stage A failure: stay in the current phase, surface the message.
    pub fn fail_recommendations(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.finish_loading();
    }

    /// Stage B success: the plan is committed even though the dashboard is
    /// not reachable until Stage C also succeeds.
    pub fn commit_plan(&mut self, plan: Vec<DailyPlan>) {
        self.plan = plan;
    }

    /// Stage C success: both stages done, show the dashboard.
    pub fn commit_details(&mut self, details: PlanDetails) {
        self.shopping_list = details.shopping_list;
        self.recipes = details.recipes;
        self.phase = Phase::Dashboard;
        self.error = None;
        self.finish_loading();
    }

    /// Stage B or C failure: back to selection with the selection intact so
    /// the user can retry without re-picking.
    pub fn fail_planning(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.phase = Phase::Selection;
        self.finish_loading();
    }
}
