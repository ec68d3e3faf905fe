//! AI-assisted weekly dinner planner.
//!
//! The user picks dishes from a generated recommendation batch; three
//! sequential calls to a hosted generative model then produce a five-day
//! dinner schedule, a consolidated shopping list and beginner-friendly
//! recipes. Everything lives in process memory for one session.
//!
//! # Example
//!
//! ```no_run
//! use mealplan::{GoogleProvider, PlannerConfig, PlannerSession};
//!
//! # async fn run() -> Result<(), mealplan::PlannerError> {
//! let config = PlannerConfig::load()?;
//! let provider = GoogleProvider::new(&config)?;
//! let mut session = PlannerSession::new(provider);
//!
//! session.start().await;
//! for dish in &session.state.recommendations {
//!     println!("{} {}", dish.name, dish.calories);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod images;
pub mod model;
pub mod pipeline;
pub mod providers;
pub mod render;
pub mod sanitize;
pub mod session;
pub mod state;

pub use config::PlannerConfig;
pub use error::PlannerError;
pub use images::{ImageCatalog, ImageRule};
pub use model::{DailyPlan, Dish, DishType, PlanDetails, Recipe, ShoppingCategory};
pub use providers::{GoogleProvider, TextGenerator};
pub use session::PlannerSession;
pub use state::{Action, AppState, Effect, Phase};
