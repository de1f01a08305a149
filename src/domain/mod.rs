//! Pricing and explanation logic lives here, free of UI concerns.

pub mod app_state;
pub mod contribution;
pub mod explanation;
pub mod features;
pub mod location;

pub use app_state::{AppState, ExplanationState};
pub use contribution::{Contribution, ContributionBreakdown};
pub use explanation::build_prompt;
pub use features::{Feature, FeatureId};
