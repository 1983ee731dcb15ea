// State management module
// Handles form inputs, assessment results, chart model and chat transcript

pub mod app_state;
pub mod chart;
pub mod chat;

pub use app_state::{
    AppState, EffectivenessTier, FormState, RecommendationCard, RecommendationsView, ResultsView,
};
pub use chart::CostChart;
pub use chat::{ChatEntry, ChatRole, ChatTranscript};
