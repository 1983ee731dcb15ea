//! View controller
//!
//! Each user action is split into a synchronous `prepare_*` step, which
//! validates input and updates the page state immediately, and an async
//! `complete_*` step, which awaits the backend and applies the response.
//! The state lock is never held across an `.await`.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, error, info, warn};

use crate::api::{BreachApi, CalculateRequest, ChatRequest, RecommendationRequest};
use crate::error::ClientError;
use crate::state::app_state::{RECOMMENDATION_ALERT, VALIDATION_ALERT};
use crate::state::AppState;

/// Drives the page state in response to user actions
#[derive(Clone)]
pub struct Controller {
    state: Arc<Mutex<AppState>>,
    api: Arc<dyn BreachApi>,
}

impl Controller {
    /// Create a controller with fresh page state
    pub fn new(api: Arc<dyn BreachApi>) -> Self {
        Self::with_state(api, AppState::new())
    }

    /// Create a controller around an existing state
    pub fn with_state(api: Arc<dyn BreachApi>, state: AppState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            api,
        }
    }

    /// Lock the page state
    ///
    /// A panic while the lock was held leaves the state usable, so poisoning
    /// is ignored.
    pub fn lock(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of the page state
    pub fn snapshot(&self) -> AppState {
        self.lock().clone()
    }

    // =========================================================================
    // CALCULATION
    // =========================================================================

    /// Validate the form and enter the loading state
    ///
    /// Returns `None` (after raising the validation alert) when a required
    /// field is blank.
    pub fn prepare_calculation(&self) -> Option<CalculateRequest> {
        let mut state = self.lock();
        match state.form.calculate_request() {
            Ok(request) => {
                state.begin_calculation();
                Some(request)
            }
            Err(e) => {
                warn!(error = %e, "Calculation form incomplete");
                state.raise_alert(VALIDATION_ALERT);
                None
            }
        }
    }

    /// Send the calculation request and render the outcome
    pub async fn complete_calculation(&self, request: CalculateRequest) {
        info!(
            company_size = %request.company_size,
            annual_revenue = %request.annual_revenue,
            industry = %request.industry,
            "Requesting breach calculation"
        );

        match self.api.calculate(&request).await {
            Ok(result) => {
                info!(
                    severity = %result.breach_scenario.severity,
                    total_cost = %result.financial_impact.total_cost,
                    "Breach calculation received"
                );
                self.lock().apply_assessment(&request.industry, result);
            }
            Err(e) => {
                error!(error = %e, "Breach calculation failed");
                self.lock().fail_calculation();
            }
        }
    }

    /// Handle a form submission end to end
    pub async fn calculate(&self) {
        if let Some(request) = self.prepare_calculation() {
            self.complete_calculation(request).await;
        }
    }

    // =========================================================================
    // RECOMMENDATIONS
    // =========================================================================

    /// Build the recommendation request, or `None` when nothing has been
    /// calculated yet
    pub fn prepare_recommendations(&self) -> Option<RecommendationRequest> {
        let state = self.lock();
        match &state.assessment {
            Some(assessment) => Some(
                state
                    .form
                    .recommendation_request(assessment.financial_impact.total_cost_raw),
            ),
            None => {
                debug!("Recommendations requested before any calculation, ignoring");
                None
            }
        }
    }

    /// Send the recommendation request and render the outcome
    pub async fn complete_recommendations(&self, request: RecommendationRequest) {
        info!(
            industry = %request.industry,
            total_cost = request.total_cost,
            "Requesting security recommendations"
        );

        match self.api.get_recommendation(&request).await {
            Ok(response) => {
                info!(
                    count = response.recommendations.len(),
                    "Recommendations received"
                );
                self.lock().apply_recommendations(&response);
            }
            Err(e) => {
                error!(error = %e, "Recommendation request failed");
                self.lock().raise_alert(RECOMMENDATION_ALERT);
            }
        }
    }

    /// Handle the "get recommendations" action end to end
    pub async fn fetch_recommendations(&self) {
        if let Some(request) = self.prepare_recommendations() {
            self.complete_recommendations(request).await;
        }
    }

    // =========================================================================
    // CHAT
    // =========================================================================

    /// Append the user's message and mark a reply as pending
    ///
    /// Blank messages are ignored.
    pub fn prepare_chat(&self, message: &str) -> Option<ChatRequest> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        let mut state = self.lock();
        state.chat.push_user(message);
        state.form.chat_input.clear();
        state.chat.begin_reply();
        Some(ChatRequest {
            message: message.to_string(),
        })
    }

    /// Ask the backend assistant and append its reply (or the error)
    pub async fn complete_chat(&self, request: ChatRequest) {
        debug!(message_len = request.message.len(), "Sending chat message");

        let reply = match self.api.chat(&request).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "Chat request failed");
                chat_error_text(&e)
            }
        };

        self.lock().chat.complete_reply(reply);
    }

    /// Send one chat message end to end
    pub async fn send_chat(&self, message: &str) {
        if let Some(request) = self.prepare_chat(message) {
            self.complete_chat(request).await;
        }
    }

    /// Dismiss the blocking alert
    pub fn dismiss_alert(&self) {
        self.lock().dismiss_alert();
    }
}

/// Inline chat text for a failed request
fn chat_error_text(err: &ClientError) -> String {
    format!("Error: {}", err)
}
