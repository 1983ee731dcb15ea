//! Integration tests for the controller's user-action flows
//!
//! The backend is replaced by an in-memory `BreachApi` that records every
//! request it receives.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use breach_estimator_gui::api::{
    AssessmentResult, BreachApi, BreachScenario, CalculateRequest, ChatRequest, Explanation,
    FinancialImpact, Prevention, Recommendation, RecommendationRequest, RecommendationResponse,
    Recovery,
};
use breach_estimator_gui::controller::Controller;
use breach_estimator_gui::error::{ClientError, ClientResult};
use breach_estimator_gui::state::{AppState, ChatRole, EffectivenessTier, FormState};

/// Backend double with canned answers and call counters
#[derive(Default)]
struct FakeApi {
    fail: bool,
    calculate_calls: AtomicUsize,
    recommendation_calls: AtomicUsize,
    last_calculate: Mutex<Option<CalculateRequest>>,
    last_recommendation: Mutex<Option<RecommendationRequest>>,
}

impl FakeApi {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl BreachApi for FakeApi {
    async fn calculate(&self, request: &CalculateRequest) -> ClientResult<AssessmentResult> {
        self.calculate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_calculate.lock().unwrap() = Some(request.clone());
        if self.fail {
            return Err(ClientError::Status {
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(sample_assessment())
    }

    async fn get_recommendation(
        &self,
        request: &RecommendationRequest,
    ) -> ClientResult<RecommendationResponse> {
        self.recommendation_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_recommendation.lock().unwrap() = Some(request.clone());
        if self.fail {
            return Err(ClientError::Decode("not json".to_string()));
        }
        Ok(sample_recommendations())
    }

    async fn chat(&self, request: &ChatRequest) -> ClientResult<String> {
        if request.message.starts_with("slow") {
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        if self.fail {
            return Err(ClientError::Backend("No message provided".to_string()));
        }
        Ok(format!("reply to {}", request.message))
    }
}

fn sample_assessment() -> AssessmentResult {
    AssessmentResult {
        breach_scenario: BreachScenario {
            description: "Customer Data Exposure affecting 12,000 records".to_string(),
            severity: "moderate".to_string(),
            records_affected: 12_000,
            industry_impact: "Customer payment information exposure risk".to_string(),
        },
        financial_impact: FinancialImpact {
            total_cost: "$2.76M".to_string(),
            total_cost_raw: 2_760_000.0,
            direct_cost: "$2.40M".to_string(),
            direct_cost_raw: 2_400_000.0,
            regulatory_fines: "$100.00K".to_string(),
            regulatory_fines_raw: 100_000.0,
            revenue_loss: "$4.20K".to_string(),
            revenue_loss_raw: 4_200.0,
            reputation_damage: "$500.00".to_string(),
            reputation_damage_raw: 500.0,
            recovery_cost: "$255.30K".to_string(),
            recovery_cost_raw: 255_300.0,
        },
        explanation: Explanation {
            cost_per_record: "$200.00".to_string(),
            gdpr_fine_rate: "2.00%".to_string(),
            churn_rate: "6.00%".to_string(),
        },
        prevention: Prevention {
            estimated_prevention_cost: "$480.00K".to_string(),
            roi: "5.75x investment".to_string(),
        },
        recovery: Recovery {
            estimated_time: "12 months".to_string(),
        },
    }
}

fn sample_recommendations() -> RecommendationResponse {
    let rec = |title: &str, effectiveness: &str| Recommendation {
        title: title.to_string(),
        description: format!("{} description", title),
        effectiveness: effectiveness.to_string(),
        cost: "$10.00K".to_string(),
    };
    RecommendationResponse {
        annual_security_budget: "$276.00K".to_string(),
        recommendations: vec![
            rec("Employee Security Training", "High"),
            rec("Data Encryption", "Very High"),
            rec("HIPAA Compliance Tools", "Critical"),
            rec("Audit Logging", "Moderate"),
        ],
    }
}

fn controller_with(api: Arc<FakeApi>, form: FormState) -> Controller {
    let mut state = AppState::new();
    state.form = form;
    Controller::with_state(api, state)
}

fn complete_form() -> FormState {
    FormState {
        company_size: "120".to_string(),
        annual_revenue: "5000000".to_string(),
        industry: "retail".to_string(),
        records_compromised: "12000".to_string(),
        chat_input: String::new(),
    }
}

#[tokio::test]
async fn test_incomplete_form_sends_nothing() {
    for field in 0..3 {
        let mut form = complete_form();
        match field {
            0 => form.company_size.clear(),
            1 => form.annual_revenue.clear(),
            _ => form.industry.clear(),
        }

        let api = Arc::new(FakeApi::default());
        let controller = controller_with(api.clone(), form);
        controller.calculate().await;

        let state = controller.snapshot();
        assert_eq!(api.calculate_calls.load(Ordering::SeqCst), 0);
        assert_eq!(state.alert.as_deref(), Some("Please fill in all fields"));
        assert!(!state.loading);
        assert!(state.assessment.is_none());
    }
}

#[tokio::test]
async fn test_calculation_populates_every_region_verbatim() {
    let api = Arc::new(FakeApi::default());
    let controller = controller_with(api.clone(), complete_form());

    controller.calculate().await;

    let sent = api.last_calculate.lock().unwrap().clone().unwrap();
    assert_eq!(sent.records_compromised.as_deref(), Some("12000"));

    let state = controller.snapshot();
    assert!(state.alert.is_none());
    assert!(!state.loading);
    assert!(state.results_visible);

    let results = state.results.as_ref().unwrap();
    let expected = sample_assessment();
    assert_eq!(results.description, expected.breach_scenario.description);
    assert_eq!(results.severity, "Severity: Moderate");
    assert_eq!(results.records_affected, "12,000");
    assert_eq!(results.total_cost, "$2.76M");
    assert_eq!(results.revenue_loss, "$4.20K");
    assert_eq!(results.gdpr_fine_rate, "2.00%");
    assert_eq!(results.prevention_roi, "5.75x investment");
    assert_eq!(results.recovery_time, "12 months");

    let chart = state.chart.as_ref().unwrap();
    assert_eq!(
        chart.values(),
        vec![2_400_000.0, 100_000.0, 4_200.0, 500.0, 255_300.0]
    );

    assert_eq!(state.chat.len(), 1);
    let summary = &state.chat.entries()[0];
    assert_eq!(summary.role, ChatRole::Bot);
    assert_eq!(
        summary.text,
        "I've analyzed the potential impact of a moderate data breach for your retail company. \
         The total estimated cost would be $2.76M, affecting 12,000 records. \
         How can I help you understand these results?"
    );
}

#[tokio::test]
async fn test_recalculation_replaces_chart() {
    let api = Arc::new(FakeApi::default());
    let controller = controller_with(api.clone(), complete_form());

    controller.calculate().await;
    controller.calculate().await;

    let state = controller.snapshot();
    assert_eq!(api.calculate_calls.load(Ordering::SeqCst), 2);
    assert_eq!(state.chart.as_ref().unwrap().bars.len(), 5);
    assert_eq!(state.chat.len(), 2);
}

#[tokio::test]
async fn test_calculation_failure_alerts_once() {
    let api = Arc::new(FakeApi::failing());
    let controller = controller_with(api.clone(), complete_form());

    controller.calculate().await;

    let state = controller.snapshot();
    assert_eq!(api.calculate_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        state.alert.as_deref(),
        Some("An error occurred. Please try again.")
    );
    assert!(!state.loading);
    assert!(!state.results_visible);
    assert!(state.chat.is_empty());
}

#[tokio::test]
async fn test_recommendations_without_assessment_is_noop() {
    let api = Arc::new(FakeApi::default());
    let controller = controller_with(api.clone(), complete_form());
    let before = controller.snapshot();

    controller.fetch_recommendations().await;

    let after = controller.snapshot();
    assert_eq!(api.recommendation_calls.load(Ordering::SeqCst), 0);
    assert!(after.recommendations.is_none());
    assert!(after.alert.is_none());
    assert_eq!(after.chat.len(), before.chat.len());
    assert_eq!(
        after.recommendations_button_visible,
        before.recommendations_button_visible
    );
}

#[tokio::test]
async fn test_recommendations_render_cards_and_hide_button() {
    let api = Arc::new(FakeApi::default());
    let controller = controller_with(api.clone(), complete_form());

    controller.calculate().await;
    controller.fetch_recommendations().await;

    let sent = api.last_recommendation.lock().unwrap().clone().unwrap();
    assert_eq!(sent.total_cost, 2_760_000.0);
    assert_eq!(sent.industry, "retail");

    let state = controller.snapshot();
    assert!(!state.recommendations_button_visible);

    let view = state.recommendations.as_ref().unwrap();
    assert_eq!(view.annual_security_budget, "$276.00K");
    let tiers: Vec<EffectivenessTier> = view.cards.iter().map(|c| c.tier).collect();
    assert_eq!(
        tiers,
        vec![
            EffectivenessTier::Primary,
            EffectivenessTier::Success,
            EffectivenessTier::Danger,
            EffectivenessTier::Info,
        ]
    );

    let last = state.chat.entries().last().unwrap();
    assert!(last.text.contains("$276.00K"));
}

#[tokio::test]
async fn test_recommendation_failure_keeps_button() {
    let api = Arc::new(FakeApi::failing());
    let mut state = AppState::new();
    state.form = complete_form();
    state.assessment = Some(sample_assessment());
    let controller = Controller::with_state(api.clone(), state);

    controller.fetch_recommendations().await;

    let state = controller.snapshot();
    assert_eq!(api.recommendation_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        state.alert.as_deref(),
        Some("An error occurred while fetching recommendations.")
    );
    assert!(state.recommendations_button_visible);
    assert!(state.recommendations.is_none());
}

#[tokio::test]
async fn test_chat_appends_user_then_bot() {
    let api = Arc::new(FakeApi::default());
    let controller = controller_with(api, complete_form());

    controller.send_chat("How are fines calculated?").await;

    let state = controller.snapshot();
    let entries = state.chat.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].role, ChatRole::User);
    assert_eq!(entries[0].text, "How are fines calculated?");
    assert_eq!(entries[1].role, ChatRole::Bot);
    assert_eq!(entries[1].text, "reply to How are fines calculated?");
    assert!(!state.chat.is_waiting());
}

#[tokio::test]
async fn test_blank_chat_is_ignored() {
    let api = Arc::new(FakeApi::default());
    let controller = controller_with(api, complete_form());

    controller.send_chat("   ").await;

    assert!(controller.snapshot().chat.is_empty());
}

#[tokio::test]
async fn test_chat_error_is_rendered_inline() {
    let api = Arc::new(FakeApi::failing());
    let controller = controller_with(api, complete_form());

    controller.send_chat("hello").await;

    let state = controller.snapshot();
    assert!(state.alert.is_none());
    assert_eq!(state.chat.entries()[1].text, "Error: No message provided");
}

#[tokio::test]
async fn test_chat_replies_land_in_arrival_order() {
    let api = Arc::new(FakeApi::default());
    let controller = controller_with(api, complete_form());

    let slow = controller.prepare_chat("slow question").unwrap();
    let fast = controller.prepare_chat("fast question").unwrap();

    // Both user entries are visible before any reply arrives
    let pending = controller.snapshot();
    assert_eq!(pending.chat.len(), 2);
    assert_eq!(pending.chat.pending_replies(), 2);

    let first = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.complete_chat(slow).await })
    };
    let second = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.complete_chat(fast).await })
    };
    first.await.unwrap();
    second.await.unwrap();

    let state = controller.snapshot();
    let texts: Vec<&str> = state.chat.entries().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "slow question",
            "fast question",
            "reply to fast question",
            "reply to slow question",
        ]
    );
    assert!(!state.chat.is_waiting());
}
