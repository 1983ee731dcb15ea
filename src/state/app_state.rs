// Application state management
// Contains form inputs, the current assessment, rendered result regions,
// recommendations, chat transcript and the pending alert

use crate::api::{
    AssessmentResult, CalculateRequest, Recommendation, RecommendationRequest,
    RecommendationResponse,
};
use crate::error::ClientError;
use crate::format::{capitalize_first, format_count};
use crate::state::chart::CostChart;
use crate::state::chat::ChatTranscript;

/// Industries offered in the form, as sent to the backend
pub const INDUSTRIES: [&str; 7] = [
    "healthcare",
    "financial",
    "retail",
    "technology",
    "education",
    "manufacturing",
    "other",
];

/// Alert shown when a required field is blank
pub const VALIDATION_ALERT: &str = "Please fill in all fields";
/// Alert shown when the calculation request fails
pub const CALCULATION_ALERT: &str = "An error occurred. Please try again.";
/// Alert shown when the recommendation request fails
pub const RECOMMENDATION_ALERT: &str = "An error occurred while fetching recommendations.";

/// Raw form inputs, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Number of employees
    pub company_size: String,
    /// Annual revenue in dollars
    pub annual_revenue: String,
    /// One of [`INDUSTRIES`], empty until chosen
    pub industry: String,
    /// Optional number of compromised records
    pub records_compromised: String,
    /// Chat input box
    pub chat_input: String,
}

impl FormState {
    /// Validate required fields and build the calculation payload
    pub fn calculate_request(&self) -> Result<CalculateRequest, ClientError> {
        let company_size = self.company_size.trim();
        let annual_revenue = self.annual_revenue.trim();
        let industry = self.industry.trim();

        if company_size.is_empty() || annual_revenue.is_empty() || industry.is_empty() {
            return Err(ClientError::Validation(VALIDATION_ALERT.to_string()));
        }

        let records = self.records_compromised.trim();
        Ok(CalculateRequest {
            company_size: company_size.to_string(),
            annual_revenue: annual_revenue.to_string(),
            industry: industry.to_string(),
            records_compromised: (!records.is_empty()).then(|| records.to_string()),
        })
    }

    /// Build the recommendation payload from the current profile
    pub fn recommendation_request(&self, total_cost: f64) -> RecommendationRequest {
        RecommendationRequest {
            company_size: self.company_size.trim().to_string(),
            annual_revenue: self.annual_revenue.trim().to_string(),
            industry: self.industry.trim().to_string(),
            total_cost,
        }
    }
}

/// Display severity of a recommendation's effectiveness label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectivenessTier {
    /// Unrecognised label
    Info,
    /// "High"
    Primary,
    /// "Very High"
    Success,
    /// "Critical"
    Danger,
}

impl EffectivenessTier {
    /// Map an effectiveness label, ignoring case
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "critical" => EffectivenessTier::Danger,
            "very high" => EffectivenessTier::Success,
            "high" => EffectivenessTier::Primary,
            _ => EffectivenessTier::Info,
        }
    }
}

/// Text of every result region, assigned straight from the assessment
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct ResultsView {
    // Breach scenario
    pub description: String,
    pub severity: String,
    pub records_affected: String,
    pub industry_impact: String,
    // Financial impact
    pub total_cost: String,
    pub direct_cost: String,
    pub regulatory_fines: String,
    pub revenue_loss: String,
    pub reputation_damage: String,
    pub recovery_cost: String,
    pub cost_per_record: String,
    pub gdpr_fine_rate: String,
    pub churn_rate: String,
    // Prevention
    pub prevention_cost: String,
    pub prevention_roi: String,
    // Recovery
    pub recovery_time: String,
}

impl ResultsView {
    /// Populate every region from an assessment
    pub fn from_assessment(result: &AssessmentResult) -> Self {
        let scenario = &result.breach_scenario;
        let impact = &result.financial_impact;
        let explanation = &result.explanation;
        Self {
            description: scenario.description.clone(),
            severity: format!("Severity: {}", capitalize_first(&scenario.severity)),
            records_affected: format_count(scenario.records_affected),
            industry_impact: scenario.industry_impact.clone(),
            total_cost: impact.total_cost.clone(),
            direct_cost: impact.direct_cost.clone(),
            regulatory_fines: impact.regulatory_fines.clone(),
            revenue_loss: impact.revenue_loss.clone(),
            reputation_damage: impact.reputation_damage.clone(),
            recovery_cost: impact.recovery_cost.clone(),
            cost_per_record: explanation.cost_per_record.clone(),
            gdpr_fine_rate: explanation.gdpr_fine_rate.clone(),
            churn_rate: explanation.churn_rate.clone(),
            prevention_cost: result.prevention.estimated_prevention_cost.clone(),
            prevention_roi: result.prevention.roi.clone(),
            recovery_time: result.recovery.estimated_time.clone(),
        }
    }
}

/// One recommendation card
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct RecommendationCard {
    pub title: String,
    pub description: String,
    pub effectiveness: String,
    pub tier: EffectivenessTier,
    pub cost: String,
}

impl From<&Recommendation> for RecommendationCard {
    fn from(rec: &Recommendation) -> Self {
        Self {
            title: rec.title.clone(),
            description: rec.description.clone(),
            effectiveness: rec.effectiveness.clone(),
            tier: EffectivenessTier::from_label(&rec.effectiveness),
            cost: rec.cost.clone(),
        }
    }
}

/// Budget summary followed by the recommendation cards
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationsView {
    /// Suggested annual security budget, pre-formatted
    pub annual_security_budget: String,
    /// Cards in response order
    pub cards: Vec<RecommendationCard>,
}

impl From<&RecommendationResponse> for RecommendationsView {
    fn from(response: &RecommendationResponse) -> Self {
        Self {
            annual_security_budget: response.annual_security_budget.clone(),
            cards: response.recommendations.iter().map(Into::into).collect(),
        }
    }
}

/// Main application state
/// Everything the UI renders lives here
#[derive(Debug, Clone)]
pub struct AppState {
    /// Form inputs
    pub form: FormState,
    /// Last successful assessment
    pub assessment: Option<AssessmentResult>,
    /// Rendered result regions
    pub results: Option<ResultsView>,
    /// Cost breakdown chart
    pub chart: Option<CostChart>,
    /// Rendered recommendations
    pub recommendations: Option<RecommendationsView>,
    /// Whether the "get recommendations" control is shown
    pub recommendations_button_visible: bool,
    /// Assistant transcript
    pub chat: ChatTranscript,
    /// Blocking alert waiting to be dismissed
    pub alert: Option<String>,
    /// Calculation in progress
    pub loading: bool,
    /// Whether the results section is shown
    pub results_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            assessment: None,
            results: None,
            chart: None,
            recommendations: None,
            recommendations_button_visible: true,
            chat: ChatTranscript::new(),
            alert: None,
            loading: false,
            results_visible: false,
        }
    }
}

impl AppState {
    /// Create a new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise a blocking alert, replacing any pending one
    pub fn raise_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    /// Dismiss the pending alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Enter the loading state for a new calculation
    pub fn begin_calculation(&mut self) {
        self.loading = true;
        self.results_visible = false;
    }

    /// Replace the assessment and everything derived from it
    pub fn apply_assessment(&mut self, industry: &str, result: AssessmentResult) {
        self.results = Some(ResultsView::from_assessment(&result));
        self.chart = Some(CostChart::from_impact(&result.financial_impact));
        self.chat.push_bot(assessment_summary(industry, &result));
        self.assessment = Some(result);
        self.loading = false;
        self.results_visible = true;
    }

    /// Leave the loading state after a failed calculation
    pub fn fail_calculation(&mut self) {
        self.loading = false;
        self.raise_alert(CALCULATION_ALERT);
    }

    /// Render recommendations and retire the trigger control
    pub fn apply_recommendations(&mut self, response: &RecommendationResponse) {
        self.recommendations = Some(RecommendationsView::from(response));
        self.recommendations_button_visible = false;
        self.chat.push_bot(recommendation_summary(response));
    }

    /// Whether recommendations can be requested at all
    pub fn has_assessment(&self) -> bool {
        self.assessment.is_some()
    }
}

/// Bot message appended after a successful calculation
pub fn assessment_summary(industry: &str, result: &AssessmentResult) -> String {
    format!(
        "I've analyzed the potential impact of a {} data breach for your {} company. \
         The total estimated cost would be {}, affecting {} records. \
         How can I help you understand these results?",
        result.breach_scenario.severity,
        industry,
        result.financial_impact.total_cost,
        format_count(result.breach_scenario.records_affected),
    )
}

/// Bot message appended after recommendations arrive
pub fn recommendation_summary(response: &RecommendationResponse) -> String {
    format!(
        "I've prepared some security recommendations tailored to your company profile. \
         The suggested annual security budget is {}, which is a fraction of the potential breach cost.",
        response.annual_security_budget
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        FormState {
            company_size: "120".to_string(),
            annual_revenue: "5000000".to_string(),
            industry: "retail".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(!state.has_assessment());
        assert!(state.recommendations_button_visible);
        assert!(state.chat.is_empty());
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_calculate_request_requires_all_fields() {
        for blank in 0..3 {
            let mut form = filled_form();
            match blank {
                0 => form.company_size = "  ".to_string(),
                1 => form.annual_revenue.clear(),
                _ => form.industry.clear(),
            }
            let err = form.calculate_request().unwrap_err();
            assert!(matches!(err, ClientError::Validation(_)));
        }
    }

    #[test]
    fn test_calculate_request_optional_records() {
        let mut form = filled_form();
        assert_eq!(form.calculate_request().unwrap().records_compromised, None);

        form.records_compromised = " 2500 ".to_string();
        let request = form.calculate_request().unwrap();
        assert_eq!(request.records_compromised.as_deref(), Some("2500"));
        assert_eq!(request.industry, "retail");
    }

    #[test]
    fn test_effectiveness_tiers() {
        assert_eq!(EffectivenessTier::from_label("Critical"), EffectivenessTier::Danger);
        assert_eq!(EffectivenessTier::from_label("Very High"), EffectivenessTier::Success);
        assert_eq!(EffectivenessTier::from_label("HIGH"), EffectivenessTier::Primary);
        assert_eq!(EffectivenessTier::from_label("Medium"), EffectivenessTier::Info);
        assert_eq!(EffectivenessTier::from_label(""), EffectivenessTier::Info);
    }

    #[test]
    fn test_apply_recommendations_hides_button() {
        let mut state = AppState::new();
        let response = RecommendationResponse {
            annual_security_budget: "$100.00K".to_string(),
            recommendations: vec![Recommendation {
                title: "Data Encryption".to_string(),
                description: "Encrypt sensitive data".to_string(),
                effectiveness: "Very High".to_string(),
                cost: "$12.00K".to_string(),
            }],
        };

        state.apply_recommendations(&response);

        assert!(!state.recommendations_button_visible);
        let view = state.recommendations.as_ref().unwrap();
        assert_eq!(view.annual_security_budget, "$100.00K");
        assert_eq!(view.cards[0].tier, EffectivenessTier::Success);
        assert!(state.chat.entries()[0].text.contains("$100.00K"));
    }

    #[test]
    fn test_fail_calculation_raises_alert() {
        let mut state = AppState::new();
        state.begin_calculation();
        assert!(state.loading);

        state.fail_calculation();
        assert!(!state.loading);
        assert_eq!(state.alert.as_deref(), Some(CALCULATION_ALERT));

        state.dismiss_alert();
        assert!(state.alert.is_none());
    }
}
