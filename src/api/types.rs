//! Wire types for the estimator backend
//!
//! Unsuffixed cost fields are display strings formatted by the backend;
//! their `_raw` siblings are the numeric values.

use serde::{Deserialize, Serialize};

/// Body of `POST /calculate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    #[allow(missing_docs)]
    pub company_size: String,
    #[allow(missing_docs)]
    pub annual_revenue: String,
    #[allow(missing_docs)]
    pub industry: String,
    /// Omitted when the user leaves it blank; the backend picks its own default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_compromised: Option<String>,
}

/// Full response of `POST /calculate`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssessmentResult {
    #[allow(missing_docs)]
    pub breach_scenario: BreachScenario,
    #[allow(missing_docs)]
    pub financial_impact: FinancialImpact,
    #[allow(missing_docs)]
    pub explanation: Explanation,
    #[allow(missing_docs)]
    pub prevention: Prevention,
    #[allow(missing_docs)]
    pub recovery: Recovery,
}

/// Simulated breach scenario
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BreachScenario {
    #[allow(missing_docs)]
    pub description: String,
    /// `minor`, `moderate` or `severe`
    pub severity: String,
    #[allow(missing_docs)]
    pub records_affected: u64,
    #[allow(missing_docs)]
    pub industry_impact: String,
}

/// Cost breakdown, formatted and raw
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct FinancialImpact {
    pub total_cost: String,
    pub total_cost_raw: f64,
    pub direct_cost: String,
    pub direct_cost_raw: f64,
    pub regulatory_fines: String,
    pub regulatory_fines_raw: f64,
    pub revenue_loss: String,
    pub revenue_loss_raw: f64,
    pub reputation_damage: String,
    pub reputation_damage_raw: f64,
    pub recovery_cost: String,
    pub recovery_cost_raw: f64,
}

/// Rates the backend used for the calculation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct Explanation {
    pub cost_per_record: String,
    pub gdpr_fine_rate: String,
    pub churn_rate: String,
}

/// Prevention estimate
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct Prevention {
    pub estimated_prevention_cost: String,
    pub roi: String,
}

/// Recovery estimate
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct Recovery {
    pub estimated_time: String,
}

/// Body of `POST /get_recommendation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct RecommendationRequest {
    pub company_size: String,
    pub annual_revenue: String,
    pub industry: String,
    /// `total_cost_raw` of the current assessment
    pub total_cost: f64,
}

/// Response of `POST /get_recommendation`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct RecommendationResponse {
    pub annual_security_budget: String,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// A single security measure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    /// Free-form label such as `High` or `Critical`
    pub effectiveness: String,
    pub cost: String,
}

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct ChatRequest {
    pub message: String,
}

/// Response of `POST /chat`: either a reply or an error string
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    /// Assistant reply
    #[serde(default)]
    pub response: Option<String>,
    /// Error reported by the backend
    #[serde(default)]
    pub error: Option<String>,
}
