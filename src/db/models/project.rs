use crate::db::enums::PaymentModel;
use crate::utils::form_value::{lenient_f64, lenient_i64, lenient_string, lenient_strings};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An in-progress project submission. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCandidate {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub required_skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub team_size: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub payment_model: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub stipend_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub deliverables: Option<Vec<String>>,
}

// Project models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub required_skills: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub team_size: i64,
    pub payment_model: String,
    pub stipend_amount: Option<f64>,
    pub deliverables: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A fully-populated record ready to be handed to a store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: String,
    pub required_skills: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub team_size: i64,
    pub payment_model: String,
    pub stipend_amount: Option<f64>,
    pub deliverables: Vec<String>,
}

impl NewProject {
    /// Builds the typed record from a candidate that already passed
    /// validation. Returns `None` if a required field is still missing.
    pub fn from_candidate(candidate: &ProjectCandidate) -> Option<Self> {
        use crate::validation::project::parse_form_date;

        let start_date = candidate.start_date.as_deref().and_then(parse_form_date)?;
        let end_date = candidate.end_date.as_deref().and_then(parse_form_date)?;
        let team_size = candidate.team_size.filter(|size| *size > 0)?;

        Some(Self {
            title: candidate.title.as_deref()?.trim().to_string(),
            description: candidate.description.as_deref()?.trim().to_string(),
            category: candidate.category.clone()?,
            required_skills: candidate.required_skills.clone().unwrap_or_default(),
            start_date,
            end_date,
            team_size,
            payment_model: candidate.payment_model.clone()?,
            // 非 stipend 模式下不保存金额
            stipend_amount: candidate
                .stipend_amount
                .filter(|_| candidate.payment_model.as_deref() == Some(PaymentModel::Stipend.as_str())),
            deliverables: candidate.deliverables.clone()?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProjectListQuery {
    #[validate(length(max = 100, message = "Search term must be 100 characters or less"))]
    pub search: Option<String>,
    #[validate(range(min = 1, max = 1_000_000, message = "Page must be between 1 and 1000000"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "Per page must be between 1 and 100"))]
    pub per_page: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub total_count: i64,
}
