use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

use crate::db::enums::PaymentModel;
use crate::db::models::api::ErrorDetail;
use crate::db::models::project::ProjectCandidate;

/// Fields of a project submission that can carry a validation error.
/// Ordered as they appear on the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Title,
    Description,
    Category,
    RequiredSkills,
    StartDate,
    EndDate,
    TeamSize,
    PaymentModel,
    StipendAmount,
    Deliverables,
}

impl ProjectField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectField::Title => "title",
            ProjectField::Description => "description",
            ProjectField::Category => "category",
            ProjectField::RequiredSkills => "required_skills",
            ProjectField::StartDate => "start_date",
            ProjectField::EndDate => "end_date",
            ProjectField::TeamSize => "team_size",
            ProjectField::PaymentModel => "payment_model",
            ProjectField::StipendAmount => "stipend_amount",
            ProjectField::Deliverables => "deliverables",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub code: &'static str,
    pub message: &'static str,
}

// 对外只暴露消息文本
impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message)
    }
}

pub type FieldErrors = BTreeMap<ProjectField, FieldError>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: FieldErrors,
}

impl ValidationResult {
    fn from_errors(errors: FieldErrors) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn message_for(&self, field: ProjectField) -> Option<&'static str> {
        self.errors.get(&field).map(|e| e.message)
    }

    pub fn error_details(&self) -> Vec<ErrorDetail> {
        self.errors
            .iter()
            .map(|(field, error)| ErrorDetail {
                field: Some(field.as_str().to_string()),
                code: error.code.to_string(),
                message: error.message.to_string(),
            })
            .collect()
    }
}

struct Rule {
    field: ProjectField,
    code: &'static str,
    message: &'static str,
    violated: fn(&ProjectCandidate) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        field: ProjectField::Title,
        code: "REQUIRED",
        message: "Title is required",
        violated: |c| is_blank(&c.title),
    },
    Rule {
        field: ProjectField::Description,
        code: "REQUIRED",
        message: "Description is required",
        violated: |c| is_blank(&c.description),
    },
    Rule {
        field: ProjectField::Category,
        code: "REQUIRED",
        message: "Category is required",
        violated: |c| is_empty(&c.category),
    },
    Rule {
        field: ProjectField::StartDate,
        code: "REQUIRED",
        message: "Start date is required",
        violated: |c| date_of(&c.start_date).is_none(),
    },
    Rule {
        field: ProjectField::EndDate,
        code: "REQUIRED",
        message: "End date is required",
        violated: |c| date_of(&c.end_date).is_none(),
    },
    Rule {
        field: ProjectField::EndDate,
        code: "DATE_ORDER",
        message: "End date must be after start date",
        violated: |c| match (date_of(&c.start_date), date_of(&c.end_date)) {
            (Some(start), Some(end)) => end < start,
            _ => false,
        },
    },
    Rule {
        field: ProjectField::TeamSize,
        code: "INVALID_RANGE",
        message: "Team size must be a positive number",
        violated: |c| !matches!(c.team_size, Some(size) if size > 0),
    },
    Rule {
        field: ProjectField::PaymentModel,
        code: "REQUIRED",
        message: "Payment model is required",
        violated: |c| is_empty(&c.payment_model),
    },
    Rule {
        field: ProjectField::StipendAmount,
        code: "INVALID_RANGE",
        message: "Stipend amount must be a positive number",
        violated: |c| {
            c.payment_model.as_deref() == Some(PaymentModel::Stipend.as_str())
                && !matches!(c.stipend_amount, Some(amount) if amount > 0.0)
        },
    },
    Rule {
        field: ProjectField::Deliverables,
        code: "REQUIRED",
        message: "At least one deliverable is required",
        violated: |c| c.deliverables.as_ref().is_none_or(|d| d.is_empty()),
    },
];

/// Checks a project submission against every rule and reports all failures
/// at once. Never fails; missing fields are reported as field errors.
pub fn validate_project(candidate: &ProjectCandidate) -> ValidationResult {
    let mut errors = FieldErrors::new();

    for rule in RULES {
        if (rule.violated)(candidate) {
            errors.insert(
                rule.field,
                FieldError {
                    code: rule.code,
                    message: rule.message,
                },
            );
        }
    }

    ValidationResult::from_errors(errors)
}

/// Parses a calendar date from form input. Accepts `YYYY-MM-DD` as well as
/// RFC 3339 and `YYYY-MM-DDTHH:MM[:SS]` timestamps, keeping only the date.
pub fn parse_form_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
                .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
                .ok()
                .map(|dt| dt.date())
        })
}

fn date_of(value: &Option<String>) -> Option<NaiveDate> {
    value.as_deref().and_then(parse_form_date)
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

fn is_empty(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
