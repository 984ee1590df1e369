use crate::db::models::project::ProjectCandidate;
use crate::validation::project::{FieldErrors, ProjectField, ValidationResult, validate_project};

/// Holds the errors of the last validation run so a form can keep showing
/// them between re-renders. The validation itself stays stateless.
#[derive(Debug, Default, Clone)]
pub struct ProjectFormState {
    errors: FieldErrors,
}

impl ProjectFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&mut self, candidate: &ProjectCandidate) -> ValidationResult {
        let result = validate_project(candidate);
        self.errors = result.errors.clone();
        result
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: ProjectField) -> Option<&'static str> {
        self.errors.get(&field).map(|e| e.message)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}
