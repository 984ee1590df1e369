use std::collections::BTreeSet;

use collab_backend::db::models::project::ProjectCandidate;
use collab_backend::validation::{ProjectField, validate_project};

fn complete() -> ProjectCandidate {
    ProjectCandidate {
        title: Some("Neighbourhood tool library".into()),
        description: Some("Inventory and lending app for shared tools".into()),
        category: Some("civic-tech".into()),
        required_skills: Some(vec!["rust".into(), "design".into()]),
        start_date: Some("2024-01-01".into()),
        end_date: Some("2024-04-30".into()),
        team_size: Some(5),
        payment_model: Some("stipend".into()),
        stipend_amount: Some(500.0),
        deliverables: Some(vec!["mvp".into(), "user guide".into()]),
    }
}

fn error_keys(candidate: &ProjectCandidate) -> BTreeSet<ProjectField> {
    validate_project(candidate).errors.keys().copied().collect()
}

#[test]
fn validate_complete_project() {
    let result = validate_project(&complete());
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn validate_empty_project_reports_every_required_field() {
    let result = validate_project(&ProjectCandidate::default());
    assert!(!result.is_valid);

    let expected: BTreeSet<ProjectField> = [
        ProjectField::Title,
        ProjectField::Description,
        ProjectField::Category,
        ProjectField::StartDate,
        ProjectField::EndDate,
        ProjectField::TeamSize,
        ProjectField::PaymentModel,
        ProjectField::Deliverables,
    ]
    .into_iter()
    .collect();
    assert_eq!(error_keys(&ProjectCandidate::default()), expected);
    assert_eq!(result.message_for(ProjectField::Title), Some("Title is required"));
    assert_eq!(result.message_for(ProjectField::Description), Some("Description is required"));
    assert_eq!(result.message_for(ProjectField::Category), Some("Category is required"));
    assert_eq!(result.message_for(ProjectField::StartDate), Some("Start date is required"));
    assert_eq!(result.message_for(ProjectField::EndDate), Some("End date is required"));
    assert_eq!(
        result.message_for(ProjectField::TeamSize),
        Some("Team size must be a positive number")
    );
    assert_eq!(
        result.message_for(ProjectField::PaymentModel),
        Some("Payment model is required")
    );
    assert_eq!(
        result.message_for(ProjectField::Deliverables),
        Some("At least one deliverable is required")
    );
}

#[test]
fn validate_is_idempotent() {
    let candidate = ProjectCandidate {
        title: Some(" ".into()),
        team_size: Some(-3),
        ..ProjectCandidate::default()
    };
    assert_eq!(validate_project(&candidate), validate_project(&candidate));
}

#[test]
fn fixing_one_field_removes_only_its_error() {
    let broken = ProjectCandidate {
        title: None,
        team_size: Some(0),
        deliverables: Some(vec![]),
        ..complete()
    };
    let before = error_keys(&broken);
    assert_eq!(before.len(), 3);

    let repaired = ProjectCandidate {
        team_size: Some(2),
        ..broken.clone()
    };
    let after = error_keys(&repaired);

    let mut expected = before.clone();
    expected.remove(&ProjectField::TeamSize);
    assert_eq!(after, expected);
}

#[test]
fn stipend_rule_depends_on_payment_model() {
    let equity = ProjectCandidate {
        payment_model: Some("equity".into()),
        stipend_amount: Some(0.0),
        ..complete()
    };
    assert!(!error_keys(&equity).contains(&ProjectField::StipendAmount));

    let stipend = ProjectCandidate {
        payment_model: Some("stipend".into()),
        stipend_amount: Some(0.0),
        ..complete()
    };
    assert_eq!(
        validate_project(&stipend).message_for(ProjectField::StipendAmount),
        Some("Stipend amount must be a positive number")
    );

    let no_model = ProjectCandidate {
        payment_model: None,
        stipend_amount: None,
        ..complete()
    };
    let keys = error_keys(&no_model);
    assert!(keys.contains(&ProjectField::PaymentModel));
    assert!(!keys.contains(&ProjectField::StipendAmount));
}

#[test]
fn date_boundaries() {
    let same_day = ProjectCandidate {
        start_date: Some("2024-01-01".into()),
        end_date: Some("2024-01-01".into()),
        ..complete()
    };
    assert!(validate_project(&same_day).is_valid);

    let reversed = ProjectCandidate {
        start_date: Some("2024-01-02".into()),
        end_date: Some("2024-01-01".into()),
        ..complete()
    };
    let result = validate_project(&reversed);
    assert_eq!(
        result.message_for(ProjectField::EndDate),
        Some("End date must be after start date")
    );
    assert_eq!(result.errors.len(), 1);
}

#[test]
fn team_size_boundaries() {
    for size in [0, -1] {
        let candidate = ProjectCandidate {
            team_size: Some(size),
            ..complete()
        };
        assert!(error_keys(&candidate).contains(&ProjectField::TeamSize));
    }

    let one = ProjectCandidate {
        team_size: Some(1),
        ..complete()
    };
    assert!(!error_keys(&one).contains(&ProjectField::TeamSize));
}

#[test]
fn deliverables_boundaries() {
    let none = ProjectCandidate {
        deliverables: Some(vec![]),
        ..complete()
    };
    assert!(error_keys(&none).contains(&ProjectField::Deliverables));

    let one = ProjectCandidate {
        deliverables: Some(vec!["prototype".into()]),
        ..complete()
    };
    assert!(validate_project(&one).is_valid);
}

#[test]
fn required_skills_are_exempt() {
    for skills in [None, Some(vec![])] {
        let candidate = ProjectCandidate {
            required_skills: skills,
            ..complete()
        };
        assert!(validate_project(&candidate).is_valid);
    }
}

#[test]
fn validate_from_loose_form_json() {
    let candidate: ProjectCandidate = serde_json::from_str(
        r#"{
            "title": "Atlas",
            "description": "Maps",
            "category": "data",
            "start_date": "2024-01-01",
            "end_date": "2024-02-01",
            "team_size": "2",
            "payment_model": "stipend",
            "stipend_amount": "150",
            "deliverables": ["dataset"],
            "unrelated": {"nested": true}
        }"#,
    )
    .unwrap();
    assert!(validate_project(&candidate).is_valid);

    let candidate: ProjectCandidate =
        serde_json::from_str(r#"{"team_size": {"oops": 1}, "deliverables": "one"}"#).unwrap();
    let keys = error_keys(&candidate);
    assert!(keys.contains(&ProjectField::TeamSize));
    assert!(keys.contains(&ProjectField::Deliverables));
}
