use collab_backend::db::models::project::ProjectCandidate;
use collab_backend::validation::{ProjectField, ProjectFormState};

#[test]
fn form_state_tracks_latest_run() {
    let mut state = ProjectFormState::new();

    state.validate(&ProjectCandidate::default());
    assert_eq!(state.errors().len(), 8);

    let partial = ProjectCandidate {
        title: Some("Atlas".into()),
        description: Some("Maps".into()),
        ..ProjectCandidate::default()
    };
    let result = state.validate(&partial);
    assert_eq!(state.errors(), &result.errors);
    assert_eq!(state.error_for(ProjectField::Title), None);
    assert_eq!(state.error_for(ProjectField::Category), Some("Category is required"));
}

#[test]
fn clearing_does_not_change_later_results() {
    let mut state = ProjectFormState::new();
    let first = state.validate(&ProjectCandidate::default());

    state.clear_errors();
    assert!(state.errors().is_empty());

    let second = state.validate(&ProjectCandidate::default());
    assert_eq!(first, second);
    assert!(state.has_errors());
}
