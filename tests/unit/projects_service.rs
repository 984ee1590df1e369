use collab_backend::db::models::project::ProjectCandidate;
use collab_backend::db::repositories::{InMemoryProjectStore, ProjectStore};
use collab_backend::error::AppError;
use collab_backend::services::ProjectsService;
use uuid::Uuid;

fn candidate(title: &str) -> ProjectCandidate {
    ProjectCandidate {
        title: Some(title.into()),
        description: Some("Open dataset of bike lanes".into()),
        category: Some("data".into()),
        required_skills: None,
        start_date: Some("2024-02-01".into()),
        end_date: Some("2024-02-28".into()),
        team_size: Some(2),
        payment_model: Some("unpaid".into()),
        stipend_amount: None,
        deliverables: Some(vec!["dataset".into()]),
    }
}

#[tokio::test]
async fn create_persists_valid_project() {
    let store = InMemoryProjectStore::new();
    let created = ProjectsService::create(&store, &candidate("Bike lanes"))
        .await
        .unwrap();
    assert_eq!(created.title, "Bike lanes");
    assert_eq!(created.team_size, 2);

    let fetched = ProjectsService::get(&store, created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_rejects_invalid_project_without_storing() {
    let store = InMemoryProjectStore::new();
    let invalid = ProjectCandidate {
        title: Some("".into()),
        end_date: Some("2024-01-01".into()),
        ..candidate("ignored")
    };

    match ProjectsService::create(&store, &invalid).await {
        Err(AppError::FieldErrors { errors }) => {
            let fields: Vec<_> = errors.iter().filter_map(|e| e.field.as_deref()).collect();
            assert_eq!(fields, vec!["title", "end_date"]);
            assert_eq!(errors[1].code, "DATE_ORDER");
        }
        other => panic!("expected field errors, got {:?}", other.map(|p| p.id)),
    }

    let (projects, total) = store.list(None, 1, 10).await.unwrap();
    assert!(projects.is_empty());
    assert_eq!(total, 0);
}

#[tokio::test]
async fn update_validates_and_requires_existing_project() {
    let store = InMemoryProjectStore::new();
    let created = ProjectsService::create(&store, &candidate("Bike lanes"))
        .await
        .unwrap();

    let updated = ProjectsService::update(&store, created.id, &candidate("Bike lanes v2"))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Bike lanes v2");

    let err = ProjectsService::update(&store, created.id, &ProjectCandidate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::FieldErrors { ref errors } if errors.len() == 8));

    let err = ProjectsService::update(&store, Uuid::new_v4(), &candidate("Ghost"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn get_missing_project_is_not_found() {
    let store = InMemoryProjectStore::new();
    let err = ProjectsService::get(&store, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn list_ignores_blank_search() {
    let store = InMemoryProjectStore::new();
    ProjectsService::create(&store, &candidate("Bike lanes")).await.unwrap();
    ProjectsService::create(&store, &candidate("Tree census")).await.unwrap();

    let (all, total) = ProjectsService::list(&store, Some("   "), 1, 10).await.unwrap();
    assert_eq!((all.len(), total), (2, 2));

    let (trees, total) = ProjectsService::list(&store, Some(" tree "), 1, 10).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(trees[0].title, "Tree census");
}
