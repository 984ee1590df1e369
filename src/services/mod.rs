pub mod projects_service;

pub use projects_service::ProjectsService;
