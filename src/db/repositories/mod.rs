pub mod projects;

pub use projects::{InMemoryProjectStore, ProjectStore};
