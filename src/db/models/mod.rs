// Sub-modules organized by functional domain
pub mod api;
pub mod project;

// API response structures
pub use api::*;

// Project models
pub use project::*;
