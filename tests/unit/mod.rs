mod form_state;
mod project;
mod projects_service;
