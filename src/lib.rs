pub mod app;
pub mod data;
pub mod effects;
pub mod model;
pub mod notifications;
pub mod ui;
pub mod view_models;

pub use app::QuestionnaireApp;
