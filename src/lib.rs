pub mod app;
pub mod config;
pub mod model;
pub mod store;
pub mod ui;

// Internal modules
pub mod actions;
pub mod event;

// Re-export commonly used types
pub use app::{AppMode, AppState, DetailTab};
pub use config::AppConfig;
pub use model::{Category, Choice, Paper, Question, QuestionType};
