pub mod api;
pub mod app;
pub mod config;
pub mod handler;
pub mod message;
pub mod proxy;
pub mod tui;
pub mod ui;

// Re-export main types for convenience
pub use api::ApiClient;
pub use app::App;
pub use message::{AskRequest, AskResponse, ChatMessage, ChatRole};
pub use proxy::ProxyState;
