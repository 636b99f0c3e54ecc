pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;

mod app_context;
mod text;

pub use app_context::AppContext;
