pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod services;

pub use config::Config;
pub use database::repositories::TeamRepository;
pub use error::AppError;
