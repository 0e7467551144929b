pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod form;
pub mod models;
pub mod pages;
pub mod presence;
pub mod render;
pub mod theme;

pub use error::{AppError, Result};
