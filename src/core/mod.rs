pub mod engine;
pub mod mapper;
pub mod query;
pub mod repository;
pub mod session;

pub use crate::domain::events::{Request, Response};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
