pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{EngineConfig, TomlConfig};
pub use core::{engine::Engine, session::Session};
pub use domain::events::{Request, Response};
pub use domain::model::{
    Continent, ContinentFilter, Country, CountryFilter, Region, RegionFilter,
};
pub use utils::error::{AppError, Result};
