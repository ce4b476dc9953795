//! Business classification and synthetic marketing-metric generation.
//!
//! Nothing here is stored: every report, headline and insight set is built
//! fresh from static tables and an injected random source.

mod app_config;
pub mod catalog;
pub mod classify;
mod config;
mod error;
pub mod generate;
pub mod market;
mod request;
pub mod templates;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use catalog::{BusinessType, CategoryProfile, LocationType};
pub use classify::{classify_business, classify_location};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, RequiredField, ValidationError};
pub use generate::{generate_report, list_supported_categories, regenerate_headline};
pub use market::market_insights;
pub use request::BusinessQuery;
pub use types::{
    CategoryCatalog, CompetitorAnalysis, GeneratedReport, HeadlineRegeneration, MarketInsights,
    SeoMetrics,
};
