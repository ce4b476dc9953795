use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{BusinessType, LocationType};

/// A freshly synthesized set of marketing metrics. Never stored.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedReport {
    /// Star rating in `[3.0, 5.0]`, one decimal place.
    pub rating: f64,
    pub reviews: u32,
    pub headline: String,
    pub business_type: BusinessType,
    pub location_type: LocationType,
    pub insights: Vec<&'static str>,
    pub competitor_analysis: CompetitorAnalysis,
    pub seo_metrics: SeoMetrics,
    /// Cosmetic; has no computational basis.
    pub confidence_score: u8,
    pub data_freshness: &'static str,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompetitorAnalysis {
    pub local_competitors: u8,
    pub market_share_percent: u8,
    pub competitive_advantage: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeoMetrics {
    pub local_search_ranking: u8,
    pub monthly_search_volume: u32,
    pub keyword_opportunities: u8,
    pub online_visibility_percent: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadlineRegeneration {
    pub headline: String,
    pub business_type: BusinessType,
    /// Up to two other renderings; never equal to `headline`.
    pub alternatives: Vec<String>,
    pub regenerated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryKeywords {
    pub business_type: BusinessType,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCatalog {
    /// Detectable categories in match priority order.
    pub categories: Vec<BusinessType>,
    pub template_count: usize,
    pub detection_keywords: Vec<CategoryKeywords>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonalTrends {
    pub peak: &'static str,
    pub low: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerDemographics {
    pub primary_age: &'static str,
    pub gender_split: &'static str,
    pub income_level: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketInsights {
    pub business_type: BusinessType,
    pub location_type: LocationType,
    pub trending_keywords: Vec<String>,
    pub seasonal_trends: SeasonalTrends,
    pub customer_demographics: CustomerDemographics,
    pub recommended_actions: &'static [&'static str],
}
