//! Deterministic market-context lookups: search keywords, seasonality, and
//! audience demographics keyed by category and location tier.

use crate::catalog::{BusinessType, LocationType};
use crate::classify::{classify_business, classify_location};
use crate::request::BusinessQuery;
use crate::types::{CustomerDemographics, MarketInsights, SeasonalTrends};

pub const RECOMMENDED_ACTIONS: &[&str] = &[
    "Optimize Google Business Profile",
    "Encourage customer reviews",
    "Update business hours regularly",
    "Add high-quality photos",
    "Respond to customer inquiries promptly",
];

#[must_use]
pub fn seasonal_trends(business_type: BusinessType) -> SeasonalTrends {
    let (peak, low) = match business_type {
        BusinessType::Restaurant => ("December", "February"),
        BusinessType::Retail => ("November", "February"),
        BusinessType::Fitness => ("January", "December"),
        _ => ("Spring", "Winter"),
    };
    SeasonalTrends { peak, low }
}

#[must_use]
pub fn customer_demographics(
    business_type: BusinessType,
    location_type: LocationType,
) -> CustomerDemographics {
    let primary_age = match business_type {
        BusinessType::Fitness => "25-40",
        BusinessType::Beauty => "20-45",
        BusinessType::Healthcare => "30-65",
        _ => "25-55",
    };
    let gender_split = match business_type {
        BusinessType::Beauty => "80% Female",
        BusinessType::Automotive => "70% Male",
        _ => "50/50 Split",
    };
    CustomerDemographics {
        primary_age,
        gender_split,
        income_level: location_type.income_level(),
    }
}

#[must_use]
pub fn trending_keywords(name: &str, location: &str, business_type: BusinessType) -> Vec<String> {
    let ty = business_type.as_str();
    vec![
        format!("{name} {location}"),
        format!("best {ty} {location}"),
        format!("{location} {ty} reviews"),
        format!("top rated {ty} near me"),
        format!("{ty} services {location}"),
    ]
}

/// Build the full market context for a query. Involves no randomness.
#[must_use]
pub fn market_insights(query: &BusinessQuery) -> MarketInsights {
    let business_type = classify_business(query.name());
    let location_type = classify_location(query.location());

    MarketInsights {
        business_type,
        location_type,
        trending_keywords: trending_keywords(query.name(), query.location(), business_type),
        seasonal_trends: seasonal_trends(business_type),
        customer_demographics: customer_demographics(business_type, location_type),
        recommended_actions: RECOMMENDED_ACTIONS,
    }
}
