//! Synthetic metric generation.
//!
//! Every generator takes the random source as `&mut R` where `R: Rng`, so
//! production code passes `rand::rng()` and tests pass a seeded `StdRng`.

use chrono::Utc;
use rand::Rng;

use crate::catalog::{BusinessType, LocationType};
use crate::classify::{classify_business, classify_location};
use crate::request::BusinessQuery;
use crate::templates::{headline_templates, render, template_count};
use crate::types::{
    CategoryCatalog, CategoryKeywords, CompetitorAnalysis, GeneratedReport, HeadlineRegeneration,
    SeoMetrics,
};

pub const RATING_FLOOR: f64 = 3.0;
pub const RATING_CEILING: f64 = 5.0;

const DATA_FRESHNESS: &str = "Real-time simulation";
const ALTERNATIVE_DRAWS: usize = 3;
const MAX_ALTERNATIVES: usize = 2;

/// Location-adjusted rating bounds, clamped to `[3.0, 5.0]`.
#[must_use]
pub fn rating_bounds(business_type: BusinessType, location_type: LocationType) -> (f64, f64) {
    let profile = business_type.profile();
    let shift = location_type.rating_modifier();
    let min = (profile.rating_min + shift).max(RATING_FLOOR);
    let max = (profile.rating_max + shift).min(RATING_CEILING);
    (min, max.max(min))
}

/// Location-adjusted review-count bounds, `floor(bound * multiplier)`.
#[must_use]
pub fn review_bounds(business_type: BusinessType, location_type: LocationType) -> (u32, u32) {
    let profile = business_type.profile();
    let tenths = location_type.review_multiplier_tenths();
    (
        profile.review_min * tenths / 10,
        profile.review_max * tenths / 10,
    )
}

/// Uniform rating within [`rating_bounds`], rounded to one decimal place.
pub fn generate_rating<R: Rng + ?Sized>(
    rng: &mut R,
    business_type: BusinessType,
    location_type: LocationType,
) -> f64 {
    let (min, max) = rating_bounds(business_type, location_type);
    let raw = rng.random_range(min..=max);
    (raw * 10.0).round() / 10.0
}

pub fn generate_review_count<R: Rng + ?Sized>(
    rng: &mut R,
    business_type: BusinessType,
    location_type: LocationType,
) -> u32 {
    let (min, max) = review_bounds(business_type, location_type);
    rng.random_range(min..=max)
}

/// Pick one of the category's templates uniformly and fill in name and location.
pub fn generate_headline<R: Rng + ?Sized>(
    rng: &mut R,
    name: &str,
    location: &str,
    business_type: BusinessType,
) -> String {
    let templates = headline_templates(business_type);
    let template = templates[rng.random_range(0..templates.len())];
    render(template, name, location)
}

/// Draw two to four distinct insights for the category.
///
/// Draws repeatedly from the whole list and discards repeats until enough
/// distinct strings are collected. This is not a uniform subset sample.
pub fn generate_insights<R: Rng + ?Sized>(
    rng: &mut R,
    business_type: BusinessType,
) -> Vec<&'static str> {
    let pool = business_type.profile().insights;
    let wanted = rng.random_range(2..=4usize).min(pool.len());

    let mut picked = Vec::with_capacity(wanted);
    while picked.len() < wanted {
        let candidate = pool[rng.random_range(0..pool.len())];
        if !picked.contains(&candidate) {
            picked.push(candidate);
        }
    }
    picked
}

pub fn generate_competitor_analysis<R: Rng + ?Sized>(
    rng: &mut R,
    business_type: BusinessType,
) -> CompetitorAnalysis {
    CompetitorAnalysis {
        local_competitors: rng.random_range(3..=10),
        market_share_percent: rng.random_range(10..=35),
        competitive_advantage: business_type.competitive_advantage(),
    }
}

pub fn generate_seo_metrics<R: Rng + ?Sized>(rng: &mut R) -> SeoMetrics {
    SeoMetrics {
        local_search_ranking: rng.random_range(1..=5),
        monthly_search_volume: rng.random_range(500..=2500),
        keyword_opportunities: rng.random_range(5..=20),
        online_visibility_percent: rng.random_range(60..=90),
    }
}

/// Classify the query and synthesize a complete report.
pub fn generate_report<R: Rng + ?Sized>(rng: &mut R, query: &BusinessQuery) -> GeneratedReport {
    let business_type = classify_business(query.name());
    let location_type = classify_location(query.location());

    GeneratedReport {
        rating: generate_rating(rng, business_type, location_type),
        reviews: generate_review_count(rng, business_type, location_type),
        headline: generate_headline(rng, query.name(), query.location(), business_type),
        business_type,
        location_type,
        insights: generate_insights(rng, business_type),
        competitor_analysis: generate_competitor_analysis(rng, business_type),
        seo_metrics: generate_seo_metrics(rng),
        confidence_score: rng.random_range(80..=100),
        data_freshness: DATA_FRESHNESS,
        last_updated: Utc::now(),
    }
}

/// Draw a fresh headline plus up to two alternatives that differ from it.
pub fn regenerate_headline<R: Rng + ?Sized>(
    rng: &mut R,
    query: &BusinessQuery,
) -> HeadlineRegeneration {
    let business_type = classify_business(query.name());
    let headline = generate_headline(rng, query.name(), query.location(), business_type);

    let mut alternatives = Vec::with_capacity(MAX_ALTERNATIVES);
    for _ in 0..ALTERNATIVE_DRAWS {
        let candidate = generate_headline(rng, query.name(), query.location(), business_type);
        if candidate != headline && alternatives.len() < MAX_ALTERNATIVES {
            alternatives.push(candidate);
        }
    }

    HeadlineRegeneration {
        headline,
        business_type,
        alternatives,
        regenerated_at: Utc::now(),
    }
}

/// Detectable categories, their keywords, and the total template count.
#[must_use]
pub fn list_supported_categories() -> CategoryCatalog {
    CategoryCatalog {
        categories: BusinessType::DETECTION_ORDER.to_vec(),
        template_count: template_count(),
        detection_keywords: BusinessType::DETECTION_ORDER
            .iter()
            .map(|ty| CategoryKeywords {
                business_type: *ty,
                keywords: ty.keywords(),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
