//! Marketing headline templates, ten per category.
//!
//! Every template contains one `{name}` and one `{location}` placeholder.

use crate::catalog::BusinessType;

pub const NAME_PLACEHOLDER: &str = "{name}";
pub const LOCATION_PLACEHOLDER: &str = "{location}";

const RESTAURANT: &[&str] = &[
    "Why {name} is {location}'s Hidden Culinary Gem in 2025",
    "{name}: The {location} Restaurant Everyone's Raving About",
    "5 Reasons Why {name} Dominates {location}'s Food Scene",
    "How {name} Became {location}'s Most Talked-About Dining Spot",
    "The Secret Behind {name}'s Success in {location}",
    "{name}: Revolutionizing {location}'s Restaurant Industry",
    "Why {location} Food Lovers Choose {name} Every Time",
    "The {name} Experience: Setting New Standards in {location}",
    "{name} Transforms {location}'s Dining Landscape in 2025",
    "From Local Favorite to {location} Legend: The {name} Story",
];

const RETAIL: &[&str] = &[
    "Why {name} is {location}'s Best Shopping Secret",
    "{name}: The {location} Store That's Changing Everything",
    "How {name} Became {location}'s Go-To Shopping Destination",
    "{name} Leads {location}'s Retail Revolution in 2025",
    "The {name} Difference: Why {location} Shoppers Love Us",
    "{name}: Your {location} Shopping Experience Redefined",
    "5 Ways {name} Outshines {location}'s Competition",
    "Why {name} is {location}'s Fastest-Growing Retailer",
    "{name} Sets New {location} Retail Standards",
    "The Success Formula Behind {name} in {location}",
];

const SERVICE: &[&str] = &[
    "Why {name} is {location}'s Most Trusted Service Provider",
    "{name}: The {location} Company That Delivers Excellence",
    "How {name} Became {location}'s #1 Choice for Quality Service",
    "{name} Transforms {location}'s Service Industry Standards",
    "The {name} Promise: Unmatched Service in {location}",
    "{name}: Setting {location}'s Gold Standard Since 2025",
    "Why {location} Residents Trust {name} Above All Others",
    "{name} Leads {location}'s Service Excellence Movement",
    "The Innovation Behind {name}'s {location} Success",
    "{name}: Where {location} Finds Reliable Solutions",
];

const HEALTHCARE: &[&str] = &[
    "Why {name} is {location}'s Most Trusted Healthcare Provider",
    "{name}: Transforming Healthcare in {location} Since 2025",
    "How {name} Became {location}'s Premier Medical Destination",
    "{name} Sets New Healthcare Standards in {location}",
    "The {name} Approach: Revolutionizing {location} Healthcare",
    "Why {location} Patients Choose {name} for Better Health",
    "{name}: Leading {location}'s Healthcare Innovation",
    "The Healing Touch of {name} in {location}",
    "{name} Brings World-Class Care to {location}",
    "How {name} is Changing Lives in {location}",
];

const FITNESS: &[&str] = &[
    "Why {name} is {location}'s Ultimate Fitness Destination",
    "{name}: Where {location} Gets Fit and Stays Strong",
    "How {name} Became {location}'s Fitness Game-Changer",
    "{name} Leads {location}'s Wellness Revolution",
    "The {name} Method: Transforming {location} Bodies",
    "Why {location} Athletes Train at {name}",
    "{name}: Building Stronger Communities in {location}",
    "The Success Behind {name}'s {location} Fitness Empire",
    "{name} Redefines Fitness Standards in {location}",
    "How {name} Motivates {location} to Reach New Heights",
];

const BEAUTY: &[&str] = &[
    "Why {name} is {location}'s Beauty Transformation Expert",
    "{name}: Where {location} Discovers True Beauty",
    "How {name} Became {location}'s Premier Beauty Destination",
    "{name} Sets {location}'s Beauty Trends for 2025",
    "The {name} Touch: Enhancing {location}'s Natural Beauty",
    "Why {location} Trusts {name} for Beauty Excellence",
    "{name}: Revolutionizing Beauty Standards in {location}",
    "The Art of Beauty: {name}'s {location} Success Story",
    "{name} Brings Luxury Beauty Services to {location}",
    "How {name} Makes {location} More Beautiful Every Day",
];

const AUTOMOTIVE: &[&str] = &[
    "Why {name} is {location}'s Most Trusted Auto Expert",
    "{name}: Keeping {location} Moving Since 2025",
    "How {name} Became {location}'s Go-To Auto Service",
    "{name} Drives {location}'s Automotive Excellence",
    "The {name} Guarantee: Superior Auto Care in {location}",
    "Why {location} Drivers Choose {name} Every Time",
    "{name}: Setting {location}'s Auto Service Standards",
    "The Engine Behind {name}'s {location} Success",
    "{name} Powers {location}'s Transportation Needs",
    "How {name} Keeps {location} on the Road",
];

const EDUCATION: &[&str] = &[
    "Why {name} is {location}'s Premier Learning Institution",
    "{name}: Shaping {location}'s Future Leaders",
    "How {name} Became {location}'s Educational Excellence Hub",
    "{name} Transforms Education in {location}",
    "The {name} Method: Inspiring {location} Students",
    "Why {location} Parents Choose {name} for Their Children",
    "{name}: Building Brighter Futures in {location}",
    "The Innovation Behind {name}'s {location} Success",
    "{name} Leads {location}'s Educational Revolution",
    "How {name} Empowers {location} Through Learning",
];

const TECHNOLOGY: &[&str] = &[
    "Why {name} is {location}'s Tech Innovation Leader",
    "{name}: Powering {location}'s Digital Future",
    "How {name} Became {location}'s Tech Solution Expert",
    "{name} Drives {location}'s Technology Revolution",
    "The {name} Edge: Advanced Tech Solutions in {location}",
    "Why {location} Businesses Trust {name} for Tech",
    "{name}: Connecting {location} to Tomorrow",
    "The Digital Transformation by {name} in {location}",
    "{name} Brings Cutting-Edge Tech to {location}",
    "How {name} Simplifies Technology for {location}",
];

const GENERAL: &[&str] = &[
    "Why {name} is {location}'s Best Kept Business Secret",
    "{name}: The {location} Company Everyone's Talking About",
    "How {name} Became {location}'s Success Story",
    "{name} Leads Innovation in {location}",
    "The {name} Difference: Excellence in {location}",
    "Why {location} Chooses {name} Above All Others",
    "{name}: Setting New Standards in {location}",
    "The Success Behind {name}'s {location} Growth",
    "{name} Transforms Business in {location}",
    "How {name} Became {location}'s Trusted Partner",
];

/// Templates for a category, falling back to the general pool when a
/// category has none of its own.
#[must_use]
pub fn headline_templates(business_type: BusinessType) -> &'static [&'static str] {
    let templates = match business_type {
        BusinessType::Restaurant => RESTAURANT,
        BusinessType::Retail => RETAIL,
        BusinessType::Service => SERVICE,
        BusinessType::Healthcare => HEALTHCARE,
        BusinessType::Fitness => FITNESS,
        BusinessType::Beauty => BEAUTY,
        BusinessType::Automotive => AUTOMOTIVE,
        BusinessType::Education => EDUCATION,
        BusinessType::Technology => TECHNOLOGY,
        BusinessType::General => GENERAL,
    };
    if templates.is_empty() {
        GENERAL
    } else {
        templates
    }
}

/// Total number of templates across every category.
#[must_use]
pub fn template_count() -> usize {
    BusinessType::ALL
        .iter()
        .map(|ty| headline_templates(*ty).len())
        .sum()
}

/// Substitute the first `{name}` and then the first `{location}` literally.
#[must_use]
pub fn render(template: &str, name: &str, location: &str) -> String {
    template
        .replacen(NAME_PLACEHOLDER, name, 1)
        .replacen(LOCATION_PLACEHOLDER, location, 1)
}
