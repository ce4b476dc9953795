//! Static business-category and location-tier tables.
//!
//! All data here is immutable and compiled in. Category order is significant:
//! classification walks [`BusinessType::DETECTION_ORDER`] and the first
//! category with a matching keyword wins.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Restaurant,
    Retail,
    Service,
    Healthcare,
    Fitness,
    Beauty,
    Automotive,
    Education,
    Technology,
    General,
}

/// Rating and review-count bounds plus canned insight strings for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryProfile {
    pub rating_min: f64,
    pub rating_max: f64,
    pub review_min: u32,
    pub review_max: u32,
    pub insights: &'static [&'static str],
}

impl BusinessType {
    /// Categories that can be detected from a name, in match priority order.
    /// `General` is the fallback and is intentionally absent.
    pub const DETECTION_ORDER: [BusinessType; 9] = [
        BusinessType::Restaurant,
        BusinessType::Retail,
        BusinessType::Service,
        BusinessType::Healthcare,
        BusinessType::Fitness,
        BusinessType::Beauty,
        BusinessType::Automotive,
        BusinessType::Education,
        BusinessType::Technology,
    ];

    pub const ALL: [BusinessType; 10] = [
        BusinessType::Restaurant,
        BusinessType::Retail,
        BusinessType::Service,
        BusinessType::Healthcare,
        BusinessType::Fitness,
        BusinessType::Beauty,
        BusinessType::Automotive,
        BusinessType::Education,
        BusinessType::Technology,
        BusinessType::General,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BusinessType::Restaurant => "restaurant",
            BusinessType::Retail => "retail",
            BusinessType::Service => "service",
            BusinessType::Healthcare => "healthcare",
            BusinessType::Fitness => "fitness",
            BusinessType::Beauty => "beauty",
            BusinessType::Automotive => "automotive",
            BusinessType::Education => "education",
            BusinessType::Technology => "technology",
            BusinessType::General => "general",
        }
    }

    /// Lowercase detection keywords, matched as substrings of the lowercased name.
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            BusinessType::Restaurant => &[
                "restaurant", "cafe", "bistro", "diner", "eatery", "kitchen", "grill", "bar",
                "pub", "food", "pizza", "burger", "sushi", "bakery", "coffee",
            ],
            BusinessType::Retail => &[
                "store", "shop", "boutique", "market", "mall", "outlet", "fashion", "clothing",
                "shoes", "electronics", "books", "toys", "jewelry", "furniture",
            ],
            BusinessType::Service => &[
                "service", "repair", "maintenance", "cleaning", "plumbing", "electrical",
                "construction", "landscaping", "consulting", "agency", "firm",
            ],
            BusinessType::Healthcare => &[
                "clinic", "hospital", "medical", "dental", "pharmacy", "therapy", "wellness",
                "health", "doctor", "dentist", "physiotherapy",
            ],
            BusinessType::Fitness => &[
                "gym", "fitness", "yoga", "pilates", "crossfit", "martial arts", "dance",
                "sports", "training", "wellness center",
            ],
            BusinessType::Beauty => &[
                "salon", "spa", "beauty", "hair", "nails", "massage", "skincare", "cosmetics",
                "barber", "aesthetics",
            ],
            BusinessType::Automotive => &[
                "auto", "car", "garage", "mechanic", "dealership", "tire", "oil change",
                "automotive", "vehicle", "motorcycle",
            ],
            BusinessType::Education => &[
                "school", "academy", "institute", "college", "university", "tutoring",
                "learning", "education", "training center",
            ],
            BusinessType::Technology => &[
                "tech", "software", "computer", "digital", "web", "app", "development",
                "programming", "systems",
            ],
            BusinessType::General => &[],
        }
    }

    #[must_use]
    pub fn profile(self) -> &'static CategoryProfile {
        match self {
            BusinessType::Restaurant => &RESTAURANT,
            BusinessType::Retail => &RETAIL,
            BusinessType::Service => &SERVICE,
            BusinessType::Healthcare => &HEALTHCARE,
            BusinessType::Fitness => &FITNESS,
            BusinessType::Beauty => &BEAUTY,
            BusinessType::Automotive => &AUTOMOTIVE,
            BusinessType::Education => &EDUCATION,
            BusinessType::Technology => &TECHNOLOGY,
            BusinessType::General => &GENERAL,
        }
    }

    /// The strength the competitor analysis attributes to this category.
    #[must_use]
    pub fn competitive_advantage(self) -> &'static str {
        match self {
            BusinessType::Service => "Response Time",
            BusinessType::Restaurant => "Menu Variety",
            BusinessType::Retail => "Product Selection",
            _ => "Customer Service",
        }
    }
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static RESTAURANT: CategoryProfile = CategoryProfile {
    rating_min: 4.0,
    rating_max: 4.8,
    review_min: 80,
    review_max: 800,
    insights: &[
        "Peak dining hours: 7-9 PM weekdays",
        "Most popular: Weekend brunch menu",
        "Top review keywords: 'fresh', 'authentic', 'cozy'",
        "Seasonal menu changes boost engagement",
        "Local ingredient sourcing appreciated",
    ],
};

static RETAIL: CategoryProfile = CategoryProfile {
    rating_min: 3.8,
    rating_max: 4.6,
    review_min: 50,
    review_max: 600,
    insights: &[
        "Peak shopping: Weekend afternoons",
        "High customer return rate: 68%",
        "Top categories: Seasonal collections",
        "Online presence drives foot traffic",
        "Customer service highly rated",
    ],
};

static SERVICE: CategoryProfile = CategoryProfile {
    rating_min: 4.2,
    rating_max: 4.9,
    review_min: 30,
    review_max: 400,
    insights: &[
        "Response time: Under 2 hours",
        "Customer satisfaction: 94%",
        "Repeat business rate: 78%",
        "Emergency services available",
        "Licensed and insured professionals",
    ],
};

static HEALTHCARE: CategoryProfile = CategoryProfile {
    rating_min: 4.3,
    rating_max: 4.9,
    review_min: 100,
    review_max: 1200,
    insights: &[
        "Average wait time: 15 minutes",
        "Patient satisfaction: 96%",
        "Same-day appointments available",
        "Comprehensive care approach",
        "Modern equipment and facilities",
    ],
};

static FITNESS: CategoryProfile = CategoryProfile {
    rating_min: 4.1,
    rating_max: 4.7,
    review_min: 60,
    review_max: 500,
    insights: &[
        "Peak hours: 6-8 AM, 6-8 PM",
        "Member retention rate: 82%",
        "Personal training popular",
        "Clean and well-maintained",
        "Supportive community atmosphere",
    ],
};

static BEAUTY: CategoryProfile = CategoryProfile {
    rating_min: 4.0,
    rating_max: 4.8,
    review_min: 40,
    review_max: 350,
    insights: &[
        "Booking rate: 95% advance",
        "Client retention: 85%",
        "Trending services: Organic treatments",
        "Skilled and certified staff",
        "Relaxing atmosphere praised",
    ],
};

static AUTOMOTIVE: CategoryProfile = CategoryProfile {
    rating_min: 4.2,
    rating_max: 4.8,
    review_min: 70,
    review_max: 450,
    insights: &[
        "Average service time: 2 hours",
        "Customer trust rating: 92%",
        "Warranty on all work",
        "Honest pricing appreciated",
        "Expert diagnostics available",
    ],
};

static EDUCATION: CategoryProfile = CategoryProfile {
    rating_min: 4.4,
    rating_max: 4.9,
    review_min: 90,
    review_max: 600,
    insights: &[
        "Student success rate: 94%",
        "Small class sizes maintained",
        "Experienced instructors",
        "Flexible scheduling options",
        "Strong community reputation",
    ],
};

static TECHNOLOGY: CategoryProfile = CategoryProfile {
    rating_min: 4.1,
    rating_max: 4.7,
    review_min: 25,
    review_max: 300,
    insights: &[
        "Project completion: On-time 96%",
        "Client satisfaction: 91%",
        "24/7 support available",
        "Cutting-edge solutions",
        "Competitive pricing model",
    ],
};

static GENERAL: CategoryProfile = CategoryProfile {
    rating_min: 3.9,
    rating_max: 4.6,
    review_min: 40,
    review_max: 400,
    insights: &[
        "Customer satisfaction: 89%",
        "Reliable service delivery",
        "Competitive market position",
        "Strong local presence",
        "Positive community impact",
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationType {
    Metropolitan,
    Suburban,
    SmallTown,
}

impl LocationType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LocationType::Metropolitan => "metropolitan",
            LocationType::Suburban => "suburban",
            LocationType::SmallTown => "smallTown",
        }
    }

    /// Known city names for this tier. Matched case-insensitively as substrings.
    #[must_use]
    pub fn cities(self) -> &'static [&'static str] {
        match self {
            LocationType::Metropolitan => &[
                "New York",
                "Los Angeles",
                "Chicago",
                "Houston",
                "Phoenix",
                "Philadelphia",
                "San Antonio",
                "San Diego",
                "Dallas",
                "San Jose",
            ],
            LocationType::Suburban => &[
                "Plano",
                "Irvine",
                "Fremont",
                "Scottsdale",
                "Gilbert",
                "Chandler",
                "Glendale",
                "Norfolk",
                "Chesapeake",
                "Garland",
            ],
            // Never consulted by the classifier; small town is the fallback tier.
            LocationType::SmallTown => &[
                "Salem",
                "Bend",
                "Flagstaff",
                "Missoula",
                "Burlington",
                "Asheville",
                "Boulder",
                "Santa Fe",
                "Park City",
                "Traverse City",
            ],
        }
    }

    /// Additive shift applied to both ends of a category's rating range.
    #[must_use]
    pub fn rating_modifier(self) -> f64 {
        match self {
            LocationType::Metropolitan => -0.1,
            LocationType::Suburban => 0.1,
            LocationType::SmallTown => 0.2,
        }
    }

    /// Review-count multiplier in tenths (1.5 → 15), kept integral so
    /// `floor(min * mult)` is exact.
    #[must_use]
    pub fn review_multiplier_tenths(self) -> u32 {
        match self {
            LocationType::Metropolitan => 15,
            LocationType::Suburban => 10,
            LocationType::SmallTown => 6,
        }
    }

    #[must_use]
    pub fn income_level(self) -> &'static str {
        match self {
            LocationType::Metropolitan => "Upper-Middle",
            LocationType::Suburban => "Middle",
            LocationType::SmallTown => "Middle-Lower",
        }
    }
}

impl std::fmt::Display for LocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
