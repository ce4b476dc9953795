//! First-match keyword classification of business names and locations.

use crate::catalog::{BusinessType, LocationType};

/// Infer a business category from its name.
///
/// Walks [`BusinessType::DETECTION_ORDER`] and returns the first category
/// with a keyword contained in the lowercased name, or `General`.
#[must_use]
pub fn classify_business(name: &str) -> BusinessType {
    let name = name.to_lowercase();
    BusinessType::DETECTION_ORDER
        .into_iter()
        .find(|ty| ty.keywords().iter().any(|kw| name.contains(kw)))
        .unwrap_or(BusinessType::General)
}

/// Infer a location tier from known city names.
///
/// Metropolitan cities are checked before suburban ones; anything else is
/// treated as a small town.
#[must_use]
pub fn classify_location(location: &str) -> LocationType {
    let location = location.to_lowercase();
    let matches = |tier: LocationType| {
        tier.cities()
            .iter()
            .any(|city| location.contains(&city.to_lowercase()))
    };

    if matches(LocationType::Metropolitan) {
        LocationType::Metropolitan
    } else if matches(LocationType::Suburban) {
        LocationType::Suburban
    } else {
        LocationType::SmallTown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pizza_kitchen_is_restaurant() {
        assert_eq!(
            classify_business("Tony's Pizza Kitchen"),
            BusinessType::Restaurant
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify_business("DOWNTOWN DENTAL"), BusinessType::Healthcare);
        assert_eq!(classify_business("Zen Yoga"), BusinessType::Fitness);
    }

    #[test]
    fn each_category_detects_its_own_keyword() {
        let cases = [
            ("Blue Door Bistro", BusinessType::Restaurant),
            ("Corner Boutique", BusinessType::Retail),
            ("Ace Plumbing", BusinessType::Service),
            ("Lakeside Clinic", BusinessType::Healthcare),
            ("Iron Gym", BusinessType::Fitness),
            ("Glow Salon", BusinessType::Beauty),
            ("Precision Garage", BusinessType::Automotive),
            ("Maple Academy", BusinessType::Education),
            ("Nimbus Software", BusinessType::Technology),
        ];
        for (name, expected) in cases {
            assert_eq!(classify_business(name), expected, "for {name}");
        }
    }

    #[test]
    fn earlier_category_wins_on_overlap() {
        // "coffee" (restaurant) beats "shop" (retail).
        assert_eq!(classify_business("Coffee Shop"), BusinessType::Restaurant);
        // "wellness" (healthcare) beats "wellness center" (fitness).
        assert_eq!(
            classify_business("Harmony Wellness Center"),
            BusinessType::Healthcare
        );
        // "training" (fitness) beats "training center" (education).
        assert_eq!(
            classify_business("Elite Training Center"),
            BusinessType::Fitness
        );
    }

    #[test]
    fn unmatched_name_is_general() {
        assert_eq!(classify_business("Acme Holdings"), BusinessType::General);
        assert_eq!(classify_business("Smith & Sons"), BusinessType::General);
    }

    #[test]
    fn new_york_is_metropolitan() {
        assert_eq!(classify_location("New York"), LocationType::Metropolitan);
        assert_eq!(
            classify_location("downtown chicago, il"),
            LocationType::Metropolitan
        );
    }

    #[test]
    fn suburban_city_is_suburban() {
        assert_eq!(classify_location("Plano, TX"), LocationType::Suburban);
    }

    #[test]
    fn metropolitan_checked_before_suburban() {
        assert_eq!(
            classify_location("Glendale near Los Angeles"),
            LocationType::Metropolitan
        );
    }

    #[test]
    fn unknown_location_is_small_town() {
        assert_eq!(classify_location("Bend, OR"), LocationType::SmallTown);
        assert_eq!(classify_location("Nowhere"), LocationType::SmallTown);
    }
}
