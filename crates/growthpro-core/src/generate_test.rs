use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn tonys() -> BusinessQuery {
    BusinessQuery::new("Tony's Pizza Kitchen", "New York").unwrap()
}

fn has_one_decimal(value: f64) -> bool {
    let scaled = value * 10.0;
    (scaled - scaled.round()).abs() < 1e-9
}

#[test]
fn rating_bounds_apply_location_shift() {
    let (min, max) = rating_bounds(BusinessType::Restaurant, LocationType::Metropolitan);
    assert!((min - 3.9).abs() < 1e-9, "min was {min}");
    assert!((max - 4.7).abs() < 1e-9, "max was {max}");
}

#[test]
fn rating_bounds_clamp_to_five() {
    // education 4.4–4.9, small town +0.2 → ceiling clamps at 5.0.
    let (_, max) = rating_bounds(BusinessType::Education, LocationType::SmallTown);
    assert!((max - RATING_CEILING).abs() < 1e-9, "max was {max}");
}

#[test]
fn review_bounds_scale_exactly() {
    assert_eq!(
        review_bounds(BusinessType::Restaurant, LocationType::Metropolitan),
        (120, 1200)
    );
    assert_eq!(
        review_bounds(BusinessType::Restaurant, LocationType::Suburban),
        (80, 800)
    );
    assert_eq!(
        review_bounds(BusinessType::Beauty, LocationType::SmallTown),
        (24, 210)
    );
    assert_eq!(
        review_bounds(BusinessType::Technology, LocationType::Metropolitan),
        (37, 450)
    );
}

#[test]
fn ratings_stay_in_bounds_with_one_decimal() {
    let mut rng = seeded(7);
    for ty in BusinessType::ALL {
        for loc in [
            LocationType::Metropolitan,
            LocationType::Suburban,
            LocationType::SmallTown,
        ] {
            let (min, max) = rating_bounds(ty, loc);
            for _ in 0..200 {
                let r = generate_rating(&mut rng, ty, loc);
                assert!((RATING_FLOOR..=RATING_CEILING).contains(&r), "{r}");
                assert!(r >= min - 0.05 && r <= max + 0.05, "{r} outside {min}..{max}");
                assert!(has_one_decimal(r), "{r} has more than one decimal");
            }
        }
    }
}

#[test]
fn review_counts_stay_in_bounds() {
    let mut rng = seeded(11);
    for ty in BusinessType::ALL {
        for loc in [
            LocationType::Metropolitan,
            LocationType::Suburban,
            LocationType::SmallTown,
        ] {
            let (min, max) = review_bounds(ty, loc);
            for _ in 0..200 {
                let n = generate_review_count(&mut rng, ty, loc);
                assert!((min..=max).contains(&n), "{n} outside {min}..={max}");
            }
        }
    }
}

#[test]
fn headline_contains_name_and_location() {
    let mut rng = seeded(3);
    for _ in 0..50 {
        let h = generate_headline(
            &mut rng,
            "Tony's Pizza Kitchen",
            "New York",
            BusinessType::Restaurant,
        );
        assert!(h.contains("Tony's Pizza Kitchen"), "{h}");
        assert!(h.contains("New York"), "{h}");
        assert!(!h.contains("{name}") && !h.contains("{location}"), "{h}");
    }
}

#[test]
fn headline_comes_from_category_pool() {
    let mut rng = seeded(5);
    let pool: Vec<String> = headline_templates(BusinessType::Fitness)
        .iter()
        .map(|t| render(t, "N", "L"))
        .collect();
    for _ in 0..50 {
        let h = generate_headline(&mut rng, "N", "L", BusinessType::Fitness);
        assert!(pool.contains(&h), "{h} not a fitness headline");
    }
}

#[test]
fn insights_are_distinct_and_sized() {
    let mut rng = seeded(13);
    for ty in BusinessType::ALL {
        let pool = ty.profile().insights;
        for _ in 0..100 {
            let insights = generate_insights(&mut rng, ty);
            assert!((2..=4).contains(&insights.len()), "{}", insights.len());
            for (i, a) in insights.iter().enumerate() {
                assert!(pool.contains(a));
                assert!(!insights[i + 1..].contains(a), "duplicate insight {a}");
            }
        }
    }
}

#[test]
fn competitor_and_seo_ranges() {
    let mut rng = seeded(17);
    for _ in 0..500 {
        let c = generate_competitor_analysis(&mut rng, BusinessType::Service);
        assert!((3..=10).contains(&c.local_competitors));
        assert!((10..=35).contains(&c.market_share_percent));
        assert_eq!(c.competitive_advantage, "Response Time");

        let s = generate_seo_metrics(&mut rng);
        assert!((1..=5).contains(&s.local_search_ranking));
        assert!((500..=2500).contains(&s.monthly_search_volume));
        assert!((5..=20).contains(&s.keyword_opportunities));
        assert!((60..=90).contains(&s.online_visibility_percent));
    }
}

#[test]
fn report_for_tonys_pizza_kitchen() {
    let mut rng = seeded(42);
    let report = generate_report(&mut rng, &tonys());

    assert_eq!(report.business_type, BusinessType::Restaurant);
    assert_eq!(report.location_type, LocationType::Metropolitan);
    assert!((3.0..=4.8).contains(&report.rating), "{}", report.rating);
    assert!((120..=1200).contains(&report.reviews), "{}", report.reviews);
    assert!(report.headline.contains("Tony's Pizza Kitchen"));
    assert!(report.headline.contains("New York"));
    assert!((80..=100).contains(&report.confidence_score));
    assert_eq!(report.competitor_analysis.competitive_advantage, "Menu Variety");
}

#[test]
fn same_seed_gives_same_report() {
    let a = generate_report(&mut seeded(99), &tonys());
    let b = generate_report(&mut seeded(99), &tonys());

    assert_eq!(a.rating.to_bits(), b.rating.to_bits());
    assert_eq!(a.reviews, b.reviews);
    assert_eq!(a.headline, b.headline);
    assert_eq!(a.insights, b.insights);
    assert_eq!(a.competitor_analysis, b.competitor_analysis);
    assert_eq!(a.seo_metrics, b.seo_metrics);
    assert_eq!(a.confidence_score, b.confidence_score);
}

#[test]
fn alternatives_never_repeat_primary() {
    let query = tonys();
    for seed in 0..200 {
        let regen = regenerate_headline(&mut seeded(seed), &query);
        assert!(regen.alternatives.len() <= 2);
        assert!(
            !regen.alternatives.contains(&regen.headline),
            "seed {seed}: alternatives contain primary headline"
        );
        assert_eq!(regen.business_type, BusinessType::Restaurant);
    }
}

#[test]
fn catalog_lists_detectable_categories_in_order() {
    let catalog = list_supported_categories();
    assert_eq!(catalog.categories.len(), 9);
    assert_eq!(catalog.categories[0], BusinessType::Restaurant);
    assert_eq!(catalog.categories[8], BusinessType::Technology);
    assert!(!catalog.categories.contains(&BusinessType::General));
    assert_eq!(catalog.template_count, 100);
    assert_eq!(catalog.detection_keywords.len(), 9);
    assert!(catalog.detection_keywords[0].keywords.contains(&"pizza"));
}

#[test]
fn report_serializes_with_snake_case_fields() {
    let report = generate_report(&mut seeded(1), &tonys());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["business_type"], "restaurant");
    assert_eq!(json["location_type"], "metropolitan");
    assert!(json["competitor_analysis"]["local_competitors"].is_u64());
    assert!(json["seo_metrics"]["online_visibility_percent"].is_u64());
    assert_eq!(json["data_freshness"], "Real-time simulation");
}
