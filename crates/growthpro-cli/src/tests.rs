use super::*;

#[test]
fn parses_report_command() {
    let cli = Cli::try_parse_from([
        "growthpro",
        "report",
        "--name",
        "Tony's Pizza Kitchen",
        "--location",
        "New York",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Report(BusinessArgs { ref name, ref location, seed: None })
            if name == "Tony's Pizza Kitchen" && location == "New York"
    ));
}

#[test]
fn parses_headline_with_seed() {
    let cli = Cli::try_parse_from([
        "growthpro",
        "headline",
        "--name",
        "Glow Salon",
        "--location",
        "Plano",
        "--seed",
        "7",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Headline(BusinessArgs { seed: Some(7), .. })
    ));
}

#[test]
fn parses_categories_command() {
    let cli = Cli::try_parse_from(["growthpro", "categories"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Categories));
}

#[test]
fn report_requires_location() {
    let result = Cli::try_parse_from(["growthpro", "report", "--name", "Joe's Pizza"]);
    assert!(result.is_err());
}

#[test]
fn blank_name_is_rejected_by_validation() {
    let args = BusinessArgs {
        name: "  ".to_string(),
        location: "NYC".to_string(),
        seed: None,
    };
    let err = args.query().unwrap_err();
    assert_eq!(err.to_string(), "Business name is required");
}

#[test]
fn seeded_runs_are_reproducible() {
    let args = BusinessArgs {
        name: "Nimbus Software".to_string(),
        location: "Irvine".to_string(),
        seed: Some(1234),
    };
    let query = args.query().unwrap();
    let a = generate_report(&mut args.rng(), &query);
    let b = generate_report(&mut args.rng(), &query);
    assert_eq!(a.headline, b.headline);
    assert_eq!(a.reviews, b.reviews);
    assert_eq!(a.insights, b.insights);
}
