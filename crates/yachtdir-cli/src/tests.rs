use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["yachtdir-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_nearby_with_default_radius() {
    let cli = Cli::try_parse_from(["yachtdir-cli", "nearby", "--lat", "43.7102", "--lon", "7.262"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Nearby { radius_km, .. }) if (radius_km - 100.0).abs() < f64::EPSILON
    ));
}

#[test]
fn nearby_accepts_negative_coordinates() {
    let cli = Cli::try_parse_from([
        "yachtdir-cli",
        "nearby",
        "--lat",
        "25.7617",
        "--lon",
        "-80.1918",
        "--radius-km",
        "50",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Nearby { lon, radius_km, .. })
            if (lon + 80.1918).abs() < 1e-9 && (radius_km - 50.0).abs() < f64::EPSILON
    ));
}

#[test]
fn nearby_requires_both_coordinates() {
    assert!(Cli::try_parse_from(["yachtdir-cli", "nearby", "--lat", "43.7"]).is_err());
}

#[test]
fn parses_category_with_exclude_and_limit() {
    let cli = Cli::try_parse_from([
        "yachtdir-cli",
        "category",
        "Navigation Systems",
        "--exclude",
        "gulfstream-nav",
        "--limit",
        "3",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Category {
            ref category,
            lat: None,
            lon: None,
            exclude: Some(ref id),
            limit: 3,
            ..
        }) if category == "Navigation Systems" && id == "gulfstream-nav"
    ));
}

#[test]
fn category_lat_requires_lon() {
    assert!(
        Cli::try_parse_from(["yachtdir-cli", "category", "Lighting", "--lat", "43.7"]).is_err()
    );
}

#[test]
fn parses_export_and_sanitize() {
    let cli = Cli::try_parse_from(["yachtdir-cli", "export", "--tier", "admin"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Export { ref tier }) if tier == "admin"));

    let cli = Cli::try_parse_from(["yachtdir-cli", "sanitize", "--tier", "free", "update.json"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Sanitize { ref tier, ref file })
            if tier == "free" && file == &PathBuf::from("update.json")
    ));
}

#[test]
fn directory_flag_is_global() {
    let cli = Cli::try_parse_from(["yachtdir-cli", "validate", "--directory", "/tmp/dir.yaml"])
        .expect("expected valid cli args");
    assert_eq!(cli.directory, PathBuf::from("/tmp/dir.yaml"));
    assert!(matches!(cli.command, Some(Commands::Validate)));
}

#[test]
fn load_reads_fixture() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/directory.yaml");
    let directory = commands::load(&path).expect("fixture loads");
    assert_eq!(directory.vendors.len(), 5);
}
