//! End-to-end tests for the public entry points: default catalog → candidates → ranking.

use approx::assert_relative_eq;
use resistor_combo::*;

fn expressions(matches: &[Match]) -> Vec<&str> {
    matches.iter().map(|m| m.expression.as_str()).collect()
}

#[test]
fn default_catalog_shape() {
    let catalog = Catalog::build(&SeriesConfig::default()).unwrap();
    assert_eq!(catalog.len(), 84);
    let values: Vec<f64> = catalog.values().collect();
    assert_relative_eq!(values[12], 10.0);
    assert_relative_eq!(values[36 + 8], 4700.0, max_relative = 1e-12);

    let candidates = build_catalog_and_candidates().unwrap();
    assert_eq!(candidates.leaf_count(), 84);
    assert_eq!(candidates.len(), 3482);
}

#[test]
fn nearest_to_one_kilohm() {
    let candidates = build_catalog_and_candidates().unwrap();
    let matches = find_nearest(&candidates, 1000.0, DEFAULT_MATCHES).unwrap();
    assert_eq!(matches.len(), 10);
    assert_relative_eq!(matches.target(), 1000.0);

    let top = matches.iter().next().unwrap();
    assert_eq!(top.rank, 1);
    for (_, c) in candidates.iter() {
        assert!((c.value() - 1000.0).abs() >= top.distance);
    }
    assert_relative_eq!(top.distance, 10.0, epsilon = 1e-9);
    assert_eq!(
        expressions(matches.best()),
        vec!["(680.00+330.00)", "(810.00+180.00)", "(2200.00||1800.00)"]
    );
}

#[test]
fn report_lines() {
    let candidates = build_catalog_and_candidates().unwrap();
    let matches = find_nearest(&candidates, 1000.0, 2).unwrap();
    assert_eq!(
        matches.to_string(),
        "1: 1000.00 is 1010.00\n  Construction: (680.00+330.00)\n\
         2: 1000.00 is 990.00\n  Construction: (810.00+180.00)\n"
    );
    let si = format!("{:#}", matches);
    assert!(si.contains("Construction: (680.00+330.00)"));
}

#[test]
fn k_boundaries() {
    let candidates = build_catalog_and_candidates().unwrap();
    assert!(find_nearest(&candidates, 470.0, 0).unwrap().is_empty());
    let all = find_nearest(&candidates, 470.0, candidates.len()).unwrap();
    assert_eq!(all.len(), candidates.len());
    assert_eq!(
        find_nearest(&candidates, 470.0, candidates.len() + 1).unwrap_err(),
        Error::InsufficientCandidates {
            requested: candidates.len() + 1,
            available: candidates.len(),
        }
    );
}

#[test]
fn targets_are_validated_before_selection() {
    let candidates = build_catalog_and_candidates().unwrap();
    assert_eq!(
        find_nearest(&candidates, -1.0, 100_000).unwrap_err(),
        Error::InvalidTarget(-1.0)
    );
    assert!(matches!(
        find_nearest(&candidates, f64::NAN, 1),
        Err(Error::InvalidTarget(_))
    ));
}

#[test]
fn parsed_targets_feed_the_selector() {
    let candidates = build_catalog_and_candidates().unwrap();
    let a = find_nearest(&candidates, parse_target("4k7").unwrap(), 3)
        .unwrap()
        .into_vec();
    let b = find_nearest(&candidates, parse_target("4.7k").unwrap(), 3)
        .unwrap()
        .into_vec();
    assert_eq!(expressions(&a), expressions(&b));
}

#[test]
fn hand_built_networks_render() {
    let mut net = Network::new();
    let a = net.leaf(100.0).unwrap();
    let b = net.leaf(1.2).unwrap();
    let s = net.combine(Kind::Series, a, b).unwrap();
    let p = net.combine(Kind::Parallel, a, b).unwrap();
    let both = net.combine(Kind::Series, s, p).unwrap();
    assert_eq!(net.render(a).unwrap(), "100.00");
    assert_eq!(net.render(s).unwrap(), "(100.00+1.20)");
    assert_eq!(net.render(p).unwrap(), "(100.00||1.20)");
    assert_eq!(
        net.expr(both).unwrap().to_string(),
        "((100.00+1.20)+(100.00||1.20))"
    );
}
