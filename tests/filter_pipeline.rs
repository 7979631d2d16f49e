use crop_dash::{Dataset, FilterSpec, Record, Schema, filter};
use std::collections::BTreeSet;

fn rec(state: &str, district: &str, year: i32, v: f64) -> Record {
    Record {
        state: state.into(),
        district: district.into(),
        year,
        values: vec![Some(v)],
    }
}

fn sample_dataset() -> Dataset {
    let schema = Schema::new(vec!["Rice PRODUCTION (1000 tons)".into()]);
    let records = vec![
        rec("Punjab", "Amritsar", 1999, 10.0),
        rec("Bihar", "Patna", 1999, 4.0),
        rec("Punjab", "Ludhiana", 2000, 12.0),
        rec("Bihar", "Gaya", 2001, 5.0),
        rec("Punjab", "Amritsar", 2001, 11.0),
    ];
    Dataset::from_parts(schema, records)
}

#[test]
fn default_spec_covers_everything_observed() {
    let ds = sample_dataset();
    let spec = FilterSpec::default_for(&ds);
    assert_eq!(
        spec.states,
        ["Bihar", "Punjab"]
            .iter()
            .map(|s| s.to_string())
            .collect::<BTreeSet<_>>()
    );
    assert_eq!((spec.year_min, spec.year_max), (1999, 2001));
}

#[test]
fn default_filter_is_identity_in_content_and_order() {
    let ds = sample_dataset();
    let spec = FilterSpec::default_for(&ds);
    let kept = filter(&ds, &spec);
    assert_eq!(kept, ds.records().to_vec());
}

#[test]
fn disjoint_state_set_yields_empty() {
    let ds = sample_dataset();
    let mut spec = FilterSpec::default_for(&ds);
    spec.states = ["Kerala".to_string(), "Assam".to_string()]
        .into_iter()
        .collect();
    assert!(filter(&ds, &spec).is_empty());
}

#[test]
fn empty_state_set_yields_empty_not_select_all() {
    let ds = sample_dataset();
    let mut spec = FilterSpec::default_for(&ds);
    spec.states.clear();
    assert!(filter(&ds, &spec).is_empty());
}

#[test]
fn year_bounds_are_inclusive_on_both_ends() {
    let ds = sample_dataset();
    let mut spec = FilterSpec::default_for(&ds);
    spec.year_min = 1999;
    spec.year_max = 2000;
    let kept = filter(&ds, &spec);
    assert_eq!(kept.len(), 3);
    assert!(kept.iter().all(|r| r.year == 1999 || r.year == 2000));
}

#[test]
fn kept_records_preserve_insertion_order() {
    let ds = sample_dataset();
    let mut spec = FilterSpec::default_for(&ds);
    spec.states = ["Punjab".to_string()].into_iter().collect();
    let kept = filter(&ds, &spec);
    let districts: Vec<&str> = kept.iter().map(|r| r.district.as_str()).collect();
    assert_eq!(districts, vec!["Amritsar", "Ludhiana", "Amritsar"]);
}

#[test]
fn filtering_is_pure_and_repeatable() {
    let ds = sample_dataset();
    let spec = FilterSpec::default_for(&ds);
    assert_eq!(filter(&ds, &spec), filter(&ds, &spec));
    // the dataset itself is untouched
    assert_eq!(ds.len(), 5);
}
