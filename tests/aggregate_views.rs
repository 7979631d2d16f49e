use crop_dash::views::{to_choropleth, to_grouped_bars, to_summary_table, to_time_series};
use crop_dash::{
    DashError, Dataset, Dimension, FilterSpec, GroupBy, MetricSelection, Record, Schema,
    aggregate, filter, render_views,
};

const PROD: &str = "Rice PRODUCTION (1000 tons)";

fn rec(state: &str, district: &str, year: i32, values: &[Option<f64>]) -> Record {
    Record {
        state: state.into(),
        district: district.into(),
        year,
        values: values.to_vec(),
    }
}

/// Two states, two years: A/2000=10, A/2001=20, B/2000=5, B/2001=5.
fn scenario_dataset() -> Dataset {
    let schema = Schema::new(vec![PROD.into()]);
    let records = vec![
        rec("A", "A1", 2000, &[Some(10.0)]),
        rec("A", "A1", 2001, &[Some(20.0)]),
        rec("B", "B1", 2000, &[Some(5.0)]),
        rec("B", "B2", 2001, &[Some(5.0)]),
    ];
    Dataset::from_parts(schema, records)
}

#[test]
fn aggregate_single_state_full_range() {
    let ds = scenario_dataset();
    let mut spec = FilterSpec::default_for(&ds);
    spec.states = ["A".to_string()].into_iter().collect();
    let kept = filter(&ds, &spec);

    let view = aggregate(&kept, ds.schema(), GroupBy::State, PROD).unwrap();
    assert_eq!(view.totals.len(), 1);
    assert_eq!(view.totals["A"], 30.0);
}

#[test]
fn aggregate_both_states_single_year() {
    let ds = scenario_dataset();
    let mut spec = FilterSpec::default_for(&ds);
    spec.year_min = 2001;
    spec.year_max = 2001;
    let kept = filter(&ds, &spec);

    let view = aggregate(&kept, ds.schema(), GroupBy::State, PROD).unwrap();
    assert_eq!(view.totals.len(), 2);
    assert_eq!(view.totals["A"], 20.0);
    assert_eq!(view.totals["B"], 5.0);
}

#[test]
fn per_group_sums_conserve_the_column_total() {
    let ds = scenario_dataset();
    let kept = filter(&ds, &FilterSpec::default_for(&ds));

    let total_in: f64 = kept.iter().map(|r| r.value_at(0)).sum();
    for group_by in [GroupBy::State, GroupBy::District] {
        let view = aggregate(&kept, ds.schema(), group_by, PROD).unwrap();
        let total_out: f64 = view.totals.values().sum();
        assert!((total_in - total_out).abs() < 1e-9);
    }
}

#[test]
fn unknown_column_is_an_error_not_empty_output() {
    let ds = scenario_dataset();
    let err = aggregate(ds.records(), ds.schema(), GroupBy::State, "Wheat AREA (1000 ha)")
        .unwrap_err();
    match err {
        DashError::UnknownColumn(col) => assert_eq!(col, "Wheat AREA (1000 ha)"),
        other => panic!("expected UnknownColumn, got {:?}", other),
    }
}

#[test]
fn all_missing_group_still_appears_with_zero_total() {
    let schema = Schema::new(vec![PROD.into()]);
    let ds = Dataset::from_parts(
        schema,
        vec![
            rec("A", "A1", 2000, &[Some(7.0)]),
            rec("B", "B1", 2000, &[None]),
            rec("B", "B2", 2001, &[None]),
        ],
    );
    let view = aggregate(ds.records(), ds.schema(), GroupBy::State, PROD).unwrap();
    assert_eq!(view.totals["A"], 7.0);
    assert_eq!(view.totals["B"], 0.0);
}

#[test]
fn time_series_has_no_synthesized_years() {
    let schema = Schema::new(vec![PROD.into()]);
    let ds = Dataset::from_parts(
        schema,
        vec![
            rec("A", "A1", 2002, &[Some(3.0)]),
            rec("A", "A1", 2000, &[Some(1.0)]),
            rec("A", "A2", 2000, &[Some(2.0)]),
        ],
    );
    let series = to_time_series(ds.records(), ds.schema(), PROD).unwrap();
    assert_eq!(series, vec![(2000, 3.0), (2002, 3.0)]);
}

#[test]
fn grouped_bars_sort_ascending_by_key() {
    let ds = scenario_dataset();
    let view = aggregate(ds.records(), ds.schema(), GroupBy::District, PROD).unwrap();
    let bars = to_grouped_bars(&view);
    let keys: Vec<&str> = bars.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["A1", "B1", "B2"]);
}

#[test]
fn summary_table_follows_dataset_column_order() {
    let schema = Schema::new(vec![
        "Rice AREA (1000 ha)".into(),
        PROD.into(),
        "Rice YIELD (Kg per ha)".into(),
    ]);
    let ds = Dataset::from_parts(
        schema,
        vec![
            rec("A", "A1", 2000, &[Some(1.0), Some(10.0), Some(100.0)]),
            rec("A", "A2", 2000, &[Some(2.0), None, Some(200.0)]),
        ],
    );
    let table = to_summary_table(ds.records(), ds.schema());
    assert_eq!(
        table,
        vec![
            ("Rice AREA (1000 ha)".to_string(), 3.0),
            (PROD.to_string(), 10.0),
            ("Rice YIELD (Kg per ha)".to_string(), 300.0),
        ]
    );
}

#[test]
fn summary_table_skips_non_suffix_columns() {
    // Real district-wise CSVs carry code columns next to the crop triplets.
    let schema = Schema::new(vec![
        "Dist Code".into(),
        PROD.into(),
        "State Code".into(),
    ]);
    let ds = Dataset::from_parts(
        schema,
        vec![
            rec("A", "A1", 2000, &[Some(101.0), Some(10.0), Some(28.0)]),
            rec("A", "A2", 2000, &[Some(102.0), Some(5.0), Some(28.0)]),
        ],
    );
    let table = to_summary_table(ds.records(), ds.schema());
    assert_eq!(table, vec![(PROD.to_string(), 15.0)]);
}

#[test]
fn choropleth_is_keyed_by_state() {
    let ds = scenario_dataset();
    let pairs = to_choropleth(ds.records(), ds.schema(), PROD).unwrap();
    assert_eq!(
        pairs,
        vec![("A".to_string(), 30.0), ("B".to_string(), 10.0)]
    );
}

#[test]
fn empty_input_yields_empty_views_without_panicking() {
    let ds = scenario_dataset();
    let empty: Vec<Record> = Vec::new();
    assert!(to_summary_table(&empty, ds.schema()).iter().all(|(_, v)| *v == 0.0));
    assert!(to_time_series(&empty, ds.schema(), PROD).unwrap().is_empty());
    assert!(to_choropleth(&empty, ds.schema(), PROD).unwrap().is_empty());
    let view = aggregate(&empty, ds.schema(), GroupBy::State, PROD).unwrap();
    assert!(view.totals.is_empty());
}

#[test]
fn full_pipeline_is_idempotent() {
    let ds = scenario_dataset();
    let spec = FilterSpec::default_for(&ds);
    let selection = MetricSelection {
        crop: "Rice".into(),
        dimension: Dimension::Production,
        group_by: GroupBy::State,
    };
    let first = render_views(&ds, &spec, &selection).unwrap();
    let second = render_views(&ds, &spec, &selection).unwrap();
    assert_eq!(first, second);
    // only the production column exists, so exactly one trend series
    assert_eq!(first.trends.len(), 1);
    assert_eq!(first.trends[0].column, PROD);
    assert_eq!(first.trends[0].points, vec![(2000, 15.0), (2001, 25.0)]);
    assert_eq!(first.comparison, first.choropleth);
}

#[test]
fn render_views_rejects_unknown_crop_up_front() {
    let ds = scenario_dataset();
    let spec = FilterSpec::default_for(&ds);
    let selection = MetricSelection {
        crop: "Sugarcane".into(),
        dimension: Dimension::Yield,
        group_by: GroupBy::State,
    };
    let err = render_views(&ds, &spec, &selection).unwrap_err();
    assert!(matches!(err, DashError::UnknownColumn(_)));
}
