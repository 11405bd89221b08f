use finrec_dash::chart::{
    build_dual_axis, build_pie, ChartSpec, DualAxisChartConfig, DualAxisRecord, PieChartConfig,
    PieRecord,
};
use finrec_dash::DashError;

#[test]
fn test_nationality_pie_from_defaults() {
    let spec = PieChartConfig::default().build().unwrap();

    assert_eq!(spec.title, "국적별 분포");
    assert_eq!(
        spec.labels(),
        vec!["중국", "베트남", "네팔", "우즈베키스탄", "기타 국가"]
    );
    assert_eq!(
        spec.colors(),
        vec!["#008060", "#06D6A0", "#A7F3D0", "#4CBB17", "#B7E4C7"]
    );
    assert_eq!(spec.text_position, "inside");
    assert_eq!(spec.text_info, "label+percent");
    assert_eq!(spec.slices[4].text, "기타 국가 41.4%");

    let total: f64 = spec.fractions().iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_pie_percentages_are_not_normalized() {
    let spec = build_pie(&[
        PieRecord::new("중국", 33.0, 45.0),
        PieRecord::new("베트남", 17.0, 22.8),
    ])
    .unwrap();

    // Values stay literal; only the drawn share is relative
    assert_eq!(spec.values(), vec![33.0, 17.0]);
    assert!((spec.fractions()[0] - 0.66).abs() < 1e-9);
}

#[test]
fn test_visa_chart_from_defaults() {
    let spec = DualAxisChartConfig::default().build().unwrap();

    assert_eq!(spec.categories.len(), 5);
    assert_eq!(spec.bars.values[0], 517_399);
    assert_eq!(spec.bars.colors[0], "#504A8F");
    assert_eq!(spec.bars.text_position, "outside");
    assert_eq!(spec.line.mode, "lines+markers+text");
    assert_eq!(spec.line.color, "red");
    assert_eq!(spec.y2_axis.range, Some([0.0, 40.0]));
    assert_eq!(spec.template, "simple_white");
    assert_eq!((spec.width, spec.height), (950, 700));
}

#[test]
fn test_caller_supplied_secondary_range() {
    let records = vec![
        DualAxisRecord::new("A", 10, 60.0),
        DualAxisRecord::new("B", 20, 40.0),
    ];
    let spec = build_dual_axis(&records, 80.0).unwrap();
    assert_eq!(spec.y2_axis.range, Some([0.0, 80.0]));
}

#[test]
fn test_palette_from_config_must_not_be_empty() {
    let config: PieChartConfig = toml::from_str(
        r#"
        palette = []
        [[records]]
        label = "a"
        percentage = 50.0
        count = 1.0
        "#,
    )
    .unwrap();

    assert!(config.palette.is_empty());
    assert!(matches!(config.build(), Err(DashError::EmptyInput { .. })));
}

#[test]
fn test_specs_serialize_for_renderers() {
    let json = ChartSpec::DualAxis(DualAxisChartConfig::default().build().unwrap())
        .to_json()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["line"]["y_axis"], "y2");
    assert_eq!(value["y2_axis"]["overlaying"], "y");
    assert_eq!(value["bars"]["values"][4], 75_840);
}
