use cellula_engine::config::{SimConfig, Variant, DEFAULT_BRUSH_RADIUS, DEFAULT_GRID_SIZE};

#[test]
fn config_json_round_trip_keeps_core_invariants() {
    let config = SimConfig::from_json(
        r#"{"variant":"pipes","grid_size":256,"brush_radius":12.0,"canvas_size":[1280.0,720.0]}"#,
    )
    .expect("well-formed config should parse");

    assert_eq!(config.variant, Variant::Pipes);
    assert_eq!(config.grid_size, 256);
    assert_eq!(config.brush_radius, 12.0);
    assert_eq!(config.canvas_size, Some((1280.0, 720.0)));

    let echoed = SimConfig::from_json(&config.to_json()).expect("echo should parse");
    assert_eq!(echoed.variant, config.variant);
    assert_eq!(echoed.grid_size, config.grid_size);
    assert_eq!(echoed.brush_radius, config.brush_radius);
    assert_eq!(echoed.canvas_size, config.canvas_size);
}

#[test]
fn omitted_fields_fall_back_to_defaults() {
    let config = SimConfig::from_json(r#"{"variant":"sand"}"#).expect("minimal config");
    assert_eq!(config.grid_size, DEFAULT_GRID_SIZE);
    assert_eq!(config.brush_radius, DEFAULT_BRUSH_RADIUS);
    assert_eq!(config.canvas_size, None);
}

#[test]
fn invalid_documents_are_rejected_up_front() {
    assert!(SimConfig::from_json(r#"{"variant":"sand","grid_size":0}"#).is_err());
    assert!(SimConfig::from_json(r#"{"variant":"sand","grid_size":100000}"#).is_err());
    assert!(SimConfig::from_json(r#"{"variant":"sand","brush_radius":-3.0}"#).is_err());
    assert!(SimConfig::from_json(r#"{"variant":"sand","canvas_size":[-1.0,600.0]}"#).is_err());
    assert!(SimConfig::from_json(r#"{"grid_size":128}"#).is_err(), "variant is mandatory");
}
