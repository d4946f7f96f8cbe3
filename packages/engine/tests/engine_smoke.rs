use cellula_engine::{el_empty, el_forkbomb, el_sand, el_void, World};

#[test]
fn sand_smoke_brush_step_and_buffers() {
    let mut world = World::new(64, "sand").expect("valid config");
    world.enable_perf_metrics(true);
    world.set_canvas_size(640.0, 640.0);
    world.set_brush_radius(40.0).unwrap();

    world.pointer_pressed(320.0, 100.0);
    world.step();
    world.pointer_moved(400.0, 100.0);
    world.step();
    world.pointer_released();

    assert!(world.live_cell_count() > 0);
    assert_eq!(world.frame(), 2);

    // Grains keep falling after the pointer lifts.
    let before = world.live_cell_count();
    for _ in 0..10 {
        world.step();
    }
    assert_eq!(world.live_cell_count(), before);

    assert_eq!(world.colors_len(), 64 * 64);
    assert_eq!(world.colors_byte_len(), 64 * 64 * 4);
    assert_eq!(world.cells_len(), 64 * 64);
    assert_eq!(world.saturation_len(), 64 * 64);
    assert!(!world.colors_ptr().is_null());
    assert!(!world.cells_ptr().is_null());

    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.grid_size(), 64);
}

#[test]
fn forkbomb_smoke_from_config_json() {
    let mut world =
        World::from_config_json(r#"{"variant":"forkbomb","grid_size":32,"brush_radius":1.5}"#)
            .expect("valid config");
    assert_eq!(world.variant(), "forkbomb");
    assert_eq!(world.grid_size(), 32);

    assert!(world.set_cell(16, 16, el_forkbomb()));
    world.step();
    world.step();
    assert_eq!(world.live_cell_count(), 13);

    world.clear();
    assert_eq!(world.live_cell_count(), 0);
    assert_eq!(world.frame(), 0);
}

#[test]
fn pipes_smoke_tools_round_trip() {
    let mut world = World::new(48, "pipes").expect("valid config");
    assert_eq!(world.tool(), "pipe");

    world.set_brush_radius(0.6).unwrap();
    world.set_tool("paint").unwrap();
    world.pointer_pressed(10.5, 10.5);
    world.step();
    world.pointer_released();

    assert_eq!(world.live_cell_count(), 1);
    assert_eq!(world.saturation_at(10, 10), 1.0);

    assert!(world.set_tool("plasma-cutter").is_err());
    assert_eq!(world.tool(), "paint");
}

#[test]
fn constructor_rejects_bad_configuration() {
    assert!(World::new(0, "sand").is_err());
    assert!(World::new(64, "lava").is_err());
    assert!(World::from_config_json(r#"{"variant":"sand","grid_size":0}"#).is_err());
    assert!(World::from_config_json("{").is_err());
}

#[test]
fn element_codes_are_stable() {
    assert_eq!(el_empty(), 0);
    assert_eq!(el_sand(), 1);
    assert_eq!(el_void(), 99);

    let world = World::new(8, "sand").expect("valid config");
    assert_eq!(world.cell_at(3, 3), el_empty());
    assert_eq!(world.cell_at(-1, 0), el_void());
}
