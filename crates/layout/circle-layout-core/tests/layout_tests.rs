use std::f32::consts::{FRAC_PI_2, PI, TAU};

use circle_layout_core::{
    parse_layout_config_json, AnimationKind, AnimationProps, CircleLayout, CombinationMode,
    Easing, LayoutConfig, LayoutError, PropertyAnimation,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn property(kind: AnimationKind, duration_ms: f32, gap_ms: f32) -> PropertyAnimation {
    let mut config = PropertyAnimation::new(kind);
    config.duration_ms = duration_ms;
    config.gap_ms = gap_ms;
    config.easing = Easing::Linear;
    config
}

fn animated_config(radius: f32, configs: Vec<PropertyAnimation>) -> LayoutConfig {
    let mut config = LayoutConfig::new(radius);
    config.animation = Some(AnimationProps {
        configs,
        combination: CombinationMode::Parallel,
        element_gap_ms: 0.0,
    });
    config
}

/// it should place static elements at rest and flip visibility immediately
#[test]
fn static_layout_flips_without_animating() {
    let mut layout = CircleLayout::new(vec!["a", "b"], LayoutConfig::new(2.0)).unwrap();
    assert!(layout.all_visible());
    assert!(!layout.is_animating());

    let frames = layout.update(16.0);
    approx(frames[0].x, 2.0, 1e-6);
    approx(frames[0].y, 0.0, 1e-6);
    approx(frames[1].x, -2.0, 1e-6);
    approx(frames[1].y, 0.0, 1e-5);
    assert_eq!(frames[0].opacity, 1.0);

    layout.hide_all();
    assert!(!layout.all_visible());
    let frames = layout.update(0.0);
    assert_eq!(frames[0].opacity, 0.0);
    assert_eq!(frames[1].opacity, 0.0);

    layout.show_all();
    assert!(layout.all_visible());
    assert_eq!(layout.update(0.0)[0].opacity, 1.0);
}

/// it should play the entry animation on the very first show
#[test]
fn first_show_animates_from_the_entry_origin() {
    let config = animated_config(1.0, vec![property(AnimationKind::Opacity, 100.0, 0.0)]);
    let mut layout = CircleLayout::new(vec![()], config).unwrap();
    // Animated opacity constructs at the entry origin, not at rest.
    assert_eq!(layout.frames()[0].opacity, 0.0);

    layout.show_all();
    let frames = layout.update(50.0);
    approx(frames[0].opacity, 0.5, 1e-5);
    let frames = layout.update(50.0);
    assert_eq!(frames[0].opacity, 1.0);
    assert!(layout.all_visible());
}

/// it should flip the visibility flag only after the slowest member finishes
#[test]
fn parallel_playback_joins_on_slowest_member() {
    let config = animated_config(
        2.0,
        vec![
            property(AnimationKind::Opacity, 100.0, 0.0),
            property(AnimationKind::Linear, 300.0, 0.0),
        ],
    );
    let mut layout = CircleLayout::new(vec![()], config).unwrap();
    layout.show_all();
    layout.update(400.0);
    assert!(!layout.is_animating());

    layout.hide_all();
    let frames = layout.update(150.0);
    assert_eq!(frames[0].opacity, 0.0);
    approx(frames[0].x, 1.0, 1e-4);
    assert!(layout.all_visible());
    assert!(layout.is_animating());

    let frames = layout.update(200.0);
    approx(frames[0].x, 0.0, 1e-4);
    assert!(!layout.all_visible());
    assert!(!layout.is_animating());
}

/// it should stagger entries forward and exits backward across the elements
#[test]
fn stagger_waves_run_forward_and_backward() {
    let config = animated_config(1.0, vec![property(AnimationKind::Opacity, 100.0, 100.0)]);
    let mut layout = CircleLayout::new(vec![0, 1, 2], config).unwrap();

    layout.show_all();
    let frames = layout.update(150.0);
    assert_eq!(frames[0].opacity, 1.0);
    approx(frames[1].opacity, 0.5, 1e-5);
    assert_eq!(frames[2].opacity, 0.0);

    let frames = layout.update(150.0);
    for frame in frames {
        assert_eq!(frame.opacity, 1.0);
    }
    assert!(layout.all_visible());

    // Exit stagger runs back to front.
    layout.hide_all();
    let frames = layout.update(150.0);
    assert_eq!(frames[0].opacity, 1.0);
    approx(frames[1].opacity, 0.5, 1e-5);
    assert_eq!(frames[2].opacity, 0.0);

    let frames = layout.update(150.0);
    for frame in frames {
        assert_eq!(frame.opacity, 0.0);
    }
    assert!(!layout.all_visible());
}

/// it should reject linear and circular movement together
#[test]
fn movement_modes_are_mutually_exclusive() {
    let config = animated_config(
        1.0,
        vec![
            property(AnimationKind::Linear, 100.0, 0.0),
            property(AnimationKind::Circular, 100.0, 0.0),
        ],
    );
    assert!(config.validate().is_err());
    let err = CircleLayout::new(vec![()], config).unwrap_err();
    assert!(matches!(err, LayoutError::Configuration { .. }));
}

/// it should restart from the interrupted value when show cancels a hide
#[test]
fn show_cancels_inflight_hide() {
    let config = animated_config(1.0, vec![property(AnimationKind::Opacity, 100.0, 0.0)]);
    let mut layout = CircleLayout::new(vec![()], config).unwrap();
    layout.show_all();
    layout.update(200.0);

    layout.hide_all();
    let frames = layout.update(50.0);
    approx(frames[0].opacity, 0.5, 1e-5);
    // The interrupted hide never completed, so the flag never flipped.
    assert!(layout.all_visible());

    layout.show_all();
    let frames = layout.update(25.0);
    approx(frames[0].opacity, 0.625, 1e-4);
    let frames = layout.update(100.0);
    assert_eq!(frames[0].opacity, 1.0);
    assert!(layout.all_visible());
    assert!(!layout.is_animating());
}

/// it should move linearly between the center and the circumference
#[test]
fn linear_movement_travels_along_the_radius() {
    let config = animated_config(2.0, vec![property(AnimationKind::Linear, 100.0, 0.0)]);
    let mut layout = CircleLayout::new(vec![()], config).unwrap();
    // The animated radius starts at the center.
    approx(layout.frames()[0].x, 0.0, 1e-4);

    layout.show_all();
    let frames = layout.update(50.0);
    approx(frames[0].x, 1.0, 1e-4);
    let frames = layout.update(100.0);
    approx(frames[0].x, 2.0, 1e-4);
    assert!(layout.all_visible());

    layout.hide_all();
    let frames = layout.update(50.0);
    approx(frames[0].x, 1.0, 1e-4);
    let frames = layout.update(100.0);
    approx(frames[0].x, 0.0, 1e-4);
    assert!(!layout.all_visible());
}

/// it should move circularly from the first element's angle to its own
#[test]
fn circular_movement_travels_along_the_circumference() {
    let config = animated_config(1.0, vec![property(AnimationKind::Circular, 100.0, 0.0)]);
    let mut layout = CircleLayout::new(vec![0, 1, 2, 3], config).unwrap();
    // The animated angle starts at the first element's position.
    approx(layout.frames()[1].x, 1.0, 5e-3);
    approx(layout.frames()[1].y, 0.0, 5e-3);

    // Element 1 travels a quarter turn in.
    layout.show_all();
    let frames = layout.update(200.0);
    approx(frames[1].x, 0.0, 5e-3);
    approx(frames[1].y, 1.0, 5e-3);

    layout.hide_all();
    let frames = layout.update(200.0);
    approx(frames[1].x, 1.0, 5e-3);
    approx(frames[1].y, 0.0, 5e-3);
}

/// it should run sequence members strictly one after another
#[test]
fn sequence_runs_properties_in_config_order() {
    let mut config = animated_config(
        2.0,
        vec![
            property(AnimationKind::Opacity, 100.0, 0.0),
            property(AnimationKind::Linear, 100.0, 0.0),
        ],
    );
    config.animation.as_mut().unwrap().combination = CombinationMode::Sequence;
    let mut layout = CircleLayout::new(vec![()], config).unwrap();
    // One oversized tick runs the whole entry sequence back to back.
    layout.show_all();
    let frames = layout.update(400.0);
    assert_eq!(frames[0].opacity, 1.0);
    approx(frames[0].x, 2.0, 1e-4);
    assert!(!layout.is_animating());

    layout.hide_all();
    let frames = layout.update(50.0);
    approx(frames[0].opacity, 0.5, 1e-5);
    approx(frames[0].x, 2.0, 1e-4);

    // Opacity completes; the radius member arms but consumes no time yet.
    let frames = layout.update(50.0);
    assert_eq!(frames[0].opacity, 0.0);
    approx(frames[0].x, 2.0, 1e-4);
    assert!(layout.all_visible());

    let frames = layout.update(50.0);
    approx(frames[0].x, 1.0, 1e-4);
    let frames = layout.update(50.0);
    approx(frames[0].x, 0.0, 1e-4);
    assert!(!layout.all_visible());
}

/// it should honor the per-element lead delay in sequence mode
#[test]
fn sequence_lead_delay_staggers_elements() {
    let mut config = animated_config(1.0, vec![property(AnimationKind::Opacity, 100.0, 0.0)]);
    {
        let props = config.animation.as_mut().unwrap();
        props.combination = CombinationMode::Sequence;
        props.element_gap_ms = 100.0;
    }
    let mut layout = CircleLayout::new(vec![0, 1], config).unwrap();

    // Entry leads run front to back: none for the first element, 100 ms for
    // the second.
    layout.show_all();
    let frames = layout.update(50.0);
    approx(frames[0].opacity, 0.5, 1e-5);
    assert_eq!(frames[1].opacity, 0.0);
    let frames = layout.update(100.0);
    assert_eq!(frames[0].opacity, 1.0);
    approx(frames[1].opacity, 0.5, 1e-5);
    let frames = layout.update(100.0);
    assert_eq!(frames[1].opacity, 1.0);
    assert!(layout.all_visible());

    // Exit leads run back to front.
    layout.hide_all();
    let frames = layout.update(50.0);
    assert_eq!(frames[0].opacity, 1.0);
    approx(frames[1].opacity, 0.5, 1e-5);
    let frames = layout.update(250.0);
    assert_eq!(frames[0].opacity, 0.0);
    assert_eq!(frames[1].opacity, 0.0);
    assert!(!layout.all_visible());
}

/// it should keep a single partial-sweep element at a finite angle
#[test]
fn single_element_partial_sweep_is_finite() {
    let mut config = animated_config(1.0, vec![property(AnimationKind::Linear, 100.0, 0.0)]);
    config.start_angle = FRAC_PI_2;
    config.sweep_angle = PI;
    let mut layout = CircleLayout::new(vec![()], config).unwrap();

    let frames = layout.update(50.0);
    assert!(frames[0].x.is_finite());
    assert!(frames[0].y.is_finite());

    layout.show_all();
    let frames = layout.update(200.0);
    approx(frames[0].x, 0.0, 5e-3);
    approx(frames[0].y, 1.0, 5e-3);
}

/// it should parse a stored configuration document
#[test]
fn parses_stored_configuration() {
    let json = r#"{
        "radius": 120.0,
        "startFromAngle": 0.5,
        "sweepAngle": 3.14159,
        "animationConfigs": [
            {
                "animationType": "opacity",
                "animationGap": 50.0,
                "animationDuration": 300.0,
                "easing": "ease-in"
            },
            { "animationType": "circular" }
        ],
        "animationCombinationType": "sequence",
        "animationGap": 150.0
    }"#;
    let config = parse_layout_config_json(json).unwrap();
    assert_eq!(config.radius, 120.0);
    assert_eq!(config.start_angle, 0.5);
    approx(config.sweep_angle, PI, 1e-4);

    let props = config.animation.unwrap();
    assert_eq!(props.combination, CombinationMode::Sequence);
    assert_eq!(props.element_gap_ms, 150.0);
    assert_eq!(props.configs.len(), 2);
    assert_eq!(props.configs[0].kind, AnimationKind::Opacity);
    assert_eq!(props.configs[0].gap_ms, 50.0);
    assert_eq!(props.configs[0].duration_ms, 300.0);
    assert_eq!(props.configs[0].easing, Easing::EaseIn);
    assert_eq!(props.configs[1].kind, AnimationKind::Circular);
    assert_eq!(props.configs[1].duration_ms, 500.0);
    assert_eq!(props.configs[1].easing, Easing::EaseInOut);
}

/// it should fail on an unknown animation type tag
#[test]
fn rejects_unknown_animation_type() {
    let json = r#"{
        "radius": 10.0,
        "animationConfigs": [{ "animationType": "scale" }]
    }"#;
    let err = parse_layout_config_json(json).unwrap_err();
    assert_eq!(
        err,
        LayoutError::UnrecognizedAnimationType {
            kind: "scale".into()
        }
    );
}

/// it should reject a stored configuration mixing movement modes
#[test]
fn rejects_stored_configuration_with_conflicting_movement() {
    let json = r#"{
        "radius": 10.0,
        "animationConfigs": [
            { "animationType": "linear" },
            { "animationType": "circular" }
        ]
    }"#;
    let err = parse_layout_config_json(json).unwrap_err();
    assert!(matches!(err, LayoutError::Configuration { .. }));
}

/// it should produce identical frames for identically driven layouts
#[test]
fn update_sequences_are_deterministic() {
    let make = || {
        let mut config = animated_config(
            3.0,
            vec![
                property(AnimationKind::Opacity, 130.0, 40.0),
                property(AnimationKind::Linear, 170.0, 25.0),
            ],
        );
        config.start_angle = 0.25;
        config.sweep_angle = TAU;
        CircleLayout::new(vec![0, 1, 2, 3, 4], config).unwrap()
    };
    let mut a = make();
    let mut b = make();

    a.show_all();
    b.show_all();
    for _ in 0..20 {
        let fa = serde_json::to_string(a.update(16.7)).unwrap();
        let fb = serde_json::to_string(b.update(16.7)).unwrap();
        assert_eq!(fa, fb);
    }
    a.hide_all();
    b.hide_all();
    for _ in 0..20 {
        let fa = serde_json::to_string(a.update(16.7)).unwrap();
        let fb = serde_json::to_string(b.update(16.7)).unwrap();
        assert_eq!(fa, fb);
    }
}

/// it should round-trip a layout configuration through serde
#[test]
fn layout_config_serde_round_trip() {
    let config = animated_config(
        1.5,
        vec![property(AnimationKind::Opacity, 250.0, 10.0)],
    );
    let json = serde_json::to_string(&config).unwrap();
    let back: LayoutConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}
