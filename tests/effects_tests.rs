// Host-side tests for the per-element parallax calculators.

use parallax_core::*;

const EPS: f64 = 1e-9;

fn frame(scroll: f64, viewport_height: f64) -> ScrollFrame {
    ScrollFrame {
        scroll,
        viewport_height,
    }
}

fn geom(top: f64, height: f64) -> ElementGeometry {
    ElementGeometry { top, height }
}

#[test]
fn background_at_document_top_moves_up_half_speed() {
    let t = Tuning::default();
    let at_rest = compute_effect(Category::Background, 0.5, geom(0.0, 500.0), frame(0.0, 800.0), &t)
        .expect("background is always animated");
    assert_eq!(at_rest.translate_y, 0.0);
    assert_eq!(at_rest.opacity, None);

    let scrolled =
        compute_effect(Category::Background, 0.5, geom(0.0, 500.0), frame(200.0, 800.0), &t).unwrap();
    assert_eq!(scrolled.translate_y, -50.0);
}

#[test]
fn background_offset_is_linear_and_decreasing_in_scroll() {
    let t = Tuning::default();
    let speed = 0.7;
    let mut prev = f64::INFINITY;
    for i in 0..40 {
        let s = i as f64 * 37.5;
        let e = compute_effect(Category::Background, speed, geom(0.0, 400.0), frame(s, 900.0), &t).unwrap();
        assert!((e.translate_y - (-0.5 * speed * s)).abs() < EPS);
        assert!(e.translate_y < prev || s == 0.0);
        prev = e.translate_y;
    }
}

#[test]
fn hero_text_fades_out_over_seventy_percent_of_viewport() {
    let t = Tuning::default();
    let vh = 800.0;
    assert_eq!(hero_opacity(frame(0.0, vh), &t), 1.0);
    assert!((hero_opacity(frame(vh * 0.35, vh), &t) - 0.5).abs() < EPS);
    assert_eq!(hero_opacity(frame(vh * 0.7, vh), &t), 0.0);
    assert_eq!(hero_opacity(frame(vh * 3.0, vh), &t), 0.0);

    let mut prev = 1.0 + EPS;
    for i in 0..50 {
        let s = i as f64 * (vh * 0.7) / 50.0;
        let o = hero_opacity(frame(s, vh), &t);
        assert!(o < prev, "opacity must strictly decrease (s={s})");
        prev = o;
    }
}

#[test]
fn hero_text_stays_opaque_without_a_viewport() {
    let t = Tuning::default();
    for s in [0.0, 50.0, -10.0] {
        let o = hero_opacity(frame(s, 0.0), &t);
        assert_eq!(o, 1.0, "s={s}");
    }
    let e = compute_effect(
        Category::HeroText,
        0.5,
        ElementGeometry::default(),
        frame(0.0, 0.0),
        &t,
    )
    .unwrap();
    assert_eq!(e.opacity, Some(1.0));
}

#[test]
fn hero_text_moves_down_and_ignores_the_viewport_gate() {
    let t = Tuning::default();
    let e = compute_effect(Category::HeroText, 1.0, geom(20_000.0, 50.0), frame(100.0, 800.0), &t)
        .expect("hero text bypasses the gate");
    assert!((e.translate_y - 80.0).abs() < EPS);
    assert!(e.opacity.is_some());
}

#[test]
fn custom_background_is_gated_and_moves_up_slowly() {
    let t = Tuning::default();
    let near = compute_effect(
        Category::CustomBackground,
        1.0,
        geom(1000.0, 400.0),
        frame(500.0, 800.0),
        &t,
    )
    .unwrap();
    assert!((near.translate_y - (-150.0)).abs() < EPS);

    // top == scroll + vh + margin is already outside
    let far = compute_effect(
        Category::CustomBackground,
        1.0,
        geom(500.0 + 800.0 + 300.0, 400.0),
        frame(500.0, 800.0),
        &t,
    );
    assert_eq!(far, None);
}

#[test]
fn near_viewport_gate_checks_both_edges() {
    let f = frame(1000.0, 800.0);
    assert!(near_viewport(geom(1000.0, 100.0), f, 300.0));
    assert!(!near_viewport(geom(2100.0, 100.0), f, 300.0));
    assert!(near_viewport(geom(2099.0, 100.0), f, 300.0));
    // bottom edge must be strictly below scroll - margin
    assert!(!near_viewport(geom(600.0, 100.0), f, 300.0));
    assert!(near_viewport(geom(600.0, 101.0), f, 300.0));
}

#[test]
fn content_moves_with_distance_from_viewport_center() {
    let t = Tuning::default();
    let e = compute_effect(Category::Content, 1.0, geom(575.0, 100.0), frame(0.0, 1000.0), &t).unwrap();
    // (625 - 500) * 1.0 * 0.6 * 0.15
    assert!((e.translate_y - 11.25).abs() < 1e-9);
    assert!((e.opacity.unwrap() - 0.5).abs() < EPS);

    let centered =
        compute_effect(Category::Content, 2.0, geom(450.0, 100.0), frame(0.0, 1000.0), &t).unwrap();
    assert_eq!(centered.translate_y, 0.0);
}

#[test]
fn content_opacity_plateaus_and_fades_linearly() {
    let t = Tuning::default();
    let f = frame(0.0, 1000.0);
    assert_eq!(content_opacity(100.0, f, &t), 1.0);
    assert_eq!(content_opacity(300.0, f, &t), 1.0);
    assert!((content_opacity(575.0, f, &t) - 0.5).abs() < EPS);
    assert!(content_opacity(849.0, f, &t) > 0.0);
    assert_eq!(content_opacity(850.0, f, &t), 0.0);
    assert_eq!(content_opacity(5000.0, f, &t), 0.0);
}

#[test]
fn content_opacity_is_always_clamped() {
    let t = Tuning::default();
    for s in [-500.0, 0.0, 123.0, 4000.0] {
        for vh in [1.0, 320.0, 800.0, 2160.0] {
            for top in [-10_000.0, -1.0, 0.0, 250.0, 777.0, 10_000.0] {
                let o = content_opacity(top, frame(s, vh), &t);
                assert!((0.0..=1.0).contains(&o), "s={s} vh={vh} top={top} -> {o}");
                assert_eq!(o, content_opacity(top, frame(s, vh), &t));
            }
        }
    }
}

#[test]
fn navbar_threshold_is_exclusive() {
    let t = Tuning::default();
    assert!(navbar_scrolled(101.0, &t));
    assert!(!navbar_scrolled(100.0, &t));
    assert!(!navbar_scrolled(99.0, &t));
}

fn has(names: &'static [&'static str]) -> impl Fn(&str) -> bool {
    move |c| names.iter().any(|n| *n == c)
}

#[test]
fn category_is_decided_from_marker_classes() {
    assert_eq!(Category::from_classes(has(&["parallax-bg"])), Category::Background);
    assert_eq!(Category::from_classes(has(&["hero-title"])), Category::HeroText);
    assert_eq!(Category::from_classes(has(&["hero-subtitle", "x"])), Category::HeroText);
    assert_eq!(Category::from_classes(has(&["custom-bg"])), Category::CustomBackground);
    assert_eq!(Category::from_classes(has(&["card"])), Category::Content);
    // background wins over the others
    assert_eq!(
        Category::from_classes(has(&["custom-bg", "parallax-bg"])),
        Category::Background
    );
    assert!(Category::Background.always_animated());
    assert!(Category::HeroText.always_animated());
    assert!(!Category::CustomBackground.always_animated());
    assert!(!Category::Content.always_animated());
}

#[test]
fn malformed_speed_becomes_nan_and_propagates() {
    assert_eq!(parse_speed(Some("0.5")), 0.5);
    assert_eq!(parse_speed(Some(" -1.25 ")), -1.25);
    assert!(parse_speed(Some("fast")).is_nan());
    assert!(parse_speed(None).is_nan());

    let t = Tuning::default();
    let e = compute_effect(Category::Background, f64::NAN, geom(0.0, 10.0), frame(10.0, 800.0), &t).unwrap();
    assert!(e.translate_y.is_nan());
}

#[test]
fn outputs_are_reproducible() {
    let t = Tuning::default();
    let a = compute_effect(Category::Content, 0.33, geom(1234.5, 321.0), frame(987.0, 777.0), &t);
    let b = compute_effect(Category::Content, 0.33, geom(1234.5, 321.0), frame(987.0, 777.0), &t);
    assert_eq!(a, b);
}
