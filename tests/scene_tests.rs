// Host-side tests for the scroll dispatcher, reveal set and ScrollScene,
// driven through an in-memory Surface.

use parallax_core::*;

#[derive(Default)]
struct FakeSurface {
    geoms: Vec<ElementGeometry>,
    reveal_tops: Vec<f64>,
    applied: Vec<(usize, Effect)>,
    shown: Vec<(usize, RevealTrigger)>,
}

impl Surface for FakeSurface {
    fn element_geometry(&self, id: usize, _scroll: f64) -> ElementGeometry {
        self.geoms[id]
    }
    fn apply_effect(&mut self, id: usize, effect: &Effect) {
        self.applied.push((id, *effect));
    }
    fn reveal_top(&self, id: usize, _scroll: f64) -> f64 {
        self.reveal_tops[id]
    }
    fn show_revealed(&mut self, id: usize, trigger: RevealTrigger) {
        self.shown.push((id, trigger));
    }
}

fn scene_with_background() -> (ScrollScene, FakeSurface) {
    let mut scene = ScrollScene::new(Tuning::default());
    scene.track(Category::Background, 0.5);
    let surface = FakeSurface {
        geoms: vec![ElementGeometry {
            top: 0.0,
            height: 500.0,
        }],
        ..Default::default()
    };
    (scene, surface)
}

#[test]
fn dispatcher_schedules_once_per_burst() {
    let mut d = ScrollDispatcher::new();
    assert_eq!(d.take_frame(), None);
    assert!(d.notify(10.0));
    for i in 0..20 {
        assert!(!d.notify(10.0 + i as f64));
    }
    assert!(d.is_pending());
    assert_eq!(d.take_frame(), Some(29.0));
    assert!(!d.is_pending());
    assert_eq!(d.take_frame(), None);
    // the next notification opens a new frame
    assert!(d.notify(30.0));
    assert_eq!(d.last_offset(), 30.0);
}

#[test]
fn burst_of_scrolls_runs_exactly_one_pass() {
    let (mut scene, mut surface) = scene_with_background();
    let scheduled = (0..=200)
        .map(|s| scene.on_scroll(s as f64))
        .filter(|n| n.schedule_frame)
        .count();
    assert_eq!(scheduled, 1);

    let report = scene.run_frame(800.0, &mut surface).expect("a frame was pending");
    assert_eq!(report.scroll, 200.0);
    assert_eq!(report.updated, 1);
    assert_eq!(surface.applied.len(), 1);
    assert_eq!(surface.applied[0].1.translate_y, -50.0);

    assert_eq!(scene.run_frame(800.0, &mut surface), None);
    assert_eq!(surface.applied.len(), 1);
}

#[test]
fn scroll_notice_carries_navbar_flag() {
    let (mut scene, _) = scene_with_background();
    assert!(scene.on_scroll(101.0).navbar_scrolled);
    assert!(!scene.on_scroll(99.0).navbar_scrolled);
    assert!(!scene.on_scroll(100.0).navbar_scrolled);
}

#[test]
fn gated_elements_keep_their_previous_output() {
    let mut scene = ScrollScene::new(Tuning::default());
    scene.track(Category::Content, 1.0);
    scene.track(Category::HeroText, 1.0);
    let mut surface = FakeSurface {
        geoms: vec![
            ElementGeometry {
                top: 10_000.0,
                height: 100.0,
            },
            ElementGeometry {
                top: 10_000.0,
                height: 100.0,
            },
        ],
        ..Default::default()
    };
    let report = scene.render(
        ScrollFrame {
            scroll: 0.0,
            viewport_height: 800.0,
        },
        &mut surface,
    );
    assert_eq!(report.updated, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(surface.applied.len(), 1);
    assert_eq!(surface.applied[0].0, 1);
}

#[test]
fn reveal_flags_never_reset() {
    let mut scene = ScrollScene::new(Tuning::default());
    let a = scene.track_reveal();
    let b = scene.track_reveal();
    let mut surface = FakeSurface {
        reveal_tops: vec![500.0, 2000.0],
        ..Default::default()
    };

    let vh = 800.0;
    let at = |scroll: f64| ScrollFrame {
        scroll,
        viewport_height: vh,
    };

    // reveal line at 640: only `a`
    assert_eq!(scene.render(at(0.0), &mut surface).revealed, 1);
    assert!(scene.reveals().is_revealed(a));
    assert!(!scene.reveals().is_revealed(b));

    // reveal line at 2140: `b` too
    assert_eq!(scene.render(at(1500.0), &mut surface).revealed, 1);
    assert!(scene.reveals().all_revealed());

    // scrolling back up hides nothing and writes nothing
    for s in [0.0, 300.0, 1200.0, 0.0] {
        assert_eq!(scene.render(at(s), &mut surface).revealed, 0);
        assert!(scene.reveals().is_revealed(a));
        assert!(scene.reveals().is_revealed(b));
    }
    assert_eq!(
        surface.shown,
        vec![(a, RevealTrigger::ScrollPosition), (b, RevealTrigger::ScrollPosition)]
    );
}

#[test]
fn observer_and_frame_paths_reveal_once() {
    let mut scene = ScrollScene::new(Tuning::default());
    let id = scene.track_reveal();
    let mut surface = FakeSurface {
        reveal_tops: vec![100.0],
        ..Default::default()
    };

    assert!(scene.reveal(id, RevealTrigger::Intersection, &mut surface));
    assert!(!scene.reveal(id, RevealTrigger::Intersection, &mut surface));
    let report = scene.render(
        ScrollFrame {
            scroll: 0.0,
            viewport_height: 800.0,
        },
        &mut surface,
    );
    assert_eq!(report.revealed, 0);
    assert_eq!(surface.shown, vec![(id, RevealTrigger::Intersection)]);

    // unknown ids are ignored
    assert!(!scene.reveal(42, RevealTrigger::ScrollPosition, &mut surface));
}

#[test]
fn position_reveals_leave_the_marker_class_off() {
    let mut scene = ScrollScene::new(Tuning::default());
    let by_frame = scene.track_reveal();
    let by_observer = scene.track_reveal();
    let mut surface = FakeSurface {
        reveal_tops: vec![100.0, 5000.0],
        ..Default::default()
    };

    scene.render(
        ScrollFrame {
            scroll: 0.0,
            viewport_height: 800.0,
        },
        &mut surface,
    );
    assert!(scene.reveal(by_observer, RevealTrigger::Intersection, &mut surface));

    let marked: Vec<usize> = surface
        .shown
        .iter()
        .filter(|(_, t)| t.marks_visible())
        .map(|(id, _)| *id)
        .collect();
    assert_eq!(marked, vec![by_observer]);
    assert!(!RevealTrigger::ScrollPosition.marks_visible());
}

#[test]
fn observer_thresholds_follow_tuned_ratio() {
    let t = Tuning::default();
    assert_eq!(observer_thresholds(&t), constants::REVEAL_THRESHOLDS.to_vec());

    let mut t = Tuning::default();
    t.apply("reveal-ratio", "0.3").unwrap();
    let thresholds = observer_thresholds(&t);
    assert!(thresholds.contains(&0.3));
    assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(thresholds.first(), Some(&0.0));
}

#[test]
fn reveal_set_reports_hidden_members() {
    let mut set = RevealSet::new();
    assert!(set.is_empty());
    let ids: Vec<usize> = (0..4).map(|_| set.register()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
    assert!(set.reveal(2));
    assert!(!set.reveal(2));
    assert_eq!(set.hidden().collect::<Vec<_>>(), vec![0, 1, 3]);
    assert_eq!(set.len(), 4);
    assert!(!set.all_revealed());
}

#[test]
fn reveal_checks_match_thresholds() {
    let t = Tuning::default();
    let f = ScrollFrame {
        scroll: 100.0,
        viewport_height: 1000.0,
    };
    assert!(reached_reveal_line(899.0, f, &t));
    assert!(!reached_reveal_line(900.0, f, &t));

    assert!(intersection_reveals(true, 0.5, &t));
    assert!(!intersection_reveals(true, 0.1, &t));
    assert!(!intersection_reveals(false, 0.9, &t));
}

#[test]
fn non_numeric_speed_is_tracked_but_produces_nan() {
    let mut scene = ScrollScene::new(Tuning::default());
    scene.track(Category::Background, parse_speed(Some("oops")));
    let mut surface = FakeSurface {
        geoms: vec![ElementGeometry::default()],
        ..Default::default()
    };
    scene.on_scroll(50.0);
    scene.run_frame(800.0, &mut surface).unwrap();
    assert!(surface.applied[0].1.translate_y.is_nan());
    assert_eq!(scene.tracked().len(), 1);
}
