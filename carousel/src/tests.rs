use crate::wrap::{position_of, wrap};
use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

fn carousel(count: usize) -> Carousel<usize> {
    Carousel::new(
        CarouselOptions::new("hero").with_initial_viewport_width(100.0),
        0..count,
    )
    .unwrap()
}

fn targets(c: &Carousel<usize>) -> Vec<f64> {
    c.offsets().iter().map(|o| o.target).collect()
}

fn immediates(c: &Carousel<usize>) -> Vec<bool> {
    c.offsets().iter().map(|o| o.immediate).collect()
}

fn settle(c: &mut Carousel<usize>) -> u64 {
    let mut now_ms = 0u64;
    while c.tick(now_ms) {
        now_ms += 16;
        assert!(now_ms < 60_000, "springs never settled");
    }
    now_ms
}

fn drag(velocity_x: f64, direction_x: f64, movement_x: f64) -> DragSample {
    DragSample {
        offset_x: movement_x,
        velocity_x,
        direction_x,
        is_dragging: true,
        movement_x,
        target: TargetKind::Panel,
    }
}

fn release(velocity_x: f64, direction_x: f64, movement_x: f64) -> DragSample {
    DragSample {
        is_dragging: false,
        ..drag(velocity_x, direction_x, movement_x)
    }
}

#[test]
fn wrap_normalizes_negative_and_large_values() {
    assert_eq!(wrap(-1, 5), 4);
    assert_eq!(wrap(7, 5), 2);
    assert_eq!(wrap(0, 5), 0);
    assert_eq!(wrap(-5, 5), 0);
    assert_eq!(wrap(-11, 5), 4);

    for len in 1..8usize {
        for x in -50i64..50 {
            assert!(wrap(x, len) < len, "wrap({x}, {len})");
        }
    }
}

#[test]
fn position_of_is_a_bijection_for_any_anchor() {
    for len in 1..7usize {
        for first_visible in 0..len {
            for first_visible_index in 0..len {
                let mut slots: Vec<usize> = (0..len)
                    .map(|i| position_of(i, first_visible, first_visible_index, len))
                    .collect();
                slots.sort_unstable();
                assert_eq!(slots, (0..len).collect::<Vec<_>>());
                assert_eq!(
                    position_of(first_visible, first_visible, first_visible_index, len),
                    first_visible_index
                );
            }
        }
    }
}

#[test]
fn mount_layout_puts_last_panel_left_of_first() {
    let c = carousel(3);
    assert_eq!(c.display_label(), 1);
    assert_eq!(targets(&c), [0.0, 100.0, -100.0]);
    assert!(immediates(&c).iter().all(|&i| i));
    assert_eq!(c.values().collect::<Vec<_>>(), [0.0, 100.0, -100.0]);
}

#[test]
fn advance_cycles_display_index_through_wrap() {
    let mut c = carousel(3);
    c.advance(1);
    assert_eq!(c.display_label(), 2);
    c.advance(1);
    assert_eq!(c.display_label(), 3);
    c.advance(1);
    assert_eq!(c.display_label(), 1);
    assert_eq!(c.logical_index(), 3);
    assert_eq!(c.direction(), Direction::Forward);
}

#[test]
fn forward_step_snaps_the_wrapping_panel() {
    let mut c = carousel(3);
    c.advance(1);
    assert_eq!(targets(&c), [-100.0, 0.0, 100.0]);
    // Panel 2 jumps from the left edge to the right edge; it must not sweep across.
    assert_eq!(immediates(&c), [false, false, true]);
    assert_eq!(c.animation().value(2), Some(100.0));
}

#[test]
fn backward_step_snaps_the_wrapping_panel() {
    let mut c = carousel(3);
    c.advance(-1);
    assert_eq!(c.display_label(), 3);
    assert_eq!(targets(&c), [100.0, -100.0, 0.0]);
    assert_eq!(immediates(&c), [false, true, false]);
}

#[test]
fn displayed_panel_is_always_at_origin() {
    for count in 1..7usize {
        for visible in 1..4usize {
            let mut engine = PositionEngine::new(count);
            let viewport = Viewport {
                width: 100.0,
                visible_count: visible,
            };
            for logical in -20i64..20 {
                for direction in [Direction::Forward, Direction::Backward] {
                    let fvi = engine.first_visible_index(direction, visible);
                    let offsets = engine.layout(logical, viewport, direction, 0.0).to_vec();
                    let shown = wrap(logical, count);
                    assert_eq!(offsets[shown].target, 0.0, "n={count} l={logical}");
                    for (i, o) in offsets.iter().enumerate() {
                        let slot = position_of(i, shown, fvi, count) as f64 - fvi as f64;
                        assert_eq!(o.target, slot * 100.0);
                    }
                }
            }
        }
    }
}

#[test]
fn backward_anchor_keeps_room_behind_the_shown_panel() {
    let mut engine = PositionEngine::new(5);
    let viewport = Viewport {
        width: 100.0,
        visible_count: 1,
    };
    let offsets = engine.layout(-1, viewport, Direction::Backward, 0.0).to_vec();
    assert_eq!(
        engine.anchor(),
        Anchor {
            first_visible: 4,
            first_visible_index: 3
        }
    );
    let t: Vec<f64> = offsets.iter().map(|o| o.target).collect();
    assert_eq!(t, [100.0, -300.0, -200.0, -100.0, 0.0]);
}

#[test]
fn go_to_picks_direction_from_sign_of_difference() {
    let mut c = carousel(3);
    c.advance(2);
    assert_eq!(c.display_label(), 3);

    c.go_to(0);
    assert_eq!(c.direction(), Direction::Backward);
    assert_eq!(c.display_label(), 1);
    assert_eq!(c.logical_index(), 0);

    c.go_to(0);
    assert_eq!(c.direction(), Direction::Forward);

    c.go_to(2);
    assert_eq!(c.direction(), Direction::Forward);
    assert_eq!(c.display_label(), 3);
}

#[test]
fn resize_relayouts_immediately_and_keeps_index() {
    let mut c = carousel(4);
    c.advance(2);
    c.advance(-3);
    let logical = c.logical_index();

    assert!(c.resize(250.0));
    assert_eq!(c.logical_index(), logical);
    assert_eq!(c.panel_width(), 250.0);
    assert!(immediates(&c).iter().all(|&i| i));
    assert_eq!(c.values().collect::<Vec<_>>(), targets(&c));
    assert!(!c.is_animating());
    assert_eq!(targets(&c)[c.display_index()], 0.0);

    assert!(!c.resize(250.0));
    assert!(!c.resize(0.0));
    assert!(!c.resize(f64::NAN));
    assert_eq!(c.panel_width(), 250.0);
}

#[test]
fn fixed_item_width_ignores_viewport() {
    let mut c = Carousel::new(
        CarouselOptions::new("fixed").with_item_width(ItemWidth::Px(120.4)),
        ["a", "b", "c"],
    )
    .unwrap();
    assert_eq!(c.panel_width(), 121.0);
    assert!(!c.resize(800.0));
    assert_eq!(c.panel_width(), 121.0);
}

#[test]
fn zero_velocity_release_springs_back() {
    let mut c = carousel(3);
    let out = c.on_drag(drag(-0.5, -1.0, -30.0));
    assert!(matches!(out, GestureOutcome::Dragging { relayout: true, .. }));
    assert!(c.state().transitioning);
    assert!(c.state().paused);
    assert_eq!(c.gesture_phase(), GesturePhase::Active);
    assert_eq!(targets(&c), [-30.0, 70.0, -130.0]);
    assert_eq!(c.drag_session().map(|s| s.origin_offset), Some(0.0));

    let out = c.on_drag(release(0.0, -1.0, -30.0));
    assert_eq!(
        out,
        GestureOutcome::Released {
            delta: 0,
            carry_velocity: 0.0
        }
    );
    assert_eq!(c.logical_index(), 0);
    assert_eq!(c.state(), CarouselState::default());
    assert!(c.drag_session().is_none());
    assert_eq!(targets(&c), [0.0, 100.0, -100.0]);
}

#[test]
fn release_with_velocity_commits_one_slide_against_drag_direction() {
    let mut c = carousel(3);
    c.on_drag(drag(-0.8, -1.0, -60.0));
    c.on_drag(release(-0.8, -1.0, -60.0));
    assert_eq!(c.logical_index(), 1);
    assert_eq!(c.display_label(), 2);
    assert!(!c.state().transitioning);

    c.on_drag(drag(0.9, 1.0, 40.0));
    c.on_drag(release(0.9, 1.0, 40.0));
    c.on_drag(drag(0.9, 1.0, 40.0));
    c.on_drag(release(0.9, 1.0, 40.0));
    assert_eq!(c.logical_index(), -1);
    assert_eq!(c.display_label(), 3);
}

#[test]
fn release_velocity_is_carried_into_the_springs() {
    let mut c = carousel(3);
    c.on_drag(drag(-0.8, -1.0, -60.0));
    c.on_drag(release(-0.8, -1.0, -60.0));
    for (spring, offset) in c.animation().springs().iter().zip(c.offsets()) {
        if offset.immediate {
            assert_eq!(spring.velocity, 0.0);
        } else {
            assert_eq!(spring.velocity, -800.0);
        }
    }
}

#[test]
fn text_input_drag_stops_without_navigating() {
    let mut c = carousel(3);
    let out = c.on_drag(DragSample {
        target: TargetKind::TextInput,
        ..drag(-1.0, -1.0, -80.0)
    });
    assert_eq!(out, GestureOutcome::Stop);
    assert!(c.state().stopped);
    assert!(c.state().paused);
    assert_eq!(c.gesture_phase(), GesturePhase::Idle);
    assert_eq!(targets(&c), [0.0, 100.0, -100.0]);

    assert_eq!(c.on_drag(release(-1.0, -1.0, -80.0)), GestureOutcome::Ignored);
    assert_eq!(c.logical_index(), 0);
}

#[test]
fn stationary_drag_sample_does_not_relayout() {
    let mut c = carousel(3);
    let out = c.on_drag(drag(0.0, 0.0, -20.0));
    assert!(matches!(out, GestureOutcome::Dragging { relayout: false, .. }));
    assert!(c.state().transitioning);
    assert_eq!(targets(&c), [0.0, 100.0, -100.0]);
}

#[test]
fn gesture_phase_settles_after_animation() {
    let mut c = carousel(3);
    c.on_drag(drag(-0.8, -1.0, -60.0));
    c.on_drag(release(-0.8, -1.0, -60.0));
    assert_eq!(c.gesture_phase(), GesturePhase::Settling);
    settle(&mut c);
    assert_eq!(c.gesture_phase(), GesturePhase::Idle);
    assert_eq!(c.values().collect::<Vec<_>>(), targets(&c));
}

#[test]
fn cancel_drag_ends_transition() {
    let mut c = carousel(3);
    c.on_drag(drag(-0.5, -1.0, -30.0));
    c.cancel_drag();
    assert!(!c.state().transitioning);
    assert!(c.drag_session().is_none());
    assert_eq!(c.logical_index(), 0);
    assert_eq!(targets(&c), [0.0, 100.0, -100.0]);
}

#[test]
fn state_machine_flags_follow_event_table() {
    let s = CarouselState::default();
    assert!(s.is_running());

    let paused = s.pause();
    assert!(paused.paused && !paused.stopped);
    assert_eq!(paused.pause(), paused);
    assert_eq!(paused.play(), CarouselState::default());

    let stopped = s.stop();
    assert!(stopped.paused && stopped.stopped);
    assert_eq!(stopped.transitioning().transition_end(), stopped);
    assert_eq!(stopped.pause().play(), CarouselState::default());

    let dragging = s.transitioning();
    assert!(dragging.paused && dragging.transitioning);
    assert_eq!(dragging.transition_end(), CarouselState::default());

    // transition_end resumes a plain pause as well
    assert_eq!(paused.transition_end(), CarouselState::default());
}

#[test]
fn control_icon_and_toggle() {
    let s = CarouselState::default();
    assert_eq!(s.control_icon(), ControlIcon::Pause);
    assert_eq!(s.pause().control_icon(), ControlIcon::Play);
    assert_eq!(s.stop().control_icon(), ControlIcon::Play);
    assert_eq!(s.transitioning().control_icon(), ControlIcon::Pause);
    assert_eq!(s.stop().transitioning().control_icon(), ControlIcon::Play);

    assert_eq!(s.toggle(), s.stop());
    assert_eq!(s.pause().toggle(), s);
    assert_eq!(s.stop().toggle(), s);
}

#[test]
fn animated_panels_converge_monotonically() {
    let mut c = carousel(3);
    c.advance(1);
    let t = targets(&c);
    let mut prev_dist: Vec<f64> = c.values().zip(&t).map(|(v, t)| (v - t).abs()).collect();

    let mut now_ms = 0;
    while c.tick(now_ms) {
        now_ms += 16;
        let dist: Vec<f64> = c.values().zip(&t).map(|(v, t)| (v - t).abs()).collect();
        for (d, p) in dist.iter().zip(&prev_dist) {
            assert!(*d <= *p + 1e-9, "distance grew: {p} -> {d}");
        }
        prev_dist = dist;
        assert!(now_ms < 10_000);
    }
    assert_eq!(c.values().collect::<Vec<_>>(), t);
}

#[test]
fn flick_release_converges_without_overshoot() {
    let mut c = carousel(5);
    c.on_drag(drag(-0.8, -1.0, -60.0));
    settle(&mut c);
    c.on_drag(release(-0.8, -1.0, -60.0));
    assert_eq!(c.logical_index(), 1);

    let damping = SpringConfig::default().damping;
    for (spring, offset) in c.animation().springs().iter().zip(c.offsets()) {
        if offset.immediate {
            continue;
        }
        let distance = spring.target - spring.position;
        assert!(spring.velocity * distance >= 0.0, "moving away from target");
        assert!(spring.velocity.abs() <= 0.5 * damping * distance.abs() + 1e-9);
    }

    let t = targets(&c);
    let mut prev_dist: Vec<f64> = c.values().zip(&t).map(|(v, t)| (v - t).abs()).collect();
    let mut now_ms = 0;
    while c.tick(now_ms) {
        now_ms += 16;
        let dist: Vec<f64> = c.values().zip(&t).map(|(v, t)| (v - t).abs()).collect();
        for (d, p) in dist.iter().zip(&prev_dist) {
            assert!(*d <= *p + 1e-9, "distance grew: {p} -> {d}");
        }
        prev_dist = dist;
        assert!(now_ms < 10_000);
    }
    assert_eq!(c.values().collect::<Vec<_>>(), t);
}

#[test]
fn carried_velocity_is_limited_per_spring() {
    let config = SpringConfig::default();
    let mut s = Spring::at(0.0);
    s.target = -40.0;
    s.carry(-800.0, config);
    assert_eq!(s.velocity, -0.5 * config.damping * 40.0);

    s.carry(-100.0, config);
    assert_eq!(s.velocity, -100.0);

    // Away from the target: dropped.
    s.carry(300.0, config);
    assert_eq!(s.velocity, 0.0);
}

#[test]
fn driver_needs_two_resting_ticks_to_settle() {
    let initial = [PanelOffset {
        target: 0.0,
        immediate: true,
    }];
    let mut driver = AnimationDriver::new(&initial, SpringConfig::default());
    assert!(!driver.tick(0.016));

    driver.apply(
        &[PanelOffset {
            target: 0.3,
            immediate: false,
        }],
        None,
    );
    // Already within epsilon: nothing to animate.
    assert!(!driver.is_animating());
    assert_eq!(driver.value(0), Some(0.3));

    driver.apply(
        &[PanelOffset {
            target: 50.0,
            immediate: false,
        }],
        None,
    );
    let mut ticks = 0;
    let mut resting_seen = 0;
    while driver.tick(0.016) {
        ticks += 1;
        if driver.springs()[0].is_at_rest(0.5) {
            resting_seen += 1;
        }
        assert!(ticks < 1000);
    }
    assert_eq!(resting_seen, 1);
    assert_eq!(driver.value(0), Some(50.0));

    driver.halt();
    driver.apply(
        &[PanelOffset {
            target: 10.0,
            immediate: true,
        }],
        None,
    );
    assert_eq!(driver.value(0), Some(50.0));
}

#[test]
fn slide_change_callback_sees_display_labels() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let opts = CarouselOptions::new("cb")
        .with_initial_viewport_width(100.0)
        .with_on_slide_change(Some({
            let seen = Arc::clone(&seen);
            move |label: usize| seen.lock().unwrap().push(label)
        }));
    let mut c = Carousel::new(opts, 0..3).unwrap();
    assert!(seen.lock().unwrap().is_empty());
    c.advance(1);
    c.advance(1);
    c.advance(1);
    c.go_to(0);
    c.advance(3);
    assert_eq!(*seen.lock().unwrap(), [2, 3, 1]);
}

#[cfg(feature = "std")]
#[test]
fn panicking_callback_does_not_corrupt_engine() {
    let opts = CarouselOptions::new("panic")
        .with_initial_viewport_width(100.0)
        .with_on_slide_change(Some(|_label: usize| panic!("consumer bug")));
    let mut c = Carousel::new(opts, 0..3).unwrap();
    c.advance(1);
    assert_eq!(c.display_label(), 2);
    assert_eq!(targets(&c), [-100.0, 0.0, 100.0]);
    c.advance(1);
    assert_eq!(c.display_label(), 3);
}

#[test]
fn configuration_is_validated() {
    let ok = || CarouselOptions::new("ok").with_initial_viewport_width(100.0);

    assert_eq!(
        Carousel::new(CarouselOptions::new("  ").with_initial_viewport_width(1.0), 0..3).err(),
        Some(ConfigError::MissingAriaLabel)
    );
    assert_eq!(
        Carousel::new(ok(), core::iter::empty::<u8>()).err(),
        Some(ConfigError::NoPanels)
    );
    assert_eq!(
        Carousel::new(ok().with_item_width(ItemWidth::Px(-4.0)), 0..3).err(),
        Some(ConfigError::InvalidItemWidth(-4.0))
    );
    assert!(matches!(
        Carousel::new(ok().with_item_width(ItemWidth::Px(f64::NAN)), 0..3),
        Err(ConfigError::InvalidItemWidth(_))
    ));
    assert_eq!(
        Carousel::new(ok().with_visible(0), 0..3).err(),
        Some(ConfigError::InvalidVisible)
    );
    assert_eq!(
        Carousel::new(ok().with_interval_ms(0), 0..3).err(),
        Some(ConfigError::InvalidInterval)
    );
    assert_eq!(
        Carousel::new(CarouselOptions::new("no-viewport"), 0..3).err(),
        Some(ConfigError::InvalidViewportWidth(0.0))
    );
    assert!(Carousel::new(ok(), 0..2).is_ok());
}

#[test]
fn item_width_parses_keyword_or_pixels() {
    assert_eq!("full".parse::<ItemWidth>(), Ok(ItemWidth::Full));
    assert_eq!(" 240 ".parse::<ItemWidth>(), Ok(ItemWidth::Px(240.0)));
    assert_eq!(
        "wide".parse::<ItemWidth>(),
        Err(ConfigError::InvalidItemWidthKeyword("wide".into()))
    );
    assert_eq!(
        "-3".parse::<ItemWidth>(),
        Err(ConfigError::InvalidItemWidth(-3.0))
    );
}

#[cfg(feature = "serde")]
#[test]
fn config_deserializes_with_defaults() {
    let cfg: CarouselConfig =
        serde_json::from_str(r#"{"aria_label":"hero","loop":true,"item_width":"full"}"#).unwrap();
    assert_eq!(cfg.aria_label, "hero");
    assert!(cfg.looped);
    assert_eq!(cfg.item_width, ItemWidth::Full);
    assert_eq!(cfg.interval_ms, 5000);
    assert!(cfg.nav_arrows);
    assert_eq!(cfg.visible, 1);

    let cfg: CarouselConfig =
        serde_json::from_str(r#"{"aria_label":"hero","item_width":320}"#).unwrap();
    assert_eq!(cfg.item_width, ItemWidth::Px(320.0));

    assert!(serde_json::from_str::<CarouselConfig>(r#"{"item_width":"wide"}"#).is_err());
    assert!(serde_json::from_str::<CarouselConfig>(r#"{"item_width":0}"#).is_err());

    let missing: CarouselConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(missing.validate(), Err(ConfigError::MissingAriaLabel));
}

#[test]
fn controls_follow_loop_and_nav_options() {
    let mut c = carousel(3);
    let nav = c.controls();
    assert_eq!(nav.prev_enabled, Some(false));
    assert_eq!(nav.next_enabled, Some(true));
    assert!(nav.dots.is_empty());
    assert_eq!(nav.toggle, None);
    assert_eq!(nav.live, LiveRegion::Polite);

    c.advance(2);
    let nav = c.controls();
    assert_eq!(nav.prev_enabled, Some(true));
    assert_eq!(nav.next_enabled, Some(false));

    c.update_config(|cfg| {
        cfg.looped = true;
        cfg.nav_dots = true;
        cfg.autoplay = true;
    })
    .unwrap();
    let nav = c.controls();
    assert_eq!(nav.next_enabled, Some(true));
    assert_eq!(nav.toggle, Some(ControlIcon::Pause));
    assert_eq!(nav.live, LiveRegion::Off);
    let labels: Vec<&str> = nav.dots.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, ["1 of 3", "2 of 3", "3 of 3"]);
    assert_eq!(nav.dots.iter().position(|d| d.current), Some(2));

    c.update_config(|cfg| cfg.nav_arrows = false).unwrap();
    assert_eq!(c.controls().prev_enabled, None);
}

#[test]
fn changing_item_width_relayouts_immediately() {
    let mut c = carousel(3);
    c.advance(1);
    c.update_config(|cfg| cfg.item_width = ItemWidth::Px(50.0))
        .unwrap();
    assert_eq!(c.panel_width(), 50.0);
    assert_eq!(targets(&c), [-50.0, 0.0, 50.0]);
    assert!(immediates(&c).iter().all(|&i| i));

    assert_eq!(
        c.update_config(|cfg| cfg.item_width = ItemWidth::Px(0.0)),
        Err(ConfigError::InvalidItemWidth(0.0))
    );
    assert_eq!(c.panel_width(), 50.0);
}

#[test]
fn switching_to_full_width_needs_a_known_viewport() {
    let mut c = Carousel::new(
        CarouselOptions::new("fixed").with_item_width(ItemWidth::Px(100.0)),
        0..3,
    )
    .unwrap();
    c.advance(1);

    assert_eq!(
        c.update_config(|cfg| cfg.item_width = ItemWidth::Full),
        Err(ConfigError::InvalidViewportWidth(0.0))
    );
    assert_eq!(c.config().item_width, ItemWidth::Px(100.0));
    assert_eq!(c.panel_width(), 100.0);
    assert_eq!(targets(&c), [-100.0, 0.0, 100.0]);
    assert!(c.values().all(f64::is_finite));

    // Fixed-width panels do not move, but the viewport width is recorded.
    assert!(!c.resize(400.0));
    c.update_config(|cfg| cfg.item_width = ItemWidth::Full)
        .unwrap();
    assert_eq!(c.panel_width(), 400.0);
    assert_eq!(targets(&c), [-400.0, 0.0, 400.0]);
}

#[test]
fn huge_fixed_width_is_kept_as_is() {
    assert_eq!(ItemWidth::Px(1e300).resolve(0.0), 1e300);
    assert_eq!(ItemWidth::Px(9.5e15).resolve(0.0), 9.5e15);
    assert_eq!(ItemWidth::Px(120.4).resolve(0.0), 121.0);
    assert_eq!(ItemWidth::Px(64.0).resolve(0.0), 64.0);
}

#[test]
fn panel_focus_stops_rotation() {
    let mut c = carousel(3);
    c.on_panel_focus();
    assert!(c.state().stopped);
    c.toggle_playback();
    assert_eq!(c.state(), CarouselState::default());
}

#[test]
fn single_panel_stays_in_view() {
    let mut c = carousel(1);
    assert_eq!(targets(&c), [0.0]);
    c.advance(1);
    assert_eq!(c.display_label(), 1);
    assert_eq!(targets(&c), [0.0]);
    c.advance(-2);
    assert_eq!(targets(&c), [0.0]);
}

#[test]
fn unmount_makes_commands_inert() {
    let mut c = carousel(3);
    c.advance(1);
    assert!(c.is_animating());
    c.unmount();
    assert!(c.is_unmounted());
    assert!(!c.tick(16));
    c.advance(1);
    c.play();
    c.stop();
    assert_eq!(c.logical_index(), 1);
    assert_eq!(c.state(), CarouselState::default());
    assert_eq!(c.on_drag(drag(-1.0, -1.0, -10.0)), GestureOutcome::Ignored);
}
