// Host-side tests for the firework timeline scheduler.

use glam::{Mat4, Vec3};
use stadium_core::*;

fn entry(delay: f32, i: u8) -> FireworkEntry {
    FireworkEntry {
        delay,
        position: Vec3::new(i as f32, 2.0, 0.0),
        model: ModelHandle::Firework(i),
    }
}

fn single_entry_show(delay: f32) -> FireworkTimeline {
    FireworkTimeline::builder()
        .phase(4.0, [entry(delay, 0)])
        .phase(4.0, [entry(delay, 1)])
        .phase(4.0, [entry(delay, 2)])
        .build()
        .unwrap()
}

/// Run frames at `dt` with the trigger held as `held(now)`, returning every
/// frame's state and draw count.
fn run(
    timeline: &FireworkTimeline,
    frames: usize,
    dt: f32,
    held: impl Fn(f32) -> bool,
) -> Vec<(TimelineState, usize)> {
    let mut state = TimelineState::default();
    let mut latch = KeyLatch::default();
    let mut out = Vec::with_capacity(frames);
    for i in 0..frames {
        let now = i as f32 * dt;
        let pressed = held(now);
        let was_pressed = latch.was_down();
        latch.update(pressed);
        let (next, draws) = timeline.step(state, now, pressed, was_pressed);
        state = next;
        out.push((state, draws.len()));
    }
    out
}

fn activations(frames: &[(TimelineState, usize)]) -> usize {
    let mut count = 0;
    let mut prev = TimelineState::default();
    for (state, _) in frames {
        if state.active && (!prev.active || state.start_time != prev.start_time) {
            count += 1;
        }
        prev = *state;
    }
    count
}

#[test]
fn default_show_has_three_four_second_phases_of_five() {
    let show = FireworkTimeline::default();
    assert!(show.validate().is_ok());
    assert_eq!(show.phases().len(), 3);
    for (i, phase) in show.phases().iter().enumerate() {
        assert_eq!(phase.entries.len(), 5);
        assert_eq!(phase.start, i as f32 * 4.0);
        assert_eq!(phase.duration, 4.0);
    }
    assert_eq!(show.cycle_length(), 12.0);
    assert_eq!(show.initial_size(), 0.1);
    assert_eq!(show.growth_rate(), 0.2);
}

#[test]
fn default_show_rotates_meshes_between_phases() {
    let show = FireworkTimeline::default();
    let first: Vec<_> = show.phases()[0].entries.iter().map(|e| e.model).collect();
    let second: Vec<_> = show.phases()[1].entries.iter().map(|e| e.model).collect();
    assert_eq!(first[0], ModelHandle::Firework(0));
    assert_eq!(second[0], ModelHandle::Firework(1));
    assert_eq!(second[4], ModelHandle::Firework(0));
    // launch points stay put
    assert_eq!(
        show.phases()[0].entries[2].position,
        show.phases()[2].entries[2].position
    );
}

#[test]
fn scale_starts_at_initial_size() {
    let show = single_entry_show(0.0);
    let phase = &show.phases()[0];
    assert_eq!(show.entry_scale(phase, &phase.entries[0], 0.0), 0.1);
}

#[test]
fn scale_grows_linearly_through_the_phase() {
    let show = single_entry_show(0.0);
    let phase = &show.phases()[0];
    let e = &phase.entries[0];
    assert!((show.entry_scale(phase, e, 1.0) - 0.15).abs() < 1e-6);
    assert!((show.entry_scale(phase, e, 2.0) - 0.2).abs() < 1e-6);
    assert!((show.entry_scale(phase, e, 3.99) - 0.2995).abs() < 1e-5);

    let draws = show.visible_at(1.0);
    assert_eq!(draws.len(), 1);
    assert!((draws[0].scale - 0.15).abs() < 1e-6);
}

#[test]
fn delayed_entry_appears_after_its_delay() {
    let show = single_entry_show(0.9);
    assert!(show.visible_at(0.5).is_empty());
    assert!(show.visible_at(0.9).is_empty());
    let draws = show.visible_at(0.95);
    assert_eq!(draws.len(), 1);
    // grows from the moment it appears
    assert!((draws[0].scale - (0.1 + (0.05 / 4.0) * 0.2)).abs() < 1e-6);
    assert_eq!(show.visible_at(3.5).len(), 1);
}

#[test]
fn delays_count_from_the_trigger() {
    let show = single_entry_show(0.9);
    // past every delay, so later phases show their entry from the first instant
    let draws = show.visible_at(4.5);
    assert_eq!(draws.len(), 1);
    assert_eq!(draws[0].model, ModelHandle::Firework(1));
    assert!((draws[0].scale - (0.1 + ((4.5 - 4.0 - 0.9) / 4.0) * 0.2)).abs() < 1e-6);
    assert!(draws[0].scale < show.initial_size());

    assert_eq!(show.visible_at(8.0)[0].model, ModelHandle::Firework(2));
}

#[test]
fn later_phases_show_every_entry_at_once() {
    let show = FireworkTimeline::default();
    let draws = show.visible_at(4.1);
    assert_eq!(draws.len(), 5);
    let last = draws
        .iter()
        .find(|d| d.position == firework_position(4))
        .unwrap();
    let expected = 0.1 + ((4.1 - 4.0 - 1.2) / 4.0) * 0.2;
    assert!((last.scale - expected).abs() < 1e-5);
    assert_eq!(show.visible_at(8.0).len(), 5);
}

#[test]
fn default_show_staggers_entries() {
    let show = FireworkTimeline::default();
    assert_eq!(show.visible_at(0.1).len(), 1);
    assert_eq!(show.visible_at(0.5).len(), 2);
    assert_eq!(show.visible_at(1.0).len(), 4);
    assert_eq!(show.visible_at(2.0).len(), 5);
    // delays are long past once the second phase begins
    assert_eq!(show.visible_at(4.1).len(), 5);
    assert!(show.visible_at(12.0).is_empty());
    assert!(show.visible_at(-0.5).is_empty());
}

#[test]
fn draw_transform_translates_then_scales() {
    let show = single_entry_show(0.0);
    let draw = show.visible_at(2.0)[0];
    let expected =
        Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0)) * Mat4::from_scale(Vec3::splat(draw.scale));
    assert_eq!(draw.transform, expected);
    assert_eq!(draw.transform.transform_point3(Vec3::ZERO), draw.position);

    let placement = Placement::from(draw);
    assert_eq!(placement.model, draw.model);
    assert_eq!(placement.transform(), draw.transform);
}

#[test]
fn idle_without_trigger_yields_nothing() {
    let show = FireworkTimeline::default();
    let (state, draws) = show.step(TimelineState::default(), 3.0, false, false);
    assert!(!state.is_running());
    assert!(draws.is_empty());
}

#[test]
fn rising_edge_latches_start_time() {
    let show = FireworkTimeline::default();
    let (state, draws) = show.step(TimelineState::default(), 10.0, true, false);
    assert!(state.is_running());
    assert_eq!(state.start_time, 10.0);
    // zero elapsed: the first entry's delay has not passed yet
    assert!(draws.is_empty());

    let (state, draws) = show.step(state, 10.5, false, true);
    assert!(state.is_running());
    assert_eq!(state.elapsed(10.5), Some(0.5));
    assert_eq!(draws.len(), 2);
}

#[test]
fn held_key_from_idle_does_not_activate() {
    let show = FireworkTimeline::default();
    let (state, _) = show.step(TimelineState::default(), 1.0, true, true);
    assert!(!state.is_running());
}

#[test]
fn holding_the_trigger_activates_once() {
    let show = FireworkTimeline::default();
    // held for 20s at 60fps, well past the end of the cycle
    let frames = run(&show, 1200, 1.0 / 60.0, |_| true);
    assert_eq!(activations(&frames), 1);
    let (last, draws) = frames[frames.len() - 1];
    assert!(!last.is_running());
    assert_eq!(draws, 0);
}

#[test]
fn cycle_returns_to_idle_at_twelve_seconds() {
    let show = FireworkTimeline::default();
    let state = TimelineState {
        active: true,
        start_time: 0.0,
    };
    let (still_running, draws) = show.step(state, 11.99, false, false);
    assert!(still_running.is_running());
    assert_eq!(draws.len(), 5);

    let (state, draws) = show.step(state, 12.0, false, false);
    assert_eq!(state, TimelineState::default());
    assert!(draws.is_empty());

    let (state, draws) = show.step(state, 13.0, false, false);
    assert!(!state.is_running());
    assert!(draws.is_empty());
}

#[test]
fn edge_on_the_finishing_frame_is_consumed() {
    let show = FireworkTimeline::default();
    let running = TimelineState {
        active: true,
        start_time: 0.0,
    };
    let (state, draws) = show.step(running, 12.0, true, false);
    assert_eq!(state, TimelineState::default());
    assert!(draws.is_empty());

    // still held on the next frame: no new cycle
    let (state, _) = show.step(state, 12.1, true, true);
    assert!(!state.is_running());

    let (state, _) = show.step(state, 12.2, false, true);
    let (state, _) = show.step(state, 12.3, true, false);
    assert!(state.is_running());
    assert_eq!(state.start_time, 12.3);
}

#[test]
fn retrigger_needs_a_fresh_edge() {
    let show = FireworkTimeline::default();
    // tap at 0s, tap again at 2s (ignored while running), tap at 13s
    let tapped = |now: f32| now < 0.1 || (2.0..2.1).contains(&now) || (13.0..13.1).contains(&now);
    let frames = run(&show, 900, 1.0 / 60.0, tapped);
    assert_eq!(activations(&frames), 2);

    let at = |t: f32| frames[(t * 60.0) as usize].0;
    assert_eq!(at(3.0).start_time, 0.0);
    assert!(!at(12.5).is_running());
    assert!(at(14.0).is_running());
}

#[test]
fn builder_chains_phases_back_to_back() {
    let show = FireworkTimeline::builder()
        .initial_size(0.2)
        .growth_rate(0.5)
        .phase(2.0, [entry(0.0, 0)])
        .phase(3.0, [entry(0.5, 1), entry(1.0, 2)])
        .build()
        .unwrap();
    assert_eq!(show.phases()[1].start, 2.0);
    assert_eq!(show.cycle_length(), 5.0);
    assert_eq!(show.visible_at(0.5)[0].scale, 0.2 + (0.5 / 2.0) * 0.5);
    assert_eq!(show.visible_at(3.25).len(), 2);
}

#[test]
fn builder_allows_gaps_between_phases() {
    let show = FireworkTimeline::builder()
        .phase_at(0.0, 1.0, [entry(0.0, 0)])
        .phase_at(3.0, 1.0, [entry(0.0, 1)])
        .build()
        .unwrap();
    assert!(show.active_phase(2.0).is_none());
    assert!(show.visible_at(2.0).is_empty());
    assert_eq!(show.visible_at(3.5).len(), 1);
}

#[test]
fn builder_rejects_malformed_tables() {
    assert_eq!(
        FireworkTimeline::builder().build(),
        Err(ConfigError::EmptyTimeline)
    );
    assert!(matches!(
        FireworkTimeline::builder()
            .phase_at(0.0, 4.0, [entry(0.0, 0)])
            .phase_at(3.0, 4.0, [entry(0.0, 1)])
            .build(),
        Err(ConfigError::PhaseOutOfOrder { phase: 1, .. })
    ));
    assert!(matches!(
        FireworkTimeline::builder().phase(0.0, [entry(0.0, 0)]).build(),
        Err(ConfigError::NonPositivePhaseDuration { phase: 0, .. })
    ));
    assert!(matches!(
        FireworkTimeline::builder().phase(4.0, [entry(0.0, 0), entry(-0.1, 1)]).build(),
        Err(ConfigError::NegativeDelay { phase: 0, entry: 1, .. })
    ));
    assert!(matches!(
        FireworkTimeline::builder().phase(4.0, [entry(4.0, 0)]).build(),
        Err(ConfigError::DelayBeyondPhase { phase: 0, entry: 0, .. })
    ));
    assert!(matches!(
        FireworkTimeline::builder()
            .initial_size(0.0)
            .phase(4.0, [entry(0.0, 0)])
            .build(),
        Err(ConfigError::NonPositiveInitialSize { .. })
    ));
}
