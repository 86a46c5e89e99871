use super::*;
use crate::foundation::core::Phase;

fn snap(active_index: usize) -> AnimationSnapshot {
    AnimationSnapshot {
        phase: Phase::Normal,
        local_progress: 0.0,
        active_index,
        rotation_degrees: 0.0,
        text_opacities: vec![],
        background_opacity: 0.0,
    }
}

#[test]
fn first_sample_is_silent() {
    let mut t = EdgeTrigger::new();
    assert_eq!(t.on_sample(None, &snap(7)), None);
    assert_eq!(t.last_index(), Some(7));
}

#[test]
fn one_event_per_transition() {
    let mut t = EdgeTrigger::new();
    let a = snap(0);
    let b = snap(1);
    let c = snap(1);
    assert_eq!(t.on_sample(None, &a), None);
    assert_eq!(
        t.on_sample(Some(&a), &b),
        Some(IndexChanged { from: 0, to: 1 })
    );
    assert_eq!(t.on_sample(Some(&b), &c), None);
}

#[test]
fn absent_previous_after_first_uses_remembered_index() {
    let mut t = EdgeTrigger::new();
    t.on_sample(None, &snap(2));
    assert_eq!(
        t.on_sample(None, &snap(3)),
        Some(IndexChanged { from: 2, to: 3 })
    );
}

#[test]
fn counts_match_distinct_consecutive_pairs() {
    let seq = [0, 0, 1, 1, 1, 2, 1, 1, 0, 0, 0, 3];
    let mut t = EdgeTrigger::new();
    let mut prev: Option<AnimationSnapshot> = None;
    let mut events = Vec::new();
    for i in seq {
        let cur = snap(i);
        events.extend(t.on_sample(prev.as_ref(), &cur));
        prev = Some(cur);
    }
    let expected = seq.windows(2).filter(|w| w[0] != w[1]).count();
    assert_eq!(events.len(), expected);
    assert_eq!(events[0], IndexChanged { from: 0, to: 1 });
    assert_eq!(events.last(), Some(&IndexChanged { from: 0, to: 3 }));
}

#[test]
fn reset_starts_a_new_session() {
    let mut t = EdgeTrigger::new();
    t.on_sample(None, &snap(4));
    t.reset();
    assert_eq!(t.on_sample(None, &snap(9)), None);
}

#[test]
fn closures_and_recorder_are_sinks() {
    let mut rec = RecordingCue::new();
    rec.play(IndexChanged { from: 0, to: 1 }).unwrap();
    assert_eq!(rec.events().len(), 1);

    let mut n = 0;
    let mut counter = |_e: IndexChanged| -> ReelResult<()> {
        n += 1;
        Ok(())
    };
    counter.play(IndexChanged { from: 1, to: 2 }).unwrap();
    assert_eq!(n, 1);
    assert!(NullCue.play(IndexChanged { from: 0, to: 0 }).is_ok());
}
