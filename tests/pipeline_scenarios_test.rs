//! End-to-end scenarios through the full pipeline: frames in, commands out.

mod test_helpers;

use hand_gesture_control::classifier::{create_classifier, GestureLabel};
use hand_gesture_control::dispatch::{ActionDispatcher, ActionSink};
use hand_gesture_control::landmarks::LandmarkFrame;
use hand_gesture_control::session::{Session, SessionState};
use hand_gesture_control::slides::SlideDeck;
use hand_gesture_control::source::ReplaySource;
use std::time::{Duration, Instant};
use test_helpers::{open_palm_frame, swipe_frame, thumb_only_frame, RecordingSink};

const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn static_session(sink: Box<dyn ActionSink>) -> Session {
    Session::start(
        Box::new(ReplaySource::new(Vec::new())),
        create_classifier("static").unwrap(),
        ActionDispatcher::new(sink, Duration::from_millis(1800), Duration::from_millis(1200)),
    )
}

fn swipe_session(sink: Box<dyn ActionSink>) -> Session {
    Session::start(
        Box::new(ReplaySource::new(Vec::new())),
        create_classifier("swipe").unwrap(),
        ActionDispatcher::new(sink, Duration::from_millis(1000), Duration::from_millis(1000)),
    )
}

/// Feed frames at the nominal frame interval, returning accepted labels
fn feed(
    session: &mut Session,
    frames: &[LandmarkFrame],
    start: Instant,
    offset: u32,
) -> Vec<GestureLabel> {
    frames
        .iter()
        .enumerate()
        .filter_map(|(i, frame)| {
            let now = start + FRAME_INTERVAL * (offset + i as u32);
            session.process_frame(frame, now)
        })
        .collect()
}

#[test]
fn test_thumb_only_dispatches_volume_up_once() {
    // Scenario A: eight thumb-only frames; the first qualifying frame
    // dispatches, the rest fall inside the 1800 ms cooldown
    let (sink, delivered) = RecordingSink::new();
    let mut session = static_session(Box::new(sink));
    let start = Instant::now();

    let frames = vec![thumb_only_frame(); 8];
    let accepted = feed(&mut session, &frames, start, 0);
    assert_eq!(accepted, vec![GestureLabel::VolumeUp]);

    // Repeating the same frames well within the cooldown adds nothing
    let accepted = feed(&mut session, &frames, start, 8);
    assert!(accepted.is_empty());

    let delivered = delivered.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].kind, "volume");
    assert_eq!(delivered[0].parameters.get("type").unwrap(), "up");
}

#[test]
fn test_single_open_palm_frame_fires_screenshot() {
    // Scenario B: a lone count-5 frame averages 5.0 over the partial
    // buffer and dispatches immediately
    let (sink, delivered) = RecordingSink::new();
    let mut session = static_session(Box::new(sink));

    let accepted = session.process_frame(&open_palm_frame(), Instant::now());
    assert_eq!(accepted, Some(GestureLabel::Screenshot));

    let delivered = delivered.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].kind, "screenshot");
    assert!(delivered[0].parameters.is_empty());
}

#[test]
fn test_leftward_sweep_fires_slide_next_once() {
    // Scenario C: fingertip x walking 0.70 down to 0.45 yields delta -0.25
    // on the sixth frame; the cleared buffer plus the 1000 ms cooldown
    // block an immediate repeat
    let (sink, _) = RecordingSink::new();
    let mut session = swipe_session(Box::new(sink));
    let start = Instant::now();

    let sweep: Vec<LandmarkFrame> = [0.70, 0.65, 0.60, 0.55, 0.50, 0.45]
        .iter()
        .map(|&x| swipe_frame(x))
        .collect();
    let accepted = feed(&mut session, &sweep, start, 0);
    assert_eq!(accepted, vec![GestureLabel::SlideNext]);

    // The swipe continues; a second full window accrues within the
    // cooldown and is dropped
    let continuation: Vec<LandmarkFrame> = [0.40, 0.35, 0.30, 0.25, 0.20, 0.15]
        .iter()
        .map(|&x| swipe_frame(x))
        .collect();
    let accepted = feed(&mut session, &continuation, start, 6);
    assert!(accepted.is_empty());

    // Past the cooldown a fresh sweep is actionable again
    let later = start + Duration::from_millis(1500);
    let accepted = feed(&mut session, &sweep, later, 0);
    assert_eq!(accepted, vec![GestureLabel::SlideNext]);
}

#[test]
fn test_hand_loss_mid_sequence_restarts_accumulation() {
    // Scenario D: the gap at frame 4 clears the buffer and the cooldown
    // clock; frames after it accumulate from empty
    let (sink, delivered) = RecordingSink::new();
    let mut session = static_session(Box::new(sink));
    let start = Instant::now();

    let mut frames = vec![thumb_only_frame(); 3];
    frames.push(LandmarkFrame::empty());
    frames.extend(vec![thumb_only_frame(); 4]);

    let accepted = feed(&mut session, &frames, start, 0);
    assert_eq!(accepted, vec![GestureLabel::VolumeUp, GestureLabel::VolumeUp]);
    assert_eq!(delivered.lock().unwrap().len(), 2);
}

#[test]
fn test_slide_index_clamps_at_deck_end() {
    // Scenario E: a deck on its last slide absorbs further slide_next
    // labels without wrapping or erroring
    let (sink, _) = RecordingSink::new();
    let mut session = swipe_session(Box::new(sink));
    let mut deck = SlideDeck::new(2);
    let start = Instant::now();

    let sweep: Vec<LandmarkFrame> = [0.70, 0.65, 0.60, 0.55, 0.50, 0.45]
        .iter()
        .map(|&x| swipe_frame(x))
        .collect();

    for label in feed(&mut session, &sweep, start, 0) {
        deck.apply(label);
    }
    assert_eq!(deck.current(), 1);

    // Second sweep past the cooldown lands on the already-last slide
    let later = start + Duration::from_millis(1500);
    for label in feed(&mut session, &sweep, later, 0) {
        deck.apply(label);
    }
    assert_eq!(deck.current(), 1);
}

#[test]
fn test_commands_never_closer_than_the_cooldown() {
    // Holding an open palm for ten seconds of frames dispatches repeatedly,
    // but never two commands within 1800 ms
    let (sink, delivered) = RecordingSink::new();
    let mut session = static_session(Box::new(sink));
    let start = Instant::now();

    for tick in 0..300u32 {
        session.process_frame(&open_palm_frame(), start + FRAME_INTERVAL * tick);
    }

    let delivered = delivered.lock().unwrap();
    assert!(delivered.len() > 3);
    for pair in delivered.windows(2) {
        assert!(
            pair[1].issued_at.duration_since(pair[0].issued_at) >= Duration::from_millis(1800)
        );
    }
}

#[test]
fn test_hand_loss_forces_idle_and_none() {
    let (sink, _) = RecordingSink::new();
    let mut session = static_session(Box::new(sink));
    let start = Instant::now();

    // Build up nearly a full window of open palm frames
    for tick in 0..5u32 {
        session.process_frame(&open_palm_frame(), start + FRAME_INTERVAL * tick);
    }

    let label = session.process_frame(&LandmarkFrame::empty(), start + FRAME_INTERVAL * 5);
    assert_eq!(label, None);
    assert_eq!(session.state(), SessionState::Idle);
}
