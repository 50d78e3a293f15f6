use gameplay::{EndingConfig, EndingKind, EndingOutcome, EndingPhase, EndingSequencer};

const DT: f32 = 0.25;

fn sequencer() -> EndingSequencer {
    let cfg = EndingConfig { fade_duration: 1.0, display_image_duration: 1.0 };
    EndingSequencer::new(&cfg).expect("valid ending config")
}

#[test]
fn nothing_happens_while_playing() {
    let mut seq = sequencer();
    for _ in 0..100 {
        let frame = seq.tick(DT);
        assert_eq!(frame.overlay, None);
        assert_eq!(frame.play_audio, None);
        assert_eq!(frame.outcome, None);
    }
    assert_eq!(seq.phase(), EndingPhase::Playing);
}

#[test]
fn caught_fades_in_then_quits_exactly_once() {
    let mut seq = sequencer();
    seq.notify_caught();

    let mut outcomes = Vec::new();
    let mut audio = Vec::new();
    for i in 1..=20 {
        let t = i as f32 * DT;
        let frame = seq.tick(DT);
        if let Some(kind) = frame.play_audio {
            audio.push((t, kind));
        }
        if let Some(outcome) = frame.outcome {
            outcomes.push((t, outcome));
        }
        if let Some((kind, opacity)) = frame.overlay {
            assert_eq!(kind, EndingKind::Caught);
            if t == 0.5 {
                assert_eq!(opacity, 0.5);
            }
            if t >= 1.0 {
                assert_eq!(opacity, 1.0, "opacity at t={t}");
            }
        }
    }

    assert_eq!(audio, vec![(DT, EndingKind::Caught)]);
    assert_eq!(outcomes, vec![(2.25, EndingOutcome::Quit)]);
    assert_eq!(seq.phase(), EndingPhase::Terminated);
}

#[test]
fn terminal_action_waits_until_strictly_after_fade_plus_display() {
    let mut seq = sequencer();
    seq.notify_exit_reached();
    for _ in 0..8 {
        assert_eq!(seq.tick(DT).outcome, None);
    }
    assert_eq!(seq.phase(), EndingPhase::Ending { kind: EndingKind::Exit, timer: 2.0 });
    assert_eq!(seq.tick(DT).outcome, Some(EndingOutcome::ReloadLevel));
}

#[test]
fn exit_wins_when_both_happen_in_the_same_frame() {
    let mut seq = sequencer();
    seq.notify_caught();
    seq.notify_exit_reached();
    let frame = seq.tick(DT);
    assert_eq!(frame.play_audio, Some(EndingKind::Exit));
    assert_eq!(frame.overlay.map(|(k, _)| k), Some(EndingKind::Exit));
}

#[test]
fn kind_is_locked_once_the_sequence_starts() {
    let mut seq = sequencer();
    seq.notify_caught();
    seq.tick(DT);
    seq.notify_exit_reached();
    let frame = seq.tick(DT);
    assert_eq!(frame.overlay.map(|(k, _)| k), Some(EndingKind::Caught));
    assert_eq!(frame.play_audio, None, "audio only on the first ending frame");
}

#[test]
fn invalid_fade_is_rejected() {
    let cfg = EndingConfig { fade_duration: 0.0, display_image_duration: 1.0 };
    assert!(EndingSequencer::new(&cfg).is_err());
    let cfg = EndingConfig { fade_duration: 1.0, display_image_duration: -0.5 };
    assert!(EndingSequencer::new(&cfg).is_err());
}
