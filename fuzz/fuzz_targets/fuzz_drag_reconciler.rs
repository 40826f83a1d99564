#![no_main]

use libfuzzer_sys::fuzz_target;
use stepslider_core::{
    CommitPolicy, DragReconciler, LayoutDirection, OrderedInterpolation, PointerPhase,
    PointerSample, ValueSequence,
};

fuzz_target!(|data: &[u8]| {
    // First four bytes: cell count (1..32), width (0..1023), policy/direction bits.
    if data.len() < 4 {
        return;
    }
    let cells = usize::from(data[0] % 32) + 1;
    let width = f64::from(u16::from_le_bytes([data[1], data[2]]) % 1024);
    let deferred = data[3] & 1 != 0;
    let rtl = data[3] & 2 != 0;
    let payload = &data[4..];

    let Ok(values) = ValueSequence::new(0..cells as u32) else {
        return;
    };
    // Zero width must be rejected, any other width accepted.
    let Ok(track) = values.track(width) else {
        assert_eq!(width, 0.0, "positive width rejected");
        return;
    };

    let policy = if deferred {
        CommitPolicy::DeferredToDragEnd
    } else {
        CommitPolicy::Immediate
    };
    let direction = if rtl {
        LayoutDirection::RightToLeft
    } else {
        LayoutDirection::LeftToRight
    };
    let mut reconciler = DragReconciler::new(policy, direction);
    let mut selection = 0u32;

    // Each 3-byte chunk is one sample: phase byte, then x as i16 (off-track allowed).
    for chunk in payload.chunks_exact(3).take(256) {
        let phase = match chunk[0] % 4 {
            0 => PointerPhase::Start,
            1 => PointerPhase::Move,
            2 => PointerPhase::End,
            _ => PointerPhase::Cancel,
        };
        let x = f64::from(i16::from_le_bytes([chunk[1], chunk[2]]));
        let feedback = reconciler.process(
            PointerSample::new(x, phase),
            &values,
            &track,
            &mut selection,
        );

        // Post-conditions that must always hold:
        assert!(feedback.len() <= 2, "more than one event of each kind");
        assert!((selection as usize) < cells, "selection left the sequence");
        if matches!(phase, PointerPhase::End | PointerPhase::Cancel) {
            assert!(reconciler.state().is_idle(), "terminal sample left drag state");
        }
        let p = reconciler.thumb_progress::<OrderedInterpolation>(&values, &track, &selection);
        assert!((0.0..=1.0).contains(&p.get()), "progress out of range");
        let offset = track.thumb_offset(p);
        assert!(offset >= 0.0 && offset <= track.width() - track.cell_width());
    }
});
