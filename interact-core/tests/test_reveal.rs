use interact_core::reveal::{RevealOutcome, RevealSet, REVEAL_VISIBILITY_THRESHOLD};
use proptest::prelude::*;

#[test]
fn test_reveal_is_one_shot_per_element() {
    let mut set = RevealSet::new(3).unwrap();
    assert_eq!(set.report(1, REVEAL_VISIBILITY_THRESHOLD), RevealOutcome::Revealed);
    // Re-entering the viewport changes nothing.
    assert_eq!(set.report(1, 1.0), RevealOutcome::AlreadyRevealed);
    assert_eq!(set.report(1, 0.0), RevealOutcome::AlreadyRevealed);
    assert_eq!(set.revealed_count(), 1);
}

#[test]
fn test_below_threshold_keeps_observing() {
    let mut set = RevealSet::new(1).unwrap();
    assert_eq!(set.report(0, 0.11), RevealOutcome::Pending);
    assert!(!set.is_revealed(0));
}

#[test]
fn test_elements_never_scrolled_into_view_stay_hidden() {
    let mut set = RevealSet::new(5).unwrap();
    assert_eq!(set.element_count(), 5);
    set.report(0, 0.9);
    set.report(3, 0.9);
    assert_eq!(set.revealed_count(), 2);
    for index in [1, 2, 4] {
        assert!(!set.is_revealed(index));
    }
}

proptest! {
    // revealed is monotonic: once true it never flips back, whatever
    // reports arrive afterwards.
    #[test]
    fn prop_revealed_is_monotonic(
        element_count in 1usize..6,
        reports in prop::collection::vec((0usize..8, 0.0f64..=1.0), 0..64),
    ) {
        let mut set = RevealSet::new(element_count).unwrap();
        let mut seen = vec![false; element_count];
        for (index, ratio) in reports {
            let outcome = set.report(index, ratio);
            if index < element_count {
                match outcome {
                    RevealOutcome::Revealed => {
                        prop_assert!(!seen[index]);
                        seen[index] = true;
                    }
                    RevealOutcome::AlreadyRevealed => prop_assert!(seen[index]),
                    RevealOutcome::Pending => prop_assert!(!seen[index]),
                }
                prop_assert_eq!(set.is_revealed(index), seen[index]);
            } else {
                prop_assert_eq!(outcome, RevealOutcome::Pending);
            }
        }
    }
}
