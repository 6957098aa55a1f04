use interact_core::accordion::Accordion;
use proptest::prelude::*;

#[test]
fn test_opening_panels_in_turn_keeps_one_open() {
    let mut accordion = Accordion::new(4).unwrap();
    assert_eq!(accordion.panel_count(), 4);
    for index in 0..4 {
        accordion.toggle(index, 90.0);
        assert_eq!(accordion.open_panel(), Some(index));
    }
}

#[test]
fn test_closing_the_only_open_panel_yields_all_closed() {
    let mut accordion = Accordion::new(3).unwrap();
    accordion.toggle(1, 75.0);
    let targets = accordion.toggle(1, 75.0);
    assert_eq!(accordion.open_panel(), None);
    assert!(targets.iter().all(|t| !t.open && t.target_height == 0.0));
}

#[test]
fn test_remeasured_height_is_used_on_reopen() {
    let mut accordion = Accordion::new(2).unwrap();
    accordion.toggle(0, 100.0);
    accordion.toggle(1, 40.0);
    let targets = accordion.toggle(0, 160.0);
    assert_eq!(targets[0].target_height, 160.0);
    assert_eq!(targets[1].target_height, 0.0);
}

proptest! {
    // Exclusive-open invariant under any toggle sequence, including
    // out-of-range indices.
    #[test]
    fn prop_at_most_one_open(
        panel_count in 1usize..6,
        toggles in prop::collection::vec((0usize..8, 1.0f64..400.0), 0..48),
    ) {
        let mut accordion = Accordion::new(panel_count).unwrap();
        for (index, height) in toggles {
            let targets = accordion.toggle(index, height);
            let open = targets.iter().filter(|t| t.open).count();
            prop_assert!(open <= 1);
            // Closed panels always project height zero.
            for target in &targets {
                if !target.open {
                    prop_assert_eq!(target.target_height, 0.0);
                }
            }
        }
    }
}
