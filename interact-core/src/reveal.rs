//! One-shot reveal-on-scroll latches.
//!
//! Each observed element flips from hidden to revealed the first time
//! it intersects the viewport, independently of the others, and is
//! never hidden again. Elements that never scroll into view simply
//! stay un-revealed.

use serde::{Deserialize, Serialize};

/// Intersection ratio that reveals an element.
pub const REVEAL_VISIBILITY_THRESHOLD: f64 = 0.12;

/// What the host should do after a visibility report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// First time over the threshold: apply the reveal effect and
    /// unobserve the element.
    Revealed,
    /// Latched on an earlier report; nothing to do.
    AlreadyRevealed,
    /// Not visible enough yet (or unknown index); keep observing.
    Pending,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    /// `None` when no elements match: nothing gets observed.
    pub fn new(element_count: usize) -> Option<Self> {
        if element_count == 0 {
            return None;
        }
        Some(Self {
            revealed: vec![false; element_count],
        })
    }

    /// Visibility report for element `index` at the given ratio.
    pub fn report(&mut self, index: usize, ratio: f64) -> RevealOutcome {
        match self.revealed.get(index) {
            Some(true) => RevealOutcome::AlreadyRevealed,
            Some(false) if ratio >= REVEAL_VISIBILITY_THRESHOLD => {
                self.revealed[index] = true;
                log::trace!("element {index} revealed at ratio {ratio:.2}");
                RevealOutcome::Revealed
            }
            _ => RevealOutcome::Pending,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&r| r).count()
    }

    pub fn element_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_declines_to_construct() {
        assert!(RevealSet::new(0).is_none());
    }

    #[test]
    fn reveal_fires_once_per_element() {
        let mut set = RevealSet::new(2).unwrap();
        assert_eq!(set.report(0, 0.05), RevealOutcome::Pending);
        assert_eq!(set.report(0, 0.5), RevealOutcome::Revealed);
        assert_eq!(set.report(0, 1.0), RevealOutcome::AlreadyRevealed);
        assert!(!set.is_revealed(1));
    }

    #[test]
    fn elements_latch_independently() {
        let mut set = RevealSet::new(3).unwrap();
        set.report(2, 0.2);
        assert!(set.is_revealed(2));
        assert!(!set.is_revealed(0));
        assert_eq!(set.revealed_count(), 1);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut set = RevealSet::new(1).unwrap();
        assert_eq!(set.report(7, 1.0), RevealOutcome::Pending);
        assert_eq!(set.revealed_count(), 0);
    }
}
