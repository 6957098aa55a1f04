//! Exclusive-open FAQ accordion state.
//!
//! At most one panel is open at any time. Opening a panel closes the
//! others as part of the same transition, and the open height is
//! measured fresh at each opening because panel content can change
//! between openings.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
struct Panel {
    open: bool,
    target_height: f64,
}

/// Render directive for one panel: the state the collaborator should
/// project (height 0 when closed).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelTarget {
    pub index: usize,
    pub open: bool,
    pub target_height: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Accordion {
    panels: Vec<Panel>,
}

impl Accordion {
    /// `None` when the page has no FAQ section.
    pub fn new(panel_count: usize) -> Option<Self> {
        if panel_count == 0 {
            return None;
        }
        Some(Self {
            panels: vec![Panel::default(); panel_count],
        })
    }

    /// User toggled panel `index`; `measured_height` is the panel's
    /// content height read from the page at this moment.
    ///
    /// Closes every other open panel, then flips the toggled one. The
    /// returned targets cover all panels so the renderer can apply the
    /// whole transition at once. An out-of-range index changes
    /// nothing.
    pub fn toggle(&mut self, index: usize, measured_height: f64) -> Vec<PanelTarget> {
        if index < self.panels.len() {
            for (i, panel) in self.panels.iter_mut().enumerate() {
                if i != index && panel.open {
                    panel.open = false;
                    panel.target_height = 0.0;
                }
            }
            let panel = &mut self.panels[index];
            if panel.open {
                panel.open = false;
                panel.target_height = 0.0;
            } else {
                panel.open = true;
                panel.target_height = measured_height.max(0.0);
            }
            log::trace!(
                "accordion toggle {index}: now {}",
                if panel.open { "open" } else { "closed" }
            );
        }
        self.targets()
    }

    /// Current render directives for every panel.
    pub fn targets(&self) -> Vec<PanelTarget> {
        self.panels
            .iter()
            .enumerate()
            .map(|(index, panel)| PanelTarget {
                index,
                open: panel.open,
                target_height: panel.target_height,
            })
            .collect()
    }

    /// Index of the open panel, if any.
    pub fn open_panel(&self) -> Option<usize> {
        self.panels.iter().position(|panel| panel.open)
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accordion_declines_to_construct() {
        assert!(Accordion::new(0).is_none());
    }

    #[test]
    fn opening_a_panel_closes_the_rest() {
        let mut accordion = Accordion::new(3).unwrap();
        accordion.toggle(0, 120.0);
        let targets = accordion.toggle(2, 80.0);
        assert_eq!(accordion.open_panel(), Some(2));
        assert!(!targets[0].open);
        assert_eq!(targets[0].target_height, 0.0);
        assert!(targets[2].open);
        assert_eq!(targets[2].target_height, 80.0);
    }

    #[test]
    fn toggling_the_open_panel_closes_everything() {
        let mut accordion = Accordion::new(2).unwrap();
        accordion.toggle(1, 60.0);
        accordion.toggle(1, 60.0);
        assert_eq!(accordion.open_panel(), None);
    }

    #[test]
    fn height_is_captured_fresh_at_each_opening() {
        let mut accordion = Accordion::new(2).unwrap();
        accordion.toggle(0, 100.0);
        accordion.toggle(0, 100.0);
        // Content grew while the panel was closed.
        let targets = accordion.toggle(0, 140.0);
        assert_eq!(targets[0].target_height, 140.0);
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut accordion = Accordion::new(2).unwrap();
        accordion.toggle(0, 50.0);
        let targets = accordion.toggle(9, 10.0);
        assert_eq!(accordion.open_panel(), Some(0));
        assert!(targets[0].open);
    }
}
