//! Accordion open-state: which panels of a fixed list are expanded.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// How many panels may be open at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccordionMode {
    /// Opening a panel closes the others
    #[default]
    Single,
    /// Panels toggle independently
    Multiple,
}

impl AccordionMode {
    /// Mode from the `allow_multiple` flag.
    pub fn from_allow_multiple(allow_multiple: bool) -> Self {
        if allow_multiple {
            AccordionMode::Multiple
        } else {
            AccordionMode::Single
        }
    }
}

/// Open panels over `panel_count` headers. Everything starts closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    mode: AccordionMode,
    panel_count: usize,
    open: BTreeSet<usize>,
}

impl AccordionState {
    /// All panels closed.
    pub fn new(panel_count: usize, mode: AccordionMode) -> Self {
        Self {
            mode,
            panel_count,
            open: BTreeSet::new(),
        }
    }

    /// Configured mode.
    pub fn mode(&self) -> AccordionMode {
        self.mode
    }

    /// Whether panel `index` renders its body.
    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// Open panel indices in ascending order.
    pub fn open_panels(&self) -> Vec<usize> {
        self.open.iter().copied().collect()
    }

    /// Header click on panel `index`. Unknown indices are ignored.
    ///
    /// ```rust
    /// use launchpad_core::accordion::{AccordionMode, AccordionState};
    ///
    /// let mut faq = AccordionState::new(5, AccordionMode::Single);
    /// faq.toggle(2);
    /// faq.toggle(4);
    /// assert_eq!(faq.open_panels(), vec![4]);
    /// ```
    pub fn toggle(&mut self, index: usize) {
        if index >= self.panel_count {
            tracing::warn!(index, panels = self.panel_count, "accordion toggle out of range");
            return;
        }

        match self.mode {
            AccordionMode::Multiple => {
                if !self.open.remove(&index) {
                    self.open.insert(index);
                }
            }
            AccordionMode::Single => {
                let only_this = self.open.len() == 1 && self.open.contains(&index);
                self.open.clear();
                if !only_this {
                    self.open.insert(index);
                }
            }
        }

        tracing::debug!(index, open = ?self.open, "accordion toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_closed() {
        let faq = AccordionState::new(5, AccordionMode::Single);
        assert!((0..5).all(|i| !faq.is_open(i)));
    }

    #[test]
    fn single_mode_keeps_only_the_last_opened() {
        let mut faq = AccordionState::new(5, AccordionMode::Single);
        faq.toggle(2);
        faq.toggle(4);
        assert_eq!(faq.open_panels(), vec![4]);

        faq.toggle(4);
        assert_eq!(faq.open_panels(), Vec::<usize>::new());
    }

    #[test]
    fn multiple_mode_toggles_membership() {
        let mut faq = AccordionState::new(5, AccordionMode::Multiple);
        faq.toggle(0);
        faq.toggle(3);
        faq.toggle(1);
        assert_eq!(faq.open_panels(), vec![0, 1, 3]);

        faq.toggle(3);
        assert_eq!(faq.open_panels(), vec![0, 1]);
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut faq = AccordionState::new(2, AccordionMode::Multiple);
        faq.toggle(0);
        faq.toggle(7);
        assert_eq!(faq.open_panels(), vec![0]);
    }

    #[test]
    fn mode_from_flag() {
        assert_eq!(AccordionMode::from_allow_multiple(false), AccordionMode::Single);
        assert_eq!(AccordionMode::from_allow_multiple(true), AccordionMode::Multiple);
    }
}
