//! Demo video modal visibility.

/// What can happen to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// "Watch Demo" button or the demo preview was clicked
    Open,
    /// Close button
    Close,
    /// Click on the dimmed backdrop
    BackdropClick,
}

/// Open/closed flag. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    /// Whether the overlay is rendered.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// `(state, event) -> state`.
    pub fn apply(self, event: ModalEvent) -> Self {
        let open = matches!(event, ModalEvent::Open);
        if open != self.open {
            tracing::debug!(?event, open, "modal visibility changed");
        }
        Self { open }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_dismiss() {
        let modal = ModalState::default();
        assert!(!modal.is_open());

        let modal = modal.apply(ModalEvent::Open);
        assert!(modal.is_open());
        assert!(!modal.apply(ModalEvent::Close).is_open());
        assert!(!modal.apply(ModalEvent::BackdropClick).is_open());
    }

    #[test]
    fn reopening_is_idempotent() {
        let modal = ModalState::default().apply(ModalEvent::Open).apply(ModalEvent::Open);
        assert!(modal.is_open());
    }
}
