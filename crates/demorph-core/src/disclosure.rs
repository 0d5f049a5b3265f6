//! Show/hide state for the mobile navigation panel

/// User interactions that affect the panel
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisclosureEvent {
    /// Hamburger / close button
    Toggle,
    /// Any navigation link inside or beside the panel
    LinkActivated,
    /// Click on the transparent backdrop behind the open panel
    BackdropActivated,
}

/// Whether the secondary navigation panel is shown. Starts hidden.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Apply an interaction and return the new visibility.
    pub fn apply(&mut self, event: DisclosureEvent) -> bool {
        match event {
            DisclosureEvent::Toggle => self.toggle(),
            DisclosureEvent::LinkActivated | DisclosureEvent::BackdropActivated => self.close(),
        }
        tracing::trace!(?event, open = self.open, "Navigation disclosure updated");
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!Disclosure::new().is_open());
    }

    #[test]
    fn hamburger_then_link() {
        let mut nav = Disclosure::new();
        assert!(nav.apply(DisclosureEvent::Toggle));
        assert!(!nav.apply(DisclosureEvent::LinkActivated));
    }

    #[test]
    fn double_toggle_restores_state() {
        for initial in [false, true] {
            let mut nav = Disclosure { open: initial };
            nav.toggle();
            nav.toggle();
            assert_eq!(nav.is_open(), initial);
        }
    }

    #[test]
    fn backdrop_closes() {
        let mut nav = Disclosure::new();
        nav.apply(DisclosureEvent::Toggle);
        assert!(!nav.apply(DisclosureEvent::BackdropActivated));
    }

    #[test]
    fn closing_events_keep_hidden_panel_hidden() {
        let mut nav = Disclosure::new();
        assert!(!nav.apply(DisclosureEvent::LinkActivated));
        assert!(!nav.apply(DisclosureEvent::BackdropActivated));
    }
}
