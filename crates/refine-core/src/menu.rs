//! Open/closed state for the slide-in navigation panel.

/// What asked the panel to change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// The hamburger button.
    Toggle,
    Escape,
    Backdrop,
    /// A link inside the panel was followed.
    LinkFollowed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Closed.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply `trigger`, returning whether the panel changed state.
    ///
    /// Only the button opens the panel; everything else can only close it.
    pub fn apply(&mut self, trigger: Trigger) -> bool {
        let next = match trigger {
            Trigger::Toggle => !self.open,
            Trigger::Escape | Trigger::Backdrop | Trigger::LinkFollowed => false,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }

    /// Accessible label for the hamburger button.
    pub fn button_label(&self) -> &'static str {
        if self.open { "Close menu" } else { "Open menu" }
    }
}
