//! The "click to enter" gate in front of the previewed profile.

/// Whether the viewer has passed the entrance screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceState {
    NotEntered,
    Entered,
}

/// Two-state gate. Editors start past it so content is visible immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceGate {
    state: EntranceState,
}

impl Default for EntranceGate {
    fn default() -> Self {
        Self {
            state: EntranceState::Entered,
        }
    }
}

impl EntranceGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EntranceState {
        self.state
    }

    pub fn is_entered(&self) -> bool {
        self.state == EntranceState::Entered
    }

    /// The viewer clicked through the gate. Returns whether the state changed.
    pub fn enter(&mut self) -> bool {
        let changed = self.state == EntranceState::NotEntered;
        self.state = EntranceState::Entered;
        changed
    }

    /// Show the entrance screen again. Returns whether the state changed.
    pub fn replay(&mut self) -> bool {
        let changed = self.state == EntranceState::Entered;
        self.state = EntranceState::NotEntered;
        changed
    }
}
