//! Provisioning state machine.
//!
//! Bring-up is a strict sequence (compose up, then migration reset) with a
//! best-effort teardown on failure. The transitions are kept explicit so
//! timeouts or retries can be added later without changing the public
//! provisioning contract.

/// States of one database provisioning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProvisionState {
    /// Nothing provisioned; also the terminal state after a clean teardown.
    #[default]
    Idle,
    /// The compose project is being brought up.
    BringingUp,
    /// The schema reset migration is running.
    Migrating,
    /// The database is reachable and schema-initialized.
    Ready,
    /// The compose project is being brought down.
    TearingDown,
    /// Teardown itself failed; containers may have been left behind.
    Failed,
}

impl ProvisionState {
    /// Whether `next` is a legal successor of `self`.
    #[must_use]
    pub fn can_advance_to(self, next: ProvisionState) -> bool {
        use ProvisionState::{BringingUp, Failed, Idle, Migrating, Ready, TearingDown};
        matches!(
            (self, next),
            (Idle, BringingUp)
                | (Idle, Ready) // orchestration disabled: straight to ready
                | (BringingUp, Migrating)
                | (BringingUp, TearingDown)
                | (Migrating, Ready)
                | (Migrating, TearingDown)
                | (Ready, TearingDown)
                | (TearingDown, Idle)
                | (TearingDown, Failed)
        )
    }
}

/// Tracks the state of one provisioning run.
#[derive(Debug, Default)]
pub struct StateTracker {
    state: ProvisionState,
}

impl StateTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ProvisionState {
        self.state
    }

    /// Advance to `next`. Illegal transitions panic in debug builds.
    pub fn advance(&mut self, next: ProvisionState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "illegal provision transition {:?} -> {next:?}",
            self.state
        );
        self.state = next;
    }
}
