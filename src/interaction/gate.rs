//! Interaction gate: which drawer is open and which folder (if any) holds the
//! single interaction token.
//!
//! While a folder holds the token (opening, open or closing) drawer toggles
//! are rejected and other folders cannot be activated. The token is released
//! only when the folder reports it has fully closed.

use crate::scene::ItemId;

/// Result of an accepted [`InteractionGate::toggle_container`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerChange {
    /// A drawer opened with none open before.
    Opened {
        /// Drawer now open.
        index: usize,
    },
    /// The open drawer closed.
    Closed {
        /// Drawer that closed.
        index: usize,
    },
    /// One drawer closed and another opened.
    Switched {
        /// Drawer that closed.
        from: usize,
        /// Drawer now open.
        to: usize,
    },
}

impl ContainerChange {
    /// The drawer open after the change.
    #[must_use]
    pub fn open_container(self) -> Option<usize> {
        match self {
            Self::Opened { index } => Some(index),
            Self::Closed { .. } => None,
            Self::Switched { to, .. } => Some(to),
        }
    }
}

/// Result of an accepted [`InteractionGate::activate_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemChange {
    /// The folder took the token and starts opening.
    Activated(ItemId),
    /// The token holder starts closing.
    Deactivated(ItemId),
    /// A closing token holder was clicked again and reopens.
    Reactivated(ItemId),
}

/// Result of an accepted [`InteractionGate::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetChange {
    /// The active folder started closing.
    ItemDeactivated(ItemId),
    /// The open drawer closed.
    ContainerClosed(usize),
}

/// The single interaction token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemToken {
    /// Folder holding the token.
    pub id: ItemId,
    /// Whether the holder is on its way back to rest.
    pub closing: bool,
}

/// Immutable view of the gate, read once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GateSnapshot {
    /// Drawer currently open.
    pub open_container: Option<usize>,
    /// Token holder, if any.
    pub token: Option<ItemToken>,
}

impl GateSnapshot {
    /// The token holder, opening, open or closing.
    #[must_use]
    pub fn token_holder(&self) -> Option<ItemId> {
        self.token.map(|t| t.id)
    }
}

/// Owns the open drawer and the folder token.
#[derive(Debug, Clone, Default)]
pub struct InteractionGate {
    open_container: Option<usize>,
    token: Option<ItemToken>,
}

impl InteractionGate {
    /// Gate with every drawer closed and no token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open drawer `index` (closing any other) or close it if already open.
    ///
    /// Returns `None` without touching state while a token is held.
    pub fn toggle_container(
        &mut self,
        index: usize,
    ) -> Option<ContainerChange> {
        if self.token.is_some() {
            return None;
        }
        let change = match self.open_container {
            Some(open) if open == index => ContainerChange::Closed { index },
            Some(open) => ContainerChange::Switched {
                from: open,
                to: index,
            },
            None => ContainerChange::Opened { index },
        };
        self.open_container = change.open_container();
        Some(change)
    }

    /// Activate folder `id`, or toggle it if it already holds the token.
    ///
    /// Returns `None` while a different folder holds the token.
    pub fn activate_item(&mut self, id: ItemId) -> Option<ItemChange> {
        let Some(token) = self.token.as_mut() else {
            self.token = Some(ItemToken { id, closing: false });
            return Some(ItemChange::Activated(id));
        };
        if token.id != id {
            return None;
        }
        token.closing = !token.closing;
        if token.closing {
            Some(ItemChange::Deactivated(id))
        } else {
            Some(ItemChange::Reactivated(id))
        }
    }

    /// Release the token once folder `id` has fully closed.
    ///
    /// Returns whether the token was released. A folder that was reactivated
    /// before it reported keeps the token.
    pub fn finish_closing(&mut self, id: ItemId) -> bool {
        match self.token {
            Some(token) if token.id == id && token.closing => {
                self.token = None;
                true
            }
            _ => false,
        }
    }

    /// Step back toward the overview: deactivate the active folder if there
    /// is one, otherwise close the open drawer.
    ///
    /// Returns `None` if a folder is already closing or nothing is open.
    pub fn reset(&mut self) -> Option<ResetChange> {
        match self.token.as_mut() {
            Some(token) if token.closing => None,
            Some(token) => {
                token.closing = true;
                Some(ResetChange::ItemDeactivated(token.id))
            }
            None => {
                self.open_container.take().map(ResetChange::ContainerClosed)
            }
        }
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GateSnapshot {
        GateSnapshot {
            open_container: self.open_container,
            token: self.token,
        }
    }

    /// Drawer currently open.
    #[must_use]
    pub fn open_container(&self) -> Option<usize> {
        self.open_container
    }

    /// Whether any folder holds the token.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ItemId = ItemId { drawer: 1, slot: 0 };
    const B: ItemId = ItemId { drawer: 1, slot: 2 };

    #[test]
    fn container_toggle_cycle() {
        let mut gate = InteractionGate::new();
        assert_eq!(
            gate.toggle_container(1),
            Some(ContainerChange::Opened { index: 1 })
        );
        assert_eq!(
            gate.toggle_container(2),
            Some(ContainerChange::Switched { from: 1, to: 2 })
        );
        assert_eq!(
            gate.toggle_container(2),
            Some(ContainerChange::Closed { index: 2 })
        );
        assert_eq!(gate.open_container(), None);
    }

    #[test]
    fn toggle_rejected_while_token_held() {
        let mut gate = InteractionGate::new();
        let _ = gate.toggle_container(1);
        assert_eq!(gate.activate_item(A), Some(ItemChange::Activated(A)));
        assert_eq!(gate.toggle_container(1), None);
        assert_eq!(gate.toggle_container(0), None);
        assert_eq!(gate.open_container(), Some(1));

        // Still rejected while the folder is closing.
        assert_eq!(gate.activate_item(A), Some(ItemChange::Deactivated(A)));
        assert_eq!(gate.toggle_container(0), None);
        assert!(gate.finish_closing(A));
        assert_eq!(
            gate.toggle_container(0),
            Some(ContainerChange::Switched { from: 1, to: 0 })
        );
    }

    #[test]
    fn other_item_rejected_until_release() {
        let mut gate = InteractionGate::new();
        let _ = gate.activate_item(A);
        assert_eq!(gate.activate_item(B), None);
        let _ = gate.activate_item(A);
        assert_eq!(gate.activate_item(B), None);
        assert!(!gate.finish_closing(B));
        assert!(gate.finish_closing(A));
        assert_eq!(gate.activate_item(B), Some(ItemChange::Activated(B)));
    }

    #[test]
    fn reactivation_keeps_token() {
        let mut gate = InteractionGate::new();
        let _ = gate.activate_item(A);
        let _ = gate.activate_item(A);
        assert_eq!(gate.activate_item(A), Some(ItemChange::Reactivated(A)));
        assert!(!gate.finish_closing(A));
        let snapshot = gate.snapshot();
        assert_eq!(snapshot.token_holder(), Some(A));
        assert!(snapshot.token.is_some_and(|t| !t.closing));
    }

    #[test]
    fn reset_steps_back_one_level() {
        let mut gate = InteractionGate::new();
        assert_eq!(gate.reset(), None);
        let _ = gate.toggle_container(2);
        let _ = gate.activate_item(ItemId::new(2, 1));
        assert_eq!(
            gate.reset(),
            Some(ResetChange::ItemDeactivated(ItemId::new(2, 1)))
        );
        assert_eq!(gate.reset(), None);
        assert!(gate.finish_closing(ItemId::new(2, 1)));
        assert_eq!(gate.reset(), Some(ResetChange::ContainerClosed(2)));
        assert_eq!(gate.snapshot(), GateSnapshot::default());
    }

    /// Every interleaving of a small operation alphabet keeps at most one
    /// token, and drawer state never changes while the token is held.
    #[test]
    fn single_token_under_interleavings() {
        #[derive(Clone, Copy)]
        enum Op {
            Toggle(usize),
            Activate(ItemId),
            Finish(ItemId),
            Reset,
        }
        let ops = [
            Op::Toggle(0),
            Op::Toggle(1),
            Op::Activate(A),
            Op::Activate(B),
            Op::Finish(A),
            Op::Finish(B),
            Op::Reset,
        ];

        let n = ops.len();
        for seq in 0..n.pow(5) {
            let mut gate = InteractionGate::new();
            let mut code = seq;
            for _ in 0..5 {
                let op = ops[code % n];
                code /= n;
                let before = gate.snapshot();
                match op {
                    Op::Toggle(i) => {
                        let change = gate.toggle_container(i);
                        if before.token.is_some() {
                            assert!(change.is_none());
                            assert_eq!(gate.snapshot(), before);
                        }
                    }
                    Op::Activate(id) => {
                        let change = gate.activate_item(id);
                        if before.token_holder().is_some_and(|h| h != id) {
                            assert!(change.is_none());
                        }
                    }
                    Op::Finish(id) => {
                        let _ = gate.finish_closing(id);
                    }
                    Op::Reset => {
                        let _ = gate.reset();
                    }
                }
                let after = gate.snapshot();
                if let (Some(b), Some(a)) = (before.token, after.token) {
                    assert_eq!(a.id, b.id);
                }
                if before.token.is_some() {
                    assert_eq!(after.open_container, before.open_container);
                }
            }
        }
    }
}
