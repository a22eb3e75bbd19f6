//! Change notification for piece positions and the goal flag.
//!
//! Every [`PuzzleState`](crate::PuzzleState) owns one registry. Listeners are
//! invoked synchronously, in subscription order, from inside the mutating
//! call. They never receive the state itself, so they cannot re-enter it.

use crate::{Piece, Position};
use tracing::trace;

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Listener for position changes: `(piece, old, new)`.
pub type PositionListener = Box<dyn FnMut(Piece, Position, Position)>;

/// Listener for goal flag changes: `(old, new)`.
pub type GoalListener = Box<dyn FnMut(bool, bool)>;

struct PositionEntry {
    id: SubscriptionId,
    /// `None` listens to every piece.
    piece: Option<Piece>,
    listener: PositionListener,
}

struct GoalEntry {
    id: SubscriptionId,
    listener: GoalListener,
}

/// Registry of position and goal listeners.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    positions: Vec<PositionEntry>,
    goal: Vec<GoalEntry>,
}

impl Observers {
    fn next_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn subscribe_position(
        &mut self,
        piece: Option<Piece>,
        listener: PositionListener,
    ) -> SubscriptionId {
        let id = self.next_id();
        self.positions.push(PositionEntry {
            id,
            piece,
            listener,
        });
        id
    }

    pub(crate) fn subscribe_goal(&mut self, listener: GoalListener) -> SubscriptionId {
        let id = self.next_id();
        self.goal.push(GoalEntry { id, listener });
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.len();
        self.positions.retain(|entry| entry.id != id);
        self.goal.retain(|entry| entry.id != id);
        self.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.positions.len() + self.goal.len()
    }

    pub(crate) fn notify_position(&mut self, piece: Piece, old: Position, new: Position) {
        trace!(%piece, %old, %new, "Position changed");
        for entry in &mut self.positions {
            if entry.piece.is_none_or(|p| p == piece) {
                (entry.listener)(piece, old, new);
            }
        }
    }

    pub(crate) fn notify_goal(&mut self, old: bool, new: bool) {
        trace!(old, new, "Goal changed");
        for entry in &mut self.goal {
            (entry.listener)(old, new);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("position_listeners", &self.positions.len())
            .field("goal_listeners", &self.goal.len())
            .finish()
    }
}
