//! Properties checked over every state reachable from the starting layout.
//!
//! The state space is small enough to enumerate, so each property is
//! verified exhaustively instead of by sampling.

use shoe_puzzle::invariants::{GoalMatchesShoes, Invariant};
use shoe_puzzle::{Direction, Piece, PuzzleState};
use std::collections::{HashSet, VecDeque};

fn reachable_states() -> Vec<PuzzleState> {
    let start = PuzzleState::new();
    let mut seen = HashSet::from([start.clone()]);
    let mut order = vec![start.clone()];
    let mut queue = VecDeque::from([start]);

    while let Some(state) = queue.pop_front() {
        for d in state.legal_moves() {
            let mut next = state.clone();
            next.move_block(d);
            if seen.insert(next.clone()) {
                order.push(next.clone());
                queue.push_back(next);
            }
        }
    }
    order
}

#[test]
fn test_state_space_size() {
    let states = reachable_states();
    assert_eq!(states.len(), 611);
    assert_eq!(states.iter().filter(|s| s.is_goal()).count(), 135);
}

#[test]
fn test_every_reachable_state_satisfies_invariants() {
    for state in reachable_states() {
        assert!(state.check_invariants().is_ok(), "{}", state);
        assert!(GoalMatchesShoes::holds(&state), "{}", state);
        for piece in Piece::ALL {
            assert!(state.position(piece).is_on_board(), "{} in {}", piece, state);
        }
        assert_ne!(
            state.position(Piece::BlueShoe),
            state.position(Piece::BlackShoe)
        );
    }
}

#[test]
fn test_legal_moves_keep_invariants() {
    for state in reachable_states() {
        for d in Direction::ALL.into_iter().filter(|d| state.can_move(*d)) {
            let mut next = state.clone();
            assert!(next.move_block(d));
            assert!(next.check_invariants().is_ok(), "{} after {}", state, d);
        }
    }
}

#[test]
fn test_illegal_moves_are_no_ops() {
    for state in reachable_states() {
        for d in Direction::ALL.into_iter().filter(|d| !state.can_move(*d)) {
            let mut next = state.clone();
            assert!(!next.move_block(d));
            assert_eq!(next, state);
        }
    }
}

#[test]
fn test_legal_moves_match_can_move() {
    for state in reachable_states() {
        let legal = state.legal_moves();
        for d in Direction::ALL {
            assert_eq!(legal.contains(&d), state.can_move(d), "{} in {}", d, state);
        }
        assert!(!legal.is_empty(), "dead end at {}", state);
    }
}

#[test]
fn test_goal_never_reverts() {
    for state in reachable_states().into_iter().filter(|s| s.is_goal()) {
        for d in state.legal_moves() {
            let mut next = state.clone();
            next.move_block(d);
            assert!(next.is_goal(), "{} after {}", state, d);
        }
    }
}

#[test]
fn test_block_always_moves_one_step() {
    for state in reachable_states() {
        for d in state.legal_moves() {
            let mut next = state.clone();
            next.move_block(d);
            assert_eq!(
                next.position(Piece::Block),
                state.position(Piece::Block).shift(d)
            );
        }
    }
}
