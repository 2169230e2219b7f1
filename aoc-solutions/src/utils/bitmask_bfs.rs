//! Shortest toggle sequences over small bit-vector states.

use super::AlgoError;
use bitvec::prelude::*;
use log::trace;

/// Widest state the search accepts; the visited set holds `2^width` bits
pub const MAX_WIDTH: u32 = 16;

/// Fewest XOR toggles turning the all-zero state into `target`.
///
/// Breadth-first, one frontier per move count. A state is enqueued at most
/// once, so the search is linear in the `2^width` state space.
pub fn fewest_toggles(width: u32, target: u16, toggles: &[u16]) -> Result<u32, AlgoError> {
    if width > MAX_WIDTH {
        return Err(AlgoError::InvalidInput(format!(
            "state width {width} exceeds {MAX_WIDTH} bits"
        )));
    }
    let states = 1usize << width;
    let fits = |mask: u16| usize::from(mask) < states;
    if !fits(target) {
        return Err(AlgoError::InvalidInput(format!(
            "target {target:#b} is wider than {width} bits"
        )));
    }
    if let Some(toggle) = toggles.iter().find(|&&t| !fits(t)) {
        return Err(AlgoError::InvalidInput(format!(
            "toggle {toggle:#b} is wider than {width} bits"
        )));
    }
    if target == 0 {
        return Ok(0);
    }

    let mut visited: BitVec = bitvec![0; states];
    visited.set(0, true);
    let mut frontier: Vec<u16> = vec![0];
    let mut moves = 0;
    while !frontier.is_empty() {
        moves += 1;
        trace!("depth {}: {} states", moves, frontier.len());
        let mut next = Vec::new();
        for &state in &frontier {
            for &toggle in toggles {
                let next_state = state ^ toggle;
                if next_state == target {
                    return Ok(moves);
                }
                if !visited[usize::from(next_state)] {
                    visited.set(usize::from(next_state), true);
                    next.push(next_state);
                }
            }
        }
        frontier = next;
    }
    Err(AlgoError::Unreachable { target })
}
