use crate::{state::GameState, types::Move};

/// Counts the leaves of the legal move tree `depth` plies below `state`.
/// Leaves `state` as it found it.
pub fn perft(state: &mut GameState, depth: u8) -> u64 {
    fn inner(state: &mut GameState, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };
        state.legal_moves_into(buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            state.push(mv);
            nodes += inner(state, depth - 1, rest);
            state.pop();
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(state, depth, &mut layers[..])
}

/// Per-move node counts at the root, useful for locating a movegen bug.
pub fn divide(state: &mut GameState, depth: u8) -> Vec<(Move, u64)> {
    let moves = state.legal_moves();
    moves
        .into_iter()
        .map(|mv| {
            state.push(mv);
            let nodes = perft(state, depth.saturating_sub(1));
            state.pop();
            (mv, nodes)
        })
        .collect()
}
