use crate::models::{Board, CarMove, MoveAction, SearchState, StateId};

/// Turn the predecessor chain ending at `terminal` into the car's stops.
///
/// The first stop is the origin (`init`, distance 0). A later stop is a
/// pickup when its cell holds a pet and a delivery otherwise. Every state's
/// distance is the cumulative distance of its stop. An unknown `terminal`
/// gives an empty list.
pub fn reconstruct_path(board: &Board, arena: &[SearchState], terminal: StateId) -> Vec<CarMove> {
    let mut chain = Vec::new();
    let mut next = Some(terminal);
    while let Some(id) = next {
        let Some(state) = arena.get(id) else {
            break;
        };
        chain.push(state);
        // Predecessors always sit earlier in the arena
        next = state.predecessor.filter(|previous| *previous < id);
    }
    chain.reverse();

    chain
        .iter()
        .enumerate()
        .map(|(step, state)| {
            let action = if step == 0 {
                MoveAction::Init
            } else if board.is_pickup_cell(state.key.position) {
                MoveAction::Pickup
            } else {
                MoveAction::Deliver
            };
            CarMove::new(state.key.position, action, state.distance)
        })
        .collect()
}
