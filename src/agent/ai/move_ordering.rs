// Move ordering for alpha-beta search
//
// Tactical moves (captures and checks) are tried first so cutoffs come early.
// The split is a stable two-way partition: moves keep their generation order
// inside each group, which keeps the search fully deterministic.

use crate::game_repr::{ChessMove, MoveList, Position};

/// Returns true for moves searched in the first group
pub fn is_tactical(pos: &Position, mov: ChessMove) -> bool {
    pos.is_capture(mov) || pos.gives_check(mov)
}

/// Reorder `moves` in place: capture-or-check moves first, quiet moves second
pub fn order_moves(pos: &Position, moves: &mut MoveList) {
    let (tactical, quiet): (MoveList, MoveList) =
        moves.iter().copied().partition(|&mov| is_tactical(pos, mov));

    moves.clear();
    moves.extend(tactical);
    moves.extend(quiet);
}

/// Generate all legal moves of the side to move in search order
pub fn generate_ordered_moves(pos: &Position) -> MoveList {
    let mut moves = MoveList::new();
    pos.legal_moves_into(&mut moves);
    order_moves(pos, &mut moves);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ordered_moves_includes_everything() {
        let pos = Position::default();
        let ordered_moves = generate_ordered_moves(&pos);

        // Starting position has 20 legal moves
        assert_eq!(ordered_moves.len(), 20);
    }

    #[test]
    fn test_quiet_position_keeps_generation_order() {
        let pos = Position::default();
        assert_eq!(generate_ordered_moves(&pos), pos.legal_moves());
    }

    #[test]
    fn test_captures_come_first() {
        // White rook on d2 can take the queen on d4
        let pos = Position::from_fen("4k3/8/8/8/3q4/8/3R4/4K3 w - - 0 1").unwrap();
        let moves = generate_ordered_moves(&pos);

        assert!(is_tactical(&pos, moves[0]));
        let first_quiet = moves.iter().position(|&m| !is_tactical(&pos, m)).unwrap();
        assert!(moves[first_quiet..].iter().all(|&m| !is_tactical(&pos, m)));
    }

    #[test]
    fn test_few_moves_returns_all() {
        // Position with very few legal moves
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let moves = generate_ordered_moves(&pos);

        assert_eq!(moves.len(), pos.legal_moves().len());
    }
}
