//! Winner selection from a score board
//!
//! Picks the highest-scoring language, using the fixed priority order
//! only to break exact ties. Never errors: a board with no evidence
//! resolves to `None`, and a tie set with no listed member falls back to
//! the first tied entry in table iteration order, so detection always
//! terminates with a language or `None`.

use super::scorer::ScoreBoard;
use super::signatures::PRIORITY_ORDER;

/// Resolve a score board to a single language id.
///
/// Returns `None` when the board is empty or all-zero; that is the
/// contractual "detection inconclusive" signal, not an error.
#[must_use]
pub fn resolve(board: &ScoreBoard) -> Option<&'static str> {
    let max = board.max_score();
    if max == 0 {
        return None;
    }

    let tied: Vec<&'static str> = board
        .entries()
        .iter()
        .filter(|(_, score)| *score == max)
        .map(|(id, _)| *id)
        .collect();

    if tied.len() == 1 {
        return Some(tied[0]);
    }

    for id in PRIORITY_ORDER {
        if tied.contains(id) {
            return Some(*id);
        }
    }

    // Configuration gap: none of the tied languages is listed. Table
    // iteration order keeps the choice deterministic.
    tied.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_board_is_inconclusive() {
        let board = ScoreBoard::from_entries(vec![("python", 0), ("rust", 0)]);
        assert_eq!(resolve(&board), None);
    }

    #[test]
    fn empty_board_is_inconclusive() {
        assert_eq!(resolve(&ScoreBoard::default()), None);
    }

    #[test]
    fn single_top_scorer_wins_outright() {
        let board = ScoreBoard::from_entries(vec![("python", 12), ("ruby", 8)]);
        assert_eq!(resolve(&board), Some("python"));
    }

    #[test]
    fn ties_follow_priority_order() {
        // javascript precedes c in board order, but c precedes
        // javascript in the priority list.
        let board = ScoreBoard::from_entries(vec![("javascript", 9), ("c", 9)]);
        assert_eq!(resolve(&board), Some("c"));

        // Reversed board order, same winner: tie-breaking is independent
        // of iteration order.
        let board = ScoreBoard::from_entries(vec![("c", 9), ("javascript", 9)]);
        assert_eq!(resolve(&board), Some("c"));
    }

    #[test]
    fn unlisted_tie_falls_back_to_board_order() {
        let board = ScoreBoard::from_entries(vec![("zig", 5), ("nim", 5)]);
        assert_eq!(resolve(&board), Some("zig"));
    }

    #[test]
    fn listed_language_beats_unlisted_in_tie() {
        let board = ScoreBoard::from_entries(vec![("zig", 5), ("markdown", 5)]);
        assert_eq!(resolve(&board), Some("markdown"));
    }
}
