//! Step into cells that are empty or about to be.

use plaza_board::Board;
use plaza_core::{BoardError, Phase, Position};

use crate::decider::{Choice, Decider};

/// Weight of a vacant cell.
const VACANT_WEIGHT: i32 = 0;
/// Weight of a cell whose holder has started leaving.
const LEAVING_WEIGHT: i32 = 7;

/// Accepts vacant cells and cells whose holder is in `ToLeave`.
///
/// Attempting a leaving cell usually fails (the holder has not finished)
/// and raises both boxes' levels; the weight reports that risk.
#[derive(Clone, Copy, Debug, Default)]
pub struct RiskDecider;

fn weight(phase: Phase) -> Option<i32> {
    match phase {
        Phase::Left => Some(VACANT_WEIGHT),
        Phase::ToLeave => Some(LEAVING_WEIGHT),
        Phase::ToArrive | Phase::Arrive => None,
    }
}

impl Decider for RiskDecider {
    fn suggest_move_to(&self, position: Position, board: &Board) -> Result<bool, BoardError> {
        Ok(weight(board.note_at(position)?.phase).is_some())
    }

    fn choose(&self, candidates: &[Position], board: &Board) -> Result<Choice, BoardError> {
        for &position in candidates {
            if let Some(w) = weight(board.note_at(position)?.phase) {
                return Ok(Choice::new(position, w));
            }
        }
        Ok(Choice::NONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plaza_core::Note;
    use plaza_test_utils::board_with_boxes;
    use std::sync::Arc;

    const TO_ARRIVE: Position = Position::new(0, 0);
    const ARRIVE: Position = Position::new(1, 1);
    const TO_LEAVE: Position = Position::new(2, 2);
    const LEFT: Position = Position::new(3, 3);

    fn stage(board: &Board, pos: Position, id: i32, phases: &[Phase]) {
        for &phase in phases {
            assert!(board.change_spot(pos, Note::new(id, phase), true).unwrap());
        }
    }

    /// One cell in each phase; `LEFT` is never touched.
    fn staged_board() -> Arc<Board> {
        let board = board_with_boxes(10, 10, [0, 1, 2]);
        stage(&board, TO_ARRIVE, 0, &[Phase::ToArrive]);
        stage(&board, ARRIVE, 1, &[Phase::ToArrive, Phase::Arrive]);
        stage(&board, TO_LEAVE, 2, &[Phase::ToArrive, Phase::Arrive, Phase::ToLeave]);
        board
    }

    #[test]
    fn suggests_only_leaving_or_vacant_cells() {
        let board = staged_board();
        let d = RiskDecider;
        assert!(!d.suggest_move_to(TO_ARRIVE, &board).unwrap());
        assert!(!d.suggest_move_to(ARRIVE, &board).unwrap());
        assert!(d.suggest_move_to(TO_LEAVE, &board).unwrap());
        assert!(d.suggest_move_to(LEFT, &board).unwrap());
    }

    #[test]
    fn first_acceptable_candidate_wins() {
        let board = staged_board();
        let d = RiskDecider;
        assert_eq!(
            d.choose(&[TO_ARRIVE, LEFT, TO_LEAVE], &board).unwrap(),
            Choice::new(LEFT, 0)
        );
        assert_eq!(
            d.choose(&[TO_ARRIVE, TO_LEAVE, LEFT], &board).unwrap(),
            Choice::new(TO_LEAVE, 7)
        );
        assert_eq!(
            d.choose(&[ARRIVE, LEFT, TO_LEAVE], &board).unwrap(),
            Choice::new(LEFT, 0)
        );
        assert_eq!(
            d.choose(&[TO_LEAVE, LEFT, TO_LEAVE], &board).unwrap(),
            Choice::new(TO_LEAVE, 7)
        );
    }

    #[test]
    fn nothing_acceptable_means_none() {
        let board = staged_board();
        let got = RiskDecider.choose(&[TO_ARRIVE, ARRIVE], &board).unwrap();
        assert_eq!(got, Choice::NONE);
        assert_eq!(got.weight, -1);
        assert!(got.is_none());
    }
}
