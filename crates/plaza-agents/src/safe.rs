//! Only ever step into empty cells.

use plaza_board::Board;
use plaza_core::{BoardError, Position};

use crate::decider::{Choice, Decider};

/// Accepts a cell only if it is vacant.
#[derive(Clone, Copy, Debug, Default)]
pub struct SafeDecider;

impl SafeDecider {
    /// The first vacant candidate, or [`Position::UNSET`].
    pub fn next_position(
        &self,
        candidates: &[Position],
        board: &Board,
    ) -> Result<Position, BoardError> {
        for &position in candidates {
            if board.note_at(position)?.is_vacant() {
                return Ok(position);
            }
        }
        Ok(Position::UNSET)
    }
}

impl Decider for SafeDecider {
    fn suggest_move_to(&self, position: Position, board: &Board) -> Result<bool, BoardError> {
        Ok(board.note_at(position)?.is_vacant())
    }

    fn choose(&self, candidates: &[Position], board: &Board) -> Result<Choice, BoardError> {
        let position = self.next_position(candidates, board)?;
        Ok(if position.is_unset() {
            Choice::NONE
        } else {
            Choice::new(position, 0)
        })
    }
}
