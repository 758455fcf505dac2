use crate::board::Board;
use crate::coord::Coord;
use crate::pieces::Piece;
use crate::rules::movegen::MoveSet;
use crate::rules::SelectionError;

impl Board {
    /// Act on the currently selected square.
    ///
    /// - Re-selecting the queued piece releases it (not while a capture chain is running).
    /// - Selecting a piece of the side to move queues it (not while a capture chain is running).
    /// - With a piece queued, selecting one of its destinations plays the move. A capture
    ///   keeps the same piece queued while it can capture again; every other move ends
    ///   the turn.
    pub fn execute_selection(&mut self) -> Result<(), SelectionError> {
        let target = self.selected;

        if self.queued == Some(target) && !self.multi_capture {
            self.release_queue();
            return Ok(());
        }

        if self.holds_side_to_move(target) && !self.multi_capture {
            self.queue_piece(target);
            return Ok(());
        }

        let Some(origin) = self.queued else {
            self.multi_capture = false;
            return Err(SelectionError::InvalidSelection);
        };

        let passive = self.queued_moves.passive.contains(&target);
        let aggressive = self.queued_moves.aggressive.contains(&target);

        if passive && self.has_capture_move {
            return Err(SelectionError::ForcedCapture);
        }
        if !passive && !aggressive {
            return Err(SelectionError::IllegalDestination);
        }

        self.play_step(origin, target, aggressive);
        Ok(())
    }

    /// Queue the piece on `origin` and list all of its destinations.
    ///
    /// Also moves the cursor there. The caller guarantees `origin` holds a piece of the
    /// side to move.
    pub(crate) fn queue_piece(&mut self, origin: Coord) {
        self.selected = origin;
        self.queued = Some(origin);
        let mut moves = MoveSet::new(origin);
        self.generate_moves(self.piece_at(origin), true, &mut moves);
        self.queued_moves = moves;
        self.multi_capture = false;
    }

    fn release_queue(&mut self) {
        self.queued = None;
        self.queued_moves.clear();
    }

    fn play_step(&mut self, from: Coord, to: Coord, capture: bool) {
        let moving = self.piece_at(from);
        self.set_piece(to, moving);
        self.set_piece(from, Piece::EMPTY);

        let crowned = match moving {
            Piece::Man(side) if to.y == self.far_row(side) => {
                self.set_piece(to, moving.crowned());
                true
            }
            _ => false,
        };

        if !capture {
            self.end_turn();
            return;
        }

        self.set_piece(from.midpoint(to), Piece::EMPTY);

        // Only further captures by the same piece may continue the turn.
        self.queued = Some(to);
        let mut moves = MoveSet::new(to);
        self.generate_moves(moving, false, &mut moves);
        self.queued_moves = moves;

        if !self.queued_moves.aggressive.is_empty() && !crowned {
            self.multi_capture = true;
        } else {
            self.end_turn();
        }
    }

    fn end_turn(&mut self) {
        self.release_queue();
        self.side_to_move = self.side_to_move.other();
        self.multi_capture = false;
        self.recompute_turn_moves();
    }
}
