use std::fmt;

use crate::config::{BoardConfig, ConfigError, MAX_EDGE, STARTING_ROWS};
use crate::coord::{Coord, Direction};
use crate::pieces::{Piece, Side};
use crate::rules::movegen::{MoveIndex, MoveSet};

/// Returned for every off-board read.
static EMPTY_SQUARE: Piece = Piece::EMPTY;

/// Complete game state: grid contents, whose turn it is, the cursor and queued piece,
/// and the move data cached for the current turn.
///
/// `Clone` produces a fully independent board; the search explores alternatives by
/// cloning one board per candidate move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) config: BoardConfig,
    pub(crate) squares: Vec<Piece>,
    pub(crate) selected: Coord,
    pub(crate) queued: Option<Coord>,
    pub(crate) queued_moves: MoveSet,
    pub(crate) side_to_move: Side,
    pub(crate) multi_capture: bool,
    pub(crate) turn_moves: MoveIndex,
    pub(crate) has_any_move: bool,
    pub(crate) has_capture_move: bool,
}

impl Board {
    /// A validated board in its starting position.
    pub fn new(config: BoardConfig, starting_side: Side) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut board = Self::blank(config, starting_side);
        board.reset(starting_side);
        Ok(board)
    }

    /// The 8x8, twelve-a-side board with side A to move.
    pub fn standard() -> Self {
        let mut board = Self::blank(BoardConfig::default(), Side::A);
        board.reset(Side::A);
        board
    }

    /// A board holding exactly `pieces`, with the turn starting for `side_to_move`.
    ///
    /// Intended for analysis and tests; the piece count is not checked against the
    /// starting layout.
    pub fn from_pieces(
        config: BoardConfig,
        side_to_move: Side,
        pieces: &[(Coord, Piece)],
    ) -> Result<Self, ConfigError> {
        if !(2..=MAX_EDGE).contains(&config.width) || !(2..=MAX_EDGE).contains(&config.height) {
            return Err(ConfigError::BadDimensions {
                width: config.width,
                height: config.height,
                max: MAX_EDGE,
                min_height: 2,
            });
        }
        config.check_piece_limit()?;
        let mut board = Self::blank(config, side_to_move);
        for &(coord, piece) in pieces {
            if !board.in_bounds(coord) {
                return Err(ConfigError::OffBoard {
                    coord,
                    width: config.width,
                    height: config.height,
                });
            }
            board.set_piece(coord, piece);
        }
        board.selected = board.center();
        board.recompute_turn_moves();
        Ok(board)
    }

    fn blank(config: BoardConfig, side_to_move: Side) -> Self {
        let area = config.squares();
        Self {
            config,
            squares: vec![Piece::EMPTY; area],
            selected: Coord::new(0, 0),
            queued: None,
            queued_moves: MoveSet::default(),
            side_to_move,
            multi_capture: false,
            turn_moves: MoveIndex::with_capacity(config.max_pieces_per_side.min(area)),
            has_any_move: false,
            has_capture_move: false,
        }
    }

    /// Put every man back on its starting square and begin a turn for `starting_side`.
    pub fn reset(&mut self, starting_side: Side) {
        self.squares.fill(Piece::EMPTY);

        let parity = self.config.layout_parity;
        let h = self.height();
        for row in 0..STARTING_ROWS {
            // Side A's rows 0 and 2 start on file 1 under the default parity, row 1 on file 0.
            let a_first = if (row % 2 == 0) == parity { 1 } else { 0 };
            self.fill_row(row, a_first, Piece::Man(Side::A));
            self.fill_row(h - 1 - row, 1 - a_first, Piece::Man(Side::B));
        }

        self.selected = self.center();
        self.queued = None;
        self.queued_moves.clear();
        self.multi_capture = false;
        self.side_to_move = starting_side;
        self.recompute_turn_moves();
    }

    fn fill_row(&mut self, y: i16, first_file: i16, piece: Piece) {
        let mut x = first_file;
        while x < self.width() {
            self.set_piece(Coord::new(x, y), piece);
            x += 2;
        }
    }

    /// Change the starting-file parity and restart the game with the same side to move.
    pub fn set_layout_and_reset(&mut self, parity: bool) {
        self.config.layout_parity = parity;
        self.reset(self.side_to_move);
    }

    /// Restart the game with `side` moving first.
    pub fn force_turn(&mut self, side: Side) {
        self.reset(side);
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[inline]
    pub fn width(&self) -> i16 {
        self.config.width
    }

    #[inline]
    pub fn height(&self) -> i16 {
        self.config.height
    }

    #[inline]
    pub fn layout_parity(&self) -> bool {
        self.config.layout_parity
    }

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width() && c.y < self.height()
    }

    #[inline]
    fn index(&self, c: Coord) -> usize {
        c.y as usize * self.width() as usize + c.x as usize
    }

    fn center(&self) -> Coord {
        Coord::new(self.width() / 2, self.height() / 2)
    }

    /// The square at `c`, or the shared empty sentinel when `c` is off the board.
    #[inline]
    pub fn square(&self, c: Coord) -> &Piece {
        if self.in_bounds(c) {
            &self.squares[self.index(c)]
        } else {
            &EMPTY_SQUARE
        }
    }

    #[inline]
    pub fn piece_at(&self, c: Coord) -> Piece {
        *self.square(c)
    }

    /// Off-board writes are dropped.
    #[inline]
    pub(crate) fn set_piece(&mut self, c: Coord, piece: Piece) {
        if self.in_bounds(c) {
            let i = self.index(c);
            self.squares[i] = piece;
        }
    }

    pub fn is_empty(&self, c: Coord) -> bool {
        self.square(c).is_empty()
    }

    /// True if `c` holds a piece of the side whose turn it is.
    pub fn holds_side_to_move(&self, c: Coord) -> bool {
        self.square(c).belongs_to(self.side_to_move)
    }

    pub fn is_king(&self, c: Coord) -> bool {
        self.square(c).is_king()
    }

    pub fn is_man(&self, c: Coord) -> bool {
        self.square(c).is_man()
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn selected(&self) -> Coord {
        self.selected
    }

    #[inline]
    pub fn queued(&self) -> Option<Coord> {
        self.queued
    }

    pub fn is_selected(&self, c: Coord) -> bool {
        self.selected == c
    }

    pub fn is_queued(&self, c: Coord) -> bool {
        self.queued == Some(c)
    }

    /// Destinations of the queued piece. Empty when nothing is queued.
    pub fn queued_moves(&self) -> &MoveSet {
        &self.queued_moves
    }

    /// Per-piece moves for the side to move, computed when the turn began.
    pub fn turn_moves(&self) -> &MoveIndex {
        &self.turn_moves
    }

    #[inline]
    pub fn has_any_move(&self) -> bool {
        self.has_any_move
    }

    #[inline]
    pub fn has_capture_move(&self) -> bool {
        self.has_capture_move
    }

    #[inline]
    pub fn in_multi_capture(&self) -> bool {
        self.multi_capture
    }

    /// Move the cursor one square, stopping at the edge.
    pub fn move_cursor(&mut self, dir: Direction) {
        let next = self.selected + dir.delta();
        if self.in_bounds(next) {
            self.selected = next;
        }
    }

    /// Place the cursor directly, clamped onto the board.
    pub fn select(&mut self, c: Coord) {
        self.selected = Coord::new(
            c.x.clamp(0, self.width() - 1),
            c.y.clamp(0, self.height() - 1),
        );
    }

    /// Row on which a man of `side` is crowned.
    #[inline]
    pub fn far_row(&self, side: Side) -> i16 {
        match side {
            Side::A => self.height() - 1,
            Side::B => 0,
        }
    }

    pub fn count(&self, side: Side) -> usize {
        self.squares.iter().filter(|p| p.belongs_to(side)).count()
    }

    /// Pieces of `side` minus pieces of the opponent, scanning the whole grid.
    pub fn material(&self, side: Side) -> i32 {
        self.squares
            .iter()
            .filter_map(|p| p.side())
            .map(|s| if s == side { 1 } else { -1 })
            .sum()
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        let w = self.width();
        self.squares.iter().enumerate().filter_map(move |(i, &p)| {
            if p.is_empty() {
                None
            } else {
                let i = i as i16;
                Some((Coord::new(i % w, i / w), p))
            }
        })
    }
}

impl fmt::Display for Board {
    /// Text grid: `+` marks the cursor's left edge, `:` the queued piece's.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spacer = |f: &mut fmt::Formatter<'_>| -> fmt::Result {
            for _ in 0..self.width() {
                f.write_str("+-")?;
            }
            f.write_str("+\n")
        };

        for y in 0..self.height() {
            spacer(f)?;
            for x in 0..self.width() {
                let c = Coord::new(x, y);
                let edge = if self.is_queued(c) {
                    ':'
                } else if self.is_selected(c) {
                    '+'
                } else {
                    '|'
                };
                write!(f, "{edge}{}", self.piece_at(c).glyph())?;
            }
            f.write_str("|\n")?;
        }
        spacer(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_board_reads_are_empty() {
        let board = Board::standard();
        assert!(board.is_empty(Coord::new(-1, -1)));
        assert!(board.is_empty(Coord::new(8, 0)));
        assert_eq!(board.piece_at(Coord::new(3, 99)), Piece::EMPTY);
    }

    #[test]
    fn layout_parity_mirrors_starting_files() {
        let board = Board::standard();
        assert_eq!(board.piece_at(Coord::new(1, 0)), Piece::Man(Side::A));
        assert!(board.is_empty(Coord::new(0, 0)));
        assert_eq!(board.piece_at(Coord::new(0, 7)), Piece::Man(Side::B));

        let mut flipped = board.clone();
        flipped.set_layout_and_reset(false);
        assert_eq!(flipped.piece_at(Coord::new(0, 0)), Piece::Man(Side::A));
        assert!(flipped.is_empty(Coord::new(1, 0)));
        assert_eq!(flipped.count(Side::A), 12);
        assert_eq!(flipped.count(Side::B), 12);
    }

    #[test]
    fn cursor_is_clamped() {
        let mut board = Board::standard();
        for _ in 0..20 {
            board.move_cursor(Direction::Up);
            board.move_cursor(Direction::Left);
        }
        assert_eq!(board.selected(), Coord::new(0, 0));
        board.select(Coord::new(50, -3));
        assert_eq!(board.selected(), Coord::new(7, 0));
    }
}
