use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::board::Board;
use crate::config::{AiConfig, ConfigError, GameConfig};
use crate::pieces::Side;
use crate::search::{choose_step, Decision, Personality, SearchError};

/// A board plus the AI settings and the random source used to break ties.
///
/// This is the surface drivers talk to. Board queries and the selection commands are
/// reached through [`Game::board`] / [`Game::board_mut`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    ai: AiConfig,
    rng: StdRng,
}

impl Game {
    /// Build from a full configuration. Without `first_side` the opening side is random.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let first = config
            .first_side
            .unwrap_or_else(|| if rng.random_bool(0.5) { Side::A } else { Side::B });
        let board = Board::new(config.board, first)?;
        Ok(Self {
            board,
            ai: config.ai,
            rng,
        })
    }

    /// Wrap an existing board with a deterministic random source.
    pub fn with_seed(board: Board, ai: AiConfig, seed: u64) -> Self {
        Self {
            board,
            ai,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_board(board: Board, ai: AiConfig) -> Self {
        Self {
            board,
            ai,
            rng: StdRng::from_os_rng(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn ai_config(&self) -> &AiConfig {
        &self.ai
    }

    pub fn personality(&self) -> Personality {
        self.ai.personality
    }

    pub fn set_personality(&mut self, personality: Personality) {
        self.ai.personality = personality;
    }

    /// Restart from the starting position with `side` to move.
    pub fn force_turn(&mut self, side: Side) {
        self.board.force_turn(side);
    }

    /// The game ends when the side to move has no moves; the other side has won.
    pub fn winner(&self) -> Option<Side> {
        if self.board.has_any_move() {
            None
        } else {
            Some(self.board.side_to_move().other())
        }
    }

    /// Choose one step for the side to move and half-commit it.
    ///
    /// The chosen piece is queued (unless a capture chain already has it queued) and the
    /// destination is left selected; the driver finishes the step with
    /// [`Board::execute_selection`]. On error the board is untouched.
    pub fn invoke_ai(&mut self, depth: i32) -> Result<Decision, SearchError> {
        let decision = choose_step(
            &self.board,
            depth,
            self.ai.personality,
            self.ai.max_nodes,
            &mut self.rng,
        )?;

        if !self.board.in_multi_capture() {
            self.board.queue_piece(decision.step.from);
        }
        self.board.select(decision.step.to);
        debug!(
            side = %self.board.side_to_move(),
            personality = %self.ai.personality,
            from = %decision.step.from,
            to = %decision.step.to,
            "ai step proposed"
        );
        Ok(decision)
    }

    /// Play the side to move's entire turn with the AI, including every jump of a
    /// capture chain, at the configured depth.
    pub fn play_ai_turn(&mut self) -> Result<Vec<Decision>, SearchError> {
        let side = self.board.side_to_move();
        let mut steps = Vec::new();
        loop {
            let decision = self.invoke_ai(self.ai.depth)?;
            self.board.execute_selection()?;
            steps.push(decision);
            if self.board.side_to_move() != side || !self.board.in_multi_capture() {
                return Ok(steps);
            }
        }
    }
}
