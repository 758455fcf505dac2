//! Board and AI configuration.
//!
//! Everything here is plain data with serde support, so a driver can either build the
//! structs in code or read a JSON manifest with [`GameConfig::from_json_file`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coord::Coord;
use crate::pieces::Side;
use crate::search::Personality;

/// Rows of men each side starts with.
pub const STARTING_ROWS: i16 = 3;

/// Largest supported board edge.
pub const MAX_EDGE: i16 = 64;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board {width}x{height} is out of range (edges must be 2..={max}, height >= {min_height})")]
    BadDimensions {
        width: i16,
        height: i16,
        max: i16,
        min_height: i16,
    },
    #[error("starting layout needs {needed} pieces per side but max_pieces_per_side is {max}")]
    TooManyPieces { needed: usize, max: usize },
    #[error("max_pieces_per_side {max} exceeds the {squares} squares of the board")]
    PieceLimitTooLarge { max: usize, squares: usize },
    #[error("failed to read {path}: {error}")]
    Io { path: String, error: String },
    #[error("piece at {coord} is off the {width}x{height} board")]
    OffBoard { coord: Coord, width: i16, height: i16 },
    #[error("unknown AI personality {0:?} (expected moderate, generous, aggressive or cautious)")]
    UnknownPersonality(String),
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn default_edge() -> i16 {
    8
}

fn default_max_pieces() -> usize {
    12
}

fn default_layout_parity() -> bool {
    true
}

/// Board geometry.
///
/// `layout_parity` picks which files the men start on; it mirrors the starting
/// position and has no other effect on play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_edge")]
    pub width: i16,
    #[serde(default = "default_edge")]
    pub height: i16,
    #[serde(default = "default_max_pieces")]
    pub max_pieces_per_side: usize,
    #[serde(default = "default_layout_parity")]
    pub layout_parity: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: default_edge(),
            height: default_edge(),
            max_pieces_per_side: default_max_pieces(),
            layout_parity: default_layout_parity(),
        }
    }
}

impl BoardConfig {
    pub fn new(width: i16, height: i16, max_pieces_per_side: usize) -> Self {
        Self {
            width,
            height,
            max_pieces_per_side,
            layout_parity: default_layout_parity(),
        }
    }

    pub fn with_layout_parity(mut self, parity: bool) -> Self {
        self.layout_parity = parity;
        self
    }

    /// Largest number of men either side receives from [`crate::board::Board::reset`].
    ///
    /// Each side fills two rows on one file parity and one row on the other, so on
    /// odd widths the two sides can differ by one.
    pub fn starting_pieces(&self) -> usize {
        let w = self.width.max(0) as usize;
        let even_files = w.div_ceil(2);
        let odd_files = w / 2;
        2 * even_files.max(odd_files) + even_files.min(odd_files)
    }

    /// Number of squares on the grid.
    pub fn squares(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    /// A side can never hold more pieces than there are squares.
    pub fn check_piece_limit(&self) -> Result<(), ConfigError> {
        let squares = self.squares();
        if self.max_pieces_per_side > squares {
            return Err(ConfigError::PieceLimitTooLarge {
                max: self.max_pieces_per_side,
                squares,
            });
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let min_height = 2 * STARTING_ROWS;
        if self.width < 2 || self.width > MAX_EDGE || self.height < min_height || self.height > MAX_EDGE
        {
            return Err(ConfigError::BadDimensions {
                width: self.width,
                height: self.height,
                max: MAX_EDGE,
                min_height,
            });
        }

        self.check_piece_limit()?;

        let needed = self.starting_pieces();
        if needed > self.max_pieces_per_side {
            return Err(ConfigError::TooManyPieces {
                needed,
                max: self.max_pieces_per_side,
            });
        }

        Ok(())
    }
}

fn default_depth() -> i32 {
    5
}

/// Search settings for the AI.
///
/// `depth` is the number of plies searched below each candidate; `0` scores the
/// candidates by material alone and picks randomly among the best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default)]
    pub personality: Personality,
    #[serde(default = "default_depth")]
    pub depth: i32,
    /// Abort a search after this many evaluated nodes.
    #[serde(default)]
    pub max_nodes: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            personality: Personality::default(),
            depth: default_depth(),
            max_nodes: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub ai: AiConfig,
    /// Fixed seed for the tie-break random source; `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Side that moves first; `None` picks one at random.
    #[serde(default)]
    pub first_side: Option<Side>,
}

impl GameConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(s)?;
        cfg.board.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_json_str(&text)
    }
}
