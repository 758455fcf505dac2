//! Rules engine and tree-search AI for draughts on a configurable square board.
//!
//! [`board::Board`] owns the position and the turn state machine, [`search`] picks
//! moves for either side, and [`game::Game`] ties the two together for drivers.

pub mod board;
pub mod config;
pub mod coord;
pub mod game;
pub mod pieces;
pub mod rules;
pub mod search;
