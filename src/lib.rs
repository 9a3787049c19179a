#![cfg_attr(not(feature = "std"), no_std)]

//! Single-player Battleship on a 10×10 grid with three ships.
//!
//! The engine (`board`, `game`, `ship`) is `no_std` and takes its random
//! source as a parameter. The terminal front end (`ui`, `cli`) and logging
//! setup need the `std` feature.

mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
