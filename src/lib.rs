#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod controller;
mod error;
mod fleet;
mod game;
mod guess;
#[cfg(feature = "std")]
mod logging;
mod render;
mod ship;
#[cfg(feature = "std")]
mod terminal;

pub use bitboard::{BitBoard, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use fleet::*;
pub use game::*;
pub use guess::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, LOG_ENV};
pub use render::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use terminal::*;
