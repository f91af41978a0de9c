#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub mod board;
pub mod error;
pub mod history;

pub use board::Scoreboard;
pub use error::{Error, ErrorKind, Result};
