//! Rubik's Cube Facelet Engine
//!
//! Models a 3x3x3 cube as 54 facelets, applies moves in standard notation,
//! generates scrambles, looks up which stickers share a cubelet and solves the
//! white cross with the beginner's method. Rendering is left to callers; the
//! `geometry` module describes where each facelet sits on the cube.

pub mod connectivity;
pub mod cube;
pub mod error;
pub mod face;
pub mod geometry;
pub mod grid;
pub mod moves;
pub mod scramble;
pub mod solver;

pub use cube::Cube;
pub use error::CubeError;
pub use face::{Face, Facelet};
pub use grid::FaceletState;
pub use moves::Move;
pub use solver::{Solution, Solver};
