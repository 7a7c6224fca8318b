#![warn(clippy::all, rust_2018_idioms)]
//! Egui front end for the roster user list.

pub mod app;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::RosterApp;
