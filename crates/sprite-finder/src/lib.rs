//! Headless C64 sprite browser and cutter.
//!
//! Loads a memory snapshot and a character ROM, drives the
//! [`c64_raster::Scene`] with scripted key presses, and writes the result
//! as a PNG screenshot. In cut mode it prints sprites as C arrays instead.

pub mod app;
pub mod assets;
pub mod capture;
pub mod config;
pub mod export;
pub mod input;
pub mod state;
