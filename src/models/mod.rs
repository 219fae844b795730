// src/models/mod.rs

pub mod attempt;
pub mod score;
pub mod session;
