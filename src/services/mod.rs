// src/services/mod.rs
//
// Core trivia logic. Handlers stay thin and call into these.

pub mod answer;
pub mod attempt;
pub mod leaderboard;
pub mod score;
pub mod session;
