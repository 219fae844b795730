// src/handlers/mod.rs

pub mod answer;
pub mod attempts;
pub mod health;
pub mod leaderboard;
pub mod question;
pub mod session;
