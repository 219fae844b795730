pub mod auth;
pub mod normalize;
pub mod time;
