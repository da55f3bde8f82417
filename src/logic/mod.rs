pub mod direction;
pub mod error;
pub mod player;
pub mod roster;
pub mod sprite;
pub mod unit;
