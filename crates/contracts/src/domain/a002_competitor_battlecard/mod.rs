pub mod aggregate;

pub use aggregate::{battlecard, Battlecard, BattlecardField, BattlecardItem, Crayon};
