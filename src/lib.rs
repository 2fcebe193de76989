// Damas - jogador automático com minimax e cortes alpha-beta

pub mod arena;
pub mod core;
pub mod moves;
pub mod search;

pub use self::core::*;
