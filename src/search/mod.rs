pub mod config;
pub mod controller;
pub mod evaluation;
pub mod minimax;
pub mod position;
pub mod rollback;

pub use config::*;
pub use controller::*;
pub use evaluation::*;
pub use minimax::*;
pub use position::*;
pub use rollback::*;
