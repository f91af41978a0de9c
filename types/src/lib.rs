pub mod change;
pub mod play;
pub mod team;

pub use change::*;
pub use play::*;
pub use team::*;
