pub mod constants;
pub mod components;
pub mod lane;
pub mod physics;
pub mod session;
pub mod chase;
pub mod road;
pub mod split_screen;
pub mod race_clock;

pub use constants::*;
pub use components::*;
pub use lane::*;
pub use physics::*;
pub use session::*;
pub use chase::*;
pub use road::*;
pub use split_screen::*;
pub use race_clock::*;
