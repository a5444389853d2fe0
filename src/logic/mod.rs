pub mod color_keys;
pub mod session;
pub mod views;

pub use color_keys::*;
pub use session::*;
pub use views::*;
