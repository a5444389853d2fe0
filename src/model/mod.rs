pub mod color;
pub mod common;
pub mod product;
pub mod taxonomy;
pub mod view;

pub use color::*;
pub use common::*;
pub use product::*;
pub use taxonomy::*;
pub use view::*;
