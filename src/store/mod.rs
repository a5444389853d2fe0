pub mod files;
pub mod memory;
pub mod records;
pub mod taxonomy;
pub mod traits;

pub use files::*;
pub use memory::*;
pub use records::*;
pub use taxonomy::*;
pub use traits::*;
