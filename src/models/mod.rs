pub mod category;
pub mod complaint;

pub use category::*;
pub use complaint::*;
