pub mod constant;
pub mod utils;

pub use constant::*;
pub use utils::*;
