pub use batch::*;
pub use error::*;
pub use evaluator::*;
pub use incremental::*;
pub use point::*;
pub use reader::*;

pub mod batch;
pub mod error;
pub mod evaluator;
pub mod incremental;
pub mod point;
pub mod reader;

#[cfg(test)]
pub(crate) mod test_utils;
