pub use data::*;
pub use error::*;
pub use logger::*;
pub use plot::*;
pub use timer::*;

pub mod data;
pub mod error;
pub mod logger;
pub mod macros;
pub mod plot;
pub mod timer;
