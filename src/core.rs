pub mod error;
pub mod weight;

mod neighbors;

pub use error::*;
pub use neighbors::Neighbors;
pub use weight::Weight;
