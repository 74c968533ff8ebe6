pub mod definition;
pub mod diet;

pub use definition::*;
pub use diet::*;
