mod listing;
mod message;
mod product;

pub use listing::*;
pub use message::*;
pub use product::*;
