pub mod entry;
pub mod position;
pub mod side;

pub use entry::{Entry, SavedEntry};
pub use position::Position;
pub use side::Side;
