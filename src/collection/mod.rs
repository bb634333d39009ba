pub mod list;
pub mod set;

pub use list::DocumentList;
pub use set::DocumentSet;
