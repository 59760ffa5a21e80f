pub mod bucket;
pub mod task;

pub use bucket::*;
pub use task::*;
