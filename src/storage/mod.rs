pub mod file;
pub mod paths;
pub mod writer;

pub use writer::{Persist, PersistWriter};
