pub mod command;
pub mod store;

pub use command::{apply, next_id, Command};
pub use store::{Observer, Toggle, TodoStore};
