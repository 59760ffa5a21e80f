pub mod cli;
pub mod error;
pub mod group;
pub mod logging;
pub mod models;
pub mod output;
pub mod state;
pub mod storage;
