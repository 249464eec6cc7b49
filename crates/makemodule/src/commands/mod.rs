pub mod check;
pub mod common;
pub mod config;
pub mod generate;

pub use check::Check;
pub use common::RunOptions;
pub use config::Config;
pub use generate::Generate;
