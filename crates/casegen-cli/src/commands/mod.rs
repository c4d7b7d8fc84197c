//! Command implementations.

pub mod config;
pub mod export;
pub mod extract;
pub mod generate;
pub mod show;
pub mod tickets;

pub use self::config::execute_config;
pub use self::export::{export_records, resolve_export};
pub use self::extract::execute_extract;
pub use self::generate::execute_generate;
pub use self::show::execute_show;
pub use self::tickets::execute_tickets;
