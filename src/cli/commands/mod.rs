//! CLI command implementations

pub mod config;
pub mod find;
pub mod key;
pub mod path;

pub use config::execute as config;
pub use find::execute as find;
pub use key::execute as key;
pub use path::execute as path;
