pub mod database;
pub mod setting;
pub mod util;

pub const CLI_NAME: &str = "gigbook";

// logging constants
pub const GIGBOOK_LOGLEVEL: &str = "GIGBOOK_LOGLEVEL";
