pub mod backend;
pub mod logging;
