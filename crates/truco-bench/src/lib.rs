pub mod config;
pub mod decide;
pub mod logging;
pub mod sample;
