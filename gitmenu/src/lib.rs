pub mod branches;
pub mod config;
pub mod mask;
pub mod menu;
pub mod term_host;
