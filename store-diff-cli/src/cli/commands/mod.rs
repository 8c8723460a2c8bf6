pub mod compare;
pub mod config;
