// Module exports for models

pub mod config;
