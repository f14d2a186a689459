pub mod commands;
pub mod dto;
pub mod error;
pub mod logging;
pub mod ports;
pub mod services;

pub use error::ApplicationResult;
