pub mod dto;
pub mod error;
pub mod mappers;
pub mod ports;
pub mod services;

pub use error::ApplicationResult;
