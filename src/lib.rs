#![doc = include_str!("../README.md")]

pub mod config;
pub mod device;
pub mod error;
pub mod frame;
#[cfg(feature = "hardware")]
pub mod k4a;
pub mod mapper;
pub mod sim;
pub mod viewer;
