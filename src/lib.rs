pub mod apis;
pub mod browse;
pub mod cart;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod filters;
pub mod images;
pub mod logging;
pub mod session;
