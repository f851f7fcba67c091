//! Domain layer for jubgoong - record tree models and pure statistics

pub mod model;
pub mod repository;
pub mod service;
