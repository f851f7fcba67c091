//! Application service layer - configuration, store access, reporting

pub mod config;
pub mod report;
pub mod repository;
