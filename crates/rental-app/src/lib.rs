//! Application service layer - booking engine, invoices, configuration

pub mod app;
pub mod config;
