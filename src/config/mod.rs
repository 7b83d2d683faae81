//! config/mod.rs

pub mod dialer_config;
