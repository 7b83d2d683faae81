//! tests/mod.rs
//! Pruebas unitarias y de integración de los servicios.

pub mod campaign_tests;
pub mod command_tests;
