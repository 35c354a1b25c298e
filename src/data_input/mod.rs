// src/data_input/mod.rs

pub mod telemetry_data;
pub mod telemetry_parser;
