// src/api/handlers/mod.rs
pub mod check;
pub mod generator;
pub mod index;
