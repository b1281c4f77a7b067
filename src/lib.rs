// src/lib.rs
// DOCUMENTATION: Library root shared by the server and the price board

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod presentation;
pub mod services;
