// src/lib.rs

pub mod agenda_view;
pub mod analysis;
pub mod analysis_view;
pub mod app;
pub mod assistant;
pub mod cases_view;
pub mod chat_message;
pub mod chat_view;
pub mod config;
pub mod dashboard_view;
pub mod data;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod models;
pub mod status_indicator;
pub mod ui;
