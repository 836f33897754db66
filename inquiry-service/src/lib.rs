//! inquiry-service: relays website contact and admission inquiries to the
//! school administrator as HTML email.
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod templates;
