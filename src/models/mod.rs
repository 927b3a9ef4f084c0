//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod agency;
pub mod client;
pub mod document;
pub mod expense;
pub mod maintenance;
pub mod reservation;
pub mod vehicle;
