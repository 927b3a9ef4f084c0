//! Back-office de alquiler de vehículos
//!
//! Gestión multi-tenant de flota: disponibilidad, odómetro efectivo,
//! alertas de mantenimiento y estadísticas mensuales.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
