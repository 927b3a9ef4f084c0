//! Controladores de la API
//!
//! Orquestan cada operación: validar el request, llamar a repositorios
//! y servicios, y convertir el resultado a DTO.

pub mod agency_controller;
pub mod client_controller;
pub mod dashboard_controller;
pub mod document_controller;
pub mod expense_controller;
pub mod maintenance_controller;
pub mod reservation_controller;
pub mod vehicle_controller;
