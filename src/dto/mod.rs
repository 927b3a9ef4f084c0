//! DTOs de la API
//!
//! Requests y responses de cada recurso, con validación via validator.

pub mod agency_dto;
pub mod auth_dto;
pub mod client_dto;
pub mod dashboard_dto;
pub mod document_dto;
pub mod expense_dto;
pub mod maintenance_dto;
pub mod reservation_dto;
pub mod vehicle_dto;
