//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula el SQL de una entidad. Todas las consultas
//! de negocio están acotadas por agency_id (frontera multi-tenant).

pub mod agency_repository;
pub mod client_repository;
pub mod document_repository;
pub mod expense_repository;
pub mod maintenance_repository;
pub mod reservation_repository;
pub mod vehicle_repository;
