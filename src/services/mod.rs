//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación.
//! El corazón es el motor de disponibilidad y mantenimiento: predicados
//! puros sobre vehículos y reservas, más servicios finos que los
//! alimentan con filas acotadas por agencia.

pub mod availability_service;
pub mod maintenance_alert_service;
pub mod odometer_service;
pub mod statistics_service;
