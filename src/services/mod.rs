//! Services module
//!
//! Este módulo contiene la lógica de orquestación del núcleo: altas de
//! recursos, onboarding encadenado, solicitudes de reserva, estadísticas del
//! dashboard y consultas de directorio.

pub mod directory_service;
pub mod onboarding_service;
pub mod resource_service;
pub mod solicitud_service;
pub mod stats_service;

pub use directory_service::*;
pub use onboarding_service::*;
pub use resource_service::*;
pub use solicitud_service::*;
pub use stats_service::*;
