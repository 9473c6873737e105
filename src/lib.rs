//! Núcleo de orquestación de datos para la plataforma de reservas MIA
//!
//! Este crate contiene el cliente HTTP y los servicios que hablan con la API
//! de MIA: alta encadenada de agente/empresa/viajero (onboarding), creación y
//! listado de solicitudes de reserva, agregación de estadísticas para el
//! dashboard y consultas de directorio. La capa de presentación (routing,
//! componentes, gráficas) queda fuera de este núcleo.

pub mod client;
pub mod config;
pub mod dto;
pub mod models;
pub mod services;
pub mod utils;
