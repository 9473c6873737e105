//! Configuración del proyecto
//!
//! Este módulo contiene la configuración resuelta desde variables de entorno
//! en el arranque: URL base de la API de MIA, api key y timeouts.

pub mod environment;

pub use environment::*;
