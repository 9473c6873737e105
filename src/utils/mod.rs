//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores y las utilidades de
//! normalización de datos (nombres, fechas, moneda).

pub mod errors;
pub mod normalize;

pub use errors::*;
pub use normalize::*;
