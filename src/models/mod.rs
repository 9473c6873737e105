//! Modelos de dominio
//!
//! Formularios de intake (con validación) y registros de display del cliente.

pub mod agente;
pub mod empresa;
pub mod reserva;

pub use agente::*;
pub use empresa::*;
pub use reserva::*;
