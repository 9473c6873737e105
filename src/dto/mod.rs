//! DTOs del protocolo de la API de MIA
//!
//! Este módulo contiene los payloads de request y los shapes de respuesta de
//! los endpoints `/v1/mia/...`, con los renames serde del wire format.

pub mod agente_dto;
pub mod empresa_dto;
pub mod response_dto;
pub mod solicitud_dto;
pub mod stats_dto;
pub mod viajero_dto;

pub use agente_dto::*;
pub use empresa_dto::*;
pub use response_dto::{CrearResponse, CrearResponseData};
pub use solicitud_dto::*;
pub use stats_dto::*;
pub use viajero_dto::*;
