//! Respuestas genéricas de la API de MIA y helpers de deserialización
//!
//! El backend confirma las altas con un mensaje de texto libre y, según el
//! recurso, un bloque `data` con el id asignado. Los ids llegan a veces como
//! número y a veces como string; aquí se normalizan siempre a `String`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Respuesta de una llamada de creación (`POST /v1/mia/...`)
#[derive(Debug, Clone, Deserialize)]
pub struct CrearResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<CrearResponseData>,
}

/// Bloque `data` de una respuesta de creación
#[derive(Debug, Clone, Deserialize)]
pub struct CrearResponseData {
    #[serde(default, deserialize_with = "de_id")]
    pub id_empresa: Option<String>,
}

/// Deserializa un id que puede llegar como string o como número.
pub(crate) fn de_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let valor = Option::<Value>::deserialize(deserializer)?;
    Ok(valor.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

/// Coerción booleana al estilo JS (`Boolean(x)`): `0`, `null` y la cadena
/// vacía son false; cualquier string no vacío, incluidos `"0"` y `"false"`,
/// es true.
pub(crate) fn de_boolish<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let valor = Option::<Value>::deserialize(deserializer)?;
    Ok(match valor {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        _ => false,
    })
}
