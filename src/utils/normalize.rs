//! Utilidades de normalización
//!
//! Este módulo contiene funciones helper para normalizar nombres, fechas de
//! nacimiento y montos antes de enviarlos a la API o mostrarlos en la UI.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::utils::errors::ApiError;

/// Une las partes no vacías de un nombre con un solo espacio.
///
/// `["Ana", "", "López", "Pérez"]` produce `"Ana López Pérez"`: las partes
/// vacías o en blanco se filtran, sin espacios dobles ni bordes.
pub fn nombre_completo<'a, I>(partes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    partes
        .into_iter()
        .filter(|parte| !parte.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Devuelve el valor, o un solo espacio `" "` si falta o está vacío.
///
/// El backend exige que `segundo_nombre` y `apellido_materno` viajen siempre
/// en el payload, nunca como cadena vacía.
pub fn espacio_si_vacio(valor: Option<&str>) -> String {
    match valor {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => " ".to_string(),
    }
}

/// Normaliza cualquier fecha de nacimiento parseable a `YYYY-MM-DD 00:00:00`.
///
/// Acepta fecha sola, datetime ISO-8601 con offset (se toma la fecha del
/// instante en UTC) y datetime naive `YYYY-MM-DD HH:MM:SS`.
pub fn normalizar_fecha_nacimiento(valor: &str) -> Result<String, ApiError> {
    let fecha = if let Ok(dt) = DateTime::parse_from_rfc3339(valor) {
        dt.naive_utc().date()
    } else if let Ok(d) = NaiveDate::parse_from_str(valor, "%Y-%m-%d") {
        d
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(valor, "%Y-%m-%d %H:%M:%S") {
        dt.date()
    } else {
        return Err(ApiError::InvalidDate(valor.to_string()));
    };
    Ok(format!("{} 00:00:00", fecha.format("%Y-%m-%d")))
}

/// Parsear una fecha de check-in/check-out del backend.
///
/// El backend mezcla `YYYY-MM-DD`, datetimes naive e ISO-8601 con offset.
pub fn parse_fecha(valor: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(valor) {
        return Some(dt.naive_utc().date());
    }
    if let Ok(d) = NaiveDate::parse_from_str(valor, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(valor, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    None
}

/// Agrupación de miles al estilo `es-MX` (`toLocaleString`): hasta tres
/// decimales, sin ceros a la derecha.
pub fn formato_moneda_mx(valor: f64) -> String {
    let negativo = valor < 0.0;
    let redondeado = (valor.abs() * 1000.0).round() / 1000.0;
    let entero = redondeado.trunc() as u64;

    let digitos: Vec<char> = entero.to_string().chars().rev().collect();
    let mut agrupado = Vec::new();
    for (i, c) in digitos.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            agrupado.push(',');
        }
        agrupado.push(*c);
    }
    let mut salida: String = agrupado.into_iter().rev().collect();

    let fraccion = redondeado.fract();
    if fraccion > 0.0 {
        let frac = format!("{:.3}", fraccion);
        let frac = frac.trim_start_matches("0.").trim_end_matches('0');
        if !frac.is_empty() {
            salida.push('.');
            salida.push_str(frac);
        }
    }

    if negativo {
        format!("-{}", salida)
    } else {
        salida
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nombre_completo_filtra_partes_vacias() {
        let nombre = nombre_completo(["Ana", "", "López", "Pérez"]);
        assert_eq!(nombre, "Ana López Pérez");
    }

    #[test]
    fn nombre_completo_filtra_espacios_en_blanco() {
        let nombre = nombre_completo(["Juan", " ", "García", ""]);
        assert_eq!(nombre, "Juan García");
    }

    #[test]
    fn espacio_si_vacio_nunca_devuelve_cadena_vacia() {
        assert_eq!(espacio_si_vacio(None), " ");
        assert_eq!(espacio_si_vacio(Some("")), " ");
        assert_eq!(espacio_si_vacio(Some("María")), "María");
    }

    #[test]
    fn fecha_nacimiento_desde_fecha_sola() {
        let fecha = normalizar_fecha_nacimiento("2001-09-25").unwrap();
        assert_eq!(fecha, "2001-09-25 00:00:00");
    }

    #[test]
    fn fecha_nacimiento_con_offset_usa_la_fecha_utc() {
        // 23:30 -05:00 cae en el día siguiente en UTC
        let fecha = normalizar_fecha_nacimiento("2001-09-25T23:30:00-05:00").unwrap();
        assert_eq!(fecha, "2001-09-26 00:00:00");
    }

    #[test]
    fn fecha_nacimiento_invalida_es_error() {
        assert!(normalizar_fecha_nacimiento("no es fecha").is_err());
    }

    #[test]
    fn moneda_mx_agrupa_miles() {
        assert_eq!(formato_moneda_mx(0.0), "0");
        assert_eq!(formato_moneda_mx(2000.0), "2,000");
        assert_eq!(formato_moneda_mx(1_234_567.5), "1,234,567.5");
    }
}
