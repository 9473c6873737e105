//! Shapes de los endpoints de estadísticas

use serde::{Deserialize, Serialize};

/// Una reserva histórica del mes (`GET /v1/mia/stats/monthly`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyStat {
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default)]
    pub total: f64,
}

/// Envoltura `{ data: [...] }` del endpoint mensual
#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyStatsResponse {
    #[serde(default)]
    pub data: Vec<MonthlyStat>,
}

/// Fila del endpoint anual (`GET /v1/mia/stats/year`), agregada por hotel y mes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearStatRow {
    #[serde(default)]
    pub mes: String,
    #[serde(default)]
    pub hotel: String,
    #[serde(default)]
    pub total_gastado: f64,
    #[serde(default)]
    pub visitas: f64,
}
