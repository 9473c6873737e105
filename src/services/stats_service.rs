//! Agregación de estadísticas para el dashboard
//!
//! Reduce las reservas del mes a los contadores de tarjetas (pasadas,
//! activas, próximas, gasto) y las filas anuales a las series por hotel de
//! las gráficas. Las recargas llevan una generación monótona: una respuesta
//! lenta que llega después de una recarga más nueva se descarta en vez de
//! pisar el estado.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::client::MiaClient;
use crate::dto::{MonthlyStat, MonthlyStatsResponse, YearStatRow};
use crate::utils::errors::ApiError;
use crate::utils::normalize::{formato_moneda_mx, parse_fecha};

/// Resumen mensual para las tarjetas del dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumenMensual {
    pub reservas_pasadas: usize,
    pub reservas_activas: usize,
    pub proximas_reservas: usize,
    pub gasto_mensual: f64,
    /// Valor de tarjeta ya formateado, p. ej. `$2,000`
    pub gasto_mensual_formateado: String,
}

/// Punto de una serie por hotel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PuntoSerie {
    pub name: String,
    pub amount: f64,
}

/// Series de gasto y noches por hotel para el mes seleccionado
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesAnuales {
    pub gastos: Vec<PuntoSerie>,
    pub noches: Vec<PuntoSerie>,
}

/// Agregador de estadísticas con supresión de respuestas obsoletas
pub struct StatsAggregator {
    client: Arc<MiaClient>,
    generacion: AtomicU64,
    mensual: RwLock<(u64, Option<ResumenMensual>)>,
    anual: RwLock<(u64, Option<SeriesAnuales>)>,
}

impl StatsAggregator {
    pub fn new(client: Arc<MiaClient>) -> Self {
        Self {
            client,
            generacion: AtomicU64::new(0),
            mensual: RwLock::new((0, None)),
            anual: RwLock::new((0, None)),
        }
    }

    /// Consulta el endpoint mensual y reduce a `ResumenMensual`.
    pub async fn fetch_monthly(
        &self,
        user_id: &str,
        month: u32,
        year: i32,
    ) -> Result<ResumenMensual, ApiError> {
        let respuesta: MonthlyStatsResponse = self
            .client
            .get_json(&format!(
                "/v1/mia/stats/monthly?month={}&year={}&id_user={}",
                month,
                year,
                urlencoding::encode(user_id)
            ))
            .await?;

        let hoy = Local::now().date_naive();
        Ok(resumen_mensual(&respuesta.data, hoy))
    }

    /// Consulta las filas anuales por hotel.
    pub async fn fetch_yearly(
        &self,
        user_id: &str,
        year: i32,
    ) -> Result<Vec<YearStatRow>, ApiError> {
        self.client
            .get_json(&format!(
                "/v1/mia/stats/year?year={}&id_user={}",
                year,
                urlencoding::encode(user_id)
            ))
            .await
    }

    /// Recarga el resumen mensual guardado.
    ///
    /// Devuelve `Ok(None)` si otra recarga más nueva ya aplicó su resultado:
    /// el estado nunca retrocede a una respuesta superada.
    pub async fn refresh_monthly(
        &self,
        user_id: &str,
        month: u32,
        year: i32,
    ) -> Result<Option<ResumenMensual>, ApiError> {
        let generacion = self.nueva_generacion();
        let resumen = self.fetch_monthly(user_id, month, year).await?;
        Ok(self.aplicar(&self.mensual, generacion, resumen).await)
    }

    /// Recarga las series anuales del mes seleccionado, con la misma
    /// supresión de respuestas obsoletas que `refresh_monthly`.
    pub async fn refresh_yearly(
        &self,
        user_id: &str,
        month: u32,
        year: i32,
    ) -> Result<Option<SeriesAnuales>, ApiError> {
        let generacion = self.nueva_generacion();
        let filas = self.fetch_yearly(user_id, year).await?;
        let series = series_por_hotel(&filas, month);
        Ok(self.aplicar(&self.anual, generacion, series).await)
    }

    /// Último resumen mensual aplicado
    pub async fn resumen_actual(&self) -> Option<ResumenMensual> {
        self.mensual.read().await.1.clone()
    }

    /// Últimas series anuales aplicadas
    pub async fn series_actuales(&self) -> Option<SeriesAnuales> {
        self.anual.read().await.1.clone()
    }

    fn nueva_generacion(&self) -> u64 {
        self.generacion.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn aplicar<T: Clone>(
        &self,
        slot: &RwLock<(u64, Option<T>)>,
        generacion: u64,
        valor: T,
    ) -> Option<T> {
        let mut guard = slot.write().await;
        if generacion < guard.0 {
            log::debug!(
                "🕓 Descartando respuesta obsoleta (gen {} < {})",
                generacion,
                guard.0
            );
            return None;
        }
        *guard = (generacion, Some(valor.clone()));
        Some(valor)
    }
}

/// Reduce las reservas del mes a los contadores de tarjetas.
///
/// `hoy` debe venir normalizado a medianoche. Una reserva cuyo `check_out`
/// es exactamente hoy cuenta como pasada, no activa; activa exige
/// `check_in <= hoy` y `check_out > hoy` estricto, así que los buckets de
/// pasadas y activas parten en `check_out <= hoy` sin solaparse.
pub fn resumen_mensual(stats: &[MonthlyStat], hoy: NaiveDate) -> ResumenMensual {
    let reservas_pasadas = stats
        .iter()
        .filter(|s| parse_fecha(&s.check_out).is_some_and(|f| f <= hoy))
        .count();

    let reservas_activas = stats
        .iter()
        .filter(|s| {
            parse_fecha(&s.check_in).is_some_and(|entrada| entrada <= hoy)
                && parse_fecha(&s.check_out).is_some_and(|salida| salida > hoy)
        })
        .count();

    let proximas_reservas = stats
        .iter()
        .filter(|s| parse_fecha(&s.check_in).is_some_and(|f| f > hoy))
        .count();

    let gasto_mensual: f64 = stats.iter().map(|s| s.total).sum();

    ResumenMensual {
        reservas_pasadas,
        reservas_activas,
        proximas_reservas,
        gasto_mensual,
        gasto_mensual_formateado: format!("${}", formato_moneda_mx(gasto_mensual)),
    }
}

/// Deriva las series Gastos/Noches por hotel para el mes seleccionado.
///
/// El filtrado reproduce la regla observada del dashboard: se seleccionan
/// las filas cuyo campo `mes` contiene el número de mes en decimal.
pub fn series_por_hotel(filas: &[YearStatRow], month: u32) -> SeriesAnuales {
    let mes = month.to_string();
    let seleccion: Vec<&YearStatRow> = filas.iter().filter(|f| f.mes.contains(&mes)).collect();

    SeriesAnuales {
        gastos: seleccion
            .iter()
            .map(|f| PuntoSerie {
                name: f.hotel.clone(),
                amount: f.total_gastado,
            })
            .collect(),
        noches: seleccion
            .iter()
            .map(|f| PuntoSerie {
                name: f.hotel.clone(),
                amount: f.visitas,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(check_in: &str, check_out: &str, total: f64) -> MonthlyStat {
        MonthlyStat {
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            total,
        }
    }

    #[test]
    fn checkout_hoy_cuenta_como_pasada_no_activa() {
        let hoy = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let stats = [stat("2024-06-10", "2024-06-15", 1000.0)];

        let resumen = resumen_mensual(&stats, hoy);

        assert_eq!(resumen.reservas_pasadas, 1);
        assert_eq!(resumen.reservas_activas, 0);
        assert_eq!(resumen.proximas_reservas, 0);
    }

    #[test]
    fn buckets_mensuales() {
        let hoy = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let stats = [
            stat("2024-06-01", "2024-06-05", 500.0),
            stat("2024-06-14", "2024-06-17", 1500.0),
            stat("2024-06-20", "2024-06-22", 2000.0),
        ];

        let resumen = resumen_mensual(&stats, hoy);

        assert_eq!(resumen.reservas_pasadas, 1);
        assert_eq!(resumen.reservas_activas, 1);
        assert_eq!(resumen.proximas_reservas, 1);
        assert_eq!(resumen.gasto_mensual, 4000.0);
        assert_eq!(resumen.gasto_mensual_formateado, "$4,000");
    }

    #[test]
    fn series_filtran_por_mes() {
        let filas = [
            YearStatRow {
                mes: "2024-06".to_string(),
                hotel: "Hotel A".to_string(),
                total_gastado: 1200.0,
                visitas: 3.0,
            },
            YearStatRow {
                mes: "2024-06".to_string(),
                hotel: "Hotel B".to_string(),
                total_gastado: 800.0,
                visitas: 2.0,
            },
            YearStatRow {
                mes: "2024-05".to_string(),
                hotel: "Hotel C".to_string(),
                total_gastado: 999.0,
                visitas: 1.0,
            },
        ];

        let series = series_por_hotel(&filas, 6);

        assert_eq!(series.gastos.len(), 2);
        assert_eq!(series.gastos[0].name, "Hotel A");
        assert_eq!(series.gastos[0].amount, 1200.0);
        assert_eq!(series.noches[1].amount, 2.0);
    }

    #[tokio::test]
    async fn una_generacion_vieja_no_pisa_una_nueva() {
        use crate::config::environment::EnvironmentConfig;

        let config = EnvironmentConfig::with_base_url("http://localhost:0", "test-key");
        let client = Arc::new(crate::client::MiaClient::new(&config).unwrap());
        let stats = StatsAggregator::new(client);

        let gen_vieja = stats.nueva_generacion();
        let gen_nueva = stats.nueva_generacion();

        let hoy = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let nueva = resumen_mensual(&[stat("2024-06-20", "2024-06-22", 9.0)], hoy);
        let vieja = resumen_mensual(&[], hoy);

        assert!(stats
            .aplicar(&stats.mensual, gen_nueva, nueva.clone())
            .await
            .is_some());
        assert!(stats
            .aplicar(&stats.mensual, gen_vieja, vieja)
            .await
            .is_none());
        assert_eq!(stats.resumen_actual().await, Some(nueva));
    }
}
