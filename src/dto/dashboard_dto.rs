use serde::Deserialize;

/// Query del resumen del dashboard (?month=&year=; por defecto el
/// mes de calendario actual)
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}
