use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistoricoTiempos {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub activos_count: i64,
    pub cerrados_count: i64,
    #[serde(rename = "cerradostrimestreCount")]
    pub cerrados_trimestre_count: i64,
    pub profesionales_count: i64,
    pub historico_tiempos: HistoricoTiempos,
    pub dias_desde_ultimo_proceso_activo: i64,
    pub promedio_cierre: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_dashboard_field_names() {
        let stats = DashboardStats {
            activos_count: 4,
            cerrados_count: 3,
            cerrados_trimestre_count: 2,
            profesionales_count: 9,
            historico_tiempos: HistoricoTiempos {
                labels: vec!["A".into()],
                values: vec![5],
            },
            dias_desde_ultimo_proceso_activo: 12,
            promedio_cierre: 5,
        };
        let value = serde_json::to_value(stats).unwrap();
        assert_eq!(value["activosCount"], 4);
        assert_eq!(value["cerradosCount"], 3);
        assert_eq!(value["cerradostrimestreCount"], 2);
        assert_eq!(value["profesionalesCount"], 9);
        assert_eq!(value["historicoTiempos"]["labels"][0], "A");
        assert_eq!(value["historicoTiempos"]["values"][0], 5);
        assert_eq!(value["diasDesdeUltimoProcesoActivo"], 12);
        assert_eq!(value["promedioCierre"], 5);
    }
}
