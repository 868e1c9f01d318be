//! Configuración del layout de la planilla y del servidor.
//!
//! `LayoutConfig` codifica la convención de una institución concreta (filas
//! de encabezado, columnas de bloques horarios, columnas del roster). Todos los
//! campos tienen valores por defecto, de modo que un JSON parcial basta.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

/// Columna de un bloque horario y su texto de presentación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSlot {
    pub col: usize,
    pub time: String,
}

impl PeriodSlot {
    pub fn new(col: usize, time: &str) -> Self {
        PeriodSlot { col, time: time.to_string() }
    }
}

/// Columnas de la tabla de asignaturas/docentes (0-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterColumns {
    pub code_col: usize,
    pub name_col: usize,
    pub abbreviation_col: usize,
    pub faculty_name_col: usize,
    pub faculty_abbreviation_col: usize,
    /// Columnas de personal de apoyo para prácticos (máximo tres).
    pub staff_cols: Vec<usize>,
}

impl Default for RosterColumns {
    fn default() -> Self {
        RosterColumns {
            code_col: 0,
            name_col: 1,
            abbreviation_col: 3,
            faculty_name_col: 4,
            faculty_abbreviation_col: 5,
            staff_cols: vec![6, 7, 8],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Columna con la etiqueta del día.
    pub day_col: usize,
    pub weekdays: Vec<String>,
    pub period_slots: Vec<PeriodSlot>,
    /// Filas (0-based) que anuncian semestre/sección/sala.
    pub info_rows: Vec<usize>,
    pub semester_col: usize,
    pub section_col: usize,
    /// Si una fila de encabezado viene en blanco se conserva el contexto previo.
    pub carry_forward_blank_headers: bool,
    pub roster: RosterColumns,
    /// Orden de semestres en las exportaciones.
    pub semester_order: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            day_col: 0,
            weekdays: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            period_slots: vec![
                PeriodSlot::new(2, "09:00-10:00"),
                PeriodSlot::new(3, "10:00-11:00"),
                PeriodSlot::new(4, "11:00-12:00"),
                PeriodSlot::new(5, "12:00-1:00"),
                PeriodSlot::new(6, "1:00-2:00"),
                PeriodSlot::new(7, "2:00-3:00"),
                PeriodSlot::new(8, "3:00-4:00"),
                PeriodSlot::new(9, "4:00-5:00"),
            ],
            // filas 5, 36, 70, 104 y 137 de la planilla (1-based)
            info_rows: vec![4, 35, 69, 103, 136],
            semester_col: 1,
            section_col: 5,
            carry_forward_blank_headers: true,
            roster: RosterColumns::default(),
            semester_order: ["3", "5", "7", "Other"].iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LayoutConfig {
    /// Lee un layout desde JSON y lo valida.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: LayoutConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rechaza layouts que no describen la convención esperada en vez de adivinar.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period_slots.is_empty() {
            return Err(ConfigError::Invalid("period_slots está vacío".into()));
        }
        let mut cols = HashSet::new();
        let mut times = HashSet::new();
        for slot in &self.period_slots {
            let time = slot.time.trim();
            if time.is_empty() {
                return Err(ConfigError::Invalid(format!("la columna {} no tiene horario", slot.col)));
            }
            if !cols.insert(slot.col) {
                return Err(ConfigError::Invalid(format!("columna de bloque duplicada: {}", slot.col)));
            }
            // el bloque se identifica por su horario en las exportaciones
            if !times.insert(time) {
                return Err(ConfigError::Invalid(format!("horario de bloque duplicado: '{}'", time)));
            }
        }
        if self.weekdays.is_empty() {
            return Err(ConfigError::Invalid("weekdays está vacío".into()));
        }
        if let Some(bad) = self.weekdays.iter().find(|d| crate::models::Day::from_weekday_label(d).is_none()) {
            return Err(ConfigError::Invalid(format!("día no reconocido: '{}'", bad)));
        }
        if self.roster.staff_cols.len() > 3 {
            return Err(ConfigError::Invalid("staff_cols admite como máximo tres columnas".into()));
        }
        Ok(())
    }

    /// Bloque horario configurado para una columna.
    pub fn slot_for_col(&self, col: usize) -> Option<(usize, &PeriodSlot)> {
        self.period_slots.iter().enumerate().find(|(_, s)| s.col == col)
    }

    pub fn is_info_row(&self, row: usize) -> bool {
        self.info_rows.contains(&row)
    }
}

/// Configuración del proceso (servidor y CLI) tomada del entorno.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub upload_dir: PathBuf,
    pub output_dir: PathBuf,
    pub layout: LayoutConfig,
    pub log_level: String,
    /// Tamaño máximo aceptado para un workbook subido.
    pub max_upload_bytes: usize,
}

/// 20 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

impl AppConfig {
    /// Carga `.env` si existe y lee las variables `CLASSGRID_*`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv::dotenv();

        let layout = match env::var("CLASSGRID_LAYOUT") {
            Ok(p) if !p.trim().is_empty() => LayoutConfig::from_json_file(p.trim())?,
            _ => LayoutConfig::default(),
        };

        let max_upload_bytes = match env::var("CLASSGRID_MAX_UPLOAD_BYTES") {
            Ok(v) if !v.trim().is_empty() => v.trim().parse::<usize>().map_err(|e| {
                ConfigError::Invalid(format!("CLASSGRID_MAX_UPLOAD_BYTES inválido '{}': {}", v.trim(), e))
            })?,
            _ => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(AppConfig {
            bind: env::var("CLASSGRID_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            upload_dir: env::var("CLASSGRID_UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploaded_files")),
            output_dir: env::var("CLASSGRID_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("output")),
            layout,
            log_level: env::var("CLASSGRID_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes,
        })
    }
}

/// Instala el subscriber de `tracing`; `RUST_LOG` tiene prioridad sobre el nivel dado.
pub fn init_tracing(default_level: &str) {
    let level = default_level.trim();
    let level = if level.is_empty() { "info".to_string() } else { level.to_lowercase() };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
