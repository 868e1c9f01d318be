use actix_cors::Cors;
use actix_multipart::Multipart;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use futures_util::stream::StreamExt;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::algorithm::extract_workbook;
use crate::config::AppConfig;
use crate::error::{ExportError, ExtractError};
use crate::export::{structured_text, write_json_outputs, OutputFiles};
use crate::uploads::{has_accepted_extension, sanitize_filename, save_uploaded_file};

/// Nombre del corpus de texto que se deja junto a los JSON.
pub const STRUCTURED_TEXT_FILE: &str = "timetable_structured.txt";

#[derive(Deserialize)]
struct ExtractRequest {
    path: String,
}

#[derive(Serialize)]
struct UploadResponse {
    status: &'static str,
    workbook: PathBuf,
    sessions: usize,
    roster: usize,
    outputs: OutputFiles,
    structured_text_path: PathBuf,
    structured_text: String,
}

// Fallos del flujo subir -> extraer -> exportar, cada uno con su código HTTP.
enum PipelineError {
    Save(std::io::Error),
    Extract(ExtractError),
    Export(ExportError),
}

impl PipelineError {
    fn into_response(self) -> HttpResponse {
        match self {
            PipelineError::Save(e) => {
                HttpResponse::BadRequest().json(json!({"error": format!("failed to save upload: {}", e), "stage": "save"}))
            }
            PipelineError::Extract(e) => extract_error_response(&e),
            PipelineError::Export(e) => HttpResponse::InternalServerError()
                .json(json!({"error": format!("failed to write outputs: {}", e), "stage": "export"})),
        }
    }
}

fn extract_error_response(e: &ExtractError) -> HttpResponse {
    warn!(stage = e.stage(), error = %e, "extracción fallida");
    HttpResponse::UnprocessableEntity().json(json!({"error": e.to_string(), "stage": e.stage()}))
}

fn blocking_error_response(e: actix_web::error::BlockingError) -> HttpResponse {
    error!(error = %e, "tarea bloqueante cancelada");
    HttpResponse::InternalServerError().json(json!({"error": format!("worker error: {}", e)}))
}

fn run_pipeline(workbook: PathBuf, cfg: &AppConfig) -> Result<UploadResponse, PipelineError> {
    let extraction = extract_workbook(&workbook, &cfg.layout).map_err(PipelineError::Extract)?;
    let outputs = write_json_outputs(&extraction, &cfg.output_dir).map_err(PipelineError::Export)?;

    let text = structured_text(&extraction, &cfg.layout);
    let text_path = outputs
        .timetable
        .filepath
        .parent()
        .map(|p| p.join(STRUCTURED_TEXT_FILE))
        .unwrap_or_else(|| PathBuf::from(STRUCTURED_TEXT_FILE));
    std::fs::write(&text_path, &text).map_err(|e| PipelineError::Export(ExportError::Io(e)))?;

    Ok(UploadResponse {
        status: "ok",
        workbook,
        sessions: extraction.sessions.len(),
        roster: extraction.roster.len(),
        outputs,
        structured_text_path: text_path,
        structured_text: text,
    })
}

/// POST /timetable/upload
/// Recibe un .xls/.xlsx (multipart), lo guarda, extrae y deja JSON + texto en el directorio de salida.
async fn upload_handler(cfg: web::Data<AppConfig>, mut payload: Multipart) -> impl Responder {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field_res) = payload.next().await {
        let mut field = match field_res {
            Ok(f) => f,
            Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("multipart error: {}", e)})),
        };

        // Sólo interesa el primer campo con nombre de archivo
        let filename = match field.content_disposition().get_filename() {
            Some(name) => name.to_string(),
            None => continue,
        };
        if upload.is_some() {
            continue;
        }

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(data) => {
                    if bytes.len() + data.len() > cfg.max_upload_bytes {
                        warn!(file = %filename, limit = cfg.max_upload_bytes, "upload demasiado grande");
                        return HttpResponse::PayloadTooLarge().json(json!({
                            "error": format!("file exceeds {} bytes", cfg.max_upload_bytes),
                            "stage": "save"
                        }));
                    }
                    bytes.extend_from_slice(&data);
                }
                Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("upload stream error: {}", e)})),
            }
        }
        upload = Some((filename, bytes));
    }

    let Some((filename, bytes)) = upload else {
        return HttpResponse::BadRequest().json(json!({"error": "no file field in multipart body"}));
    };
    if sanitize_filename(&filename).is_none() || !has_accepted_extension(&filename) {
        return HttpResponse::BadRequest().json(json!({"error": format!("unsupported file '{}': expected .xls or .xlsx", filename)}));
    }

    info!(file = %filename, bytes = bytes.len(), "workbook recibido");
    let workbook = match save_uploaded_file(&filename, &bytes, &cfg.upload_dir).await {
        Ok(p) => p,
        Err(e) => return PipelineError::Save(e).into_response(),
    };
    let cfg = cfg.into_inner();
    match web::block(move || run_pipeline(workbook, &cfg)).await {
        Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
        Ok(Err(e)) => e.into_response(),
        Err(e) => blocking_error_response(e),
    }
}

/// POST /timetable/extract  { "path": "uploaded_files/tt.xls" }
/// Devuelve la extracción completa (`sessions` y `roster`).
async fn extract_handler(cfg: web::Data<AppConfig>, body: web::Json<ExtractRequest>) -> impl Responder {
    let path = body.into_inner().path;
    if path.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "path is required"}));
    }
    if !Path::new(&path).is_file() {
        return HttpResponse::NotFound().json(json!({"error": format!("file not found: {}", path), "stage": "open"}));
    }

    let layout = cfg.layout.clone();
    match web::block(move || extract_workbook(&path, &layout)).await {
        Ok(Ok(extraction)) => HttpResponse::Ok().json(extraction),
        Ok(Err(e)) => extract_error_response(&e),
        Err(e) => blocking_error_response(e),
    }
}

/// GET /timetable/text?path=...
/// Corpus de texto estructurado del workbook indicado.
async fn text_handler(
    cfg: web::Data<AppConfig>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let path = match query.get("path") {
        Some(p) if !p.trim().is_empty() => p.clone(),
        _ => return HttpResponse::BadRequest().json(json!({"error": "missing path parameter"})),
    };

    let layout = cfg.layout.clone();
    let result = web::block(move || {
        extract_workbook(&path, &layout).map(|extraction| structured_text(&extraction, &layout))
    })
    .await;

    match result {
        Ok(Ok(text)) => HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(text),
        Ok(Err(e)) => extract_error_response(&e),
        Err(e) => blocking_error_response(e),
    }
}

async fn help_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "description": "Extracción de horarios desde planillas .xls/.xlsx con celdas combinadas.",
        "endpoints": {
            "POST /timetable/upload": "multipart con un archivo .xls/.xlsx; guarda, extrae y escribe timetable_*.json, subjects_*.json y timetable_structured.txt",
            "POST /timetable/extract": "JSON {\"path\": \"...\"}; devuelve {sessions, roster}",
            "GET /timetable/text?path=...": "texto estructurado para el servicio de preguntas",
            "GET /help": "esta ayuda"
        },
        "error_stages": ["open", "extract", "save", "export"]
    }))
}

/// Registra las rutas; separado de `run_server` para poder montarlo en tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/timetable/upload", web::post().to(upload_handler))
        .route("/timetable/extract", web::post().to(extract_handler))
        .route("/timetable/text", web::get().to(text_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(config: AppConfig) -> std::io::Result<()> {
    let bind = config.bind.clone();
    let data = web::Data::new(config);
    info!(%bind, "iniciando servidor");
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .configure(configure)
    })
    .bind(bind)?
    .run()
    .await
}
