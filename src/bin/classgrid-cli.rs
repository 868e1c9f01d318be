// CLI: extrae un workbook y escribe las exportaciones en un directorio.

use clap::Parser;
use classgrid::config::{init_tracing, LayoutConfig};
use classgrid::export::{html_document, structured_text, write_json_outputs, write_pdf};
use classgrid::extract_workbook;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "classgrid-cli", about = "Extrae sesiones y roster de un horario .xls/.xlsx")]
struct Args {
    /// Workbook de entrada
    workbook: PathBuf,

    /// Layout en JSON (por defecto la convención estándar)
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Directorio de salida
    #[arg(long, default_value = "output")]
    out: PathBuf,

    /// Escribir también timetable_structured.txt
    #[arg(long)]
    text: bool,

    /// Escribir también semester_timetable.html
    #[arg(long)]
    html: bool,

    /// Convertir el HTML a semester_timetable.pdf con wkhtmltopdf
    #[arg(long)]
    pdf: bool,

    /// Nivel de log si no se define RUST_LOG
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log);

    let layout = match &args.layout {
        Some(p) => match LayoutConfig::from_json_file(p) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("❌ config: {}", e);
                return ExitCode::from(2);
            }
        },
        None => LayoutConfig::default(),
    };

    let extraction = match extract_workbook(&args.workbook, &layout) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("❌ {}: {}", e.stage(), e);
            return ExitCode::FAILURE;
        }
    };

    let outputs = match write_json_outputs(&extraction, &args.out) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("❌ export: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("✅ {} sesiones -> {}", extraction.sessions.len(), outputs.timetable.filepath.display());
    println!("✅ {} asignaturas -> {}", extraction.roster.len(), outputs.subjects.filepath.display());

    if args.text {
        let path = args.out.join("timetable_structured.txt");
        if let Err(e) = std::fs::write(&path, structured_text(&extraction, &layout)) {
            eprintln!("❌ export: {}", e);
            return ExitCode::FAILURE;
        }
        println!("✅ texto -> {}", path.display());
    }

    if args.html || args.pdf {
        let html = html_document(&extraction, &layout);
        if args.html {
            let path = args.out.join("semester_timetable.html");
            if let Err(e) = std::fs::write(&path, &html) {
                eprintln!("❌ export: {}", e);
                return ExitCode::FAILURE;
            }
            println!("✅ html -> {}", path.display());
        }
        if args.pdf {
            let path = args.out.join("semester_timetable.pdf");
            if let Err(e) = write_pdf(&html, &path) {
                eprintln!("❌ export: {}", e);
                return ExitCode::FAILURE;
            }
            println!("✅ pdf -> {}", path.display());
        }
    }

    ExitCode::SUCCESS
}
