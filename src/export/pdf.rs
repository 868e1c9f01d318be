//! Conversión HTML -> PDF delegada a `wkhtmltopdf`.

use crate::error::ExportError;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, info};

const WINDOWS_CANDIDATES: [&str; 2] = [
    r"C:\Program Files\wkhtmltopdf\bin\wkhtmltopdf.exe",
    r"C:\Program Files (x86)\wkhtmltopdf\bin\wkhtmltopdf.exe",
];

const UNIX_CANDIDATES: [&str; 3] = [
    "/usr/bin/wkhtmltopdf",
    "/usr/local/bin/wkhtmltopdf",
    "/opt/homebrew/bin/wkhtmltopdf",
];

/// Busca el ejecutable: `CLASSGRID_WKHTMLTOPDF`, rutas conocidas y luego `PATH`.
pub fn find_wkhtmltopdf() -> Option<PathBuf> {
    if let Ok(p) = env::var("CLASSGRID_WKHTMLTOPDF") {
        let p = PathBuf::from(p);
        if p.is_file() {
            return Some(p);
        }
    }

    let candidates: &[&str] = if cfg!(windows) { &WINDOWS_CANDIDATES } else { &UNIX_CANDIDATES };
    if let Some(found) = candidates.iter().map(|p| PathBuf::from(*p)).find(|p| p.is_file()) {
        return Some(found);
    }

    let exe = if cfg!(windows) { "wkhtmltopdf.exe" } else { "wkhtmltopdf" };
    env::var_os("PATH").and_then(|paths| {
        env::split_paths(&paths).map(|dir| dir.join(exe)).find(|p| p.is_file())
    })
}

/// Escribe `html` como PDF A4 con márgenes de 15 mm.
pub fn write_pdf(html: &str, output: &Path) -> Result<(), ExportError> {
    let converter = find_wkhtmltopdf().ok_or(ExportError::PdfConverterMissing)?;
    write_pdf_with(&converter, html, output)
}

/// Igual que `write_pdf` pero con un conversor explícito.
pub fn write_pdf_with(converter: &Path, html: &str, output: &Path) -> Result<(), ExportError> {
    debug!(converter = %converter.display(), "usando wkhtmltopdf");

    let mut child = Command::new(converter)
        .args([
            "--quiet",
            "--encoding",
            "UTF-8",
            "--page-size",
            "A4",
            "--margin-top",
            "15mm",
            "--margin-right",
            "15mm",
            "--margin-bottom",
            "15mm",
            "--margin-left",
            "15mm",
            "--enable-local-file-access",
            "-",
        ])
        .arg(output)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()?;

    // stdin se escribe en otro hilo mientras wait_with_output drena stderr
    let stdin = child.stdin.take();
    let input = html.as_bytes().to_vec();
    let writer = thread::spawn(move || -> io::Result<()> {
        if let Some(mut stdin) = stdin {
            stdin.write_all(&input)?;
        }
        Ok(())
    });

    let result = child.wait_with_output()?;
    if !result.status.success() {
        return Err(ExportError::PdfConverter(String::from_utf8_lossy(&result.stderr).trim().to_string()));
    }
    match writer.join() {
        Ok(written) => written?,
        Err(_) => return Err(ExportError::PdfConverter("el hilo de escritura de stdin falló".into())),
    }
    info!(output = %output.display(), "PDF generado");
    Ok(())
}
