//! Guardado de workbooks subidos antes de extraerlos.

use std::io;
use tokio::io::AsyncWriteExt;
use std::path::{Path, PathBuf};

/// Extensiones aceptadas para subir.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["xls", "xlsx"];

/// Nombre de archivo seguro: sin directorios, sin "..", no vacío.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let base = Path::new(name.trim()).file_name()?.to_str()?.to_string();
    if base.is_empty() || base.contains("..") || base.starts_with('.') {
        return None;
    }
    Some(base)
}

pub fn has_accepted_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| ACCEPTED_EXTENSIONS.iter().any(|a| e.eq_ignore_ascii_case(a)))
        .unwrap_or(false)
}

/// Guarda `bytes` como `dir/name` y devuelve la ruta. Crea `dir` si no existe.
pub async fn save_uploaded_file(name: &str, bytes: &[u8], dir: &Path) -> io::Result<PathBuf> {
    let filename = sanitize_filename(name)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, format!("nombre de archivo inválido: '{}'", name)))?;
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(filename);
    let mut file = tokio::fs::File::create(&path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_directories() {
        assert_eq!(sanitize_filename("a/b/tt.xls").as_deref(), Some("tt.xls"));
        assert_eq!(sanitize_filename("..").as_deref(), None);
        assert_eq!(sanitize_filename("../..").as_deref(), None);
        assert_eq!(sanitize_filename(".hidden.xls").as_deref(), None);
        assert_eq!(sanitize_filename("").as_deref(), None);
    }

    #[test]
    fn extensions() {
        assert!(has_accepted_extension("TT.XLS"));
        assert!(has_accepted_extension("tt.xlsx"));
        assert!(!has_accepted_extension("tt.csv"));
        assert!(!has_accepted_extension("tt"));
    }
}
