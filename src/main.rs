// --- classgrid: servidor de extracción de horarios ---

use classgrid::config::init_tracing;
use classgrid::{run_server, AppConfig};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error de configuración: {}", e);
            std::process::exit(2);
        }
    };
    init_tracing(&config.log_level);
    println!("=== classgrid (API) ===");
    println!("Iniciando servidor en http://{}", config.bind);
    run_server(config).await
}
