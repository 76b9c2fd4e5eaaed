//! # Simple Web Server - Entry Point
//! src/main.rs
//!
//! Lee la configuración (CLI + entorno), instala el logger y corre el loop
//! secuencial del servidor.

use log::error;
use simple_web_server::config::Config;
use simple_web_server::logger;
use simple_web_server::server::Server;

fn main() {
    println!("=================================");
    println!("  SimpleWebServer (HTTP/1.1)");
    println!("=================================\n");

    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = logger::init_logger(&config) {
        eprintln!("No se pudo inicializar el logger: {}", e);
    }

    config.print_summary();

    let server = match Server::bind(config) {
        Ok(server) => server,
        Err(e) => {
            error!("💥 Error fatal: {}", e);
            std::process::exit(1);
        }
    };

    // Esto bloquea el thread para siempre
    if let Err(e) = server.run() {
        error!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
