//! # Configuración del Servidor
//! src/config.rs
//!
//! Host, puerto y directorio raíz, más el nivel de log. Todo se puede pasar
//! por CLI o por variables de entorno; no hay constantes globales.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./simple_web_server --host 0.0.0.0 --port 8080 --root-dir ./public
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! SWS_PORT=8080 SWS_ROOT_DIR=/srv/www ./simple_web_server
//! ```

use clap::Parser;
use log::LevelFilter;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::str::FromStr;

/// Configuración del servidor de archivos estáticos
#[derive(Debug, Clone, Parser)]
#[command(name = "simple_web_server")]
#[command(about = "Servidor HTTP/1.1 mínimo de archivos estáticos (solo GET)")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "SWS_HOST")]
    pub host: String,

    /// Puerto en el que escucha el servidor (0 = puerto efímero)
    #[arg(short, long, default_value = "80", env = "SWS_PORT")]
    pub port: u16,

    /// Directorio desde el que se sirven los archivos (se crea si no existe)
    #[arg(short, long = "root-dir", default_value = "www", env = "SWS_ROOT_DIR")]
    pub root_dir: PathBuf,

    /// Rechazar (404) paths que resuelvan fuera del directorio raíz
    #[arg(long = "confine-root", env = "SWS_CONFINE_ROOT")]
    pub confine_root: bool,

    /// Nivel de log: off, error, warn, info, debug, trace
    #[arg(long = "log-level", default_value = "info", env = "SWS_LOG_LEVEL")]
    pub log_level: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI y entorno
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use simple_web_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:80");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resuelve `host:port` a una dirección de socket
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let address = self.address();
        address
            .to_socket_addrs()
            .map_err(|e| format!("Invalid address {}: {}", address, e))?
            .next()
            .ok_or_else(|| format!("Invalid address {}: no addresses resolved", address))
    }

    /// Nivel de log ya parseado
    pub fn level_filter(&self) -> Result<LevelFilter, String> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| format!("Invalid log level: {}", self.log_level))
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        if self.root_dir.as_os_str().is_empty() {
            return Err("Root dir must not be empty".to_string());
        }

        self.level_filter()?;

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════╗");
        println!("║       SimpleWebServer Configuration          ║");
        println!("╚══════════════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Address:      {}", self.address());
        println!("   Backlog:      {}", crate::server::LISTEN_BACKLOG);
        println!();
        println!("📁 Files:");
        println!("   Root dir:     {}", self.root_dir.display());
        println!(
            "   Confinement:  {}",
            if self.confine_root { "enabled" } else { "disabled" }
        );
        println!();
        println!("📝 Log level:    {}", self.log_level);
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 80,
            root_dir: PathBuf::from("www"),
            confine_root: false,
            log_level: "info".to_string(),
        }
    }
}
