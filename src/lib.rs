//! # Simple Web Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo que sirve archivos estáticos desde un directorio
//! raíz. Solo acepta GET, atiende una conexión a la vez con I/O bloqueante y
//! arma los headers a mano.
//!
//! ## Arquitectura
//!
//! - `http`: Request line, headers de respuesta y códigos de estado
//! - `router`: Mapeo de paths a archivos bajo la raíz
//! - `server`: Listener TCP, loop de aceptación y manejo de cada conexión
//! - `config`: Host, puerto y directorio raíz (CLI / entorno)
//! - `logger`: Inicialización del logger de terminal
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use simple_web_server::config::Config;
//! use simple_web_server::server::Server;
//!
//! let config = Config { port: 8080, ..Config::default() };
//! let server = Server::bind(config).expect("Error al iniciar servidor");
//! server.run().expect("Error en el loop del servidor");
//! ```

pub mod config;
pub mod http;
pub mod logger;
pub mod router;
pub mod server;
