//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto (SO_REUSEADDR, backlog 5)
//! 2. Acepta conexiones entrantes, una a la vez
//! 3. Lee la request line y busca el archivo pedido
//! 4. Envía la respuesta y cierra la conexión

pub mod error;
pub mod handler;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use error::ServerError;
pub use handler::handle_request;
pub use tcp::{Server, LISTEN_BACKLOG};
