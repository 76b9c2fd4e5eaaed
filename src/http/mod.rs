//! # Módulo HTTP
//!
//! Implementa a mano la parte mínima de HTTP/1.1 que usa el servidor:
//!
//! - Parsing de la request line (`METHOD SP PATH SP VERSION`)
//! - Generación del bloque de headers de respuesta
//! - Códigos de estado 200 / 400 / 404
//!
//! No hay keep-alive, chunked encoding ni detección de MIME: cada respuesta
//! lleva `Connection: close` y `Content-Length` exacto.

pub mod request;   // Parsing de la request line
pub mod response;  // Headers y respuestas
pub mod status;    // Códigos de estado

pub use request::{ParseError, RequestLine};
pub use response::{generate_headers, Response};
pub use status::StatusCode;
