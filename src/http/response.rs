//! # Construcción de Respuestas HTTP
//!
//! Genera el bloque de headers que el servidor antepone a cada body y un
//! pequeño builder (`Response`) que junta headers + body en bytes.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Date: Sun, 06 Nov 1994 08:49:37 GMT\r\n
//! Content-Type: text/html; charset=utf-8\r\n
//! Content-Length: 2\r\n
//! Server: SimpleWebServer\r\n
//! Connection: close\r\n
//! \r\n
//! Hi
//! ```
//!
//! Los headers siempre salen en ese orden. El `content_type` se copia tal
//! cual al header, sin escapar ni validar.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use simple_web_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok).with_body(b"Hi".to_vec());
//! let bytes = response.to_bytes();
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! assert!(bytes.ends_with(b"\r\n\r\nHi"));
//! ```

use super::StatusCode;
use chrono::{DateTime, Utc};

/// Content type usado cuando el caller no indica otro
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// Identidad fija del servidor en el header `Server`
pub const SERVER_NAME: &str = "SimpleWebServer";

/// Formato tipo RFC 1123 para el header `Date`
const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Genera el bloque de headers para una respuesta, usando la hora actual (UTC)
///
/// El bloque termina con una línea vacía, listo para concatenar el body.
///
/// # Ejemplo
/// ```
/// use simple_web_server::http::response::generate_headers;
///
/// let headers = generate_headers(404, "text/html", 23);
/// assert!(headers.starts_with("HTTP/1.1 404 Not Found\r\n"));
/// assert!(headers.ends_with("Connection: close\r\n\r\n"));
/// ```
pub fn generate_headers(status_code: u16, content_type: &str, content_length: usize) -> String {
    generate_headers_at(status_code, content_type, content_length, Utc::now())
}

/// Igual que [`generate_headers`] pero con un instante explícito para `Date`
pub fn generate_headers_at(
    status_code: u16,
    content_type: &str,
    content_length: usize,
    now: DateTime<Utc>,
) -> String {
    let status = StatusCode::from_u16(status_code);

    let lines = [
        format!("HTTP/1.1 {}", status),
        format!("Date: {}", now.format(DATE_FORMAT)),
        format!("Content-Type: {}; charset=utf-8", content_type),
        format!("Content-Length: {}", content_length),
        format!("Server: {}", SERVER_NAME),
        "Connection: close".to_string(),
    ];

    let mut block = lines.join("\r\n");
    // Fin del último header + línea vacía separadora
    block.push_str("\r\n\r\n");
    block
}

/// Respuesta HTTP completa: status, content type y body
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    content_type: String,
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta sin body y con content type `text/html`
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            body: Vec::new(),
        }
    }

    /// Cambia el content type (se le agrega `; charset=utf-8` al serializar)
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    /// Establece el body desde bytes
    ///
    /// `Content-Length` se calcula a partir de este body al serializar.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Bloque de headers para esta respuesta
    pub fn head(&self) -> String {
        generate_headers(self.status.as_u16(), &self.content_type, self.body.len())
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = self.head();
        let mut result = Vec::with_capacity(head.len() + self.body.len());
        result.extend_from_slice(head.as_bytes());
        result.extend_from_slice(&self.body);
        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene el content type (sin el sufijo de charset)
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
