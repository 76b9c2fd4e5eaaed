//! # Parsing de la Request Line
//! src/http/request.rs
//!
//! Del request solo se usa la primera línea. Headers y body se ignoran.
//!
//! ## Formato
//!
//! ```text
//! GET /index.html HTTP/1.1\r\n
//! Host: localhost\r\n          <- ignorado
//! \r\n
//! ```
//!
//! La línea se separa por espacios simples (no por whitespace en general):
//! `"GET  / HTTP/1.1"` tiene cuatro tokens y es inválida.

/// Único método aceptado
pub const SUPPORTED_METHOD: &str = "GET";

/// Request line parseada: `METHOD SP PATH SP VERSION`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// Método HTTP (siempre "GET" si el parseo tuvo éxito)
    method: String,

    /// Path tal cual llegó, sin decodificar ni separar query string
    path: String,

    /// Versión HTTP (se conserva pero no se valida)
    version: String,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Buffer vacío
    EmptyRequest,

    /// La primera línea no es UTF-8 válido o no tiene exactamente 3 tokens
    InvalidRequestLine,

    /// Método distinto de GET
    UnsupportedMethod(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
            ParseError::UnsupportedMethod(m) => write!(f, "Unsupported HTTP method: {}", m),
        }
    }
}

impl std::error::Error for ParseError {}

impl RequestLine {
    /// Parsea la request line desde los bytes leídos del socket
    ///
    /// La primera línea es todo lo que hay antes del primer `\r\n` (o el
    /// buffer completo si no hay ninguno).
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use simple_web_server::http::RequestLine;
    ///
    /// let line = RequestLine::parse(b"GET /index.html HTTP/1.1\r\nHost: x\r\n\r\n").unwrap();
    /// assert_eq!(line.path(), "/index.html");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        if buffer.is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        let first_line = match buffer.windows(2).position(|w| w == b"\r\n") {
            Some(end) => &buffer[..end],
            None => buffer,
        };

        let line = std::str::from_utf8(first_line).map_err(|_| ParseError::InvalidRequestLine)?;

        Self::parse_line(line)
    }

    /// Parsea una request line ya decodificada
    pub fn parse_line(line: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = line.split(' ').collect();

        // Debe tener exactamente 3 partes: METHOD PATH VERSION
        let &[method, path, version] = parts.as_slice() else {
            return Err(ParseError::InvalidRequestLine);
        };

        if method != SUPPORTED_METHOD {
            return Err(ParseError::UnsupportedMethod(method.to_string()));
        }

        Ok(RequestLine {
            method: method.to_string(),
            path: path.to_string(),
            version: version.to_string(),
        })
    }

    /// Obtiene el método HTTP
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el path solicitado
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }
}
