//! # Códigos de Estado HTTP
//!
//! El servidor solo produce tres códigos: 200, 400 y 404. Cualquier otro
//! entero se conserva tal cual, pero su reason phrase es el literal
//! `"Unknown Status"` (no es una frase válida del protocolo, se mantiene así).

/// Texto usado para cualquier código fuera de la tabla
pub const UNKNOWN_REASON: &str = "Unknown Status";

/// Código de estado de una respuesta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - Archivo encontrado y enviado
    Ok,

    /// 400 Bad Request - Request line malformada o método distinto de GET
    BadRequest,

    /// 404 Not Found - El path no corresponde a un archivo regular
    NotFound,

    /// Cualquier otro código numérico
    Other(u16),
}

impl StatusCode {
    /// Construye el código a partir de su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use simple_web_server::http::StatusCode;
    /// assert_eq!(StatusCode::from_u16(404), StatusCode::NotFound);
    /// assert_eq!(StatusCode::from_u16(500), StatusCode::Other(500));
    /// ```
    pub fn from_u16(code: u16) -> Self {
        match code {
            200 => StatusCode::Ok,
            400 => StatusCode::BadRequest,
            404 => StatusCode::NotFound,
            other => StatusCode::Other(other),
        }
    }

    /// Convierte el código a su valor numérico
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::Other(code) => *code,
        }
    }

    /// Retorna el reason phrase asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use simple_web_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::Other(500).reason_phrase(), "Unknown Status");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::Other(_) => UNKNOWN_REASON,
        }
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        StatusCode::from_u16(code)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
