//! Errores de arranque del servidor.

use std::io;

/// Fallos al construir el servidor (antes de aceptar conexiones)
#[derive(Debug)]
pub enum ServerError {
    /// `host:port` no resolvió a una dirección válida
    InvalidAddress(String),

    /// No se pudo crear el directorio raíz
    RootDir(io::Error),

    /// No se pudo crear, configurar o enlazar el socket
    Bind(io::Error),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::InvalidAddress(msg) => write!(f, "{}", msg),
            ServerError::RootDir(e) => write!(f, "Cannot create root directory: {}", e),
            ServerError::Bind(e) => write!(f, "Cannot bind listener: {}", e),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::InvalidAddress(_) => None,
            ServerError::RootDir(e) | ServerError::Bind(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_and_source() {
        let err = ServerError::Bind(io::Error::new(io::ErrorKind::AddrInUse, "busy"));
        assert_eq!(err.to_string(), "Cannot bind listener: busy");
        assert!(err.source().is_some());

        let err = ServerError::InvalidAddress("Invalid address x:1".to_string());
        assert!(err.source().is_none());
    }
}
