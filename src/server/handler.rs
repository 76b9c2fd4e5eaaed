//! # Manejo de una Conexión
//! src/server/handler.rs
//!
//! Un ciclo completo leer → parsear → responder sobre una conexión ya
//! aceptada. Cerrar la conexión le toca al caller.
//!
//! 1. Una sola lectura de hasta 1024 bytes. Si no llega nada, no se responde.
//! 2. Request line inválida o método distinto de GET → 400 sin body.
//! 3. `/` → `/index.html`, se busca el archivo bajo la raíz.
//! 4. Archivo regular → 200 con el contenido exacto; si no → 404.
//!
//! Una request line más larga que el buffer queda truncada y normalmente
//! termina en 400: no hay loop de lectura.

use crate::http::{RequestLine, Response, StatusCode};
use crate::router::{Resolved, Router};
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Read, Write};

/// Tamaño de la única lectura que se hace del socket
pub const READ_CHUNK_SIZE: usize = 1024;

/// Body fijo de las respuestas 404
pub const NOT_FOUND_BODY: &[u8] = b"<h1>404 Not Found</h1>";

/// Content type de todas las respuestas, sin importar el tipo de archivo
pub const CONTENT_TYPE: &str = "text/html";

/// Construye la respuesta para los bytes recibidos
///
/// Solo falla si un archivo que existe no se puede leer.
pub fn build_response(buffer: &[u8], router: &Router) -> io::Result<Response> {
    let request = match RequestLine::parse(buffer) {
        Ok(request) => request,
        Err(e) => {
            warn!("Request inválido: {}", e);
            return Ok(Response::new(StatusCode::BadRequest).with_content_type(CONTENT_TYPE));
        }
    };

    debug!("{} {} {}", request.method(), request.path(), request.version());

    let response = match router.resolve(request.path()) {
        Resolved::File(path) => {
            debug!("Sirviendo {}", path.display());
            let content = fs::read(&path)?;
            Response::new(StatusCode::Ok)
                .with_content_type(CONTENT_TYPE)
                .with_body(content)
        }
        Resolved::NotFound(path) => {
            debug!("No existe {}", path.display());
            Response::new(StatusCode::NotFound)
                .with_content_type(CONTENT_TYPE)
                .with_body(NOT_FOUND_BODY.to_vec())
        }
    };

    info!(
        "{} {} -> {} ({} bytes)",
        request.method(),
        request.path(),
        response.status(),
        response.body().len()
    );

    Ok(response)
}

/// Atiende una conexión: lee una vez, responde una vez
///
/// Retorna el status enviado, o `None` si el peer no mandó nada.
pub fn handle_request<S: Read + Write>(stream: &mut S, router: &Router) -> io::Result<Option<StatusCode>> {
    let mut buffer = [0u8; READ_CHUNK_SIZE];
    let bytes_read = stream.read(&mut buffer)?;

    if bytes_read == 0 {
        debug!("Conexión cerrada sin datos");
        return Ok(None);
    }

    let response = build_response(&buffer[..bytes_read], router)?;

    stream.write_all(&response.to_bytes())?;
    stream.flush()?;

    Ok(Some(response.status()))
}
