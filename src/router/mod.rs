//! # Resolución de Paths a Archivos
//! src/router/mod.rs
//!
//! Mapea el path de la request line a un archivo bajo el directorio raíz.
//!
//! ```text
//! "/"           -> <root>/index.html
//! "/a/b.html"   -> <root>/a/b.html
//! ```
//!
//! Por defecto no se normalizan segmentos `..` ni se verifica que el archivo
//! quede dentro de la raíz: `GET /../secreto` puede salir del directorio.
//! Con `confine` activado el candidato se canonicaliza y todo lo que quede
//! fuera de la raíz se trata como inexistente.

use std::path::{Path, PathBuf};

/// Archivo servido para el path `/`
pub const INDEX_FILE: &str = "index.html";

/// Resultado de resolver un path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Archivo regular que se puede servir
    File(PathBuf),

    /// No existe, no es un archivo regular, o quedó fuera de la raíz
    NotFound(PathBuf),
}

/// Resolver de paths sobre un directorio raíz de solo lectura
#[derive(Debug, Clone)]
pub struct Router {
    root: PathBuf,
    confine: bool,
}

impl Router {
    /// Crea un router sobre `root`
    ///
    /// # Ejemplo
    /// ```
    /// use simple_web_server::router::Router;
    /// use std::path::Path;
    ///
    /// let router = Router::new("www", false);
    /// assert_eq!(router.candidate_path("/"), Path::new("www").join("index.html"));
    /// ```
    pub fn new(root: impl Into<PathBuf>, confine: bool) -> Self {
        Self {
            root: root.into(),
            confine,
        }
    }

    /// Directorio raíz
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Arma el path candidato sin tocar el filesystem
    pub fn candidate_path(&self, request_path: &str) -> PathBuf {
        let path = if request_path == "/" {
            INDEX_FILE
        } else {
            // Quitar los '/' iniciales evita que `join` reemplace la raíz
            request_path.trim_start_matches('/')
        };

        self.root.join(path)
    }

    /// Resuelve el path del request a un archivo regular
    pub fn resolve(&self, request_path: &str) -> Resolved {
        let candidate = self.candidate_path(request_path);

        if self.confine && !self.is_inside_root(&candidate) {
            return Resolved::NotFound(candidate);
        }

        if candidate.is_file() {
            Resolved::File(candidate)
        } else {
            Resolved::NotFound(candidate)
        }
    }

    /// Verifica que el candidato, ya canonicalizado, esté bajo la raíz
    fn is_inside_root(&self, candidate: &Path) -> bool {
        let root = match self.root.canonicalize() {
            Ok(root) => root,
            Err(_) => return false,
        };

        match candidate.canonicalize() {
            Ok(path) => path.starts_with(&root),
            Err(_) => false,
        }
    }
}
