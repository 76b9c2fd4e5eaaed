//! # Servidor TCP Secuencial
//! src/server/tcp.rs
//!
//! Acepta una conexión a la vez y la atiende completa antes de aceptar la
//! siguiente. No hay threads: el orden de las conexiones es el orden del
//! backlog.

use super::error::ServerError;
use super::handler::handle_request;
use crate::config::Config;
use crate::http::StatusCode;
use crate::router::Router;
use log::{error, info};
use socket2::{Domain, Protocol, Socket, Type};
use std::fs;
use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::Path;

/// Conexiones pendientes que admite el listener
pub const LISTEN_BACKLOG: i32 = 5;

/// Servidor HTTP/1.1 de archivos estáticos
pub struct Server {
    config: Config,
    router: Router,
    listener: TcpListener,
}

impl Server {
    /// Prepara el directorio raíz y enlaza el listener
    ///
    /// Con `port = 0` el sistema elige un puerto libre; usar
    /// [`Server::local_addr`] para conocerlo.
    pub fn bind(config: Config) -> Result<Self, ServerError> {
        let addr = config.socket_addr().map_err(ServerError::InvalidAddress)?;

        if !config.root_dir.exists() {
            fs::create_dir_all(&config.root_dir).map_err(ServerError::RootDir)?;
            info!("Directorio raíz creado: {}", config.root_dir.display());
        }

        let listener = create_reusable_listener(addr).map_err(ServerError::Bind)?;
        let router = Router::new(config.root_dir.clone(), config.confine_root);

        Ok(Self {
            config,
            router,
            listener,
        })
    }

    /// Dirección real en la que escucha el servidor
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Directorio raíz desde el que se sirven los archivos
    pub fn root(&self) -> &Path {
        self.router.root()
    }

    /// Configuración con la que se construyó el servidor
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loop principal: acepta y atiende conexiones, una por una, para siempre
    ///
    /// Un error en una conexión se registra y el loop sigue.
    pub fn run(&self) -> io::Result<()> {
        info!("Servidor escuchando en {}", self.local_addr()?);
        info!("Sirviendo archivos desde {}", self.root().display());
        if self.config().confine_root {
            info!("Paths fuera de la raíz se responden con 404");
        }

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    if let Err(e) = self.serve_connection(stream) {
                        error!("Error atendiendo conexión: {}", e);
                    }
                }
                Err(e) => {
                    error!("Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Acepta exactamente una conexión y la atiende
    pub fn serve_one(&self) -> io::Result<Option<StatusCode>> {
        let (stream, _) = self.listener.accept()?;
        self.serve_connection(stream)
    }

    /// Atiende una conexión aceptada; se cierra al salir (drop del stream)
    fn serve_connection(&self, mut stream: TcpStream) -> io::Result<Option<StatusCode>> {
        let peer_addr = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        info!("Cliente conectado: {}", peer_addr);

        handle_request(&mut stream, &self.router)
    }
}

/// Crea un listener bloqueante con SO_REUSEADDR y backlog de 5
fn create_reusable_listener(addr: SocketAddr) -> io::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;

    // Permite re-enlazar un puerto que quedó en TIME_WAIT
    socket.set_reuse_address(true)?;

    socket.bind(&addr.into())?;
    socket.listen(LISTEN_BACKLOG)?;

    Ok(socket.into())
}
