//! # Logging
//! src/logger.rs
//!
//! Instala un `TermLogger` de simplelog sobre stderr. El resto del crate solo
//! usa las macros de `log`, así que sin logger instalado no se imprime nada
//! (es lo que pasa en los tests).

use crate::config::Config;
use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

fn prepare_logger_config() -> simplelog::Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .build()
}

/// Inicializa el logger global con el nivel de la configuración
///
/// Falla si ya había un logger instalado. Un nivel inválido cae a `info`.
pub fn init_logger(config: &Config) -> Result<(), SetLoggerError> {
    let level = config.level_filter().unwrap_or(LevelFilter::Info);

    TermLogger::init(
        level,
        prepare_logger_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}
