//! Syslog routing example
//!
//! Configures the process-wide logger from `MODLOG_*` environment variables,
//! registers a syslog identity and shows which sink each call reaches.
//!
//! Run with:
//!   MODLOG_ENABLE=pmon,sock_lib MODLOG_OUTPUT=syslog MODLOG_IDENT=pmond \
//!       cargo run --example syslog_routing

use rust_module_logger::prelude::*;
use rust_module_logger::{global, info, warn};

fn main() -> Result<()> {
    println!("=== Rust Module Logger - Syslog Routing Example ===\n");

    let config = LoggerConfig::from_env()?;
    println!("1. Configuration from environment:");
    println!("{}", config.to_json()?);

    global::init(Logger::from_config(&config)?)?;
    let logger = global::logger();

    if config.identity.is_none() {
        global::init_log_identity("syslog_routing")?;
    }

    println!("\n2. Routing with output mode '{}':", logger.output_mode());
    info!(logger, ModuleId::PMON, " monitor started, pid {}", std::process::id());
    warn!(logger, ModuleId::SOCK_LIB, " listen backlog {} exceeds limit", 1024);

    println!("\n3. Switching to console output:");
    logger.set_output_mode(OutputMode::CONSOLE);
    info!(logger, ModuleId::PMON, " now on the console");
    println!();

    logger.flush()?;
    println!("\nCheck the system log (journalctl -t <identity>) for the syslog lines.");
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
