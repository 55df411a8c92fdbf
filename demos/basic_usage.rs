//! Basic logger usage example
//!
//! Demonstrates module filtering, the leveled macros and runtime
//! reconfiguration of the enable bitmap.
//!
//! Run with: cargo run --example basic_usage

use rust_module_logger::prelude::*;
use rust_module_logger::{error, info, invariant, syserr, warn};

const POOL_ID: ModuleId = ModuleId::MEM_POOL;
const QUEUE_ID: ModuleId = ModuleId::MSG_POOL;
const NET_ID: ModuleId = ModuleId::SOCK_LIB;

fn main() -> Result<()> {
    println!("=== Rust Module Logger - Basic Usage Example ===\n");

    // Only the pool and queue modules are enabled, console output
    let logger = Logger::builder()
        .enable(POOL_ID | QUEUE_ID)
        .output(OutputMode::CONSOLE)
        .colors(true)
        .build()?;

    println!("1. Logging at different severities:");
    info!(logger, POOL_ID, " pool created with {} blocks", 64);
    warn!(logger, POOL_ID, " pool {} below low water mark", 3);
    error!(logger, QUEUE_ID, " queue {} overflow, dropping message", 1);

    println!("\n\n2. Calls from a disabled module are dropped:");
    warn!(logger, NET_ID, " backlog full (hidden)");

    println!("\n3. Enabling the socket module at runtime:");
    logger.enable_modules(NET_ID);
    if std::net::TcpStream::connect("127.0.0.1:1").is_err() {
        syserr!(logger, NET_ID, " connect to 127.0.0.1:1: ");
    }

    println!("\n\n4. Invariants that hold are silent:");
    let free_blocks = 12;
    invariant!(logger, POOL_ID, free_blocks <= 64, "free count {} out of range", free_blocks);

    let metrics = logger.metrics();
    println!(
        "\n5. Metrics: {} emitted, {} filtered ({:.1}% filtered)",
        metrics.emitted_count(),
        metrics.filtered_count(),
        metrics.filter_rate()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
