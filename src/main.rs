use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use serde_json::Value;
use tokio::runtime::Builder;
use doctrine_bridge::common::common::setup_logging;
use doctrine_bridge::config::structs::configuration::Configuration;
use doctrine_bridge::orm::orm::{convert_connections, register};
use doctrine_bridge::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            match convert_connections(&config) {
                Ok(connections) => {
                    for (name, params) in connections {
                        info!("[BOOT] Connection [{}] translated: {}", name, Value::Object(params.to_map()));
                    }
                }
                Err(e) => {
                    error!("[BOOT] {}", e);
                    exit(1);
                }
            }

            match register(config.clone()).await {
                Ok(manager) => {
                    info!("[BOOT] Entity manager registered for connection [{}] using [{}]", config.default, manager.params().driver_name());
                }
                Err(e) => {
                    error!("[BOOT] {}", e);
                    exit(1);
                }
            }
        });

    Ok(())
}
