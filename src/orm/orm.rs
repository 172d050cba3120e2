use std::collections::BTreeMap;
use std::sync::Arc;
use log::info;
use crate::common::enums::bootstrap_error::BootstrapError;
use crate::common::enums::setup_error::SetupError;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::connection_params::ConnectionParams;
use crate::orm::registry;
use crate::orm::structs::entity_manager::EntityManager;
use crate::orm::structs::metadata_config::MetadataConfig;

/// Translates every declared connection, fail-fast on the first
/// unrecognized driver.
pub fn convert_connections(config: &Configuration) -> Result<BTreeMap<String, ConnectionParams>, SetupError> {
    let mut connections = BTreeMap::new();
    for (name, connection) in &config.connections {
        connections.insert(name.clone(), ConnectionParams::from_config(connection)?);
    }
    Ok(connections)
}

/// Boot path: translate the connections, resolve the default one, select
/// the metadata strategy, construct the entity manager and publish it
/// into the registry slot. Runs once at startup; every failure is fatal.
#[tracing::instrument(level = "debug", skip(config))]
pub async fn register(config: Arc<Configuration>) -> Result<Arc<EntityManager>, BootstrapError> {
    let connections = convert_connections(&config)?;
    let params = match connections.get(&config.default) {
        None => { return Err(BootstrapError::UnknownConnection(config.default.clone())); }
        Some(params) => params.clone(),
    };
    let metadata = MetadataConfig::from_config(&config.orm)?;

    info!("[BOOT] Using connection [{}] with driver [{}]", config.default, params.driver_name());
    info!("[BOOT] Entity metadata via [{}] mapper over {} path(s)", metadata.mapper, metadata.paths.len());

    let manager = Arc::new(EntityManager::create(params, metadata).await?);
    registry::initialize(manager.clone())?;
    Ok(manager)
}
