use crate::common::enums::bootstrap_error::BootstrapError;
use crate::database::structs::connection_params::ConnectionParams;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::orm::structs::entity_manager::EntityManager;
use crate::orm::structs::metadata_config::MetadataConfig;

impl EntityManager {
    #[tracing::instrument(level = "debug")]
    pub async fn create(params: ConnectionParams, metadata: MetadataConfig) -> Result<EntityManager, BootstrapError> {
        let connector = DatabaseConnector::new(&params).await?;
        Ok(EntityManager { params, metadata, connector })
    }

    pub fn params(&self) -> &ConnectionParams {
        &self.params
    }

    pub fn metadata(&self) -> &MetadataConfig {
        &self.metadata
    }

    pub fn connector(&self) -> &DatabaseConnector {
        &self.connector
    }
}
