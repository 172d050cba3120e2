use crate::database::structs::connection_params::ConnectionParams;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::orm::structs::metadata_config::MetadataConfig;

/// Central ORM handle: the default connection's translated parameters,
/// the metadata configuration, and the opened connection pool.
/// Constructed once during boot and shared for the process lifetime.
#[derive(Debug, Clone)]
pub struct EntityManager {
    pub(crate) params: ConnectionParams,
    pub(crate) metadata: MetadataConfig,
    pub(crate) connector: DatabaseConnector,
}
