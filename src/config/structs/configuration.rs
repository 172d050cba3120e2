use std::collections::BTreeMap;
use serde::{
    Deserialize,
    Serialize
};
use crate::config::structs::connection_config::ConnectionConfig;
use crate::config::structs::orm_config::OrmConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub log_level: String,
    pub default: String,
    pub connections: BTreeMap<String, ConnectionConfig>,
    pub orm: OrmConfig,
}
