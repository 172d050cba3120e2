use serde::{
    Deserialize,
    Serialize
};

/// A named database connection as the host application declares it.
/// Only `driver` is required; everything else is optional and copied
/// verbatim into the translated parameter template.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub driver: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default)]
    pub unix_socket: Option<String>,
    #[serde(default)]
    pub sslmode: Option<String>,
}
