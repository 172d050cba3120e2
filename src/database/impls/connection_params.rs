use serde_json::{
    Map,
    Value
};
use crate::common::enums::setup_error::SetupError;
use crate::config::structs::connection_config::ConnectionConfig;
use crate::database::enums::driver_kind::DriverKind;
use crate::database::structs::connection_params::ConnectionParams;
use crate::database::structs::mysql_params::MySqlParams;
use crate::database::structs::pgsql_params::PgSqlParams;
use crate::database::structs::sqlite_params::SqliteParams;
use crate::database::structs::sqlsrv_params::SqlSrvParams;

const DEFAULT_CHARSET: &str = "utf8";

impl ConnectionParams {
    /// Translates a generic connection descriptor into the parameter
    /// template of its driver. The only failure is an unrecognized
    /// `driver` value; field values are copied verbatim or defaulted,
    /// never validated or coerced.
    pub fn from_config(config: &ConnectionConfig) -> Result<ConnectionParams, SetupError> {
        let kind = config.driver.parse::<DriverKind>()?;
        Ok(match kind {
            DriverKind::sqlite => ConnectionParams::Sqlite(SqliteParams {
                driver: String::from("pdo_sql"),
                user: config.username.clone(),
                password: config.password.clone(),
                path: config.database.clone(),
                memory: false,
            }),
            DriverKind::mysql => ConnectionParams::MySql(MySqlParams {
                driver: String::from("pdo_mysql"),
                user: config.username.clone(),
                password: config.password.clone(),
                host: config.host.clone(),
                port: config.port,
                dbname: config.database.clone(),
                unix_socket: config.unix_socket.clone(),
                charset: config.charset.clone().unwrap_or_else(|| String::from(DEFAULT_CHARSET)),
            }),
            DriverKind::pgsql => ConnectionParams::PgSql(PgSqlParams {
                driver: String::from("pdo_pgsql"),
                user: config.username.clone(),
                password: config.password.clone(),
                host: config.host.clone(),
                port: config.port,
                dbname: config.database.clone(),
                charset: config.charset.clone().unwrap_or_else(|| String::from(DEFAULT_CHARSET)),
                sslmode: config.sslmode.clone(),
            }),
            DriverKind::sqlsrv => ConnectionParams::SqlSrv(SqlSrvParams {
                driver: String::from("pdo_sqlsrv"),
                user: config.username.clone(),
                password: config.password.clone(),
                host: config.host.clone(),
                port: config.port,
                dbname: config.database.clone(),
            }),
        })
    }

    pub fn kind(&self) -> DriverKind {
        match self {
            ConnectionParams::Sqlite(_) => DriverKind::sqlite,
            ConnectionParams::MySql(_) => DriverKind::mysql,
            ConnectionParams::PgSql(_) => DriverKind::pgsql,
            ConnectionParams::SqlSrv(_) => DriverKind::sqlsrv,
        }
    }

    pub fn driver_name(&self) -> &str {
        match self {
            ConnectionParams::Sqlite(params) => params.driver.as_str(),
            ConnectionParams::MySql(params) => params.driver.as_str(),
            ConnectionParams::PgSql(params) => params.driver.as_str(),
            ConnectionParams::SqlSrv(params) => params.driver.as_str(),
        }
    }

    /// Renders the parameters as an ordered map with exactly the template's
    /// keys, missing inputs as explicit nulls. This is the hand-off format
    /// for a DBAL-style connection factory.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        match self {
            ConnectionParams::Sqlite(params) => {
                map.insert(String::from("driver"), Value::String(params.driver.clone()));
                map.insert(String::from("user"), opt_string(&params.user));
                map.insert(String::from("password"), opt_string(&params.password));
                map.insert(String::from("path"), opt_string(&params.path));
                map.insert(String::from("memory"), Value::Bool(params.memory));
            }
            ConnectionParams::MySql(params) => {
                map.insert(String::from("driver"), Value::String(params.driver.clone()));
                map.insert(String::from("user"), opt_string(&params.user));
                map.insert(String::from("password"), opt_string(&params.password));
                map.insert(String::from("host"), opt_string(&params.host));
                map.insert(String::from("port"), opt_port(params.port));
                map.insert(String::from("dbname"), opt_string(&params.dbname));
                map.insert(String::from("unix_socket"), opt_string(&params.unix_socket));
                map.insert(String::from("charset"), Value::String(params.charset.clone()));
            }
            ConnectionParams::PgSql(params) => {
                map.insert(String::from("driver"), Value::String(params.driver.clone()));
                map.insert(String::from("user"), opt_string(&params.user));
                map.insert(String::from("password"), opt_string(&params.password));
                map.insert(String::from("host"), opt_string(&params.host));
                map.insert(String::from("port"), opt_port(params.port));
                map.insert(String::from("dbname"), opt_string(&params.dbname));
                map.insert(String::from("charset"), Value::String(params.charset.clone()));
                map.insert(String::from("sslmode"), opt_string(&params.sslmode));
            }
            ConnectionParams::SqlSrv(params) => {
                map.insert(String::from("driver"), Value::String(params.driver.clone()));
                map.insert(String::from("user"), opt_string(&params.user));
                map.insert(String::from("password"), opt_string(&params.password));
                map.insert(String::from("host"), opt_string(&params.host));
                map.insert(String::from("port"), opt_port(params.port));
                map.insert(String::from("dbname"), opt_string(&params.dbname));
            }
        }
        map
    }
}

fn opt_string(value: &Option<String>) -> Value {
    match value {
        None => Value::Null,
        Some(value) => Value::String(value.clone()),
    }
}

fn opt_port(value: Option<u16>) -> Value {
    match value {
        None => Value::Null,
        Some(value) => Value::from(value),
    }
}
