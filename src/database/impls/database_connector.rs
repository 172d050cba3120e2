use std::time::Duration;
use log::{
    error,
    info
};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Error, MySql, Pool, Postgres, Sqlite};
use std::str::FromStr;
use crate::common::enums::bootstrap_error::BootstrapError;
use crate::database::enums::driver_kind::DriverKind;
use crate::database::structs::connection_params::ConnectionParams;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::mysql_params::MySqlParams;
use crate::database::structs::pgsql_params::PgSqlParams;
use crate::database::structs::sqlite_params::SqliteParams;

impl DatabaseConnector {
    #[tracing::instrument(level = "debug")]
    pub async fn create_sqlite(params: &SqliteParams) -> Result<Pool<Sqlite>, Error> {
        let path = match &params.path {
            None => { return Err(Error::Configuration("sqlite connection has no path".into())); }
            Some(path) => path,
        };
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        SqlitePoolOptions::new().connect_with(options).await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn create_mysql(params: &MySqlParams) -> Result<Pool<MySql>, Error> {
        let mut options = MySqlConnectOptions::new().charset(params.charset.as_str());
        if let Some(host) = &params.host { options = options.host(host); }
        if let Some(port) = params.port { options = options.port(port); }
        if let Some(user) = &params.user { options = options.username(user); }
        if let Some(password) = &params.password { options = options.password(password); }
        if let Some(dbname) = &params.dbname { options = options.database(dbname); }
        if let Some(socket) = &params.unix_socket { options = options.socket(socket); }
        let options = options
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        MySqlPoolOptions::new().connect_with(options).await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn create_pgsql(params: &PgSqlParams) -> Result<Pool<Postgres>, Error> {
        let mut options = PgConnectOptions::new();
        if let Some(host) = &params.host { options = options.host(host); }
        if let Some(port) = params.port { options = options.port(port); }
        if let Some(user) = &params.user { options = options.username(user); }
        if let Some(password) = &params.password { options = options.password(password); }
        if let Some(dbname) = &params.dbname { options = options.database(dbname); }
        if let Some(sslmode) = &params.sslmode { options = options.ssl_mode(PgSslMode::from_str(sslmode)?); }
        let options = options
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        PgPoolOptions::new().connect_with(options).await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn new(params: &ConnectionParams) -> Result<DatabaseConnector, BootstrapError> {
        let mut structure = DatabaseConnector {
            sqlite: None,
            mysql: None,
            pgsql: None,
            engine: None,
        };
        match params {
            ConnectionParams::Sqlite(sqlite_params) => {
                match Self::create_sqlite(sqlite_params).await {
                    Ok(pool) => {
                        structure.sqlite = Some(pool);
                        structure.engine = Some(DriverKind::sqlite);
                    }
                    Err(error) => {
                        error!("[SQLite] Unable to open connection pool");
                        return Err(BootstrapError::Database(error));
                    }
                }
            }
            ConnectionParams::MySql(mysql_params) => {
                match Self::create_mysql(mysql_params).await {
                    Ok(pool) => {
                        structure.mysql = Some(pool);
                        structure.engine = Some(DriverKind::mysql);
                    }
                    Err(error) => {
                        error!("[MySQL] Unable to open connection pool");
                        return Err(BootstrapError::Database(error));
                    }
                }
            }
            ConnectionParams::PgSql(pgsql_params) => {
                match Self::create_pgsql(pgsql_params).await {
                    Ok(pool) => {
                        structure.pgsql = Some(pool);
                        structure.engine = Some(DriverKind::pgsql);
                    }
                    Err(error) => {
                        error!("[PgSQL] Unable to open connection pool");
                        return Err(BootstrapError::Database(error));
                    }
                }
            }
            ConnectionParams::SqlSrv(_) => {
                return Err(BootstrapError::UnsupportedEngine(String::from("sqlsrv")));
            }
        }
        info!("[BOOT] Connection pool ready for engine [{}]", params.kind());
        Ok(structure)
    }

    pub fn engine(&self) -> Option<DriverKind> {
        self.engine
    }

    pub fn sqlite_pool(&self) -> Option<&Pool<Sqlite>> {
        self.sqlite.as_ref()
    }

    pub fn mysql_pool(&self) -> Option<&Pool<MySql>> {
        self.mysql.as_ref()
    }

    pub fn pgsql_pool(&self) -> Option<&Pool<Postgres>> {
        self.pgsql.as_ref()
    }
}
