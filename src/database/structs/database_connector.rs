use sqlx::{
    MySql,
    Pool,
    Postgres,
    Sqlite
};
use crate::database::enums::driver_kind::DriverKind;

#[derive(Debug, Clone)]
pub struct DatabaseConnector {
    pub(crate) sqlite: Option<Pool<Sqlite>>,
    pub(crate) mysql: Option<Pool<MySql>>,
    pub(crate) pgsql: Option<Pool<Postgres>>,
    pub(crate) engine: Option<DriverKind>,
}
