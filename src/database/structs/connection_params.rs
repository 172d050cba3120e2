use serde::Serialize;
use crate::database::structs::mysql_params::MySqlParams;
use crate::database::structs::pgsql_params::PgSqlParams;
use crate::database::structs::sqlite_params::SqliteParams;
use crate::database::structs::sqlsrv_params::SqlSrvParams;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ConnectionParams {
    Sqlite(SqliteParams),
    MySql(MySqlParams),
    PgSql(PgSqlParams),
    SqlSrv(SqlSrvParams),
}
