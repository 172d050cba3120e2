#[cfg(test)]
mod database_tests {
    use crate::config::structs::connection_config::ConnectionConfig;

    fn descriptor(driver: &str) -> ConnectionConfig {
        ConnectionConfig {
            driver: driver.to_string(),
            username: Some(String::from("admin")),
            password: Some(String::from("secret")),
            host: Some(String::from("db.local")),
            port: Some(5432),
            database: Some(String::from("app")),
            charset: Some(String::from("utf8mb4")),
            unix_socket: Some(String::from("/var/run/db.sock")),
            sslmode: Some(String::from("require")),
        }
    }

    mod driver_kind_tests {
        use std::str::FromStr;
        use crate::common::enums::setup_error::SetupError;
        use crate::database::enums::driver_kind::DriverKind;

        #[test]
        fn test_driver_kind_from_str() {
            assert_eq!(DriverKind::from_str("sqlite").unwrap(), DriverKind::sqlite);
            assert_eq!(DriverKind::from_str("mysql").unwrap(), DriverKind::mysql);
            assert_eq!(DriverKind::from_str("pgsql").unwrap(), DriverKind::pgsql);
            assert_eq!(DriverKind::from_str("sqlsrv").unwrap(), DriverKind::sqlsrv);
        }

        #[test]
        fn test_driver_kind_from_str_invalid() {
            let error = DriverKind::from_str("oracle").unwrap_err();
            assert_eq!(error, SetupError::InvalidDriver(String::from("oracle")));
            assert_eq!(format!("{}", error), "Invalid driver [oracle]");
        }

        #[test]
        fn test_driver_kind_display() {
            assert_eq!(format!("{}", DriverKind::sqlite), "sqlite");
            assert_eq!(format!("{}", DriverKind::sqlsrv), "sqlsrv");
        }

        #[test]
        fn test_driver_kind_serialization() {
            let serialized = serde_json::to_string(&DriverKind::pgsql).unwrap();
            assert_eq!(serialized, "\"pgsql\"");
            let deserialized: DriverKind = serde_json::from_str("\"mysql\"").unwrap();
            assert_eq!(deserialized, DriverKind::mysql);
        }
    }

    mod connection_params_tests {
        use proptest::prelude::*;
        use serde_json::{json, Value};
        use super::descriptor;
        use crate::common::enums::setup_error::SetupError;
        use crate::config::structs::connection_config::ConnectionConfig;
        use crate::database::enums::driver_kind::DriverKind;
        use crate::database::structs::connection_params::ConnectionParams;

        #[test]
        fn test_sqlite_template_key_set() {
            let params = ConnectionParams::from_config(&descriptor("sqlite")).unwrap();
            let map = params.to_map();
            let keys: Vec<&String> = map.keys().collect();
            assert_eq!(keys, ["driver", "user", "password", "path", "memory"]);
        }

        #[test]
        fn test_sqlite_template_values() {
            let params = ConnectionParams::from_config(&descriptor("sqlite")).unwrap();
            let map = params.to_map();
            assert_eq!(map["driver"], json!("pdo_sql"));
            assert_eq!(map["user"], json!("admin"));
            assert_eq!(map["password"], json!("secret"));
            assert_eq!(map["path"], json!("app"));
            assert_eq!(map["memory"], json!(false));
        }

        #[test]
        fn test_sqlite_memory_never_configurable() {
            // No descriptor field can flip it; always false.
            let mut config = descriptor("sqlite");
            config.database = None;
            let params = ConnectionParams::from_config(&config).unwrap();
            let map = params.to_map();
            assert_eq!(map["memory"], json!(false));
            assert_eq!(map["path"], Value::Null);
        }

        #[test]
        fn test_mysql_template_key_set() {
            let params = ConnectionParams::from_config(&descriptor("mysql")).unwrap();
            let map = params.to_map();
            let keys: Vec<&String> = map.keys().collect();
            assert_eq!(keys, ["driver", "user", "password", "host", "port", "dbname", "unix_socket", "charset"]);
        }

        #[test]
        fn test_mysql_worked_example() {
            let config = ConnectionConfig {
                driver: String::from("mysql"),
                username: Some(String::from("root")),
                password: Some(String::from("")),
                host: Some(String::from("127.0.0.1")),
                port: Some(3306),
                database: Some(String::from("app")),
                charset: None,
                unix_socket: None,
                sslmode: None,
            };
            let params = ConnectionParams::from_config(&config).unwrap();
            let map = params.to_map();
            assert_eq!(map["driver"], json!("pdo_mysql"));
            assert_eq!(map["user"], json!("root"));
            assert_eq!(map["password"], json!(""));
            assert_eq!(map["host"], json!("127.0.0.1"));
            assert_eq!(map["port"], json!(3306));
            assert_eq!(map["dbname"], json!("app"));
            assert_eq!(map["unix_socket"], Value::Null);
            assert_eq!(map["charset"], json!("utf8"));
        }

        #[test]
        fn test_mysql_charset_defaults_to_utf8() {
            let mut config = descriptor("mysql");
            config.charset = None;
            let params = ConnectionParams::from_config(&config).unwrap();
            assert_eq!(params.to_map()["charset"], json!("utf8"));
        }

        #[test]
        fn test_mysql_charset_copied_verbatim() {
            let params = ConnectionParams::from_config(&descriptor("mysql")).unwrap();
            assert_eq!(params.to_map()["charset"], json!("utf8mb4"));
        }

        #[test]
        fn test_pgsql_template_key_set() {
            let params = ConnectionParams::from_config(&descriptor("pgsql")).unwrap();
            let map = params.to_map();
            let keys: Vec<&String> = map.keys().collect();
            assert_eq!(keys, ["driver", "user", "password", "host", "port", "dbname", "charset", "sslmode"]);
        }

        #[test]
        fn test_pgsql_template_values() {
            let params = ConnectionParams::from_config(&descriptor("pgsql")).unwrap();
            let map = params.to_map();
            assert_eq!(map["driver"], json!("pdo_pgsql"));
            assert_eq!(map["host"], json!("db.local"));
            assert_eq!(map["port"], json!(5432));
            assert_eq!(map["dbname"], json!("app"));
            assert_eq!(map["sslmode"], json!("require"));
        }

        #[test]
        fn test_pgsql_charset_defaults_to_utf8() {
            let mut config = descriptor("pgsql");
            config.charset = None;
            let params = ConnectionParams::from_config(&config).unwrap();
            assert_eq!(params.to_map()["charset"], json!("utf8"));
        }

        #[test]
        fn test_sqlsrv_template_key_set() {
            let params = ConnectionParams::from_config(&descriptor("sqlsrv")).unwrap();
            let map = params.to_map();
            let keys: Vec<&String> = map.keys().collect();
            assert_eq!(keys, ["driver", "user", "password", "host", "port", "dbname"]);
        }

        #[test]
        fn test_sqlsrv_template_values() {
            let params = ConnectionParams::from_config(&descriptor("sqlsrv")).unwrap();
            let map = params.to_map();
            assert_eq!(map["driver"], json!("pdo_sqlsrv"));
            assert_eq!(map["user"], json!("admin"));
            assert_eq!(map["dbname"], json!("app"));
        }

        #[test]
        fn test_missing_fields_render_as_null_keys() {
            let config = ConnectionConfig {
                driver: String::from("pgsql"),
                username: None,
                password: None,
                host: None,
                port: None,
                database: None,
                charset: None,
                unix_socket: None,
                sslmode: None,
            };
            let params = ConnectionParams::from_config(&config).unwrap();
            let map = params.to_map();
            assert_eq!(map.len(), 8);
            assert_eq!(map["user"], Value::Null);
            assert_eq!(map["password"], Value::Null);
            assert_eq!(map["host"], Value::Null);
            assert_eq!(map["port"], Value::Null);
            assert_eq!(map["dbname"], Value::Null);
            assert_eq!(map["sslmode"], Value::Null);
        }

        #[test]
        fn test_invalid_driver_fails() {
            let error = ConnectionParams::from_config(&descriptor("oracle")).unwrap_err();
            assert_eq!(error, SetupError::InvalidDriver(String::from("oracle")));
        }

        #[test]
        fn test_kind_and_driver_name() {
            let params = ConnectionParams::from_config(&descriptor("mysql")).unwrap();
            assert_eq!(params.kind(), DriverKind::mysql);
            assert_eq!(params.driver_name(), "pdo_mysql");
        }

        #[test]
        fn test_serialize_matches_map() {
            for driver in ["sqlite", "mysql", "pgsql", "sqlsrv"] {
                let params = ConnectionParams::from_config(&descriptor(driver)).unwrap();
                let serialized = serde_json::to_value(&params).unwrap();
                assert_eq!(serialized, Value::Object(params.to_map()));
            }
        }

        proptest! {
            #[test]
            fn test_unsupported_driver_always_fails(driver in "[a-z0-9_]{1,16}") {
                prop_assume!(!matches!(driver.as_str(), "sqlite" | "mysql" | "pgsql" | "sqlsrv"));
                let config = ConnectionConfig {
                    driver: driver.clone(),
                    username: None,
                    password: None,
                    host: None,
                    port: None,
                    database: None,
                    charset: None,
                    unix_socket: None,
                    sslmode: None,
                };
                let error = ConnectionParams::from_config(&config).unwrap_err();
                prop_assert_eq!(error, SetupError::InvalidDriver(driver));
            }
        }
    }

    mod database_connector_tests {
        use super::descriptor;
        use crate::common::enums::bootstrap_error::BootstrapError;
        use crate::database::enums::driver_kind::DriverKind;
        use crate::database::structs::connection_params::ConnectionParams;
        use crate::database::structs::database_connector::DatabaseConnector;

        #[tokio::test]
        async fn test_sqlite_pool_opens() {
            let temp_dir = tempfile::TempDir::new().unwrap();
            let path = temp_dir.path().join("bridge.db");
            let mut config = descriptor("sqlite");
            config.database = Some(path.to_string_lossy().to_string());
            let params = ConnectionParams::from_config(&config).unwrap();
            let connector = DatabaseConnector::new(&params).await.unwrap();
            assert_eq!(connector.engine(), Some(DriverKind::sqlite));
            assert!(connector.sqlite_pool().is_some());
            assert!(connector.mysql_pool().is_none());
            assert!(connector.pgsql_pool().is_none());
        }

        #[tokio::test]
        async fn test_sqlite_pool_requires_path() {
            let mut config = descriptor("sqlite");
            config.database = None;
            let params = ConnectionParams::from_config(&config).unwrap();
            let error = DatabaseConnector::new(&params).await.unwrap_err();
            assert!(matches!(error, BootstrapError::Database(_)));
        }

        #[tokio::test]
        async fn test_sqlsrv_pool_unsupported() {
            let params = ConnectionParams::from_config(&descriptor("sqlsrv")).unwrap();
            let error = DatabaseConnector::new(&params).await.unwrap_err();
            match error {
                BootstrapError::UnsupportedEngine(engine) => assert_eq!(engine, "sqlsrv"),
                other => panic!("expected UnsupportedEngine, got {:?}", other),
            }
        }
    }
}
