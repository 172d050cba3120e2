use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::connection_config::ConnectionConfig;
use crate::config::structs::orm_config::OrmConfig;

impl Configuration {
    pub fn init() -> Configuration {
        let mut connections = BTreeMap::new();
        connections.insert(String::from("sqlite"), ConnectionConfig {
            driver: String::from("sqlite"),
            username: None,
            password: None,
            host: None,
            port: None,
            database: Some(String::from("data.db")),
            charset: None,
            unix_socket: None,
            sslmode: None,
        });
        connections.insert(String::from("mysql"), ConnectionConfig {
            driver: String::from("mysql"),
            username: Some(String::from("root")),
            password: Some(String::from("")),
            host: Some(String::from("127.0.0.1")),
            port: Some(3306),
            database: Some(String::from("app")),
            charset: Some(String::from("utf8")),
            unix_socket: None,
            sslmode: None,
        });
        Configuration {
            log_level: String::from("info"),
            default: String::from("sqlite"),
            connections,
            orm: OrmConfig {
                mapper: String::from("annotation"),
                paths: vec!(String::from("src/entities")),
                debug: false,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, CustomError> {
        let mut config = Configuration::init();
        match Configuration::load_file("config.toml") {
            Ok(c) => { config = c; }
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own config.toml file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically config.toml file"));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&config) {
                    Ok(data) => data,
                    Err(_) => { return Err(CustomError::new("could not serialize default configuration")); }
                };
                let save_file = Configuration::save_file("config.toml", config_toml);
                return match save_file {
                    Ok(_) => {
                        eprintln!("Please edit the config.TOML in the root folder, exiting now...");
                        Err(CustomError::new("create config.toml file"))
                    }
                    Err(e) => {
                        eprintln!("config.toml file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config.toml file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        Self::validate(config.clone());
        Ok(config)
    }

    pub fn validate(config: Configuration) {
        for name in config.connections.keys() {
            Self::validate_value("[Connection]", name.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string());
        }
        if !config.connections.contains_key(&config.default) {
            panic!("[VALIDATE CONFIG] Default connection \"{}\" is not declared under [connections]", config.default);
        }
    }

    pub fn validate_value(name: &str, value: String, regex: String)
    {
        let regex_check = match Regex::new(regex.as_str()) {
            Ok(regex_check) => regex_check,
            Err(_) => { panic!("[VALIDATE CONFIG] Broken validation regex \"{}\"", regex); }
        };
        if !regex_check.is_match(value.as_str()) {
            panic!("[VALIDATE CONFIG] Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"", name, value, regex_check);
        }
    }
}
