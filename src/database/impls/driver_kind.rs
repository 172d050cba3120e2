use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use crate::common::enums::setup_error::SetupError;
use crate::database::enums::driver_kind::DriverKind;

impl DriverKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverKind::sqlite => "sqlite",
            DriverKind::mysql => "mysql",
            DriverKind::pgsql => "pgsql",
            DriverKind::sqlsrv => "sqlsrv",
        }
    }
}

impl FromStr for DriverKind {
    type Err = SetupError;

    fn from_str(value: &str) -> Result<DriverKind, SetupError> {
        match value {
            "sqlite" => Ok(DriverKind::sqlite),
            "mysql" => Ok(DriverKind::mysql),
            "pgsql" => Ok(DriverKind::pgsql),
            "sqlsrv" => Ok(DriverKind::sqlsrv),
            _ => Err(SetupError::InvalidDriver(value.to_string())),
        }
    }
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
