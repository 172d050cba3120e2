use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use crate::common::enums::setup_error::SetupError;
use crate::orm::enums::mapper_kind::MapperKind;

impl MapperKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapperKind::annotation => "annotation",
            MapperKind::docblock => "docblock",
            MapperKind::xml => "xml",
            MapperKind::yaml => "yaml",
        }
    }

    /// Both `annotation` and `docblock` select source-code annotation
    /// scanning; the other strategies read external mapping files.
    pub fn uses_annotations(&self) -> bool {
        matches!(self, MapperKind::annotation | MapperKind::docblock)
    }
}

impl FromStr for MapperKind {
    type Err = SetupError;

    fn from_str(value: &str) -> Result<MapperKind, SetupError> {
        match value {
            "annotation" => Ok(MapperKind::annotation),
            "docblock" => Ok(MapperKind::docblock),
            "xml" => Ok(MapperKind::xml),
            "yaml" => Ok(MapperKind::yaml),
            _ => Err(SetupError::InvalidMapper(value.to_string())),
        }
    }
}

impl fmt::Display for MapperKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
