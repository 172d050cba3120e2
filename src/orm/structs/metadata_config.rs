use std::path::PathBuf;
use serde::{
    Deserialize,
    Serialize
};
use crate::orm::enums::mapper_kind::MapperKind;

/// Entity metadata discovery configuration: which mapper strategy to use
/// and which filesystem paths to scan for entity definitions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MetadataConfig {
    pub mapper: MapperKind,
    pub paths: Vec<PathBuf>,
    pub debug: bool,
}
