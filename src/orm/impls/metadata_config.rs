use std::path::PathBuf;
use crate::common::enums::setup_error::SetupError;
use crate::config::structs::orm_config::OrmConfig;
use crate::orm::enums::mapper_kind::MapperKind;
use crate::orm::structs::metadata_config::MetadataConfig;

impl MetadataConfig {
    /// One-shot startup-time selection of the metadata strategy from the
    /// `[orm]` config section. `docblock` resolves to the annotation
    /// configuration; any unrecognized mapper name aborts the boot.
    pub fn from_config(config: &OrmConfig) -> Result<MetadataConfig, SetupError> {
        let mapper = config.mapper.parse::<MapperKind>()?;
        let paths = config.paths.iter().map(PathBuf::from).collect();
        Ok(match mapper {
            MapperKind::annotation | MapperKind::docblock => {
                Self::create_annotation_metadata_configuration(paths, config.debug)
            }
            MapperKind::xml => Self::create_xml_metadata_configuration(paths, config.debug),
            MapperKind::yaml => Self::create_yaml_metadata_configuration(paths, config.debug),
        })
    }

    pub fn create_annotation_metadata_configuration(paths: Vec<PathBuf>, debug: bool) -> MetadataConfig {
        MetadataConfig { mapper: MapperKind::annotation, paths, debug }
    }

    pub fn create_xml_metadata_configuration(paths: Vec<PathBuf>, debug: bool) -> MetadataConfig {
        MetadataConfig { mapper: MapperKind::xml, paths, debug }
    }

    pub fn create_yaml_metadata_configuration(paths: Vec<PathBuf>, debug: bool) -> MetadataConfig {
        MetadataConfig { mapper: MapperKind::yaml, paths, debug }
    }
}
