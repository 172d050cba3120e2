use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrmConfig {
    pub mapper: String,
    pub paths: Vec<String>,
    #[serde(default)]
    pub debug: bool,
}
