use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SqliteParams {
    pub driver: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub path: Option<String>,
    pub memory: bool,
}
