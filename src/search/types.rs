use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub contains: Option<String>,
}
