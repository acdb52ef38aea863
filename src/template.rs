use serde::{Deserialize, Serialize};
use std::fs;

const FILE_SCHEME: &str = "file://";

#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSource {
    Body(String),
    Url(String),
}

// Same shape as the AWS CLI `--parameters file://...` documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackParameter {
    pub parameter_key: String,
    pub parameter_value: Option<String>,
    pub use_previous_value: Option<bool>,
}

pub fn resolve_template(location: &str) -> Result<TemplateSource, String> {
    if let Some(path) = location.strip_prefix(FILE_SCHEME) {
        return fs::read_to_string(path)
            .map(TemplateSource::Body)
            .map_err(|e| format!("Cannot read template '{}': {}", path, e));
    }

    if location.starts_with("https://") || location.starts_with("http://") {
        return Ok(TemplateSource::Url(location.to_string()));
    }

    Ok(TemplateSource::Body(location.to_string()))
}

pub fn load_parameters(location: &str) -> Result<Vec<StackParameter>, String> {
    if location.trim().is_empty() {
        return Ok(vec![]);
    }

    let document = match location.strip_prefix(FILE_SCHEME) {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Cannot read parameters '{}': {}", path, e))?,
        None => location.to_string(),
    };

    serde_json::from_str(&document).map_err(|e| format!("Invalid parameters document: {}", e))
}
