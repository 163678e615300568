use crate::constants::STDIN_INDICATOR;
use crate::error::Result;
use crate::model::ModelMap;
use std::path::Path;

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Parses a JSON object into a model. Blank input yields an empty model.
pub fn parse_model(buf: &str) -> Result<ModelMap> {
    if buf.trim().is_empty() {
        return Ok(ModelMap::new());
    }
    let value: serde_json::Value = serde_json::from_str(buf)?;
    ModelMap::try_from(value)
}

/// Reads the model from an inline JSON string, `-` for stdin, or a file.
///
/// # Arguments
/// * `inline` - JSON text or the stdin indicator
/// * `file` - Path of a JSON file, used when no inline model is given
///
/// # Returns
/// * `Result<ModelMap>` - The parsed model, empty when neither is given
pub fn load_model(inline: Option<&str>, file: Option<&Path>) -> Result<ModelMap> {
    match (inline, file) {
        (Some(STDIN_INDICATOR), _) => parse_model(&read_from(std::io::stdin())?),
        (Some(json), _) => parse_model(json),
        (None, Some(path)) => parse_model(&std::fs::read_to_string(path)?),
        (None, None) => Ok(ModelMap::new()),
    }
}
