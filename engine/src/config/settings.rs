// Engine settings, loaded from a JSON file or falling back to defaults.
use crate::error::EngineError;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineSettings {
    /// Field delimiter for tabular import. Exported spreadsheets in the
    /// target locale commonly use `;`.
    pub csv_delimiter: u8,
    /// Header of the column holding cheque face amounts.
    pub amount_header: String,
    /// Header of the column holding due-date strings.
    pub date_header: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            csv_delimiter: b';',
            amount_header: "amount".to_string(),
            date_header: "date".to_string(),
        }
    }
}

impl EngineSettings {
    pub fn load_from_file(path: &str) -> Result<Self, EngineError> {
        let file = File::open(path)?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| EngineError::ConfigError(format!("invalid settings file '{}': {}", path, e)))
    }
}
