use crate::core::FormReader;
use crate::utils::error::{BridgeError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// In-memory form; the usual reader for command line input and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapForm {
    fields: HashMap<String, String>,
}

impl MapForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Later values win.
    pub fn merge(&mut self, other: MapForm) {
        self.fields.extend(other.fields);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl FormReader for MapForm {
    fn value(&self, field: &str) -> Option<String> {
        self.fields.get(field).cloned()
    }
}

#[derive(Debug, Deserialize)]
struct FormFile {
    #[serde(default)]
    fields: HashMap<String, toml::Value>,
}

/// Form inputs loaded from the `[fields]` table of a TOML file.
///
/// Scalars are kept as the text an input box would hold, so `electionId = 3`
/// reads back as `"3"`.
#[derive(Debug, Clone, Default)]
pub struct TomlForm {
    form: MapForm,
}

impl TomlForm {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BridgeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: FormFile = toml::from_str(content).map_err(|e| BridgeError::ConfigError {
            message: format!("Form file parsing error: {}", e),
        })?;

        let mut form = MapForm::new();
        for (field, value) in file.fields {
            let text = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(d) => d.to_string(),
                other => {
                    return Err(BridgeError::InvalidConfigValueError {
                        field: format!("fields.{}", field),
                        value: other.to_string(),
                        reason: "Form values must be plain text".to_string(),
                    });
                }
            };
            form.set(field, text);
        }

        Ok(Self { form })
    }

    pub fn into_map_form(self) -> MapForm {
        self.form
    }
}

impl FormReader for TomlForm {
    fn value(&self, field: &str) -> Option<String> {
        self.form.value(field)
    }
}
