//! Model value object representing a translation source

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Known translation models (Value Object)
///
/// This is a domain concept representing the language models whose
/// translations and interpretations are archived, one CSV table per model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Claude models
    ClaudeHaiku,
    ClaudeOpus,
    ClaudeSonnet,
    ClaudeSonnet35,
    // GPT models
    Gpt3,
    Gpt4Turbo,
    Gpt4o,
    Gpt4oMini,
    // Gemini models
    Gemini15Flash,
    Gemini15Pro,
    Gemini20Flash,
    // Others
    Grok2,
    Llama2,
    Llama3,
    Mixtral,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string key for this model (the CSV file stem)
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeHaiku => "Claude_haiku",
            Model::ClaudeOpus => "Claude_opus",
            Model::ClaudeSonnet => "Claude_sonnet",
            Model::ClaudeSonnet35 => "Claude_sonnet_3.5",
            Model::Gpt3 => "GPT3",
            Model::Gpt4Turbo => "GPT4Turbo",
            Model::Gpt4o => "GPT4o",
            Model::Gpt4oMini => "GPT4oMini",
            Model::Gemini15Flash => "gemini_1.5_flash",
            Model::Gemini15Pro => "gemini_1.5_pro",
            Model::Gemini20Flash => "gemini_2.0_flash",
            Model::Grok2 => "Grok2",
            Model::Llama2 => "Llama2",
            Model::Llama3 => "Llama3",
            Model::Mixtral => "Mixtral",
            Model::Custom(s) => s,
        }
    }

    /// Human-readable display name shown in headings and selectors
    ///
    /// Unknown keys fall back to the raw key unchanged.
    pub fn display_name(&self) -> &str {
        match self {
            Model::ClaudeHaiku => "Claude Haiku",
            Model::ClaudeOpus => "Claude Opus",
            Model::ClaudeSonnet => "Claude Sonnet",
            Model::ClaudeSonnet35 => "Claude Sonnet 3.5",
            Model::Gpt3 => "GPT-3",
            Model::Gpt4Turbo => "GPT-4 Turbo",
            Model::Gpt4o => "GPT-4o",
            Model::Gpt4oMini => "GPT-4o Mini",
            Model::Gemini15Flash => "Gemini 1.5 Flash",
            Model::Gemini15Pro => "Gemini 1.5 Pro",
            Model::Gemini20Flash => "Gemini 2.0 Flash",
            Model::Grok2 => "Grok 2",
            Model::Llama2 => "Llama 2",
            Model::Llama3 => "Llama 3",
            Model::Mixtral => "Mixtral",
            Model::Custom(s) => s,
        }
    }

    /// File name of the CSV table for this model
    pub fn csv_file(&self) -> String {
        format!("{}.csv", self.as_str())
    }

    /// Parse a CSV file name ("Claude_haiku.csv") into a model
    pub fn from_csv_file(file_name: &str) -> Model {
        let key = file_name.strip_suffix(".csv").unwrap_or(file_name);
        key.parse().unwrap_or_else(|_| Model::Custom(key.to_string()))
    }

    /// The full archive catalog, in loader order
    pub fn catalog() -> Vec<Model> {
        vec![
            Model::ClaudeHaiku,
            Model::ClaudeOpus,
            Model::ClaudeSonnet,
            Model::ClaudeSonnet35,
            Model::Gpt3,
            Model::Gpt4Turbo,
            Model::Gpt4o,
            Model::Gpt4oMini,
            Model::Grok2,
            Model::Llama2,
            Model::Llama3,
            Model::Mixtral,
            Model::Gemini15Flash,
            Model::Gemini15Pro,
            Model::Gemini20Flash,
        ]
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "Claude_haiku" => Model::ClaudeHaiku,
            "Claude_opus" => Model::ClaudeOpus,
            "Claude_sonnet" => Model::ClaudeSonnet,
            "Claude_sonnet_3.5" => Model::ClaudeSonnet35,
            "GPT3" => Model::Gpt3,
            "GPT4Turbo" => Model::Gpt4Turbo,
            "GPT4o" => Model::Gpt4o,
            "GPT4oMini" => Model::Gpt4oMini,
            "gemini_1.5_flash" => Model::Gemini15Flash,
            "gemini_1.5_pro" => Model::Gemini15Pro,
            "gemini_2.0_flash" => Model::Gemini20Flash,
            "Grok2" => Model::Grok2,
            "Llama2" => Model::Llama2,
            "Llama3" => Model::Llama3,
            "Mixtral" => Model::Mixtral,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        for model in Model::catalog() {
            let parsed: Model = model.as_str().parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_raw() {
        let model: Model = "Mistral_large".parse().unwrap();
        assert_eq!(model, Model::Custom("Mistral_large".to_string()));
        assert_eq!(model.display_name(), "Mistral_large");
    }

    #[test]
    fn test_csv_file_names() {
        assert_eq!(Model::ClaudeSonnet35.csv_file(), "Claude_sonnet_3.5.csv");
        assert_eq!(Model::from_csv_file("GPT4o.csv"), Model::Gpt4o);
        assert_eq!(
            Model::from_csv_file("Qwen.csv"),
            Model::Custom("Qwen".to_string())
        );
    }

    #[test]
    fn test_catalog_has_fifteen_models() {
        assert_eq!(Model::catalog().len(), 15);
    }

    #[test]
    fn test_display_uses_display_name() {
        assert_eq!(Model::Gpt4Turbo.to_string(), "GPT-4 Turbo");
    }
}
