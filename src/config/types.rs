// Configuration type definitions

use serde::Deserialize;

/// Suggestion-assist tuning knobs
#[derive(Debug, Clone, Deserialize)]
pub struct AssistConfig {
    /// Quiet period after the last keystroke before a search dispatch fires
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Cap on the merged search-mode result list
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Cap on knowledge-base candidates before the merge
    #[serde(default = "default_knowledge_cap")]
    pub knowledge_cap: usize,
    /// Knowledge entries handed to the generative service when no keyword matches
    #[serde(default = "default_fallback_entries")]
    pub fallback_entries: usize,
    /// Character that opens the command palette
    #[serde(default = "default_trigger_char")]
    pub trigger_char: char,
}

impl Default for AssistConfig {
    fn default() -> Self {
        AssistConfig {
            debounce_ms: default_debounce_ms(),
            max_results: default_max_results(),
            knowledge_cap: default_knowledge_cap(),
            fallback_entries: default_fallback_entries(),
            trigger_char: default_trigger_char(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_max_results() -> usize {
    8
}

fn default_knowledge_cap() -> usize {
    3
}

fn default_fallback_entries() -> usize {
    3
}

fn default_trigger_char() -> char {
    '/'
}

/// Generative service configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        OpenAiConfig {
            api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_max_tokens() -> u32 {
    800
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub assist: AssistConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.assist.debounce_ms, 300);
        assert_eq!(config.assist.max_results, 8);
        assert_eq!(config.assist.knowledge_cap, 3);
        assert_eq!(config.assist.trigger_char, '/');
        assert_eq!(config.openai.model, "gpt-4o");
        assert!(config.openai.api_key.is_none());
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config: Config = toml::from_str(
            r#"
[assist]
debounce_ms = 150
max_results = 5

[openai]
api_key = "sk-test"
model = "gpt-4o-mini"
"#,
        )
        .unwrap();
        assert_eq!(config.assist.debounce_ms, 150);
        assert_eq!(config.assist.max_results, 5);
        assert_eq!(config.assist.knowledge_cap, 3);
        assert_eq!(config.openai.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openai.model, "gpt-4o-mini");
    }

    // For any subset of present fields, parsing succeeds and missing fields
    // take their documented defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_partial_assist_sections_parse(
            include_section in prop::bool::ANY,
            debounce in 0u64..5000,
            include_debounce in prop::bool::ANY,
        ) {
            let toml_content = if !include_section {
                String::new()
            } else if include_debounce {
                format!("[assist]\ndebounce_ms = {debounce}\n")
            } else {
                "[assist]\n".to_string()
            };

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok());
            let config = config.unwrap();

            if include_section && include_debounce {
                prop_assert_eq!(config.assist.debounce_ms, debounce);
            } else {
                prop_assert_eq!(config.assist.debounce_ms, 300);
            }
            prop_assert_eq!(config.assist.max_results, 8);
        }
    }
}
