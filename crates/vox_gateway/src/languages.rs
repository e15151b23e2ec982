use std::collections::HashMap;

/// Language code to display name lookup used by the translation prompt.
/// Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageNames {
    names: HashMap<String, String>,
}

const DEFAULT_LANGUAGES: [(&str, &str); 8] = [
    ("he", "Hebrew"),
    ("en", "English"),
    ("ar", "Arabic"),
    ("ru", "Russian"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
];

impl Default for LanguageNames {
    fn default() -> Self {
        Self {
            names: DEFAULT_LANGUAGES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }
}

impl LanguageNames {
    /// Default table extended (or overridden) by configured entries
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut languages = Self::default();
        languages
            .names
            .extend(overrides.iter().map(|(code, name)| (code.clone(), name.clone())));
        languages
    }

    /// Display name for `code`; unknown codes are their own display name
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.names.get(code).map(String::as_str).unwrap_or(code)
    }

    pub fn translation_instruction(
        &self,
        source_lang: &str,
        target_lang: &str,
        text: &str,
    ) -> String {
        format!(
            "Translate the following text from {} to {}. Return only the translation, without any explanations or additional text:\n\n{}",
            self.display_name(source_lang),
            self.display_name(target_lang),
            text
        )
    }
}
