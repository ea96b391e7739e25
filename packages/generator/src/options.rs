use serde::Deserialize;

/// Options for configuring the generator
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Maximum context depth before generation fails
    pub max_depth: usize,
    /// Fail when a model instance appears in its own ancestor chain
    pub detect_cycles: bool,
    /// Separator of static option lists
    pub options_delimiter: char,
    /// Trim static option entries and drop empty ones
    pub trim_options: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            detect_cycles: true,
            options_delimiter: ',',
            trim_options: true,
        }
    }
}

impl GeneratorOptions {
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    /// Split a static option list into its entries
    pub fn split_options(&self, options: &str) -> Vec<String> {
        if options.is_empty() {
            return Vec::new();
        }

        let entries = options.split(self.options_delimiter);
        if self.trim_options {
            entries
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(String::from)
                .collect()
        } else {
            entries.map(String::from).collect()
        }
    }
}
