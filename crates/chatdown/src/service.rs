//! ExtractService - the main entry point for transcript extraction.

use crate::convert::{block_to_markdown, extract_text, Context};
use crate::html::parse_html;
use crate::node::Node;
use crate::rules::{Filter, Rules};
use crate::utilities::STRUCTURAL_ATTRIBUTE;
use crate::{ChatdownError, Result};

/// Marker used when the caller does not supply one
pub const DEFAULT_MARKER: &str = "表 2：EAP 年度推動計畫甘特圖";

/// Options for ExtractService
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Text of the block after which extraction starts
    pub marker: String,

    /// Attribute that marks a block as real content
    pub structural_attribute: String,

    /// Horizontal rule string
    pub hr: String,

    /// Bullet list marker
    pub bullet_list_marker: char,

    /// Strong delimiter; paragraphs starting with it are sub-titles
    pub strong_delimiter: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            structural_attribute: STRUCTURAL_ATTRIBUTE.to_string(),
            hr: "---".to_string(),
            bullet_list_marker: '-',
            strong_delimiter: "**".to_string(),
        }
    }
}

/// The main service for extracting a transcript as Markdown
pub struct ExtractService {
    options: ExtractOptions,
    rules: Rules,
}

impl ExtractService {
    /// Create an ExtractService with default options
    pub fn new() -> Self {
        Self::with_options(ExtractOptions::default())
    }

    /// Create an ExtractService with custom options
    pub fn with_options(options: ExtractOptions) -> Self {
        let rules = Rules::new(&options);
        Self { options, rules }
    }

    /// Create an ExtractService with default options and the given marker
    pub fn with_marker(marker: &str) -> Self {
        Self::with_options(ExtractOptions {
            marker: marker.to_string(),
            ..Default::default()
        })
    }

    /// Get the current options
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Get mutable access to the filters
    pub fn rules_mut(&mut self) -> &mut Rules {
        &mut self.rules
    }

    /// Strip elements matching the filter before reading any text
    pub fn remove(&mut self, key: &str, filter: Filter) -> &mut Self {
        self.rules.add_noise(key, filter);
        self
    }

    /// Stop stripping a default noise widget, keeping its text
    pub fn keep(&mut self, key: &str) -> &mut Self {
        self.rules.remove_noise(key);
        self
    }

    /// Parse HTML and convert everything after the marker block
    pub fn convert_html(&self, html: &str) -> Result<String> {
        self.convert(&parse_html(html)?)
    }

    /// Convert everything after the first structural block containing the
    /// marker into Markdown.
    ///
    /// Fails with [`ChatdownError::MarkerNotFound`] when no structural block
    /// contains the marker; nothing is produced in that case.
    pub fn convert(&self, document: &Node) -> Result<String> {
        let marker = self.options.marker.as_str();
        let _span = tracing::info_span!("convert", marker).entered();

        let blocks: Vec<&Node> = document
            .descendants()
            .filter(|n| self.rules.is_structural(n))
            .collect();
        tracing::debug!(count = blocks.len(), "collected structural blocks");

        let Some(start) = blocks
            .iter()
            .position(|n| extract_text(n, &self.rules).contains(marker))
        else {
            tracing::warn!(marker, "marker not found in any structural block");
            return Err(ChatdownError::MarkerNotFound(marker.to_string()));
        };
        tracing::debug!(index = start, "marker block found");

        let ctx = Context {
            rules: &self.rules,
            options: &self.options,
        };

        let mut fragments = vec![
            format!("\n{}\n", self.options.hr),
            format!("\n## 📝 後續對話內容（從「{}」之後）\n", marker),
        ];
        fragments.extend(
            blocks[start + 1..]
                .iter()
                .filter_map(|node| block_to_markdown(node, &ctx)),
        );

        tracing::info!(fragments = fragments.len(), "conversion finished");
        Ok(fragments.concat())
    }
}

impl Default for ExtractService {
    fn default() -> Self {
        Self::new()
    }
}
