//! Rich-text (portable text) blocks
//!
//! Only the subset the site actually renders: paragraph blocks made of
//! plain spans. Marks, links and custom block types are ignored rather
//! than rejected.

use serde::{Deserialize, Serialize};

/// One rich-text block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub children: Vec<Span>,
}

/// Text span inside a block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
}

/// Flatten blocks into paragraph strings, dropping empties.
pub fn plain_paragraphs(blocks: &[Block]) -> Vec<String> {
    blocks
        .iter()
        .map(|block| {
            block
                .children
                .iter()
                .map(|span| span.text.as_str())
                .collect::<String>()
        })
        .filter(|p| !p.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(texts: &[&str]) -> Block {
        Block {
            style: Some("normal".to_string()),
            children: texts
                .iter()
                .map(|t| Span {
                    text: (*t).to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn joins_spans_per_block() {
        let blocks = vec![block(&["Good coffee ", "takes time."]), block(&["So do good things."])];
        assert_eq!(
            plain_paragraphs(&blocks),
            vec!["Good coffee takes time.", "So do good things."]
        );
    }

    #[test]
    fn drops_empty_blocks() {
        let blocks = vec![block(&[]), block(&["   "]), block(&["kept"])];
        assert_eq!(plain_paragraphs(&blocks), vec!["kept"]);
    }
}
