//! Link annotation for cell text
//!
//! Rewrites known cell text into hyperlinks. A [`LinkRuleTable`] holds four
//! kinds of rules, applied in this order, each on the output of the previous:
//!
//! 1. **Citation**: numeric ids after a keyword (`PubMed: 12345`) become links
//!    to a lookup URL with the id appended
//! 2. **Substring**: a key found anywhere in the text is replaced by a link
//! 3. **Exact**: text equal to a key becomes a link
//! 4. **Prefix**: text starting with a URL prefix becomes a link labelled with
//!    the rule's display name; the longest matching prefix wins
//!
//! Steps 2 and 3 interact: once a substring rule has rewritten the text, an
//! exact rule for the unmodified text no longer fires.
//!
//! ## Example
//!
//! ```rust
//! use srctable::features::links::LinkRuleTable;
//!
//! let rules = LinkRuleTable::new().with_exact("GO", "https://example.org/go");
//! assert_eq!(
//!     rules.annotate("GO"),
//!     r#"<a href="https://example.org/go" target="_blank">GO</a>"#
//! );
//! assert_eq!(rules.annotate("GOA"), "GOA");
//! ```

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::data::links::{
    CITATION_KEYWORD, CITATION_URL, EXACT_LINKS, PREFIX_LINKS, SUBSTRING_LINKS,
};
use crate::utils::error::{RenderError, RenderResult};

lazy_static! {
    /// Id pattern for the default citation keyword
    static ref PUBMED_PATTERN: Regex = Regex::new(r"PubMed.*? ([0-9]+)").unwrap();
    /// Maximal runs of digits
    static ref NUMBER: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Build an anchor opening in a new window
pub fn create_link(label: &str, url: &str) -> String {
    format!("<a href=\"{}\" target=\"_blank\">{}</a>", url, label)
}

/// How many occurrences a substring rule replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "data-loading", derive(serde::Deserialize))]
#[cfg_attr(feature = "data-loading", serde(rename_all = "lowercase"))]
pub enum Occurrence {
    #[default]
    All,
    First,
}

/// Links numeric citation ids that follow a keyword
#[derive(Debug, Clone)]
pub struct CitationRule {
    keyword: String,
    pattern: Regex,
    url_prefix: String,
}

impl CitationRule {
    /// Ids are the digit runs preceded by a space somewhere after `keyword`
    pub fn new(keyword: &str, url_prefix: &str) -> RenderResult<Self> {
        let pattern = Regex::new(&format!(r"{}.*? ([0-9]+)", regex::escape(keyword)))
            .map_err(|e| RenderError::link_rules(e.to_string()))?;
        Ok(CitationRule {
            keyword: keyword.to_string(),
            pattern,
            url_prefix: url_prefix.to_string(),
        })
    }

    /// `PubMed: <id>` linked to NCBI
    pub fn pubmed() -> Self {
        CitationRule {
            keyword: CITATION_KEYWORD.to_string(),
            pattern: PUBMED_PATTERN.clone(),
            url_prefix: CITATION_URL.to_string(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Ids announced in `text`, first occurrence order, without duplicates
    pub fn ids<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut ids: Vec<&'t str> = Vec::new();
        for caps in self.pattern.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                if !ids.contains(&m.as_str()) {
                    ids.push(m.as_str());
                }
            }
        }
        ids
    }

    /// Link every whole-number occurrence of an announced id
    pub fn apply(&self, text: &str) -> String {
        if !text.contains(&self.keyword) {
            return text.to_string();
        }
        let ids = self.ids(text);
        if ids.is_empty() {
            return text.to_string();
        }

        NUMBER
            .replace_all(text, |caps: &Captures| {
                let number = &caps[0];
                if ids.contains(&number) {
                    create_link(number, &format!("{}{}", self.url_prefix, number))
                } else {
                    number.to_string()
                }
            })
            .into_owned()
    }
}

/// Key replaced wherever it occurs in the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringRule {
    pub key: String,
    pub url: String,
    pub occurrence: Occurrence,
}

/// Whole-text link for text starting with a URL prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRule {
    pub prefix: String,
    /// Link label shown instead of the URL
    pub label: String,
}

impl PrefixRule {
    /// The text has to be longer than the bare prefix
    pub fn matches(&self, text: &str) -> bool {
        text.len() > self.prefix.len() && text.starts_with(self.prefix.as_str())
    }
}

/// Read-only rule set consulted for every rendered cell
#[derive(Debug, Clone, Default)]
pub struct LinkRuleTable {
    citation: Option<CitationRule>,
    substring: Vec<SubstringRule>,
    exact: IndexMap<String, String>,
    /// Kept sorted by descending prefix length
    prefix: Vec<PrefixRule>,
}

impl LinkRuleTable {
    /// Empty table; annotation returns text unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the tool
    pub fn builtin() -> Self {
        let mut table = LinkRuleTable::new().with_citation(CitationRule::pubmed());
        for (key, url) in SUBSTRING_LINKS {
            table.add_substring(key, url, Occurrence::All);
        }
        for (key, url) in EXACT_LINKS.entries() {
            table.add_exact(key, url);
        }
        for (prefix, label) in PREFIX_LINKS {
            table.add_prefix(prefix, label);
        }
        table
    }

    pub fn with_citation(mut self, rule: CitationRule) -> Self {
        self.citation = Some(rule);
        self
    }

    pub fn with_substring(mut self, key: &str, url: &str) -> Self {
        self.add_substring(key, url, Occurrence::All);
        self
    }

    pub fn with_exact(mut self, key: &str, url: &str) -> Self {
        self.add_exact(key, url);
        self
    }

    pub fn with_prefix(mut self, prefix: &str, label: &str) -> Self {
        self.add_prefix(prefix, label);
        self
    }

    pub fn add_substring(&mut self, key: &str, url: &str, occurrence: Occurrence) {
        self.substring.push(SubstringRule {
            key: key.to_string(),
            url: url.to_string(),
            occurrence,
        });
    }

    /// A repeated key replaces the earlier URL
    pub fn add_exact(&mut self, key: &str, url: &str) {
        self.exact.insert(key.to_string(), url.to_string());
    }

    /// Insert after every prefix of equal or greater length
    pub fn add_prefix(&mut self, prefix: &str, label: &str) {
        let pos = self
            .prefix
            .iter()
            .position(|r| r.prefix.len() < prefix.len())
            .unwrap_or(self.prefix.len());
        self.prefix.insert(
            pos,
            PrefixRule {
                prefix: prefix.to_string(),
                label: label.to_string(),
            },
        );
    }

    pub fn citation(&self) -> Option<&CitationRule> {
        self.citation.as_ref()
    }

    pub fn substring_rules(&self) -> &[SubstringRule] {
        &self.substring
    }

    pub fn exact_url(&self, key: &str) -> Option<&str> {
        self.exact.get(key).map(String::as_str)
    }

    /// Prefix rules in evaluation order
    pub fn prefix_rules(&self) -> &[PrefixRule] {
        &self.prefix
    }

    /// First prefix rule (in evaluation order) matching `text`
    pub fn matching_prefix(&self, text: &str) -> Option<&PrefixRule> {
        self.prefix.iter().find(|r| r.matches(text))
    }

    pub fn is_empty(&self) -> bool {
        self.citation.is_none()
            && self.substring.is_empty()
            && self.exact.is_empty()
            && self.prefix.is_empty()
    }

    /// Apply every rule to `text`. Text matching no rule comes back unchanged.
    pub fn annotate(&self, text: &str) -> String {
        let mut text = match self.citation {
            Some(ref rule) => rule.apply(text),
            None => text.to_string(),
        };

        for rule in &self.substring {
            if text.contains(rule.key.as_str()) {
                let link = create_link(&rule.key, &rule.url);
                text = match rule.occurrence {
                    Occurrence::All => text.replace(rule.key.as_str(), &link),
                    Occurrence::First => text.replacen(rule.key.as_str(), &link, 1),
                };
            }
        }

        if let Some(url) = self.exact.get(text.as_str()) {
            text = create_link(&text, url);
        }

        if let Some(rule) = self.matching_prefix(&text) {
            text = create_link(&rule.label, &text);
        }

        text
    }
}

/// Apply `rules` to `text`
pub fn annotate(text: &str, rules: &LinkRuleTable) -> String {
    rules.annotate(text)
}

#[cfg(feature = "data-loading")]
mod loading {
    //! Rule tables from TOML or JSON
    //!
    //! ```toml
    //! [citation]
    //! keyword = "PubMed"
    //! url_prefix = "https://www.ncbi.nlm.nih.gov/pubmed/"
    //!
    //! [exact]
    //! "GO" = "https://bioportal.bioontology.org/ontologies/GO"
    //!
    //! [[substring]]
    //! key = "data usage at HGD"
    //! url = "http://hymenopteragenome.org/data_usage_citing"
    //!
    //! [[prefix]]
    //! prefix = "https://ftp.uniprot.org"
    //! label = "UniProt FTP"
    //! ```

    use indexmap::IndexMap;
    use serde::Deserialize;

    use super::{CitationRule, LinkRuleTable, Occurrence};
    use crate::utils::error::{RenderError, RenderResult};

    #[derive(Debug, Deserialize)]
    struct CitationEntry {
        keyword: String,
        url_prefix: String,
    }

    #[derive(Debug, Deserialize)]
    struct SubstringEntry {
        key: String,
        url: String,
        #[serde(default)]
        occurrence: Occurrence,
    }

    #[derive(Debug, Deserialize)]
    struct PrefixEntry {
        prefix: String,
        label: String,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct RuleFile {
        citation: Option<CitationEntry>,
        substring: Vec<SubstringEntry>,
        exact: IndexMap<String, String>,
        prefix: Vec<PrefixEntry>,
    }

    impl RuleFile {
        fn into_table(self) -> RenderResult<LinkRuleTable> {
            let mut table = LinkRuleTable::new();
            if let Some(c) = self.citation {
                table = table.with_citation(CitationRule::new(&c.keyword, &c.url_prefix)?);
            }
            for s in self.substring {
                table.add_substring(&s.key, &s.url, s.occurrence);
            }
            for (key, url) in self.exact {
                table.add_exact(&key, &url);
            }
            for p in self.prefix {
                table.add_prefix(&p.prefix, &p.label);
            }
            Ok(table)
        }
    }

    impl LinkRuleTable {
        /// Parse a rule table from TOML
        pub fn from_toml_str(input: &str) -> RenderResult<Self> {
            let file: RuleFile =
                toml::from_str(input).map_err(|e| RenderError::link_rules(e.to_string()))?;
            file.into_table()
        }

        /// Parse a rule table from JSON
        pub fn from_json_str(input: &str) -> RenderResult<Self> {
            let file: RuleFile =
                serde_json::from_str(input).map_err(|e| RenderError::link_rules(e.to_string()))?;
            file.into_table()
        }
    }

}
