use crate::error::LayoutError;
use std::collections::{HashMap, HashSet};

/// How a locale's text splits into wrappable tokens.
///
/// Two families cover the scripts the engine understands: those with an
/// inter-word delimiter (wrap between words, re-inserting the delimiter
/// inside a line) and those without one (wrap between codepoints, with a
/// set of marks that must never begin a line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleRule {
    /// Tokens are the substrings between occurrences of a literal,
    /// non-empty delimiter; for most western scripts, a single space
    Delimited(String),
    /// Tokens are individual codepoints
    Codepoints {
        /// Marks that are kept off the start of a line by breaking one
        /// token early
        no_lead: HashSet<char>,
    },
}

impl LocaleRule {
    /// The space-delimited rule used when no locale-specific rule applies
    pub fn neutral() -> LocaleRule {
        LocaleRule::Delimited(" ".to_string())
    }

    /// The Japanese rule: codepoint tokens, with the quote and punctuation
    /// marks that may not begin a visual line
    pub fn japanese() -> LocaleRule {
        LocaleRule::Codepoints {
            no_lead: ['、', '。', '「', '」', '，', '．'].into_iter().collect(),
        }
    }

    /// Whether a line may not start with `token` under this rule
    pub fn forbids_lead(&self, token: &str) -> bool {
        match self {
            LocaleRule::Delimited(_) => false,
            LocaleRule::Codepoints { no_lead } => {
                let mut chars = token.chars();
                matches!((chars.next(), chars.next()), (Some(ch), None) if no_lead.contains(&ch))
            }
        }
    }
}

/// A locale-id to wrapping-rule table. Built once and then only read; the
/// engine takes it by reference and never mutates it.
///
/// ```
/// use textbox_layout::{LocaleRule, LocaleTable};
///
/// let locales = LocaleTable::builtin()
///     .with_rule("de_DE", LocaleRule::neutral());
/// assert!(locales.lookup("de_DE").is_ok());
/// assert!(locales.lookup("ko_KR").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LocaleTable {
    rules: HashMap<String, LocaleRule>,
    fallback: LocaleRule,
}

impl LocaleTable {
    /// The built-in table, holding `"C"` (space-delimited) and `"ja_JP"`
    pub fn builtin() -> LocaleTable {
        let mut rules = HashMap::new();
        rules.insert("C".to_string(), LocaleRule::neutral());
        rules.insert("ja_JP".to_string(), LocaleRule::japanese());
        LocaleTable {
            rules,
            fallback: LocaleRule::neutral(),
        }
    }

    /// Add or replace the rule for a locale id
    pub fn with_rule(mut self, id: impl Into<String>, rule: LocaleRule) -> LocaleTable {
        self.rules.insert(id.into(), rule);
        self
    }

    /// Get the rule for a locale id, failing when the id is unknown
    pub fn lookup(&self, id: &str) -> Result<&LocaleRule, LayoutError> {
        self.rules
            .get(id)
            .ok_or_else(|| LayoutError::UnknownLocale(id.to_string()))
    }

    /// Get the rule for a locale id, falling back to the neutral
    /// space-delimited rule when the id is unknown
    pub fn rule_for(&self, id: &str) -> &LocaleRule {
        self.rules.get(id).unwrap_or(&self.fallback)
    }
}

impl Default for LocaleTable {
    fn default() -> LocaleTable {
        LocaleTable::builtin()
    }
}
