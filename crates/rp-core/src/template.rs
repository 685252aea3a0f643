//! Naming templates and their placeholders.
//!
//! A template such as `StudentCode_FullName_WorkPlan.pdf` is a sequence of
//! placeholder tokens and literal text. Tokenizing is longest-token-first, so
//! overlapping names never shadow each other. Compiling the parts into a
//! regex happens in `rp-audit`; this crate stays free of matching engines.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Category;

/// Pattern shared by every free-text name placeholder.
const NAME_PATTERN: &str = r"\w+(?:\s\w+)*";

/// A named slot in a naming template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    StudentCode,
    SupervisorCode,
    SupervisorName,
    ReviewerCode,
    ReviewerName,
    FullName,
    MonitoringLog,
    WorkPlan,
}

impl Placeholder {
    pub const ALL: [Self; 8] = [
        Self::StudentCode,
        Self::SupervisorCode,
        Self::SupervisorName,
        Self::ReviewerCode,
        Self::ReviewerName,
        Self::FullName,
        Self::MonitoringLog,
        Self::WorkPlan,
    ];

    /// Token as written inside a template string.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::StudentCode => "StudentCode",
            Self::SupervisorCode => "SupervisorCode",
            Self::SupervisorName => "SupervisorName",
            Self::ReviewerCode => "ReviewerCode",
            Self::ReviewerName => "ReviewerName",
            Self::FullName => "FullName",
            Self::MonitoringLog => "MonitoringLog",
            Self::WorkPlan => "WorkPlan",
        }
    }

    /// Regex fragment the token expands to.
    ///
    /// The two fixed-phrase placeholders expand to their phrase, which holds
    /// only letters and spaces and needs no escaping.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::StudentCode => r"\p{L}{1,2}\d{5}",
            Self::SupervisorCode | Self::ReviewerCode => r"\w",
            Self::SupervisorName | Self::ReviewerName | Self::FullName => NAME_PATTERN,
            Self::MonitoringLog => Category::MonitoringLog.discriminator(),
            Self::WorkPlan => Category::WorkPlan.discriminator(),
        }
    }

    /// The longest placeholder token that `text` starts with.
    #[must_use]
    pub fn longest_prefix_of(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .filter(|placeholder| text.starts_with(placeholder.token()))
            .max_by_key(|placeholder| placeholder.token().len())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One piece of a tokenized template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    Literal(String),
    Placeholder(Placeholder),
}

/// Split a template string into literal text and placeholders.
#[must_use]
pub fn parse_template(template: &str) -> Vec<TemplatePart> {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut rest = template;

    while !rest.is_empty() {
        if let Some(placeholder) = Placeholder::longest_prefix_of(rest) {
            if !literal.is_empty() {
                parts.push(TemplatePart::Literal(std::mem::take(&mut literal)));
            }
            parts.push(TemplatePart::Placeholder(placeholder));
            rest = &rest[placeholder.token().len()..];
            continue;
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            literal.push(ch);
        }
        rest = chars.as_str();
    }

    if !literal.is_empty() {
        parts.push(TemplatePart::Literal(literal));
    }
    parts
}

/// A document category paired with its naming template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NamingTemplate {
    pub category: Category,
    pub template: String,
}

impl NamingTemplate {
    #[must_use]
    pub fn for_category(category: Category) -> Self {
        Self {
            category,
            template: category.template().to_string(),
        }
    }

    /// The four fixed templates, in category priority order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        Category::ALL.into_iter().map(Self::for_category).collect()
    }

    #[must_use]
    pub fn parts(&self) -> Vec<TemplatePart> {
        parse_template(&self.template)
    }
}
