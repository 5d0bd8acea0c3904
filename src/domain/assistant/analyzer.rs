//! Pattern matching over assistant replies.
//!
//! Two regulation-code patterns coexist. The loose one reports every code
//! shape cited in the reply; the strict one only keeps SCFI codes that are
//! followed by a parenthesized description, and feeds the stored product
//! record.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static REGULATION_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"NOM-\d{3}-[A-Z]+-\d{4}").expect("valid regulation code regex"));

static SCFI_CITATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)NOM-\d{3}-SCFI-\d{4}\s+\(.*?\)").expect("valid SCFI citation regex")
});

static MARKER_ES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Información\s+de\s+importación\s+para").expect("valid Spanish marker regex")
});

static MARKER_EN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Import\s+information\s+for").expect("valid English marker regex"));

const COMPLIANCE_PROGRAM: &str = "COFEPRIS";

/// Whether the sanitary compliance program applies to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CofeprisStatus {
    #[serde(rename = "Aplica")]
    Applies,
    #[serde(rename = "No Aplica")]
    DoesNotApply,
}

impl CofeprisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CofeprisStatus::Applies => "Aplica",
            CofeprisStatus::DoesNotApply => "No Aplica",
        }
    }

    /// Parses the stored text form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Aplica" => Some(CofeprisStatus::Applies),
            "No Aplica" => Some(CofeprisStatus::DoesNotApply),
            _ => None,
        }
    }
}

impl std::fmt::Display for CofeprisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the analyzer learns from one reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyAnalysis {
    /// Every regulation code cited, in order, duplicates kept.
    pub cited_codes: Vec<String>,
    /// Present only when the reply is a formatted import answer.
    pub formatted: Option<FormattedAnswer>,
}

/// Extraction inputs found in a formatted import answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedAnswer {
    /// SCFI citations including their parenthesized descriptions.
    pub scfi_citations: Vec<String>,
    pub cofepris: CofeprisStatus,
}

/// Stateless analyzer over reply text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseAnalyzer;

impl ResponseAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, reply: &str) -> ReplyAnalysis {
        let formatted = self.is_formatted_answer(reply).then(|| FormattedAnswer {
            scfi_citations: self.scfi_citations(reply),
            cofepris: self.cofepris_status(reply),
        });

        ReplyAnalysis {
            cited_codes: self.regulation_codes(reply),
            formatted,
        }
    }

    /// All `NOM-###-LETTERS-####` substrings in order of appearance.
    pub fn regulation_codes(&self, reply: &str) -> Vec<String> {
        REGULATION_CODE
            .find_iter(reply)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Case-insensitive `NOM-###-SCFI-#### (description)` citations.
    pub fn scfi_citations(&self, reply: &str) -> Vec<String> {
        SCFI_CITATION
            .find_iter(reply)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// True if either localized marker phrase appears.
    pub fn is_formatted_answer(&self, reply: &str) -> bool {
        MARKER_ES.is_match(reply) || MARKER_EN.is_match(reply)
    }

    pub fn cofepris_status(&self, reply: &str) -> CofeprisStatus {
        if reply.contains(COMPLIANCE_PROGRAM) {
            CofeprisStatus::Applies
        } else {
            CofeprisStatus::DoesNotApply
        }
    }
}
