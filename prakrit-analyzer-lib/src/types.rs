use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammatical person carried by an ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
    /// Past-tense endings do not distinguish person.
    All,
}

/// Grammatical number carried by an ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Present,
    Future,
    Past,
}

/// Writing system of a piece of input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Devanagari,
    /// Harvard-Kyoto romanization, the working alphabet of the analyzer.
    #[serde(rename = "hk")]
    Romanized,
}

macro_rules! display_as_str {
    ($ty:ty { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

display_as_str!(Person { First => "first", Second => "second", Third => "third", All => "all" });
display_as_str!(Number { Singular => "singular", Plural => "plural", All => "all" });
display_as_str!(Tense { Present => "present", Future => "future", Past => "past" });
display_as_str!(Script { Devanagari => "devanagari", Romanized => "hk" });

/// One row of the ending table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ending {
    pub pattern: &'static str,
    pub person: Person,
    pub number: Number,
    pub tense: Tense,
    pub base_confidence: f64,
}

/// A verbal prefix and its Sanskrit cognate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRule {
    pub surface: &'static str,
    pub cognate: &'static str,
}

/// One hypothesis for how a verb form decomposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisCandidate {
    pub person: Person,
    pub number: Number,
    pub tense: Tense,
    pub base_confidence: f64,
    /// The stem left after removing prefix and ending. For attested forms
    /// this is the attested root.
    pub potential_root: String,
    /// The root this reading is attributed to, if any is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Longest known root found inside the stem by the guessing passes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_cognate: Option<String>,
    pub ending_matched: String,
    #[serde(default)]
    pub sandhi_applied: bool,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// Anusvāra remark for `nti`/`nte` readings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_note: Option<String>,
}

/// Ranked candidates for one form, best first. Empty means no analysis.
pub type AnalysisResult = Vec<AnalysisCandidate>;

/// Coarse reading of a confidence score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reliability {
    High,
    Medium,
    Low,
}

impl fmt::Display for Reliability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Reliability::High => "High confidence analysis",
            Reliability::Medium => "Medium confidence analysis",
            Reliability::Low => "Low confidence analysis - please verify",
        };
        f.write_str(text)
    }
}

/// A candidate decorated for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    #[serde(flatten)]
    pub candidate: AnalysisCandidate,
    pub reliability: Reliability,
    /// Human-readable remarks about prefix, sandhi and tense.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub explanations: Vec<String>,
}

/// Everything reported back for one user input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub original_form: String,
    pub script: Script,
    /// The romanized form actually analyzed, when it differs in script from the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hk_form: Option<String>,
    pub results: Vec<ReportEntry>,
}

/// Reference data as embedded by build.rs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedData {
    pub roots: Vec<String>,
    pub forms: BTreeMap<String, Vec<String>>,
}
