pub mod types;
pub mod error;
pub mod endings;
pub mod phonology;
pub mod sandhi;
pub mod prefix;
pub mod dictionary;
pub mod confidence;
pub mod morphology;
pub mod script;
pub mod request;
pub mod output;

pub use dictionary::Dictionary;
pub use error::{AnalysisError, ErrorReport, LoadError};
pub use morphology::analyze;
pub use request::analyze_input;
pub use types::{AnalysisCandidate, AnalysisResult, Report, ReportEntry, Script};
