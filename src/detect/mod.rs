//! Detection of code smells and generation of improvement suggestions.

mod complexity;
mod smells;
mod suggestions;
mod types;

pub use complexity::{calculate_complexity, ComplexityWeights, MAX_COMPLEXITY};
pub use smells::{
    find_code_smells, find_code_smells_with, SmellConfig, DEFAULT_COMPLEXITY_THRESHOLD,
    DEFAULT_MAX_LINE_LENGTH,
};
pub use suggestions::suggest_improvements;
pub use types::{AnalysisReport, Category, Issue, Metric, Severity, Suggestion};
