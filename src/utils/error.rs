use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ModelError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ModelError::Validation(e) => format!("Input rejected: {}", e.summary()),
            ModelError::Serialization(e) => format!("Input is not valid JSON: {}", e),
            ModelError::Io(e) => format!("Could not read input: {}", e),
            ModelError::InvalidConfigValue { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            ModelError::Validation(_) => 1,
            ModelError::Serialization(_) | ModelError::Io(_) => 2,
            ModelError::InvalidConfigValue { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

/// What went wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    WrongType {
        expected: &'static str,
        found: String,
    },
    /// The input itself was not a mapping.
    ModelType { found: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Dotted location, e.g. `id` or `1.second_name` inside a list.
    pub loc: String,
    pub kind: IssueKind,
}

impl FieldIssue {
    pub fn missing(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            kind: IssueKind::Missing,
        }
    }

    pub fn wrong_type(loc: impl Into<String>, expected: &'static str, found: String) -> Self {
        Self {
            loc: loc.into(),
            kind: IssueKind::WrongType { expected, found },
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self.kind, IssueKind::Missing)
    }

    fn message(&self) -> String {
        match &self.kind {
            IssueKind::Missing => "Field required".to_string(),
            IssueKind::WrongType { expected, found } => {
                format!("Input should be a valid {} [input_value={}]", expected, found)
            }
            IssueKind::ModelType { found } => format!(
                "Input should be a valid dictionary or instance of the model [input_value={}]",
                found
            ),
        }
    }
}

/// Every issue found while building one record (or one list of records).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub model: &'static str,
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(model: &'static str, issues: Vec<FieldIssue>) -> Self {
        Self { model, issues }
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn find(&self, loc: &str) -> Option<&FieldIssue> {
        self.issues.iter().find(|issue| issue.loc == loc)
    }

    /// Prefixes every location with `index`, used when validating lists.
    pub fn at_index(mut self, index: usize) -> Self {
        for issue in &mut self.issues {
            issue.loc = if issue.loc.is_empty() {
                index.to_string()
            } else {
                format!("{}.{}", index, issue.loc)
            };
        }
        self
    }

    fn summary(&self) -> String {
        let fields: Vec<&str> = self.issues.iter().map(|i| i.loc.as_str()).collect();
        format!("{} ({})", self.model, fields.join(", "))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.issues.len();
        write!(
            f,
            "{} validation error{} for {}",
            count,
            if count == 1 { "" } else { "s" },
            self.model
        )?;
        for issue in &self.issues {
            let loc = if issue.loc.is_empty() {
                "__root__"
            } else {
                &issue.loc
            };
            write!(f, "\n{}\n  {}", loc, issue.message())?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
