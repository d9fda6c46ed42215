//! Error types for the towerindex system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::kind::EntityKind;

/// The main error type for towerindex operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a not-found error for a token that did not resolve.
    #[must_use]
    pub fn not_found(token: impl Into<String>, expected: Option<EntityKind>) -> Self {
        Self::new(ErrorKind::NotFound {
            token: token.into(),
            expected,
        })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument {
            argument,
            message: message.into(),
        })
    }

    /// Creates a conflict error between two values of the same kind.
    #[must_use]
    pub fn conflict(kind: EntityKind, left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict {
            kind,
            left: left.into(),
            right: right.into(),
        })
    }

    /// Creates an unknown tower error.
    #[must_use]
    pub fn unknown_tower(tower: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownTower(tower.into()))
    }

    /// Creates an invalid upgrade set error.
    #[must_use]
    pub fn invalid_upgrade_set(upgrade_set: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidUpgradeSet(upgrade_set.into()))
    }

    /// Creates an error for a tier price missing from the cost table.
    #[must_use]
    pub fn incomplete_cost_table(tower: impl Into<String>, path: u8, tier: u8) -> Self {
        Self::new(ErrorKind::IncompleteCostTable {
            tower: tower.into(),
            path,
            tier,
        })
    }

    /// Creates an error for a cost total too large to represent.
    #[must_use]
    pub fn cost_overflow(tower: impl Into<String>) -> Self {
        Self::new(ErrorKind::CostOverflow(tower.into()))
    }

    /// Creates a malformed corpus error.
    #[must_use]
    pub fn malformed_corpus(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedCorpus(message.into()))
    }

    /// Creates a deserialization error for the given data format.
    #[must_use]
    pub fn deserialize(format: &'static str, message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Deserialize {
            format,
            message: message.to_string(),
        })
    }

    /// Returns true if this is an expected "no match" outcome.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Token did not canonicalize or matched nothing permitted.
    #[error("no match for `{token}`{}", expected_suffix(.expected.as_ref()))]
    NotFound {
        /// The offending token.
        token: String,
        /// The kind the caller was looking for, if any.
        expected: Option<EntityKind>,
    },

    /// Structurally invalid path, tier, or upgrade argument.
    #[error("invalid argument `{argument}`: {message}")]
    InvalidArgument {
        /// Name of the argument.
        argument: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// Two inputs disagree on the same entity kind.
    #[error("conflicting {kind} values: `{left}` and `{right}`")]
    Conflict {
        /// The contested kind.
        kind: EntityKind,
        /// Value from the left-hand input.
        left: String,
        /// Value from the right-hand input.
        right: String,
    },

    /// Tower is absent from the cost table.
    #[error("unknown tower: {0}")]
    UnknownTower(String),

    /// Upgrade set failed validation.
    #[error("invalid upgrade set: {0}")]
    InvalidUpgradeSet(String),

    /// Cost table is missing a tier cost the computation needs.
    #[error("cost table for {tower} has no cost for path {path} tier {tier}")]
    IncompleteCostTable {
        /// Tower whose entry is incomplete.
        tower: String,
        /// 1-based path.
        path: u8,
        /// 1-based tier.
        tier: u8,
    },

    /// A cost total does not fit in a `u64`.
    #[error("cost of {0} overflows")]
    CostOverflow(String),

    /// Alias corpus or registry configuration is malformed.
    #[error("malformed alias corpus: {0}")]
    MalformedCorpus(String),

    /// Static data failed to deserialize.
    #[error("failed to parse {format}: {message}")]
    Deserialize {
        /// Data format (toml, json).
        format: &'static str,
        /// Deserializer message.
        message: String,
    },
}

fn expected_suffix(expected: Option<&EntityKind>) -> String {
    match expected {
        Some(kind) => format!(" (expected {kind})"),
        None => String::new(),
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or data set name.
    pub source: Option<String>,
    /// Records or calls leading to the error, outermost first.
    pub frames: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frames.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        for frame in &self.frames {
            write!(f, "\n  at {frame}")?;
        }
        Ok(())
    }
}
