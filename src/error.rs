use std::fmt;

/// Error kind for parse failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    Syntax,
    TypeMismatch,
}

/// Produced by `parse` when JSON deserialization fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "{}:{}: {}", line, col, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ParseError {}

/// One missing required attribute found by the validator, identified by the
/// owning object's path and the attribute's name.
///
/// Two values are equal iff both the parent path and the attribute match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RequiredAttribute {
    /// Dotted/indexed path of the object that owns the attribute, e.g.
    /// `log.entries[1].request`. The root's parent is the empty string.
    pub parent: String,
    /// Name of the attribute that is required but not set.
    pub attribute: String,
}

impl RequiredAttribute {
    pub fn new(parent: &str, attribute: &str) -> Self {
        RequiredAttribute {
            parent: parent.to_string(),
            attribute: attribute.to_string(),
        }
    }
}

impl fmt::Display for RequiredAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RequiredAttribute{{parent='{}', attribute='{}'}}",
            self.parent, self.attribute
        )
    }
}

/// Produced by `check_required_attributes` for the first missing required
/// attribute in canonical walk order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeRequiredError {
    /// Dotted/indexed path of the object that owns the attribute.
    pub path: String,
    /// Name of the attribute that is required but not set.
    pub attribute: String,
}

impl fmt::Display for AttributeRequiredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The object \"{}\" requires the attribute \"{}\".",
            self.path, self.attribute
        )
    }
}

impl std::error::Error for AttributeRequiredError {}

/// Combined error type for the `read` entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HarError {
    Parse(ParseError),
    Required(AttributeRequiredError),
}

impl fmt::Display for HarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarError::Parse(e) => write!(f, "Parse error: {}", e),
            HarError::Required(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for HarError {}
