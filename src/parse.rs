use crate::error::{ParseError, ParseErrorKind};
use crate::types::Har;

/// Parse a JSON string into an unvalidated HAR model.
///
/// Performs JSON deserialization and type mapping only; whether required
/// attributes are present is the validator's concern. Unknown fields are
/// ignored, and `null` elements inside lists are preserved positionally.
///
/// Blank input and a bare `null` root both yield `Ok(None)`, matching lenient
/// readers that produce an absent root for empty sources.
pub fn parse(input: &str) -> Result<Option<Har>, ParseError> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str::<Option<Har>>(input).map_err(|e| ParseError {
        kind: classify_json_error(&e),
        message: e.to_string(),
        line: Some(e.line()).filter(|&l| l != 0),
        column: Some(e.column()).filter(|&c| c != 0),
    })
}

fn classify_json_error(err: &serde_json::Error) -> ParseErrorKind {
    if err.is_data() {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}
