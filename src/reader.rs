//! Read pipeline composing the deserialization adapter and the validator.

use crate::error::HarError;
use crate::parse::parse;
use crate::types::Log;
use crate::validate::check_required_attributes;

/// Read a HAR document and return its inner log.
///
/// With `check_required` set, the full archive (not just the log) is checked
/// after parsing, so a missing `log` is reported through the same mechanism
/// as any nested attribute. Without it, the log is returned as parsed, which
/// may be `None` when the source lacks a `log` key or is empty.
///
/// # Errors
///
/// Returns [`HarError::Parse`] for syntactically invalid input, and
/// [`HarError::Required`] for the first missing required attribute when
/// `check_required` is set.
///
/// # Example
///
/// ```rust
/// // An empty object parses fine but has no log.
/// assert!(har::read("{}", false).unwrap().is_none());
/// assert!(har::read("{}", true).is_err());
/// ```
pub fn read(input: &str, check_required: bool) -> Result<Option<Log>, HarError> {
    let har = parse(input).map_err(HarError::Parse)?;
    if check_required {
        check_required_attributes(har.as_ref()).map_err(HarError::Required)?;
    }
    Ok(har.and_then(|har| har.log))
}
