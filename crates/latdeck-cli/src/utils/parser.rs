use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid assignment '{0}'. Expected KEY=VALUE.")]
    MissingSeparator(String),

    #[error("Empty key in assignment '{0}'.")]
    EmptyKey(String),
}

/// Splits a `KEY=VALUE` argument as used by `--set` and `--set-file`.
///
/// The key is trimmed; the value is kept verbatim (replacement text may
/// legitimately start or end with whitespace).
pub fn parse_assignment(input: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(input.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(input.to_string()));
    }
    Ok((key, value))
}
