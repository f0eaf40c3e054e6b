use std::fmt;

/// Failure parsing a single `--info=` or `--debug=` flag token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FlagParseError {
    /// The alphabetic prefix did not name a known flag.
    UnknownFlag(String),
    /// The numeric suffix was not a valid level.
    InvalidLevel(String),
}

impl fmt::Display for FlagParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFlag(token) => write!(f, "unknown flag name: {token}"),
            Self::InvalidLevel(token) => write!(f, "invalid flag level in {token:?}"),
        }
    }
}

impl std::error::Error for FlagParseError {}

/// Splits a flag token like `name2` into its alphabetic name and optional level digits.
pub(crate) fn split_flag_token(token: &str) -> Result<(&str, Option<u8>), FlagParseError> {
    let digits_at = token
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit())
        .map(|(index, _)| index);

    match digits_at {
        None => Ok((token, None)),
        Some(index) => {
            let (name, digits) = token.split_at(index);
            let level = digits
                .parse::<u8>()
                .map_err(|_| FlagParseError::InvalidLevel(token.to_string()))?;
            Ok((name, Some(level)))
        }
    }
}
