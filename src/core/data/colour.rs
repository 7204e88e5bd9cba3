use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourParseError {
    WrongLength { input: String },
    MissingHash { input: String },
    InvalidHexDigits { input: String },
}

impl fmt::Display for ColourParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { input } => {
                write!(f, "colour must be 7 characters (#RRGGBB): {:?}", input)
            }
            Self::MissingHash { input } => {
                write!(f, "colour must start with '#': {:?}", input)
            }
            Self::InvalidHexDigits { input } => {
                write!(f, "colour must be 6 hex digits after '#': {:?}", input)
            }
        }
    }
}

impl Error for ColourParseError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Parses a `#RRGGBB` string: exactly 7 characters, leading `#`, six
    /// hex digits. Anything else is rejected.
    pub fn from_hex(input: &str) -> Result<Self, ColourParseError> {
        if input.len() != 7 {
            return Err(ColourParseError::WrongLength {
                input: input.to_string(),
            });
        }

        let Some(digits) = input.strip_prefix('#') else {
            return Err(ColourParseError::MissingHash {
                input: input.to_string(),
            });
        };

        // from_str_radix tolerates a leading sign, so check the digits first
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColourParseError::InvalidHexDigits {
                input: input.to_string(),
            });
        }

        let parse_channel = |range| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColourParseError::InvalidHexDigits {
                input: input.to_string(),
            })
        };

        Ok(Self {
            r: parse_channel(0..2)?,
            g: parse_channel(2..4)?,
            b: parse_channel(4..6)?,
        })
    }
}
