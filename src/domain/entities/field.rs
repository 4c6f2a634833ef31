//! Keys of the login form's error map.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// A named slot in [`super::ErrorState`].
///
/// `Username` and `Password` are editable inputs; `Server` only ever holds the
/// form-level authentication failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Username,
    Password,
    Server,
}

impl Field {
    /// Fields the user can type into, in display order.
    pub const INPUTS: [Field; 2] = [Field::Username, Field::Password];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Password => "password",
            Field::Server => "server",
        }
    }

    /// Visible label of the input, `None` for `Server`.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Field::Username => Some("Username"),
            Field::Password => Some("Password"),
            Field::Server => None,
        }
    }

    pub fn is_input(self) -> bool {
        !matches!(self, Field::Server)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(Field::Username),
            "password" => Ok(Field::Password),
            "server" => Ok(Field::Server),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!("username".parse::<Field>(), Ok(Field::Username));
        assert_eq!("password".parse::<Field>(), Ok(Field::Password));
        assert_eq!("server".parse::<Field>(), Ok(Field::Server));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "Username".parse::<Field>(),
            Err(FormError::UnknownField("Username".to_string()))
        );
        assert!("email".parse::<Field>().is_err());
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&Field::Password).unwrap();
        assert_eq!(json, "\"password\"");
    }

    #[test]
    fn test_inputs_exclude_server() {
        assert!(Field::INPUTS.iter().all(|f| f.is_input()));
        assert!(!Field::Server.is_input());
        assert_eq!(Field::Server.label(), None);
    }
}
