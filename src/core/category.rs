//! Message category definitions

use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a status message, deciding its prefix and color
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    Debug,
    Err,
    /// Err, and the process terminates after logging
    ErrX,
    Good,
    Info,
    #[default]
    Msg,
    SubInfo,
    Warn,
    /// Caller-defined category, rendered without color
    Custom(u32),
}

impl Category {
    /// Every built-in category, in declaration order
    pub const BUILTIN: [Category; 8] = [
        Category::Debug,
        Category::Err,
        Category::ErrX,
        Category::Good,
        Category::Info,
        Category::Msg,
        Category::SubInfo,
        Category::Warn,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Category::Debug => "DEBUG",
            Category::Err => "ERR",
            Category::ErrX => "ERRX",
            Category::Good => "GOOD",
            Category::Info => "INFO",
            Category::Msg => "MSG",
            Category::SubInfo => "SUBINFO",
            Category::Warn => "WARN",
            Category::Custom(_) => "CUSTOM",
        }
    }

    /// Semantic color applied to the prefix, `None` for plain categories
    pub fn color(&self) -> Option<Color> {
        match self {
            Category::Debug => Some(Color::Magenta),
            Category::Err | Category::ErrX => Some(Color::Red),
            Category::Good => Some(Color::Green),
            Category::Info => Some(Color::Blue),
            Category::SubInfo => Some(Color::Cyan),
            Category::Warn => Some(Color::Yellow),
            Category::Msg | Category::Custom(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Category::ErrX)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Custom(id) => write!(f, "CUSTOM({})", id),
            other => write!(f, "{}", other.to_str()),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        let upper = s.trim().to_uppercase();
        match upper.as_str() {
            "DEBUG" => Ok(Category::Debug),
            "ERR" | "ERROR" => Ok(Category::Err),
            "ERRX" => Ok(Category::ErrX),
            "GOOD" | "SUCCESS" => Ok(Category::Good),
            "INFO" => Ok(Category::Info),
            "MSG" | "PLAIN" => Ok(Category::Msg),
            "SUBINFO" | "SUB_INFO" => Ok(Category::SubInfo),
            "WARN" | "WARNING" => Ok(Category::Warn),
            _ => upper
                .strip_prefix("CUSTOM(")
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(|id| id.parse::<u32>().ok())
                .map(Category::Custom)
                .ok_or_else(|| format!("Invalid category: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plain_message() {
        assert_eq!(Category::default(), Category::Msg);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("warning".parse::<Category>(), Ok(Category::Warn));
        assert_eq!("Error".parse::<Category>(), Ok(Category::Err));
        assert_eq!("sub_info".parse::<Category>(), Ok(Category::SubInfo));
        assert_eq!("custom(42)".parse::<Category>(), Ok(Category::Custom(42)));
        assert!("custom(x)".parse::<Category>().is_err());
        assert!("verbose".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for category in Category::BUILTIN {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
        assert_eq!(Category::Custom(7).to_string(), "CUSTOM(7)");
    }

    #[test]
    fn test_colors() {
        assert_eq!(Category::Err.color(), Category::ErrX.color());
        assert_eq!(Category::Warn.color(), Some(Color::Yellow));
        assert_eq!(Category::Msg.color(), None);
        assert_eq!(Category::Custom(3).color(), None);
    }

    #[test]
    fn test_only_errx_is_terminal() {
        let terminal: Vec<_> = Category::BUILTIN
            .iter()
            .filter(|c| c.is_terminal())
            .collect();
        assert_eq!(terminal, vec![&Category::ErrX]);
    }
}
