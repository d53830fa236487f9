use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownLabel;

/// A tracked disease.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Disease {
    Flu,
    Dengue,
    #[serde(rename = "COVID-19")]
    Covid19,
}

impl Disease {
    /// All diseases in canonical (selector) order.
    pub const ALL: [Disease; 3] = [Disease::Flu, Disease::Dengue, Disease::Covid19];

    pub fn as_str(&self) -> &'static str {
        match self {
            Disease::Flu => "Flu",
            Disease::Dengue => "Dengue",
            Disease::Covid19 => "COVID-19",
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Disease {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Disease::ALL
            .into_iter()
            .find(|disease| disease.as_str() == s)
            .ok_or_else(|| UnknownLabel::new("disease", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covid_label() {
        assert_eq!(Disease::Covid19.to_string(), "COVID-19");
        assert_eq!("COVID-19".parse::<Disease>().unwrap(), Disease::Covid19);
        assert!("Covid19".parse::<Disease>().is_err());
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&Disease::ALL).unwrap();
        assert_eq!(json, r#"["Flu","Dengue","COVID-19"]"#);
    }
}
