use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownLabel;

/// A reporting region. Every series in the dataset belongs to exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Delhi,
    Mumbai,
    Chennai,
    Bangalore,
    Hyderabad,
}

impl Region {
    /// All regions in canonical (selector) order.
    pub const ALL: [Region; 5] = [
        Region::Delhi,
        Region::Mumbai,
        Region::Chennai,
        Region::Bangalore,
        Region::Hyderabad,
    ];

    /// Display label of the region.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Delhi => "Delhi",
            Region::Mumbai => "Mumbai",
            Region::Chennai => "Chennai",
            Region::Bangalore => "Bangalore",
            Region::Hyderabad => "Hyderabad",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = UnknownLabel;

    /// Matches labels exactly, the same way the selector values are emitted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| UnknownLabel::new("region", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_region() {
        for region in Region::ALL {
            assert_eq!(region.as_str().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn test_parse_unknown_region() {
        let err = "Pune".parse::<Region>().unwrap_err();
        assert_eq!(err.kind, "region");
        assert_eq!(err.value, "Pune");
        assert_eq!(err.to_string(), "Unknown region: 'Pune'");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("delhi".parse::<Region>().is_err());
    }
}
