use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Construction heuristic used to build an initial allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Method {
    #[serde(rename = "Northwest Corner")]
    NorthwestCorner,
    #[serde(rename = "Least Cost")]
    LeastCost,
}

impl Method {
    /// Human-readable name, as shown in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Method::NorthwestCorner => "Northwest Corner",
            Method::LeastCost => "Least Cost",
        }
    }

    pub fn all() -> [Method; 2] {
        [Method::NorthwestCorner, Method::LeastCost]
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown method '{0}', expected 'northwest' or 'least-cost'")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "northwest" | "northwest-corner" | "nwc" => Ok(Method::NorthwestCorner),
            "least-cost" | "leastcost" | "lcm" => Ok(Method::LeastCost),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Method::NorthwestCorner.label(), "Northwest Corner");
        assert_eq!(Method::LeastCost.to_string(), "Least Cost");
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Method::LeastCost).unwrap();
        assert_eq!(json, "\"Least Cost\"");
    }

    #[test]
    fn test_parse() {
        assert_eq!("northwest".parse::<Method>().unwrap(), Method::NorthwestCorner);
        assert_eq!("LCM".parse::<Method>().unwrap(), Method::LeastCost);
        assert!("vogel".parse::<Method>().is_err());
    }
}
