use std::fmt;

/// What the provider is asked about, derived from the location input.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Coordinates { lat: f64, lon: f64 },
    Name(String),
}

impl LocationQuery {
    /// Two comma-separated numbers are coordinates; anything else is a place
    /// name. Returns `None` for blank input.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if let [lat, lon] = parts.as_slice() {
            if let (Some(lat), Some(lon)) = (parse_coordinate(lat), parse_coordinate(lon)) {
                return Some(LocationQuery::Coordinates { lat, lon });
            }
        }

        Some(LocationQuery::Name(trimmed.to_string()))
    }
}

fn parse_coordinate(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationQuery::Coordinates { lat, lon } => write!(f, "{}, {}", lat, lon),
            LocationQuery::Name(name) => f.write_str(name),
        }
    }
}
