use serde::Serialize;

/// Nursing position. The field is optional on an entry: a missing position
/// means "not recorded", which is a valid state and not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Cradle,
    Clutch,
    Lying,
}

impl Position {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Position::Cradle => "CRADLE",
            Position::Clutch => "CLUTCH",
            Position::Lying => "LYING",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "CRADLE" => Some(Position::Cradle),
            "CLUTCH" => Some(Position::Clutch),
            "LYING" => Some(Position::Lying),
            _ => None,
        }
    }

    /// Helper: convert input from the CLI (any case)
    pub fn from_code(code: &str) -> Option<Self> {
        Position::from_db_str(&code.to_uppercase())
    }

    /// Lowercase display label
    pub fn label(&self) -> &'static str {
        match self {
            Position::Cradle => "cradle",
            Position::Clutch => "clutch",
            Position::Lying => "lying",
        }
    }
}
