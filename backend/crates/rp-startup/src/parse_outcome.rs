use serde_json::Value;

/// Result of deserializing the persisted user record.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed(Value),
    Failed(String),
}

impl ParseOutcome {
    /// Parse the raw stored value.
    ///
    /// An absent value parses like the literal `null`, so it is
    /// `Parsed(Value::Null)` and never a failure. Nesting deeper than
    /// serde_json's 128 levels is reported as `Failed`.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Parsed(Value::Null),
            Some(text) => match serde_json::from_str::<Value>(text) {
                Ok(value) => Self::Parsed(value),
                Err(e) => Self::Failed(e.to_string()),
            },
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The user value to hand to the application. Failures and `null` give `None`.
    pub fn into_user(self) -> Option<Value> {
        match self {
            Self::Parsed(Value::Null) | Self::Failed(_) => None,
            Self::Parsed(value) => Some(value),
        }
    }
}
