use std::fmt::Display;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct DateTime {
    delegate: chrono::DateTime<chrono::Utc>,
}

impl DateTime {
    fn new(delegate: chrono::DateTime<chrono::Utc>) -> Self {
        Self { delegate }
    }

    pub fn now() -> Self {
        Self::new(chrono::Utc::now())
    }

    pub fn from_iso(iso8601: &str) -> anyhow::Result<Self> {
        Ok(Self::new(
            chrono::DateTime::parse_from_rfc3339(iso8601)?.with_timezone(&chrono::Utc),
        ))
    }

    pub fn to_iso_string(&self) -> String {
        self.delegate.to_rfc3339()
    }

    //relative to the given reference point, e.g. "5 minutes ago"
    pub fn to_human_readable_since(&self, now: DateTime) -> String {
        chrono_humanize::HumanTime::from(self.delegate - now.delegate).to_string()
    }

    pub fn to_human_readable(&self) -> String {
        self.to_human_readable_since(Self::now())
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DateTime {
    fn from(delegate: chrono::DateTime<chrono::Utc>) -> Self {
        Self::new(delegate)
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.delegate)
    }
}
