//! Advisory and timeline event types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Point in time at which an advisory event was recorded.
///
/// Serialized as an RFC 3339 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Wrap a UTC datetime.
    #[must_use]
    pub const fn new(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// The Unix epoch, used as the "unset / earliest" timestamp.
    #[must_use]
    pub fn epoch() -> Self {
        Self(DateTime::<Utc>::default())
    }

    /// Timestamp from seconds since the Unix epoch.
    ///
    /// Out-of-range values saturate to the epoch.
    #[must_use]
    pub fn from_unix(secs: i64) -> Self {
        DateTime::from_timestamp(secs, 0).map_or_else(Self::epoch, Self)
    }

    /// Current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// This timestamp shifted by a whole number of days.
    #[must_use]
    pub fn plus_days(self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// The wrapped datetime.
    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::epoch()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// Kind of lifecycle marker recorded on an advisory timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    /// The vulnerability was detected for the package
    Detection,
    /// The vulnerability was confirmed to affect the package
    TruePositiveDetermination,
    /// A fixed package version was released
    Fixed,
    /// The match was determined not to affect the package
    FalsePositiveDetermination,
    /// Nobody intends to analyze the vulnerability further
    AnalysisNotPlanned,
    /// The vulnerability affects the package but will not be fixed
    FixNotPlanned,
    /// A fix is expected from upstream
    PendingUpstreamFix,
}

impl EventType {
    /// All event types, in lifecycle order.
    pub const ALL: [Self; 7] = [
        Self::Detection,
        Self::TruePositiveDetermination,
        Self::Fixed,
        Self::FalsePositiveDetermination,
        Self::AnalysisNotPlanned,
        Self::FixNotPlanned,
        Self::PendingUpstreamFix,
    ];

    /// Serialized name of this event type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Detection => "detection",
            Self::TruePositiveDetermination => "true-positive-determination",
            Self::Fixed => "fixed",
            Self::FalsePositiveDetermination => "false-positive-determination",
            Self::AnalysisNotPlanned => "analysis-not-planned",
            Self::FixNotPlanned => "fix-not-planned",
            Self::PendingUpstreamFix => "pending-upstream-fix",
        }
    }

    /// Whether this event closes out the advisory for the package.
    #[must_use]
    pub const fn is_resolution(&self) -> bool {
        matches!(
            self,
            Self::Fixed | Self::FalsePositiveDetermination | Self::FixNotPlanned
        )
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific payload attached to an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EventData {
    /// Sub-kind, e.g. the detection source or false-positive category
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Package version carrying the fix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_version: Option<String>,
    /// Impact statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
}

/// One immutable entry in an advisory's timeline.
///
/// Events carry no identifier; two events are the same event only when all
/// fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: Timestamp,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EventData>,
}

impl Event {
    /// Create an event without data.
    #[must_use]
    pub const fn new(timestamp: Timestamp, event_type: EventType) -> Self {
        Self {
            timestamp,
            event_type,
            data: None,
        }
    }

    /// Attach type-specific data.
    #[must_use]
    pub fn with_data(mut self, data: EventData) -> Self {
        self.data = Some(data);
        self
    }
}

/// Tracked handling of one vulnerability identifier for a package.
///
/// Equality is structural: aliases compare as a set, events compare as an
/// ordered sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub id: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub aliases: BTreeSet<String>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Advisory {
    /// Create an advisory with no aliases and an empty timeline.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            aliases: BTreeSet::new(),
            events: Vec::new(),
        }
    }

    /// Add an alias identifier.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.insert(alias.into());
        self
    }

    /// Append an event to the timeline.
    #[must_use]
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// The most recent event by timestamp. Ties go to the later position.
    #[must_use]
    pub fn latest_event(&self) -> Option<&Event> {
        self.events.iter().max_by_key(|e| e.timestamp)
    }

    /// Whether the latest event resolves the advisory.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.latest_event()
            .is_some_and(|e| e.event_type.is_resolution())
    }
}
