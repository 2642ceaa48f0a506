//! Filter resolution.
//!
//! Turns free-text query values into typed predicates. A value that cannot be parsed is a
//! `MalformedFilter`: it is logged at debug level and the filter is left out, which leaves
//! the collection unfiltered for that key. Empty values count as absent. The data layer
//! combines all present predicates with AND.

use chrono::{DateTime, FixedOffset, Utc};
use thiserror::Error;

use crate::server::{
    query::QueryMap,
    util::parse::{day_window, parse_calendar_date, parse_id_list, search_key},
};

/// A filter value that could not be understood. Never surfaced to the client.
#[derive(Error, Debug, PartialEq)]
pub enum MalformedFilter {
    #[error("filter {key}={value:?} is not a YYYY-MM-DD date")]
    Date { key: &'static str, value: String },

    #[error("filter {key}={value:?} is not a comma separated list of ids")]
    IdList { key: &'static str, value: String },
}

/// Half-open UTC range `[start, end)` covering one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteFilter {
    /// Lowercased fragment of the source station name.
    pub source: Option<String>,
    /// Lowercased fragment of the destination station name.
    pub destination: Option<String>,
}

impl RouteFilter {
    pub fn resolve(query: &QueryMap) -> Self {
        Self {
            source: substring(query, "source"),
            destination: substring(query, "destination"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainFilter {
    pub train_type: Option<Vec<i32>>,
    pub name: Option<String>,
}

impl TrainFilter {
    pub fn resolve(query: &QueryMap) -> Self {
        Self {
            train_type: absorb(id_set(query, "train_type")),
            name: substring(query, "train_name"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JourneyFilter {
    pub departure: Option<DateWindow>,
    pub arrival: Option<DateWindow>,
    pub source: Option<String>,
    pub destination: Option<String>,
}

impl JourneyFilter {
    pub fn resolve(query: &QueryMap, offset: FixedOffset) -> Self {
        Self {
            departure: absorb(date(query, "departure_time", offset)),
            arrival: absorb(date(query, "arrival_time", offset)),
            source: substring(query, "source"),
            destination: substring(query, "destination"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub created: Option<DateWindow>,
}

impl OrderFilter {
    pub fn resolve(query: &QueryMap, offset: FixedOffset) -> Self {
        Self {
            created: absorb(date(query, "created_at", offset)),
        }
    }
}

fn value<'a>(query: &'a QueryMap, key: &str) -> Option<&'a str> {
    query
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn substring(query: &QueryMap, key: &str) -> Option<String> {
    value(query, key).map(search_key)
}

fn id_set(query: &QueryMap, key: &'static str) -> Result<Option<Vec<i32>>, MalformedFilter> {
    value(query, key)
        .map(|raw| {
            parse_id_list(raw).map_err(|_| MalformedFilter::IdList {
                key,
                value: raw.to_string(),
            })
        })
        .transpose()
}

fn date(
    query: &QueryMap,
    key: &'static str,
    offset: FixedOffset,
) -> Result<Option<DateWindow>, MalformedFilter> {
    let Some(raw) = value(query, key) else {
        return Ok(None);
    };

    let malformed = || MalformedFilter::Date {
        key,
        value: raw.to_string(),
    };

    let date = parse_calendar_date(raw).map_err(|_| malformed())?;
    let (start, end) = day_window(date, offset).ok_or_else(malformed)?;

    Ok(Some(DateWindow { start, end }))
}

/// Drops a malformed filter after logging it.
fn absorb<T>(resolved: Result<Option<T>, MalformedFilter>) -> Option<T> {
    resolved.unwrap_or_else(|e| {
        tracing::debug!("Ignoring {}", e);
        None
    })
}
