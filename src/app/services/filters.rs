//! Close approach filtering
//!
//! Attribute filters over close approaches and their linked NEO. Filters are
//! combined conjunctively by [`NeoDatabase::query`](crate::NeoDatabase::query).
//! Filters on NEO attributes never match an unlinked approach.

use chrono::NaiveDate;
use std::fmt;

use crate::app::models::CloseApproach;

/// A single condition on a close approach
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ApproachFilter {
    /// Approach happened on this calendar date
    Date(NaiveDate),
    /// Approach happened on or after this date
    StartDate(NaiveDate),
    /// Approach happened on or before this date
    EndDate(NaiveDate),
    /// Distance (au) at least this value
    MinDistance(f64),
    /// Distance (au) at most this value
    MaxDistance(f64),
    /// Velocity (km/s) at least this value
    MinVelocity(f64),
    /// Velocity (km/s) at most this value
    MaxVelocity(f64),
    /// NEO diameter (km) at least this value
    MinDiameter(f64),
    /// NEO diameter (km) at most this value
    MaxDiameter(f64),
    /// NEO hazard classification equals this value
    Hazardous(bool),
}

impl ApproachFilter {
    /// Check whether an approach satisfies this filter
    pub fn matches(&self, approach: &CloseApproach) -> bool {
        let date = approach.time.date();
        match *self {
            Self::Date(value) => date == value,
            Self::StartDate(value) => date >= value,
            Self::EndDate(value) => date <= value,
            Self::MinDistance(value) => approach.distance >= value,
            Self::MaxDistance(value) => approach.distance <= value,
            Self::MinVelocity(value) => approach.velocity >= value,
            Self::MaxVelocity(value) => approach.velocity <= value,
            // NaN compares false, so an unknown diameter never matches a bound
            Self::MinDiameter(value) => approach.neo().is_some_and(|neo| neo.diameter >= value),
            Self::MaxDiameter(value) => approach.neo().is_some_and(|neo| neo.diameter <= value),
            Self::Hazardous(value) => approach.neo().is_some_and(|neo| neo.hazardous == value),
        }
    }
}

impl fmt::Display for ApproachFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(value) => write!(f, "date == {}", value),
            Self::StartDate(value) => write!(f, "date >= {}", value),
            Self::EndDate(value) => write!(f, "date <= {}", value),
            Self::MinDistance(value) => write!(f, "distance >= {}", value),
            Self::MaxDistance(value) => write!(f, "distance <= {}", value),
            Self::MinVelocity(value) => write!(f, "velocity >= {}", value),
            Self::MaxVelocity(value) => write!(f, "velocity <= {}", value),
            Self::MinDiameter(value) => write!(f, "diameter >= {}", value),
            Self::MaxDiameter(value) => write!(f, "diameter <= {}", value),
            Self::Hazardous(value) => write!(f, "hazardous == {}", value),
        }
    }
}

/// User-facing query criteria, every field optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    pub velocity_min: Option<f64>,
    pub velocity_max: Option<f64>,
    pub diameter_min: Option<f64>,
    pub diameter_max: Option<f64>,
    pub hazardous: Option<bool>,
}

impl FilterCriteria {
    /// Turn the criteria into the list of filters to apply
    pub fn create_filters(&self) -> Vec<ApproachFilter> {
        let candidates = [
            self.date.map(ApproachFilter::Date),
            self.start_date.map(ApproachFilter::StartDate),
            self.end_date.map(ApproachFilter::EndDate),
            self.distance_min.map(ApproachFilter::MinDistance),
            self.distance_max.map(ApproachFilter::MaxDistance),
            self.velocity_min.map(ApproachFilter::MinVelocity),
            self.velocity_max.map(ApproachFilter::MaxVelocity),
            self.diameter_min.map(ApproachFilter::MinDiameter),
            self.diameter_max.map(ApproachFilter::MaxDiameter),
            self.hazardous.map(ApproachFilter::Hazardous),
        ];
        candidates.into_iter().flatten().collect()
    }

    /// Whether no criteria are set
    pub fn is_empty(&self) -> bool {
        self.create_filters().is_empty()
    }
}

/// Check an approach against every filter
pub fn matches_all(approach: &CloseApproach, filters: &[ApproachFilter]) -> bool {
    filters.iter().all(|filter| filter.matches(approach))
}

/// Yield at most `n` items; `None` or `Some(0)` yields everything
pub fn limit<I>(iter: I, n: Option<usize>) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
{
    let n = match n {
        None | Some(0) => usize::MAX,
        Some(n) => n,
    };
    iter.into_iter().take(n)
}
