//! Data models for NEO processing
//!
//! This module contains the two entity types of the system: near-Earth objects
//! loaded from the NEO CSV file and close approaches loaded from the close
//! approach JSON file. A close approach refers to its NEO by designation until
//! the database links it to a shared [`NearEarthObject`].

use crate::constants::{APPROACH_TIME_FORMAT, OUTPUT_TIME_FORMAT};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Near-Earth Object
// =============================================================================

/// A near-Earth object (asteroid or comet)
///
/// Constructed once while loading the NEO file and immutable afterwards. The
/// database shares each object between its approaches through an [`Arc`].
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    /// Primary designation, the join key for close approaches (e.g. "433")
    pub designation: String,

    /// IAU name, absent when the source value is empty
    pub name: Option<String>,

    /// Diameter in kilometres, NaN when unknown
    pub diameter: f64,

    /// Potentially hazardous classification
    pub hazardous: bool,
}

impl NearEarthObject {
    /// Create a new NEO with validation
    ///
    /// An empty name is normalised to `None`.
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: f64,
        hazardous: bool,
    ) -> Result<Self> {
        let neo = Self {
            designation: designation.into(),
            name: name.filter(|n| !n.is_empty()),
            diameter,
            hazardous,
        };

        neo.validate()?;
        Ok(neo)
    }

    /// Validate the designation invariant
    pub fn validate(&self) -> Result<()> {
        if self.designation.trim().is_empty() {
            return Err(Error::data_validation(
                "NEO designation cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Designation followed by the name in parentheses when one exists
    pub fn full_name(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// Name as written to output files (empty when unnamed)
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Diameter when known
    pub fn known_diameter(&self) -> Option<f64> {
        if self.diameter.is_nan() {
            None
        } else {
            Some(self.diameter)
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard = if self.hazardous { "is" } else { "is not" };
        match self.known_diameter() {
            Some(diameter) => write!(
                f,
                "NEO {} has a diameter of {:.3} km and {} potentially hazardous.",
                self.full_name(),
                diameter,
                hazard
            ),
            None => write!(
                f,
                "NEO {} has an unknown diameter and {} potentially hazardous.",
                self.full_name(),
                hazard
            ),
        }
    }
}

// =============================================================================
// Close Approach
// =============================================================================

/// A single close approach of a NEO to Earth
///
/// `neo` is unset after loading and is set exactly once by the linking pass.
#[derive(Debug, Clone)]
pub struct CloseApproach {
    /// Designation of the approaching NEO (foreign key)
    pub designation: String,

    /// Time of closest approach (UTC)
    pub time: NaiveDateTime,

    /// Nominal approach distance in astronomical units
    pub distance: f64,

    /// Relative approach velocity in km/s
    pub velocity: f64,

    neo: Option<Arc<NearEarthObject>>,
}

impl CloseApproach {
    /// Create a new, unlinked close approach with validation
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Result<Self> {
        let approach = Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        };

        if approach.designation.trim().is_empty() {
            return Err(Error::data_validation(
                "Close approach designation cannot be empty".to_string(),
            ));
        }

        Ok(approach)
    }

    /// Link this approach to its NEO
    ///
    /// Fails if the approach is already linked or the designations differ.
    pub fn link(&mut self, neo: Arc<NearEarthObject>) -> Result<()> {
        if self.neo.is_some() {
            return Err(Error::already_linked(&self.designation));
        }
        if neo.designation != self.designation {
            return Err(Error::data_validation(format!(
                "Cannot link approach for '{}' to NEO '{}'",
                self.designation, neo.designation
            )));
        }
        self.neo = Some(neo);
        Ok(())
    }

    /// Linked NEO, if any
    pub fn neo(&self) -> Option<&NearEarthObject> {
        self.neo.as_deref()
    }

    /// Linked NEO, or an error naming the unlinked designation
    pub fn linked_neo(&self) -> Result<&NearEarthObject> {
        self.neo()
            .ok_or_else(|| Error::unlinked_approach(&self.designation))
    }

    /// Whether the linking pass has run for this approach
    pub fn is_linked(&self) -> bool {
        self.neo.is_some()
    }

    /// Approach time formatted as "YYYY-MM-DD HH:MM"
    pub fn time_str(&self) -> String {
        self.time.format(OUTPUT_TIME_FORMAT).to_string()
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let who = match self.neo() {
            Some(neo) => neo.full_name(),
            None => self.designation.clone(),
        };
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            who,
            self.distance,
            self.velocity
        )
    }
}

/// Parse a close approach calendar date such as "1900-Jan-01 00:00"
pub fn parse_approach_time(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), APPROACH_TIME_FORMAT).map_err(|e| {
        Error::data_validation(format!(
            "Invalid approach time '{}' (expected 'YYYY-Mon-DD HH:MM'): {}",
            value, e
        ))
    })
}
