//! In-memory NEO database
//!
//! Holds the loaded near-Earth objects and close approaches, links every
//! approach to its NEO by designation in one pass, and indexes NEOs by
//! designation and by name for O(1) lookups.

use crate::app::models::{CloseApproach, NearEarthObject};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub mod query;

#[cfg(test)]
pub mod tests;

/// Outcome of the linking pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Approaches whose designation matched a NEO
    pub linked: usize,

    /// Approaches left unlinked (no NEO with their designation)
    pub unmatched: usize,

    /// NEO rows whose designation repeated an earlier row
    pub duplicate_designations: usize,
}

/// Linked collection of NEOs and close approaches
#[derive(Debug, Clone)]
pub struct NeoDatabase {
    /// NEOs in load order
    pub(crate) neos: Vec<Arc<NearEarthObject>>,

    /// Close approaches in load order
    pub(crate) approaches: Vec<CloseApproach>,

    /// Designation to position in `neos`
    pub(crate) by_designation: HashMap<String, usize>,

    /// Name to position in `neos`
    pub(crate) by_name: HashMap<String, usize>,

    /// Designation to positions in `approaches`
    pub(crate) approaches_by_designation: HashMap<String, Vec<usize>>,

    pub(crate) link_stats: LinkStats,
}

impl NeoDatabase {
    /// Build the database and link approaches to their NEOs
    ///
    /// When designations or names repeat, the later NEO wins the index entry.
    /// Approaches that arrive already linked are left as they are.
    pub fn new(neos: Vec<NearEarthObject>, approaches: Vec<CloseApproach>) -> Self {
        let neos: Vec<Arc<NearEarthObject>> = neos.into_iter().map(Arc::new).collect();

        let mut by_designation = HashMap::with_capacity(neos.len());
        let mut by_name = HashMap::new();
        let mut link_stats = LinkStats::default();

        for (index, neo) in neos.iter().enumerate() {
            if by_designation
                .insert(neo.designation.clone(), index)
                .is_some()
            {
                link_stats.duplicate_designations += 1;
                debug!("Duplicate NEO designation '{}'", neo.designation);
            }
            if let Some(name) = &neo.name {
                by_name.insert(name.clone(), index);
            }
        }

        let mut database = Self {
            neos,
            approaches,
            by_designation,
            by_name,
            approaches_by_designation: HashMap::new(),
            link_stats,
        };
        database.link();

        info!(
            "Linked {} of {} close approaches to {} near-Earth objects",
            database.link_stats.linked,
            database.approaches.len(),
            database.neos.len()
        );
        database
    }

    /// Single linking pass over every approach
    fn link(&mut self) {
        for (index, approach) in self.approaches.iter_mut().enumerate() {
            self.approaches_by_designation
                .entry(approach.designation.clone())
                .or_default()
                .push(index);

            if approach.is_linked() {
                self.link_stats.linked += 1;
                continue;
            }

            match self.by_designation.get(&approach.designation) {
                Some(&neo_index) => match approach.link(Arc::clone(&self.neos[neo_index])) {
                    Ok(()) => self.link_stats.linked += 1,
                    Err(e) => {
                        warn!("Could not link close approach: {}", e);
                        self.link_stats.unmatched += 1;
                    }
                },
                None => self.link_stats.unmatched += 1,
            }
        }

        if self.link_stats.unmatched > 0 {
            warn!(
                "{} close approaches could not be linked to a NEO",
                self.link_stats.unmatched
            );
        }
    }

    /// Number of NEOs held (including duplicates)
    pub fn neo_count(&self) -> usize {
        self.neos.len()
    }

    /// Number of close approaches held
    pub fn approach_count(&self) -> usize {
        self.approaches.len()
    }

    /// Outcome of the linking pass
    pub fn link_stats(&self) -> LinkStats {
        self.link_stats
    }
}
