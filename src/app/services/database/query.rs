//! NEO lookups and close approach queries

use super::NeoDatabase;
use crate::app::models::{CloseApproach, NearEarthObject};
use crate::app::services::filters::{ApproachFilter, matches_all};

impl NeoDatabase {
    /// Get a NEO by its primary designation (O(1) lookup)
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .map(|&index| self.neos[index].as_ref())
    }

    /// Get a NEO by its IAU name (O(1) lookup)
    ///
    /// An empty name never matches, since unnamed NEOs are not indexed.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name
            .get(name)
            .map(|&index| self.neos[index].as_ref())
    }

    /// All NEOs in load order
    pub fn neos(&self) -> impl Iterator<Item = &NearEarthObject> {
        self.neos.iter().map(|neo| neo.as_ref())
    }

    /// All close approaches in load order
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Close approaches recorded for a designation, in load order
    pub fn approaches_for<'a>(
        &'a self,
        designation: &str,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        self.approaches_by_designation
            .get(designation)
            .into_iter()
            .flatten()
            .map(move |&index| &self.approaches[index])
    }

    /// Close approaches matching every filter, in load order
    ///
    /// Lazy: combine with [`limit`](crate::limit) to stop early.
    pub fn query<'a>(
        &'a self,
        filters: &'a [ApproachFilter],
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        self.approaches
            .iter()
            .filter(move |approach| matches_all(approach, filters))
    }
}
