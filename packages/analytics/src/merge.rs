//! Full outer join of location and metadata records.
//!
//! Duplicate ids within one collection collapse to the first occurrence.
//! Records with an empty id are left out of the join entirely. The joined
//! records come back in ascending id order.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use poi_map_poi_models::{Location, Metadata, MergedRecord};

/// Joins `locations` and `metadata` into one record per distinct non-empty
/// id seen on either side.
#[must_use]
pub fn merge(locations: &[Location], metadata: &[Metadata]) -> Vec<MergedRecord> {
    let location_map = index_by_id(locations, |l| l.id.as_str(), "location");
    let metadata_map = index_by_id(metadata, |m| m.id.as_str(), "metadata");

    let ids: BTreeSet<&str> = location_map
        .keys()
        .chain(metadata_map.keys())
        .copied()
        .collect();

    let merged: Vec<MergedRecord> = ids
        .into_iter()
        .map(|id| {
            MergedRecord::new(
                id,
                location_map.get(id).map(|&l| l.clone()),
                metadata_map.get(id).map(|&m| m.clone()),
            )
        })
        .collect();

    log::info!(
        "Merged {} location and {} metadata records into {} ids",
        locations.len(),
        metadata.len(),
        merged.len()
    );

    merged
}

/// Builds an id lookup keeping only the first record for each id.
fn index_by_id<'a, T>(
    records: &'a [T],
    id: impl Fn(&'a T) -> &'a str,
    kind: &str,
) -> BTreeMap<&'a str, &'a T> {
    let mut map = BTreeMap::new();

    for record in records {
        let key = id(record);
        if key.is_empty() {
            log::debug!("Ignoring {kind} record without an id");
            continue;
        }
        match map.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(record);
            }
            Entry::Occupied(_) => {
                log::debug!("Discarding duplicate {kind} record for id {key}");
            }
        }
    }

    map
}
