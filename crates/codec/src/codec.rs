//! Conversion between packing state and its persisted JSON form.
//!
//! [`encode`] and [`decode`] are exact inverses and preserve list order. A
//! decoded state resumed with no new items reproduces the encoded shelves,
//! as long as the free spaces were persisted.

use crate::error::{CodecError, Result};
use crate::types::{FreeSpaceRecord, ItemRecord, PlacedItemRecord, ShelfRecord, StateRecord};
use shelfpack_core::{
    FreeSpace, Item, Orientation, PackingResult, Placement, ShelfSnapshot, Snapshot, Vector3,
};
use std::fs;
use std::path::Path;

/// Encodes the state of a finished or running session.
pub fn encode(result: &PackingResult) -> StateRecord {
    encode_snapshot(&result.to_snapshot())
}

/// Encodes a snapshot.
pub fn encode_snapshot(snapshot: &Snapshot) -> StateRecord {
    StateRecord {
        shelves: snapshot.shelves.iter().map(encode_shelf).collect(),
        unplaced_items: snapshot.unplaced.iter().map(encode_item).collect(),
    }
}

/// Decodes a persisted state.
///
/// Shelf ids default to the list position. Dimensions must be given for all
/// three axes or none.
pub fn decode(record: StateRecord) -> Result<Snapshot> {
    let shelves = record
        .shelves
        .into_iter()
        .enumerate()
        .map(|(index, shelf)| decode_shelf(index, shelf))
        .collect::<Result<Vec<_>>>()?;

    let unplaced = record.unplaced_items.into_iter().map(decode_item).collect();

    Ok(Snapshot { shelves, unplaced })
}

/// Serializes a session's state to compact JSON.
pub fn to_json(result: &PackingResult) -> Result<String> {
    Ok(serde_json::to_string(&encode(result))?)
}

/// Serializes a session's state to indented JSON.
pub fn to_json_pretty(result: &PackingResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&encode(result))?)
}

/// Parses a persisted state from JSON.
pub fn from_json(json: &str) -> Result<Snapshot> {
    decode(serde_json::from_str(json)?)
}

/// Reads a persisted state from a file.
pub fn read_state(path: impl AsRef<Path>) -> Result<Snapshot> {
    let json = fs::read_to_string(path)?;
    from_json(&json)
}

/// Writes a session's state to a file as indented JSON.
pub fn write_state(path: impl AsRef<Path>, result: &PackingResult) -> Result<()> {
    fs::write(path, to_json_pretty(result)?)?;
    Ok(())
}

fn encode_shelf(shelf: &ShelfSnapshot) -> ShelfRecord {
    ShelfRecord {
        id: Some(shelf.id),
        width: shelf.dims.map(|d| d.x),
        height: shelf.dims.map(|d| d.y),
        depth: shelf.dims.map(|d| d.z),
        compatibility: shelf
            .compatibility
            .as_ref()
            .map(|set| set.iter().cloned().collect()),
        placed_items: shelf.placements.iter().map(encode_placement).collect(),
        free_spaces: shelf
            .fragments
            .as_ref()
            .map(|fragments| fragments.iter().map(encode_fragment).collect()),
    }
}

fn encode_placement(placement: &Placement) -> PlacedItemRecord {
    let origin = placement.origin();
    let dims = placement.dims();
    PlacedItemRecord {
        x: origin.x,
        y: origin.y,
        z: origin.z,
        width: dims.x,
        height: dims.y,
        depth: dims.z,
        item_type: placement.category().to_string(),
        color: placement.metadata().map(str::to_string),
        rotation: placement.orientation().map(Orientation::index),
    }
}

fn encode_fragment(fragment: &FreeSpace) -> FreeSpaceRecord {
    let origin = fragment.origin();
    let dims = fragment.dims();
    FreeSpaceRecord {
        x: origin.x,
        y: origin.y,
        z: origin.z,
        width: dims.x,
        height: dims.y,
        depth: dims.z,
    }
}

fn encode_item(item: &Item) -> ItemRecord {
    ItemRecord {
        width: item.width(),
        height: item.height(),
        depth: item.depth(),
        item_type: item.category().to_string(),
        color: item.metadata().map(str::to_string),
    }
}

fn decode_shelf(index: usize, record: ShelfRecord) -> Result<ShelfSnapshot> {
    let id = record.id.unwrap_or(index);

    let dims = match (record.width, record.height, record.depth) {
        (Some(w), Some(h), Some(d)) => Some(Vector3::new(w, h, d)),
        (None, None, None) => None,
        _ => {
            return Err(CodecError::InvalidRecord(format!(
                "Shelf {} has only some of width, height and depth",
                id
            )))
        }
    };

    let placements = record
        .placed_items
        .into_iter()
        .map(|placed| decode_placement(id, placed))
        .collect::<Result<Vec<_>>>()?;

    Ok(ShelfSnapshot {
        id,
        dims,
        compatibility: record
            .compatibility
            .map(|labels| labels.into_iter().collect()),
        placements,
        fragments: record
            .free_spaces
            .map(|spaces| spaces.into_iter().map(decode_fragment).collect()),
    })
}

fn decode_placement(shelf_id: usize, record: PlacedItemRecord) -> Result<Placement> {
    let orientation = record
        .rotation
        .map(|index| {
            Orientation::from_index(index).ok_or_else(|| {
                CodecError::InvalidRecord(format!(
                    "Placement on shelf {} has unknown rotation {}",
                    shelf_id, index
                ))
            })
        })
        .transpose()?;

    Ok(Placement::new(
        Vector3::new(record.x, record.y, record.z),
        Vector3::new(record.width, record.height, record.depth),
        record.item_type,
        record.color,
    )
    .with_orientation(orientation))
}

fn decode_fragment(record: FreeSpaceRecord) -> FreeSpace {
    FreeSpace::from_parts(
        record.x,
        record.y,
        record.z,
        record.width,
        record.height,
        record.depth,
    )
}

fn decode_item(record: ItemRecord) -> Item {
    Item::new(record.width, record.height, record.depth, record.item_type)
        .with_optional_metadata(record.color)
}
