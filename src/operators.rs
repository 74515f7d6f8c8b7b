//! Selection-level operators, one per panel button
//!
//! These never fail: problems come back as `OperatorStatus::Cancelled` and are
//! reported through the log.

use bevy::prelude::*;

use crate::constants::DEMO_BOX_LAYOUT;
use crate::error::TagError;
use crate::presets::{
    Category, TaggedSummary, TaggingContext, apply_preset, clear_preset, list_tagged,
};
use crate::scene::TaggableObject;

#[derive(Debug, Clone, PartialEq)]
pub enum OperatorStatus {
    /// Ran to completion; `affected` objects were changed
    Finished { affected: usize },
    Cancelled(TagError),
}

impl OperatorStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, OperatorStatus::Finished { .. })
    }
}

/// Tag every mesh in the selection with the named category.
/// Non-mesh objects are skipped.
pub fn set_properties<'a, T>(
    ctx: &mut TaggingContext,
    category_name: &str,
    selection: impl IntoIterator<Item = &'a mut T>,
) -> OperatorStatus
where
    T: TaggableObject + ?Sized + 'a,
{
    let selection: Vec<&mut T> = selection.into_iter().collect();
    if selection.is_empty() {
        warn!("{}", TagError::NoTargets);
        return OperatorStatus::Cancelled(TagError::NoTargets);
    }

    let category: Category = match category_name.parse() {
        Ok(c) => c,
        Err(e) => {
            warn!("{}", e);
            return OperatorStatus::Cancelled(e);
        }
    };

    let selected = selection.len();
    let mut affected = 0;
    for target in selection {
        match apply_preset(ctx, category, target) {
            Ok(_) => affected += 1,
            Err(e) => warn!("Skipping: {}", e),
        }
    }

    info!("Applied {} box properties to {} objects", category, selected);
    OperatorStatus::Finished { affected }
}

/// Strip preset keys from every selected object
pub fn clear_properties<'a, T>(selection: impl IntoIterator<Item = &'a mut T>) -> OperatorStatus
where
    T: TaggableObject + ?Sized + 'a,
{
    let selection: Vec<&mut T> = selection.into_iter().collect();
    if selection.is_empty() {
        warn!("No objects selected!");
        return OperatorStatus::Cancelled(TagError::NoTargets);
    }

    let selected = selection.len();
    for target in selection {
        if let Err(e) = clear_preset(target) {
            warn!("Could not clear {}: {}", target.name(), e);
            continue;
        }
        info!("Cleared properties from {}", target.name());
    }

    info!("Cleared properties from {} objects", selected);
    OperatorStatus::Finished { affected: selected }
}

/// Log every tagged mesh and return the summaries
pub fn list_objects<'a, T, I>(objects: I) -> Vec<TaggedSummary>
where
    T: TaggableObject + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let summaries = list_tagged(objects);
    for summary in &summaries {
        info!("{}", summary);
    }

    if summaries.is_empty() {
        info!("No objects found with projectile properties");
    } else {
        info!("Found {} objects with projectile properties", summaries.len());
    }
    summaries
}

/// Build the fixed demo layout. `spawn` is the host's mesh-creation
/// primitive: it gets a location and returns a fresh object there.
pub fn create_test_boxes<T, F>(ctx: &mut TaggingContext, mut spawn: F) -> Vec<T>
where
    T: TaggableObject,
    F: FnMut(Vec3) -> T,
{
    let mut created = Vec::with_capacity(DEMO_BOX_LAYOUT.len());

    for (i, (category, location)) in DEMO_BOX_LAYOUT.iter().enumerate() {
        let mut obj = spawn(*location);
        obj.set_name(format!("{}_box_{:02}", category, i));

        if let Err(e) = apply_preset(ctx, *category, &mut obj) {
            warn!("Demo box {} not created: {}", i, e);
            continue;
        }
        info!("Created {} box at {}", category, location);
        created.push(obj);
    }

    info!("Created {} test boxes", created.len());
    created
}
