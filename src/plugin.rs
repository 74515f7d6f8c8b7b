//! Bevy integration - runs tagging operators on `SceneObject` entities
//!
//! Send a `TagRequest` message; entities carrying `Selected` form the
//! selection. Results land in `LastOperatorReport`.

use bevy::ecs::query::Has;
use bevy::prelude::*;

use crate::materials::MaterialCache;
use crate::operators::{
    OperatorStatus, clear_properties, create_test_boxes, list_objects, set_properties,
};
use crate::presets::{PresetTable, TaggedSummary, TaggingContext};
use crate::scene::SceneObject;
use crate::settings::TaggerSettings;

/// Marks an entity as part of the current selection
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Selected;

/// One panel button press
#[derive(Message, Debug, Clone, PartialEq)]
pub enum TagRequest {
    /// Apply the named category to the selection
    SetProperties(String),
    ClearProperties,
    ListObjects,
    CreateTestBoxes,
}

/// Outcome of the most recent request
#[derive(Resource, Debug, Default)]
pub struct LastOperatorReport {
    pub status: Option<OperatorStatus>,
    /// Filled by `TagRequest::ListObjects`
    pub listed: Vec<TaggedSummary>,
}

pub struct BoxTaggingPlugin {
    pub settings: TaggerSettings,
}

impl Default for BoxTaggingPlugin {
    fn default() -> Self {
        Self {
            settings: TaggerSettings::default(),
        }
    }
}

impl BoxTaggingPlugin {
    pub fn with_settings(settings: TaggerSettings) -> Self {
        Self { settings }
    }
}

impl Plugin for BoxTaggingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PresetTable::load_from_file(&self.settings.presets_file))
            .insert_resource(MaterialCache::new(self.settings.surface_layout))
            .insert_resource(self.settings.clone())
            .init_resource::<LastOperatorReport>()
            .add_message::<TagRequest>()
            .add_systems(Update, process_tag_requests);
    }
}

/// Execute pending tag requests in the order they were sent
pub fn process_tag_requests(
    mut commands: Commands,
    mut requests: MessageReader<TagRequest>,
    presets: Res<PresetTable>,
    mut materials: ResMut<MaterialCache>,
    mut report: ResMut<LastOperatorReport>,
    mut objects: Query<(&mut SceneObject, Has<Selected>)>,
) {
    for request in requests.read() {
        let mut ctx = TaggingContext::new(&presets, &mut materials);

        let status = match request {
            TagRequest::SetProperties(category) => {
                let selection = objects
                    .iter_mut()
                    .filter(|(_, selected)| *selected)
                    .map(|(obj, _)| obj.into_inner());
                set_properties(&mut ctx, category, selection)
            }
            TagRequest::ClearProperties => {
                let selection = objects
                    .iter_mut()
                    .filter(|(_, selected)| *selected)
                    .map(|(obj, _)| obj.into_inner());
                clear_properties(selection)
            }
            TagRequest::ListObjects => {
                let listed = list_objects(objects.iter().map(|(obj, _)| obj));
                let affected = listed.len();
                report.listed = listed;
                OperatorStatus::Finished { affected }
            }
            TagRequest::CreateTestBoxes => {
                let boxes = create_test_boxes(&mut ctx, SceneObject::cube_at);
                let affected = boxes.len();
                for obj in boxes {
                    commands.spawn(obj);
                }
                OperatorStatus::Finished { affected }
            }
        };

        report.status = Some(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::SurfaceLayout;
    use crate::scene::ObjectKind;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(BoxTaggingPlugin::default());
        app
    }

    fn names(app: &mut App) -> Vec<String> {
        let world = app.world_mut();
        let mut names: Vec<String> = world
            .query::<&SceneObject>()
            .iter(world)
            .map(|o| o.name.clone())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_plugin_inserts_resources() {
        let app = test_app();
        assert!(app.world().contains_resource::<PresetTable>());
        assert!(app.world().contains_resource::<MaterialCache>());
        assert!(app.world().contains_resource::<LastOperatorReport>());
    }

    #[test]
    fn test_plugin_uses_configured_layout() {
        let mut app = App::new();
        app.add_plugins(BoxTaggingPlugin::with_settings(TaggerSettings {
            surface_layout: SurfaceLayout::Flat,
            ..TaggerSettings::default()
        }));
        let cache = app.world().resource::<MaterialCache>();
        assert_eq!(cache.layout(), SurfaceLayout::Flat);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_set_properties_tags_selected_only() {
        let mut app = test_app();
        app.world_mut()
            .spawn((SceneObject::new("Cube", ObjectKind::Mesh), Selected));
        app.world_mut()
            .spawn(SceneObject::new("Floor", ObjectKind::Mesh));
        app.world_mut()
            .spawn((SceneObject::new("Sun", ObjectKind::Light), Selected));

        app.world_mut()
            .write_message(TagRequest::SetProperties("armored".to_string()));
        app.update();

        assert_eq!(names(&mut app), vec!["Floor", "Sun", "armored_Cube"]);
        let report = app.world().resource::<LastOperatorReport>();
        assert_eq!(report.status, Some(OperatorStatus::Finished { affected: 1 }));
        assert_eq!(app.world().resource::<MaterialCache>().len(), 1);
    }

    #[test]
    fn test_empty_selection_is_cancelled() {
        let mut app = test_app();
        app.world_mut()
            .spawn(SceneObject::new("Cube", ObjectKind::Mesh));

        app.world_mut().write_message(TagRequest::ClearProperties);
        app.update();

        let report = app.world().resource::<LastOperatorReport>();
        assert!(matches!(report.status, Some(OperatorStatus::Cancelled(_))));
    }

    #[test]
    fn test_create_list_and_clear() {
        let mut app = test_app();

        app.world_mut().write_message(TagRequest::CreateTestBoxes);
        app.update();
        assert_eq!(names(&mut app).len(), 7);

        app.world_mut().write_message(TagRequest::ListObjects);
        app.update();
        let report = app.world().resource::<LastOperatorReport>();
        assert_eq!(report.listed.len(), 7);
        assert_eq!(report.listed.iter().filter(|s| s.explosive).count(), 2);

        // Select everything and clear it
        let world = app.world_mut();
        let entities: Vec<Entity> = world
            .query_filtered::<Entity, With<SceneObject>>()
            .iter(world)
            .collect();
        for entity in entities {
            world.entity_mut(entity).insert(Selected);
        }
        world.write_message(TagRequest::ClearProperties);
        world.write_message(TagRequest::ListObjects);
        app.update();

        let report = app.world().resource::<LastOperatorReport>();
        assert!(report.listed.is_empty());
        // Names are kept after clearing
        assert!(names(&mut app).contains(&"explosive_box_06".to_string()));
    }
}
