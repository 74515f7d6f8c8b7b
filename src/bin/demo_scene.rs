//! Demo scene - headless run of every tagging operator
//!
//! Builds the demo boxes, tags a selected cube, lists the tagged objects,
//! then clears the selection and lists again.
//!
//! Usage:
//!   cargo run --bin demo_scene
//!   cargo run --bin demo_scene -- --category armored

use bevy::log::LogPlugin;
use bevy::prelude::*;
use box_tagger::{
    BoxTaggingPlugin, LastOperatorReport, ObjectKind, PresetTable, SceneObject, Selected,
    TagRequest, TaggerSettings,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Check for --category <name> override
    let category = args
        .iter()
        .position(|a| a == "--category")
        .and_then(|i| args.get(i + 1).cloned())
        .unwrap_or_else(|| "explosive".to_string());

    let settings = TaggerSettings::load();

    let mut app = App::new();
    app.add_plugins((LogPlugin::default(), BoxTaggingPlugin::with_settings(settings.clone())));

    // Save settings on first run to ensure file exists
    if let Err(e) = settings.save() {
        warn!("Failed to save initial settings: {}", e);
    }

    let presets = app.world().resource::<PresetTable>();
    for (box_type, preset) in presets.iter() {
        info!(
            "{} [{}] {}: health={}, mass={}",
            box_type.label(),
            box_type,
            box_type.description(),
            preset.health,
            preset.mass
        );
    }

    app.world_mut()
        .spawn((SceneObject::new("Cube", ObjectKind::Mesh), Selected));
    app.world_mut().spawn((
        SceneObject::new("Camera", ObjectKind::Camera).with_location(Vec3::new(7.0, -7.0, 5.0)),
        Selected,
    ));

    let steps = [
        vec![TagRequest::CreateTestBoxes],
        vec![TagRequest::SetProperties(category.clone())],
        // Second press must not prefix the name twice
        vec![TagRequest::SetProperties(category)],
        vec![TagRequest::ListObjects],
        vec![TagRequest::ClearProperties, TagRequest::ListObjects],
    ];

    for requests in steps {
        for request in requests {
            app.world_mut().write_message(request);
        }
        app.update();

        let report = app.world().resource::<LastOperatorReport>();
        info!("Status: {:?}", report.status);
    }

    let report = app.world().resource::<LastOperatorReport>();
    info!("{} objects still tagged after clearing the selection", report.listed.len());
}
