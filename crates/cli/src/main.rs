use clap::Parser;
use vitrine_scene::{Scene, SceneObject};
use vitrine_viewer::TransformRates;

mod args;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = args::Args::parse();

    let mut scene = Scene::new();
    for path in &args.models {
        // A model that fails to load is skipped, not fatal.
        match vitrine_obj::read_obj(path) {
            Ok(mesh) => {
                log::info!("Loaded {} vertices from {}", mesh.vertex_count(), path);
                scene.add(SceneObject::new(path.clone(), mesh));
            }
            Err(err) => log::error!("Error loading {path}: {err}"),
        }
    }
    if scene.is_empty() {
        anyhow::bail!("no objects loaded");
    }

    // Spread the objects along x, centered on the origin, so they don't
    // all load on top of each other.
    let count = scene.len();
    for (i, object) in scene.objects_mut().iter_mut().enumerate() {
        object.transform.position.x = (i as f32 - (count as f32 - 1.0) / 2.0) * args.spacing;
    }

    let rates = TransformRates {
        translation: args.translation_speed,
        rotation: args.rotation_speed,
        scale: args.scale_speed,
    };
    vitrine_viewer::run(scene, rates)
}
