//! Desk scene demo application
//!
//! Runs the full staging protocol for the desk scene (desk, walls, keyboard,
//! mouse, PC tower, monitor) against the headless backend: setup populates
//! the registries once, then a single frame's worth of draw calls is issued
//! in the fixed scene order. Swapping in a real graphics backend is a matter
//! of passing a different `RenderBackend` box.

mod scene;

use scene_engine::config::SceneConfig;
use scene_engine::render::{HeadlessBackend, SceneRenderer};
use std::path::Path;

fn main() {
    scene_engine::foundation::logging::init_with_default("info");

    log::info!("Starting desk scene...");
    let config = SceneConfig::load_or_default(Path::new("desk_scene.toml"));

    let mut renderer = SceneRenderer::new(Box::new(HeadlessBackend::new()));
    let desk = scene::DeskScene::new(config);

    desk.prepare(&mut renderer);
    log::info!(
        "Scene prepared: {} textures, {} materials, {} lights",
        renderer.textures().len(),
        renderer.materials().len(),
        renderer.lighting().sources().len()
    );

    desk.render(&mut renderer);

    let draw_count = renderer
        .backend()
        .as_any()
        .downcast_ref::<HeadlessBackend>()
        .map_or(0, HeadlessBackend::draw_count);
    log::info!("Rendered frame with {draw_count} draw calls");

    renderer.release_textures();
    log::info!("Scene torn down");
}
