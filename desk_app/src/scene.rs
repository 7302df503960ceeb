//! The desk scene script
//!
//! Scene content lives here as a fixed data script: which textures and
//! materials exist, where the lights sit, and the ordered sequence of
//! transform/surface/material/draw steps that reproduces the scene. The
//! engine supplies the protocol; this module supplies the numbers.

use scene_engine::config::SceneConfig;
use scene_engine::foundation::math::Vec3;
use scene_engine::render::{
    LightSource, LightingEnvironment, Material, PrimitiveMesh, SceneRenderer, TransformParams,
};

/// Flat color or registered texture for one draw
#[derive(Debug, Clone, Copy)]
enum Surface {
    /// RGBA flat color
    Color(f32, f32, f32, f32),
    /// Texture tag plus UV scale
    Texture(&'static str, f32, f32),
}

/// One step of the scene script: transform, surface, optional material, mesh
///
/// A step with no material deliberately leaves the previously staged
/// material active, exactly like the omitted staging call it stands for.
struct Step {
    transform: TransformParams,
    surface: Surface,
    material: Option<&'static str>,
    mesh: PrimitiveMesh,
}

impl Step {
    fn textured(
        scale: [f32; 3],
        rotation: [f32; 3],
        position: [f32; 3],
        tag: &'static str,
        material: Option<&'static str>,
        mesh: PrimitiveMesh,
    ) -> Self {
        Self {
            transform: transform(scale, rotation, position),
            surface: Surface::Texture(tag, 1.0, 1.0),
            material,
            mesh,
        }
    }

    fn colored(
        scale: [f32; 3],
        rotation: [f32; 3],
        position: [f32; 3],
        color: [f32; 4],
        material: Option<&'static str>,
        mesh: PrimitiveMesh,
    ) -> Self {
        Self {
            transform: transform(scale, rotation, position),
            surface: Surface::Color(color[0], color[1], color[2], color[3]),
            material,
            mesh,
        }
    }
}

fn transform(scale: [f32; 3], rotation: [f32; 3], position: [f32; 3]) -> TransformParams {
    TransformParams::new(
        Vec3::new(scale[0], scale[1], scale[2]),
        (rotation[0], rotation[1], rotation[2]),
        Vec3::new(position[0], position[1], position[2]),
    )
}

/// Texture files and the tags the draw script refers to them by
const TEXTURES: [(&str, &str); 16] = [
    ("plastic_dark_seamless.jpg", "plastic"),
    ("wood_knots_seamlessr.jpg", "wood"),
    ("greywall.jpg", "wall"),
    ("rubber_circles_seamless.jpg", "pad"),
    ("screen_wallpaper_2.jpg", "pad2"),
    ("PCscreen.jpg", "screen"),
    ("blackmetal.jpg", "metal"),
    ("motherboard.jpg", "mb"),
    ("Riolu.jpg", "PKMN"),
    ("rainbowFade.jpg", "rgb"),
    ("motherboardback.jpeg", "mbb"),
    ("blue.jpg", "blue"),
    ("pink.jpg", "pink"),
    ("Keyboardtop.jpg", "keyboard"),
    ("RAMside.jpg", "ram"),
    ("blackplasticmaterial.jpg", "blackpl"),
];

/// The desk scene: fixed content driving the engine's staging protocol
pub struct DeskScene {
    config: SceneConfig,
}

impl DeskScene {
    /// Create the scene with the given configuration
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    /// Setup phase: load textures, bind them, define materials and lights
    ///
    /// Must fully precede rendering. A texture that fails to load is logged
    /// and skipped; the scene proceeds with that slot absent.
    pub fn prepare(&self, renderer: &mut SceneRenderer) {
        for (file_name, tag) in TEXTURES {
            let path = self.config.assets.texture_path(file_name);
            if let Err(err) = renderer.load_texture(&path, tag) {
                log::warn!("skipping texture '{tag}': {err}");
            }
        }
        renderer.bind_textures();

        define_materials(renderer);
        if self.config.lighting_enabled {
            renderer.setup_lights(lighting());
        }
    }

    /// Render one frame: every object group in fixed order
    pub fn render(&self, renderer: &mut SceneRenderer) {
        draw_group(renderer, &desk_and_walls());
        draw_group(renderer, &keyboard_and_mat());
        draw_group(renderer, &mouse());
        draw_group(renderer, &pc_exterior());
        draw_group(renderer, &pc_interior());
        draw_group(renderer, &monitor());
        draw_group(renderer, &glass_panels());
    }
}

fn define_materials(renderer: &mut SceneRenderer) {
    renderer.define_material(
        Material::new("metal")
            .with_ambient(Vec3::new(0.2, 0.2, 0.2), 0.3)
            .with_diffuse(Vec3::new(0.2, 0.2, 0.2))
            .with_specular(Vec3::new(0.5, 0.5, 0.5))
            .with_shininess(25.0),
    );
    renderer.define_material(
        Material::new("wood")
            .with_ambient(Vec3::new(0.1, 0.1, 0.1), 0.2)
            .with_diffuse(Vec3::new(0.3, 0.3, 0.3))
            .with_specular(Vec3::new(0.1, 0.1, 0.1))
            .with_shininess(0.3),
    );
    renderer.define_material(
        Material::new("glass")
            .with_ambient(Vec3::new(0.4, 0.4, 0.4), 0.3)
            .with_diffuse(Vec3::new(0.3, 0.3, 0.3))
            .with_specular(Vec3::new(0.6, 0.6, 0.6))
            .with_shininess(85.0),
    );
    renderer.define_material(
        Material::new("walls")
            .with_ambient(Vec3::new(0.1, 0.1, 0.1), 0.2)
            .with_diffuse(Vec3::new(0.5, 0.5, 0.5))
            .with_specular(Vec3::new(0.1, 0.1, 0.1))
            .with_shininess(0.0),
    );
    renderer.define_material(
        Material::new("plastic")
            .with_ambient(Vec3::new(0.1, 0.1, 0.1), 0.1)
            .with_diffuse(Vec3::new(0.3, 0.2, 0.3))
            .with_specular(Vec3::new(0.4, 0.2, 0.2))
            .with_shininess(0.5),
    );
}

fn lighting() -> LightingEnvironment {
    // Two magenta accent lights above the tower and one soft front fill.
    LightingEnvironment::new()
        .add_source(
            LightSource::new(Vec3::new(13.5, 15.79, 1.9))
                .with_ambient(Vec3::new(0.2, 0.2, 0.2))
                .with_diffuse(Vec3::new(0.949, 0.184, 0.863))
                .with_specular(Vec3::new(0.949, 0.184, 0.863))
                .with_focal_strength(1.0)
                .with_specular_intensity(15.0),
        )
        .add_source(
            LightSource::new(Vec3::new(-13.5, 15.79, 1.9))
                .with_ambient(Vec3::new(0.2, 0.2, 0.2))
                .with_diffuse(Vec3::new(0.949, 0.184, 0.863))
                .with_specular(Vec3::new(0.949, 0.184, 0.863))
                .with_focal_strength(1.0)
                .with_specular_intensity(15.0),
        )
        .add_source(
            LightSource::new(Vec3::new(0.0, 3.0, 20.0))
                .with_ambient(Vec3::new(0.2, 0.2, 0.2))
                .with_diffuse(Vec3::new(0.8, 0.8, 0.8))
                .with_specular(Vec3::new(0.0, 0.0, 0.0))
                .with_focal_strength(12.0)
                .with_specular_intensity(0.2),
        )
}

/// Per-draw protocol: transform first, then surface, then optional material,
/// then the draw itself
fn draw_group(renderer: &mut SceneRenderer, steps: &[Step]) {
    for step in steps {
        renderer.set_transformations(step.transform);
        match step.surface {
            Surface::Texture(tag, u, v) => {
                renderer.set_shader_texture(tag);
                renderer.set_texture_uv_scale(u, v);
            }
            Surface::Color(red, green, blue, alpha) => {
                renderer.set_shader_color(red, green, blue, alpha);
            }
        }
        if let Some(tag) = step.material {
            renderer.set_shader_material(tag);
        }
        renderer.draw_mesh(step.mesh);
    }
}

fn desk_and_walls() -> Vec<Step> {
    vec![
        // Back wall, side wall, desk top.
        Step::textured(
            [20.0, 1.0, 10.0],
            [90.0, 0.0, 0.0],
            [0.0, 10.0, -10.0],
            "wall",
            Some("walls"),
            PrimitiveMesh::Plane,
        ),
        Step::textured(
            [10.0, 1.0, 10.0],
            [0.0, 0.0, 90.0],
            [20.0, 10.0, 0.0],
            "wall",
            Some("walls"),
            PrimitiveMesh::Plane,
        ),
        Step::textured(
            [20.0, 1.0, 10.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            "wood",
            Some("wood"),
            PrimitiveMesh::Plane,
        ),
    ]
}

fn keyboard_and_mat() -> Vec<Step> {
    vec![
        // Desk mat; no material staged, so the desk's wood material carries
        // over from the previous draw.
        Step::textured(
            [31.0, 0.1, 10.0],
            [0.0, 0.0, 0.0],
            [-4.0, 0.1, 4.5],
            "pad2",
            None,
            PrimitiveMesh::Box,
        ),
        Step::textured(
            [14.0, 0.5, 5.0],
            [0.0, 0.0, 0.0],
            [-8.0, 0.3, 4.5],
            "keyboard",
            Some("plastic"),
            PrimitiveMesh::Box,
        ),
        Step::textured(
            [1.0, 14.0, 0.5],
            [90.0, 180.0, 90.0],
            [-8.0, 0.3, 7.0],
            "plastic",
            Some("plastic"),
            PrimitiveMesh::Prism,
        ),
        Step::textured(
            [14.01, 0.49, 5.01],
            [0.0, 0.0, 0.0],
            [-8.0, 0.3, 4.5],
            "plastic",
            Some("plastic"),
            PrimitiveMesh::Box,
        ),
    ]
}

fn mouse() -> Vec<Step> {
    const SHELL: [f32; 4] = [0.071, 0.071, 0.071, 1.0];
    vec![
        Step::textured(
            [1.0, 0.3, 2.0],
            [0.0, 0.0, 0.0],
            [2.0, 0.2, 4.5],
            "blackpl",
            Some("plastic"),
            PrimitiveMesh::Cylinder,
        ),
        Step::textured(
            [1.0, 0.5, 2.0],
            [0.0, 0.0, 0.0],
            [2.0, 0.5, 4.5],
            "blackpl",
            Some("plastic"),
            PrimitiveMesh::Sphere,
        ),
        // Scroll wheel and buttons keep the plastic material staled in.
        Step::colored(
            [0.35, 0.35, 0.35],
            [0.0, 90.0, 0.0],
            [2.0, 0.67, 3.7],
            SHELL,
            None,
            PrimitiveMesh::Torus,
        ),
        Step::colored(
            [0.15, 0.15, 0.15],
            [180.0, 0.0, 0.0],
            [2.0, 0.95, 4.2],
            SHELL,
            None,
            PrimitiveMesh::Box,
        ),
        Step::colored(
            [0.15, 0.3, 0.15],
            [90.0, 0.0, 0.0],
            [1.15, 0.7, 4.9],
            SHELL,
            None,
            PrimitiveMesh::Box,
        ),
        Step::colored(
            [0.15, 0.3, 0.15],
            [90.0, 0.0, 0.0],
            [1.14, 0.7, 4.5],
            SHELL,
            None,
            PrimitiveMesh::Box,
        ),
        // Glow ring around the base.
        Step::colored(
            [1.0, 1.8, 0.5],
            [90.0, 0.0, 0.0],
            [2.0, 0.1, 4.5],
            [0.949, 0.184, 0.863, 1.0],
            None,
            PrimitiveMesh::Torus,
        ),
    ]
}

fn pc_exterior() -> Vec<Step> {
    const FOOT: [f32; 3] = [0.15, 0.63, 0.5];
    const SHELL: [f32; 4] = [0.071, 0.071, 0.071, 1.0];
    let mut steps: Vec<Step> = [
        [11.0, 0.1, 8.5],
        [11.0, 0.0, -4.5],
        [16.0, 0.0, 8.5],
        [16.0, 0.0, -4.5],
    ]
    .into_iter()
    .map(|position| {
        Step::colored(
            FOOT,
            [0.0, 0.0, 0.0],
            position,
            SHELL,
            Some("plastic"),
            PrimitiveMesh::Cylinder,
        )
    })
    .collect();

    // Case panels: bottom, top, back, right side, motherboard tray, front.
    steps.extend([
        Step::textured(
            [6.0, 0.3, 14.8],
            [0.0, 0.0, 0.0],
            [13.5, 0.71, 1.9],
            "metal",
            Some("metal"),
            PrimitiveMesh::Box,
        ),
        Step::textured(
            [6.0, 0.3, 14.8],
            [0.0, 0.0, 0.0],
            [13.5, 10.79, 1.9],
            "metal",
            Some("metal"),
            PrimitiveMesh::Box,
        ),
        Step::textured(
            [6.0, 0.3, 9.8],
            [90.0, 0.0, 0.0],
            [13.5, 5.75, -5.349],
            "metal",
            Some("metal"),
            PrimitiveMesh::Box,
        ),
        Step::textured(
            [14.5, 0.3, 9.8],
            [90.0, 0.0, 90.0],
            [16.35, 5.75, 2.05],
            "metal",
            Some("metal"),
            PrimitiveMesh::Box,
        ),
        Step::textured(
            [7.25, 0.25, 7.25],
            [90.0, 0.0, 90.0],
            [16.3, 6.3, -1.55],
            "mb",
            Some("metal"),
            PrimitiveMesh::Box,
        ),
        Step::textured(
            [5.404, 0.3, 9.8],
            [90.0, 0.0, 0.0],
            [13.5, 5.75, 8.649],
            "metal",
            Some("metal"),
            PrimitiveMesh::Box,
        ),
    ]);
    steps
}

fn pc_interior() -> Vec<Step> {
    vec![
        // CPU cooler stack: shroud, fan face, retaining ring.
        Step::textured(
            [1.3, 1.3, 1.3],
            [0.0, 0.0, 90.0],
            [16.3, 7.4, -1.7],
            "plastic",
            Some("plastic"),
            PrimitiveMesh::Cylinder,
        ),
        Step::textured(
            [1.0, 1.0, 1.0],
            [0.0, 0.0, 90.0],
            [15.96, 7.4, -1.7],
            "PKMN",
            Some("plastic"),
            PrimitiveMesh::Cylinder,
        ),
        Step::textured(
            [1.0, 1.0, 1.0],
            [90.0, 90.0, 90.0],
            [15.1, 7.4, -1.7],
            "plastic",
            Some("plastic"),
            PrimitiveMesh::Torus,
        ),
        // RAM sticks and their RGB edge strips.
        Step::textured(
            [4.0, 1.0, 0.2],
            [0.0, 0.0, 90.0],
            [15.8, 7.49, 0.03],
            "ram",
            Some("plastic"),
            PrimitiveMesh::Box,
        ),
        Step::textured(
            [4.0, 1.0, 0.2],
            [0.0, 0.0, 90.0],
            [15.8, 7.49, 0.58],
            "ram",
            Some("plastic"),
            PrimitiveMesh::Box,
        ),
        Step::textured(
            [0.2, 4.0, 0.2],
            [0.0, 0.0, 0.0],
            [15.2, 7.49, 0.58],
            "rgb",
            Some("plastic"),
            PrimitiveMesh::Box,
        ),
        Step::textured(
            [0.2, 4.0, 0.2],
            [0.0, 0.0, 0.0],
            [15.2, 7.49, 0.03],
            "rgb",
            Some("plastic"),
            PrimitiveMesh::Box,
        ),
        // GPU body and backplate.
        Step::textured(
            [1.2, 4.6, 0.9],
            [0.0, 90.0, 0.0],
            [15.8, 7.65, -4.58],
            "mbb",
            Some("metal"),
            PrimitiveMesh::Box,
        ),
        Step::textured(
            [1.3, 4.7, 1.0],
            [0.0, 90.0, 0.0],
            [15.86, 7.65, -4.58],
            "metal",
            Some("metal"),
            PrimitiveMesh::Box,
        ),
        // Front intake fans.
        Step::textured(
            [1.2, 1.2, 2.0],
            [0.0, 0.0, 90.0],
            [13.5, 5.75, 8.649],
            "pink",
            Some("wood"),
            PrimitiveMesh::Torus,
        ),
        Step::textured(
            [1.2, 1.2, 2.0],
            [0.0, 0.0, 90.0],
            [13.5, 9.0, 8.649],
            "blue",
            Some("wood"),
            PrimitiveMesh::Torus,
        ),
        Step::textured(
            [1.2, 1.2, 2.0],
            [0.0, 0.0, 90.0],
            [13.5, 2.5, 8.649],
            "blue",
            Some("wood"),
            PrimitiveMesh::Torus,
        ),
        // Power supply shroud.
        Step::textured(
            [5.0, 2.0, 12.0],
            [0.0, 0.0, 0.0],
            [13.8, 1.7, 0.7],
            "metal",
            Some("metal"),
            PrimitiveMesh::Box,
        ),
    ]
}

fn monitor() -> Vec<Step> {
    vec![
        Step::textured(
            [9.0, 0.5, 5.0],
            [0.0, 180.0, 0.0],
            [-4.0, 0.3, -3.5],
            "plastic",
            Some("plastic"),
            PrimitiveMesh::Prism,
        ),
        Step::textured(
            [1.15, 6.3, 1.15],
            [0.0, 45.0, 0.0],
            [-4.0, 3.3, -3.5],
            "plastic",
            Some("plastic"),
            PrimitiveMesh::Box,
        ),
        Step::textured(
            [1.0, 1.0, 0.85],
            [0.0, 0.0, 0.0],
            [-4.0, 5.95, -2.85],
            "plastic",
            Some("plastic"),
            PrimitiveMesh::Box,
        ),
        Step::textured(
            [12.0, 0.1, 6.0],
            [90.0, 0.0, 0.0],
            [-4.0, 5.95, -2.223],
            "screen",
            Some("metal"),
            PrimitiveMesh::Box,
        ),
        Step::textured(
            [12.25, 0.25, 6.25],
            [90.0, 0.0, 0.0],
            [-4.0, 5.95, -2.3],
            "plastic",
            Some("plastic"),
            PrimitiveMesh::Box,
        ),
    ]
}

fn glass_panels() -> Vec<Step> {
    const TINT: [f32; 4] = [0.7, 0.7, 0.8, 0.3];
    vec![
        // Side and front tempered glass, drawn last for blending.
        Step::colored(
            [14.5, 0.3, 9.8],
            [90.0, 0.0, 90.0],
            [10.65, 5.75, 2.05],
            TINT,
            Some("glass"),
            PrimitiveMesh::Box,
        ),
        Step::colored(
            [5.404, 0.05, 9.8],
            [90.0, 0.0, 0.0],
            [13.5, 5.75, 9.289],
            TINT,
            Some("glass"),
            PrimitiveMesh::Box,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_engine::assets::ImageData;
    use scene_engine::render::HeadlessBackend;

    fn renderer_with_placeholders() -> SceneRenderer {
        let mut renderer = SceneRenderer::new(Box::new(HeadlessBackend::new()));
        for (_, tag) in TEXTURES {
            renderer
                .load_texture_image(&ImageData::solid_color(2, 2, [64, 64, 64, 255]), tag)
                .expect("placeholder registers");
        }
        renderer.bind_textures();
        renderer
    }

    #[test]
    fn asset_table_entries_are_unique() {
        // File names and tags must stay one-to-one; a duplicate tag would be
        // permanently shadowed by first-match lookup.
        for (index, (file_name, tag)) in TEXTURES.iter().enumerate() {
            for (other_file, other_tag) in &TEXTURES[index + 1..] {
                assert_ne!(file_name, other_file, "duplicate file {file_name}");
                assert_ne!(tag, other_tag, "duplicate tag {tag}");
            }
        }
    }

    #[test]
    fn scene_uses_all_sixteen_texture_slots() {
        let renderer = renderer_with_placeholders();
        assert_eq!(renderer.textures().len(), 16);
        for (_, tag) in TEXTURES {
            assert!(renderer.textures().unit(tag).is_some(), "tag {tag} bound");
        }
    }

    #[test]
    fn frame_issues_the_full_draw_sequence() {
        let mut renderer = renderer_with_placeholders();
        define_materials(&mut renderer);
        renderer.setup_lights(lighting());

        DeskScene::new(SceneConfig::default()).render(&mut renderer);

        let backend = renderer
            .backend()
            .as_any()
            .downcast_ref::<HeadlessBackend>()
            .expect("headless backend");
        // 3 desk/wall + 4 keyboard + 7 mouse + 10 tower exterior
        // + 13 interior + 5 monitor + 2 glass panels.
        assert_eq!(backend.draw_count(), 44);
    }

    #[test]
    fn every_staged_texture_tag_is_registered() {
        let renderer = renderer_with_placeholders();
        let groups = [
            desk_and_walls(),
            keyboard_and_mat(),
            mouse(),
            pc_exterior(),
            pc_interior(),
            monitor(),
            glass_panels(),
        ];
        for step in groups.iter().flatten() {
            if let Surface::Texture(tag, _, _) = step.surface {
                assert!(
                    renderer.textures().unit(tag).is_some(),
                    "script references unregistered texture '{tag}'"
                );
            }
        }
    }

    #[test]
    fn every_staged_material_tag_is_defined() {
        let mut renderer = SceneRenderer::new(Box::new(HeadlessBackend::new()));
        define_materials(&mut renderer);
        let groups = [
            desk_and_walls(),
            keyboard_and_mat(),
            mouse(),
            pc_exterior(),
            pc_interior(),
            monitor(),
            glass_panels(),
        ];
        for step in groups.iter().flatten() {
            if let Some(tag) = step.material {
                assert!(
                    renderer.materials().lookup(tag).is_some(),
                    "script references undefined material '{tag}'"
                );
            }
        }
    }
}
