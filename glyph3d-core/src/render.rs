/// Per-mesh render pass: transform, sort, shadow, cull and rasterize
use crate::config::RenderConfig;
use crate::geometry::Mesh;
use crate::math::{Mat4, Vec4};
use crate::pipeline;
use crate::projection::ScreenMapping;
use crate::raster::Canvas;
use crate::scene::SceneTransform;
use crate::shadow::ShadowProjector;
use crate::surface::Surface;
use crate::transform::Transform;
use crate::visibility;
use nalgebra::Vector3;

/// Inputs of one [`Renderer::render_mesh`] call
#[derive(Debug, Clone, Copy)]
pub struct RenderPass<'a> {
    pub state: &'a SceneTransform,
    pub projection: &'a Mat4,
    pub light: Vector3<f32>,
    pub view_point: Vec4,
    /// Horizontal screen offset of this mesh
    pub spacing: f32,
}

/// Triangle counts from one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub projected: usize,
    pub dropped: usize,
    pub shadows: usize,
    pub culled: usize,
    pub slivers: usize,
    pub faces: usize,
}

pub struct Renderer<'c> {
    config: &'c RenderConfig,
}

impl<'c> Renderer<'c> {
    pub fn new(config: &'c RenderConfig) -> Self {
        Self { config }
    }

    /// Sky over the whole grid, ground over the lower half
    pub fn backdrop<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (w, h) = (surface.width(), surface.height());
        let style = &self.config.style;
        surface.fill_rect(0, 0, w, h, style.sky.glyph, style.sky.color);
        surface.fill_rect(0, h / 2, w, h, style.ground.glyph, style.ground.color);
    }

    /// Render one mesh into `surface`.
    ///
    /// Shadows of every projected triangle are drawn first, then the visible
    /// faces back to front, each outlined in the edge colour and flood-filled
    /// with its palette colour.
    pub fn render_mesh<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        mesh: &Mesh,
        pass: &RenderPass<'_>,
    ) -> RenderStats {
        let config = self.config;
        let style = &config.style;
        let (w, h) = (surface.width(), surface.height());

        let world = Transform::world_matrix(pass.state, config.radians_per_unit);
        let mapping = ScreenMapping::new(
            (pass.state.coord_x + pass.spacing, pass.state.coord_y),
            config.screen_scale,
            config.screen_bias,
            w,
            h,
        );
        let mut projected =
            pipeline::project_mesh(mesh, &world, pass.projection, &mapping, &style.palette);

        visibility::depth_sort(&mut projected.triangles);
        for tri in &mut projected.triangles {
            tri.round_to_cells();
        }

        let mut stats = RenderStats {
            projected: projected.triangles.len(),
            dropped: mesh.len() - projected.triangles.len(),
            ..RenderStats::default()
        };

        match ShadowProjector::new(pass.light, h, config.shadow_ground, config.shadow_depth_scale) {
            Some(shadows) => {
                stats.shadows = shadows.draw(surface, &projected.triangles, style.shadow)
            }
            None => tracing::trace!(light_y = pass.light.y, "light too flat, skipping shadows"),
        }

        let visible = visibility::select_visible(
            &projected.triangles,
            &projected.barycenter,
            &pass.view_point,
        );
        stats.culled = visible.culled;
        stats.slivers = visible.slivers;
        stats.faces = visible.faces.len();

        let mut framed = !style.frame_viewport;
        for face in &visible.faces {
            let points = face.screen_points();
            let glyph = face.triangle.glyph;
            surface.draw_polygon(&points, glyph, style.edge);
            if !framed {
                surface.outline_viewport(glyph, style.edge);
                framed = true;
            }
            surface.flood_fill(&points, glyph, face.triangle.color, style.edge);
        }

        tracing::trace!(
            projected = stats.projected,
            dropped = stats.dropped,
            culled = stats.culled,
            slivers = stats.slivers,
            faces = stats.faces,
            "rendered mesh"
        );
        stats
    }
}
