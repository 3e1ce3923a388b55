use crate::constants::*;
use crate::theme::Theme;
use awop_core::constants::{BUBBLE_RADIUS, GLOW_RADIUS, LERP};
use awop_core::geometry::{
    normalized_to_screen, point_on_circle, ray_sphere, screen_to_normalized, Viewport,
};
use awop_core::gesture::TokenHit;
use awop_core::visual::TokenVisual;
use awop_core::{Band, Camera, Session, TokenId};
use glam::{Mat4, Vec2, Vec3};
use std::f64::consts::TAU;
use web_sys as web;

/// Eased per-token visual state plus the Canvas2D drawing of the wheel.
pub struct Scene {
    visuals: Vec<TokenVisual>,
}

/// A token projected to screen space for one frame.
struct Projected {
    token: TokenId,
    center: Vec2,
    depth: f32,
    radius_px: f32,
    glow_px: f32,
}

impl Scene {
    pub fn new(session: &Session) -> Self {
        let visuals = session
            .tokens()
            .iter()
            .map(|t| TokenVisual::at_rest(session.radii.radius(t.band())))
            .collect();
        Self { visuals }
    }

    /// Ease every token toward its targets. `time_ms` drives the z float.
    pub fn step(&mut self, session: &Session, hover: Option<TokenId>, time_ms: f64) {
        for (i, v) in self.visuals.iter_mut().enumerate() {
            if let Some(target) = session.visual_targets(i, hover == Some(i)) {
                v.step(&target, LERP, time_ms, i);
            }
        }
    }

    fn world_center(&self, session: &Session, model: &Mat4, id: TokenId) -> Option<Vec3> {
        let token = session.token(id)?;
        let v = self.visuals.get(id)?;
        let p = point_on_circle(token.angle(), v.radius);
        Some(model.transform_point3(Vec3::new(p.x, p.y, v.z)))
    }

    /// Nearest token under `pointer` (canvas CSS px), using the rendered
    /// radius and scale of each token.
    pub fn pick(&self, session: &Session, pointer: Vec2) -> Option<TokenHit> {
        let ndc = screen_to_normalized(pointer, session.viewport);
        let (origin, dir) = session.camera.ray_through(ndc.x, ndc.y)?;
        let model = session.rotation.model_matrix(session.scene_offset_y());

        let mut best = None::<(TokenId, f32)>;
        for (i, v) in self.visuals.iter().enumerate() {
            let Some(center) = self.world_center(session, &model, i) else {
                continue;
            };
            if let Some(t) = ray_sphere(origin, dir, center, BUBBLE_RADIUS * v.scale) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((i, t)),
                }
            }
        }
        best.map(|(token, _)| TokenHit {
            token,
            radius: self.visuals[token].radius,
        })
    }

    /// Draw rings, tokens and labels. The context is scaled by `dpr` so all
    /// coordinates below are CSS px.
    pub fn draw(
        &self,
        ctx: &web::CanvasRenderingContext2d,
        session: &Session,
        theme: &Theme,
        dpr: f64,
    ) {
        let vp = session.viewport;
        _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        ctx.clear_rect(0.0, 0.0, vp.width as f64, vp.height as f64);

        let model = session.rotation.model_matrix(session.scene_offset_y());
        for band in Band::OUTWARD_IN {
            draw_ring(
                ctx,
                &session.camera,
                vp,
                &model,
                session.radii.radius(band),
                &theme.palette.ring_color(band).to_hex(),
            );
        }

        let mut projected: Vec<Projected> = (0..self.visuals.len())
            .filter_map(|i| self.project_token(session, &model, i))
            .collect();
        // Painter's order: far tokens first.
        projected.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        for p in &projected {
            let (Some(token), Some(v)) = (session.token(p.token), self.visuals.get(p.token)) else {
                continue;
            };
            let color = theme.category_color(token.category());

            ctx.set_global_alpha((v.glow * v.opacity) as f64);
            ctx.set_fill_style_str(color);
            fill_circle(ctx, p.center, p.glow_px);

            ctx.set_global_alpha(v.opacity as f64);
            fill_circle(ctx, p.center, p.radius_px);

            let status = session
                .dataset()
                .axis(token.name())
                .map(|a| a.spectrum.label(token.band()))
                .unwrap_or_default();
            draw_labels(ctx, p, token.name(), status, v.scale);
        }
        ctx.set_global_alpha(1.0);
    }

    fn project_token(&self, session: &Session, model: &Mat4, id: TokenId) -> Option<Projected> {
        let v = self.visuals.get(id)?;
        let center = self.world_center(session, model, id)?;
        let ndc = session.camera.project(center)?;
        let px_per_unit = pixels_per_world_unit(&session.camera, session.viewport, center);
        Some(Projected {
            token: id,
            center: normalized_to_screen(ndc.truncate(), session.viewport),
            depth: ndc.z,
            radius_px: BUBBLE_RADIUS * v.scale * px_per_unit,
            glow_px: GLOW_RADIUS * v.scale * px_per_unit,
        })
    }
}

/// Screen px covered by one world unit at `world`, for a perspective camera.
fn pixels_per_world_unit(camera: &Camera, vp: Viewport, world: Vec3) -> f32 {
    let d = (world - camera.eye).length().max(camera.znear);
    let half_h = d * (camera.fovy_radians * 0.5).tan();
    vp.height * 0.5 / half_h
}

fn fill_circle(ctx: &web::CanvasRenderingContext2d, center: Vec2, radius: f32) {
    ctx.begin_path();
    _ = ctx.arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    ctx.fill();
}

fn draw_ring(
    ctx: &web::CanvasRenderingContext2d,
    camera: &Camera,
    vp: Viewport,
    model: &Mat4,
    radius: f32,
    color: &str,
) {
    ctx.set_global_alpha(RING_ALPHA);
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(RING_LINE_WIDTH_PX);
    ctx.begin_path();
    let mut started = false;
    for i in 0..=RING_SEGMENTS {
        let angle = std::f32::consts::TAU * i as f32 / RING_SEGMENTS as f32;
        let p = point_on_circle(angle, radius);
        let Some(ndc) = camera.project(model.transform_point3(p.extend(0.0))) else {
            started = false;
            continue;
        };
        let s = normalized_to_screen(ndc.truncate(), vp);
        if started {
            ctx.line_to(s.x as f64, s.y as f64);
        } else {
            ctx.move_to(s.x as f64, s.y as f64);
            started = true;
        }
    }
    ctx.stroke();
}

fn draw_labels(
    ctx: &web::CanvasRenderingContext2d,
    p: &Projected,
    name: &str,
    status: &str,
    scale: f32,
) {
    let x = p.center.x as f64;
    let y = p.center.y as f64;
    let s = scale as f64;
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_shadow_color(LABEL_SHADOW_COLOR);
    ctx.set_shadow_offset_x(LABEL_SHADOW_OFFSET);
    ctx.set_shadow_offset_y(LABEL_SHADOW_OFFSET);

    ctx.set_fill_style_str("#ffffff");
    ctx.set_font(&format!("bold {:.0}px {}", NAME_FONT_PX * s, LABEL_FONT_FAMILY));
    _ = ctx.fill_text_with_max_width(name, x, y, LABEL_MAX_WIDTH_PX * s);

    if !status.is_empty() {
        let below = (STATUS_LABEL_OFFSET_Y / BUBBLE_RADIUS * p.radius_px) as f64;
        ctx.set_fill_style_str("#dddddd");
        ctx.set_font(&format!("{:.0}px {}", STATUS_FONT_PX * s, LABEL_FONT_FAMILY));
        _ = ctx.fill_text_with_max_width(status, x, y + below, LABEL_MAX_WIDTH_PX * s);
    }
    ctx.set_shadow_color("transparent");
}
