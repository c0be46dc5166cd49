use std::path::Path;

use kurbo::Shape as _;

use crate::control::stream_border::{FrameOutput, StreamBorder};
use crate::control::style::StreamBorderStyle;
use crate::foundation::core::{BezPath, Rgba8};
use crate::foundation::error::{StreamBorderError, StreamBorderResult};
use crate::geometry::strip::build_strip;

/// Flattening tolerance used when converting the base outline to a path.
const OUTLINE_TOLERANCE: f64 = 0.1;
/// Width of the glow and core strips relative to the full trail.
const INNER_SCALE: f64 = 0.6;
const CENTER_SCALE: f64 = 0.25;

/// Straight-alpha RGBA8 frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data
            .get(i..i + 4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Encode as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> StreamBorderResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| StreamBorderError::render(format!("write png '{}': {e}", path.display())))
    }
}

/// Software painter for [`FrameOutput`]s, backed by `vello_cpu`.
///
/// Paints, in order: background, static border outline, then the trail as three nested strips
/// (outer body, inner glow, bright core) under an opacity layer carrying the fade.
pub struct CpuPainter {
    width: u16,
    height: u16,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuPainter {
    /// Painter for a fixed canvas size.
    pub fn new(width: u32, height: u32) -> StreamBorderResult<Self> {
        let width: u16 = width
            .try_into()
            .map_err(|_| StreamBorderError::render("canvas width exceeds u16"))?;
        let height: u16 = height
            .try_into()
            .map_err(|_| StreamBorderError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(StreamBorderError::render("canvas must be at least 1x1"));
        }
        Ok(Self {
            width,
            height,
            ctx: None,
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Rasterize one frame of `control`.
    pub fn paint(
        &mut self,
        control: &StreamBorder,
        frame: &FrameOutput,
        style: &StreamBorderStyle,
    ) -> StreamBorderResult<FrameRgba> {
        style.validate()?;

        let (w, h) = (self.width, self.height);
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w && ctx.height() == h => ctx,
            _ => vello_cpu::RenderContext::new(w, h),
        };
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        ctx.set_paint(paint_color(style.background));
        let canvas = vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(w), f64::from(h));
        ctx.fill_rect(&canvas);

        if let Some(boundary) = control.boundary()
            && !boundary.is_degenerate()
            && style.border_stroke_thickness > 0.0
        {
            let outline = kurbo::stroke(
                boundary.to_rounded_rect().path_elements(OUTLINE_TOLERANCE),
                &kurbo::Stroke::new(style.border_stroke_thickness),
                &kurbo::StrokeOpts::default(),
                OUTLINE_TOLERANCE,
            );
            ctx.set_paint(paint_color(style.border_color));
            ctx.fill_path(&bezpath_to_cpu(&outline));
        }

        let opacity = frame.opacity.clamp(0.0, 1.0) as f32;
        if let Some(polygon) = frame.polygon.as_ref()
            && opacity > 0.0
        {
            let cfg = control.config();
            if opacity < 1.0 {
                ctx.push_opacity_layer(opacity);
            }

            ctx.set_paint(paint_color(style.outer_color));
            ctx.fill_path(&bezpath_to_cpu(&polygon.to_bez_path()));

            for (scale, color) in [
                (INNER_SCALE, style.inner_color),
                (CENTER_SCALE, style.center_color),
            ] {
                if let Some(strip) = build_strip(
                    &frame.centerline,
                    cfg.min_thickness * scale,
                    cfg.max_thickness * scale,
                    cfg.profile,
                ) {
                    ctx.set_paint(paint_color(color));
                    ctx.fill_path(&bezpath_to_cpu(&strip.to_bez_path()));
                }
            }

            if opacity < 1.0 {
                ctx.pop_layer();
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        Ok(FrameRgba {
            width: u32::from(w),
            height: u32::from(h),
            data,
        })
    }
}

fn paint_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
