use kurbo::Shape as _;

use crate::foundation::color::Rgba8;
use crate::foundation::core::{BezPath, PixelPoint, Point};
use crate::foundation::error::TracemapResult;
use crate::geo::bounds::Bounds;
use crate::geo::projector::Projector;
use crate::render::style::Style;
use crate::render::surface::Surface;
use crate::track::model::Track;

/// Redraw everything: background, then one open polyline per track.
///
/// With `bounds == None` only the background is drawn.
#[tracing::instrument(level = "debug", skip_all, fields(tracks = tracks.len()))]
pub fn render(
    tracks: &[Track],
    bounds: Option<&Bounds>,
    surface: &mut Surface,
    style: &Style,
) -> TracemapResult<()> {
    let (w, h) = surface.size_u16();
    let dims = *surface.dims();
    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(to_cpu_color(style.background_color));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(w),
        f64::from(h),
    ));

    let mut drawn = 0usize;
    if let Some(bounds) = bounds {
        let projector = Projector::new(bounds, &dims, style.padding_fraction);
        let canvas_height = f64::from(dims.height);
        let stroke_width = style.line_width * dims.pixel_ratio;

        ctx.set_paint(to_cpu_color(style.line_color));
        ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(stroke_width)
                .with_join(vello_cpu::kurbo::Join::Round)
                .with_caps(vello_cpu::kurbo::Cap::Round),
        );

        for track in tracks {
            match track.points() {
                [] => {}
                [only] => {
                    let center = flip(projector.project(*only), canvas_height);
                    let dot = kurbo::Circle::new(center, stroke_width / 2.0).to_path(0.1);
                    ctx.fill_path(&bezpath_to_cpu(&dot));
                    drawn += 1;
                }
                points => {
                    let mut path = BezPath::new();
                    let mut iter = points.iter().map(|p| projector.project(*p));
                    if let Some(first) = iter.next() {
                        move_to_flipped(&mut path, first, canvas_height);
                    }
                    for p in iter {
                        line_to_flipped(&mut path, p, canvas_height);
                    }
                    ctx.stroke_path(&bezpath_to_cpu(&path));
                    drawn += 1;
                }
            }
        }
    }

    ctx.flush();
    ctx.render_to_pixmap(surface.pixmap_mut());
    tracing::debug!(drawn, width = w, height = h, "redraw complete");
    Ok(())
}

/// Start a subpath at `point`, converting from y-up projection space to canvas rows.
pub fn move_to_flipped(path: &mut BezPath, point: PixelPoint, canvas_height: f64) {
    path.move_to(flip(point, canvas_height));
}

/// Extend the current subpath to `point`, converting from y-up projection space to canvas rows.
pub fn line_to_flipped(path: &mut BezPath, point: PixelPoint, canvas_height: f64) {
    path.line_to(flip(point, canvas_height));
}

fn flip(point: PixelPoint, canvas_height: f64) -> Point {
    Point::new(point.x, canvas_height - point.y)
}

fn to_cpu_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
