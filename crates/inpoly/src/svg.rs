//! Minimal SVG rendering of rings and point sets for quick visual checks.
//!
//! Layout
//! - All parts go into one `<path fill-rule="evenodd">`, each part as
//!   `M x,y L x,y ...`, the whole path terminated by `z`.
//! - The viewBox is the data extent; a `matrix(1,0,0,-1,0,T+B)` group flips
//!   y so that north is up.
//! - Height is the data height clamped to [100, 200] px and width follows the
//!   aspect ratio. Stroke width is 1.5 data units per output pixel.

use nalgebra::Vector2;

use crate::geom2::Extent;

/// Paint settings for the path and the point markers.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgStyle {
    pub opacity: f64,
    pub fill: String,
    pub stroke: String,
    pub marker: String,
}

impl SvgStyle {
    /// Filled polygon look.
    pub fn polygon() -> Self {
        Self {
            opacity: 0.75,
            fill: "red".to_string(),
            stroke: "black".to_string(),
            marker: "blue".to_string(),
        }
    }

    /// Unfilled polyline look.
    pub fn polyline() -> Self {
        Self {
            opacity: 1.0,
            fill: "none".to_string(),
            stroke: "red".to_string(),
            marker: "blue".to_string(),
        }
    }
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self::polygon()
    }
}

struct Canvas {
    ext: Extent,
    width: u32,
    height: f64,
    scale: f64,
}

impl Canvas {
    fn fit(parts: &[&[Vector2<f64>]]) -> Option<Self> {
        let all: Vec<Vector2<f64>> = parts.iter().flat_map(|p| p.iter().copied()).collect();
        let ext = Extent::of(&all)?;
        let (dx, dy) = (ext.width(), ext.height());
        if !(dx > 0.0 && dy > 0.0) {
            return None;
        }
        let height = dy.clamp(100.0, 200.0);
        let width = (dx / dy * height) as u32;
        let scale = dx.max(dy) / (width as f64).max(height);
        Some(Self {
            ext,
            width,
            height,
            scale,
        })
    }

    fn wrap(&self, body: &str) -> String {
        let (l, b, t) = (self.ext.min.x, self.ext.min.y, self.ext.max.y);
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
             width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\" preserveAspectRatio=\"xMinYMin meet\">\
             <g transform=\"matrix(1,0,0,-1,0,{})\">{}</g></svg>",
            self.width,
            self.height,
            l,
            b,
            self.ext.width(),
            self.ext.height(),
            t + b,
            body
        )
    }
}

fn path_data(parts: &[&[Vector2<f64>]]) -> String {
    let mut d = String::new();
    for part in parts {
        let Some((first, rest)) = part.split_first() else {
            continue;
        };
        d.push_str(&format!(" M {},{} ", first.x, first.y));
        for p in rest {
            d.push_str(&format!("L {},{} ", p.x, p.y));
        }
    }
    d.push('z');
    d
}

fn path_element(parts: &[&[Vector2<f64>]], style: &SvgStyle, scale: f64) -> String {
    format!(
        "<path fill-rule=\"evenodd\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" opacity=\"{}\" d=\"{}\"/>",
        style.fill,
        style.stroke,
        1.5 * scale,
        style.opacity,
        path_data(parts)
    )
}

/// Render `parts` (rings or polylines) as one SVG document.
///
/// None when there are no vertices or the extent has zero width or height.
pub fn render_svg(parts: &[&[Vector2<f64>]], style: &SvgStyle) -> Option<String> {
    let canvas = Canvas::fit(parts)?;
    Some(canvas.wrap(&path_element(parts, style, canvas.scale)))
}

/// Render a ring plus circle markers for `points` (e.g. the accepted ones).
pub fn render_with_points(
    ring: &[Vector2<f64>],
    points: &[Vector2<f64>],
    style: &SvgStyle,
) -> Option<String> {
    let parts = [ring];
    let canvas = Canvas::fit(&parts)?;
    let mut body = path_element(&parts, style, canvas.scale);
    let r = 3.0 * canvas.scale;
    for p in points {
        body.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            p.x, p.y, r, style.marker
        ));
    }
    Some(canvas.wrap(&body))
}
