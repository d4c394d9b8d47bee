//! SVG plot of the mapped offset across a scroll sweep.
//!
//! Samples [`map_position`] over every scroll offset at which the container
//! is visible and draws the result, with the travel-range endpoints marked.
//! Handy for checking continuity by eye.
//!
//! # Example
//!
//! ```
//! use zenparallax::{AxisGeometry, Bounds, svg::render_sweep_svg};
//!
//! let geometry = AxisGeometry {
//!     container_pos: 500.0,
//!     container_size: 300.0,
//!     element_size: 50.0,
//!     scroll_pos: 0.0,
//!     viewport_size: 800.0,
//! };
//! let svg = render_sweep_svg(Bounds::new(0.0, 300.0), &geometry, false, 64);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::mapper::{AxisGeometry, Bounds, TravelRange, map_position};

/// Plot area width.
const PLOT_W: f64 = 480.0;
/// Plot area height.
const PLOT_H: f64 = 240.0;
/// Margin around the plot area.
const MARGIN: f64 = 40.0;
/// Height of the title line.
const TITLE_H: f64 = 24.0;

/// Render the offset curve for `geometry` as `scroll_pos` sweeps the visible range.
///
/// `geometry.scroll_pos` is ignored. At least two samples are taken.
pub fn render_sweep_svg(
    bounds: Bounds,
    geometry: &AxisGeometry,
    fixed: bool,
    samples: usize,
) -> String {
    let samples = samples.max(2);
    let scroll_min = geometry.container_pos - geometry.viewport_size;
    let scroll_max = geometry.container_pos + geometry.container_size;
    let step = (scroll_max - scroll_min) / (samples - 1) as f64;

    let points: Vec<(f64, f64)> = (0..samples)
        .filter_map(|i| {
            let scroll = scroll_min + step * i as f64;
            map_position(bounds, &geometry.with_scroll(scroll), fixed).map(|pos| (scroll, pos))
        })
        .collect();

    let range = TravelRange::new(bounds, geometry);
    let (lo, hi) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });
    let (lo, hi) = if lo.is_finite() && hi > lo {
        (lo, hi)
    } else {
        (lo.min(0.0) - 1.0, hi.max(0.0) + 1.0)
    };

    let width = (scroll_max - scroll_min).max(f64::EPSILON);
    let to_x = |scroll: f64| MARGIN + (scroll - scroll_min) / width * PLOT_W;
    let to_y = |pos: f64| MARGIN + TITLE_H + (hi - pos) / (hi - lo) * PLOT_H;

    let total_w = PLOT_W + 2.0 * MARGIN;
    let total_h = PLOT_H + 2.0 * MARGIN + TITLE_H;
    let mut svg = String::with_capacity(2048);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .frame { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .curve { fill: none; stroke: #2c6faa; stroke-width: 1.5; }
  .marker { stroke: #c0504d; stroke-width: 1; stroke-dasharray: 4,2; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .frame { fill: #2d2d2d; stroke: #555; }
    .curve { stroke: #5a9fd4; }
  }
</style>
"##,
    );

    let title = format!(
        "bounds {}..{}  element {}  viewport {}{}",
        bounds.min,
        bounds.max,
        geometry.element_size,
        geometry.viewport_size,
        if fixed { "  fixed" } else { "" }
    );
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        total_w / 2.0,
        MARGIN,
        escape_xml(&title)
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="frame"/>"#,
        MARGIN,
        MARGIN + TITLE_H,
        PLOT_W,
        PLOT_H
    ));
    svg.push('\n');

    for scroll in [range.scroll_start, range.scroll_end] {
        if (scroll_min..=scroll_max).contains(&scroll) {
            let x = to_x(scroll);
            svg.push_str(&format!(
                r#"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" class="marker"/>"#,
                MARGIN + TITLE_H,
                MARGIN + TITLE_H + PLOT_H
            ));
            svg.push('\n');
        }
    }

    if !points.is_empty() {
        svg.push_str(r#"<polyline class="curve" points=""#);
        for (i, &(scroll, pos)) in points.iter().enumerate() {
            if i > 0 {
                svg.push(' ');
            }
            svg.push_str(&format!("{:.1},{:.1}", to_x(scroll), to_y(pos)));
        }
        svg.push_str("\"/>\n");
    }

    svg.push_str(&format!(
        r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">scroll {}..{}  offset {:.1}..{:.1}</text>"#,
        total_w / 2.0,
        MARGIN + TITLE_H + PLOT_H + 16.0,
        scroll_min,
        scroll_max,
        lo,
        hi
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> AxisGeometry {
        AxisGeometry {
            container_pos: 500.0,
            container_size: 300.0,
            element_size: 50.0,
            scroll_pos: 0.0,
            viewport_size: 800.0,
        }
    }

    #[test]
    fn svg_is_valid_xml() {
        let svg = render_sweep_svg(Bounds::new(0.0, 300.0), &geometry(), true, 32);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("fixed"));
        assert!(!svg.contains("<<"));
    }

    #[test]
    fn both_endpoints_marked() {
        let svg = render_sweep_svg(Bounds::new(0.0, 300.0), &geometry(), false, 8);
        // Travel range [0, 500] lies inside the visible sweep [-300, 800].
        assert_eq!(svg.matches("class=\"marker\"").count(), 2);
    }

    #[test]
    fn sample_count_floor() {
        let svg = render_sweep_svg(Bounds::new(0.0, 300.0), &geometry(), false, 0);
        let points = svg
            .split("points=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap();
        assert_eq!(points.split(' ').count(), 2);
    }

    #[test]
    fn degenerate_geometry_renders() {
        let g = AxisGeometry {
            container_pos: 0.0,
            container_size: 0.0,
            element_size: 0.0,
            scroll_pos: 0.0,
            viewport_size: 0.0,
        };
        let svg = render_sweep_svg(Bounds::new(0.0, 0.0), &g, false, 4);
        assert!(svg.ends_with("</svg>\n"));
        assert!(!svg.contains("<polyline"));
    }

    #[test]
    #[ignore]
    fn generate_sweep_svgs() {
        let out = concat!(env!("CARGO_MANIFEST_DIR"), "/target/sweep-svgs");
        std::fs::create_dir_all(out).unwrap();
        let cases = [
            ("small_element", geometry(), false),
            ("small_element_fixed", geometry(), true),
            (
                "large_element",
                AxisGeometry {
                    element_size: 1200.0,
                    container_size: 2000.0,
                    ..geometry()
                },
                false,
            ),
        ];
        for (name, g, fixed) in cases {
            let svg = render_sweep_svg(Bounds::new(0.0, g.container_size), &g, fixed, 200);
            std::fs::write(format!("{out}/{name}.svg"), svg).unwrap();
        }
    }
}
