// File: crates/linechart-render-svg/src/lib.rs
// Summary: SVG renderer crate; draws a RenderPlan as a standalone SVG document.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use linechart_core::{Palette, PointPx, RenderPlan};

const TICK_LEN: f32 = 6.0;
const STROKE_WIDTH: f32 = 2.0;
const TITLE_OFFSET: f32 = 10.0;

/// Draws render plans onto SVG surfaces. Each call regenerates the whole
/// document from the plan, so writing over a previous output fully replaces
/// it; nothing accumulates across redraws.
#[derive(Clone, Debug, Default)]
pub struct SvgRenderer {
    palette: Palette,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom stroke palette; color indices in the plan select into it.
    pub fn with_palette(palette: Palette) -> Self {
        Self { palette }
    }

    /// Produce a complete SVG document for `plan`.
    pub fn render_to_string(&self, plan: &RenderPlan) -> String {
        let inner_w = plan.inner_width();
        let inner_h = plan.inner_height();

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            plan.width, plan.height
        );
        let _ = writeln!(
            svg,
            r##"<rect width="{}" height="{}" fill="#FFFFFF"/>"##,
            plan.width, plan.height
        );
        let _ = writeln!(
            svg,
            r#"<g transform="translate({},{})">"#,
            plan.insets.left, plan.insets.top
        );

        self.write_axes(&mut svg, plan, inner_w, inner_h);
        self.write_paths(&mut svg, plan);
        self.write_title(&mut svg, plan, inner_w);

        svg.push_str("</g>\n</svg>\n");
        svg
    }

    /// Render `plan` to an SVG file, creating parent directories as needed.
    pub fn render_to_file(&self, plan: &RenderPlan, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir for '{}'", path.display()))?;
        }
        std::fs::write(path, self.render_to_string(plan))
            .with_context(|| format!("write SVG '{}'", path.display()))?;
        Ok(())
    }

    fn write_axes(&self, svg: &mut String, plan: &RenderPlan, inner_w: f32, inner_h: f32) {
        // X axis along the bottom of the plot area.
        let _ = writeln!(
            svg,
            r##"<line x1="0" y1="{inner_h:.2}" x2="{inner_w:.2}" y2="{inner_h:.2}" stroke="#333333"/>"##
        );
        for t in &plan.x_ticks {
            let _ = writeln!(
                svg,
                r##"<line x1="{x:.2}" y1="{inner_h:.2}" x2="{x:.2}" y2="{y2:.2}" stroke="#333333"/>"##,
                x = t.px,
                y2 = inner_h + TICK_LEN,
            );
            let _ = writeln!(
                svg,
                r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" font-size="11">{label}</text>"#,
                x = t.px,
                y = inner_h + TICK_LEN + 12.0,
                label = escape_xml(&t.label),
            );
        }

        // Y axis on the left.
        let _ = writeln!(
            svg,
            r##"<line x1="0" y1="0" x2="0" y2="{inner_h:.2}" stroke="#333333"/>"##
        );
        for t in &plan.y_ticks {
            let _ = writeln!(
                svg,
                r##"<line x1="{x1:.2}" y1="{y:.2}" x2="0" y2="{y:.2}" stroke="#333333"/>"##,
                x1 = -TICK_LEN,
                y = t.px,
            );
            let _ = writeln!(
                svg,
                r#"<text x="{x:.2}" y="{y:.2}" text-anchor="end" font-size="11">{label}</text>"#,
                x = -(TICK_LEN + 3.0),
                y = t.px + 4.0,
                label = escape_xml(&t.label),
            );
        }
    }

    fn write_paths(&self, svg: &mut String, plan: &RenderPlan) {
        for sub in &plan.sub_series {
            let stroke = self.palette.color(sub.color_index).to_hex();
            for segment in &sub.segments {
                if segment.is_empty() {
                    continue;
                }
                let _ = writeln!(
                    svg,
                    r#"<path d="{d}" fill="none" stroke="{stroke}" stroke-width="{STROKE_WIDTH}"/>"#,
                    d = path_data(segment),
                );
            }
        }
    }

    fn write_title(&self, svg: &mut String, plan: &RenderPlan, inner_w: f32) {
        let _ = writeln!(
            svg,
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" font-size="16" font-weight="bold">{title}</text>"#,
            x = inner_w / 2.0,
            y = -TITLE_OFFSET,
            title = escape_xml(&plan.title),
        );
    }
}

/// SVG path commands for one unbroken vertex run.
fn path_data(segment: &[PointPx]) -> String {
    let mut d = String::new();
    for (i, p) in segment.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{}{:.2} {:.2}", cmd, p.x, p.y);
    }
    d
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
