use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::color::{self, ConditionColors};
use crate::data::model::GENES;
use crate::net::graph::GeneNetwork;
use crate::net::layout::Layout;

// ---------------------------------------------------------------------------
// Network figure rendering (headless PNG)
// ---------------------------------------------------------------------------

/// Canvas: 11 × 10 inches at 300 dpi.
const WIDTH: u32 = 3300;
const HEIGHT: u32 = 3000;
/// Data-coordinate view around the unit layout, leaving room for nodes.
const VIEW: f64 = 1.3;
/// Node radius and outline ring, px.
const NODE_RADIUS: i32 = 129;
const NODE_OUTLINE: u32 = 6;
/// Strong-edge width per unit |tau|, px (5 pt at 300 dpi).
const STRONG_WIDTH_SCALE: f64 = 20.8;
/// Weak-edge width, px (2 pt at 300 dpi).
const WEAK_WIDTH: u32 = 8;
/// Perpendicular bow of a weak-edge arc, as a fraction of chord length.
const ARC_BOW: f64 = 0.25;
/// Arc sampling resolution.
const ARC_SEGMENTS: usize = 24;

/// Render one network as a PNG figure using the shared layout.
///
/// Weak edges draw first as faint gray arcs, strong edges as straight
/// lines with width proportional to |tau|, then ringed nodes and centered
/// bold gene labels on top.
pub fn draw_network(
    net: &GeneNetwork,
    layout: &Layout,
    title: &str,
    path: &Path,
    colors: ConditionColors,
) -> Result<()> {
    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).context("filling figure background")?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 67).into_font().style(FontStyle::Bold))
        .margin(40)
        .build_cartesian_2d(-VIEW..VIEW, -VIEW..VIEW)
        .context("building figure coordinates")?;

    let weak_style = color::weak_edge().mix(0.35).stroke_width(WEAK_WIDTH);
    chart.draw_series(net.weak_edges().map(|e| {
        PathElement::new(
            arc_points(layout.position(e.a), layout.position(e.b)),
            weak_style,
        )
    }))?;

    let strong_color = color::to_plotters(colors.strong_edge);
    chart.draw_series(net.strong_edges().map(|e| {
        PathElement::new(
            vec![layout.position(e.a), layout.position(e.b)],
            strong_color.mix(0.9).stroke_width(strong_width(e.tau)),
        )
    }))?;

    let node_fill = color::to_plotters(colors.node_fill);
    chart.draw_series(
        (0..GENES.len()).map(|i| Circle::new(layout.position(i), NODE_RADIUS, node_fill.filled())),
    )?;
    chart.draw_series((0..GENES.len()).map(|i| {
        Circle::new(
            layout.position(i),
            NODE_RADIUS,
            BLACK.stroke_width(NODE_OUTLINE),
        )
    }))?;

    let label_style = ("sans-serif", 46)
        .into_font()
        .style(FontStyle::Bold)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(
        GENES
            .iter()
            .enumerate()
            .map(|(i, gene)| Text::new(*gene, layout.position(i), label_style.clone())),
    )?;

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Stroke width of a strong edge, proportional to |tau|, never below 1 px.
fn strong_width(tau: f64) -> u32 {
    (STRONG_WIDTH_SCALE * tau.abs()).round().max(1.0) as u32
}

/// Sample a quadratic arc between two layout points, bowed perpendicular
/// to the chord.
fn arc_points(a: (f64, f64), b: (f64, f64)) -> Vec<(f64, f64)> {
    let (mx, my) = ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0);
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (cx, cy) = (mx - dy * ARC_BOW, my + dx * ARC_BOW);

    (0..=ARC_SEGMENTS)
        .map(|s| {
            let t = s as f64 / ARC_SEGMENTS as f64;
            let u = 1.0 - t;
            (
                u * u * a.0 + 2.0 * u * t * cx + t * t * b.0,
                u * u * a.1 + 2.0 * u * t * cy + t * t * b.1,
            )
        })
        .collect()
}
