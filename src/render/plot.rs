//! Draws a laid-out tree to an SVG image.
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use std::path::Path;

use crate::errors::MiniTreesError;
use crate::tree::DecisionTree;
use super::layout::hierarchy;


const NODE_RADIUS: i32 = 24;
const NODE_FILL: RGBColor = RGBColor(173, 216, 230);
const LINE_HEIGHT: i32 = 14;


/// Draw `tree` as an SVG image of `width` x `height` pixels
/// at `path`.
/// The root sits at the top;
/// each edge carries its branch value and partition entropy.
pub fn render_svg<P>(
    tree: &DecisionTree,
    path: P,
    width: u32,
    height: u32,
) -> Result<(), MiniTreesError>
    where P: AsRef<Path>,
{
    let placed = hierarchy(tree);
    let max_depth = placed.iter()
        .map(|node| node.depth)
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    let root = SVGBackend::new(path.as_ref(), (width, height))
        .into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    // Logical y equals the depth, growing downwards,
    // so the root ends up on top.
    let area = root.apply_coord_spec(
        Cartesian2d::<RangedCoordf64, RangedCoordf64>::new(
            -0.05..1.05,
            -0.5..max_depth + 0.5,
            (0..width as i32, 0..height as i32),
        )
    );

    let label_style = TextStyle::from(("sans-serif", 12).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center));

    // Edges first, so the node discs cover the line ends.
    for node in placed.iter() {
        let Some(parent) = node.parent else { continue };

        let from = (placed[parent].x, placed[parent].depth as f64);
        let to = (node.x, node.depth as f64);
        area.draw(&PathElement::new(vec![from, to], &BLACK))
            .map_err(render_err)?;

        let mid = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
        for (k, line) in node.edge_label.iter().enumerate() {
            let dy = (k as i32) * LINE_HEIGHT - LINE_HEIGHT / 2;
            area.draw(
                &(EmptyElement::at(mid)
                    + Text::new(line.clone(), (0, dy), label_style.clone()))
            ).map_err(render_err)?;
        }
    }

    for node in placed.iter() {
        let center = (node.x, node.depth as f64);
        area.draw(&Circle::new(center, NODE_RADIUS, NODE_FILL.filled()))
            .map_err(render_err)?;
        area.draw(&Circle::new(center, NODE_RADIUS, &BLACK))
            .map_err(render_err)?;

        let top = -(node.label.len() as i32 - 1) * LINE_HEIGHT / 2;
        for (k, line) in node.label.iter().enumerate() {
            let dy = top + (k as i32) * LINE_HEIGHT;
            area.draw(
                &(EmptyElement::at(center)
                    + Text::new(line.clone(), (0, dy), label_style.clone()))
            ).map_err(render_err)?;
        }
    }

    root.present().map_err(render_err)?;

    Ok(())
}


fn render_err<E: std::error::Error>(e: E) -> MiniTreesError {
    MiniTreesError::Render(e.to_string())
}
