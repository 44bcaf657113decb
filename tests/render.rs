use minitrees::{Id3Builder, Sample};
use minitrees::render::{digraph, hierarchy, render_svg};

use polars::prelude::*;

use std::fs;


// Same weather table as `tests/tree.rs`.
fn weather() -> Sample {
    let outlook = Series::new("Outlook", &[
        "Sunny", "Sunny", "Overcast", "Rain", "Rain", "Rain", "Overcast",
        "Sunny", "Sunny", "Rain", "Sunny", "Overcast", "Overcast", "Rain",
    ]);
    let temperature = Series::new("Temperature", &[
        "Hot", "Hot", "Hot", "Mild", "Cool", "Cool", "Cool",
        "Mild", "Cool", "Mild", "Mild", "Mild", "Hot", "Mild",
    ]);
    let humidity = Series::new("Humidity", &[
        "High", "High", "High", "High", "Normal", "Normal", "Normal",
        "High", "Normal", "Normal", "Normal", "High", "Normal", "High",
    ]);
    let wind = Series::new("Wind", &[
        "Weak", "Strong", "Weak", "Weak", "Weak", "Strong", "Strong",
        "Weak", "Weak", "Weak", "Strong", "Strong", "Weak", "Strong",
    ]);
    let play = Series::new("Play", &[
        "No", "No", "Yes", "Yes", "Yes", "No", "Yes",
        "No", "Yes", "Yes", "Yes", "Yes", "Yes", "No",
    ]);

    let df = DataFrame::new(
        vec![outlook, temperature, humidity, wind, play]
    ).unwrap();

    Sample::from_dataframe(df).unwrap()
        .set_target("Play").unwrap()
}


#[test]
fn dot_output_carries_the_renderer_contract() {
    let sample = weather();
    let tree = Id3Builder::new(&sample).build().unwrap().grow();

    let dot = tree.to_dot();
    println!("{dot}");

    assert!(dot.starts_with("digraph decision_tree {"));
    assert!(dot.trim_end().ends_with('}'));

    // The root decision node: attribute and sample count.
    assert!(dot.contains(r#""root" [ label = "Attribute: Outlook\nSamples: 14" ]"#));

    // Path-derived identifiers, one edge per branch.
    assert!(dot.contains(r#""root" -> "root_Overcast""#));
    assert!(dot.contains(r#""root" -> "root_Sunny""#));
    assert!(dot.contains(r#""root" -> "root_Rain""#));

    // The pure branch edge carries its entropy.
    assert!(dot.contains(r#"Outlook = Overcast\nEntropy: 0.0000"#));

    // A leaf labeled with the target name and class.
    assert!(dot.contains(r#"Play: Yes\nSamples: 4"#));

    // A second-level identifier extends its parent's path.
    assert!(dot.contains(r#""root_Sunny" -> "root_Sunny_High""#));
}


#[test]
fn layout_centers_parents_over_their_children() {
    let sample = weather();
    let tree = Id3Builder::new(&sample).build().unwrap().grow();

    let placed = hierarchy(&tree);

    // Depth-first order: the root comes first.
    assert_eq!(placed[0].x, 0.5);
    assert_eq!(placed[0].depth, 0);
    assert_eq!(placed[0].parent, None);
    assert!(placed[0].edge_label.is_empty());

    for (k, node) in placed.iter().enumerate().skip(1) {
        let parent = node.parent.unwrap();
        assert!(parent < k);
        assert_eq!(node.depth, placed[parent].depth + 1);
        assert!(!node.edge_label.is_empty());
        assert!(0.0 <= node.x && node.x <= 1.0);
    }

    // Children of one parent share its span equally,
    // so their centers average to the parent's center.
    let children = placed.iter()
        .filter(|node| node.parent == Some(0))
        .collect::<Vec<_>>();
    assert_eq!(children.len(), 3);

    let mean = children.iter().map(|node| node.x).sum::<f64>()
        / children.len() as f64;
    assert!((mean - 0.5).abs() < 1e-9);
}


#[test]
fn svg_rendering_writes_a_drawing() {
    let sample = weather();
    let tree = Id3Builder::new(&sample).build().unwrap().grow();

    let path = std::env::temp_dir()
        .join(format!("minitrees_render_{}.svg", std::process::id()));

    render_svg(&tree, &path, 1200, 800).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Outlook"));

    fs::remove_file(&path).unwrap();

    // The text backend agrees with the layout:
    // every placed node is drawn.
    let placed = hierarchy(&tree);
    let dot = digraph(&tree);
    let n_nodes = dot.lines()
        .filter(|line| line.contains("label") && !line.contains("->"))
        .count();
    assert_eq!(placed.len(), n_nodes);
}
