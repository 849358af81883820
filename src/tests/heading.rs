use super::SmartHeading;
use crate::degree::{HeadingDegree, ResolutionBounds};
use crate::diagnostics::ConfigurationWarning;
use crate::document::Document;
use indextree::NodeId;

fn degree(value: u8) -> HeadingDegree {
    HeadingDegree::new(value).unwrap()
}

/// `<section><h2/><div><h/></div></section>`, returning the marker.
fn nested_once() -> (Document, NodeId) {
    let mut doc = Document::new();
    let root = doc.root();
    let section = doc.append_element(root, "section", vec![]);
    doc.append_element(section, "h2", vec![]);
    let div = doc.append_element(section, "div", vec![]);
    let marker = doc.append_heading(div, SmartHeading::new(ResolutionBounds::default(), vec![]));
    (doc, marker)
}

#[test]
fn test_renders_min_before_mount() {
    let heading = SmartHeading::new(
        ResolutionBounds::new(degree(3), degree(6)),
        vec![("id".to_string(), "intro".to_string())],
    );

    assert_eq!(heading.degree(), degree(3));
    assert_eq!(heading.tag(), "h3");
    assert_eq!(heading.attributes[0].1, "intro");
}

#[test]
fn test_mount_rerenders_when_degree_moves() {
    let (doc, node) = nested_once();
    let mut heading = SmartHeading::new(ResolutionBounds::default(), vec![]);
    let mut warnings: Vec<ConfigurationWarning> = Vec::new();
    let mut renders: Vec<(NodeId, HeadingDegree)> = Vec::new();

    let resolved = heading.mount(&doc, node, &mut warnings, &mut renders);

    assert_eq!(resolved, degree(2));
    assert_eq!(heading.tag(), "h2");
    assert_eq!(renders, vec![(node, degree(2))]);
    assert!(warnings.is_empty());
}

#[test]
fn test_mount_at_min_does_not_rerender() {
    let mut doc = Document::new();
    let root = doc.root();
    let node = doc.append_heading(root, SmartHeading::new(ResolutionBounds::default(), vec![]));
    let mut heading = SmartHeading::new(ResolutionBounds::default(), vec![]);
    let mut warnings: Vec<ConfigurationWarning> = Vec::new();
    let mut renders: Vec<(NodeId, HeadingDegree)> = Vec::new();

    heading.mount(&doc, node, &mut warnings, &mut renders);

    assert!(renders.is_empty());
    assert_eq!(heading.tag(), "h1");
}

#[test]
fn test_set_bounds_recomputes() {
    let (doc, node) = nested_once();
    let mut heading = SmartHeading::new(ResolutionBounds::default(), vec![]);
    let mut warnings: Vec<ConfigurationWarning> = Vec::new();
    let mut renders: Vec<(NodeId, HeadingDegree)> = Vec::new();
    heading.mount(&doc, node, &mut warnings, &mut renders);

    let resolved = heading.set_bounds(
        ResolutionBounds::new(degree(4), degree(6)),
        &doc,
        node,
        &mut warnings,
        &mut renders,
    );

    assert_eq!(resolved, degree(5));
    assert_eq!(renders, vec![(node, degree(2)), (node, degree(5))]);
}

#[test]
fn test_set_bounds_to_same_bounds_is_noop() {
    let (doc, node) = nested_once();
    let bounds = ResolutionBounds::new(degree(1), degree(1));
    let mut heading = SmartHeading::new(bounds, vec![]);
    let mut warnings: Vec<ConfigurationWarning> = Vec::new();
    let mut renders: Vec<(NodeId, HeadingDegree)> = Vec::new();

    heading.set_bounds(bounds, &doc, node, &mut warnings, &mut renders);

    assert!(renders.is_empty());
    assert_eq!(heading.degree(), degree(1));
}

#[test]
fn test_set_bounds_inverted_reports_warning() {
    let (doc, node) = nested_once();
    let mut heading = SmartHeading::new(ResolutionBounds::default(), vec![]);
    let mut warnings: Vec<ConfigurationWarning> = Vec::new();
    let mut renders: Vec<(NodeId, HeadingDegree)> = Vec::new();

    heading.set_bounds(
        ResolutionBounds::new(degree(5), degree(2)),
        &doc,
        node,
        &mut warnings,
        &mut renders,
    );

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].min, degree(5));
    assert_eq!(heading.degree(), degree(6));
}
