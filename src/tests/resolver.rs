use super::DegreeResolver;
use crate::degree::{HeadingDegree, ResolutionBounds};
use crate::diagnostics::{ConfigurationWarning, DiagnosticSink};
use crate::document::Document;
use crate::heading::SmartHeading;
use indextree::NodeId;

fn bounds(min: u8, max: u8) -> ResolutionBounds {
    ResolutionBounds::from_values(min, max).unwrap()
}

fn marker() -> SmartHeading {
    SmartHeading::new(ResolutionBounds::default(), vec![])
}

fn resolve(doc: &Document, start: NodeId, min: u8, max: u8) -> u8 {
    let mut warnings: Vec<ConfigurationWarning> = Vec::new();
    DegreeResolver::new(doc)
        .resolve(start, bounds(min, max), &mut warnings)
        .get()
}

/// Nested sections, each opening with a heading marker; returns the innermost marker.
///
/// The innermost marker sits `levels` heading groups deep, so it resolves to `levels` when
/// the bounds allow it.
fn outline(levels: usize) -> (Document, NodeId) {
    let mut doc = Document::new();
    let mut parent = doc.root();
    let mut heading = parent;
    for _ in 0..levels {
        let section = doc.append_element(parent, "section", vec![]);
        heading = doc.append_heading(section, marker());
        doc.append_text(heading, "Title");
        doc.append_element(section, "p", vec![]);
        parent = section;
    }
    (doc, heading)
}

/// Deeply nested divs with no headings anywhere above the target.
fn flat(depth: usize) -> (Document, NodeId) {
    let mut doc = Document::new();
    let mut parent = doc.root();
    for _ in 0..depth {
        doc.append_element(parent, "p", vec![]);
        parent = doc.append_element(parent, "div", vec![]);
    }
    let target = doc.append_heading(parent, marker());
    (doc, target)
}

#[test]
fn test_scenario_uncle_heading_counts_once() {
    // root -> A -> B -> target, A opens with a heading, B does not
    let mut doc = Document::new();
    let root = doc.root();
    let a = doc.append_element(root, "article", vec![]);
    doc.append_element(a, "h2", vec![]);
    let b = doc.append_element(a, "div", vec![]);
    doc.append_element(b, "p", vec![]);
    let target = doc.append_heading(b, marker());

    assert_eq!(resolve(&doc, target, 1, 6), 2);
}

#[test]
fn test_scenario_directly_under_root() {
    let mut doc = Document::new();
    let root = doc.root();
    let target = doc.append_heading(root, marker());

    assert_eq!(resolve(&doc, target, 1, 6), 1);
}

#[test]
fn test_scenario_inverted_bounds_warns_once() {
    let (doc, target) = outline(3);
    let mut warnings: Vec<ConfigurationWarning> = Vec::new();

    let degree = DegreeResolver::new(&doc).resolve(target, bounds(3, 2), &mut warnings);

    assert_eq!(
        warnings,
        vec![ConfigurationWarning {
            min: HeadingDegree::new(3).unwrap(),
            max: HeadingDegree::new(2).unwrap(),
        }]
    );
    assert_eq!(degree.get(), 5);
}

#[test]
fn test_inverted_bounds_never_pass_six() {
    let (doc, target) = outline(10);

    assert_eq!(resolve(&doc, target, 4, 2), 6);
}

#[test]
fn test_scenario_saturates_at_max() {
    let (doc, target) = outline(6);

    assert_eq!(resolve(&doc, target, 1, 3), 3);
}

#[test]
fn test_root_start_returns_min() {
    let doc = Document::new();

    for min in 1..=6 {
        for max in min..=6 {
            assert_eq!(resolve(&doc, doc.root(), min, max), min);
        }
    }
}

#[test]
fn test_result_within_bounds() {
    for levels in 0..9 {
        let (doc, target) = outline(levels);
        for min in 1..=6 {
            for max in min..=6 {
                let degree = resolve(&doc, target, min, max);
                assert!(
                    (min..=max).contains(&degree),
                    "degree {degree} outside [{min}, {max}] at {levels} levels"
                );
            }
        }
    }
}

#[test]
fn test_full_outline_reaches_max() {
    let (doc, target) = outline(6);

    for min in 1..=6 {
        for max in min..=6 {
            assert_eq!(resolve(&doc, target, min, max), max);
        }
    }
}

#[test]
fn test_no_headings_above_returns_min() {
    for depth in [0, 1, 5, 20] {
        let (doc, target) = flat(depth);
        for min in 1..=6 {
            assert_eq!(resolve(&doc, target, min, 6), min);
        }
    }
}

#[test]
fn test_outline_depth_sets_degree() {
    for levels in 1..=6 {
        let (doc, target) = outline(levels);
        assert_eq!(usize::from(resolve(&doc, target, 1, 6)), levels);
    }
}

#[test]
fn test_idempotent_on_unchanged_tree() {
    let (doc, target) = outline(4);

    let first = resolve(&doc, target, 2, 5);
    let second = resolve(&doc, target, 2, 5);

    assert_eq!(first, second);
}

#[test]
fn test_monotonic_in_max() {
    for levels in 0..8 {
        let (doc, target) = outline(levels);
        for min in 1..=6 {
            let mut previous = 0;
            for max in min..=6 {
                let degree = resolve(&doc, target, min, max);
                assert!(degree >= previous);
                previous = degree;
            }
        }
    }
}

#[test]
fn test_only_first_child_is_inspected() {
    let mut doc = Document::new();
    let root = doc.root();
    let outer = doc.append_element(root, "section", vec![]);
    doc.append_element(outer, "p", vec![]);
    doc.append_element(outer, "h1", vec![]);
    let inner = doc.append_element(outer, "div", vec![]);
    let target = doc.append_heading(inner, marker());

    assert_eq!(resolve(&doc, target, 1, 6), 1);
}

#[test]
fn test_text_before_heading_is_skipped() {
    let mut doc = Document::new();
    let root = doc.root();
    let outer = doc.append_element(root, "section", vec![]);
    doc.append_text(outer, "\n  ");
    doc.append_element(outer, "H3", vec![]);
    let inner = doc.append_element(outer, "div", vec![]);
    let target = doc.append_heading(inner, marker());

    assert_eq!(resolve(&doc, target, 1, 6), 2);
}

#[test]
fn test_valid_bounds_do_not_warn() {
    struct Panicking;
    impl DiagnosticSink for Panicking {
        fn report(&mut self, warning: ConfigurationWarning) {
            panic!("unexpected warning: {warning}");
        }
    }

    let (doc, target) = outline(3);
    let degree = DegreeResolver::new(&doc).resolve(target, bounds(2, 2), &mut Panicking);

    assert_eq!(degree.get(), 2);
}
