// Rust guideline compliant 2026-08-12

//! Merging of coverage report trees.
//!
//! Reports are folded pairwise into an accumulator. At every level of the
//! tree (packages, classes, methods, lines) the same grouping routine runs:
//! each incoming element is matched against the accumulator's children by an
//! attribute key, merged in place on a hit and appended on a miss. Line
//! elements are the leaves where actual coverage data combines: `hits`
//! counts add up, and branch condition data is taken from whichever side
//! reports the higher percentage.

use crate::error::{Error, Result};
use crate::tree::{Element, Node};

/// Attributes identifying a package within `<packages>`.
const PACKAGE_KEY: &[&str] = &["name"];
/// Attributes identifying a class within `<classes>`.
const CLASS_KEY: &[&str] = &["filename", "name"];
/// Attributes identifying a method within `<methods>`.
const METHOD_KEY: &[&str] = &["name"];
/// Attributes identifying a line within `<lines>`.
const LINE_KEY: &[&str] = &["number"];

const CONDITION_COVERAGE: &str = "condition-coverage";

/// Folds a sequence of reports into a single merged report.
///
/// The first report becomes the accumulator and every subsequent report is
/// merged into it, left to right.
///
/// # Errors
///
/// Returns [`Error::InsufficientInput`] if fewer than two reports are
/// supplied, or any error produced by a pairwise merge.
pub fn merge_all(reports: Vec<Element>) -> Result<Element> {
    if reports.len() < 2 {
        return Err(Error::InsufficientInput(reports.len()));
    }

    let mut reports = reports.into_iter();
    let mut merged = match reports.next() {
        Some(first) => first,
        None => return Err(Error::InsufficientInput(0)),
    };
    for incoming in reports {
        merge_reports(&mut merged, incoming)?;
    }
    Ok(merged)
}

/// Merges one report into another, mutating the accumulator in place.
///
/// Coverage present only in `incoming` is appended; coverage present in
/// both is combined per level. An incoming report without a `<packages>`
/// container contributes nothing and leaves the accumulator untouched.
///
/// # Errors
///
/// Returns an error when either report does not match the expected tree
/// shape or carries non-numeric coverage counts.
pub fn merge_reports(merged: &mut Element, mut incoming: Element) -> Result<()> {
    let packages = take_entries(&mut incoming, "packages", "package");
    merge_level(merged, packages, "packages", PACKAGE_KEY, merge_packages)
}

/// Removes the entries of a container child, e.g. the `<package>` elements
/// under `<packages>`. A missing container yields no entries.
fn take_entries(parent: &mut Element, container: &str, entry: &str) -> Vec<Element> {
    match parent.find_child_mut(container) {
        Some(container) => container.take_elements(entry),
        None => Vec::new(),
    }
}

/// Merges incoming entries into the container child of `parent`.
///
/// With no incoming entries this is a no-op; otherwise the container must
/// exist on the accumulator side.
fn merge_level<F>(
    parent: &mut Element,
    incoming: Vec<Element>,
    container: &str,
    key: &[&str],
    merge_fn: F,
) -> Result<()>
where
    F: Fn(&mut Element, Element) -> Result<()>,
{
    if incoming.is_empty() {
        return Ok(());
    }
    match parent.find_child_mut(container) {
        Some(target) => merge_group(target, incoming, key, merge_fn),
        None => Err(Error::MalformedReport(format!(
            "<{}> has no <{}> container",
            parent.name, container
        ))),
    }
}

/// Groups incoming elements into a container by attribute key.
///
/// Each incoming element either merges into the existing child that shares
/// its key or is appended as a new child. Matching scans the container's
/// live children, so two incoming entries with the same key collapse into
/// one merged child.
fn merge_group<F>(
    container: &mut Element,
    incoming: Vec<Element>,
    key: &[&str],
    merge_fn: F,
) -> Result<()>
where
    F: Fn(&mut Element, Element) -> Result<()>,
{
    for item in incoming {
        let item_key = item.attribute_chain(key)?;
        let mut matched = None;
        for (index, node) in container.children.iter().enumerate() {
            if let Node::Element(existing) = node {
                if existing.name == item.name && existing.attribute_chain(key)? == item_key {
                    matched = Some(index);
                    break;
                }
            }
        }
        match matched {
            Some(index) => {
                if let Node::Element(existing) = &mut container.children[index] {
                    merge_fn(existing, item)?;
                }
            }
            None => container.append_element(item),
        }
    }
    Ok(())
}

/// Merges two packages: classes group by `filename` plus `name`.
fn merge_packages(merged: &mut Element, mut incoming: Element) -> Result<()> {
    let classes = take_entries(&mut incoming, "classes", "class");
    merge_level(merged, classes, "classes", CLASS_KEY, merge_classes)
}

/// Merges two classes: lines group by `number`, methods group by `name`.
fn merge_classes(merged: &mut Element, mut incoming: Element) -> Result<()> {
    let lines = take_entries(&mut incoming, "lines", "line");
    merge_level(merged, lines, "lines", LINE_KEY, merge_lines)?;

    let methods = take_entries(&mut incoming, "methods", "method");
    merge_level(merged, methods, "methods", METHOD_KEY, merge_methods)
}

/// Merges two methods: lines group by `number`.
fn merge_methods(merged: &mut Element, mut incoming: Element) -> Result<()> {
    let lines = take_entries(&mut incoming, "lines", "line");
    merge_level(merged, lines, "lines", LINE_KEY, merge_lines)
}

/// Merges two line elements.
///
/// `hits` counts add up. When both lines carry `condition-coverage`, the
/// side with the strictly higher percentage wins the attribute and the
/// branch detail child; on a tie the accumulator keeps its own. A line that
/// carries the attribute on only one side is left as the accumulator has it.
fn merge_lines(merged: &mut Element, mut incoming: Element) -> Result<()> {
    let hits = parse_count(merged, "hits")?.saturating_add(parse_count(&incoming, "hits")?);
    merged.set_attr("hits", hits.to_string());

    let first = merged.attr(CONDITION_COVERAGE).map(str::to_string);
    let second = incoming.attr(CONDITION_COVERAGE).map(str::to_string);
    if let (Some(first), Some(second)) = (first, second) {
        let first_pct = condition_percentage(merged, &first)?;
        let second_pct = condition_percentage(&incoming, &second)?;
        if second_pct > first_pct {
            merged.set_attr(CONDITION_COVERAGE, second);
            let detail = incoming.take_first_element().ok_or_else(|| {
                Error::MalformedReport(
                    "incoming line carries condition-coverage but no branch detail child"
                        .to_string(),
                )
            })?;
            if !merged.replace_first_element(detail) {
                return Err(Error::MalformedReport(
                    "line carries condition-coverage but no branch detail child".to_string(),
                ));
            }
        }
    }
    Ok(())
}

/// Parses a non-negative integer attribute such as `hits`.
fn parse_count(element: &Element, attribute: &str) -> Result<u64> {
    let value = element.require_attr(attribute)?;
    value.trim().parse().map_err(|_| Error::InvalidNumber {
        element: element.name.clone(),
        attribute: attribute.to_string(),
        value: value.to_string(),
    })
}

/// Extracts the integer percentage from a `condition-coverage` value.
///
/// The percentage is the text before the first `%`, e.g. `75` out of
/// `"75% (3/4)"`. A value without a `%` must be an integer in full.
fn condition_percentage(element: &Element, value: &str) -> Result<i64> {
    let text = match value.split_once('%') {
        Some((before, _)) => before,
        None => value,
    };
    text.trim().parse().map_err(|_| Error::InvalidNumber {
        element: element.name.clone(),
        attribute: CONDITION_COVERAGE.to_string(),
        value: value.to_string(),
    })
}
