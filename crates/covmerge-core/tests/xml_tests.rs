// Rust guideline compliant 2026-08-12

//! Unit tests for XML parsing and serialization.

use covmerge_core::xml::{parse_file, parse_str, write_file, write_string};
use covmerge_core::{Element, Error, Node};
use tempfile::TempDir;

#[test]
fn test_parse_simple_report() {
    let root = parse_str(
        r#"<coverage line-rate="0.75" branch-rate="0.5">
             <packages>
               <package name="core"/>
             </packages>
           </coverage>"#,
    )
    .expect("Parse failed");

    assert_eq!(root.name, "coverage");
    assert_eq!(root.attr("line-rate"), Some("0.75"));
    assert_eq!(root.attr("branch-rate"), Some("0.5"));

    let packages = root.find_child("packages").expect("No <packages>");
    let package = packages.first_element().expect("No <package>");
    assert_eq!(package.attr("name"), Some("core"));
    assert!(package.children.is_empty());
}

#[test]
fn test_parse_preserves_attribute_order() {
    let root = parse_str(r#"<line number="10" hits="3" branch="true"/>"#).expect("Parse failed");
    let keys: Vec<&str> = root.attributes.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["number", "hits", "branch"]);
}

#[test]
fn test_parse_drops_whitespace_between_tags() {
    let root = parse_str("<lines>\n  <line number=\"1\" hits=\"0\"/>\n</lines>").expect("Parse failed");
    assert_eq!(root.children.len(), 1);
    assert!(matches!(root.children[0], Node::Element(_)));
}

#[test]
fn test_parse_keeps_text_content() {
    let root = parse_str(r"<sources><source>C:\build\gammu</source></sources>").expect("Parse failed");
    let source = root.first_element().expect("No <source>");
    assert_eq!(source.children.len(), 1);
    assert!(matches!(&source.children[0], Node::Text(text) if text == r"C:\build\gammu"));
}

#[test]
fn test_parse_unescapes_attributes_and_text() {
    let root = parse_str(r#"<class name="a &amp; b &lt;T&gt;">x &amp; y</class>"#)
        .expect("Parse failed");
    assert_eq!(root.attr("name"), Some("a & b <T>"));
    assert!(matches!(&root.children[0], Node::Text(text) if text == "x & y"));
}

#[test]
fn test_parse_cdata_becomes_text() {
    let root = parse_str("<source><![CDATA[x < y && z]]></source>").expect("Parse failed");
    assert!(matches!(&root.children[0], Node::Text(text) if text == "x < y && z"));
}

#[test]
fn test_parse_skips_declaration_doctype_and_comments() {
    let root = parse_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE coverage SYSTEM "http://cobertura.sourceforge.net/xml/coverage-04.dtd">
<!-- generated -->
<coverage line-rate="1.0"><packages/></coverage>"#,
    )
    .expect("Parse failed");

    assert_eq!(root.name, "coverage");
    assert_eq!(root.children.len(), 1);
}

#[test]
fn test_parse_rejects_empty_document() {
    let err = parse_str("").unwrap_err();
    assert!(matches!(err, Error::MalformedReport(_)));

    let err = parse_str("   \n  ").unwrap_err();
    assert!(matches!(err, Error::MalformedReport(_)));
}

#[test]
fn test_parse_rejects_multiple_roots() {
    let err = parse_str("<coverage/><coverage/>").unwrap_err();
    match err {
        Error::MalformedReport(message) => assert!(message.contains("second root")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_parse_rejects_mismatched_tags() {
    assert!(parse_str("<coverage><packages></coverage>").is_err());
}

#[test]
fn test_parse_rejects_unclosed_root() {
    assert!(parse_str("<coverage><packages>").is_err());
}

#[test]
fn test_write_exact_shape() {
    let mut package = Element::new("package");
    package.set_attr("name", "core");
    let mut packages = Element::new("packages");
    packages.append_element(package);
    let mut root = Element::new("coverage");
    root.set_attr("line-rate", "0.5");
    root.append_element(packages);

    let written = write_string(&root).expect("Write failed");
    let expected = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<coverage line-rate=\"0.5\">\n",
        "  <packages>\n",
        "    <package name=\"core\"/>\n",
        "  </packages>\n",
        "</coverage>\n",
    );
    assert_eq!(written, expected);
}

#[test]
fn test_write_escapes_attributes_and_text() {
    let mut root = Element::new("class");
    root.set_attr("name", "a & b <T>");
    root.children.push(Node::Text("x & y".to_string()));

    let written = write_string(&root).expect("Write failed");
    assert!(written.contains(r#"name="a &amp; b &lt;T&gt;""#));
    assert!(written.contains(">x &amp; y</class>"));
}

#[test]
fn test_write_inlines_text_content() {
    let mut source = Element::new("source");
    source.children.push(Node::Text(r"C:\build\gammu".to_string()));
    let mut root = Element::new("sources");
    root.append_element(source);

    let written = write_string(&root).expect("Write failed");
    assert!(written.contains(r"<source>C:\build\gammu</source>"));
}

#[test]
fn test_round_trip_preserves_structure() {
    let original = parse_str(
        r#"<coverage line-rate="0.58" version="1.9" timestamp="1700000000">
             <sources><source>/work/project</source></sources>
             <packages>
               <package name="core" line-rate="0.58">
                 <classes>
                   <class filename="src/lib.rs" name="lib" line-rate="0.58">
                     <methods>
                       <method name="run" signature="()">
                         <lines><line number="5" hits="2"/></lines>
                       </method>
                     </methods>
                     <lines>
                       <line number="5" hits="2"/>
                       <line number="7" hits="0" branch="true" condition-coverage="50% (1/2)">
                         <conditions>
                           <condition number="0" type="jump" coverage="50%"/>
                         </conditions>
                       </line>
                     </lines>
                   </class>
                 </classes>
               </package>
             </packages>
           </coverage>"#,
    )
    .expect("Parse failed");

    let written = write_string(&original).expect("Write failed");
    let reparsed = parse_str(&written).expect("Reparse failed");
    assert_eq!(original, reparsed);
}

#[test]
fn test_parse_file_and_write_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("input.xml");
    let output = temp_dir.path().join("output.xml");

    std::fs::write(
        &input,
        r#"<coverage line-rate="1.0"><packages><package name="core"/></packages></coverage>"#,
    )
    .expect("Failed to write input");

    let root = parse_file(&input).expect("Parse failed");
    write_file(&output, &root).expect("Write failed");

    let reparsed = parse_file(&output).expect("Reparse failed");
    assert_eq!(root, reparsed);

    let written = std::fs::read_to_string(&output).expect("Failed to read output");
    assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
}

#[test]
fn test_parse_file_missing_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = parse_file(&temp_dir.path().join("absent.xml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
