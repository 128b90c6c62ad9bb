use blockform::{
    block_to_string, encode_as_block, encode_into_body, to_string, Body, Entry, FormatOptions,
    Kind, Record, Shape, Value,
};
use std::sync::Arc;

fn constraints_shape() -> Arc<Shape> {
    Shape::block("constraints")
        .with_attr("os")
        .with_attr("arch")
        .shared()
}

fn service_shape() -> Arc<Shape> {
    Shape::block("service")
        .with_label("name")
        .with_attr_kind("executable", Kind::Seq)
        .shared()
}

fn meta_shape() -> Arc<Shape> {
    Shape::block("meta").with_attr("value").shared()
}

fn app_shape() -> Arc<Shape> {
    Shape::document("app")
        .with_attr("name")
        .with_attr("description")
        .with_block("constraints", Kind::Single)
        .with_block("service", Kind::Seq)
        .with_block("meta", Kind::Map)
        .shared()
}

fn service(name: &str, exe: &[&str]) -> Record {
    let mut rec = Record::new(service_shape());
    rec.set("name", name).unwrap();
    rec.set("executable", Value::seq(exe.iter().copied())).unwrap();
    rec
}

fn sample_app() -> Record {
    let mut constraints = Record::new(constraints_shape());
    constraints.set("os", "linux").unwrap();
    constraints.set("arch", "amd64").unwrap();

    let mut hello = Record::new(meta_shape());
    hello.set("value", "world").unwrap();

    let mut app = Record::new(app_shape());
    app.set("name", "awesome-app").unwrap();
    app.set("description", "Such an awesome application").unwrap();
    app.set("constraints", constraints).unwrap();
    app.set(
        "service",
        Value::seq([
            Value::from(service("web", &["./web", "--listen=:8080"])),
            Value::from(service("worker", &["./worker"])),
        ]),
    )
    .unwrap();
    app.set("meta", Value::map([("hello", hello)])).unwrap();
    app
}

#[test]
fn test_full_app_rendering() {
    let expected = r#"name = "awesome-app"
description = "Such an awesome application"

constraints {
  os = "linux"
  arch = "amd64"
}

service "web" {
  executable = ["./web", "--listen=:8080"]
}
service "worker" {
  executable = ["./worker"]
}

meta "hello" {
  value = "world"
}
"#;

    assert_eq!(to_string(&sample_app()).unwrap(), expected);
}

#[test]
fn test_encode_as_named_block() {
    let block = encode_as_block(&sample_app(), "app").unwrap();
    assert_eq!(block.block_type, "app");
    assert!(block.labels.is_empty());

    let text = block_to_string(&block, FormatOptions::new());
    assert!(text.starts_with("app {\n  name = \"awesome-app\"\n"));
    assert!(text.ends_with("}\n"));
}

#[test]
fn test_body_entry_structure() {
    let mut body = Body::new();
    encode_into_body(&sample_app(), &mut body).unwrap();

    // Two attributes, then one constraints block, two service blocks in
    // sequence order, one meta block with the synthesized label.
    assert_eq!(body.len(), 6);
    let names: Vec<String> = body
        .iter()
        .map(|e| match e {
            Entry::Attribute(a) => a.name.clone(),
            Entry::Block(b) => b.block_type.clone(),
        })
        .collect();
    assert_eq!(
        names,
        vec!["name", "description", "constraints", "service", "service", "meta"]
    );

    match &body.entries()[5] {
        Entry::Block(meta) => assert_eq!(meta.labels, vec!["hello"]),
        _ => panic!("expected meta block"),
    }
}

#[test]
fn test_double_encode_is_byte_identical() {
    let app = sample_app();
    let first = to_string(&app).unwrap();
    let second = to_string(&app).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unset_optional_block_emits_nothing() {
    let mut app = Record::new(app_shape());
    app.set("name", "bare").unwrap();
    let text = to_string(&app).unwrap();
    assert_eq!(text, "name = \"bare\"\n");
}

#[test]
fn test_empty_seq_attribute_emits_empty_literal() {
    let shape = Shape::document("app")
        .with_attr_kind("tags", Kind::Seq)
        .shared();
    let mut rec = Record::new(shape);
    rec.set("tags", Value::Seq(Vec::new())).unwrap();
    assert_eq!(to_string(&rec).unwrap(), "tags = []\n");
}

#[test]
fn test_empty_map_attribute_emits_empty_literal() {
    let shape = Shape::document("app")
        .with_attr_kind("extra", Kind::Map)
        .shared();
    let mut rec = Record::new(shape);
    rec.set("extra", Value::map(Vec::<(String, Value)>::new())).unwrap();
    assert_eq!(to_string(&rec).unwrap(), "extra = {}\n");
}

#[test]
fn test_map_attribute_object_literal_sorted() {
    let shape = Shape::document("app")
        .with_attr_kind("config", Kind::Map)
        .shared();
    let mut rec = Record::new(shape);
    rec.set(
        "config",
        Value::map([
            ("command", Value::from("/bin/sleep")),
            ("args", Value::seq(["1"])),
        ]),
    )
    .unwrap();

    assert_eq!(
        to_string(&rec).unwrap(),
        "config = { args = [\"1\"], command = \"/bin/sleep\" }\n"
    );
}

#[test]
fn test_deeply_nested_blocks() {
    let check = Shape::block("check").with_attr("path").shared();
    let svc = Shape::block("service")
        .with_label("name")
        .with_block("check", Kind::Single)
        .shared();
    let app = Shape::document("app")
        .with_block("service", Kind::Seq)
        .shared();

    let mut c = Record::new(check);
    c.set("path", "/healthz").unwrap();
    let mut s = Record::new(svc);
    s.set("name", "web").unwrap();
    s.set("check", c).unwrap();
    let mut root = Record::new(app);
    root.set("service", Value::seq([Value::from(s)])).unwrap();

    let expected = r#"service "web" {
  check {
    path = "/healthz"
  }
}
"#;
    assert_eq!(to_string(&root).unwrap(), expected);
}

#[test]
fn test_compact_rendering() {
    let text =
        blockform::to_string_with_options(&sample_app(), FormatOptions::compact()).unwrap();
    assert!(!text.contains("\n\n"));
    assert!(text.contains("service \"web\" {\n"));
}
