// tests/metadata_tests.rs

use svg_spritesheet::{sprite, Sprite};

#[test]
fn metadata_shape_matches_contract() {
    let mut a = Sprite::new("arrow".to_string(), 8, 6);
    a.x = 0;
    a.y = 0;
    let mut b = Sprite::new("bolt".to_string(), 4, 4);
    b.x = 8;
    b.y = 0;

    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("meta.json");
    sprite::write_metadata(&[a, b], &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    let obj = doc.as_object().unwrap();
    assert_eq!(obj.len(), 2);

    let arrow = &obj["arrow"];
    assert_eq!(arrow["width"], 8);
    assert_eq!(arrow["height"], 6);
    assert_eq!(arrow["x"], 0);
    assert_eq!(arrow["y"], 0);
    // The mask marker is a string literal, not a JSON boolean.
    assert_eq!(arrow["mask"], "true");

    assert_eq!(obj["bolt"]["x"], 8);
}

#[test]
fn metadata_is_pretty_printed_with_four_spaces() {
    let s = Sprite::new("dot".to_string(), 1, 1);
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("meta.json");
    sprite::write_metadata(&[s], &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("    \"dot\""));
    assert!(text.contains("\"mask\": \"true\""));
}
