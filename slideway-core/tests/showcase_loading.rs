//! Showcase file loading.

use std::io::Write;

use slideway_core::{ConfigError, NavType, Showcase, StartPosition};

const SHOWCASE: &str = r#"
[[slider]]
title = "Dots only"
items = 12
items_per_slide = 2
nav_type = "dots"
start_position = "end"
gap = 16

[[slider]]
title = "Named cards"
labels = ["Alpha", "Beta", "Gamma"]
vertical = true
loop = false
autoplay_speed = 1500
start_position = 1
"#;

#[test]
fn parses_sliders_with_defaults() {
    let showcase = Showcase::from_toml_str(SHOWCASE).unwrap();
    assert_eq!(showcase.sliders.len(), 2);

    let dots = &showcase.sliders[0];
    let config = dots.config();
    assert_eq!(config.item_count, 12);
    assert_eq!(config.total_slides(), 6);
    assert_eq!(config.nav_type, NavType::Dots);
    assert_eq!(config.start_position, StartPosition::End);
    assert_eq!(config.gap, 16.0);
    assert!(config.autoplay);
    assert_eq!(dots.labels()[11], "Item 12");

    let named = &showcase.sliders[1];
    let config = named.config();
    assert_eq!(named.labels(), vec!["Alpha", "Beta", "Gamma"]);
    assert_eq!(config.item_count, 3);
    assert!(config.vertical);
    assert!(!config.looping);
    assert_eq!(config.autoplay_speed, 1500);
    assert_eq!(config.start_position, StartPosition::Slide(1));
    assert_eq!(config.items_per_slide, 4);
}

#[test]
fn loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SHOWCASE.as_bytes()).unwrap();

    let showcase = Showcase::load(file.path()).unwrap();
    assert_eq!(showcase.sliders[1].title, "Named cards");
}

#[test]
fn reports_missing_and_malformed_files() {
    let missing = Showcase::load("/definitely/not/here.toml");
    assert!(matches!(missing, Err(ConfigError::Io(_))));

    let malformed = Showcase::from_toml_str("[[slider]]\ntitle = 3");
    assert!(matches!(malformed, Err(ConfigError::Parse(_))));
}

#[test]
fn demo_page_has_three_sliders_over_twelve_items() {
    let demo = Showcase::demo();
    assert_eq!(demo.sliders.len(), 3);

    let horizontal = demo.sliders[0].config();
    assert_eq!(horizontal.total_slides(), 3);
    assert_eq!(horizontal.autoplay_speed, 5000);
    assert_eq!(horizontal.start_position, StartPosition::Center);

    let vertical = demo.sliders[1].config();
    assert!(vertical.vertical);
    assert_eq!(vertical.nav_type, NavType::None);

    let dots = demo.sliders[2].config();
    assert_eq!(dots.total_slides(), 6);
    assert_eq!(dots.gap, 16.0);
}

#[test]
fn unknown_start_position_keeps_every_slider() {
    let showcase = Showcase::from_toml_str(
        "[[slider]]\ntitle = \"A\"\nitems = 8\nstart_position = \"middle\"\n\
         [[slider]]\ntitle = \"B\"\nitems = 4\n",
    )
    .unwrap();

    assert_eq!(showcase.sliders.len(), 2);
    assert_eq!(showcase.sliders[0].config().start_position, StartPosition::Start);
    assert_eq!(showcase.sliders[0].labels().len(), 8);
    assert_eq!(showcase.sliders[1].title, "B");
    assert_eq!(showcase.sliders[1].config().total_slides(), 1);
}

#[test]
fn negative_counts_are_clamped_instead_of_rejected() {
    let showcase = Showcase::from_toml_str(
        "[[slider]]\ntitle = \"Odd\"\nitems = -3\nitems_per_slide = -2\nautoplay_speed = -10\n\
         [[slider]]\ntitle = \"Fine\"\nitems = 6\nitems_per_slide = 3\n",
    )
    .unwrap();

    let odd = &showcase.sliders[0];
    assert!(odd.labels().is_empty());
    let config = odd.config().normalized();
    assert_eq!(config.items_per_slide, 1);
    assert_eq!(config.autoplay_speed, 3000);
    assert_eq!(config.total_slides(), 0);

    assert_eq!(showcase.sliders[1].config().total_slides(), 2);
}

#[test]
fn misspelled_keys_are_collected_not_applied() {
    let showcase =
        Showcase::from_toml_str("[[slider]]\ntitle = \"Typo\"\nitems = 4\nnav_typ = \"dots\"\n")
            .unwrap();

    let entry = &showcase.sliders[0];
    assert_eq!(entry.config().nav_type, NavType::Both);
    assert!(entry.unknown.contains_key("nav_typ"));
    assert!(!entry.unknown.contains_key("items"));
    assert!(!entry.unknown.contains_key("title"));
    assert_eq!(entry.unknown.len(), 1);
}
