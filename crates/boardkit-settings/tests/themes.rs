//! Theme cascade, manager lifecycle and legacy import, end to end.

use boardkit_core::{Color, Layer, LayerColors};
use boardkit_settings::{
    ColorContext, ColorTheme, SettingsDocument, SettingsManager,
};
use std::path::Path;

fn write_theme(path: &Path, entries: &[(&str, &str)]) {
    let mut doc = SettingsDocument::new();
    for (pointer, value) in entries {
        doc.set(pointer, *value);
    }
    doc.save(path).unwrap();
}

#[test]
fn partial_theme_cascades_onto_base_theme() {
    let dir = tempfile::tempdir().unwrap();
    let base_path = dir.path().join("base.json");
    let derived_path = dir.path().join("derived.json");

    // Base paints wires red; the derived theme only overrides buses.
    write_theme(&base_path, &[("/schematic/wire", "rgb(255, 0, 0)")]);
    write_theme(&derived_path, &[("/schematic/bus", "rgb(0, 0, 255)")]);

    let base = ColorTheme::load(&base_path, None);
    let derived = ColorTheme::load(&derived_path, Some(&base));

    assert_eq!(
        derived.get_color(Layer::Wire, ColorContext::Board),
        Color::rgb(255, 0, 0)
    );
    assert_eq!(
        derived.get_color(Layer::Bus, ColorContext::Board),
        Color::rgb(0, 0, 255)
    );
    // The base itself is unaffected by the derived override.
    assert_ne!(
        base.get_color(Layer::Bus, ColorContext::Board),
        Color::rgb(0, 0, 255)
    );
}

#[test]
fn runtime_overrides_do_not_leak_into_the_base_theme() {
    let dir = tempfile::tempdir().unwrap();
    let base_path = dir.path().join("default.json");
    let custom_path = dir.path().join("custom.json");

    write_theme(&base_path, &[("/schematic/wire", "rgb(255, 0, 0)")]);
    write_theme(&custom_path, &[]);

    let base = ColorTheme::load(&base_path, None);
    let mut custom = ColorTheme::load(&custom_path, Some(&base));
    assert_eq!(
        custom.get_color(Layer::Wire, ColorContext::Board),
        Color::rgb(255, 0, 0)
    );

    custom.set_color(Layer::Wire, ColorContext::Board, Color::rgb(0, 0, 255));
    assert_eq!(
        custom.get_color(Layer::Wire, ColorContext::Board),
        Color::rgb(0, 0, 255)
    );
    assert_eq!(
        base.get_color(Layer::Wire, ColorContext::Board),
        Color::rgb(255, 0, 0)
    );
    // The edit did not change the built-in default either.
    assert_eq!(
        custom.get_default_color(Layer::Wire, ColorContext::Board),
        Color::rgb(255, 0, 0)
    );
}

#[test]
fn palette_cascades_like_colors() {
    let dir = tempfile::tempdir().unwrap();
    let base_path = dir.path().join("base.json");
    let derived_path = dir.path().join("derived.json");

    let mut doc = SettingsDocument::new();
    doc.set("/palette", vec!["rgb(1, 1, 1)", "rgb(2, 2, 2)"]);
    doc.save(&base_path).unwrap();
    write_theme(&derived_path, &[]);

    let base = ColorTheme::load(&base_path, None);
    let derived = ColorTheme::load(&derived_path, Some(&base));
    assert_eq!(
        derived.palette(),
        &[Color::rgb(1, 1, 1), Color::rgb(2, 2, 2)][..]
    );
}

#[test]
fn missing_theme_file_falls_back_without_failing() {
    let dir = tempfile::tempdir().unwrap();
    let theme = ColorTheme::load(&dir.path().join("absent.json"), None);

    // Every layer still resolves, to the compiled-in palette.
    let builtin = ColorTheme::builtin();
    for layer in Layer::ALL {
        assert_eq!(
            theme.get_color(layer, ColorContext::Board),
            builtin.get_color(layer, ColorContext::Board)
        );
    }
}

#[test]
fn get_color_is_total_even_for_unthemed_layers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sparse.json");
    write_theme(&path, &[("/board/copper_front", "rgb(1, 2, 3)")]);

    let theme = ColorTheme::load(&path, None);
    for layer in Layer::ALL {
        // No panic, no error; worst case is black.
        let _ = theme.get_color(layer, ColorContext::Board);
        let _ = theme.get_color(layer, ColorContext::Footprint);
    }
    assert_eq!(
        theme.get_color(Layer::CopperFront, ColorContext::Board),
        Color::rgb(1, 2, 3)
    );
}

#[test]
fn read_only_load_skips_file_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stock.json");
    write_theme(&path, &[("/schematic/wire", "rgb(250, 250, 250)")]);

    let theme = ColorTheme::load_with(&path, None, true);
    let builtin = ColorTheme::builtin();
    assert_eq!(
        theme.get_color(Layer::Wire, ColorContext::Board),
        builtin.get_color(Layer::Wire, ColorContext::Board)
    );
    assert!(!theme.is_writable());
    assert!(theme.save().is_err());
}

#[test]
fn corrupt_theme_file_degrades_to_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let theme = ColorTheme::load(&path, None);
    let builtin = ColorTheme::builtin();
    assert_eq!(
        theme.get_color(Layer::Wire, ColorContext::Board),
        builtin.get_color(Layer::Wire, ColorContext::Board)
    );
    assert_eq!(theme.name, "broken");
}

#[test]
fn layer_colors_seam_matches_board_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.json");
    write_theme(&path, &[("/board/grid", "rgb(9, 9, 9)")]);

    let theme = ColorTheme::load(&path, None);
    let as_seam: &dyn LayerColors = &theme;
    assert_eq!(as_seam.layer_color(Layer::Grid), Color::rgb(9, 9, 9));
}

#[test]
fn theme_round_trips_through_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mine.json");

    let mut theme = ColorTheme::builtin();
    theme.name = "mine".to_string();
    theme.set_color(Layer::Background, ColorContext::Board, Color::rgb(20, 30, 40));
    theme.save_as(&path).unwrap();

    let reloaded = ColorTheme::load(&path, None);
    assert_eq!(reloaded.name, "mine");
    assert_eq!(
        reloaded.get_color(Layer::Background, ColorContext::Board),
        Color::rgb(20, 30, 40)
    );
}

#[test]
fn manager_first_run_creates_default_theme() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = SettingsManager::with_config_dir(dir.path());
    manager.load().unwrap();

    assert!(manager.theme_names().contains(&"default"));
    assert!(dir.path().join("themes/default.json").is_file());
    assert_eq!(manager.active_name(), "default");
}

#[test]
fn manager_discovers_and_cascades_user_themes() {
    let dir = tempfile::tempdir().unwrap();
    let themes = dir.path().join("themes");
    std::fs::create_dir_all(&themes).unwrap();

    write_theme(
        &themes.join("default.json"),
        &[("/schematic/wire", "rgb(255, 0, 0)")],
    );
    write_theme(
        &themes.join("night.json"),
        &[("/board/background", "rgb(0, 0, 0)")],
    );

    let mut manager = SettingsManager::with_config_dir(dir.path());
    manager.load().unwrap();
    assert_eq!(manager.theme_names(), vec!["default", "night"]);

    // The night theme inherits the default's wire override.
    let night = manager.theme("night");
    assert_eq!(
        night.get_color(Layer::Wire, ColorContext::Board),
        Color::rgb(255, 0, 0)
    );
    assert_eq!(
        night.get_color(Layer::Background, ColorContext::Board),
        Color::rgb(0, 0, 0)
    );

    assert!(manager.set_active("night"));
    assert!(!manager.set_active("no-such-theme"));
    assert_eq!(manager.active_name(), "night");
}

#[test]
fn manager_first_run_imports_legacy_colors() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(
        dir.path().join("boardkit.conf"),
        "Color4DWireEx = \"rgb(12, 34, 56)\"\n",
    )
    .unwrap();

    let mut manager = SettingsManager::with_config_dir(dir.path());
    manager.load().unwrap();

    let default = manager.theme("default");
    assert_eq!(
        default.get_color(Layer::Wire, ColorContext::Board),
        Color::rgb(12, 34, 56)
    );
}

#[test]
fn unknown_theme_name_yields_builtin_palette() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = SettingsManager::with_config_dir(dir.path());
    manager.load().unwrap();

    let theme = manager.theme("does-not-exist");
    let builtin = ColorTheme::builtin();
    assert_eq!(
        theme.get_color(Layer::Grid, ColorContext::Board),
        builtin.get_color(Layer::Grid, ColorContext::Board)
    );
}
