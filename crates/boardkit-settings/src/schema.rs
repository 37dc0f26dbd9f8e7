//! Declarative color schemas.
//!
//! Each theme section is described by a static table of parameters
//! instead of per-field code: a parameter binds a JSON-pointer path to
//! a layer and a compiled-in fallback color string. Load, save and the
//! layer lookup all iterate the same tables, so adding a layer is a
//! one-line change here.

use boardkit_core::Layer;

/// One color parameter: where it lives in the document, which layer it
/// paints, and the compiled-in fallback.
#[derive(Debug, Clone, Copy)]
pub struct ColorParam {
    pub path: &'static str,
    pub layer: Layer,
    pub default: &'static str,
}

const fn param(path: &'static str, layer: Layer, default: &'static str) -> ColorParam {
    ColorParam {
        path,
        layer,
        default,
    }
}

/// Colors used when editing a full board document.
pub static BOARD_COLOR_SCHEMA: &[ColorParam] = &[
    param("/board/copper_front", Layer::CopperFront, "rgb(200, 52, 52)"),
    param("/board/copper_back", Layer::CopperBack, "rgb(77, 127, 196)"),
    param("/board/silk_front", Layer::SilkFront, "rgb(242, 237, 161)"),
    param("/board/silk_back", Layer::SilkBack, "rgb(232, 178, 167)"),
    param("/board/fab_front", Layer::FabFront, "rgb(175, 175, 175)"),
    param("/board/fab_back", Layer::FabBack, "rgb(88, 93, 132)"),
    param(
        "/board/courtyard_front",
        Layer::CourtyardFront,
        "rgb(255, 38, 226)",
    ),
    param(
        "/board/courtyard_back",
        Layer::CourtyardBack,
        "rgb(38, 233, 255)",
    ),
    param("/board/edge_cuts", Layer::EdgeCuts, "rgb(208, 210, 205)"),
    param("/board/background", Layer::Background, "rgb(0, 16, 35)"),
    param("/board/grid", Layer::Grid, "rgb(132, 132, 132)"),
    param("/board/cursor", Layer::Cursor, "rgb(255, 255, 255)"),
];

/// Colors used when editing a single footprint. A deliberately smaller
/// set: anything absent falls through to the board section.
pub static FPEDIT_COLOR_SCHEMA: &[ColorParam] = &[
    param(
        "/fpedit/silk_front",
        Layer::SilkFront,
        "rgb(242, 237, 161)",
    ),
    param("/fpedit/silk_back", Layer::SilkBack, "rgb(232, 178, 167)"),
    param("/fpedit/fab_front", Layer::FabFront, "rgb(175, 175, 175)"),
    param("/fpedit/fab_back", Layer::FabBack, "rgb(88, 93, 132)"),
    param("/fpedit/background", Layer::Background, "rgb(0, 16, 35)"),
    param("/fpedit/grid", Layer::Grid, "rgb(132, 132, 132)"),
    param("/fpedit/cursor", Layer::Cursor, "rgb(255, 255, 255)"),
];

/// Colors for the schematic-style layers carried by plain documents.
pub static SCHEMATIC_COLOR_SCHEMA: &[ColorParam] = &[
    param("/schematic/wire", Layer::Wire, "rgb(0, 150, 0)"),
    param("/schematic/bus", Layer::Bus, "rgb(0, 0, 132)"),
    param("/schematic/pin", Layer::Pin, "rgb(132, 0, 0)"),
    param("/schematic/no_connect", Layer::NoConnect, "rgb(0, 0, 132)"),
    param("/schematic/notes", Layer::Notes, "rgb(0, 0, 194)"),
];

/// Compiled-in palette for palette-assignment use cases (cycling item
/// colors). Themes may replace it wholesale via the `/palette` array.
pub static DEFAULT_PALETTE: &[&str] = &[
    "rgb(200, 52, 52)",
    "rgb(127, 200, 127)",
    "rgb(206, 125, 44)",
    "rgb(79, 203, 203)",
    "rgb(219, 98, 139)",
    "rgb(167, 165, 198)",
    "rgb(242, 237, 161)",
    "rgb(141, 183, 206)",
];

/// Every schema section of a theme file, in document order.
pub fn all_sections() -> impl Iterator<Item = &'static ColorParam> {
    BOARD_COLOR_SCHEMA
        .iter()
        .chain(FPEDIT_COLOR_SCHEMA.iter())
        .chain(SCHEMATIC_COLOR_SCHEMA.iter())
}
