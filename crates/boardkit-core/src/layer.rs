//! Drawing layers.
//!
//! A layer is a named drawing plane used for color and visibility
//! partitioning. Board layers come in front/back pairs that swap when
//! an item is flipped to the other side of the board; schematic layers
//! and decorations are unpaired.

use serde::{Deserialize, Serialize};

/// The closed set of drawing planes known to the item model and the
/// color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    // Schematic planes
    Wire,
    Bus,
    Pin,
    NoConnect,
    Notes,

    // Board planes, paired front/back
    CopperFront,
    CopperBack,
    SilkFront,
    SilkBack,
    FabFront,
    FabBack,
    CourtyardFront,
    CourtyardBack,

    // Unpaired board planes
    EdgeCuts,

    // Decorations
    Background,
    Grid,
    Cursor,
}

impl Layer {
    /// Every layer, in the fixed order used by schema tables and palettes.
    pub const ALL: [Layer; 17] = [
        Layer::Wire,
        Layer::Bus,
        Layer::Pin,
        Layer::NoConnect,
        Layer::Notes,
        Layer::CopperFront,
        Layer::CopperBack,
        Layer::SilkFront,
        Layer::SilkBack,
        Layer::FabFront,
        Layer::FabBack,
        Layer::CourtyardFront,
        Layer::CourtyardBack,
        Layer::EdgeCuts,
        Layer::Background,
        Layer::Grid,
        Layer::Cursor,
    ];

    /// The paired layer on the other side of the board. Unpaired layers
    /// map to themselves, so flipping is always an involution.
    pub fn flipped(self) -> Layer {
        match self {
            Layer::CopperFront => Layer::CopperBack,
            Layer::CopperBack => Layer::CopperFront,
            Layer::SilkFront => Layer::SilkBack,
            Layer::SilkBack => Layer::SilkFront,
            Layer::FabFront => Layer::FabBack,
            Layer::FabBack => Layer::FabFront,
            Layer::CourtyardFront => Layer::CourtyardBack,
            Layer::CourtyardBack => Layer::CourtyardFront,
            other => other,
        }
    }

    /// Whether this layer lives on the back side of the board.
    pub fn is_back(self) -> bool {
        matches!(
            self,
            Layer::CopperBack | Layer::SilkBack | Layer::FabBack | Layer::CourtyardBack
        )
    }

    /// Stable token used as the settings-document key for this layer.
    pub fn token(self) -> &'static str {
        match self {
            Layer::Wire => "wire",
            Layer::Bus => "bus",
            Layer::Pin => "pin",
            Layer::NoConnect => "no_connect",
            Layer::Notes => "notes",
            Layer::CopperFront => "copper_front",
            Layer::CopperBack => "copper_back",
            Layer::SilkFront => "silk_front",
            Layer::SilkBack => "silk_back",
            Layer::FabFront => "fab_front",
            Layer::FabBack => "fab_back",
            Layer::CourtyardFront => "courtyard_front",
            Layer::CourtyardBack => "courtyard_back",
            Layer::EdgeCuts => "edge_cuts",
            Layer::Background => "background",
            Layer::Grid => "grid",
            Layer::Cursor => "cursor",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
