//! Templates module - the seven tetromino shape definitions
//!
//! Each template carries its cells in local coordinates (top-left at 0,0),
//! the fractional point the cells rotate around, and its draw color.

use crate::types::{PieceKind, Rgb};

/// Offset of a single cell relative to the template's top-left corner
pub type CellOffset = (i8, i8);

/// Shape of a template - 4 cell offsets
pub type TemplateShape = [CellOffset; 4];

/// Immutable description of one tetromino shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Template {
    pub kind: PieceKind,
    /// Rotation origin in local coordinates (may sit between cells)
    pub origin: (f32, f32),
    pub color: Rgb,
    pub cells: TemplateShape,
}

const TEMPLATES: [Template; 7] = [
    Template {
        kind: PieceKind::I,
        origin: (1.5, 0.5),
        color: Rgb::new(255, 0, 0),
        cells: [(0, 0), (1, 0), (2, 0), (3, 0)],
    },
    Template {
        kind: PieceKind::J,
        origin: (1.0, 1.0),
        color: Rgb::new(0, 0, 255),
        cells: [(0, 1), (1, 1), (2, 1), (2, 2)],
    },
    Template {
        kind: PieceKind::L,
        origin: (1.0, 1.0),
        color: Rgb::new(0, 255, 255),
        cells: [(0, 1), (0, 2), (1, 1), (2, 1)],
    },
    Template {
        kind: PieceKind::S,
        origin: (1.0, 1.0),
        color: Rgb::new(255, 128, 255),
        cells: [(0, 2), (1, 1), (1, 2), (2, 1)],
    },
    Template {
        kind: PieceKind::T,
        origin: (1.0, 1.0),
        color: Rgb::new(0, 255, 255),
        cells: [(0, 1), (1, 1), (1, 2), (2, 1)],
    },
    Template {
        kind: PieceKind::Z,
        origin: (1.0, 1.0),
        color: Rgb::new(0, 255, 0),
        cells: [(0, 1), (1, 1), (1, 2), (2, 2)],
    },
    Template {
        kind: PieceKind::O,
        origin: (0.5, 0.5),
        color: Rgb::new(255, 255, 0),
        cells: [(0, 0), (1, 0), (0, 1), (1, 1)],
    },
];

/// Get the template for a piece kind
pub fn template(kind: PieceKind) -> &'static Template {
    &TEMPLATES[kind.index()]
}

/// Draw color of a piece kind (used for settled cells)
pub fn color_of(kind: PieceKind) -> Rgb {
    template(kind).color
}
