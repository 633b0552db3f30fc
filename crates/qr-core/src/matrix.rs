/// The role a cell plays, restricting who may write it during matrix construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Data,
    Format,
    Version,
    Alignment,
    Finder,
    Timing,
    Separator,
}

/// A single module of the symbol: its color and the role that placed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub on: bool,
    pub kind: CellKind,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            on: false,
            kind: CellKind::Data,
        }
    }
}

/// An immutable row-major square grid of cells, the sole artifact handed back
/// to callers. Rendering, decoding, and I/O are external collaborators that
/// consume this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    side: i32,
    cells: Vec<Cell>,
}

impl Matrix {
    pub(crate) fn blank(side: i32) -> Self {
        Self {
            side,
            cells: vec![Cell::default(); (side * side) as usize],
        }
    }

    pub fn side(&self) -> i32 {
        self.side
    }

    /// The module color at `(x, y)`; out-of-bounds coordinates read as light.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        if (0..self.side).contains(&x) && (0..self.side).contains(&y) {
            self.cell(x, y).on
        } else {
            false
        }
    }

    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.cells[(y * self.side + x) as usize]
    }

    pub(crate) fn set(&mut self, x: i32, y: i32, on: bool, kind: CellKind) {
        self.cells[(y * self.side + x) as usize] = Cell { on, kind };
    }

    pub(crate) fn toggle(&mut self, x: i32, y: i32, invert: bool) {
        let idx = (y * self.side + x) as usize;
        if self.cells[idx].kind == CellKind::Data {
            self.cells[idx].on ^= invert;
        }
    }

    pub(crate) fn cell_mut(&mut self, x: i32, y: i32) -> &mut Cell {
        let side = self.side;
        &mut self.cells[(y * side + x) as usize]
    }
}
