//! Screen geometry for keys and the alternatives overlay.
//!
//! All hit testing lives here, on the renderer side. The input controller only
//! ever receives the resolved key or alternative index.

use ratatui::layout::{Constraint, Layout as RatatuiLayout, Position, Rect};

use crate::models::{KeyId, Layout};

/// Terminal lines per key row (border, label, border).
pub const KEY_HEIGHT: u16 = 3;

/// Columns between neighbouring keys.
const KEY_SPACING: u16 = 1;

/// Share of the control row given to the space bar.
const SPACE_SHARE: u32 = 2;

/// Where a key was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFrame {
    /// The key drawn in this frame
    pub key: KeyId,
    /// Drawn with the special-key style
    pub special: bool,
    /// Screen area of the key
    pub rect: Rect,
}

/// Frames of every key for one keyboard area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardGeometry {
    frames: Vec<KeyFrame>,
}

impl KeyboardGeometry {
    /// Lays out `layout` inside `area`.
    ///
    /// Rows are stacked top to bottom, `KEY_HEIGHT` lines each. Letter rows
    /// split the width evenly; in the control row the space bar takes half the
    /// width and the remaining keys share the other half.
    #[must_use]
    pub fn compute(layout: &Layout, area: Rect) -> Self {
        let row_count = layout.rows().len();
        let row_areas = RatatuiLayout::vertical(vec![Constraint::Length(KEY_HEIGHT); row_count])
            .split(area);

        let mut frames = Vec::new();
        for (row_idx, (row, row_area)) in layout.rows().iter().zip(row_areas.iter()).enumerate() {
            let constraints = row_constraints(layout, row_idx);
            let key_areas = RatatuiLayout::horizontal(constraints)
                .spacing(KEY_SPACING)
                .split(*row_area);

            for (key, rect) in row.keys.iter().zip(key_areas.iter()) {
                frames.push(KeyFrame {
                    key: key.id,
                    special: key.special,
                    rect: *rect,
                });
            }
        }

        Self { frames }
    }

    /// Total height needed to draw `layout`.
    #[must_use]
    pub fn height_for(layout: &Layout) -> u16 {
        KEY_HEIGHT.saturating_mul(layout.rows().len() as u16)
    }

    /// All key frames, top to bottom, left to right.
    #[must_use]
    pub fn frames(&self) -> &[KeyFrame] {
        &self.frames
    }

    /// The key under the given cell, if any.
    #[must_use]
    pub fn key_at(&self, column: u16, row: u16) -> Option<KeyId> {
        let point = Position::new(column, row);
        self.frames
            .iter()
            .find(|f| f.rect.contains(point))
            .map(|f| f.key)
    }

    /// Where `key` was drawn.
    #[must_use]
    pub fn frame_of(&self, key: KeyId) -> Option<Rect> {
        self.frames.iter().find(|f| f.key == key).map(|f| f.rect)
    }
}

fn row_constraints(layout: &Layout, row_idx: usize) -> Vec<Constraint> {
    let row = &layout.rows()[row_idx];
    let count = row.len() as u32;
    let has_space = row.keys.iter().any(|k| k.id == KeyId::Space);

    if !layout.is_control_row(row_idx) || !has_space || count < 2 {
        return vec![Constraint::Ratio(1, count.max(1)); row.len()];
    }

    let others = count - 1;
    row.keys
        .iter()
        .map(|k| {
            if k.id == KeyId::Space {
                Constraint::Ratio(1, SPACE_SHARE)
            } else {
                Constraint::Ratio(1, SPACE_SHARE * others)
            }
        })
        .collect()
}

/// Frames of the alternatives overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayGeometry {
    area: Rect,
    cells: Vec<Rect>,
}

impl OverlayGeometry {
    /// Places an overlay for `count` alternatives over the key at `source`.
    ///
    /// The overlay is `count` key widths wide, sits directly above the source
    /// key and is horizontally centred on it, then clamped into `bounds`.
    /// When there is no room above, it overlaps the top of `bounds`.
    #[must_use]
    pub fn compute(source: Rect, count: usize, bounds: Rect) -> Self {
        let count_u16 = count.max(1) as u16;
        let width = source
            .width
            .saturating_mul(count_u16)
            .min(bounds.width)
            .max(count_u16.min(bounds.width));
        let height = KEY_HEIGHT.min(bounds.height);

        let centre = source.x + source.width / 2;
        let max_x = bounds.right().saturating_sub(width);
        let x = centre.saturating_sub(width / 2).clamp(bounds.x, max_x.max(bounds.x));
        let y = source.y.saturating_sub(height).max(bounds.y);

        let area = Rect::new(x, y, width, height);

        let cell_width = width / count_u16;
        let cells = (0..count_u16)
            .map(|i| {
                let cell_x = x + i * cell_width;
                // Last cell absorbs the rounding remainder
                let w = if i + 1 == count_u16 {
                    area.right() - cell_x
                } else {
                    cell_width
                };
                Rect::new(cell_x, y, w, height)
            })
            .take(count)
            .collect();

        Self { area, cells }
    }

    /// Outer area of the overlay.
    #[must_use]
    pub const fn area(&self) -> Rect {
        self.area
    }

    /// Cell of each alternative, in order.
    #[must_use]
    pub fn cells(&self) -> &[Rect] {
        &self.cells
    }

    /// Index of the alternative under the given cell, if any.
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let point = Position::new(column, row);
        self.cells.iter().position(|cell| cell.contains(point))
    }
}
