//! Retained placeholder layout backing the egui keypad
//!
//! Immediate-mode egui has no persistent view hierarchy, so the host
//! container the core expects is modeled here: a [`PadSurface`] holds the
//! tagged placeholder rects the keypad consumes at build time.

use flexpad_core::{KeyButton, Rect, ViewHost};

#[derive(Debug, Clone, Copy)]
struct Child {
    tag: i32,
    frame: Rect,
    removed: bool,
}

/// The concrete view host: a container rect plus tagged children
pub struct PadSurface {
    bounds: Rect,
    children: Vec<Child>,
    generated: usize,
}

impl PadSurface {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            children: Vec::new(),
            generated: 0,
        }
    }

    /// Add a placeholder child for slot `tag` at `frame`
    pub fn place(mut self, tag: u32, frame: Rect) -> Self {
        self.children.push(Child {
            tag: tag as i32,
            frame,
            removed: false,
        });
        self
    }

    /// Add a tag-0 decorative child the keypad must leave alone
    pub fn decorate(mut self, frame: Rect) -> Self {
        self.children.push(Child {
            tag: 0,
            frame,
            removed: false,
        });
        self
    }

    /// Lay `rows` of slot tags out as equal cells inside `bounds`.
    ///
    /// A 0 entry leaves its cell empty. Every row must have the same
    /// length as the first.
    pub fn grid(bounds: Rect, rows: &[&[u32]], gap: f32) -> Self {
        let mut surface = Self::new(bounds);
        let row_count = rows.len().max(1) as f32;
        let col_count = rows.first().map_or(1, |r| r.len()).max(1) as f32;
        let cell_w = (bounds.size.w - gap * (col_count - 1.0)) / col_count;
        let cell_h = (bounds.size.h - gap * (row_count - 1.0)) / row_count;

        for (row, tags) in rows.iter().enumerate() {
            for (col, &tag) in tags.iter().enumerate() {
                if tag == 0 {
                    continue;
                }
                let frame = Rect::new(
                    bounds.origin.x + col as f32 * (cell_w + gap),
                    bounds.origin.y + row as f32 * (cell_h + gap),
                    cell_w,
                    cell_h,
                );
                surface = surface.place(tag, frame);
            }
        }
        surface
    }

    /// How many generated buttons have taken placeholder slots
    pub fn generated(&self) -> usize {
        self.generated
    }
}

impl ViewHost for PadSurface {
    type ViewId = usize;

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn children(&self) -> Vec<usize> {
        self.children
            .iter()
            .enumerate()
            .filter(|(_, child)| !child.removed)
            .map(|(index, _)| index)
            .collect()
    }

    fn tag(&self, view: usize) -> i32 {
        self.children[view].tag
    }

    fn frame(&self, view: usize) -> Rect {
        self.children[view].frame
    }

    fn remove(&mut self, view: usize) {
        self.children[view].removed = true;
    }

    fn insert(&mut self, _button: &KeyButton) {
        self.generated += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_places_cells_with_gaps() {
        let bounds = Rect::new(0.0, 0.0, 110.0, 50.0);
        let surface = PadSurface::grid(bounds, &[&[1, 2], &[3, 0]], 10.0);

        let children = surface.children();
        assert_eq!(children.len(), 3);
        assert_eq!(surface.frame(children[0]), Rect::new(0.0, 0.0, 50.0, 20.0));
        assert_eq!(surface.frame(children[1]), Rect::new(60.0, 0.0, 50.0, 20.0));
        assert_eq!(surface.frame(children[2]), Rect::new(0.0, 30.0, 50.0, 20.0));
        assert_eq!(surface.tag(children[2]), 3);
    }

    #[test]
    fn test_remove_hides_child_from_enumeration() {
        let mut surface = PadSurface::new(Rect::new(0.0, 0.0, 10.0, 10.0))
            .place(1, Rect::new(0.0, 0.0, 5.0, 5.0))
            .decorate(Rect::new(5.0, 5.0, 5.0, 5.0));

        assert_eq!(surface.children().len(), 2);
        surface.remove(0);
        let remaining = surface.children();
        assert_eq!(remaining.len(), 1);
        assert_eq!(surface.tag(remaining[0]), 0);
    }
}
