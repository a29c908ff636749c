use crate::coords::{Transform2D, Vec2};

use super::DrawCmd;

/// Index of a [`Clip`] inside its [`DrawList`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ClipId(pub u32);

/// Canvas clip region: `[0, size.x] × [0, size.y]` mapped through `transform`.
///
/// Regions may be rotated or sheared, so clips are not intersected here.
/// Each clip links to the enclosing one; renderers apply the whole chain.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Clip {
    pub transform: Transform2D,
    pub size: Vec2,
    pub parent: Option<ClipId>,
}

impl Clip {
    /// Region corners in canvas space: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Vec2; 4] {
        let (w, h) = (self.size.x, self.size.y);
        [
            self.transform.apply(Vec2::zero()),
            self.transform.apply(Vec2::new(w, 0.0)),
            self.transform.apply(Vec2::new(w, h)),
            self.transform.apply(Vec2::new(0.0, h)),
        ]
    }
}

/// A single draw item: command + accumulated transform, opacity and clip.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem<'a> {
    pub cmd: DrawCmd<'a>,
    /// Local leaf coordinates to canvas coordinates.
    pub transform: Transform2D,
    /// Product of every ancestor form's alpha.
    pub alpha: f32,
    /// Innermost enclosing canvas clip. `None` = no clipping.
    pub clip: Option<ClipId>,
}

impl DrawItem<'_> {
    /// Outline vertices in canvas space, for path and shape commands.
    ///
    /// Returns an empty vector for images and text, which have no geometry
    /// until a renderer measures them.
    pub fn canvas_points(&self, arc_segments: u32) -> Vec<Vec2> {
        let local = match self.cmd {
            DrawCmd::Path { path, .. } => path.points().to_vec(),
            DrawCmd::Shape { shape, .. } => shape.outline_points(arc_segments),
            DrawCmd::Image(_) | DrawCmd::Text(_) => return Vec::new(),
        };
        local.into_iter().map(|p| self.transform.apply(p)).collect()
    }

    /// Canvas position of the leaf's local origin.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.transform.translation_part()
    }
}

/// Flattened draw stream for one element.
///
/// Items are stored in paint order (back-to-front): later items draw over
/// earlier ones and nothing is reordered.
///
/// # Clipping
///
/// Use [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) to scope
/// items to a canvas. Items pushed in between record the innermost clip.
#[derive(Debug)]
pub struct DrawList<'a> {
    items: Vec<DrawItem<'a>>,
    clips: Vec<Clip>,
    /// Currently open clips, innermost last.
    clip_stack: Vec<ClipId>,
    arc_segments: u32,
}

/// Arc tessellation used when a list is built without explicit options.
pub const DEFAULT_ARC_SEGMENTS: u32 = 32;

impl Default for DrawList<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> DrawList<'a> {
    #[inline]
    pub fn new() -> Self {
        Self::with_arc_segments(DEFAULT_ARC_SEGMENTS)
    }

    #[inline]
    pub fn with_arc_segments(arc_segments: u32) -> Self {
        Self { items: Vec::new(), clips: Vec::new(), clip_stack: Vec::new(), arc_segments }
    }

    #[inline]
    pub fn arc_segments(&self) -> u32 {
        self.arc_segments
    }

    /// Canvas-space outline of every item, in paint order.
    ///
    /// Uses this list's arc tessellation. Images and text yield empty outlines.
    pub fn outlines(&self) -> impl Iterator<Item = Vec<Vec2>> + '_ {
        self.items.iter().map(|item| item.canvas_points(self.arc_segments))
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem<'a>] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    #[inline]
    pub fn clip(&self, id: ClipId) -> Option<&Clip> {
        self.clips.get(id.0 as usize)
    }

    /// Walks from `id` outward through every enclosing clip.
    pub fn clip_chain(&self, id: Option<ClipId>) -> impl Iterator<Item = &Clip> + '_ {
        let mut next = id;
        std::iter::from_fn(move || {
            let clip = self.clip(next?)?;
            next = clip.parent;
            Some(clip)
        })
    }

    /// Records a draw command. The item inherits the current clip.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd<'a>, transform: Transform2D, alpha: f32) {
        self.items.push(DrawItem {
            cmd,
            transform,
            alpha,
            clip: self.clip_stack.last().copied(),
        });
    }

    /// Opens a canvas clip. Calls must be balanced with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, transform: Transform2D, size: Vec2) -> ClipId {
        let id = ClipId(self.clips.len() as u32);
        self.clips.push(Clip { transform, size, parent: self.clip_stack.last().copied() });
        self.clip_stack.push(id);
        id
    }

    /// Closes the most recent clip opened by [`push_clip`](Self::push_clip).
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Text;

    #[test]
    fn items_keep_insertion_order() {
        let a = Text::new("a");
        let b = Text::new("b");
        let mut list = DrawList::new();
        list.push(DrawCmd::Text(&a), Transform2D::identity(), 1.0);
        list.push(DrawCmd::Text(&b), Transform2D::identity(), 0.5);
        assert_eq!(list.len(), 2);
        assert_eq!(list.items()[0].cmd, DrawCmd::Text(&a));
        assert_eq!(list.items()[1].alpha, 0.5);
    }

    #[test]
    fn clips_nest_and_chain() {
        let t = Text::new("t");
        let mut list = DrawList::new();
        let outer = list.push_clip(Transform2D::identity(), Vec2::new(100.0, 100.0));
        let inner =
            list.push_clip(Transform2D::translation(Vec2::new(10.0, 10.0)), Vec2::new(5.0, 5.0));
        list.push(DrawCmd::Text(&t), Transform2D::identity(), 1.0);
        list.pop_clip();
        list.push(DrawCmd::Text(&t), Transform2D::identity(), 1.0);
        list.pop_clip();
        list.push(DrawCmd::Text(&t), Transform2D::identity(), 1.0);

        assert_eq!(list.items()[0].clip, Some(inner));
        assert_eq!(list.items()[1].clip, Some(outer));
        assert_eq!(list.items()[2].clip, None);
        assert_eq!(list.clip_chain(Some(inner)).count(), 2);
        assert_eq!(list.clip_chain(None).count(), 0);
    }

    #[test]
    fn clip_corners_follow_transform() {
        let clip = Clip {
            transform: Transform2D::translation(Vec2::new(10.0, 20.0)),
            size: Vec2::new(4.0, 2.0),
            parent: None,
        };
        assert_eq!(clip.corners()[0], Vec2::new(10.0, 20.0));
        assert_eq!(clip.corners()[2], Vec2::new(14.0, 22.0));
    }

    #[test]
    fn text_has_no_canvas_points() {
        let t = Text::new("t");
        let mut list = DrawList::new();
        list.push(DrawCmd::Text(&t), Transform2D::translation(Vec2::new(3.0, 4.0)), 1.0);
        assert!(list.items()[0].canvas_points(8).is_empty());
        assert_eq!(list.outlines().count(), 1);
        assert_eq!(list.items()[0].anchor(), Vec2::new(3.0, 4.0));
    }
}
