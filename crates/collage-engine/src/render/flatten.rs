//! Reference scene walk.
//!
//! Composition, outermost first:
//!
//! ```text
//! canvas = offset · A1 · A2 · … · Ak · L · p
//! Ai     = T(x, y) · R(theta) · S(scale) · G      (G = group matrix, or identity)
//! L      = T(x, y) · R(theta) · S(scale)          (the leaf form)
//! ```
//!
//! `offset` is the collage origin offset and is applied once, at the collage
//! boundary. A nested collage is centred on its form's origin, so its
//! top-left sits at `(-w/2, -h/2)` in that form's frame. Images and text are
//! anchored at the form's origin.

use crate::coords::{Transform2D, Vec2};
use crate::scene::{Collage, Element, Form, FormStyle};

use super::{DrawCmd, DrawList, DEFAULT_ARC_SEGMENTS};

/// Knobs for [`flatten_with`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlattenOptions {
    /// Samples per arc for [`DrawList::outlines`].
    pub arc_segments: u32,
    /// Emit a clip region per collage canvas.
    pub clip_collages: bool,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self { arc_segments: DEFAULT_ARC_SEGMENTS, clip_collages: true }
    }
}

/// Flattens `element` with default options.
pub fn flatten(element: &Element) -> DrawList<'_> {
    flatten_with(element, &FlattenOptions::default())
}

/// Flattens `element` into paint-ordered draw items.
///
/// A top-level collage has its canvas top-left at the origin; a top-level
/// image or text is anchored at the origin.
pub fn flatten_with<'a>(element: &'a Element, options: &FlattenOptions) -> DrawList<'a> {
    let mut list = DrawList::with_arc_segments(options.arc_segments);
    Walker { list: &mut list, options }.element(element, Transform2D::identity(), 1.0, 0);

    log::debug!(
        "flattened element into {} draw items ({} clips)",
        list.len(),
        list.clips().len()
    );
    list
}

struct Walker<'l, 'a> {
    list: &'l mut DrawList<'a>,
    options: &'l FlattenOptions,
}

impl<'a> Walker<'_, 'a> {
    fn element(&mut self, element: &'a Element, m: Transform2D, alpha: f32, depth: usize) {
        match element {
            Element::Collage(collage) => self.collage(collage, m, alpha, depth),
            Element::Image(image) => self.list.push(DrawCmd::Image(image), m, alpha),
            Element::Text(text) => self.list.push(DrawCmd::Text(text), m, alpha),
        }
    }

    fn collage(&mut self, collage: &'a Collage, m: Transform2D, alpha: f32, depth: usize) {
        log::trace!(
            "collage {}x{} at depth {depth}, {} forms, offset {:?}",
            collage.width,
            collage.height,
            collage.forms.len(),
            collage.origin_offset
        );

        if self.options.clip_collages {
            self.list.push_clip(m, collage.size());
        }

        let inner = m * Transform2D::translation(collage.origin());
        for form in &collage.forms {
            self.form(form, inner, alpha, depth);
        }

        if self.options.clip_collages {
            self.list.pop_clip();
        }
    }

    fn form(&mut self, form: &'a Form, parent: Transform2D, alpha: f32, depth: usize) {
        let alpha = alpha * form.alpha;
        let m = parent * form.local_transform();

        match &form.style {
            FormStyle::Path(line, path) => self.list.push(DrawCmd::Path { line, path }, m, alpha),
            FormStyle::Shape(style, shape) => {
                self.list.push(DrawCmd::Shape { style, shape }, m, alpha)
            }
            FormStyle::Element(element) => {
                let m = match element {
                    Element::Collage(c) => m * Transform2D::translation(-c.size() / 2.0),
                    Element::Image(_) | Element::Text(_) => m,
                };
                self.element(element, m, alpha, depth + 1);
            }
            FormStyle::Group(matrix, forms) => {
                let m = match matrix {
                    Some(g) => m * *g,
                    None => m,
                };
                for child in forms {
                    self.form(child, m, alpha, depth);
                }
            }
        }
    }
}

/// Canvas position of a point given in a form's local frame, for a form that
/// sits directly in a collage, without walking the whole tree.
pub fn collage_point(collage: &Collage, form: &Form, local: Vec2) -> Vec2 {
    (Transform2D::translation(collage.origin()) * form.local_transform()).apply(local)
}

#[cfg(test)]
mod tests {
    use core::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::paint::Color;
    use crate::scene::{LineStyle, Path, Shape, Text};

    const EPS: f32 = 1e-4;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn dot() -> Form {
        Form::filled(Color::black(), Shape::square(2.0))
    }

    fn anchors(list: &DrawList<'_>) -> Vec<Vec2> {
        list.items().iter().map(|i| i.anchor()).collect()
    }

    // ── collage origins ───────────────────────────────────────────────────

    #[test]
    fn plain_collage_uses_canvas_coordinates() {
        let e = Element::collage(100.0, 100.0, vec![dot().move_by(Vec2::new(10.0, 20.0))]);
        assert_eq!(anchors(&flatten(&e)), vec![Vec2::new(10.0, 20.0)]);
    }

    #[test]
    fn centered_collage_adds_half_size() {
        let e = Element::centered_collage(100.0, 100.0, vec![dot().move_by(Vec2::new(10.0, 20.0))]);
        assert_eq!(anchors(&flatten(&e)), vec![Vec2::new(60.0, 70.0)]);
    }

    #[test]
    fn fixed_collage_puts_focus_at_centre() {
        let focus = Vec2::new(50.0, 20.0);
        let e = Element::fixed_collage(200.0, 100.0, focus, vec![dot().move_by(focus)]);
        assert_eq!(anchors(&flatten(&e)), vec![Vec2::new(100.0, 50.0)]);
    }

    #[test]
    fn offset_is_applied_once_through_nested_groups() {
        let inner = Form::group(vec![dot().move_by(Vec2::new(1.0, 1.0))]);
        let outer = Form::group(vec![inner]);
        let e = Element::centered_collage(10.0, 10.0, vec![outer]);
        assert_eq!(anchors(&flatten(&e)), vec![Vec2::new(6.0, 6.0)]);
    }

    // ── form composition ──────────────────────────────────────────────────

    #[test]
    fn group_transform_applies_to_child_position() {
        let child = dot().move_by(Vec2::new(10.0, 0.0));
        let group = Form::group(vec![child]).rotate(FRAC_PI_2).move_by(Vec2::new(100.0, 0.0));
        let e = Element::collage(200.0, 200.0, vec![group]);
        let list = flatten(&e);
        assert!(close(list.items()[0].anchor(), Vec2::new(100.0, 10.0)));
    }

    #[test]
    fn leaf_scales_then_rotates_then_translates() {
        let path = Path::segment(Vec2::zero(), Vec2::new(1.0, 0.0));
        let seg = Form::traced(LineStyle::default(), path)
            .scale(3.0)
            .rotate(FRAC_PI_2)
            .move_by(Vec2::new(5.0, 5.0));
        let e = Element::collage(20.0, 20.0, vec![seg]);
        let pts = flatten(&e).items()[0].canvas_points(0);
        assert!(close(pts[0], Vec2::new(5.0, 5.0)));
        assert!(close(pts[1], Vec2::new(5.0, 8.0)), "{:?}", pts[1]);
    }

    #[test]
    fn group_matrix_is_innermost_and_not_a_similarity() {
        let shear = Transform2D::new(1.0, 1.0, 0.0, 1.0, 0.0, 0.0);
        let child = dot().move_by(Vec2::new(0.0, 1.0));
        let group = Form::group_transform(shear, vec![child])
            .scale(2.0)
            .move_by(Vec2::new(10.0, 0.0));
        let e = Element::collage(50.0, 50.0, vec![group]);
        // shear: (0,1) -> (1,1); scale: (2,2); translate: (12,2)
        assert_eq!(anchors(&flatten(&e)), vec![Vec2::new(12.0, 2.0)]);
    }

    #[test]
    fn nested_group_chain_matches_explicit_product() {
        let leaf = dot().rotate(0.3).scale(0.5).move_by(Vec2::new(2.0, -1.0));
        let mid = Form::group_transform(Transform2D::scale_xy(2.0, 0.5), vec![leaf.clone()])
            .rotate(-1.1)
            .move_by(Vec2::new(7.0, 3.0));
        let top = Form::group(vec![mid.clone()]).scale(1.5).move_by(Vec2::new(40.0, 40.0));
        let e = Element::centered_collage(80.0, 80.0, vec![top.clone()]);

        let expected = Transform2D::translation(Vec2::new(40.0, 40.0))
            * top.child_transform()
            * mid.child_transform()
            * leaf.local_transform();
        let got = flatten(&e).items()[0].transform;
        let p = Vec2::new(1.0, 1.0);
        assert!(close(got.apply(p), expected.apply(p)));
    }

    #[test]
    fn collage_point_matches_walker() {
        let f = dot().rotate(0.7).move_by(Vec2::new(3.0, 4.0));
        let e = Element::centered_collage(10.0, 10.0, vec![f.clone()]);
        let Element::Collage(c) = &e else { unreachable!() };
        let list = flatten(&e);
        let p = Vec2::new(1.0, 0.0);
        assert!(close(list.items()[0].transform.apply(p), collage_point(c, &f, p)));
    }

    #[test]
    fn alpha_multiplies_down_the_tree() {
        let group = Form::group(vec![dot().alpha(0.5)]).alpha(0.5);
        let e = Element::collage(10.0, 10.0, vec![group]);
        assert_eq!(flatten(&e).items()[0].alpha, 0.25);
    }

    // ── paint order & neutral elements ────────────────────────────────────

    #[test]
    fn paint_order_is_tree_preorder() {
        let a = Form::text("a");
        let b = Form::text("b");
        let c = Form::text("c");
        let e = Element::collage(10.0, 10.0, vec![a, Form::group(vec![b]), c]);
        let contents: Vec<&str> = flatten(&e)
            .items()
            .iter()
            .map(|i| match i.cmd {
                DrawCmd::Text(t) => t.content.as_str(),
                _ => "?",
            })
            .collect();
        assert_eq!(contents, vec!["a", "b", "c"]);
    }

    #[test]
    fn blank_is_neutral_for_concatenation() {
        let fs = vec![dot().move_x(1.0), Form::text("x").rotate(2.0)];
        let mut with_blank = fs.clone();
        with_blank.push(Form::blank());

        let a = Element::collage(10.0, 10.0, vec![Form::group(fs)]);
        let b = Element::collage(10.0, 10.0, vec![Form::group(with_blank)]);
        let (la, lb) = (flatten(&a), flatten(&b));
        assert_eq!(la.items(), lb.items());
        assert_eq!(la.clips(), lb.clips());
    }

    #[test]
    fn blank_alone_draws_nothing() {
        let e = Element::collage(10.0, 10.0, vec![Form::blank()]);
        assert!(flatten(&e).is_empty());
    }

    #[test]
    fn degenerate_shapes_are_still_emitted() {
        let e = Element::collage(
            10.0,
            10.0,
            vec![
                Form::filled(Color::black(), Shape::rect(0.0, -5.0)),
                Form::traced(LineStyle::default(), Path::default()),
            ],
        );
        assert_eq!(flatten(&e).len(), 2);
    }

    // ── embedded elements ─────────────────────────────────────────────────

    #[test]
    fn nested_collage_is_centred_on_its_form() {
        let inner = Element::collage(20.0, 10.0, vec![dot()]);
        let host = Form::element(inner).move_by(Vec2::new(50.0, 50.0));
        let e = Element::collage(100.0, 100.0, vec![host]);
        let list = flatten(&e);

        assert_eq!(anchors(&list), vec![Vec2::new(40.0, 45.0)]);
        assert_eq!(list.clips().len(), 2);
        let inner_clip = list.items()[0].clip.and_then(|id| list.clip(id)).copied();
        let inner_clip = inner_clip.expect("item should be clipped by the nested canvas");
        assert_eq!(inner_clip.corners()[0], Vec2::new(40.0, 45.0));
        assert_eq!(list.clip_chain(list.items()[0].clip).count(), 2);
    }

    #[test]
    fn nested_centered_collage_applies_its_own_offset() {
        let inner = Element::centered_collage(20.0, 10.0, vec![dot()]);
        let host = Form::element(inner).move_by(Vec2::new(50.0, 50.0));
        let e = Element::collage(100.0, 100.0, vec![host]);
        assert_eq!(anchors(&flatten(&e)), vec![Vec2::new(50.0, 50.0)]);
    }

    #[test]
    fn text_and_images_anchor_at_form_origin() {
        let e = Element::centered_collage(
            100.0,
            100.0,
            vec![
                Form::text(Text::new("label")).move_by(Vec2::new(-10.0, 0.0)),
                Form::element(Element::image("logo.png")).move_by(Vec2::new(5.0, 5.0)),
            ],
        );
        assert_eq!(anchors(&flatten(&e)), vec![Vec2::new(40.0, 50.0), Vec2::new(55.0, 55.0)]);
    }

    #[test]
    fn top_level_text_sits_at_origin() {
        let e = Element::text("solo");
        let list = flatten(&e);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].transform, Transform2D::identity());
        assert!(list.clips().is_empty());
    }

    #[test]
    fn clipping_can_be_disabled() {
        let opts = FlattenOptions { clip_collages: false, ..FlattenOptions::default() };
        let e = Element::collage(10.0, 10.0, vec![dot()]);
        let list = flatten_with(&e, &opts);
        assert!(list.clips().is_empty());
        assert_eq!(list.items()[0].clip, None);
    }

    #[test]
    fn outlines_use_configured_arc_segments() {
        let opts = FlattenOptions { arc_segments: 8, ..FlattenOptions::default() };
        let circle = Form::filled(Color::black(), Shape::circle(2.0));
        let e = Element::collage(10.0, 10.0, vec![circle]);
        let list = flatten_with(&e, &opts);
        assert_eq!(list.arc_segments(), 8);
        let outline = list.outlines().next().unwrap_or_default();
        assert_eq!(outline.len(), 9);
        assert!(close(outline[0], Vec2::new(2.0, 0.0)));
    }
}
