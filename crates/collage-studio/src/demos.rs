//! Demo scenes.

use core::f32::consts::{FRAC_PI_2, TAU};

use collage_engine::coords::{Rect, Transform2D, Vec2};
use collage_engine::paint::{Color, ColorStop, Gradient};
use collage_engine::scene::{Element, Form, LineCap, LineStyle, Path, Shape, Text};

/// Named demo scene builder.
pub struct Demo {
    pub name: &'static str,
    pub about: &'static str,
    pub build: fn() -> Element,
}

pub const DEMOS: &[Demo] = &[
    Demo { name: "clock", about: "centred dial with rotated hands", build: clock },
    Demo { name: "orbit", about: "nested groups: moon around planet around sun", build: orbit },
    Demo { name: "camera", about: "fixed collage panned onto a world point", build: camera },
    Demo { name: "frames", about: "collages embedded in forms, sprites and text", build: frames },
];

pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|d| d.name == name)
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::from_srgb_u8(r, g, b, 255)
}

fn clock() -> Element {
    let face = Form::filled(rgb(240, 236, 220), Shape::circle(90.0));
    let rim = Form::outlined(
        LineStyle::solid(rgb(40, 40, 40)).with_width(4.0),
        Shape::circle(90.0),
    );

    let ticks = (0..12).map(|h| {
        let tick = Form::filled(rgb(40, 40, 40), Shape::rect(2.0, 10.0)).move_y(-78.0);
        Form::group(vec![tick]).rotate(h as f32 * TAU / 12.0)
    });

    let hand = |len: f32, width: f32, angle: f32| {
        Form::traced(
            LineStyle::solid(rgb(20, 20, 20)).with_width(width).with_cap(LineCap::Round),
            Path::segment(Vec2::zero(), Vec2::new(0.0, -len)),
        )
        .rotate(angle)
    };

    let mut forms = vec![face, rim];
    forms.extend(ticks);
    forms.push(hand(50.0, 5.0, TAU * 10.0 / 12.0));
    forms.push(hand(75.0, 3.0, TAU * 2.0 / 12.0));
    forms.push(Form::filled(rgb(200, 30, 30), Shape::circle(4.0)));

    Element::centered_collage(200.0, 200.0, forms)
}

fn orbit() -> Element {
    let sun = Form::gradient(
        Gradient::radial(
            Vec2::zero(),
            0.0,
            Vec2::zero(),
            30.0,
            vec![ColorStop::new(0.0, rgb(255, 240, 120)), ColorStop::new(1.0, rgb(255, 140, 0))],
        ),
        Shape::circle(30.0),
    );
    let moon = Form::filled(rgb(180, 180, 190), Shape::circle(4.0)).move_x(18.0);
    let planet = Form::group(vec![Form::filled(rgb(60, 110, 220), Shape::circle(9.0)), moon])
        .move_x(110.0)
        .rotate(0.8);
    let tilted = Form::group_transform(Transform2D::scale_xy(1.0, 0.6), vec![planet]);

    Element::centered_collage(320.0, 240.0, vec![sun, tilted])
}

fn camera() -> Element {
    let rule = |from: Vec2, to: Vec2| {
        Form::traced(LineStyle::dotted(Color::gray(0.6)), Path::segment(from, to))
    };
    let grid = (0..8).flat_map(|i| {
        let x = i as f32 * 50.0;
        [
            rule(Vec2::new(x, 0.0), Vec2::new(x, 350.0)),
            rule(Vec2::new(0.0, x), Vec2::new(350.0, x)),
        ]
    });
    let focus = Vec2::new(250.0, 120.0);
    let mut forms: Vec<Form> = grid.collect();
    forms.push(Form::filled(rgb(220, 60, 60), Shape::ngon(5, 12.0)).move_by(focus));
    forms.push(
        Form::outlined(LineStyle::dashed(rgb(20, 120, 60)), Shape::ellipse(60.0, 30.0))
            .move_by(focus),
    );

    Element::fixed_collage(160.0, 120.0, focus, forms)
}

fn frames() -> Element {
    let badge = Element::centered_collage(
        60.0,
        40.0,
        vec![
            Form::filled(rgb(30, 30, 60), Shape::rect(60.0, 40.0)),
            Form::text(Text::new("v0.1").color(Color::white()).height(14.0).bold()),
        ],
    );
    let sprite = Form::sprite(Rect::new(32.0, 0.0, 32.0, 32.0), "assets/sheet.png")
        .move_by(Vec2::new(40.0, 40.0));

    Element::collage(
        240.0,
        160.0,
        vec![
            Form::textured("assets/paper.png", Shape::rect(240.0, 160.0))
                .move_by(Vec2::new(120.0, 80.0)),
            sprite,
            Form::element(badge.clone())
                .move_by(Vec2::new(180.0, 40.0))
                .rotate(-FRAC_PI_2 / 3.0),
            Form::element(badge)
                .move_by(Vec2::new(180.0, 110.0))
                .scale(1.5)
                .alpha(0.5),
            Form::text(Text::new("collage").typeface("DejaVu Sans").italic())
                .move_by(Vec2::new(60.0, 130.0)),
        ],
    )
}
