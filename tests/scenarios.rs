//! End-to-end scenarios: build a diagram the way a user would, then check
//! what a renderer would see.

use easel::{
    ArrowOpts, Color, Diagram, Image, Latex, ORIGIN, Path, Point, Rectangle, ShapeVisitor, Spacer,
    Style, Text, Trail, Transformable, UnitVec, Vector, circle, hcat, latex, rectangle, square,
    text, vcat,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn unit_circle_envelope() {
    let e = circle(1.0).unwrap().get_envelope();
    assert!(close(e.at(UnitVec::EAST), 1.0));
    assert!(close(e.at(UnitVec::SOUTH), 1.0));
}

#[test]
fn rectangle_envelope() {
    let e = rectangle(2.0, 4.0).unwrap().get_envelope();
    assert!(close(e.at(UnitVec::EAST), 1.0));
    assert!(close(e.at(UnitVec::SOUTH), 2.0));
}

#[test]
fn circles_side_by_side() {
    let c = circle(1.0).unwrap();
    let d = c.beside(&c, UnitVec::EAST.to_vector()).unwrap();
    let list = d.to_list();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].transform.apply_point(ORIGIN), ORIGIN);
    assert!(list[1].transform.apply_point(ORIGIN).distance(Point::new(2.0, 0.0)) < 1e-9);
}

#[test]
fn connect_outer_between_centres() {
    let a = circle(1.0).unwrap().named("a");
    let b = circle(1.0).unwrap().named("b").translate(3.0, 4.0);
    let d = a.atop(&b).connect_outer("a", "C", "b", "C", false).unwrap();
    let connector = d.to_list().pop().unwrap();
    let bb = connector.get_envelope().to_bounding_box().unwrap();
    assert!(close(bb.left(), 0.0));
    assert!(close(bb.top(), 0.0));
    assert!(close(bb.right(), 3.0));
    assert!(close(bb.bottom(), 4.0));
    assert!(a.atop(&b).connect_outer("a", "C", "c", "C", false).is_err());
}

#[test]
fn labelled_nodes_joined_by_arrows() {
    let node = |name: &str| circle(0.5).unwrap().at_center(&text(name, 0.3).unwrap()).named(name);
    let row = hcat([node("a"), node("b")], 2.0);
    let curved = ArrowOpts {
        arc_height: 0.5,
        shaft_style: Style {
            line_color: Some(Color::named("blue")),
            ..Default::default()
        },
        ..Default::default()
    };
    let d = row.connect_outside("a", "b", &curved).unwrap();
    // two circles, two labels, then the shaft and its head
    let list = d.to_list();
    assert_eq!(list.len(), 6);
    let shaft = &list[4];
    assert_eq!(shaft.style.line_color, Some(Color::named("blue")));
    let head = &list[5];
    assert!(head.transform.apply_point(ORIGIN).distance(Point::new(2.5, 0.0)) < 1e-9);
    // The shaft bows above the row.
    let bb = shaft.get_envelope().to_bounding_box().unwrap();
    assert!(close(bb.top(), -0.5), "{}", bb.top());
}

#[test]
fn zigzag_trail_as_arrow_shaft() {
    let zig = Trail::new(vec![Vector::new(1.0, -0.5), Vector::new(1.0, 0.5)]);
    let opts = ArrowOpts {
        trail: Some(zig.clone() + zig),
        ..Default::default()
    };
    let d = easel::arrow_between(Point::new(0.0, 0.0), Point::new(0.0, 8.0), &opts).unwrap();
    let list = d.to_list();
    let shaft = list[0].get_envelope().to_bounding_box().unwrap();
    // Turned to point down, the zigzag swings sideways.
    assert!(close(shaft.height(), 8.0));
    assert!(close(shaft.width(), 1.0));
}

#[test]
fn named_parts_survive_layout() {
    let row = hcat(
        [
            square(1.0).unwrap().named("left"),
            square(1.0).unwrap().named("right"),
        ],
        1.0,
    );
    let col = vcat([row, rectangle(3.0, 1.0).unwrap().named("base")], 0.5);
    let right = col.get_subdiagram("right").unwrap();
    assert!(right.location().distance(Point::new(2.0, 0.0)) < 1e-9);
    let base = col.get_subdiagram_bounding_box("base").unwrap();
    assert!(close(base.top(), 1.0));
    assert!(close(base.left(), -1.5));
    assert_eq!(col.get_sub_map().len(), 3);
}

#[test]
fn aligned_column_shares_left_edge() {
    let col = vcat(
        [
            rectangle(4.0, 1.0).unwrap().align_l(),
            rectangle(1.0, 1.0).unwrap().align_l(),
        ],
        0.0,
    );
    let lefts: Vec<f64> = col
        .to_list()
        .iter()
        .map(|p| p.get_envelope().to_bounding_box().unwrap().left())
        .collect();
    assert!(lefts.iter().all(|l| close(*l, 0.0)), "{lefts:?}");
}

#[test]
fn inner_style_wins() {
    let d = square(1.0)
        .unwrap()
        .fill_color(Color::named("red"))
        .fill_color(Color::named("blue"))
        .line_width(0.2);
    let style = &d.to_list()[0].style;
    assert_eq!(style.fill_color, Some(Color::named("red")));
    assert_eq!(style.line_width, Some(0.2));
}

// =============================================================================
// Renderer walk
// =============================================================================

/// Describes each shape on one line, the way a text backend would.
struct Describe;

fn describe_style(style: &Style) -> String {
    let fill = style.fill_color.as_ref().map_or("-".to_string(), Color::to_string);
    format!("fill={} stroke={}", fill, style.effective_line_color())
}

impl ShapeVisitor for Describe {
    type Output = String;

    fn visit_path(&mut self, path: &Path, style: &Style) -> String {
        format!(
            "path segments={} closed={} {}",
            path.segments.len(),
            path.is_closed(),
            describe_style(style)
        )
    }

    fn visit_rectangle(&mut self, rect: &Rectangle, style: &Style) -> String {
        format!("rect {}x{} {}", rect.width, rect.height, describe_style(style))
    }

    fn visit_text(&mut self, text: &Text, style: &Style) -> String {
        format!("text {:?} size={} {}", text.text, text.font_size, describe_style(style))
    }

    fn visit_image(&mut self, image: &Image, _style: &Style) -> String {
        format!("image {}", image.local_path)
    }

    fn visit_latex(&mut self, latex: &Latex, _style: &Style) -> String {
        format!("latex {:?}", latex.text)
    }

    fn visit_spacer(&mut self, spacer: &Spacer, _style: &Style) -> String {
        format!("spacer {}x{}", spacer.width, spacer.height)
    }
}

fn walk(d: &Diagram) -> String {
    d.to_list()
        .iter()
        .map(|p| {
            let at = p.transform.apply_point(ORIGIN);
            format!("({:.2}, {:.2}) {}", at.x, at.y, p.accept(&mut Describe))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn visitor_walk_of_composed_diagram() {
    let row = hcat(
        [
            square(1.0).unwrap().fill_color(Color::named("red")),
            circle(0.5).unwrap(),
            rectangle(2.0, 1.0).unwrap().line_color(Color::named("blue")),
        ],
        0.0,
    );
    let caption = text("hi", 2.0).unwrap();
    let d = row
        .above(&caption)
        .atop(&latex("x^2").translate_by(Vector::new(0.0, -2.0)));
    insta::assert_snapshot!(walk(&d), @r#"
    (0.00, 0.00) rect 1x1 fill=red stroke=black
    (1.00, 0.00) path segments=2 closed=true fill=- stroke=black
    (2.50, 0.00) rect 2x1 fill=- stroke=blue
    (0.00, 1.50) text "hi" size=2 fill=- stroke=black
    (0.00, -2.00) latex "x^2"
    "#);
}
