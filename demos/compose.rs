//! Build a small labelled diagram and print what a renderer would draw.
//!
//! Run with: RUST_LOG=easel=trace cargo run --example compose --features tracing

use easel::{
    ArrowOpts, Color, Diagram, Image, Latex, ORIGIN, Path, Rectangle, ShapeVisitor, Spacer, Style, Text,
    Transformable, arc_between, circle, hcat, rounded_rectangle, text, triangle, vcat,
};
use tracing_subscriber::EnvFilter;

struct Outline;

impl ShapeVisitor for Outline {
    type Output = String;

    fn visit_path(&mut self, path: &Path, style: &Style) -> String {
        format!(
            "path with {} pieces, stroke {} @ {}",
            path.segments.len(),
            style.effective_line_color(),
            style.effective_line_width()
        )
    }

    fn visit_text(&mut self, text: &Text, _style: &Style) -> String {
        format!("text {:?} ({:.2} wide)", text.text, text.width())
    }

    fn visit_image(&mut self, image: &Image, _style: &Style) -> String {
        format!("image {}", image.local_path)
    }

    fn visit_latex(&mut self, latex: &Latex, _style: &Style) -> String {
        format!("latex {:?}", latex.text)
    }

    fn visit_spacer(&mut self, _spacer: &Spacer, _style: &Style) -> String {
        "spacer".to_string()
    }

    fn visit_rectangle(&mut self, rect: &Rectangle, style: &Style) -> String {
        format!("rectangle {}x{}: {}", rect.width, rect.height, self.visit_path(&rect.outline(), style))
    }
}

fn build() -> easel::Result<Diagram> {
    let node = |label: &str| -> easel::Result<Diagram> {
        let frame = rounded_rectangle(3.0, 1.5, 0.3)?.fill_color(Color::Rgb(230, 240, 255));
        Ok(frame.atop(&text(label, 0.6)?).named(label))
    };
    let row = hcat([node("parse")?, node("layout")?, node("render")?], 1.0);
    let marker = triangle(0.8)?.fill_color(Color::named("orange")).named("warn");
    let diagram = vcat([row, circle(0.5)?.atop(&marker)], 1.5).center_xy();

    let arrow = ArrowOpts {
        head_pad: 0.1,
        ..Default::default()
    };
    let diagram = diagram
        .connect_outside("parse", "layout", &arrow)?
        .connect_outside("layout", "render", &arrow)?
        .connect_outer("layout", "S", "warn", "N", true)?;

    let (a, b) = (
        diagram.get_subdiagram("parse").map(|s| s.location()),
        diagram.get_subdiagram("render").map(|s| s.location()),
    );
    match (a, b) {
        (Some(a), Some(b)) => Ok(diagram.atop(&arc_between(a, b, -2.0)?.dashing(vec![0.1, 0.1], 0.0))),
        _ => Ok(diagram),
    }
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let diagram = build()?;
    let bb = diagram
        .get_bounding_box()
        .ok_or_else(|| miette::miette!("diagram is empty"))?;
    println!(
        "bounding box: ({:.2}, {:.2}) to ({:.2}, {:.2})",
        bb.left(),
        bb.top(),
        bb.right(),
        bb.bottom()
    );

    for prim in diagram.to_list() {
        let at = prim.transform.apply_point(ORIGIN);
        println!("  at ({:>6.2}, {:>6.2}) {}", at.x, at.y, prim.accept(&mut Outline));
    }

    for (name, subs) in diagram.get_sub_map() {
        for sub in subs {
            let p = sub.location();
            println!("  {name} at ({:.2}, {:.2})", p.x, p.y);
        }
    }

    // Lookups of unknown names fail with a diagnostic.
    if let Err(err) = diagram.connect("parse", "deploy", &ArrowOpts::default()) {
        println!("{:?}", miette::Report::new(err));
    }

    let rotated = diagram.rotate_by(0.125);
    println!("rotated width: {:.2}", rotated.get_envelope().width());
    Ok(())
}
