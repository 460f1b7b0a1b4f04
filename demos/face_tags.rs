//! Face-tag walkthrough on a small plate with a notch.
//!
//! Usage:
//! ```text
//! cargo run --example face_tags
//! RUST_LOG=meshtag=debug cargo run --example face_tags
//! ```

use meshtag::attributes::{AttributeStore, Axis, Block, Region};
use meshtag::math::colour::Colour;
use meshtag::math::Point3;
use meshtag::operations::query::PolygonArea;
use meshtag::operations::tagging::FaceTagKey;
use meshtag::operations::walk::{LoopPolicy, WalkParams};
use meshtag::tessellation::{fan_triangles, TessellateLoop};
use meshtag::topology::{EdgeId, MeshStore};

fn main() -> meshtag::Result<()> {
    // Default: WARN for everything, INFO for meshtag.
    // Override with RUST_LOG env var (e.g. RUST_LOG=meshtag=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("meshtag=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // An L-shaped plate split into a unit square (left) and the rest.
    //
    // 5 --e5-- 4
    // |        |
    // e6       e4
    // |        |
    // 6 --e8-- 3 --e3-- 2
    // |        |        |
    // e7       e9       e2
    // |        |        |
    // 0 --e0-- 1 --e1-- 7
    let points = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(2.0, 1.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(1.0, 2.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
    ];
    let mesh = MeshStore::from_parts(
        &points,
        &[
            (0, 1),
            (1, 7),
            (7, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 6),
            (6, 0),
            (6, 3),
            (1, 3),
        ],
    )?;

    let mut attrs = AttributeStore::new();
    attrs.add_region(Region::new(Point3::new(0.5, 0.5, 0.0)));
    attrs.set_edge_tag(EdgeId(0), -10);
    attrs.set_edge_tag(EdgeId(4), -20);

    let outer: FaceTagKey = "0_1_2_3_4_5_6_7".parse()?;
    let square: FaceTagKey = "0_9_8_7".parse()?;
    let stale: FaceTagKey = "2_3_42".parse()?;
    attrs.set_face_tag(outer, -100, Colour::default());
    attrs.set_face_tag(square, -200, Colour::from_html("ff8000")?);
    attrs.set_face_tag(stale, -300, Colour::default());
    attrs.recolour_face_tags(-100, Colour::from_hex(0x20_8020));

    let block = attrs.add_block(Block::new(
        vec![EdgeId(0), EdgeId(9), EdgeId(8), EdgeId(7)],
        false,
    )?)?;
    attrs.set_block_axis(block, Axis::X, &[EdgeId(0)], &mesh)?;
    attrs.set_block_axis(block, Axis::Y, &[EdgeId(7)], &mesh)?;
    if let Some(frame) = attrs.block(block)?.frame {
        println!(
            "block frame: origin {} x+ {} y+ {} right-handed {}",
            frame.origin,
            frame.x_plus,
            frame.y_plus,
            frame.is_right_handed(&mesh)?
        );
    }

    for (edge, tag, at) in attrs.edge_tag_labels(&mesh)? {
        println!("edge {edge}: tag {tag} at ({:.2}, {:.2})", at.x, at.y);
    }

    let params = WalkParams::with_policy(LoopPolicy::RequireClosed);
    for (key, face, outline) in attrs.face_tag_outlines(&mesh, params) {
        let area = PolygonArea::from_loop(&outline.boundary).execute(&mesh)?;
        let centroid = outline.centroid()?;
        let fan = fan_triangles(&outline);
        let cdt = TessellateLoop::from_outline(&outline).execute()?;
        println!(
            "face {key} (tag {}, {}): {} vertices, area {area:.3}, centroid ({:.3}, {:.3}), \
             fan {} tris / {:.3}, cdt {} tris / {:.3}",
            face.tag,
            face.colour,
            outline.boundary.len(),
            centroid.x,
            centroid.y,
            fan.indices.len(),
            fan.area(),
            cdt.indices.len(),
            cdt.area(),
        );
    }

    Ok(())
}
