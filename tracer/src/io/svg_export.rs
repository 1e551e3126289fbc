use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Path, Rectangle};

use gridwalk::geometry::grid::GridGeometry;
use gridwalk::geometry::primitives::Point;

use crate::io::svg_util::SvgDrawOptions;

/// Renders the lattice and any number of walks (or walk prefixes) into one
/// SVG document. The viewbox keeps one spacing of margin on every side, like
/// the source canvas.
pub fn walks_to_svg(grid: &GridGeometry, walks: &[&[Point]], options: SvgDrawOptions) -> Document {
    let theme = &options.theme;
    let (vb_width, vb_height) = (
        grid.x_max + grid.spacing_x,
        grid.y_max + grid.spacing_y,
    );
    let stroke_width = f32::min(vb_width, vb_height) * 0.002 * theme.stroke_width_multiplier;

    let background = Rectangle::new()
        .set("width", vb_width)
        .set("height", vb_height)
        .set("fill", format!("{}", theme.background_fill));

    let mut doc = Document::new()
        .set("viewBox", (0.0, 0.0, vb_width, vb_height))
        .add(background);

    if options.draw_grid {
        doc = doc.add(grid_group(grid, options));
    }
    for (i, walk) in walks.iter().enumerate() {
        doc = doc.add(walk_group(walk, i, stroke_width, options));
    }
    doc
}

fn grid_group(grid: &GridGeometry, options: SvgDrawOptions) -> Group {
    let dot_radius = f32::min(grid.spacing_x, grid.spacing_y) * 0.1;
    grid.lattice_points()
        .into_iter()
        .fold(Group::new().set("id", "grid"), |g, p| {
            g.add(point(p, &format!("{}", options.theme.grid_dot_fill), dot_radius))
        })
}

fn walk_group(walk: &[Point], id: usize, stroke_width: f32, options: SvgDrawOptions) -> Group {
    let theme = &options.theme;
    let mut group = Group::new().set("id", format!("walk_{id}"));

    if walk.len() >= 2 {
        group = group.add(data_to_path(
            walk_data(walk),
            &[
                ("fill", "none"),
                ("stroke", &format!("{}", theme.walk_stroke)),
                ("stroke-width", &format!("{stroke_width}")),
                ("stroke-linecap", "round"),
                ("stroke-linejoin", "round"),
            ],
        ));
    }
    if options.mark_endpoints
        && let (Some(first), Some(last)) = (walk.first(), walk.last())
    {
        let radius = stroke_width * 2.0;
        group = group
            .add(point(*first, &format!("{}", theme.endpoint_fill), radius))
            .add(point(*last, &format!("{}", theme.endpoint_fill), radius));
    }
    group
}

fn walk_data(walk: &[Point]) -> Data {
    let mut data = Data::new().move_to::<(f32, f32)>(walk[0].into());
    for p in &walk[1..] {
        data = data.line_to::<(f32, f32)>((*p).into());
    }
    data
}

fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

fn point(Point(x, y): Point, fill: &str, radius: f32) -> Circle {
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", radius)
        .set("fill", fill)
}
