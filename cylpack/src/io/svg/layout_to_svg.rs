use svg::Document;
use svg::node::element::{Circle as SvgCircle, Group, Rectangle, Text, Title};

use crate::entities::Layout;
use crate::io::svg::svg_util::SvgDrawOptions;

/// Renders a layout to an SVG document for human inspection.
/// Rendering is strictly read-only: nothing flows back into the layout.
pub fn layout_to_svg(layout: &Layout, options: SvgDrawOptions, title: &str) -> Document {
    let container = &layout.container;
    let vbox = container.bbox().scale(1.10);
    let theme = &options.theme;

    let stroke_width =
        f32::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the container
        let bbox = container.bbox();
        let label_content = format!(
            "width: {:.3} | depth: {:.3} | density: {:.3}% | {}",
            container.width,
            container.depth,
            layout.density() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", bbox.x_min)
            .set(
                "y",
                bbox.y_min - 0.5 * 0.025 * f32::min(bbox.width(), bbox.height()),
            )
            .set("font-size", f32::min(bbox.width(), bbox.height()) * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let container_group = {
        let bbox = container.bbox();
        let title = Title::new(format!(
            "container, width: {:.3}, depth: {:.3}, max weight: {:.3}",
            container.width, container.depth, container.max_weight
        ));

        Group::new().set("id", "container").add(
            Rectangle::new()
                .set("x", bbox.x_min)
                .set("y", bbox.y_min)
                .set("width", bbox.width())
                .set("height", bbox.height())
                .set("fill", "none")
                .set("stroke", format!("{}", theme.container_stroke))
                .set("stroke-width", 2.0 * stroke_width)
                .add(title),
        )
    };

    let balance_zone_group = match options.draw_balance_zone {
        false => None,
        true => {
            let zone = container.balance_zone();
            let zone_group = Group::new().set("id", "balance_zone").add(
                Rectangle::new()
                    .set("x", zone.x_min)
                    .set("y", zone.y_min)
                    .set("width", zone.width())
                    .set("height", zone.height())
                    .set("fill", "none")
                    .set("stroke", format!("{}", theme.balance_zone_stroke))
                    .set("stroke-width", stroke_width)
                    .set("stroke-dasharray", format!("{}", 5.0 * stroke_width))
                    .set("stroke-linecap", "round")
                    .add(Title::new("zone in which the weighted centroid must lie")),
            );
            Some(zone_group)
        }
    };

    let cylinders_group = {
        let mut cylinders_group = Group::new().set("id", "cylinders");
        for (i, placed) in layout.placed.iter().enumerate() {
            let title = Title::new(format!(
                "cylinder {}, radius: {:.3}, weight: {:.3}",
                i, placed.radius, placed.weight
            ));
            cylinders_group = cylinders_group.add(
                SvgCircle::new()
                    .set("cx", placed.center.0)
                    .set("cy", placed.center.1)
                    .set("r", placed.radius)
                    .set("fill", format!("{}", theme.cylinder_fill))
                    .set("fill-opacity", "0.7")
                    .set("stroke", format!("{}", theme.cylinder_stroke))
                    .set("stroke-width", stroke_width)
                    .add(title),
            );
            if options.label_cylinders {
                cylinders_group = cylinders_group.add(
                    Text::new(format!("{i}"))
                        .set("x", placed.center.0)
                        .set("y", placed.center.1)
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "central")
                        .set("font-size", placed.radius * 0.5)
                        .set("font-family", "monospace"),
                );
            }
        }
        cylinders_group
    };

    let centroid_group = match options.draw_centroid {
        false => None,
        true => {
            let centroid = layout.centroid();
            let centroid_group = Group::new().set("id", "centroid").add(
                SvgCircle::new()
                    .set("cx", centroid.0)
                    .set("cy", centroid.1)
                    .set("r", 2.0 * stroke_width)
                    .set("fill", format!("{}", theme.centroid_fill))
                    .add(Title::new("weighted centroid of the layout")),
            );
            Some(centroid_group)
        }
    };

    let vbox_svg = (vbox.x_min, vbox.y_min, vbox.width(), vbox.height());

    let optionals = [balance_zone_group, centroid_group]
        .into_iter()
        .flatten()
        .fold(Group::new().set("id", "optionals"), |g, opt| g.add(opt));

    Document::new()
        .set("viewBox", vbox_svg)
        .add(container_group)
        .add(cylinders_group)
        .add(optionals)
        .add(label)
}
