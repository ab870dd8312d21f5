//! SVG generation

use glam::DVec2;
use ::svg::Document;
use ::svg::node::element::{Group, Line, Polygon, Text};

use super::theme::Theme;
use crate::layout::{DrawSpec, Label, LabelRole};
use crate::log::debug;

/// Serialize a laid-out chart as an SVG document.
///
/// Drawing order: house regions, outer square, inner diamond, diagonals,
/// then the labels of every house.
pub fn render_svg(spec: &DrawSpec, theme: &Theme) -> String {
    let size = fmt_num(spec.size);

    let mut regions = Group::new().set("class", "houses");
    for region in &spec.regions {
        regions = regions.add(
            Polygon::new()
                .set("points", points_attr(&region.points))
                .set("fill", "transparent")
                .set("stroke", theme.border.as_str())
                .set("stroke-width", fmt_num(theme.region_stroke_width)),
        );
    }

    let frame = Group::new()
        .set("class", "frame")
        .add(
            Polygon::new()
                .set("points", points_attr(&spec.outer_square))
                .set("fill", "none")
                .set("stroke", theme.frame.as_str())
                .set("stroke-width", fmt_num(theme.outer_stroke_width)),
        )
        .add(
            Polygon::new()
                .set("points", points_attr(&spec.inner_diamond))
                .set("fill", "none")
                .set("stroke", theme.frame.as_str())
                .set("stroke-width", fmt_num(theme.diamond_stroke_width)),
        );

    let mut diagonals = Group::new().set("class", "diagonals");
    for segment in &spec.diagonals {
        diagonals = diagonals.add(
            Line::new()
                .set("x1", fmt_num(segment.from.x))
                .set("y1", fmt_num(segment.from.y))
                .set("x2", fmt_num(segment.to.x))
                .set("y2", fmt_num(segment.to.y))
                .set("stroke", theme.border.as_str())
                .set("stroke-width", fmt_num(theme.diagonal_stroke_width)),
        );
    }

    let mut labels = Group::new().set("class", "labels");
    for label in spec.labels() {
        labels = labels.add(render_label(label, theme));
    }

    let document = Document::new()
        .set("width", size.as_str())
        .set("height", size.as_str())
        .set("viewBox", format!("0 0 {} {}", size, size))
        .add(regions)
        .add(frame)
        .add(diagonals)
        .add(labels);

    let out = document.to_string();
    debug!(bytes = out.len(), "rendered chart svg");
    out
}

fn render_label(label: &Label, theme: &Theme) -> Text {
    let (fill, weight) = match label.role {
        LabelRole::HouseNumber => (&theme.text_muted, "400"),
        LabelRole::Sign => (&theme.text, "500"),
        LabelRole::AscendantSign => (&theme.accent, "700"),
        LabelRole::Occupants => (&theme.accent, "600"),
    };

    Text::new(label.text.as_str())
        .set("x", fmt_num(label.at.x))
        .set("y", fmt_num(label.at.y))
        .set("fill", fill.as_str())
        .set("font-size", fmt_num(label.font_size))
        .set("font-weight", weight)
        .set("text-anchor", "middle")
}

/// `x,y x,y ...` for a polygon's `points` attribute
fn points_attr(points: &[DVec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::houses::build_houses;
    use crate::layout::layout;
    use crate::payload::Planet;

    fn sample_svg() -> String {
        let map = build_houses(&[
            Planet::new("Ascendant", "Virgo", false),
            Planet::new("Sun", "Leo", false),
            Planet::new("Jupiter", "Virgo", true),
        ]);
        render_svg(&layout(&map.houses, 300.0, 2.0), &Theme::default())
    }

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(150.0), "150");
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(1.2), "1.2");
        assert_eq!(fmt_num(300.0 / 35.0), "8.57143");
        assert_eq!(fmt_num(-8.0), "-8");
        assert_eq!(fmt_num(1500.0), "1500");
    }

    #[test]
    fn svg_has_all_primitives() {
        let svg = sample_svg();
        assert!(svg.starts_with("<svg"));
        // 12 regions + outer square + inner diamond
        assert_eq!(svg.matches("<polygon").count(), 14);
        assert_eq!(svg.matches("<line").count(), 2);
        // 12 numbers + 12 signs + 2 occupant lines
        assert_eq!(svg.matches("<text").count(), 26);
        assert!(svg.contains("viewBox=\"0 0 300 300\""));
    }

    #[test]
    fn svg_marks_ascendant_and_occupants() {
        let svg = sample_svg();
        assert!(svg.contains("Vir*"));
        assert!(svg.contains("JuR"));
        assert!(svg.contains("font-weight=\"700\""));
    }

    #[test]
    fn svg_uses_construction_points() {
        let svg = sample_svg();
        // top kite: E P2 O P1
        assert!(svg.contains("points=\"150,2 225,75 150,150 75,75\""));
        assert!(svg.contains("points=\"2,2 298,2 298,298 2,298\""));
    }

    #[test]
    fn theme_colors_reach_the_output() {
        let svg = sample_svg();
        let theme = Theme::default();
        assert!(svg.contains(&theme.frame));
        assert!(svg.contains(&theme.accent));
        assert!(svg.contains(&theme.text_muted));
    }
}
