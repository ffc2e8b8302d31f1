//! SVG export for the coverage map.
//!
//! Produces a standalone document with the same layering as the live
//! canvas: filled country silhouette underneath, dashed state borders
//! on top.

use crate::geo::path::RenderablePath;

const GRADIENT_START: &str = "#006838";
const GRADIENT_END: &str = "#0B251C";
const STROKE: &str = "#48C0A3";

/// Renders country and state paths into an SVG document.
///
/// Path order within each group follows the input slices, so callers
/// control draw stacking by ordering their data.
pub fn render_document(
    country: &[RenderablePath],
    states: &[RenderablePath],
    viewport: (f64, f64),
) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n",
        viewport.0, viewport.1
    ));
    svg.push_str("  <defs>\n");
    svg.push_str(
        "    <linearGradient id=\"countryGradient\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">\n",
    );
    svg.push_str(&format!(
        "      <stop offset=\"0%\" stop-color=\"{}\"/>\n",
        GRADIENT_START
    ));
    svg.push_str(&format!(
        "      <stop offset=\"100%\" stop-color=\"{}\"/>\n",
        GRADIENT_END
    ));
    svg.push_str("    </linearGradient>\n");
    svg.push_str("  </defs>\n");

    svg.push_str("  <g>\n");
    for path in country {
        push_path(
            &mut svg,
            path,
            &format!(
                "fill=\"url(#countryGradient)\" stroke=\"{}\" stroke-width=\"1.5\"",
                STROKE
            ),
        );
    }
    svg.push_str("  </g>\n");

    svg.push_str("  <g>\n");
    for path in states {
        push_path(
            &mut svg,
            path,
            &format!(
                "fill=\"none\" stroke=\"{}\" stroke-width=\"0.5\" stroke-opacity=\"0.4\" stroke-dasharray=\"2,2\"",
                STROKE
            ),
        );
    }
    svg.push_str("  </g>\n");

    svg.push_str("</svg>\n");
    svg
}

fn push_path(svg: &mut String, path: &RenderablePath, style: &str) {
    svg.push_str("    <path ");
    if let Some(id) = &path.id {
        svg.push_str(&format!("id=\"{}\" ", xml_escape(id)));
    }
    svg.push_str(&format!("d=\"{}\" {}", path.svg_data(), style));
    if let Some(name) = &path.name {
        svg.push_str(&format!("><title>{}</title></path>\n", xml_escape(name)));
    } else {
        svg.push_str("/>\n");
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::path::PathCommand;

    fn sample_path(name: Option<&str>) -> RenderablePath {
        RenderablePath {
            id: Some("NG".to_string()),
            name: name.map(|n| n.to_string()),
            commands: vec![
                PathCommand::MoveTo(10.0, 10.0),
                PathCommand::LineTo(20.0, 10.0),
                PathCommand::LineTo(20.0, 20.0),
                PathCommand::Close,
            ],
        }
    }

    #[test]
    fn test_document_structure() {
        let country = vec![sample_path(None)];
        let states = vec![sample_path(Some("Lagos")), sample_path(Some("Kano"))];
        let svg = render_document(&country, &states, (600.0, 500.0));

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("viewBox=\"0 0 600 500\""));
        assert!(svg.contains("countryGradient"));
        assert_eq!(svg.matches("<path").count(), 3);
        assert!(svg.contains("<title>Lagos</title>"));
        assert!(svg.contains("stroke-dasharray=\"2,2\""));
    }

    #[test]
    fn test_empty_layers_still_render() {
        let svg = render_document(&[], &[], (600.0, 500.0));

        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<path").count(), 0);
    }

    #[test]
    fn test_names_are_escaped() {
        let states = vec![sample_path(Some("A & B <C>"))];
        let svg = render_document(&[], &states, (600.0, 500.0));

        assert!(svg.contains("A &amp; B &lt;C&gt;"));
        assert!(!svg.contains("<C>"));
    }
}
