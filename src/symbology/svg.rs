use itertools::Itertools;

use super::element::{BarcodeElement, SvgOptions, TextAlign};

// SVG serializer
//------------------------------------------------------------------------------

/// Serializes an element stream into an SVG fragment, or a full document
/// when `full_svg` is set. Every filled bar joins a single path; text
/// becomes anchored spans.
pub(crate) fn serialize(elements: &[BarcodeElement], opts: &SvgOptions) -> String {
    let path = elements
        .iter()
        .filter_map(|el| match el {
            BarcodeElement::Bar { left, top, width, height, filled: true } => Some(format!(
                "M{} {}h{}v{}h{}z",
                fmt(opts.x + left),
                fmt(opts.y + top),
                fmt(*width),
                fmt(*height),
                fmt(-width),
            )),
            _ => None,
        })
        .join("");

    let color = format!("#{:06x}", opts.color & 0xff_ffff);
    let mut body = format!("<path d=\"{path}\" fill=\"{color}\"/>");

    for el in elements {
        if let BarcodeElement::Text { left, top, width, height, text, align } = el {
            let (anchor, x) = match align {
                TextAlign::Left => ("start", opts.x + left),
                TextAlign::Center => ("middle", opts.x + left + width / 2.0),
                TextAlign::Right => ("end", opts.x + left + width),
            };
            let y = opts.y + top + opts.baseline * height;
            body.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" text-anchor=\"{anchor}\" font-family=\"{}\" \
                 font-size=\"{}\" fill=\"{color}\">{}</text>",
                fmt(x),
                fmt(y),
                opts.font_family,
                fmt(*height),
                escape(text),
            ));
        }
    }

    if opts.full_svg {
        let total_width = fmt(opts.x + opts.width);
        let total_height = fmt(opts.y + opts.height);
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{total_width}\" \
             height=\"{total_height}\" viewBox=\"0 0 {total_width} {total_height}\">{body}</svg>"
        )
    } else {
        body
    }
}

// Fixed-point with at most five fractional digits
fn fmt(value: f64) -> String {
    let mut s = format!("{value:.5}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
