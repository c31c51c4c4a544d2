use super::element::{BarcodeElement, RenderOptions, TextAlign};

// Linear layout
//------------------------------------------------------------------------------

/// Lays a module stream out left to right. Runs of equal modules merge into
/// one bar; the module width is `usable_width / total_modules`. With
/// `draw_text`, a text band is carved off the bottom of the height.
pub(crate) fn layout(modules: &[bool], text: &str, opts: &RenderOptions) -> Vec<BarcodeElement> {
    debug_assert!(!modules.is_empty(), "Empty module stream");

    let module_width = opts.width / modules.len() as f64;
    let band_height = if opts.draw_text { opts.font_height + 2.0 * opts.text_padding } else { 0.0 };
    let bar_height = opts.height - band_height;

    let mut elements = Vec::new();
    let mut run_start = 0usize;
    for i in 1..=modules.len() {
        if i == modules.len() || modules[i] != modules[run_start] {
            elements.push(BarcodeElement::Bar {
                left: run_start as f64 * module_width,
                top: 0.0,
                width: (i - run_start) as f64 * module_width,
                height: bar_height,
                filled: modules[run_start],
            });
            run_start = i;
        }
    }

    if opts.draw_text {
        elements.push(BarcodeElement::Text {
            left: 0.0,
            top: bar_height + opts.text_padding,
            width: opts.width,
            height: opts.font_height,
            text: text.to_string(),
            align: TextAlign::Center,
        });
    }
    elements
}
