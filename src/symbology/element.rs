// Geometry elements
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One device-independent drawing primitive. Coordinates are in the
/// caller's unit system, relative to the symbol's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub enum BarcodeElement {
    Bar { left: f64, top: f64, width: f64, height: f64, filled: bool },
    Text { left: f64, top: f64, width: f64, height: f64, text: String, align: TextAlign },
}

// Render options
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Usable width of the symbol.
    pub width: f64,
    /// Usable height of the symbol, including the text band when drawn.
    pub height: f64,
    pub draw_text: bool,
    pub font_height: f64,
    pub text_padding: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: 200.0, height: 80.0, draw_text: false, font_height: 10.0, text_padding: 2.0 }
    }
}

#[derive(Debug, Clone)]
pub struct SvgOptions {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub draw_text: bool,
    pub font_family: String,
    pub font_height: f64,
    pub text_padding: f64,
    /// 24-bit RGB, `0xRRGGBB`.
    pub color: u32,
    /// Emit the wrapping `<svg>` root element with a view box.
    pub full_svg: bool,
    /// Text baseline as a fraction of the text band height.
    pub baseline: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 80.0,
            draw_text: false,
            font_family: "monospace".to_string(),
            font_height: 10.0,
            text_padding: 2.0,
            color: 0x000000,
            full_svg: true,
            baseline: 0.75,
        }
    }
}

impl SvgOptions {
    pub(crate) fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            draw_text: self.draw_text,
            font_height: self.font_height,
            text_padding: self.text_padding,
        }
    }
}
