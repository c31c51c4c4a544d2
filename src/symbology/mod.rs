mod codabar;
mod code128;
mod code39;
mod ean;
mod element;
mod itf;
mod linear;
mod svg;

pub use element::{BarcodeElement, RenderOptions, SvgOptions, TextAlign};

use crate::builder::QrBuilder;
use crate::common::error::{BarcodeError, BarcodeResult};

// Symbology registry
//------------------------------------------------------------------------------

/// The closed set of symbologies the engine knows about. Every tag
/// validates payloads; tags whose encoding tables ship out of tree fail
/// `render` with `UnsupportedSymbology`.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Symbology {
    Qr,
    Code128,
    Code39,
    Code93,
    Ean13,
    Ean8,
    Ean5,
    Ean2,
    Isbn,
    UpcA,
    UpcE,
    Itf,
    Itf14,
    Itf16,
    Codabar,
    Telepen,
    Pdf417,
    DataMatrix,
    Aztec,
    Rm4scc,
}

static ALL: [Symbology; 20] = [
    Symbology::Qr,
    Symbology::Code128,
    Symbology::Code39,
    Symbology::Code93,
    Symbology::Ean13,
    Symbology::Ean8,
    Symbology::Ean5,
    Symbology::Ean2,
    Symbology::Isbn,
    Symbology::UpcA,
    Symbology::UpcE,
    Symbology::Itf,
    Symbology::Itf14,
    Symbology::Itf16,
    Symbology::Codabar,
    Symbology::Telepen,
    Symbology::Pdf417,
    Symbology::DataMatrix,
    Symbology::Aztec,
    Symbology::Rm4scc,
];

impl Symbology {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Qr => "QR",
            Self::Code128 => "Code 128",
            Self::Code39 => "Code 39",
            Self::Code93 => "Code 93",
            Self::Ean13 => "EAN-13",
            Self::Ean8 => "EAN-8",
            Self::Ean5 => "EAN-5",
            Self::Ean2 => "EAN-2",
            Self::Isbn => "ISBN",
            Self::UpcA => "UPC-A",
            Self::UpcE => "UPC-E",
            Self::Itf => "ITF",
            Self::Itf14 => "ITF-14",
            Self::Itf16 => "ITF-16",
            Self::Codabar => "Codabar",
            Self::Telepen => "Telepen",
            Self::Pdf417 => "PDF417",
            Self::DataMatrix => "Data Matrix",
            Self::Aztec => "Aztec",
            Self::Rm4scc => "RM4SCC",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL.iter().copied().find(|s| s.name().eq_ignore_ascii_case(name))
    }

    pub fn min_length(&self) -> usize {
        match self {
            Self::Ean13 | Self::Isbn => 12,
            Self::Ean8 => 7,
            Self::Ean5 => 5,
            Self::Ean2 | Self::Itf => 2,
            Self::UpcA => 11,
            Self::UpcE => 6,
            Self::Itf14 => 13,
            Self::Itf16 => 15,
            Self::Codabar => 3,
            _ => 1,
        }
    }

    pub fn max_length(&self) -> usize {
        match self {
            Self::Qr => 2953,
            Self::Ean13 | Self::Isbn => 13,
            Self::Ean8 => 8,
            Self::Ean5 => 5,
            Self::Ean2 => 2,
            Self::UpcA => 12,
            Self::UpcE => 8,
            Self::Itf14 => 14,
            Self::Itf16 => 16,
            // No capacity model until their encoding tables are wired in;
            // length stays unbounded rather than a made-up ceiling
            Self::Pdf417 | Self::DataMatrix | Self::Aztec => usize::MAX,
            Self::Telepen => 32,
            Self::Rm4scc => 120,
            _ => 255,
        }
    }

    /// Whether `byte` is in this symbology's accepted code points.
    pub fn accepts(&self, byte: u8) -> bool {
        match self {
            Self::Qr | Self::Pdf417 | Self::DataMatrix | Self::Aztec => true,
            Self::Code128 => code128::accepts(byte),
            Self::Code39 | Self::Code93 => code39::accepts(byte),
            Self::Ean13 | Self::Ean8 | Self::Ean5 | Self::Ean2 | Self::Isbn | Self::UpcA
            | Self::UpcE | Self::Itf | Self::Itf14 | Self::Itf16 => byte.is_ascii_digit(),
            Self::Codabar => codabar::accepts(byte),
            Self::Telepen => byte < 0x80,
            Self::Rm4scc => byte.is_ascii_digit() || byte.is_ascii_uppercase(),
        }
    }

    /// Checks the length bounds, then every byte against the accepted code
    /// points.
    pub fn validate(&self, data: &[u8]) -> BarcodeResult<()> {
        let (min, max) = (self.min_length(), self.max_length());
        if data.len() < min || data.len() > max {
            return Err(BarcodeError::InvalidLength {
                actual: data.len(),
                min,
                max,
                symbology: self.name(),
            });
        }
        if let Some(&byte) = data.iter().find(|&&b| !self.accepts(b)) {
            return Err(BarcodeError::InvalidCharacter { byte, symbology: self.name() });
        }
        Ok(())
    }

    /// Non-throwing counterpart of `validate`.
    pub fn is_valid(&self, data: &[u8]) -> bool {
        self.validate(data).is_ok()
    }
}

// Geometry emission
//------------------------------------------------------------------------------

impl Symbology {
    /// Validates `data` and emits the drawing primitives of the finished
    /// symbol in the caller's unit system.
    pub fn render(&self, data: &[u8], opts: &RenderOptions) -> BarcodeResult<Vec<BarcodeElement>> {
        self.validate(data)?;

        let modules = match self {
            Self::Qr => return render_qr(data, opts),
            Self::Code128 => code128::modules(data),
            Self::Code39 => code39::modules(data),
            Self::Ean13 | Self::Isbn => ean::ean13_modules(&ean::normalize(data, 12)),
            Self::Ean8 => ean::ean8_modules(&ean::normalize(data, 7)),
            Self::Ean5 => ean::ean5_modules(data),
            Self::Ean2 => ean::ean2_modules(data),
            Self::UpcA => ean::upca_modules(&ean::normalize(data, 11)),
            Self::UpcE => ean::upce_modules(data)?,
            Self::Itf => itf::modules(data),
            Self::Itf14 => itf::modules(&itf::normalize_checked(data, 13)),
            Self::Itf16 => itf::modules(&itf::normalize_checked(data, 15)),
            Self::Codabar => codabar::modules(data)?,
            Self::Code93 | Self::Telepen | Self::Pdf417 | Self::DataMatrix | Self::Aztec
            | Self::Rm4scc => return Err(BarcodeError::UnsupportedSymbology(self.name())),
        };

        let text = String::from_utf8_lossy(data).into_owned();
        Ok(linear::layout(&modules, &text, opts))
    }

    /// Renders and serializes in one step.
    pub fn to_svg(&self, data: &[u8], opts: &SvgOptions) -> BarcodeResult<String> {
        let elements = self.render(data, &opts.render_options())?;
        Ok(svg::serialize(&elements, opts))
    }
}

// One filled bar per dark module; light modules are background
fn render_qr(data: &[u8], opts: &RenderOptions) -> BarcodeResult<Vec<BarcodeElement>> {
    let qr = QrBuilder::new(data).build()?;
    let n = qr.width();
    let (mw, mh) = (opts.width / n as f64, opts.height / n as f64);

    let mut elements = Vec::with_capacity(qr.count_dark_modules());
    for r in 0..n as i16 {
        for c in 0..n as i16 {
            if qr.is_dark(r, c) {
                elements.push(BarcodeElement::Bar {
                    left: c as f64 * mw,
                    top: r as f64 * mh,
                    width: mw,
                    height: mh,
                    filled: true,
                });
            }
        }
    }
    Ok(elements)
}

#[cfg(test)]
mod symbology_tests {
    use test_case::test_case;

    use super::{BarcodeElement, RenderOptions, SvgOptions, Symbology};
    use crate::common::error::BarcodeError;

    #[test]
    fn test_names_roundtrip() {
        for sym in super::ALL {
            assert_eq!(Symbology::from_name(sym.name()), Some(sym));
        }
        assert_eq!(Symbology::from_name("ean-13"), Some(Symbology::Ean13));
        assert_eq!(Symbology::from_name("nonesuch"), None);
    }

    #[test]
    fn test_ean13_validation() {
        let sym = Symbology::Ean13;
        assert_eq!(
            sym.validate(b"123"),
            Err(BarcodeError::InvalidLength { actual: 3, min: 12, max: 13, symbology: "EAN-13" })
        );
        assert_eq!(
            sym.validate(b"ABCDEFGHIJKLM"),
            Err(BarcodeError::InvalidCharacter { byte: b'A', symbology: "EAN-13" })
        );
        assert!(sym.validate(b"5901234123457").is_ok());
        assert!(sym.validate(b"590123412345").is_ok());
    }

    #[test_case(Symbology::Ean8, b"1234567")]
    #[test_case(Symbology::UpcA, b"03600029145")]
    #[test_case(Symbology::UpcE, b"123456")]
    #[test_case(Symbology::Itf, b"0812")]
    #[test_case(Symbology::Itf14, b"1234567890123")]
    #[test_case(Symbology::Code39, b"CODE-39 OK")]
    #[test_case(Symbology::Code128, b"Code 128 ok!")]
    #[test_case(Symbology::Codabar, b"A40156B")]
    #[test_case(Symbology::Ean5, b"52495")]
    #[test_case(Symbology::Ean2, b"53")]
    #[test_case(Symbology::Isbn, b"9780306406157")]
    fn test_validation_parity(sym: Symbology, data: &[u8]) {
        assert!(sym.is_valid(data));
        assert!(sym.validate(data).is_ok());
        assert!(!sym.is_valid(b""));
        assert!(sym.validate(b"").is_err());
    }

    #[test]
    fn test_unsupported_renderers_still_validate() {
        for sym in [Symbology::Code93, Symbology::Telepen, Symbology::Pdf417, Symbology::Rm4scc] {
            let payload = b"1";
            assert!(sym.is_valid(payload));
            assert_eq!(
                sym.render(payload, &RenderOptions::default()),
                Err(BarcodeError::UnsupportedSymbology(sym.name()))
            );
        }
    }

    #[test]
    fn test_ean13_render_geometry() {
        let opts = RenderOptions { width: 95.0, height: 60.0, ..Default::default() };
        let elements = Symbology::Ean13.render(b"5901234123457", &opts).unwrap();
        // 95 modules at width 95.0: every bar has an integral width
        let total: f64 = elements
            .iter()
            .map(|e| match e {
                BarcodeElement::Bar { width, .. } => *width,
                _ => 0.0,
            })
            .sum();
        assert!((total - 95.0).abs() < 1e-9);
        // Bars alternate filled/unfilled
        for pair in elements.windows(2) {
            if let [BarcodeElement::Bar { filled: a, .. }, BarcodeElement::Bar { filled: b, .. }] =
                pair
            {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_ean13_render_with_text_band() {
        let opts = RenderOptions {
            width: 95.0,
            height: 60.0,
            draw_text: true,
            font_height: 8.0,
            text_padding: 2.0,
        };
        let elements = Symbology::Ean13.render(b"590123412345", &opts).unwrap();
        match elements.last().unwrap() {
            BarcodeElement::Text { text, .. } => assert_eq!(text, "590123412345"),
            other => panic!("expected trailing text, got {other:?}"),
        }
    }

    #[test]
    fn test_qr_render_emits_only_filled_bars() {
        let opts = RenderOptions { width: 21.0, height: 21.0, ..Default::default() };
        let elements = Symbology::Qr.render(b"HELLO WORLD", &opts).unwrap();
        assert!(elements.iter().all(|e| matches!(
            e,
            BarcodeElement::Bar { filled: true, width, height, .. } if *width == 1.0 && *height == 1.0
        )));
        // The three finder pattern cores are dark
        let has = |left: f64, top: f64| {
            elements.iter().any(|e| match e {
                BarcodeElement::Bar { left: l, top: t, .. } => (*l, *t) == (left, top),
                _ => false,
            })
        };
        assert!(has(0.0, 0.0));
        assert!(has(20.0, 0.0));
        assert!(has(0.0, 20.0));
        assert!(!has(7.0, 0.0), "separator module must be light");
    }

    #[test]
    fn test_to_svg_determinism() {
        let opts = SvgOptions::default();
        let a = Symbology::Code128.to_svg(b"DETERMINISTIC", &opts).unwrap();
        let b = Symbology::Code128.to_svg(b"DETERMINISTIC", &opts).unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with("<svg "));
    }

    #[test]
    fn test_to_svg_validates_first() {
        let err = Symbology::Ean8.to_svg(b"12", &SvgOptions::default()).unwrap_err();
        assert!(matches!(err, BarcodeError::InvalidLength { .. }));
    }
}
