mod grid;

pub use grid::{Color, Module, QrSymbol};

use crate::common::codec::{QrCode, Segment};
use crate::common::error::BarcodeResult;
use crate::common::mask::{apply_best_mask, MaskPattern};
use crate::common::metadata::{ECLevel, Version};

// QR builder
//------------------------------------------------------------------------------

/// Fluent front-end over the full pipeline: segment the payload, encode the
/// codeword stream, place the grid and mask it.
pub struct QrBuilder<'a> {
    data: &'a [u8],
    version: Option<Version>,
    ec_level: ECLevel,
    mask: Option<MaskPattern>,
}

impl<'a> QrBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, version: None, ec_level: ECLevel::M, mask: None }
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    /// Forces a mask pattern instead of searching for the lowest-penalty
    /// one.
    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn build(&self) -> BarcodeResult<QrSymbol> {
        let segment = Segment::auto(self.data);
        let mut code = match self.version {
            Some(v) => {
                let mut code = QrCode::new(v, self.ec_level);
                code.add_segment(segment);
                code
            }
            None => QrCode::from_segments(vec![segment], self.ec_level)?,
        };

        let mut qr = QrSymbol::new(code.version(), self.ec_level);
        qr.draw_function_patterns();
        qr.draw_encoding_region(code.data_codewords()?);

        match self.mask {
            Some(m) => qr.apply_mask(m),
            None => {
                apply_best_mask(&mut qr);
            }
        }
        Ok(qr)
    }
}
