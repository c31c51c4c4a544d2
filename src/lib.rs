//! Symbology-agnostic barcode synthesis: payloads in, device-independent
//! geometry (or SVG) out. The QR pipeline is built in full; the linear
//! families share the validation and layout machinery.

#![allow(clippy::items_after_test_module)]

pub mod builder;
mod common;
pub mod symbology;

pub use builder::{Color, Module, QrBuilder, QrSymbol};
pub use common::bitstream::BitStream;
pub use common::codec::{Mode, QrCode, Segment};
pub use common::error::{BarcodeError, BarcodeResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{ECLevel, RsBlock, Version};
pub use symbology::{BarcodeElement, RenderOptions, SvgOptions, Symbology, TextAlign};
