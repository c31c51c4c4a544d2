use std::cmp::min;

use super::types::Segment;
use crate::common::bitstream::BitStream;
use crate::common::ec::{ecc, interleave};
use crate::common::error::{BarcodeError, BarcodeResult};
use crate::common::metadata::{ECLevel, Version};

// QR encoder
//------------------------------------------------------------------------------

/// Accumulates data segments for one symbol and encodes them into the
/// interleaved data + error correction codeword stream.
///
/// The codeword stream is computed once and cached; appending another
/// segment invalidates the cache.
#[derive(Debug, Clone)]
pub struct QrCode {
    version: Version,
    ec_level: ECLevel,
    segments: Vec<Segment>,
    codewords: Option<Vec<u8>>,
}

impl QrCode {
    pub fn new(version: Version, ec_level: ECLevel) -> Self {
        Self { version, ec_level, segments: Vec::new(), codewords: None }
    }

    /// Encodes `text` in the narrowest sufficient mode at the smallest
    /// sufficient version.
    pub fn from_text(text: &str, ec_level: ECLevel) -> BarcodeResult<Self> {
        Self::from_segments(vec![Segment::auto(text.as_bytes())], ec_level)
    }

    /// Encodes `data` in byte mode at the smallest sufficient version.
    pub fn from_bytes(data: &[u8], ec_level: ECLevel) -> BarcodeResult<Self> {
        Self::from_segments(vec![Segment::bytes(data)], ec_level)
    }

    pub(crate) fn from_segments(segments: Vec<Segment>, ec_level: ECLevel) -> BarcodeResult<Self> {
        let version = Self::fit_version(&segments, ec_level)?;
        Ok(Self { version, ec_level, segments, codewords: None })
    }

    /// Smallest version whose data capacity holds the segment list, by the
    /// theoretical bit cost at each candidate version.
    fn fit_version(segments: &[Segment], ec_level: ECLevel) -> BarcodeResult<Version> {
        let mut cost = 0;
        for v in 1..=40 {
            let ver = Version::unchecked(v);
            cost = segments.iter().map(|s| s.bit_len(ver)).sum();
            if cost <= ver.data_bit_capacity(ec_level) {
                return Ok(ver);
            }
        }
        Err(BarcodeError::InputTooLong {
            have_bits: cost,
            capacity_bits: Version::unchecked(40).data_bit_capacity(ec_level),
        })
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    pub fn module_count(&self) -> usize {
        self.version.width()
    }

    pub fn add_text(&mut self, text: &str) -> &mut Self {
        self.add_segment(Segment::auto(text.as_bytes()))
    }

    pub fn add_bytes(&mut self, data: &[u8]) -> &mut Self {
        self.add_segment(Segment::bytes(data))
    }

    pub fn add_numeric(&mut self, digits: &str) -> BarcodeResult<&mut Self> {
        let seg = Segment::numeric(digits.as_bytes())?;
        Ok(self.add_segment(seg))
    }

    pub fn add_alphanumeric(&mut self, text: &str) -> BarcodeResult<&mut Self> {
        let seg = Segment::alphanumeric(text.as_bytes())?;
        Ok(self.add_segment(seg))
    }

    /// Appending any segment drops the cached codeword stream.
    pub fn add_segment(&mut self, segment: Segment) -> &mut Self {
        self.segments.push(segment);
        self.codewords = None;
        self
    }

    /// The interleaved codeword stream, data phase then error correction
    /// phase. Fails with `InputTooLong` when the segments exceed this
    /// version's capacity.
    pub fn data_codewords(&mut self) -> BarcodeResult<&[u8]> {
        let codewords = match self.codewords.take() {
            Some(cw) => cw,
            None => self.encode()?,
        };
        Ok(self.codewords.insert(codewords).as_slice())
    }

    fn encode(&self) -> BarcodeResult<Vec<u8>> {
        let blocks = self.version.rs_blocks(self.ec_level);
        let capacity = self.version.data_bit_capacity(self.ec_level);

        let have_bits: usize = self.segments.iter().map(|s| s.bit_len(self.version)).sum();
        if have_bits > capacity {
            return Err(BarcodeError::InputTooLong { have_bits, capacity_bits: capacity });
        }

        let mut bs = BitStream::with_capacity(capacity);
        for seg in &self.segments {
            seg.write(&mut bs, self.version);
        }
        debug_assert!(bs.len() == have_bits, "Stream length must match the computed bit cost");

        // Terminator, shortened when fewer than four bits remain
        bs.push_bits(0u8, min(4, capacity - bs.len()));
        // Align to a codeword boundary
        if bs.len() & 7 != 0 {
            bs.push_bits(0u8, 8 - (bs.len() & 7));
        }
        // Alternating padding codewords up to full capacity
        let remaining = (capacity - bs.len()) >> 3;
        PADDING_CODEWORDS.iter().copied().cycle().take(remaining).for_each(|pc| {
            bs.push_bits(pc, 8);
        });
        debug_assert!(bs.len() == capacity, "Padded stream must fill the data capacity");

        let mut data_blocks = Vec::with_capacity(blocks.len());
        let mut ecc_blocks = Vec::with_capacity(blocks.len());
        let mut offset = 0;
        for block in &blocks {
            let data: Vec<u8> = (0..block.data).map(|i| bs.byte_at(offset + i)).collect();
            offset += block.data;
            ecc_blocks.push(ecc(&data, block.ec_len()));
            data_blocks.push(data);
        }

        let mut out = interleave(&data_blocks);
        out.extend(interleave(&ecc_blocks));
        debug_assert!(
            out.len() == blocks.iter().map(|b| b.total).sum::<usize>(),
            "Codeword stream length must match the block table"
        );
        Ok(out)
    }
}

// Global constants
//------------------------------------------------------------------------------

pub static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];
