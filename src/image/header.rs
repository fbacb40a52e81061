//! Fixed-layout file and info headers of the 24-bit bitmap format.
//!
//! Both headers are serialised field by field in little-endian order with no
//! gaps between fields, so the in-memory struct layout never leaks into the
//! file.

use crate::error::{EditorError, FormatError, Result};
use std::io::{self, Read};

/// Size of the file header in bytes.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the info header in bytes.
pub const INFO_HEADER_SIZE: usize = 40;
/// Combined header size, which is also the pixel data offset we write.
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
/// Bytes per stored pixel (blue, green, red).
pub const BYTES_PER_PIXEL: usize = 3;
/// The only supported bit depth.
pub const BITS_PER_PIXEL: u16 = 24;
/// File signature.
pub const SIGNATURE: [u8; 2] = *b"BM";

/// Number of zero bytes appended to each row of `width` pixels.
pub fn row_padding(width: usize) -> usize {
    (4 - (width * BYTES_PER_PIXEL) % 4) % 4
}

/// Length in bytes of an encoded row of `width` pixels, padding included.
pub fn row_stride(width: usize) -> usize {
    width * BYTES_PER_PIXEL + row_padding(width)
}

/// The 14-byte file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub data_offset: u32,
}

impl FileHeader {
    /// Header for an image of the given dimensions.
    ///
    /// The file size counts `width * height * 3` pixel bytes and ignores row
    /// padding; readers only look at the data offset.
    pub fn for_dimensions(width: i32, height: i32) -> Self {
        let pixel_bytes = i64::from(width) * i64::from(height) * BYTES_PER_PIXEL as i64;
        let file_size = u32::try_from(HEADER_SIZE as i64 + pixel_bytes).unwrap_or(u32::MAX);
        Self {
            signature: SIGNATURE,
            file_size,
            reserved1: 0,
            reserved2: 0,
            data_offset: HEADER_SIZE as u32,
        }
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE] {
        let mut out = [0u8; FILE_HEADER_SIZE];
        let mut fields = FieldWriter::new(&mut out);
        fields.bytes(&self.signature);
        fields.u32(self.file_size);
        fields.u16(self.reserved1);
        fields.u16(self.reserved2);
        fields.u32(self.data_offset);
        out
    }

    pub fn from_bytes(bytes: &[u8; FILE_HEADER_SIZE]) -> Self {
        let mut fields = FieldReader::new(bytes);
        Self {
            signature: [fields.u8(), fields.u8()],
            file_size: fields.u32(),
            reserved1: fields.u16(),
            reserved2: fields.u16(),
            data_offset: fields.u32(),
        }
    }
}

/// The 40-byte info header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    /// Info header for a fresh 24-bit image.
    pub fn new(width: i32, height: i32) -> Self {
        let stride = row_stride(usize::try_from(width).unwrap_or(0));
        let image_size = (stride as u64) * u64::try_from(height).unwrap_or(0);
        Self {
            header_size: INFO_HEADER_SIZE as u32,
            width,
            height,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: 0,
            image_size: u32::try_from(image_size).unwrap_or(u32::MAX),
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 0,
            colors_important: 0,
        }
    }

    /// Rejects anything other than uncompressed 24-bit data.
    pub fn validate(&self) -> std::result::Result<(), FormatError> {
        if self.bits_per_pixel != BITS_PER_PIXEL {
            return Err(FormatError::UnsupportedBitDepth(self.bits_per_pixel));
        }
        if self.compression != 0 {
            return Err(FormatError::Compressed(self.compression));
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_SIZE] {
        let mut out = [0u8; INFO_HEADER_SIZE];
        let mut fields = FieldWriter::new(&mut out);
        fields.u32(self.header_size);
        fields.i32(self.width);
        fields.i32(self.height);
        fields.u16(self.planes);
        fields.u16(self.bits_per_pixel);
        fields.u32(self.compression);
        fields.u32(self.image_size);
        fields.i32(self.x_pixels_per_meter);
        fields.i32(self.y_pixels_per_meter);
        fields.u32(self.colors_used);
        fields.u32(self.colors_important);
        out
    }

    pub fn from_bytes(bytes: &[u8; INFO_HEADER_SIZE]) -> Self {
        let mut fields = FieldReader::new(bytes);
        Self {
            header_size: fields.u32(),
            width: fields.i32(),
            height: fields.i32(),
            planes: fields.u16(),
            bits_per_pixel: fields.u16(),
            compression: fields.u32(),
            image_size: fields.u32(),
            x_pixels_per_meter: fields.i32(),
            y_pixels_per_meter: fields.i32(),
            colors_used: fields.u32(),
            colors_important: fields.u32(),
        }
    }
}

/// Reads and validates both headers.
///
/// The signature is checked before the info header is read, so a wrong
/// signature is reported even when the rest of the header is missing.
pub fn read_headers<R: Read>(reader: &mut R) -> Result<(FileHeader, InfoHeader)> {
    let mut file_bytes = [0u8; FILE_HEADER_SIZE];
    let got = read_full(reader, &mut file_bytes)?;
    if got < FILE_HEADER_SIZE {
        return Err(FormatError::TruncatedHeader(got).into());
    }
    let file = FileHeader::from_bytes(&file_bytes);
    if file.signature != SIGNATURE {
        return Err(FormatError::BadSignature(file.signature).into());
    }

    let mut info_bytes = [0u8; INFO_HEADER_SIZE];
    let got = read_full(reader, &mut info_bytes)?;
    if got < INFO_HEADER_SIZE {
        return Err(FormatError::TruncatedHeader(FILE_HEADER_SIZE + got).into());
    }
    let info = InfoHeader::from_bytes(&info_bytes);
    info.validate()?;

    Ok((file, info))
}

/// Like `read_exact`, but reports how much was read instead of failing on EOF.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(EditorError::Io(err)),
        }
    }
    Ok(filled)
}

struct FieldReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.bytes[self.pos..self.pos + N]);
        self.pos += N;
        out
    }

    fn u8(&mut self) -> u8 {
        self.take::<1>()[0]
    }

    fn u16(&mut self) -> u16 {
        u16::from_le_bytes(self.take())
    }

    fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.take())
    }

    fn i32(&mut self) -> i32 {
        i32::from_le_bytes(self.take())
    }
}

struct FieldWriter<'a> {
    out: &'a mut [u8],
    pos: usize,
}

impl<'a> FieldWriter<'a> {
    fn new(out: &'a mut [u8]) -> Self {
        Self { out, pos: 0 }
    }

    fn bytes(&mut self, data: &[u8]) {
        self.out[self.pos..self.pos + data.len()].copy_from_slice(data);
        self.pos += data.len();
    }

    fn u16(&mut self, value: u16) {
        self.bytes(&value.to_le_bytes());
    }

    fn u32(&mut self, value: u32) {
        self.bytes(&value.to_le_bytes());
    }

    fn i32(&mut self, value: i32) {
        self.bytes(&value.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_aligns_rows_to_four_bytes() {
        assert_eq!(row_padding(1), 1);
        assert_eq!(row_padding(2), 2);
        assert_eq!(row_padding(3), 3);
        assert_eq!(row_padding(4), 0);
        for width in 1..64 {
            let stride = row_stride(width);
            assert_eq!(stride % 4, 0, "width {width}");
            assert_eq!(stride, width * 3 + (4 - (3 * width) % 4) % 4);
        }
    }

    #[test]
    fn file_header_layout_is_packed_little_endian() {
        let header = FileHeader::for_dimensions(2, 2);
        let bytes = header.to_bytes();
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(&bytes[2..6], &66u32.to_le_bytes());
        assert_eq!(&bytes[6..10], &[0, 0, 0, 0]);
        assert_eq!(&bytes[10..14], &54u32.to_le_bytes());
        assert_eq!(FileHeader::from_bytes(&bytes), header);
    }

    #[test]
    fn info_header_field_offsets() {
        let mut info = InfoHeader::new(3, -7);
        info.x_pixels_per_meter = 2835;
        let bytes = info.to_bytes();
        assert_eq!(&bytes[0..4], &40u32.to_le_bytes());
        assert_eq!(&bytes[4..8], &3i32.to_le_bytes());
        assert_eq!(&bytes[8..12], &(-7i32).to_le_bytes());
        assert_eq!(&bytes[12..14], &1u16.to_le_bytes());
        assert_eq!(&bytes[14..16], &24u16.to_le_bytes());
        assert_eq!(&bytes[24..28], &2835i32.to_le_bytes());
        assert_eq!(InfoHeader::from_bytes(&bytes), info);
    }

    #[test]
    fn read_headers_rejects_signature_before_reading_info() {
        let mut bytes = FileHeader::for_dimensions(1, 1).to_bytes().to_vec();
        bytes[0] = b'X';
        bytes[1] = b'X';
        let err = read_headers(&mut bytes.as_slice()).unwrap_err();
        assert!(matches!(
            err,
            EditorError::Format(FormatError::BadSignature([b'X', b'X']))
        ));
    }

    #[test]
    fn read_headers_reports_truncation() {
        let bytes = FileHeader::for_dimensions(1, 1).to_bytes();
        let err = read_headers(&mut &bytes[..10]).unwrap_err();
        assert!(matches!(
            err,
            EditorError::Format(FormatError::TruncatedHeader(10))
        ));

        let err = read_headers(&mut &bytes[..]).unwrap_err();
        assert!(matches!(
            err,
            EditorError::Format(FormatError::TruncatedHeader(14))
        ));
    }

    #[test]
    fn validate_rejects_palette_and_compression() {
        let mut info = InfoHeader::new(1, 1);
        info.bits_per_pixel = 8;
        assert_eq!(info.validate(), Err(FormatError::UnsupportedBitDepth(8)));

        let mut info = InfoHeader::new(1, 1);
        info.compression = 1;
        assert_eq!(info.validate(), Err(FormatError::Compressed(1)));
    }
}
