//! Conversion between [`PixelBuffer`] and the bitmap byte layout.

use super::buffer::PixelBuffer;
use super::header::{
    self, BYTES_PER_PIXEL, FILE_HEADER_SIZE, FileHeader, HEADER_SIZE, InfoHeader, row_padding,
};
use crate::error::Result;
use log::debug;
use std::io::{self, Read, Write};

/// Decodes a complete bitmap held in memory.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer> {
    let mut reader = bytes;
    read_from(&mut reader)
}

/// Decodes a bitmap from a stream.
///
/// Nothing is returned unless every pixel row was read, so a failed decode
/// never produces a partially filled buffer.
pub fn read_from<R: Read>(reader: &mut R) -> Result<PixelBuffer> {
    let (file, mut info) = header::read_headers(reader)?;

    // Extended info headers (V4/V5) sit between our 40 bytes and the pixels.
    info.header_size = header::INFO_HEADER_SIZE as u32;
    let len = PixelBuffer::pixel_len(&info)?;

    let gap = (file.data_offset as u64).saturating_sub(HEADER_SIZE as u64);
    if gap > 0 {
        debug!("Skipping {} bytes before pixel data", gap);
        skip(reader, gap)?;
    }

    // Storage grows with the bytes actually read, never with the header's claim.
    let row_len = info.width as usize * BYTES_PER_PIXEL;
    let padding = row_padding(info.width as usize) as u64;
    let mut pixels = Vec::new();
    for _ in 0..info.height {
        let read = reader
            .by_ref()
            .take(row_len as u64)
            .read_to_end(&mut pixels)?;
        if read < row_len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("pixel data ended after {} of {} bytes", pixels.len(), len),
            )
            .into());
        }
        // Padding after the last row is often missing; seeking past it never failed.
        skip(reader, padding)?;
    }

    let buffer = PixelBuffer::from_pixels(info, pixels);
    debug!(
        "Decoded {}x{} bitmap ({} pixel bytes)",
        buffer.width(),
        buffer.height(),
        buffer.pixels().len()
    );
    Ok(buffer)
}

/// Encodes `buffer` into a complete bitmap file image.
pub fn encode(buffer: &PixelBuffer) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(buffer));
    out.extend_from_slice(&header_bytes(buffer));
    for (row, pad) in padded_rows(buffer) {
        out.extend_from_slice(row);
        out.extend_from_slice(pad);
    }
    out
}

/// Writes `buffer` as a bitmap to a stream, byte for byte what [`encode`] returns.
pub fn write_to<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> Result<()> {
    writer.write_all(&header_bytes(buffer))?;
    for (row, pad) in padded_rows(buffer) {
        writer.write_all(row)?;
        writer.write_all(pad)?;
    }
    Ok(())
}

/// Exact length of the encoded file, row padding included.
pub fn encoded_len(buffer: &PixelBuffer) -> usize {
    HEADER_SIZE + header::row_stride(buffer.width() as usize) * buffer.height() as usize
}

/// Info header as written: dimensions from the buffer, always 24-bit and uncompressed.
fn info_for(buffer: &PixelBuffer) -> InfoHeader {
    InfoHeader {
        header_size: header::INFO_HEADER_SIZE as u32,
        width: buffer.width(),
        height: buffer.height(),
        bits_per_pixel: header::BITS_PER_PIXEL,
        compression: 0,
        ..*buffer.info()
    }
}

fn header_bytes(buffer: &PixelBuffer) -> [u8; HEADER_SIZE] {
    let file = FileHeader::for_dimensions(buffer.width(), buffer.height());
    let mut bytes = [0u8; HEADER_SIZE];
    bytes[..FILE_HEADER_SIZE].copy_from_slice(&file.to_bytes());
    bytes[FILE_HEADER_SIZE..].copy_from_slice(&info_for(buffer).to_bytes());
    bytes
}

static PADDING: [u8; 3] = [0; 3];

/// Each stored row paired with the zero bytes that pad it to four.
fn padded_rows(buffer: &PixelBuffer) -> impl Iterator<Item = (&[u8], &'static [u8])> {
    let pad: &'static [u8] = &PADDING[..row_padding(buffer.width() as usize)];
    buffer
        .pixels()
        .chunks_exact(buffer.row_len())
        .map(move |row| (row, pad))
}

fn skip<R: Read>(reader: &mut R, count: u64) -> io::Result<()> {
    io::copy(&mut reader.by_ref().take(count), &mut io::sink())?;
    Ok(())
}
