//! XBIN container reading and parsing

#![allow(clippy::cast_possible_truncation)]

use super::{
    CONSTANT_TAG, ENTRY_ALIGNMENT, TextEntry, VERSION_TAG, XBIN_MAGIC, XbinResource, padding,
};
use crate::error::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::fs::File;
use std::io::{Cursor, Read, Seek, SeekFrom};
use std::path::Path;

/// Read an XBIN container from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
/// Returns [`Error::InvalidXbinMagic`] if the file does not have a valid
/// XBIN header.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::InvalidXbinMagic`]: crate::Error::InvalidXbinMagic
pub fn read_xbin<P: AsRef<Path>>(path: P) -> Result<XbinResource> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    parse_xbin_bytes(&buffer)
}

/// Parse XBIN container data from bytes
///
/// Entries are read sequentially in table order, with one backward seek per
/// entry to fetch its name record. Each entry's ordering key is its content
/// start offset, mirroring the numbering the encoder's inputs carried.
///
/// # Errors
///
/// Returns a header error if the magic, version tag, or constant tag do not
/// match, [`Error::UnexpectedEndOfData`] if any read runs past the end of
/// the data, and [`Error::InvalidOffset`] if a name-record offset points
/// outside the data.
///
/// [`Error::UnexpectedEndOfData`]: crate::Error::UnexpectedEndOfData
/// [`Error::InvalidOffset`]: crate::Error::InvalidOffset
pub fn parse_xbin_bytes(data: &[u8]) -> Result<XbinResource> {
    let len = data.len() as u64;
    let mut cursor = Cursor::new(data);

    // Fixed header: magic, version tag, end-of-data - 1, constant tag,
    // end-of-data, entry count
    let mut magic = [0u8; 4];
    read_exact(&mut cursor, &mut magic)?;
    if magic != XBIN_MAGIC {
        return Err(Error::InvalidXbinMagic(magic));
    }

    let mut version = [0u8; 4];
    read_exact(&mut cursor, &mut version)?;
    if version != VERSION_TAG {
        return Err(Error::InvalidVersionTag(version));
    }

    let _end_minus_one = read_u32(&mut cursor)?;

    let mut constant = [0u8; 4];
    read_exact(&mut cursor, &mut constant)?;
    if constant != CONSTANT_TAG {
        return Err(Error::InvalidConstantTag(constant));
    }

    let _end_of_data = read_u32(&mut cursor)?;
    let num_entries = read_u32(&mut cursor)? as usize;

    // Offset table; entry blocks follow sequentially, so the table values
    // only advance the cursor here
    for _ in 0..num_entries {
        let _block_offset = read_u32(&mut cursor)?;
    }
    skip_padding(&mut cursor, ENTRY_ALIGNMENT)?;

    let mut entries = Vec::with_capacity(num_entries);
    for _ in 0..num_entries {
        let name_offset = read_u32(&mut cursor)?;
        if u64::from(name_offset) >= len {
            return Err(Error::InvalidOffset {
                offset: name_offset,
                len,
            });
        }

        // Fetch the name record, then resume at the entry block
        let resume_pos = cursor.position();
        cursor.seek(SeekFrom::Start(u64::from(name_offset)))?;
        let name_len = read_u32(&mut cursor)? as usize;
        let mut name_bytes = vec![0u8; name_len];
        read_exact(&mut cursor, &mut name_bytes)?;
        let name = String::from_utf8(name_bytes)?;
        cursor.seek(SeekFrom::Start(resume_pos))?;

        let char_count = read_u32(&mut cursor)? as usize;
        // The content start offset doubles as the entry's ordering key
        let index = cursor.position();

        let mut units = Vec::with_capacity(char_count);
        for _ in 0..char_count {
            units.push(read_u16(&mut cursor)?);
        }
        let text = String::from_utf16(&units)?;

        entries.push(TextEntry { index, name, text });
        skip_padding(&mut cursor, ENTRY_ALIGNMENT)?;
    }

    Ok(XbinResource { entries })
}

fn read_u16(cursor: &mut Cursor<&[u8]>) -> Result<u16> {
    cursor.read_u16::<LittleEndian>().map_err(map_eof)
}

fn read_u32(cursor: &mut Cursor<&[u8]>) -> Result<u32> {
    cursor.read_u32::<LittleEndian>().map_err(map_eof)
}

fn read_exact(cursor: &mut Cursor<&[u8]>, buf: &mut [u8]) -> Result<()> {
    cursor.read_exact(buf).map_err(map_eof)
}

// Seeking past the end is harmless; the next read reports the truncation
fn skip_padding(cursor: &mut Cursor<&[u8]>, alignment: u32) -> Result<()> {
    let pad = padding(alignment, cursor.position());
    cursor.seek(SeekFrom::Current(pad as i64))?;
    Ok(())
}

fn map_eof(err: std::io::Error) -> Error {
    if err.kind() == std::io::ErrorKind::UnexpectedEof {
        Error::UnexpectedEndOfData
    } else {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{HEADER_SIZE, encode_xbin_bytes};
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_bytes() -> Vec<u8> {
        let resource = XbinResource {
            entries: vec![
                TextEntry {
                    index: 1,
                    name: "greeting".to_string(),
                    text: "Hello".to_string(),
                },
                TextEntry {
                    index: 2,
                    name: "farewell".to_string(),
                    text: "Goodbye".to_string(),
                },
            ],
        };
        encode_xbin_bytes(&resource).unwrap()
    }

    #[test]
    fn test_rejects_wrong_magic() {
        let mut bytes = sample_bytes();
        bytes[..4].copy_from_slice(b"NIBX");
        match parse_xbin_bytes(&bytes) {
            Err(Error::InvalidXbinMagic(found)) => assert_eq!(&found, b"NIBX"),
            other => panic!("expected InvalidXbinMagic, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_wrong_version_tag() {
        let mut bytes = sample_bytes();
        bytes[4] = 0xFF;
        assert!(matches!(
            parse_xbin_bytes(&bytes),
            Err(Error::InvalidVersionTag(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_constant_tag() {
        let mut bytes = sample_bytes();
        bytes[12] = 0x00;
        assert!(matches!(
            parse_xbin_bytes(&bytes),
            Err(Error::InvalidConstantTag(_))
        ));
    }

    #[test]
    fn test_truncated_header() {
        let bytes = sample_bytes();
        assert!(matches!(
            parse_xbin_bytes(&bytes[..10]),
            Err(Error::UnexpectedEndOfData)
        ));
    }

    #[test]
    fn test_truncated_content() {
        let bytes = sample_bytes();
        let cut = bytes.len() - 20;
        assert!(matches!(
            parse_xbin_bytes(&bytes[..cut]),
            Err(Error::UnexpectedEndOfData)
        ));
    }

    #[test]
    fn test_name_offset_out_of_bounds() {
        let mut bytes = sample_bytes();
        // corrupt the first entry block's name-record offset
        let block_offset =
            u32::from_le_bytes(bytes[HEADER_SIZE as usize..HEADER_SIZE as usize + 4].try_into().unwrap())
                as usize;
        bytes[block_offset..block_offset + 4].copy_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(
            parse_xbin_bytes(&bytes),
            Err(Error::InvalidOffset { .. })
        ));
    }

    #[test]
    fn test_order_keys_are_content_start_offsets() {
        let bytes = sample_bytes();
        let parsed = parse_xbin_bytes(&bytes).unwrap();

        // first entry block sits at 32 after the padded table; its content
        // starts past the name-offset and count fields
        assert_eq!(parsed.entries[0].index, 40);
        assert!(parsed.entries[1].index > parsed.entries[0].index);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_xbin_bytes(&[]),
            Err(Error::UnexpectedEndOfData)
        ));
    }
}
