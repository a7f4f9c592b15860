//! XBIN container encoding and writing

#![allow(clippy::cast_possible_truncation)]

use super::{
    CONSTANT_TAG, ENTRY_ALIGNMENT, FOOTER_TAG, HEADER_SIZE, NAME_ALIGNMENT, VERSION_TAG,
    XBIN_MAGIC, XbinResource, padding,
};
use crate::error::{Error, Result};
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{Cursor, Seek, SeekFrom, Write};
use std::path::Path;

/// Header offset of the `end_of_data - 1` field
const END_MINUS_ONE_OFFSET: u64 = 8;

/// Header offset of the `end_of_data` field
const END_OF_DATA_OFFSET: u64 = 16;

/// Per-entry positions recorded during the first pass. Offset-table order,
/// entry-block order, name-record order, and backpatch pairing all follow
/// the order of this one array.
#[derive(Debug)]
struct EntryLayout {
    block_offset: u32,
    name_offset: u32,
}

/// Write an XBIN container to disk.
///
/// The container is encoded in memory and published with a rename, so a
/// failed pack never leaves a partial file at `path`.
///
/// # Errors
///
/// Returns [`Error::UnencodableCodePoint`] if any content code point exceeds
/// the 16-bit code unit range, or [`Error::Io`] if writing fails.
///
/// [`Error::UnencodableCodePoint`]: crate::Error::UnencodableCodePoint
/// [`Error::Io`]: crate::Error::Io
pub fn write_xbin<P: AsRef<Path>>(path: P, resource: &XbinResource) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_xbin_bytes(resource)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Wrote {} entries, {} bytes", resource.len(), bytes.len());
    Ok(())
}

/// Encode an XBIN container into a byte buffer.
///
/// Entries are written in the order given. Entry-block offsets, name-record
/// offsets, and the end-of-data header fields are only known once later
/// sections have been written, so they start as zero placeholders and are
/// backpatched at the end.
pub fn encode_xbin_bytes(resource: &XbinResource) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    let num_entries = resource.entries.len();

    // Fixed header; offsets 8 and 16 are backpatched once end-of-data is known
    cursor.write_all(&XBIN_MAGIC)?;
    cursor.write_all(&VERSION_TAG)?;
    cursor.write_u32::<LittleEndian>(0)?;
    cursor.write_all(&CONSTANT_TAG)?;
    cursor.write_u32::<LittleEndian>(0)?;
    cursor.write_u32::<LittleEndian>(num_entries as u32)?;

    // Offset table placeholder, one zeroed slot per entry
    for _ in 0..num_entries {
        cursor.write_u32::<LittleEndian>(0)?;
    }
    write_padding(&mut cursor, ENTRY_ALIGNMENT)?;

    // Entry blocks: name-record offset placeholder, code unit count, content
    let mut layouts = Vec::with_capacity(num_entries);
    for (idx, entry) in resource.entries.iter().enumerate() {
        let block_offset = cursor.position() as u32;
        cursor.write_u32::<LittleEndian>(0)?;
        cursor.write_u32::<LittleEndian>(entry.text.chars().count() as u32)?;
        for ch in entry.text.chars() {
            let unit = u16::try_from(u32::from(ch))
                .map_err(|_| Error::UnencodableCodePoint { ch })?;
            cursor.write_u16::<LittleEndian>(unit)?;
        }
        if idx != num_entries - 1 {
            write_padding(&mut cursor, ENTRY_ALIGNMENT)?;
        }
        layouts.push(EntryLayout {
            block_offset,
            name_offset: 0,
        });
    }

    // Name records, in entry order
    for (idx, entry) in resource.entries.iter().enumerate() {
        layouts[idx].name_offset = cursor.position() as u32;
        let name_bytes = entry.name.as_bytes();
        cursor.write_u32::<LittleEndian>(name_bytes.len() as u32)?;
        cursor.write_all(name_bytes)?;
        if idx != num_entries - 1 {
            write_padding(&mut cursor, NAME_ALIGNMENT)?;
        }
    }

    // The final alignment always applies, covering the single-entry and
    // already-aligned cases
    write_padding(&mut cursor, NAME_ALIGNMENT)?;
    let end_of_data = cursor.position() as u32;
    cursor.write_all(&FOOTER_TAG)?;
    cursor.write_all(&[0u8; 8])?;

    // Backpatch: name-record offset into each entry block, entry-block
    // offsets into the table, then both end-of-data header fields
    for layout in &layouts {
        cursor.seek(SeekFrom::Start(u64::from(layout.block_offset)))?;
        cursor.write_u32::<LittleEndian>(layout.name_offset)?;
    }
    cursor.seek(SeekFrom::Start(HEADER_SIZE))?;
    for layout in &layouts {
        cursor.write_u32::<LittleEndian>(layout.block_offset)?;
    }
    cursor.seek(SeekFrom::Start(END_OF_DATA_OFFSET))?;
    cursor.write_u32::<LittleEndian>(end_of_data)?;
    cursor.seek(SeekFrom::Start(END_MINUS_ONE_OFFSET))?;
    cursor.write_u32::<LittleEndian>(end_of_data - 1)?;

    Ok(cursor.into_inner())
}

fn write_padding(cursor: &mut Cursor<Vec<u8>>, alignment: u32) -> Result<()> {
    let pad = padding(alignment, cursor.position());
    for _ in 0..pad {
        cursor.write_u8(0)?;
    }
    Ok(())
}
