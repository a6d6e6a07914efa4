//! Length-prefixed binary encoding for persisted tab state.
//!
//! All integers are big-endian. Strings and byte arrays carry a `u32` length
//! prefix, with `0xFFFF_FFFF` marking a null value that decodes as empty.
//! Lists carry a `u32` item count.
//!
//! ```text
//! full session   := string-list  i32(active, -1 = none)  bytes-list
//! pinned session := string-list  bytes-list
//! history blob   := u32(count) { string(url) string(title) }*  u32(current)
//! ```

use bytes::{Buf, BufMut, BytesMut};

use crate::types::errors::CodecError;
use crate::types::navigation::{HistoryItem, NavigationHistory};
use crate::types::session::{SessionEntry, SessionKind, SessionRecord};

const NULL_LENGTH: u32 = 0xFFFF_FFFF;

// --- writer ---

fn put_bytes(buf: &mut BytesMut, data: &[u8]) {
    buf.put_u32(data.len() as u32);
    buf.put_slice(data);
}

fn put_string(buf: &mut BytesMut, s: &str) {
    put_bytes(buf, s.as_bytes());
}

// --- reader ---

struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    fn ensure(&self, needed: usize) -> Result<(), CodecError> {
        if self.buf.remaining() < needed {
            return Err(CodecError::Truncated {
                needed,
                remaining: self.buf.remaining(),
            });
        }
        Ok(())
    }

    fn u32(&mut self) -> Result<u32, CodecError> {
        self.ensure(4)?;
        Ok(self.buf.get_u32())
    }

    fn i32(&mut self) -> Result<i32, CodecError> {
        self.ensure(4)?;
        Ok(self.buf.get_i32())
    }

    fn bytes(&mut self) -> Result<Vec<u8>, CodecError> {
        let len = self.u32()?;
        if len == NULL_LENGTH {
            return Ok(Vec::new());
        }
        let len = len as usize;
        self.ensure(len)?;
        let data = self.buf[..len].to_vec();
        self.buf.advance(len);
        Ok(data)
    }

    fn string(&mut self) -> Result<String, CodecError> {
        String::from_utf8(self.bytes()?).map_err(|_| CodecError::InvalidUtf8)
    }

    fn string_list(&mut self) -> Result<Vec<String>, CodecError> {
        let count = self.u32()?;
        // Each item needs at least its 4-byte prefix; reject absurd counts early.
        self.ensure((count as usize).saturating_mul(4))?;
        (0..count).map(|_| self.string()).collect()
    }

    fn bytes_list(&mut self) -> Result<Vec<Vec<u8>>, CodecError> {
        let count = self.u32()?;
        self.ensure((count as usize).saturating_mul(4))?;
        (0..count).map(|_| self.bytes()).collect()
    }
}

// --- navigation history ---

/// Encodes a back/forward list into an opaque blob.
pub fn encode_history(history: &NavigationHistory) -> Vec<u8> {
    let mut buf = BytesMut::new();
    buf.put_u32(history.count() as u32);
    for item in history.items() {
        put_string(&mut buf, &item.url);
        put_string(&mut buf, &item.title);
    }
    buf.put_u32(history.current_index() as u32);
    buf.to_vec()
}

pub fn decode_history(data: &[u8]) -> Result<NavigationHistory, CodecError> {
    let mut reader = Reader::new(data);
    let count = reader.u32()?;
    reader.ensure((count as usize).saturating_mul(8))?;
    let mut items = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let url = reader.string()?;
        let title = reader.string()?;
        items.push(HistoryItem { url, title });
    }
    let current = reader.u32()?;
    if count > 0 && current >= count {
        return Err(CodecError::HistoryIndex {
            index: current,
            count,
        });
    }
    Ok(NavigationHistory::from_parts(items, current as usize))
}

// --- session records ---

/// Encodes a session snapshot in the layout for `kind`.
pub fn encode_session(record: &SessionRecord, kind: SessionKind) -> Vec<u8> {
    let mut buf = BytesMut::new();
    buf.put_u32(record.entries.len() as u32);
    for entry in &record.entries {
        put_string(&mut buf, &entry.url);
    }
    if kind == SessionKind::Full {
        buf.put_i32(record.active_index.unwrap_or(-1));
    }
    buf.put_u32(record.entries.len() as u32);
    for entry in &record.entries {
        put_bytes(&mut buf, &entry.history);
    }
    buf.to_vec()
}

/// Decodes a snapshot. Missing trailing history blobs decode as empty.
pub fn decode_session(data: &[u8], kind: SessionKind) -> Result<SessionRecord, CodecError> {
    let mut reader = Reader::new(data);
    let urls = reader.string_list()?;
    let active_index = match kind {
        SessionKind::Full => Some(reader.i32()?).filter(|i| *i >= 0),
        SessionKind::Pinned => None,
    };
    let mut histories = reader.bytes_list()?.into_iter();

    let entries = urls
        .into_iter()
        .map(|url| SessionEntry {
            url,
            history: histories.next().unwrap_or_default(),
        })
        .collect();

    Ok(SessionRecord {
        entries,
        active_index,
    })
}
