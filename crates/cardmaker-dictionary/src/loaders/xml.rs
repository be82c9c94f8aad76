use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::DictionaryError;

const PRESERVE_ATTR: &str = "xml:space";

/// Which elements of the source document are entries
#[derive(Debug, Clone)]
pub struct EntryFormat {
    /// Qualified element name, e.g. `d:entry`
    pub entry_tag: String,
    /// Attribute on the entry element holding the headword, e.g. `d:title`
    pub title_attr: String,
}

impl Default for EntryFormat {
    fn default() -> Self {
        Self {
            entry_tag: "d:entry".to_string(),
            title_attr: "d:title".to_string(),
        }
    }
}

/// One dictionary record as stored: `(id, word, definition)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// 1-based position in the source document
    pub id: i64,
    pub word: String,
    /// The entry element re-serialized with `xml:space="preserve"`
    pub definition: String,
}

/// Extract every entry of `xml` in document order.
///
/// The title attribute becomes `word` and is left out of the serialized
/// definition. Everything else inside the entry is copied as written.
pub fn parse_entries(xml: &str, format: &EntryFormat) -> Result<Vec<RawEntry>, DictionaryError> {
    let mut reader = Reader::from_str(xml);
    let mut entries = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) if start.name().as_ref() == format.entry_tag.as_bytes() => {
                let index = entries.len() + 1;
                let (word, head) = entry_head(&start, format, index)?;
                let definition = read_entry(&mut reader, head, index)?;
                entries.push(RawEntry {
                    id: index as i64,
                    word,
                    definition,
                });
            }
            Event::Empty(start) if start.name().as_ref() == format.entry_tag.as_bytes() => {
                let index = entries.len() + 1;
                let (word, head) = entry_head(&start, format, index)?;

                let mut writer = Writer::new(Vec::new());
                writer.write_event(Event::Empty(head))?;
                entries.push(RawEntry {
                    id: index as i64,
                    word,
                    definition: into_string(writer, index)?,
                });
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}

/// Rebuild the entry's opening tag and pull out its headword
fn entry_head(
    start: &BytesStart<'_>,
    format: &EntryFormat,
    index: usize,
) -> Result<(String, BytesStart<'static>), DictionaryError> {
    let mut head = BytesStart::new(format.entry_tag.clone());
    let mut title = None;

    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = attr.key.as_ref();

        if key == format.title_attr.as_bytes() {
            let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
            title = Some(value.into_owned());
        } else if key != PRESERVE_ATTR.as_bytes() {
            head.push_attribute(attr);
        }
    }
    head.push_attribute((PRESERVE_ATTR, "preserve"));

    let word = title.ok_or_else(|| DictionaryError::MissingTitle {
        index,
        attr: format.title_attr.clone(),
    })?;

    Ok((word, head))
}

/// Copy events up to the entry's closing tag
fn read_entry(
    reader: &mut Reader<&[u8]>,
    head: BytesStart<'static>,
    index: usize,
) -> Result<String, DictionaryError> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Start(head))?;

    let mut depth = 0usize;
    loop {
        let event = reader.read_event()?;
        let closes_entry = match &event {
            Event::Start(_) => {
                depth += 1;
                false
            }
            Event::End(_) if depth == 0 => true,
            Event::End(_) => {
                depth -= 1;
                false
            }
            Event::Eof => return Err(DictionaryError::UnclosedEntry { index }),
            _ => false,
        };

        writer.write_event(event)?;
        if closes_entry {
            break;
        }
    }

    into_string(writer, index)
}

fn into_string(writer: Writer<Vec<u8>>, index: usize) -> Result<String, DictionaryError> {
    String::from_utf8(writer.into_inner()).map_err(|_| DictionaryError::Encoding { index })
}
