//! Shared quick-xml helpers for the HTML writer.

use std::io::Write;

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

/// Rendered in place of empty paragraphs so spacer rows keep their height.
pub const NBSP: &str = "\u{a0}";

/// Write a simple text element.
pub fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    write_text_element_with(writer, BytesStart::new(name), text)
}

/// Write a text element with pre-built attributes.
pub fn write_text_element_with<W: Write>(
    writer: &mut Writer<W>,
    start: BytesStart<'_>,
    text: &str,
) -> Result<()> {
    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(end))?;
    Ok(())
}

/// Write `<p>text</p>`, substituting a non-breaking space for empty text.
pub fn write_paragraph<W: Write>(writer: &mut Writer<W>, text: &str) -> Result<()> {
    let text = if text.is_empty() { NBSP } else { text };
    write_text_element(writer, "p", text)
}

/// Write `<p><b>caption</b></p>`.
pub fn write_caption<W: Write>(writer: &mut Writer<W>, caption: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("p")))?;
    write_text_element(writer, "b", caption)?;
    writer.write_event(Event::End(BytesEnd::new("p")))?;
    Ok(())
}

pub fn start<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

pub fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Element with a `rowspan` attribute when it covers more than one row.
pub fn spanning(name: &str, class: &str, span_count: usize) -> BytesStart<'static> {
    let mut start = BytesStart::new(name.to_string());
    start.push_attribute(("class", class));
    if span_count > 1 {
        start.push_attribute(("rowspan", span_count.to_string().as_str()));
    }
    start
}
