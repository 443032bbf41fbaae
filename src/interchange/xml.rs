//! XML payload codec.
//!
//! Converts between the `Data.xml` payload and a [`Tree`]. Parsing resolves
//! XML's repeated-element syntax: a name seen once under a parent becomes a
//! single node, a repeated name becomes a [`Node::List`].
//!
//! Whitespace policy:
//! - whitespace-only text between child elements is indentation and dropped
//! - text of a leaf element is kept verbatim, never trimmed
//! - `<a/>` and a leaf holding only indentation parse as [`Node::Null`],
//!   `<a></a>` parses as an empty [`Node::Text`]
//!
//! Rendering writes whitespace-only strings as character references so that
//! every string the model emits parses back to the identical string.

use std::io::Cursor;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::InterchangeError;
use super::tree::{ATTRIBUTE_PREFIX, Node, TEXT_KEY, Tree};

/// Indentation width of rendered documents.
pub const INDENT: usize = 4;

// ============================================================================
// READER
// ============================================================================

/// Parse an XML payload into a tree holding exactly one key, the root element.
pub fn parse(input: &[u8]) -> Result<Tree, InterchangeError> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();

    let mut stack: Vec<Frame> = Vec::new();
    let mut document = Tree::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(Frame::open(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let frame = Frame::open(e)?;
                close(frame, true, &mut stack, &mut document)?;
            }
            Ok(Event::End(_)) => {
                let frame = stack
                    .pop()
                    .ok_or_else(|| InterchangeError::xml("Unbalanced closing tag"))?;
                close(frame, false, &mut stack, &mut document)?;
            }
            Ok(Event::Text(ref e)) => {
                let significant = e.iter().any(|b| !b.is_ascii_whitespace());
                let text = e
                    .unescape()
                    .map_err(|err| InterchangeError::xml(format!("Invalid text: {err}")))?;
                match stack.last_mut() {
                    Some(frame) => frame.push_text(&text, significant),
                    None if significant => {
                        return Err(InterchangeError::xml("Text outside of the root element"));
                    }
                    None => {}
                }
            }
            Ok(Event::CData(ref e)) => {
                let text = std::str::from_utf8(e)
                    .map_err(|err| InterchangeError::xml(format!("Invalid CDATA: {err}")))?;
                if let Some(frame) = stack.last_mut() {
                    frame.push_text(text, true);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(InterchangeError::xml(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    if let Some(frame) = stack.last() {
        return Err(InterchangeError::xml(format!(
            "Unclosed element `{}`",
            frame.name
        )));
    }
    if document.is_empty() {
        return Err(InterchangeError::xml("Document has no root element"));
    }

    tracing::trace!(root = ?document.keys().next(), "parsed XML payload");
    Ok(document)
}

/// An element whose closing tag has not been seen yet.
struct Frame {
    name: String,
    attributes: Tree,
    children: Tree,
    text: String,
    significant: bool,
}

impl Frame {
    fn open(e: &BytesStart<'_>) -> Result<Self, InterchangeError> {
        let name = std::str::from_utf8(e.name().as_ref())
            .map_err(|err| InterchangeError::xml(format!("Invalid tag name: {err}")))?
            .to_string();

        let mut attributes = Tree::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| {
                InterchangeError::xml(format!("Invalid attribute on `{name}`: {err}"))
            })?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|err| InterchangeError::xml(format!("Invalid attribute name: {err}")))?;
            let value = attr
                .unescape_value()
                .map_err(|err| InterchangeError::xml(format!("Invalid attribute value: {err}")))?;
            attributes.insert(format!("{ATTRIBUTE_PREFIX}{key}"), value.into_owned());
        }

        Ok(Self {
            name,
            attributes,
            children: Tree::new(),
            text: String::new(),
            significant: false,
        })
    }

    fn push_text(&mut self, text: &str, significant: bool) {
        self.text.push_str(text);
        self.significant |= significant;
    }

    fn finish(self, self_closing: bool) -> (String, Node) {
        let Self {
            name,
            attributes,
            children,
            text,
            significant,
        } = self;

        if attributes.is_empty() && children.is_empty() {
            let node = if self_closing {
                Node::Null
            } else if text.is_empty() {
                Node::Text(String::new())
            } else if significant {
                Node::Text(text)
            } else {
                Node::Null
            };
            return (name, node);
        }

        // mixed content: text around child elements carries indentation
        let text = if children.is_empty() {
            text
        } else {
            text.trim().to_string()
        };
        let mut map: Tree = attributes.into_iter().chain(children).collect();
        if significant {
            map.insert(TEXT_KEY, text);
        }
        (name, Node::Map(map))
    }
}

fn close(
    frame: Frame,
    self_closing: bool,
    stack: &mut [Frame],
    document: &mut Tree,
) -> Result<(), InterchangeError> {
    let (name, node) = frame.finish(self_closing);
    match stack.last_mut() {
        Some(parent) => parent.children.append(name, node),
        None if document.is_empty() => {
            document.insert(name, node);
        }
        None => {
            return Err(InterchangeError::xml(format!(
                "Multiple root elements (found `{name}`)"
            )));
        }
    }
    Ok(())
}

// ============================================================================
// WRITER
// ============================================================================

/// Render a tree holding exactly one key (the root element) to XML bytes.
pub fn render(tree: &Tree) -> Result<Vec<u8>, InterchangeError> {
    if tree.len() != 1 {
        return Err(InterchangeError::xml(format!(
            "Expected a single root element, found {}",
            tree.len()
        )));
    }

    match tree.iter().next() {
        Some((name, node)) => render_root(name, node),
        None => Err(InterchangeError::xml("Document has no root element")),
    }
}

/// Render a document whose root element is `name` with content `node`.
pub fn render_root(name: &str, node: &Node) -> Result<Vec<u8>, InterchangeError> {
    if matches!(node, Node::List(_)) {
        return Err(InterchangeError::xml(format!(
            "Root element `{name}` cannot be a list"
        )));
    }

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', INDENT);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), Some("yes"))))
        .map_err(|e| InterchangeError::xml(format!("Write error: {e}")))?;

    write_node(&mut writer, name, node)?;

    let mut output = writer.into_inner().into_inner();
    output.push(b'\n');
    Ok(output)
}

fn write_node<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    node: &Node,
) -> Result<(), InterchangeError> {
    match node {
        Node::Null => write(writer, Event::Empty(BytesStart::new(name))),
        Node::Text(text) => {
            write(writer, Event::Start(BytesStart::new(name)))?;
            write_text(writer, text)?;
            write(writer, Event::End(BytesEnd::new(name)))
        }
        Node::Map(tree) => write_element(writer, name, tree),
        Node::List(items) => {
            for item in items {
                if matches!(item, Node::List(_)) {
                    return Err(InterchangeError::xml(format!(
                        "Nested list under `{name}` cannot be rendered"
                    )));
                }
                write_node(writer, name, item)?;
            }
            Ok(())
        }
    }
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    tree: &Tree,
) -> Result<(), InterchangeError> {
    let mut start = BytesStart::new(name);
    let mut text: Option<&str> = None;
    let mut children = Vec::new();

    for (key, node) in tree.iter() {
        if let Some(attr) = key.strip_prefix(ATTRIBUTE_PREFIX) {
            match node {
                Node::Text(value) => start.push_attribute((attr, value.as_str())),
                Node::Null => start.push_attribute((attr, "")),
                other => {
                    return Err(InterchangeError::xml(format!(
                        "Attribute `{attr}` of `{name}` must be text, found {}",
                        other.kind()
                    )));
                }
            }
        } else if key == TEXT_KEY {
            text = node.as_text();
        } else {
            children.push((key, node));
        }
    }

    let has_content = text.is_some_and(|t| !t.is_empty())
        || children
            .iter()
            .any(|(_, node)| !matches!(node, Node::List(items) if items.is_empty()));

    if !has_content {
        return write(writer, Event::Empty(start));
    }

    write(writer, Event::Start(start))?;
    if let Some(text) = text {
        write_text(writer, text)?;
    }
    for (key, node) in children {
        write_node(writer, key, node)?;
    }
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write_text<W: std::io::Write>(writer: &mut Writer<W>, text: &str) -> Result<(), InterchangeError> {
    let event = if !text.is_empty() && text.chars().all(char::is_whitespace) {
        let escaped: String = text.chars().map(|c| format!("&#{};", c as u32)).collect();
        BytesText::from_escaped(escaped)
    } else {
        BytesText::new(text)
    };
    write(writer, Event::Text(event))
}

fn write<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), InterchangeError> {
    writer
        .write_event(event)
        .map_err(|e| InterchangeError::xml(format!("Write error: {e}")))
}
