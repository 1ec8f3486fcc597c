//! Readable-content extraction for read-aloud.
//!
//! Walks the page HTML and collects, in document order, the text of paragraphs,
//! list items, headings, quotes and table cells. The widget panel and anything
//! marked screen-reader-only are skipped. Only the outermost readable element
//! produces a block, so nested readable elements are never read twice.

/// Elements whose text is read aloud.
const READABLE_TAGS: [&str; 11] = [
    "p", "li", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "td", "th",
];

/// Elements whose content is never text.
const RAW_TEXT_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

const VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Classes that hide an element from sighted users only.
const SCREEN_READER_ONLY_CLASSES: [&str; 3] = ["sr-only", "visually-hidden", "screen-reader-only"];

/// Attribute that marks widget-owned markup regardless of id.
pub const WIDGET_MARKER_ATTRIBUTE: &str = "data-accessibility-widget";

/// Trait defining content extraction operations.
pub trait ContentExtractorTrait {
    fn readable_blocks(&self, html: &str) -> Vec<String>;
    fn readable_text(&self, html: &str) -> String;
}

/// Heuristic HTML walker; tolerant of unclosed and mismatched tags.
pub struct ContentExtractor {
    panel_id: String,
}

struct OpenElement {
    name: String,
    excluded: bool,
    /// This element owns the block currently being collected.
    block_owner: bool,
}

struct Tag {
    name: String,
    closing: bool,
    self_closing: bool,
    id: Option<String>,
    classes: Vec<String>,
    widget_marker: bool,
}

impl Tag {
    /// Parses the source between `<` and `>`. Returns `None` for doctype and
    /// processing instructions.
    fn parse(src: &str) -> Option<Tag> {
        let src = src.trim();
        if src.starts_with('!') || src.starts_with('?') {
            return None;
        }
        let (closing, body) = match src.strip_prefix('/') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, src),
        };
        let self_closing = body.ends_with('/');
        let body = body.trim_end_matches('/');

        let name_end = body
            .find(|c: char| c.is_whitespace())
            .unwrap_or(body.len());
        let name = body[..name_end].to_ascii_lowercase();
        if name.is_empty() {
            return None;
        }

        let mut tag = Tag {
            name,
            closing,
            self_closing,
            id: None,
            classes: Vec::new(),
            widget_marker: false,
        };
        for (attr, value) in parse_attributes(&body[name_end..]) {
            match attr.as_str() {
                "id" => tag.id = Some(value),
                "class" => tag.classes = value.split_whitespace().map(str::to_string).collect(),
                WIDGET_MARKER_ATTRIBUTE => tag.widget_marker = true,
                _ => {}
            }
        }
        Some(tag)
    }
}

fn parse_attributes(src: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if c.is_whitespace() || c == '=' {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        let name = src[start..end].to_ascii_lowercase();

        while matches!(chars.peek(), Some(&(_, c)) if c.is_whitespace()) {
            chars.next();
        }
        let mut value = String::new();
        if matches!(chars.peek(), Some(&(_, '='))) {
            chars.next();
            while matches!(chars.peek(), Some(&(_, c)) if c.is_whitespace()) {
                chars.next();
            }
            match chars.peek() {
                Some(&(_, quote)) if quote == '"' || quote == '\'' => {
                    chars.next();
                    for (_, c) in chars.by_ref() {
                        if c == quote {
                            break;
                        }
                        value.push(c);
                    }
                }
                _ => {
                    while let Some(&(_, c)) = chars.peek() {
                        if c.is_whitespace() {
                            break;
                        }
                        value.push(c);
                        chars.next();
                    }
                }
            }
        }
        if !name.is_empty() {
            attrs.push((name, decode_entities(&value)));
        }
    }
    attrs
}

/// Decodes the common named entities and numeric character references.
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest[1..]
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&rest[1..=semi]).map(|c| (c, semi + 2)));
        match decoded {
            Some((c, consumed)) => {
                out.push(c);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let num = entity.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl ContentExtractor {
    pub fn new(panel_id: &str) -> Self {
        Self {
            panel_id: panel_id.to_string(),
        }
    }

    fn is_excluded(&self, tag: &Tag) -> bool {
        tag.widget_marker
            || tag.id.as_deref() == Some(self.panel_id.as_str())
            || tag
                .classes
                .iter()
                .any(|c| SCREEN_READER_ONLY_CLASSES.contains(&c.as_str()))
    }

    fn finish_block(current: &mut String, blocks: &mut Vec<String>) {
        let block = normalize_whitespace(current);
        if !block.is_empty() {
            blocks.push(block);
        }
        current.clear();
    }
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new("accessibility-widget")
    }
}

impl ContentExtractorTrait for ContentExtractor {
    fn readable_blocks(&self, html: &str) -> Vec<String> {
        let mut blocks = Vec::new();
        let mut stack: Vec<OpenElement> = Vec::new();
        let mut current = String::new();
        let mut rest = html;

        loop {
            let Some(lt) = rest.find('<') else {
                break;
            };
            let text = &rest[..lt];
            let in_block = stack.iter().any(|e| e.block_owner);
            let excluded = stack.last().is_some_and(|e| e.excluded);
            if in_block && !excluded {
                current.push_str(&decode_entities(text));
            }
            rest = &rest[lt..];

            if rest.starts_with("<!--") {
                rest = rest.find("-->").map_or("", |end| &rest[end + 3..]);
                continue;
            }
            let Some(gt) = rest.find('>') else {
                rest = "";
                break;
            };
            let tag = Tag::parse(&rest[1..gt]);
            rest = &rest[gt + 1..];
            let Some(tag) = tag else {
                continue;
            };

            if tag.closing {
                let Some(pos) = stack.iter().rposition(|e| e.name == tag.name) else {
                    continue;
                };
                let closed = stack.split_off(pos);
                if closed.iter().any(|e| e.block_owner) {
                    Self::finish_block(&mut current, &mut blocks);
                } else if READABLE_TAGS.contains(&tag.name.as_str()) {
                    current.push(' ');
                }
                continue;
            }

            if RAW_TEXT_TAGS.contains(&tag.name.as_str()) {
                if !tag.self_closing {
                    let close = format!("</{}", tag.name);
                    rest = match rest.to_ascii_lowercase().find(&close) {
                        Some(end) => {
                            let after = &rest[end..];
                            after.find('>').map_or("", |gt| &after[gt + 1..])
                        }
                        None => "",
                    };
                }
                continue;
            }

            let in_block = stack.iter().any(|e| e.block_owner);
            let readable = READABLE_TAGS.contains(&tag.name.as_str());
            if tag.name == "br" || (readable && in_block) {
                current.push(' ');
            }
            if tag.self_closing || VOID_TAGS.contains(&tag.name.as_str()) {
                continue;
            }

            let excluded = stack.last().is_some_and(|e| e.excluded) || self.is_excluded(&tag);
            stack.push(OpenElement {
                block_owner: readable && !in_block && !excluded,
                excluded,
                name: tag.name,
            });
        }

        if stack.iter().any(|e| e.block_owner) {
            let excluded = stack.last().is_some_and(|e| e.excluded);
            if !excluded {
                current.push_str(&decode_entities(rest));
            }
            Self::finish_block(&mut current, &mut blocks);
        }
        blocks
    }

    /// Readable blocks joined with single spaces.
    fn readable_text(&self, html: &str) -> String {
        self.readable_blocks(html).join(" ")
    }
}
