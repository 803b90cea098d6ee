// file: src/parser/html.rs
// description: article html to markdown text conversion with scraper
// reference: https://docs.rs/scraper

use scraper::{ElementRef, Html, Node};

/// Subtrees dropped from the output, including every image carrier.
const SKIPPED_TAGS: &[&str] = &[
    "head", "script", "style", "noscript", "template", "svg", "iframe", "img", "picture", "video",
    "audio", "canvas", "form", "button",
];

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "header", "footer", "main", "aside", "nav", "figure",
    "figcaption", "dl", "dt", "dd", "details", "summary", "address",
];

/// Renders article HTML as Markdown.
///
/// Anchors are unwrapped: their text stays, their target is discarded.
/// Images and embedded media are removed together with any alt text.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlConverter;

impl HtmlConverter {
    pub fn new() -> Self {
        Self
    }

    pub fn convert(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        let mut out = MarkdownWriter::default();
        self.render_children(document.root_element(), &mut out);
        out.finish()
    }

    fn render_fragment(&self, element: ElementRef<'_>) -> String {
        let mut out = MarkdownWriter::default();
        self.render_children(element, &mut out);
        out.finish()
    }

    fn render_children(&self, element: ElementRef<'_>, out: &mut MarkdownWriter) {
        for child in element.children() {
            match child.value() {
                Node::Text(text) => out.push_text(text),
                Node::Element(_) => {
                    if let Some(child_el) = ElementRef::wrap(child) {
                        self.render_element(child_el, out);
                    }
                }
                _ => {}
            }
        }
    }

    fn render_element(&self, element: ElementRef<'_>, out: &mut MarkdownWriter) {
        let tag = element.value().name();
        if SKIPPED_TAGS.contains(&tag) {
            return;
        }

        match tag {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = tag[1..].parse::<usize>().unwrap_or(1);
                let text = self.render_fragment(element).replace('\n', " ");
                if !text.is_empty() {
                    out.block_break();
                    out.push_raw(&format!("{} {}", "#".repeat(level), text));
                    out.block_break();
                }
            }
            "br" => out.line_break(),
            "hr" => {
                out.block_break();
                out.push_raw("---");
                out.block_break();
            }
            "strong" | "b" => self.render_wrapped(element, out, "**"),
            "em" | "i" => self.render_wrapped(element, out, "*"),
            "del" | "s" | "strike" => self.render_wrapped(element, out, "~~"),
            "code" => {
                let code: String = element.text().collect();
                let code = code.trim();
                if !code.is_empty() {
                    out.push_raw(&format!("`{}`", code));
                }
            }
            "pre" => self.render_pre(element, out),
            "ul" => self.render_list(element, out, false),
            "ol" => self.render_list(element, out, true),
            "blockquote" => self.render_blockquote(element, out),
            "table" => self.render_table(element, out),
            _ if BLOCK_TAGS.contains(&tag) => {
                out.block_break();
                self.render_children(element, out);
                out.block_break();
            }
            // "a", "span" and unknown inline tags: keep the text only
            _ => self.render_children(element, out),
        }
    }

    /// Edge whitespace of the element moves outside the markers.
    fn render_wrapped(&self, element: ElementRef<'_>, out: &mut MarkdownWriter, marker: &str) {
        let raw: String = element.text().collect();
        let inner = self.render_fragment(element);

        if raw.starts_with(char::is_whitespace) {
            out.push_text(" ");
        }
        if !inner.is_empty() {
            out.push_raw(&format!("{}{}{}", marker, inner, marker));
            if raw.ends_with(char::is_whitespace) {
                out.push_text(" ");
            }
        }
    }

    fn render_pre(&self, element: ElementRef<'_>, out: &mut MarkdownWriter) {
        let code: String = element.text().collect();
        let code = code.strip_prefix('\n').unwrap_or(&code).trim_end();
        if code.is_empty() {
            return;
        }

        let language = code_language(element).unwrap_or_default();
        out.block_break();
        out.push_raw(&format!("```{}\n{}\n```", language, code));
        out.block_break();
    }

    fn render_list(&self, element: ElementRef<'_>, out: &mut MarkdownWriter, ordered: bool) {
        let items = element
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == "li");

        out.block_break();
        for (index, item) in items.enumerate() {
            let marker = if ordered {
                format!("{}. ", index + 1)
            } else {
                "- ".to_string()
            };
            let pad = " ".repeat(marker.len());
            let body = self.render_fragment(item);

            out.line_break();
            out.push_raw(&marker);
            for (i, line) in body.lines().filter(|l| !l.trim().is_empty()).enumerate() {
                if i > 0 {
                    out.push_raw("\n");
                    out.push_raw(&pad);
                }
                out.push_raw(line);
            }
        }
        out.block_break();
    }

    fn render_blockquote(&self, element: ElementRef<'_>, out: &mut MarkdownWriter) {
        let body = self.render_fragment(element);
        if body.is_empty() {
            return;
        }

        let quoted = body
            .lines()
            .map(|line| {
                if line.is_empty() {
                    ">".to_string()
                } else {
                    format!("> {}", line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        out.block_break();
        out.push_raw(&quoted);
        out.block_break();
    }

    fn render_table(&self, element: ElementRef<'_>, out: &mut MarkdownWriter) {
        let rows: Vec<Vec<String>> = element
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|e| e.value().name() == "tr")
            .map(|row| {
                row.children()
                    .filter_map(ElementRef::wrap)
                    .filter(|cell| matches!(cell.value().name(), "td" | "th"))
                    .map(|cell| {
                        self.render_fragment(cell)
                            .replace('\n', " ")
                            .replace('|', "\\|")
                    })
                    .collect()
            })
            .filter(|cells: &Vec<String>| !cells.is_empty())
            .collect();

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return;
        }

        out.block_break();
        for (index, row) in rows.into_iter().enumerate() {
            let mut cells = row;
            cells.resize(width, String::new());
            out.push_raw(&format!("| {} |\n", cells.join(" | ")));
            if index == 0 {
                out.push_raw(&format!("|{}\n", " --- |".repeat(width)));
            }
        }
        out.block_break();
    }
}

/// `language-rust` / `lang-rust` class on the `pre` or its first `code` child.
fn code_language(pre: ElementRef<'_>) -> Option<String> {
    let code = pre
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "code");

    std::iter::once(pre)
        .chain(code)
        .flat_map(|e| e.value().classes())
        .find_map(|class| {
            class
                .strip_prefix("language-")
                .or_else(|| class.strip_prefix("lang-"))
                .map(str::to_string)
        })
}

#[derive(Default)]
struct MarkdownWriter {
    buf: String,
}

impl MarkdownWriter {
    /// Appends text with HTML whitespace semantics: runs collapse to one space.
    fn push_text(&mut self, text: &str) {
        let mut prev_space = self.buf.is_empty() || self.buf.ends_with(char::is_whitespace);
        for ch in text.chars() {
            if ch.is_whitespace() {
                if !prev_space {
                    self.buf.push(' ');
                    prev_space = true;
                }
            } else {
                self.buf.push(ch);
                prev_space = false;
            }
        }
    }

    fn push_raw(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    fn trim_trailing_spaces(&mut self) {
        let len = self.buf.trim_end_matches(' ').len();
        self.buf.truncate(len);
    }

    fn line_break(&mut self) {
        self.trim_trailing_spaces();
        if !self.buf.is_empty() && !self.buf.ends_with('\n') {
            self.buf.push('\n');
        }
    }

    fn block_break(&mut self) {
        self.trim_trailing_spaces();
        if self.buf.is_empty() || self.buf.ends_with("\n\n") {
            return;
        }
        if self.buf.ends_with('\n') {
            self.buf.push('\n');
        } else {
            self.buf.push_str("\n\n");
        }
    }

    fn finish(self) -> String {
        self.buf.trim().to_string()
    }
}
