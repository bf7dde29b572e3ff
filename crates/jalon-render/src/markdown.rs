//! Markdown to block tree conversion.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

use jalon_core::session::{ConversationMessage, MessageRole};

/// Inline content inside a paragraph, heading or list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    /// Literal text.
    Text(String),
    /// Bold span.
    Strong(Vec<Inline>),
    /// Italic span.
    Emphasis(Vec<Inline>),
    /// Inline code span.
    Code(String),
}

/// Block-level content of a rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(Vec<Inline>),
    Heading { level: u8, content: Vec<Inline> },
    List { ordered: bool, items: Vec<Vec<Block>> },
    CodeBlock { language: Option<String>, code: String },
}

/// Display form of one transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderedContent {
    /// Literal text, shown as-is.
    Plain(String),
    /// Parsed markdown tree.
    Rich(Vec<Block>),
}

/// Renders a transcript entry for display.
///
/// Assistant turns are parsed as markdown; user turns stay literal.
pub fn rendered_content(message: &ConversationMessage) -> RenderedContent {
    match message.role {
        MessageRole::User => RenderedContent::Plain(message.content.clone()),
        MessageRole::Assistant => RenderedContent::Rich(render_markdown(&message.content)),
    }
}

/// Parses markdown into the block tree.
///
/// Constructs outside the schema (links, block quotes, images) degrade to
/// their text content; raw HTML is dropped entirely. The output never
/// carries unescaped markup.
pub fn render_markdown(input: &str) -> Vec<Block> {
    let mut builder = TreeBuilder::default();

    for event in Parser::new(input) {
        builder.handle(event);
    }

    builder.finish()
}

struct ListFrame {
    ordered: bool,
    items: Vec<Vec<Block>>,
}

/// Incremental tree construction over the parser's event stream.
///
/// Block containers (list items) and inline containers (paragraphs,
/// headings, bold/italic spans) each form a stack; completed nodes are
/// attached to the innermost open frame, or to the root when none is
/// open.
#[derive(Default)]
struct TreeBuilder {
    root: Vec<Block>,
    item_frames: Vec<Vec<Block>>,
    list_frames: Vec<ListFrame>,
    inline_frames: Vec<Vec<Inline>>,
    code: Option<(Option<String>, String)>,
}

impl TreeBuilder {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if let Some((_, code)) = self.code.as_mut() {
                    code.push_str(&text);
                } else {
                    self.push_inline(Inline::Text(text.to_string()));
                }
            }
            Event::Code(code) => self.push_inline(Inline::Code(code.to_string())),
            Event::SoftBreak => self.push_inline(Inline::Text(" ".to_string())),
            Event::HardBreak => self.push_inline(Inline::Text("\n".to_string())),
            // Raw markup never reaches the output tree.
            Event::Html(_) | Event::InlineHtml(_) => {}
            Event::Rule
            | Event::FootnoteReference(_)
            | Event::TaskListMarker(_)
            | Event::DisplayMath(_)
            | Event::InlineMath(_) => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph | Tag::Heading { .. } => self.inline_frames.push(Vec::new()),
            Tag::Strong | Tag::Emphasis => self.inline_frames.push(Vec::new()),
            Tag::List(start) => self.list_frames.push(ListFrame {
                ordered: start.is_some(),
                items: Vec::new(),
            }),
            Tag::Item => {
                self.item_frames.push(Vec::new());
                // Tight list items carry their text without a paragraph
                // wrapper; collect it in a frame of its own.
                self.inline_frames.push(Vec::new());
            }
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .filter(|token| !token.is_empty())
                        .map(|token| token.to_string()),
                    CodeBlockKind::Indented => None,
                };
                self.code = Some((language, String::new()));
            }
            // Everything else degrades to its text content.
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                let inlines = self.inline_frames.pop().unwrap_or_default();
                self.push_block(Block::Paragraph(inlines));
            }
            TagEnd::Heading(level) => {
                let inlines = self.inline_frames.pop().unwrap_or_default();
                self.push_block(Block::Heading {
                    level: heading_level(level),
                    content: inlines,
                });
            }
            TagEnd::Strong => {
                let inlines = self.inline_frames.pop().unwrap_or_default();
                self.push_inline(Inline::Strong(inlines));
            }
            TagEnd::Emphasis => {
                let inlines = self.inline_frames.pop().unwrap_or_default();
                self.push_inline(Inline::Emphasis(inlines));
            }
            TagEnd::Item => {
                let inlines = self.inline_frames.pop().unwrap_or_default();
                let mut blocks = self.item_frames.pop().unwrap_or_default();
                if !inlines.is_empty() {
                    blocks.insert(0, Block::Paragraph(inlines));
                }
                match self.list_frames.last_mut() {
                    Some(list) => list.items.push(blocks),
                    // An item without an open list cannot come out of the
                    // parser; keep the content rather than lose it.
                    None => self.root.extend(blocks),
                }
            }
            TagEnd::List(_) => {
                if let Some(frame) = self.list_frames.pop() {
                    self.push_block(Block::List {
                        ordered: frame.ordered,
                        items: frame.items,
                    });
                }
            }
            TagEnd::CodeBlock => {
                if let Some((language, code)) = self.code.take() {
                    self.push_block(Block::CodeBlock { language, code });
                }
            }
            _ => {}
        }
    }

    fn push_block(&mut self, block: Block) {
        match self.item_frames.last_mut() {
            Some(frame) => frame.push(block),
            None => self.root.push(block),
        }
    }

    fn push_inline(&mut self, inline: Inline) {
        match self.inline_frames.last_mut() {
            Some(frame) => frame.push(inline),
            // Stray text outside any container becomes its own paragraph.
            None => self.push_block(Block::Paragraph(vec![inline])),
        }
    }

    fn finish(self) -> Vec<Block> {
        self.root
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    #[test]
    fn test_bold_span_in_paragraph() {
        let blocks = render_markdown("Bonjour **Math Conquest** !");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![
                text("Bonjour "),
                Inline::Strong(vec![text("Math Conquest")]),
                text(" !"),
            ])]
        );
    }

    #[test]
    fn test_bullet_list_after_paragraph() {
        let blocks = render_markdown(
            "Voici les tâches de **Verbeck** (Backend) pour le Sprint 1 :\n\
             * Setup FastAPI\n\
             * Implémentation Auth JWT",
        );

        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], Block::Paragraph(_)));
        match &blocks[1] {
            Block::List { ordered, items } => {
                assert!(!ordered);
                assert_eq!(items.len(), 2);
                assert_eq!(
                    items[0],
                    vec![Block::Paragraph(vec![text("Setup FastAPI")])]
                );
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_ordered_list() {
        let blocks = render_markdown("1. un\n2. deux");
        match &blocks[0] {
            Block::List { ordered, items } => {
                assert!(ordered);
                assert_eq!(items.len(), 2);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_fenced_code_block_keeps_language() {
        let blocks = render_markdown("```python\nprint(1)\n```");
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                language: Some("python".to_string()),
                code: "print(1)\n".to_string(),
            }]
        );
    }

    #[test]
    fn test_inline_code_span() {
        let blocks = render_markdown("Lancez `cargo test` ensuite.");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![
                text("Lancez "),
                Inline::Code("cargo test".to_string()),
                text(" ensuite."),
            ])]
        );
    }

    #[test]
    fn test_heading_level() {
        let blocks = render_markdown("## Planning");
        assert_eq!(
            blocks,
            vec![Block::Heading {
                level: 2,
                content: vec![text("Planning")],
            }]
        );
    }

    #[test]
    fn test_raw_html_is_dropped() {
        let blocks = render_markdown("avant\n\n<div onclick=\"x()\">injecté</div>\n\naprès");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(vec![text("avant")]),
                Block::Paragraph(vec![text("après")]),
            ]
        );
    }

    #[test]
    fn test_link_degrades_to_text() {
        let blocks = render_markdown("voir [la doc](https://example.com) ici");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![
                text("voir "),
                text("la doc"),
                text(" ici"),
            ])]
        );
    }

    #[test]
    fn test_user_message_stays_literal() {
        let message = ConversationMessage::now(MessageRole::User, "pas de **gras** ici");
        assert_eq!(
            rendered_content(&message),
            RenderedContent::Plain("pas de **gras** ici".to_string())
        );
    }

    #[test]
    fn test_assistant_message_is_parsed() {
        let message = ConversationMessage::now(MessageRole::Assistant, "du **gras**");
        let RenderedContent::Rich(blocks) = rendered_content(&message) else {
            panic!("expected rich content");
        };
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![
                text("du "),
                Inline::Strong(vec![text("gras")]),
            ])]
        );
    }
}
