//! RichTextCodec - the main entry point for document ⇄ HTML conversion.

use richtext_core::{serialize, serialize_plain_text, validate, Node, Options};

#[cfg(feature = "html")]
use crate::html::parse_html;
use crate::node::DomNode;
use crate::Result;

/// Converts documents to HTML and back
#[derive(Debug, Clone, Default)]
pub struct RichTextCodec {
    options: Options,
}

impl RichTextCodec {
    /// Create a new RichTextCodec with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RichTextCodec with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Convert a document to HTML
    pub fn serialize(&self, nodes: &[Node]) -> String {
        serialize(nodes, &self.options)
    }

    /// Convert HTML to a document.
    ///
    /// Never fails: empty input gives the canonical empty document, foreign
    /// markup is read as best it can be.
    #[cfg(feature = "html")]
    pub fn deserialize(&self, html: &str) -> Vec<Node> {
        if html.trim().is_empty() {
            log::debug!("empty input, starting from an empty document");
            return richtext_core::empty_document();
        }
        let dom = parse_html(html);
        self.deserialize_dom(&dom)
    }

    /// Load a persisted value; a missing value behaves like empty input
    #[cfg(feature = "html")]
    pub fn load(&self, stored: Option<&str>) -> Vec<Node> {
        self.deserialize(stored.unwrap_or_default())
    }

    /// Convert a DOM tree produced by any parser to a document
    pub fn deserialize_dom(&self, dom: &DomNode) -> Vec<Node> {
        let nodes = crate::convert::convert(dom);
        log::trace!("deserialized {} top-level nodes", nodes.len());
        nodes
    }

    /// Plain text of a document, one top-level node per line
    pub fn plain_text(&self, nodes: &[Node]) -> String {
        serialize_plain_text(nodes)
    }

    /// Encode a document in the editing framework's JSON value format
    pub fn to_json(&self, nodes: &[Node]) -> Result<String> {
        Ok(serde_json::to_string(nodes)?)
    }

    /// Decode and validate a document from the editing framework's JSON value format
    pub fn from_json(&self, json: &str) -> Result<Vec<Node>> {
        let nodes: Vec<Node> = serde_json::from_str(json)?;
        validate(&nodes)?;
        Ok(nodes)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

#[cfg(all(test, feature = "html"))]
mod tests {
    use super::*;
    use crate::RichTextError;
    use richtext_core::{
        empty_document, Align, AlignStyle, Element, ElementKind, Mark, ModelError, Text,
    };

    fn round_trip(nodes: &[Node]) -> Vec<Node> {
        let codec = RichTextCodec::new();
        codec.deserialize(&codec.serialize(nodes))
    }

    fn sample_document() -> Vec<Node> {
        vec![
            Node::Element(
                Element::heading_one(vec![Node::text("Rich text")]).with_align(Align::Center),
            ),
            Node::Element(Element::heading_two(vec![Node::Text(
                Text::new("Subtitle").with(Mark::Italic),
            )])),
            Node::Element(Element::paragraph(vec![
                Node::text("This is "),
                Node::Text(Text::new("editable").with(Mark::Bold)),
                Node::text(" rich text, with a "),
                Node::Element(Element::link(
                    "https://example.com/?q=a&b",
                    vec![Node::Text(Text::new("link").with(Mark::Underline))],
                )),
                Node::text(", a "),
                Node::Element(Element::button(vec![Node::text("Edit me!")])),
                Node::text(" and a "),
                Node::Element(Element::badge(vec![Node::text("badge")])),
                Node::text("."),
            ])),
            Node::Element(
                Element::block_quote(vec![Node::text("A wise quote.")])
                    .with_align(Align::Justify),
            ),
            Node::Element(Element::bulleted_list(vec![
                Node::Element(Element::list_item(vec![Node::text("one")])),
                Node::Element(
                    Element::list_item(vec![Node::Text(Text::new("two").with(Mark::Code))])
                        .with_align(Align::Right),
                ),
            ])),
            Node::Element(Element::numbered_list(vec![Node::Element(
                Element::list_item(vec![
                    Node::text("nested"),
                    Node::Element(Element::bulleted_list(vec![Node::Element(
                        Element::list_item(vec![Node::text("inner")]),
                    )])),
                ]),
            )])),
            Node::Element(Element::image("https://x/y.png")),
            Node::Element(Element::new(
                ElementKind::HeadingSix,
                vec![Node::text("small")],
            )),
            Node::Element(
                Element::paragraph(vec![Node::text("Try it out for yourself!")])
                    .with_align(Align::Left),
            ),
        ]
    }

    #[test]
    fn test_round_trip_every_kind() {
        let doc = sample_document();
        assert!(validate(&doc).is_ok());
        assert_eq!(round_trip(&doc), doc);
    }

    #[test]
    fn test_round_trip_is_stable() {
        let codec = RichTextCodec::new();
        let html = codec.serialize(&sample_document());
        let again = codec.serialize(&codec.deserialize(&html));
        assert_eq!(html, again);
    }

    #[test]
    fn test_bold_scenario() {
        let codec = RichTextCodec::new();
        let doc = vec![Node::Element(Element::paragraph(vec![Node::Text(
            Text::new("Hi").with(Mark::Bold),
        )]))];

        let html = codec.serialize(&doc);
        assert!(html.contains("<strong><span data-slate-string=\"true\">Hi</span></strong>"));

        let parsed = codec.deserialize(&html);
        let paragraph = parsed[0].as_element().unwrap();
        assert_eq!(paragraph.kind, ElementKind::Paragraph);
        assert_eq!(paragraph.align, None);
        assert_eq!(
            paragraph.children,
            vec![Node::Text(Text {
                text: "Hi".to_string(),
                bold: true,
                italic: false,
                underline: false,
                code: false,
            })]
        );
    }

    #[test]
    fn test_image_scenario() {
        let codec = RichTextCodec::new();
        let html = codec.serialize(&[Node::Element(Element::image("https://x/y.png"))]);
        assert!(html.starts_with("<img "));
        assert!(html.contains("src=\"https://x/y.png\""));
        assert!(!html.contains("</img>"));
        assert!(!html.contains("data-slate-node=\"text\""));

        let parsed = codec.deserialize(&html);
        let image = parsed[0].as_element().unwrap();
        assert_eq!(image.kind, ElementKind::Image);
        assert_eq!(image.url.as_deref(), Some("https://x/y.png"));
        assert_eq!(image.children, vec![Node::Text(Text::empty())]);
    }

    #[test]
    fn test_every_mark_combination() {
        for bits in 0u8..16 {
            let mut text = Text::new("run");
            for (i, mark) in Mark::ALL.into_iter().enumerate() {
                text.set(mark, bits & (1 << i) != 0);
            }
            let doc = vec![Node::Element(Element::paragraph(vec![Node::Text(
                text.clone(),
            )]))];

            let parsed = round_trip(&doc);
            let leaf = parsed[0].as_element().unwrap().children[0].as_text().unwrap();
            assert_eq!(leaf, &text, "marks {:04b} did not survive", bits);
        }
    }

    #[test]
    fn test_escaping_round_trip() {
        let codec = RichTextCodec::new();
        let nasty = r#"<script>alert("x & 'y'")</script> 1 < 2 > 0"#;
        let doc = vec![Node::Element(Element::paragraph(vec![Node::text(nasty)]))];

        let html = codec.serialize(&doc);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("\"x"));
        assert!(!html.contains("'y'"));
        assert!(!html.contains("1 < 2"));

        assert_eq!(codec.deserialize(&html), doc);
    }

    #[test]
    fn test_whitespace_preserved() {
        let doc = vec![Node::Element(Element::paragraph(vec![
            Node::text("  two  spaces "),
            Node::text(""),
            Node::text("tab\there"),
        ]))];
        assert_eq!(round_trip(&doc), doc);
    }

    #[test]
    fn test_unknown_kind_falls_back() {
        let codec = RichTextCodec::new();
        let doc = vec![Node::Element(Element::new(
            ElementKind::from("custom-unrecognized"),
            vec![Node::text("still here")],
        ))];

        let html = codec.serialize(&doc);
        assert!(html.starts_with("<p data-slate-node=\"element\">"));

        let parsed = codec.deserialize(&html);
        assert_eq!(
            parsed,
            vec![Node::Element(Element::paragraph(vec![Node::text("still here")]))]
        );
    }

    #[test]
    fn test_empty_input() {
        let codec = RichTextCodec::new();
        assert_eq!(codec.deserialize(""), empty_document());
        assert_eq!(codec.deserialize("  \n "), empty_document());
        assert_eq!(codec.load(None), empty_document());
        assert_eq!(codec.load(Some("")), empty_document());
    }

    #[test]
    fn test_text_only_input() {
        let codec = RichTextCodec::new();
        assert_eq!(codec.deserialize("just words"), empty_document());
    }

    #[test]
    fn test_malformed_input() {
        let codec = RichTextCodec::new();
        let doc = codec.deserialize(r#"<p data-slate-node="element"><span data-slate-node="text">open"#);
        assert_eq!(
            doc,
            vec![Node::Element(Element::paragraph(vec![Node::text("open")]))]
        );
    }

    #[test]
    fn test_foreign_html() {
        let codec = RichTextCodec::new();
        let doc = codec.deserialize("<div><b>Hello</b> <i>World</i></div><p>second</p>");
        assert_eq!(
            doc,
            vec![Node::Element(Element::paragraph(vec![
                Node::text("Hello World"),
                Node::text("second"),
            ]))]
        );
    }

    #[test]
    fn test_legacy_align_style() {
        let codec = RichTextCodec::new();
        let html = concat!(
            r#"<ul data-slate-node="element" style="text-align: ;">"#,
            r#"<li data-slate-node="element" style="text-align: center;">"#,
            r#"<span data-slate-node="text"><span data-slate-string="true">x</span></span>"#,
            "</li></ul>",
        );
        let doc = codec.deserialize(html);
        let list = doc[0].as_element().unwrap();
        assert_eq!(list.align, None);
        assert_eq!(list.children[0].as_element().unwrap().align, Some(Align::Center));
    }

    #[test]
    fn test_always_align_style_round_trips() {
        let mut codec = RichTextCodec::new();
        codec.options_mut().align_style = AlignStyle::Always;
        let doc = sample_document();
        let html = codec.serialize(&doc);
        assert!(html.contains("style=\"text-align: ;\""));
        assert_eq!(codec.deserialize(&html), doc);
    }

    #[test]
    fn test_without_string_wrapper_round_trips() {
        let options = Options {
            string_wrapper: false,
            ..Default::default()
        };
        let codec = RichTextCodec::with_options(options);
        let doc = sample_document();
        let html = codec.serialize(&doc);
        assert!(!html.contains("data-slate-string"));
        assert_eq!(codec.deserialize(&html), doc);
    }

    #[test]
    fn test_plain_text() {
        let codec = RichTextCodec::new();
        let doc = codec.deserialize(concat!(
            r#"<h1 data-slate-node="element"><span data-slate-node="text">Title</span></h1>"#,
            r#"<p data-slate-node="element"><span data-slate-node="text">Body</span></p>"#,
        ));
        assert_eq!(codec.plain_text(&doc), "Title\nBody");
    }

    #[test]
    fn test_json_round_trip() {
        let codec = RichTextCodec::new();
        let doc = sample_document();
        let json = codec.to_json(&doc).unwrap();
        assert_eq!(codec.from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_from_json_framework_value() {
        let codec = RichTextCodec::new();
        let json = r#"[
            {"type": "paragraph", "children": [
                {"text": "This is editable "},
                {"text": "rich", "bold": true},
                {"text": " text, "},
                {"text": "much", "italic": true},
                {"text": " better than a "},
                {"text": "<textarea>", "code": true},
                {"text": "!"}
            ]},
            {"type": "block-quote", "align": "", "children": [{"text": "A wise quote."}]},
            {"type": "paragraph", "align": "center", "children": [{"text": "Try it out for yourself!"}]}
        ]"#;

        let doc = codec.from_json(json).unwrap();
        assert_eq!(doc.len(), 3);
        assert_eq!(doc[1].as_element().unwrap().align, None);
        assert_eq!(doc[2].as_element().unwrap().align, Some(Align::Center));
        assert_eq!(round_trip(&doc), doc);
    }

    #[test]
    fn test_from_json_rejects_invalid_tree() {
        let codec = RichTextCodec::new();

        let err = codec.from_json(r#"[{"text": "loose"}]"#).unwrap_err();
        assert!(matches!(
            err,
            RichTextError::InvalidDocument(ModelError::TextAtRoot(0))
        ));

        let err = codec.from_json("not json").unwrap_err();
        assert!(matches!(err, RichTextError::Json(_)));
    }

    #[test]
    fn test_deeply_nested_input() {
        let codec = RichTextCodec::new();
        let html = format!("{}x{}", "<div>".repeat(5000), "</div>".repeat(5000));
        assert_eq!(
            codec.deserialize(&html),
            vec![Node::Element(Element::paragraph(vec![Node::text("x")]))]
        );
    }

    #[test]
    fn test_head_content_ignored() {
        let codec = RichTextCodec::new();
        let doc = codec.deserialize(
            "<head><style>p { color: red }</style><title>Doc</title></head><p>x</p>",
        );
        assert_eq!(
            doc,
            vec![Node::Element(Element::paragraph(vec![Node::text("x")]))]
        );
    }

    #[test]
    fn test_nul_becomes_replacement_character() {
        let codec = RichTextCodec::new();
        let doc = vec![Node::Element(Element::paragraph(vec![Node::text("a\0b")]))];
        assert_eq!(
            codec.deserialize(&codec.serialize(&doc)),
            vec![Node::Element(Element::paragraph(vec![Node::text("a\u{FFFD}b")]))]
        );
    }
}
