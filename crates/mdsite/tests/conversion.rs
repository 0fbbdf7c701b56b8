use mdsite::{
    classify, extract_title, markdown_to_html, markdown_to_html_node, segment, tokenize,
    BlockType, Error, HtmlNode, LeafNode, ParentNode, RenderError, TextKind, TextSpan,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("Just plain text.")]
#[case("numbers 1. and dashes - and hashes # are fine")]
#[case("")]
fn plain_text_is_a_single_plain_span(#[case] text: &str) {
    assert_eq!(tokenize(text).unwrap(), vec![TextSpan::plain(text)]);
}

#[test]
fn links_fill_gaps_without_empty_spans() {
    let spans = tokenize("[a](1)[b](2) then [c](3)").unwrap();
    assert_eq!(
        spans,
        vec![
            TextSpan::link("a", "1"),
            TextSpan::link("b", "2"),
            TextSpan::plain(" then "),
            TextSpan::link("c", "3"),
        ]
    );
    let links = spans.iter().filter(|s| s.kind() == TextKind::Link).count();
    assert_eq!(links, 3);
}

#[rstest]
#[case("`code` `")]
#[case("**bold** **")]
#[case("_one _two_")]
fn odd_delimiter_count_fails(#[case] text: &str) {
    assert!(matches!(tokenize(text), Err(Error::UnclosedDelimiter { .. })));
}

#[test]
fn blank_document_segments_to_one_empty_block() {
    assert_eq!(segment(" \n\t\n  "), vec![String::new()]);
}

#[test]
fn list_classification() {
    assert_eq!(classify("- a\n- b"), BlockType::UnorderedList);
    assert_ne!(classify("-a\n-b"), BlockType::UnorderedList);
    assert_eq!(classify("1. a\n2. b"), BlockType::OrderedList);
    assert_ne!(classify("2. a\n3. b"), BlockType::OrderedList);
    assert_ne!(classify("1. a\n3. b"), BlockType::OrderedList);
}

#[test]
fn title_and_body_end_to_end() {
    let md = "# Title\n\nHello **world**";
    assert_eq!(extract_title(md).unwrap(), "Title");
    assert_eq!(
        markdown_to_html(md).unwrap(),
        "<div><h1>Title</h1><p>Hello <b>world</b></p></div>"
    );
}

#[test]
fn fenced_code_is_not_tokenized() {
    let md = "Intro\n\n```\n**not bold** and _not italic_\n```";
    assert_eq!(
        markdown_to_html(md).unwrap(),
        "<div><p>Intro</p><pre><code>**not bold** and _not italic_\n</code></pre></div>"
    );
}

#[rstest]
#[case("# T\n\n```")]
#[case("# T\n\n```\nnever closed")]
fn unterminated_fence_is_a_paragraph(#[case] md: &str) {
    let blocks = segment(md);
    assert_eq!(classify(&blocks[1]), BlockType::Paragraph);
    // Three backticks in paragraph text leave a code delimiter unclosed.
    assert!(matches!(
        markdown_to_html(md),
        Err(Error::UnclosedDelimiter { ref delimiter, .. }) if delimiter == "`"
    ));
}

#[test]
fn root_is_div_with_one_child_per_block() {
    let node = markdown_to_html_node("# A\n\nB\n\n- c\n\n1. d\n\n> e\n\n```\nf\n```").unwrap();
    assert_eq!(node.tag(), Some("div"));
    let tags: Vec<_> = node.children().iter().map(|c| c.tag()).collect();
    assert_eq!(
        tags,
        vec![
            Some("h1"),
            Some("p"),
            Some("ul"),
            Some("ol"),
            Some("blockquote"),
            Some("pre")
        ]
    );
}

#[test]
fn leaf_rendering_contract() {
    let raw = HtmlNode::from(LeafNode::text("verbatim <text>"));
    assert_eq!(raw.render().unwrap(), "verbatim <text>");

    let img = HtmlNode::from(
        LeafNode::element("img")
            .with_attr("src", "a.png")
            .with_attr("alt", "A"),
    );
    assert_eq!(img.render().unwrap(), "<img src=\"a.png\" alt=\"A\"/>");
}

#[test]
fn childless_parent_is_a_structural_error() {
    let node = HtmlNode::from(ParentNode::new("div", Vec::new()));
    assert!(matches!(node.render(), Err(RenderError::NoChildren { .. })));
}

#[test]
fn full_page_document() {
    let md = "
# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Blog posts

- [Why Glorfindel is More Impressive than Legolas](/blog/glorfindel)
- [Why Tom Bombadil Was a Mistake](/blog/tom)

1. Gandalf
2. Bilbo

```
func main(){
fmt.Println(\"Aiya, Ambar!\")
}
```
";
    assert_eq!(
        markdown_to_html(md).unwrap(),
        concat!(
            "<div>",
            "<h1>Tolkien Fan Club</h1>",
            "<p><img src=\"/images/tolkien.png\" alt=\"JRR Tolkien sitting\"/></p>",
            "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
            "<blockquote>\"I am in fact a Hobbit in all but size.\" -- J.R.R. Tolkien</blockquote>",
            "<h2>Blog posts</h2>",
            "<ul>",
            "<li><a href=\"/blog/glorfindel\">Why Glorfindel is More Impressive than Legolas</a></li>",
            "<li><a href=\"/blog/tom\">Why Tom Bombadil Was a Mistake</a></li>",
            "</ul>",
            "<ol><li>Gandalf</li><li>Bilbo</li></ol>",
            "<pre><code>func main(){\nfmt.Println(\"Aiya, Ambar!\")\n}\n</code></pre>",
            "</div>",
        )
    );
}
