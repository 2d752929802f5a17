use crate::{ParseConfig, native::is_element};
use alloc::rc::Rc;
use core::cell::RefCell;
use html5ever::{
    ParseOpts, QualName, local_name, ns, parse_fragment as parse_html_fragment,
    tendril::{StrTendril, TendrilSink},
    tree_builder::TreeBuilderOpts,
};
use log::debug;
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};
use regex::Regex;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([\w:]+)").expect("valid tag pattern"));

/// Parses an HTML fragment into detached nodes.
///
/// A fragment without any tags becomes a single text node. Otherwise, its
/// top-level elements are returned. Fragments are parsed in the context of a
/// `div` element, so elements like `style` and `meta` are kept in place.
/// Elements which are only allowed in tables or forms, such as `tr` and
/// `option`, are parsed inside their required parents. A `body` fragment
/// returns the `body` element itself.
pub fn parse_fragment(html: &str, config: &ParseConfig) -> Vec<Handle> {
    let html = if config.trim() { html.trim() } else { html };

    let Some(captures) = TAG_PATTERN.captures(html) else {
        debug!("parsing text fragment");
        return vec![Node::new(NodeData::Text {
            contents: RefCell::new(StrTendril::from_slice(html)),
        })];
    };
    let tag = captures[1].to_ascii_lowercase();

    debug!("parsing fragment with {tag} tag");

    parse_elements(html, &tag, config).unwrap_or_default()
}

fn parse_elements(html: &str, tag: &str, config: &ParseConfig) -> Option<Vec<Handle>> {
    let body = tag == "body";
    let (depth, prefix, suffix) = wrap(tag);
    // Nodes are detached before the document is dropped as dropping a document
    // clears children of all its descendants.
    let dom = parse_html_fragment(
        RcDom::default(),
        ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: config.scripting(),
                ..Default::default()
            },
            ..Default::default()
        },
        QualName::new(
            None,
            ns!(html),
            if body {
                local_name!("html")
            } else {
                local_name!("div")
            },
        ),
        vec![],
        false,
    )
    .one(format!("{prefix}{html}{suffix}").as_str());
    let mut container = child_element(&dom.document, "html")?;

    if body {
        let body = child_element(&container, "body")?;
        detach(&body);
        return Some(vec![body]);
    }

    for _ in 0..depth {
        container = last_element_child(&container)?;
    }

    Some(
        container
            .children
            .take()
            .into_iter()
            .filter(|node| is_element(node))
            .inspect(|node| node.parent.set(None))
            .collect(),
    )
}

fn wrap(tag: &str) -> (usize, &'static str, &'static str) {
    match tag {
        "option" | "optgroup" => (1, r#"<select multiple="multiple">"#, "</select>"),
        "legend" => (1, "<fieldset>", "</fieldset>"),
        "thead" | "tbody" | "tfoot" | "colgroup" | "caption" => (1, "<table>", "</table>"),
        "tr" => (2, "<table><tbody>", "</tbody></table>"),
        "td" | "th" => (3, "<table><tbody><tr>", "</tr></tbody></table>"),
        "col" => (2, "<table><tbody></tbody><colgroup>", "</colgroup></table>"),
        _ => (0, "", ""),
    }
}

fn child_element(node: &Node, name: &str) -> Option<Handle> {
    node.children
        .borrow()
        .iter()
        .find(|child| match &child.data {
            NodeData::Element {
                name: element_name, ..
            } => &*element_name.local == name,
            _ => false,
        })
        .cloned()
}

fn last_element_child(node: &Node) -> Option<Handle> {
    node.children
        .borrow()
        .iter()
        .rev()
        .find(|child| is_element(child))
        .cloned()
}

fn detach(node: &Handle) {
    if let Some(parent) = node.parent.take().and_then(|parent| parent.upgrade()) {
        parent
            .children
            .borrow_mut()
            .retain(|child| !Rc::ptr_eq(child, node));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn names(nodes: &[Handle]) -> Vec<String> {
        nodes
            .iter()
            .map(|node| match &node.data {
                NodeData::Element { name, .. } => name.local.to_string(),
                NodeData::Text { contents } => format!("#text {}", contents.borrow()),
                _ => "#other".into(),
            })
            .collect()
    }

    #[test]
    fn parse_text() {
        assert_eq!(
            names(&parse_fragment("  foo  ", &ParseConfig::new())),
            vec!["#text foo"]
        );
    }

    #[test]
    fn parse_text_without_trim() {
        assert_eq!(
            names(&parse_fragment(
                "  foo  ",
                &ParseConfig::new().set_trim(false)
            )),
            vec!["#text   foo  "]
        );
    }

    #[test]
    fn parse_element() {
        assert_eq!(
            names(&parse_fragment("<p>foo</p>", &ParseConfig::new())),
            vec!["p"]
        );
    }

    #[test]
    fn parse_elements_ignoring_text() {
        assert_eq!(
            names(&parse_fragment(
                indoc! {"
                    <p>foo</p>
                    bar
                    <div>baz</div>
                "},
                &ParseConfig::new()
            )),
            vec!["p", "div"]
        );
    }

    #[test]
    fn parse_table_row() {
        assert_eq!(
            names(&parse_fragment(
                "<tr><td>1</td></tr><tr><td>2</td></tr>",
                &ParseConfig::new()
            )),
            vec!["tr", "tr"]
        );
    }

    #[test]
    fn parse_table_cell() {
        assert_eq!(
            names(&parse_fragment("<td>1</td><th>2</th>", &ParseConfig::new())),
            vec!["td", "th"]
        );
    }

    #[test]
    fn parse_table_column() {
        assert_eq!(
            names(&parse_fragment("<col>", &ParseConfig::new())),
            vec!["col"]
        );
    }

    #[test]
    fn parse_table_section() {
        assert_eq!(
            names(&parse_fragment(
                "<thead></thead><tbody></tbody>",
                &ParseConfig::new()
            )),
            vec!["thead", "tbody"]
        );
    }

    #[test]
    fn parse_option() {
        assert_eq!(
            names(&parse_fragment(
                "<option>a</option><option>b</option>",
                &ParseConfig::new()
            )),
            vec!["option", "option"]
        );
    }

    #[test]
    fn parse_legend() {
        assert_eq!(
            names(&parse_fragment("<legend>foo</legend>", &ParseConfig::new())),
            vec!["legend"]
        );
    }

    #[test]
    fn parse_body_element() {
        let nodes = parse_fragment(r#"<body class="foo"><p>bar</p></body>"#, &ParseConfig::new());

        assert_eq!(names(&nodes), vec!["body"]);
        assert_eq!(names(&nodes[0].children.borrow()), vec!["p"]);
    }

    #[rstest]
    #[case("<style>p {}</style>", "style")]
    #[case("<script>foo()</script>", "script")]
    #[case("<title>foo</title>", "title")]
    #[case(r#"<meta charset="utf-8">"#, "meta")]
    #[case(r#"<link rel="stylesheet" href="foo.css">"#, "link")]
    #[case(r#"<base href="/">"#, "base")]
    fn parse_head_element(#[case] html: &str, #[case] name: &str) {
        assert_eq!(names(&parse_fragment(html, &ParseConfig::new())), vec![name]);
    }

    #[rstest]
    #[case("<style>p {}</style><p>foo</p>", vec!["style", "p"])]
    #[case("<p>foo</p><script>foo()</script>", vec!["p", "script"])]
    #[case(
        r#"<title>foo</title><meta name="foo"><link rel="icon"><div>bar</div>"#,
        vec!["title", "meta", "link", "div"]
    )]
    fn parse_head_elements_with_body_content(#[case] html: &str, #[case] expected: Vec<&str>) {
        assert_eq!(names(&parse_fragment(html, &ParseConfig::new())), expected);
    }

    #[test]
    fn parse_noscript_with_scripting() {
        let nodes = parse_fragment(
            "<noscript><p>foo</p></noscript>",
            &ParseConfig::new().set_scripting(true),
        );

        assert_eq!(names(&nodes), vec!["noscript"]);
        assert_eq!(
            names(&nodes[0].children.borrow()),
            vec!["#text <p>foo</p>"]
        );
    }

    #[test]
    fn parse_uppercase_body_element() {
        let nodes = parse_fragment(r#"<BODY class="foo"><P>bar</P></BODY>"#, &ParseConfig::new());

        assert_eq!(names(&nodes), vec!["body"]);
        assert_eq!(names(&nodes[0].children.borrow()), vec!["p"]);
    }

    #[test]
    fn detach_nodes() {
        for node in parse_fragment("<p>foo</p><tr></tr>", &ParseConfig::new())
            .into_iter()
            .chain(parse_fragment("<tr></tr>", &ParseConfig::new()))
            .chain(parse_fragment("<body></body>", &ParseConfig::new()))
        {
            assert!(node.parent.take().is_none());
        }
    }

    #[test]
    fn keep_children_after_parse() {
        let nodes = parse_fragment("<ul><li>1</li><li>2</li></ul>", &ParseConfig::new());

        assert_eq!(names(&nodes[0].children.borrow()), vec!["li", "li"]);
    }
}
