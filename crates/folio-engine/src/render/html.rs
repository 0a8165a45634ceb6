//! Static HTML output for projected nodes, for consumers without a UI
//! runtime (feeds, link previews, server-side pages).

use super::{FallbackNode, RenderKind, RenderNode};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::Write;

pub const EMPTY_NOTICE: &str = "No content available";

/// Render a projected document. `TrustedHtml` is written verbatim, every
/// other string is escaped.
pub fn to_html(nodes: &[RenderNode]) -> String {
    if nodes.is_empty() {
        return format!(
            "<div class=\"text-center py-8\"><p class=\"text-gray-500\">{EMPTY_NOTICE}</p></div>"
        );
    }

    let mut out = String::from("<article class=\"prose prose-lg max-w-none\">");
    for node in nodes {
        write_node(&mut out, node);
    }
    out.push_str("</article>");
    out
}

fn write_node(out: &mut String, node: &RenderNode) {
    // Writing into a String cannot fail
    let _ = match &node.kind {
        RenderKind::Heading(heading) => write!(
            out,
            "<{tag} class=\"font-bold mb-4 mt-6 {size}\">{body}</{tag}>",
            tag = heading.tag(),
            size = heading.size_class(),
            body = text(&heading.text)
        ),
        RenderKind::Text(html) => write!(
            out,
            "<p class=\"leading-relaxed mb-4\">{}</p>",
            html.as_str()
        ),
        RenderKind::Figure(figure) => {
            let _ = write!(
                out,
                "<figure class=\"my-8\"><img src=\"{}\" alt=\"{}\" class=\"{}\"/>",
                attr(&figure.src),
                attr(figure.alt()),
                figure.style.class_attr()
            );
            if let Some(caption) = &figure.caption {
                let _ = write!(
                    out,
                    "<figcaption class=\"text-center text-sm mt-2\">{}</figcaption>",
                    text(caption)
                );
            }
            write!(out, "</figure>")
        }
        RenderKind::List(list) => {
            let (tag, class) = if list.ordered {
                ("ol", "list-decimal list-inside")
            } else {
                ("ul", "list-disc list-inside")
            };
            let _ = write!(out, "<{tag} class=\"mb-4 {class}\">");
            for item in &list.items {
                let _ = write!(out, "<li class=\"mb-1\">{}</li>", item.as_str());
            }
            write!(out, "</{tag}>")
        }
        RenderKind::Quote(quote) => {
            let align = if quote.centered { " text-center" } else { "" };
            let _ = write!(
                out,
                "<blockquote class=\"border-l-4 pl-6 my-6{align}\"><p class=\"text-lg italic mb-2\">\"{}\"</p>",
                text(&quote.text)
            );
            if let Some(caption) = &quote.caption {
                let _ = write!(out, "<cite class=\"text-sm\">— {}</cite>", text(caption));
            }
            write!(out, "</blockquote>")
        }
        RenderKind::Preformatted { code } => write!(
            out,
            "<pre class=\"rounded-lg p-4 my-6 overflow-x-auto\"><code>{}</code></pre>",
            text(code)
        ),
        RenderKind::Grid(grid) => {
            let _ = write!(
                out,
                "<div class=\"overflow-x-auto my-6\"><table class=\"w-full border-collapse\"><tbody>"
            );
            for row in &grid.rows {
                let cell_tag = if row.header { "th" } else { "td" };
                let _ = write!(out, "<tr>");
                for cell in &row.cells {
                    let _ = write!(out, "<{cell_tag}>{}</{cell_tag}>", text(cell));
                }
                let _ = write!(out, "</tr>");
            }
            write!(out, "</tbody></table></div>")
        }
        RenderKind::Separator => write!(
            out,
            "<div class=\"delimiter flex justify-center my-8\" aria-hidden=\"true\"><span></span><span></span><span></span></div>"
        ),
        RenderKind::Callout(callout) => write!(
            out,
            "<div class=\"callout border-l-4 p-4 my-6\" role=\"note\"><strong>⚠️ {}</strong><p>{}</p></div>",
            text(&callout.title),
            text(&callout.message)
        ),
        RenderKind::Frame(frame) => {
            let _ = write!(
                out,
                "<div class=\"my-6\"><div style=\"aspect-ratio: {}\"><iframe src=\"{}\" title=\"{}\" class=\"w-full h-full rounded-lg\" allowfullscreen></iframe></div>",
                frame.aspect.css(),
                attr(&frame.src),
                attr(&frame.title)
            );
            if let Some(caption) = &frame.caption {
                let _ = write!(out, "<p class=\"text-center text-sm mt-2\">{}</p>", text(caption));
            }
            write!(out, "</div>")
        }
        RenderKind::Card(card) => {
            let _ = write!(
                out,
                "<div class=\"link-card border rounded-lg p-4 my-6\"><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">",
                attr(&card.href)
            );
            if let Some(image) = &card.image {
                let _ = write!(out, "<img src=\"{}\" alt=\"\"/>", attr(image));
            }
            let _ = write!(out, "<h4>{}</h4>", text(&card.title));
            if let Some(description) = &card.description {
                let _ = write!(out, "<p>{}</p>", text(description));
            }
            write!(out, "<span>{}</span></a></div>", text(&card.href))
        }
        RenderKind::Fallback(fallback) => {
            let _ = write!(
                out,
                "<div class=\"unknown-block my-4 p-3 rounded border-l-4\"><small>{}</small>",
                text(&fallback.label())
            );
            if let FallbackNode::LabelledText { text: body, .. } = fallback {
                let _ = write!(out, "<p>{}</p>", text(body));
            }
            write!(out, "</div>")
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, BlockContent, BlockDocument, CodeData, TableData};
    use crate::render::project;

    fn render(blocks: Vec<Block>) -> String {
        to_html(&project(&BlockDocument::new(blocks)))
    }

    #[test]
    fn test_empty_document_notice() {
        let html = render(vec![]);
        assert!(html.contains(EMPTY_NOTICE));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn test_paragraph_markup_is_trusted() {
        let html = render(vec![Block::paragraph("a <b>bold</b> move")]);
        assert!(html.contains("a <b>bold</b> move"));
    }

    #[test]
    fn test_code_is_escaped_verbatim() {
        let html = render(vec![Block::new(BlockContent::Code(CodeData {
            code: "if a < b && c > d {}".to_string(),
        }))]);
        assert!(html.contains("if a &lt; b &amp;&amp; c &gt; d {}"));
    }

    #[test]
    fn test_heading_text_is_escaped() {
        let html = render(vec![Block::heading("<script>", 2)]);
        assert!(html.contains("<h2 class=\"font-bold mb-4 mt-6 text-2xl\">&lt;script&gt;</h2>"));
    }

    #[test]
    fn test_table_header_cells() {
        let html = render(vec![Block::new(BlockContent::Table(TableData {
            rows: vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["1".to_string(), "2".to_string()],
            ],
            first_row_is_header: true,
        }))]);
        assert!(html.contains("<tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr>"));
    }

    #[test]
    fn test_unknown_block_label() {
        let html = render(vec![Block::new(BlockContent::Unrecognized {
            kind: "checklist".to_string(),
            payload: serde_json::json!({}),
        })]);
        assert!(html.contains("Unsupported block type: checklist"));
    }

    #[test]
    fn test_separator_snapshot() {
        let html = render(vec![Block::new(BlockContent::Delimiter)]);
        insta::assert_snapshot!(html, @r#"<article class="prose prose-lg max-w-none"><div class="delimiter flex justify-center my-8" aria-hidden="true"><span></span><span></span><span></span></div></article>"#);
    }
}
