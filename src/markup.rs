//! Escaping markup builder.
//! Every string that reaches the page goes through `html_escape` unless it is a
//! `&'static str` glyph compiled into the binary.

use serde::Serialize;

/// A fragment of HTML that is safe to insert as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn empty() -> Self {
        Markup(String::new())
    }

    /// Escaped text content.
    pub fn text(s: &str) -> Self {
        Markup(html_escape(s))
    }

    /// Raw developer-authored markup (icons). Only static strings are accepted.
    pub fn glyph(raw: &'static str) -> Self {
        Markup(raw.to_string())
    }

    pub fn push(&mut self, other: Markup) {
        self.0.push_str(&other.0);
    }

    pub fn concat<I: IntoIterator<Item = Markup>>(parts: I) -> Self {
        let mut out = Markup::empty();
        for part in parts {
            out.push(part);
        }
        out
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Node> for Markup {
    fn from(node: Node) -> Self {
        node.build()
    }
}

/// Element builder. Attribute values and text children are escaped.
#[derive(Debug, Clone)]
pub struct Node {
    tag: &'static str,
    void: bool,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Markup>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Node { tag, void: false, attrs: Vec::new(), children: Vec::new() }
    }

    /// Self-closing element such as `img`.
    pub fn void(tag: &'static str) -> Self {
        Node { tag, void: true, attrs: Vec::new(), children: Vec::new() }
    }

    pub fn attr(mut self, name: &'static str, value: impl AsRef<str>) -> Self {
        self.attrs.push((name, value.as_ref().to_string()));
        self
    }

    pub fn class(self, value: &str) -> Self {
        self.attr("class", value)
    }

    /// Link opening in a new tab.
    pub fn external(self, href: &str) -> Self {
        self.attr("href", href).attr("target", "_blank").attr("rel", "noopener")
    }

    pub fn text(mut self, s: &str) -> Self {
        self.children.push(Markup::text(s));
        self
    }

    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, M>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Markup>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn glyph(mut self, raw: &'static str) -> Self {
        self.children.push(Markup::glyph(raw));
        self
    }

    pub fn build(self) -> Markup {
        let mut html = format!("<{}", self.tag);
        html.push_str(&render_attrs(self.attrs.iter().map(|(k, v)| (*k, v.as_str()))));
        html.push('>');
        if self.void {
            return Markup(html);
        }
        for child in &self.children {
            html.push_str(child.as_str());
        }
        html.push_str(&format!("</{}>", self.tag));
        Markup(html)
    }
}

/// Render ` name="value"` pairs with escaped values.
pub fn render_attrs<'a, I>(attrs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    attrs
        .into_iter()
        .map(|(k, v)| format!(" {}=\"{}\"", k, html_escape(v)))
        .collect()
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
