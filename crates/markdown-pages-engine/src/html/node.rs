/// Errors raised when a node tree cannot be printed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node has no value")]
    MissingValue,
    #[error("parent node has no children")]
    MissingChildren,
    #[error("parent node has no tag")]
    MissingTag,
}

/// Ordered attribute mapping.
///
/// Insertion order is kept so that serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`. An existing name keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.0.push((name, value)),
        }
    }

    /// Renders every attribute as ` name="value"`.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        for (name, value) in &self.0 {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

impl<N, V> FromIterator<(N, V)> for Attributes
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

/// A node holding text and no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    /// `None` renders the value as raw text.
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attrs: Attributes,
}

/// A node whose content is its ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<Node>>,
    pub attrs: Attributes,
}

/// A printable HTML node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl Node {
    /// A leaf with an optional tag.
    pub fn leaf(tag: Option<&str>, value: impl Into<String>) -> Self {
        Node::Leaf(LeafNode {
            tag: tag.map(str::to_string),
            value: Some(value.into()),
            attrs: Attributes::new(),
        })
    }

    /// An untagged leaf, printed as its raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Self::leaf(None, value)
    }

    pub fn parent(tag: &str, children: Vec<Node>) -> Self {
        Node::Parent(ParentNode {
            tag: Some(tag.to_string()),
            children: Some(children),
            attrs: Attributes::new(),
        })
    }

    /// Appends an attribute, keeping insertion order.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs_mut().insert(name, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag.as_deref(),
            Node::Parent(parent) => parent.tag.as_deref(),
        }
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        match self {
            Node::Leaf(leaf) => &mut leaf.attrs,
            Node::Parent(parent) => &mut parent.attrs,
        }
    }

    /// Children of a parent; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Parent(ParentNode {
                children: Some(children),
                ..
            }) => children,
            _ => &[],
        }
    }

    /// Leaf text; `None` for parents.
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.value.as_deref(),
            Node::Parent(_) => None,
        }
    }

    /// Serializes the node and everything below it.
    ///
    /// A parent is closed with `</tag>\n`; leaves carry no trailing newline.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            Node::Leaf(leaf) => {
                let value = leaf.value.as_deref().ok_or(RenderError::MissingValue)?;
                match leaf.tag.as_deref() {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(out, tag, &leaf.attrs);
                        out.push_str(value);
                        close_tag(out, tag);
                    }
                }
            }
            Node::Parent(parent) => {
                let tag = parent.tag.as_deref().ok_or(RenderError::MissingTag)?;
                let children = parent
                    .children
                    .as_ref()
                    .ok_or(RenderError::MissingChildren)?;
                open_tag(out, tag, &parent.attrs);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(out, tag);
                out.push('\n');
            }
        }
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attrs: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attrs.write_html(out);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
