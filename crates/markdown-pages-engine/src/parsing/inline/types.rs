/// A typed fragment of inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    /// Text not (yet) claimed by any construct.
    Plain(String),
    Bold(String),
    Italic(String),
    /// Backtick-delimited code. A raw zone: no further parsing inside.
    Code(String),
    Link {
        text: String,
        url: String,
    },
    Image {
        alt: String,
        url: String,
    },
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        TextSpan::Plain(text.into())
    }
}
