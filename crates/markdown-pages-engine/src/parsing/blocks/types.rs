use super::kinds::FenceSig;

/// The kind of a block, decided once per blank-line delimited block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// The fallback when no other rule matches.
    Paragraph,
    /// `#` to `######` followed by a space, on a single line.
    Heading {
        /// 1 to 6.
        level: u8,
    },
    /// A fenced code block.
    Code {
        /// Fence character and marker run length of the opener.
        fence: FenceSig,
        /// Text after the opening marker, e.g. `rust`. Empty if absent.
        info: String,
    },
    /// Every line starts with `> ` or is exactly `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps.
    OrderedList,
}

impl BlockKind {
    /// Tag of the node this kind builds.
    pub fn tag(&self) -> String {
        match self {
            BlockKind::Paragraph => "p".to_string(),
            BlockKind::Heading { level } => format!("h{level}"),
            BlockKind::Code { .. } => "pre".to_string(),
            BlockKind::Quote => "blockquote".to_string(),
            BlockKind::UnorderedList => "ul".to_string(),
            BlockKind::OrderedList => "ol".to_string(),
        }
    }
}
