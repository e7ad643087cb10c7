#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn char(self) -> char {
        match self {
            FenceKind::Backticks => CodeFence::BACKTICK,
            FenceKind::Tildes => CodeFence::TILDE,
        }
    }
}

/// An opening fence: its character and the length of its marker run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    pub len: usize,
}

impl FenceSig {
    /// The marker run the closing line must repeat exactly.
    pub fn marker(self) -> String {
        self.kind.char().to_string().repeat(self.len)
    }
}

/// A fenced code block: an opening marker line, raw lines, a closing marker.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: char = '`';
    pub const TILDE: char = '~';
    pub const MIN_LEN: usize = 3;

    /// Fence a line opens with, if any.
    ///
    /// The marker run is measured in full, and the info string after it may
    /// not contain the fence character.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = line.trim_end_matches(['\r', '\n']);
        let kind = match t.chars().next()? {
            Self::BACKTICK => FenceKind::Backticks,
            Self::TILDE => FenceKind::Tildes,
            _ => return None,
        };
        let fence_char = kind.char();
        // Both fence characters are one byte, so the run length is a byte offset.
        let len = t.chars().take_while(|c| *c == fence_char).count();
        if len < Self::MIN_LEN || t[len..].contains(fence_char) {
            return None;
        }
        Some(FenceSig { kind, len })
    }

    /// Whether `block` is a complete fenced code block.
    ///
    /// The first line must open a fence, there must be a line after it, and the
    /// last line must be exactly the opener's marker run.
    pub fn enclosing(block: &str) -> Option<FenceSig> {
        let (opener, rest) = block.split_once('\n')?;
        let sig = Self::sig(opener)?;
        let closer = rest.rsplit('\n').next()?;
        (closer.trim_end_matches('\r') == sig.marker()).then_some(sig)
    }

    /// Info string after the opening marker run, trimmed (`rust` in ```` ```rust ````).
    pub fn info(block: &str, sig: FenceSig) -> &str {
        let opener = block.lines().next().unwrap_or_default();
        opener.get(sig.len..).unwrap_or_default().trim()
    }

    /// Raw text between the fences.
    ///
    /// Blank lines directly after the opener are dropped; everything else,
    /// including the newline before the closing marker, is kept verbatim.
    pub fn body(block: &str, sig: FenceSig) -> &str {
        let rest = block.split_once('\n').map(|(_, rest)| rest).unwrap_or_default();
        let marker = sig.marker();
        rest.trim_end_matches('\r')
            .strip_suffix(marker.as_str())
            .unwrap_or(rest)
            .trim_start_matches(['\r', '\n'])
    }
}
