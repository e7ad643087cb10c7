/// ATX heading: `#` to `######`, a space, then the title text.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Heading level of a block, or `None` if it is not a heading.
    ///
    /// Multi-line blocks are never headings.
    pub fn level(block: &str) -> Option<u8> {
        if block.contains('\n') {
            return None;
        }
        let hashes = block.bytes().take_while(|b| *b == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&hashes) {
            return None;
        }
        if block.as_bytes().get(hashes) != Some(&b' ') {
            return None;
        }
        u8::try_from(hashes).ok()
    }

    /// Title text after exactly `level` markers and one space.
    pub fn text(block: &str, level: u8) -> &str {
        block.get(usize::from(level) + 1..).unwrap_or_default()
    }
}
