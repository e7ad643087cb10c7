/// Emphasis delimiters. Bold must be split before the single `*`.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";
    pub const UNDERSCORE: &'static str = "_";
    pub const STAR: &'static str = "*";
}
