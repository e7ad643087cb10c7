/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: once split out, no later pass looks inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
}
