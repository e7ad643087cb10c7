use crate::html::{RenderError, TitleError};
use crate::parsing::inline::InlineError;

/// Any failure on the way from Markdown text to a finished page body.
#[derive(Debug, thiserror::Error)]
pub enum MarkdownError {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Title(#[from] TitleError),
}
