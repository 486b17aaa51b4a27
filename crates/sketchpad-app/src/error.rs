//! Errors raised while building or driving the page.

use sketchpad_render::RendererError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("No window")]
    NoWindow,
    #[error("No document")]
    NoDocument,
    #[error("No document body")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error(transparent)]
    Render(#[from] RendererError),
}

pub type ShellResult<T> = Result<T, ShellError>;
