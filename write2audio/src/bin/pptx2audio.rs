//! pptx2audio - Convert a PPTX presentation into an M4B audiobook.

use anyhow::Result;
use write2audio::cli;
use write2audio::extract::DocumentKind;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run_entry_point(DocumentKind::Pptx).await
}
