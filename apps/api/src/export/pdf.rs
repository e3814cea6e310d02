//! HTML → PDF through an isolated headless Chromium instance.

use std::io::Write;

use bytes::Bytes;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};

use crate::errors::AppError;

const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.69;
/// 20px at the browser's default 96 DPI.
const MARGIN_IN: f64 = 20.0 / 96.0;

/// Prints an HTML document to PDF. The browser process is scoped to this
/// single call: it is launched fresh, never pooled, and dropped on every
/// exit path, so a failed render cannot leak a Chromium instance.
pub async fn generate_pdf(html: String) -> Result<Bytes, AppError> {
    let bytes = tokio::task::spawn_blocking(move || render_blocking(&html))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF render task failed: {e}")))??;
    Ok(Bytes::from(bytes))
}

fn render_blocking(html: &str) -> Result<Vec<u8>, AppError> {
    // Chromium reads the document from a temp file; the file lives until the
    // guard drops at the end of this function.
    let mut staged = tempfile::Builder::new()
        .suffix(".html")
        .tempfile()
        .map_err(|e| AppError::Render(format!("Failed to stage HTML: {e}")))?;
    staged
        .write_all(html.as_bytes())
        .map_err(|e| AppError::Render(format!("Failed to stage HTML: {e}")))?;
    let url = format!("file://{}", staged.path().display());

    let launch = LaunchOptions::default_builder()
        .sandbox(false)
        .build()
        .map_err(|e| AppError::Render(format!("Failed to configure browser: {e}")))?;
    let browser = Browser::new(launch)
        .map_err(|e| AppError::Render(format!("Failed to launch browser: {e}")))?;

    let tab = browser
        .new_tab()
        .map_err(|e| AppError::Render(format!("Failed to open tab: {e}")))?;
    tab.navigate_to(&url)
        .map_err(|e| AppError::Render(format!("Failed to load document: {e}")))?;
    tab.wait_until_navigated()
        .map_err(|e| AppError::Render(format!("Failed to load document: {e}")))?;

    tab.print_to_pdf(Some(pdf_options()))
        .map_err(|e| AppError::Render(format!("Failed to print PDF: {e}")))
}

fn pdf_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(true),
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        margin_top: Some(MARGIN_IN),
        margin_bottom: Some(MARGIN_IN),
        margin_left: Some(MARGIN_IN),
        margin_right: Some(MARGIN_IN),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_options_use_a4_with_20px_margins() {
        let options = pdf_options();
        assert_eq!(options.paper_width, Some(8.27));
        assert_eq!(options.paper_height, Some(11.69));
        assert_eq!(options.margin_top, Some(20.0 / 96.0));
        assert_eq!(options.print_background, Some(true));
    }
}
