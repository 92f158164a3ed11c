use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{ensure, Context, Result};
use tracing::info;

use crate::roster::Page;

// Institutional boilerplate printed on every page of the extract.
const SKIP_EXACTLY: &[&str] = &["", "Roster", "Academic Yr.", "2024/2025", "Harper, Maryland County"];
const SKIP_CONTAINING: &str = "Smart School";

fn line_of_interest(line: &str) -> bool {
    !SKIP_EXACTLY.contains(&line) && !line.contains(SKIP_CONTAINING)
}

/// Convert a roster PDF to text with the `pdftotext` command-line tool,
/// writing `<stem>_tmp.txt` next to the input. Returns the text path.
pub fn convert_pdf_to_text(pdf_path: &Path) -> Result<PathBuf> {
    let mut name = pdf_path
        .file_stem()
        .context("input PDF path has no file name")?
        .to_os_string();
    name.push("_tmp.txt");
    let txt_path = pdf_path.with_file_name(name);

    info!(pdf = %pdf_path.display(), txt = %txt_path.display(), "converting PDF to text");
    let status = Command::new("pdftotext")
        .arg(pdf_path)
        .arg(&txt_path)
        .status()
        .context("running pdftotext (is it installed?)")?;
    ensure!(status.success(), "pdftotext failed with {status}");
    ensure!(
        txt_path.is_file(),
        "pdftotext produced no output at {}",
        txt_path.display()
    );

    Ok(txt_path)
}

/// Read a roster text file into filtered pages.
pub fn read_pages(path: &Path) -> Result<Vec<Page>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading roster text {}", path.display()))?;
    Ok(pages_from_text(&text))
}

/// Group the raw line stream into pages, dropping boilerplate lines. A line
/// starting with form-feed closes the current page; the rest of that line is
/// the institution banner and is discarded with it.
pub fn pages_from_text(text: &str) -> Vec<Page> {
    let mut pages: Vec<Page> = Vec::new();
    let mut page: Page = Vec::new();

    for line in text.lines() {
        if !line_of_interest(line) {
            continue;
        }
        if line.starts_with('\x0c') {
            if !page.is_empty() {
                pages.push(std::mem::take(&mut page));
            }
        } else {
            page.push(line.to_string());
        }
    }
    if !page.is_empty() {
        pages.push(page);
    }

    pages
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_split_on_formfeed() {
        let text = "Course\nENG101\n\x0cWilliam V.S. Tubman University\nCourse\nBIO210\n\x0c";
        let pages = pages_from_text(text);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], vec!["Course", "ENG101"]);
        assert_eq!(pages[1], vec!["Course", "BIO210"]);
    }

    #[test]
    fn boilerplate_lines_are_dropped() {
        let text = "Roster\nSmart School Management System\nAcademic Yr.\n2024/2025\nCourse\nHarper, Maryland County\n\nENG101";
        let pages = pages_from_text(text);
        assert_eq!(pages, vec![vec!["Course", "ENG101"]]);
    }

    #[test]
    fn trailing_page_without_formfeed_is_kept() {
        let pages = pages_from_text("A\n\x0c\nB");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1], vec!["B"]);
    }

    #[test]
    fn empty_text_yields_no_pages() {
        assert!(pages_from_text("").is_empty());
    }
}
