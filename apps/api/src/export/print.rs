//! Print generation: wrap a clone of the mounted resume root in a minimal
//! standalone document with fixed page rules and forced color fidelity.
//!
//! Two delivery paths exist. The window path targets a separate print
//! context that auto-triggers the native print dialog and closes itself;
//! the overlay path is the constrained fallback rendered in-page when a
//! separate context cannot be opened. Both are pure functions of the
//! mounted document: nothing in the session is modified, whether the print
//! completes or the user cancels.

use serde::{Deserialize, Serialize};

use crate::export::ExportError;
use crate::render::VisualDocument;

/// Advisory grace period after which a stalled print context may close
/// itself. Not load-bearing for correctness.
#[allow(dead_code)]
pub const PRINT_WINDOW_GRACE_SECS: u64 = 20;

/// Delay before the window path triggers the dialog, giving styles a chance
/// to settle.
const PRINT_TRIGGER_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintPath {
    /// Separate print-context window (desktop).
    #[default]
    Window,
    /// In-page overlay (constrained/mobile, or popups blocked).
    Overlay,
}

/// A print-ready standalone document plus the path it was prepared for.
#[derive(Debug, Clone, Serialize)]
pub struct PrintDocument {
    pub path: PrintPath,
    pub html: String,
}

/// Clones the resume root out of the mounted document and wraps it for
/// printing. Fails only when no marked root is mounted.
pub fn build_print_document(
    mounted: Option<&VisualDocument>,
    path: PrintPath,
) -> Result<PrintDocument, ExportError> {
    let doc = mounted.ok_or(ExportError::RootNotFound)?;
    let root = doc.find_resume_root().ok_or(ExportError::RootNotFound)?;
    let inner = VisualDocument { root: root.clone() }.to_html();

    let page_margin = match path {
        PrintPath::Window => "0.2in",
        PrintPath::Overlay => "0.5in",
    };
    let auto_print = match path {
        PrintPath::Window => format!(
            "<script>window.onload=function(){{setTimeout(function(){{window.print();\
             window.close();}},{PRINT_TRIGGER_DELAY_MS});}};</script>"
        ),
        PrintPath::Overlay => String::new(),
    };

    let html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <style>\n\
         @page {{ size: A4; margin: {page_margin}; }}\n\
         body {{ margin: 0; padding: 0; background: white; color: black;\n\
                 -webkit-print-color-adjust: exact; print-color-adjust: exact; }}\n\
         .print-container {{ width: 794px; min-height: 1123px; margin: 0 auto;\n\
                             background: white; box-shadow: none; }}\n\
         @media print {{\n\
           body {{ background: white !important; }}\n\
           .print-container {{ width: 100% !important; margin: 0 !important; }}\n\
           * {{ -webkit-print-color-adjust: exact !important;\n\
                print-color-adjust: exact !important; }}\n\
         }}\n\
         </style>\n</head>\n<body>\n\
         <div class=\"print-container\">{inner}</div>\n\
         {auto_print}\n</body>\n</html>"
    );

    Ok(PrintDocument { path, html })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumeData;
    use crate::render::{Block, Text};
    use crate::templates;

    fn mounted_example() -> VisualDocument {
        templates::find("modern")
            .unwrap()
            .renderer
            .render(&ResumeData::example())
    }

    #[test]
    fn test_window_path_embeds_root_and_auto_print() {
        let doc = mounted_example();
        let print = build_print_document(Some(&doc), PrintPath::Window).unwrap();
        assert!(print.html.contains("@page { size: A4; margin: 0.2in; }"));
        assert!(print.html.contains("print-color-adjust: exact"));
        assert!(print.html.contains("window.print()"));
        assert!(print.html.contains("data-resume-template"));
        assert!(print.html.contains("Sarah Johnson"));
    }

    #[test]
    fn test_overlay_path_has_no_script_and_wider_margin() {
        let doc = mounted_example();
        let print = build_print_document(Some(&doc), PrintPath::Overlay).unwrap();
        assert!(print.html.contains("margin: 0.5in"));
        assert!(!print.html.contains("<script>"));
    }

    #[test]
    fn test_print_leaves_mounted_document_untouched() {
        let doc = mounted_example();
        let before = doc.clone();
        let _ = build_print_document(Some(&doc), PrintPath::Window).unwrap();
        assert_eq!(doc, before, "printing must not mutate the mounted document");
    }

    #[test]
    fn test_print_without_root_fails() {
        assert!(matches!(
            build_print_document(None, PrintPath::Window),
            Err(ExportError::RootNotFound)
        ));
        let unmarked = VisualDocument::new(Block::new().child(Text::new("x")));
        assert!(matches!(
            build_print_document(Some(&unmarked), PrintPath::Overlay),
            Err(ExportError::RootNotFound)
        ));
    }
}
