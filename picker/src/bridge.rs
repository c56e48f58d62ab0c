use std::path::Path;

/// Presentation mode requested by the document-picker transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMode {
    Import,
    Open,
    ExportToService,
    MoveToService,
}

/// Affordances the picker presents for a given mode and source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Label for the confirm affordance; `None` hides it. Import and open
    /// requests go straight to the note list.
    pub confirm_label: Option<String>,
    /// The supplied source file does not carry the note extension.
    pub extension_mismatch: bool,
}

/// Decides the picker's affordances before any note is listed.
///
/// Export and move requests get a confirm affordance; a source file whose
/// extension is not the note extension suppresses it and surfaces a
/// type-mismatch warning instead. Purely a presentation decision; the
/// storage contract is untouched.
pub fn prepare(mode: PickerMode, source: Option<&Path>, note_extension: &str) -> Presentation {
    let extension_mismatch = source.is_some_and(|path| {
        path.extension().and_then(|ext| ext.to_str()) != Some(note_extension)
    });

    let confirm_label = match mode {
        PickerMode::ExportToService => Some("Export file to Quillnote".to_string()),
        PickerMode::MoveToService => Some("Move file to Quillnote".to_string()),
        PickerMode::Import | PickerMode::Open => None,
    };

    Presentation {
        confirm_label: if extension_mismatch { None } else { confirm_label },
        extension_mismatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_export_and_move_get_confirm_labels() {
        let source = PathBuf::from("journal.txt");
        let export = prepare(PickerMode::ExportToService, Some(&source), "txt");
        assert_eq!(
            export.confirm_label.as_deref(),
            Some("Export file to Quillnote")
        );
        assert!(!export.extension_mismatch);

        let mv = prepare(PickerMode::MoveToService, Some(&source), "txt");
        assert_eq!(mv.confirm_label.as_deref(), Some("Move file to Quillnote"));
    }

    #[test]
    fn test_import_and_open_hide_the_confirm_affordance() {
        for mode in [PickerMode::Import, PickerMode::Open] {
            let presentation = prepare(mode, None, "txt");
            assert_eq!(presentation.confirm_label, None);
            assert!(!presentation.extension_mismatch);
        }
    }

    #[test]
    fn test_foreign_extension_surfaces_mismatch_not_export() {
        let source = PathBuf::from("report.pdf");
        let presentation = prepare(PickerMode::ExportToService, Some(&source), "txt");
        assert!(presentation.extension_mismatch);
        // The confirm affordance is suppressed, not relabeled.
        assert_eq!(presentation.confirm_label, None);
    }

    #[test]
    fn test_source_without_extension_is_a_mismatch() {
        let source = PathBuf::from("README");
        let presentation = prepare(PickerMode::MoveToService, Some(&source), "txt");
        assert!(presentation.extension_mismatch);
        assert_eq!(presentation.confirm_label, None);
    }

    #[test]
    fn test_no_source_never_mismatches() {
        let presentation = prepare(PickerMode::ExportToService, None, "txt");
        assert!(!presentation.extension_mismatch);
        assert!(presentation.confirm_label.is_some());
    }
}
