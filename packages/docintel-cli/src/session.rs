//! Mutable session state owned by the shell.
//!
//! The core crate's functions are pure; everything that changes over the
//! lifetime of a run lives here: the authored field list, the uploaded
//! document handle, the batch flag, the last result, and the expanded-row
//! set. Mutations are serialized by the single-threaded prompt loop.

use std::collections::HashSet;

use docintel::{ExtractionResult, FieldDescriptor, SchemaImport};

pub struct Session {
    /// Authored fields, in user order; blank rows are tolerated and only
    /// filtered at build time
    pub fields: Vec<FieldDescriptor>,

    /// Whether extract requests ask for the batch mode
    pub batch_extraction: bool,

    /// Handle of the uploaded document, once one exists
    pub doc_id: Option<String>,

    /// Display name of the uploaded document
    pub document_name: Option<String>,

    /// Last accepted extraction result
    pub result: Option<ExtractionResult>,

    /// Keys of rows the user expanded; reset whenever a new result arrives
    pub expanded: HashSet<String>,
}

impl Session {
    /// Fresh session with one blank field row, as the editor seeds it.
    pub fn new() -> Self {
        Self {
            fields: vec![FieldDescriptor::blank()],
            batch_extraction: false,
            doc_id: None,
            document_name: None,
            result: None,
            expanded: HashSet::new(),
        }
    }

    /// Extraction needs an uploaded document.
    pub fn can_extract(&self) -> bool {
        self.doc_id.is_some()
    }

    /// Apply a successful schema import: the field list is replaced
    /// wholesale, and the batch flag is set when hinted - a missing or
    /// false hint never turns an already-enabled flag off.
    pub fn apply_import(&mut self, import: SchemaImport) {
        self.fields = import.fields;
        if import.batch_extraction_hint {
            self.batch_extraction = true;
        }
    }

    /// Record a fresh upload; any previous result belongs to the old
    /// document and is discarded.
    pub fn set_document(&mut self, name: impl Into<String>, doc_id: impl Into<String>) {
        self.document_name = Some(name.into());
        self.doc_id = Some(doc_id.into());
        self.clear_result();
    }

    /// Accept a new result, resetting transient row state.
    pub fn set_result(&mut self, result: ExtractionResult) {
        self.expanded.clear();
        self.result = Some(result);
    }

    /// Drop the current result and its row state.
    pub fn clear_result(&mut self) {
        self.result = None;
        self.expanded.clear();
    }

    /// Flip the expand state of one row.
    pub fn toggle_row(&mut self, key: &str) {
        if !self.expanded.remove(key) {
            self.expanded.insert(key.to_string());
        }
    }

    /// Back to the initial state.
    pub fn reset(&mut self) {
        *self = Session::new();
    }
}
