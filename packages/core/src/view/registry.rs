//! Generic CRUD registry state shared by the index and team member screens.

use std::fmt::{Debug, Display};

use crate::error::ValidationError;
use crate::submit::{IdempotencyKey, SubmitGuard};
use crate::{Index, IndexForm, IndexId, TeamMember, TeamMemberForm, TeamMemberId};

/// An entity managed through a list/add/edit/delete screen.
pub trait RegistryEntity: Debug + Clone + PartialEq + 'static {
    type Id: Debug + Display + Copy + Eq + 'static;
    type Form: Debug + Clone + Default + PartialEq + 'static;

    /// Singular display noun, e.g. "Index".
    const NOUN: &'static str;
    /// Text of the delete confirmation.
    const DELETE_PROMPT: &'static str;

    fn id(&self) -> Self::Id;
    fn to_form(&self) -> Self::Form;
    fn validate(form: &Self::Form) -> Result<(), ValidationError>;
}

impl RegistryEntity for Index {
    type Id = IndexId;
    type Form = IndexForm;

    const NOUN: &'static str = "Index";
    const DELETE_PROMPT: &'static str =
        "Are you sure you want to delete this index? This will also delete all associated jobs.";

    fn id(&self) -> IndexId {
        self.id
    }

    fn to_form(&self) -> IndexForm {
        IndexForm::from(self)
    }

    fn validate(form: &IndexForm) -> Result<(), ValidationError> {
        form.validate()
    }
}

impl RegistryEntity for TeamMember {
    type Id = TeamMemberId;
    type Form = TeamMemberForm;

    const NOUN: &'static str = "Team Member";
    const DELETE_PROMPT: &'static str = "Are you sure you want to delete this team member?";

    fn id(&self) -> TeamMemberId {
        self.id
    }

    fn to_form(&self) -> TeamMemberForm {
        TeamMemberForm::from(self)
    }

    fn validate(form: &TeamMemberForm) -> Result<(), ValidationError> {
        form.validate()
    }
}

/// Whether the form dialog creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode<Id> {
    Add,
    Edit(Id),
}

/// The add/edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct Editor<E: RegistryEntity> {
    pub mode: EditorMode<E::Id>,
    pub form: E::Form,
    pub error: Option<ValidationError>,
    pub submit: SubmitGuard,
}

impl<E: RegistryEntity> Editor<E> {
    pub fn title(&self) -> String {
        match self.mode {
            EditorMode::Add => format!("Add {}", E::NOUN),
            EditorMode::Edit(_) => format!("Edit {}", E::NOUN),
        }
    }
}

/// A write the screen wants issued.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryWrite<E: RegistryEntity> {
    Create {
        form: E::Form,
        key: IdempotencyKey,
    },
    Update {
        id: E::Id,
        form: E::Form,
        key: IdempotencyKey,
    },
}

impl<E: RegistryEntity> RegistryWrite<E> {
    pub fn key(&self) -> IdempotencyKey {
        match self {
            Self::Create { key, .. } | Self::Update { key, .. } => *key,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistryState<E: RegistryEntity> {
    pub items: Vec<E>,
    pub editor: Option<Editor<E>>,
    /// Record awaiting delete confirmation.
    pub pending_delete: Option<E::Id>,
    pub alert: Option<String>,
}

impl<E: RegistryEntity> Default for RegistryState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            editor: None,
            pending_delete: None,
            alert: None,
        }
    }
}

impl<E: RegistryEntity> RegistryState<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_loaded(&mut self, items: Vec<E>) {
        self.items = items;
    }

    pub fn list_failed(&mut self, error: &dyn Display) {
        tracing::error!(entity = E::NOUN, "Error fetching list: {}", error);
    }

    pub fn open_add(&mut self) {
        self.editor = Some(Editor {
            mode: EditorMode::Add,
            form: E::Form::default(),
            error: None,
            submit: SubmitGuard::default(),
        });
    }

    /// Open the editor pre-filled from the record with `id`.
    pub fn open_edit(&mut self, id: E::Id) -> bool {
        let Some(item) = self.items.iter().find(|item| item.id() == id) else {
            return false;
        };
        self.editor = Some(Editor {
            mode: EditorMode::Edit(id),
            form: item.to_form(),
            error: None,
            submit: SubmitGuard::default(),
        });
        true
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Apply a field edit to the open form.
    pub fn edit(&mut self, apply: impl FnOnce(&mut E::Form)) {
        if let Some(editor) = self.editor.as_mut() {
            apply(&mut editor.form);
            editor.error = None;
            editor.submit.invalidate();
        }
    }

    pub fn begin_save(&mut self) -> Option<RegistryWrite<E>> {
        let editor = self.editor.as_mut()?;
        if let Err(e) = E::validate(&editor.form) {
            editor.error = Some(e);
            return None;
        }
        let key = editor.submit.begin()?;
        let form = editor.form.clone();
        Some(match editor.mode {
            EditorMode::Add => RegistryWrite::Create { form, key },
            EditorMode::Edit(id) => RegistryWrite::Update { id, form, key },
        })
    }

    /// Close the editor if it sent `key`; the caller re-fetches the list.
    pub fn save_succeeded(&mut self, key: IdempotencyKey) {
        if self.owned_editor(key).is_some() {
            self.editor = None;
        }
    }

    pub fn save_failed(&mut self, key: IdempotencyKey, error: &dyn Display) {
        tracing::error!(entity = E::NOUN, %key, "Error saving: {}", error);
        let Some(editor) = self.owned_editor(key) else {
            return;
        };
        editor.submit.fail();
        self.alert = Some(format!(
            "Failed to save {}. Please try again.",
            E::NOUN.to_lowercase()
        ));
    }

    fn owned_editor(&mut self, key: IdempotencyKey) -> Option<&mut Editor<E>> {
        self.editor.as_mut().filter(|editor| editor.submit.owns(key))
    }

    pub fn request_delete(&mut self, id: E::Id) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Take the confirmed id; the caller issues the delete.
    pub fn confirm_delete(&mut self) -> Option<E::Id> {
        self.pending_delete.take()
    }

    pub fn delete_failed(&mut self, error: &dyn Display) {
        tracing::error!(entity = E::NOUN, "Error deleting: {}", error);
        self.alert = Some(format!(
            "Failed to delete {}. Please try again.",
            E::NOUN.to_lowercase()
        ));
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
