//! Portfolio project form state and image-list operations.
//!
//! The admin project editor works on an in-memory [`ProjectForm`] that is
//! only persisted on submit. Everything here is pure: reordering images,
//! queueing removals, composing the final image list, and parsing the
//! features textarea are plain list operations shared by the server
//! handlers and their tests.

use crate::error::CoreError;

/// An image file attached to the form but not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// The stored fields of a project, as loaded for editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSnapshot {
    pub id: String,
    pub title: String,
    pub category: String,
    pub client: String,
    pub location: String,
    pub completion_date: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
}

/// In-memory state of the admin project editor.
///
/// One form backs both the create flow and the edit flow; `editing_id`
/// distinguishes them. All mutations stay local until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub id: String,
    pub title: String,
    pub category: String,
    pub client: String,
    pub location: String,
    pub completion_date: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    /// Raw contents of the features textarea, one feature per line.
    pub features_text: String,
    /// Files attached this session, uploaded on submit in attachment order.
    pub image_files: Vec<PendingUpload>,
    /// Already-stored image URLs, reorderable and individually removable.
    pub editable_images: Vec<String>,
    /// Stored image URLs queued for deletion on submit.
    pub images_to_delete: Vec<String>,
    /// `Some(id)` while editing an existing project, `None` while creating.
    pub editing_id: Option<String>,
}

impl ProjectForm {
    /// Load a stored project into the form for editing.
    ///
    /// Scalars are copied in, features are joined back into textarea form,
    /// the stored image list becomes the editable list, and both the
    /// pending-upload and deletion queues are cleared.
    pub fn begin_edit(&mut self, project: &ProjectSnapshot) {
        self.id = project.id.clone();
        self.title = project.title.clone();
        self.category = project.category.clone();
        self.client = project.client.clone();
        self.location = project.location.clone();
        self.completion_date = project.completion_date.clone();
        self.description = project.description.clone();
        self.challenge = project.challenge.clone();
        self.solution = project.solution.clone();
        self.features_text = features_to_text(&project.features);
        self.editable_images = project.images.clone();
        self.image_files.clear();
        self.images_to_delete.clear();
        self.editing_id = Some(project.id.clone());
    }

    /// Clear the form back to its create-mode default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move an editable image from one position to another. Out-of-range
    /// indices leave the list untouched.
    pub fn move_image(&mut self, from: usize, to: usize) {
        move_image(&mut self.editable_images, from, to);
    }

    /// Remove an editable image and queue its stored file for deletion on
    /// submit.
    pub fn queue_removal(&mut self, index: usize) {
        queue_image_removal(&mut self.editable_images, &mut self.images_to_delete, index);
    }

    /// Check the fields that must be present before a submit is attempted.
    /// The id is only required when creating; edits keep the stored id.
    pub fn ensure_required(&self) -> Result<(), CoreError> {
        if self.editing_id.is_none() && self.id.trim().is_empty() {
            return Err(CoreError::Validation(
                "Project id is required".to_string(),
            ));
        }
        let required = [
            ("title", &self.title),
            ("category", &self.category),
            ("client", &self.client),
            ("location", &self.location),
            ("completion date", &self.completion_date),
            ("description", &self.description),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "Missing required field: {label}"
                )));
            }
        }
        Ok(())
    }
}

/// Split the features textarea into individual features: one per line,
/// trimmed, blank lines dropped.
pub fn parse_features(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join stored features back into textarea form.
pub fn features_to_text(features: &[String]) -> String {
    features.join("\n")
}

/// Move `images[from]` to position `to`, shifting the elements in between.
/// Out-of-range indices leave the list untouched.
pub fn move_image(images: &mut Vec<String>, from: usize, to: usize) {
    if from >= images.len() || to >= images.len() {
        return;
    }
    let image = images.remove(from);
    images.insert(to, image);
}

/// Remove `images[index]` and append it to the deletion queue. Out-of-range
/// indices are ignored.
pub fn queue_image_removal(images: &mut Vec<String>, queue: &mut Vec<String>, index: usize) {
    if index >= images.len() {
        return;
    }
    let removed = images.remove(index);
    queue.push(removed);
}

/// Final image list for a submit: the retained stored images in their
/// current order, followed by the freshly uploaded ones in upload order.
pub fn compose_images(retained: &[String], uploaded: Vec<String>) -> Vec<String> {
    let mut images = retained.to_vec();
    images.extend(uploaded);
    images
}

/// First image of a project, or the placeholder when it has none.
pub fn thumbnail_or<'a>(images: &'a [String], placeholder: &'a str) -> &'a str {
    images.first().map(String::as_str).unwrap_or(placeholder)
}
