//! Document picking, single and multi selection.

use crate::types::{FileDescriptor, FilePickOptions, PickerError, PickerResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Platform service that presents the document picker.
#[async_trait]
pub trait FilePickerBackend: Send + Sync {
    /// Present the picker for a single file.
    async fn pick(&self, options: &FilePickOptions) -> PickerResponse<FileDescriptor>;
    /// Present the picker allowing multiple files.
    async fn pick_multiple(&self, options: &FilePickOptions) -> PickerResponse<FileDescriptor>;
}

/// Wrapper over the platform document picker.
pub struct FilePicker {
    backend: Arc<dyn FilePickerBackend>,
}

impl FilePicker {
    pub fn new(backend: Arc<dyn FilePickerBackend>) -> Self {
        Self { backend }
    }

    /// Pick a single file.
    pub async fn pick(&self, options: &FilePickOptions) -> PickerResponse<FileDescriptor> {
        tracing::debug!("Opening document picker (single)");
        self.backend.pick(options).await
    }

    /// Pick one or more files.
    pub async fn pick_multiple(&self, options: &FilePickOptions) -> PickerResponse<FileDescriptor> {
        tracing::debug!("Opening document picker (multiple)");
        self.backend.pick_multiple(options).await
    }

    /// Callback-style single pick. Dismissal resolves as a no-op and is not
    /// forwarded to the error callback.
    pub async fn pick_with<S, E>(&self, options: &FilePickOptions, on_select: S, on_error: E)
    where
        S: FnOnce(Vec<FileDescriptor>),
        E: FnOnce(PickerError),
    {
        self.pick(options).await.deliver(on_select, on_error);
    }

    /// Callback-style multi pick.
    pub async fn pick_multiple_with<S, E>(
        &self,
        options: &FilePickOptions,
        on_select: S,
        on_error: E,
    ) where
        S: FnOnce(Vec<FileDescriptor>),
        E: FnOnce(PickerError),
    {
        self.pick_multiple(options)
            .await
            .deliver(on_select, on_error);
    }
}
