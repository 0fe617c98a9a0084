//! The three device capabilities as one explicitly-constructed value.
//!
//! A `CapabilityProvider` is built once at startup from the platform backends
//! and passed to consumers, instead of a module-level singleton.

use crate::file_picker::{FilePicker, FilePickerBackend};
use crate::file_uploader::{CompletionPolicy, FileUploader, UploadItem, UploadOutcome};
use crate::media_picker::{MediaPicker, MediaPickerBackend};
use crate::types::{
    CameraOptions, FileDescriptor, FilePickOptions, LibraryOptions, MediaAsset, PickerResponse,
};
use std::sync::Arc;

/// Unified access to camera capture, image/file picking, and file upload.
pub struct CapabilityProvider {
    media: MediaPicker,
    files: FilePicker,
    uploader: FileUploader,
}

impl CapabilityProvider {
    /// Wire the provider from the two platform backends with a default
    /// uploader.
    pub fn new(
        media_backend: Arc<dyn MediaPickerBackend>,
        file_backend: Arc<dyn FilePickerBackend>,
    ) -> Self {
        Self::with_uploader(media_backend, file_backend, FileUploader::new())
    }

    /// Wire the provider with a caller-built uploader.
    pub fn with_uploader(
        media_backend: Arc<dyn MediaPickerBackend>,
        file_backend: Arc<dyn FilePickerBackend>,
        uploader: FileUploader,
    ) -> Self {
        Self {
            media: MediaPicker::new(media_backend),
            files: FilePicker::new(file_backend),
            uploader,
        }
    }

    pub fn media(&self) -> &MediaPicker {
        &self.media
    }

    pub fn files(&self) -> &FilePicker {
        &self.files
    }

    pub fn uploader(&self) -> &FileUploader {
        &self.uploader
    }

    /// Open the camera.
    pub async fn open_camera(&self, options: &CameraOptions) -> PickerResponse<MediaAsset> {
        self.media.open_camera(options).await
    }

    /// Open the image library.
    pub async fn open_image_library(&self, options: &LibraryOptions) -> PickerResponse<MediaAsset> {
        self.media.open_image_library(options).await
    }

    /// Pick a single document.
    pub async fn pick_file(&self, options: &FilePickOptions) -> PickerResponse<FileDescriptor> {
        self.files.pick(options).await
    }

    /// Pick one or more documents.
    pub async fn pick_files(&self, options: &FilePickOptions) -> PickerResponse<FileDescriptor> {
        self.files.pick_multiple(options).await
    }

    /// Upload a batch of files per the completion policy.
    pub async fn upload(&self, items: &[UploadItem], policy: CompletionPolicy) -> UploadOutcome {
        self.uploader.upload(items, policy).await
    }
}
