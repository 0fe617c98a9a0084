//! Unified device media capabilities: camera capture, image library and
//! document picking behind pluggable platform backends, plus concurrent
//! multipart file uploads with fail-fast and best-effort completion policies.

pub mod file_picker;
pub mod file_uploader;
pub mod media_picker;
pub mod provider;
pub mod types;

#[cfg(test)]
mod test_harness;

pub use file_picker::{FilePicker, FilePickerBackend};
pub use file_uploader::{
    CompletionPolicy, FailedUpload, FileUploader, UploadItem, UploadOutcome,
};
pub use media_picker::{MediaPicker, MediaPickerBackend};
pub use provider::CapabilityProvider;
pub use types::{
    CameraDevice, CameraOptions, FileDescriptor, FilePickOptions, LibraryOptions, MediaAsset,
    MediaType, PickerError, PickerResponse, UploadSource,
};
