//! Camera capture and image library picking.
//!
//! The platform picker UI lives behind [`MediaPickerBackend`]; this module
//! only normalizes its responses. Both future-style calls and callback
//! adapters are exposed, with the same semantics: dismissal is swallowed,
//! platform errors are forwarded verbatim.

use crate::types::{CameraOptions, LibraryOptions, MediaAsset, PickerError, PickerResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Platform service that presents the camera or the image library.
#[async_trait]
pub trait MediaPickerBackend: Send + Sync {
    async fn launch_camera(&self, options: &CameraOptions) -> PickerResponse<MediaAsset>;
    async fn launch_image_library(&self, options: &LibraryOptions) -> PickerResponse<MediaAsset>;
}

/// Wrapper over the platform media picker.
pub struct MediaPicker {
    backend: Arc<dyn MediaPickerBackend>,
}

impl MediaPicker {
    pub fn new(backend: Arc<dyn MediaPickerBackend>) -> Self {
        Self { backend }
    }

    /// Open the camera and wait for the user's capture.
    pub async fn open_camera(&self, options: &CameraOptions) -> PickerResponse<MediaAsset> {
        tracing::debug!("Opening camera ({:?})", options.camera_device);
        self.backend.launch_camera(options).await
    }

    /// Open the image library and wait for the user's selection.
    pub async fn open_image_library(&self, options: &LibraryOptions) -> PickerResponse<MediaAsset> {
        tracing::debug!(
            "Opening image library (limit: {})",
            options.selection_limit
        );
        self.backend.launch_image_library(options).await
    }

    /// Callback-style camera launch.
    ///
    /// `on_select` receives the captured assets; `on_error` receives the
    /// platform error unmodified. Dismissal invokes neither.
    pub async fn open_camera_with<S, E>(&self, options: &CameraOptions, on_select: S, on_error: E)
    where
        S: FnOnce(Vec<MediaAsset>),
        E: FnOnce(PickerError),
    {
        self.open_camera(options).await.deliver(on_select, on_error);
    }

    /// Callback-style image library launch.
    pub async fn open_image_library_with<S, E>(
        &self,
        options: &LibraryOptions,
        on_select: S,
        on_error: E,
    ) where
        S: FnOnce(Vec<MediaAsset>),
        E: FnOnce(PickerError),
    {
        self.open_image_library(options)
            .await
            .deliver(on_select, on_error);
    }
}
