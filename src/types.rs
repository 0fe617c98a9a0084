//! Shared types for the picker and upload surfaces.
//!
//! Asset descriptors mirror the platform picker payloads field-for-field
//! (camelCase on the wire, `type` for the MIME string). The two descriptor
//! shapes are merged into [`UploadSource`] through explicit `From` mappings
//! rather than duck-typing.

use serde::{Deserialize, Serialize};

/// Media asset returned by the camera or the image library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    pub uri: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// File selected through the document picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    pub uri: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Unified upload payload: the uri/type/filename triple both picker
/// capabilities can produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSource {
    pub uri: String,
    pub mime_type: String,
    pub file_name: String,
}

impl From<MediaAsset> for UploadSource {
    fn from(asset: MediaAsset) -> Self {
        Self {
            uri: asset.uri,
            mime_type: asset.mime_type,
            file_name: asset.file_name,
        }
    }
}

impl From<FileDescriptor> for UploadSource {
    fn from(file: FileDescriptor) -> Self {
        Self {
            uri: file.uri,
            mime_type: file.mime_type,
            file_name: file.name,
        }
    }
}

/// Error reported by a platform picker backend.
///
/// The code and message come from the platform and are forwarded to callers
/// unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerError {
    pub code: String,
    pub message: String,
}

impl PickerError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for PickerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Outcome of a single picker launch.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerResponse<T> {
    /// The user selected one or more items.
    Selected(Vec<T>),
    /// The user dismissed the picker without selecting anything.
    Cancelled,
    /// The platform reported an error.
    Failed(PickerError),
}

impl<T> PickerResponse<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PickerResponse::Cancelled)
    }

    /// Get the selected items if any, None otherwise.
    pub fn selected(&self) -> Option<&[T]> {
        match self {
            PickerResponse::Selected(items) => Some(items),
            _ => None,
        }
    }

    /// Get the error if the launch failed, None otherwise.
    pub fn error(&self) -> Option<&PickerError> {
        match self {
            PickerResponse::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Route the response to the matching callback.
    ///
    /// Dismissal invokes neither callback; errors reach `on_error` with the
    /// platform code and message unmodified.
    pub fn deliver<S, E>(self, on_select: S, on_error: E)
    where
        S: FnOnce(Vec<T>),
        E: FnOnce(PickerError),
    {
        match self {
            PickerResponse::Selected(items) => on_select(items),
            PickerResponse::Cancelled => {
                tracing::debug!("Picker dismissed by user");
            }
            PickerResponse::Failed(err) => {
                tracing::debug!("Picker error {}: {}", err.code, err.message);
                on_error(err);
            }
        }
    }
}

/// Kind of media a picker launch should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
    Mixed,
}

/// Which physical camera to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraDevice {
    Back,
    Front,
}

/// Options for a camera capture launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraOptions {
    pub media_type: MediaType,
    pub camera_device: CameraDevice,
    /// Compression quality in 0.0..=1.0, None for the platform default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<f32>,
    pub save_to_photos: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            media_type: MediaType::Photo,
            camera_device: CameraDevice::Back,
            quality: None,
            save_to_photos: false,
        }
    }
}

/// Options for an image library launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryOptions {
    pub media_type: MediaType,
    /// Maximum number of selectable items, 0 for no limit.
    pub selection_limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<f32>,
}

impl Default for LibraryOptions {
    fn default() -> Self {
        Self {
            media_type: MediaType::Photo,
            selection_limit: 1,
            quality: None,
        }
    }
}

/// Options for a document picker launch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePickOptions {
    /// MIME types the picker should offer, empty for any.
    pub allowed_types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_asset() -> MediaAsset {
        MediaAsset {
            uri: "file:///tmp/photo.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            file_name: "photo.jpg".to_string(),
            file_size: Some(2048),
            width: Some(1920),
            height: Some(1080),
        }
    }

    #[test]
    fn test_media_asset_serialize() {
        let json = serde_json::to_string(&sample_asset()).unwrap();
        assert!(json.contains(r#""type":"image/jpeg""#));
        assert!(json.contains(r#""fileName":"photo.jpg""#));
        assert!(json.contains(r#""fileSize":2048"#));
    }

    #[test]
    fn test_media_asset_deserialize_minimal() {
        let json = r#"{"uri":"file:///tmp/a.png","type":"image/png","fileName":"a.png"}"#;
        let asset: MediaAsset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.mime_type, "image/png");
        assert_eq!(asset.file_size, None);
        assert_eq!(asset.width, None);
    }

    #[test]
    fn test_file_descriptor_deserialize() {
        let json = r#"{"uri":"file:///tmp/report.pdf","type":"application/pdf","name":"report.pdf","size":9000}"#;
        let file: FileDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(file.name, "report.pdf");
        assert_eq!(file.size, Some(9000));
    }

    #[test]
    fn test_upload_source_from_media_asset() {
        let source = UploadSource::from(sample_asset());
        assert_eq!(source.uri, "file:///tmp/photo.jpg");
        assert_eq!(source.mime_type, "image/jpeg");
        assert_eq!(source.file_name, "photo.jpg");
    }

    #[test]
    fn test_upload_source_from_file_descriptor() {
        let file = FileDescriptor {
            uri: "file:///tmp/report.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            name: "report.pdf".to_string(),
            size: None,
        };
        let source = UploadSource::from(file);
        assert_eq!(source.file_name, "report.pdf");
        assert_eq!(source.mime_type, "application/pdf");
    }

    #[test]
    fn test_picker_error_display() {
        let err = PickerError::new("camera_unavailable", "Camera not available on this device");
        assert_eq!(
            err.to_string(),
            "camera_unavailable: Camera not available on this device"
        );
    }

    #[test]
    fn test_picker_response_helpers() {
        let selected: PickerResponse<MediaAsset> = PickerResponse::Selected(vec![sample_asset()]);
        assert_eq!(selected.selected().map(|s| s.len()), Some(1));
        assert!(selected.error().is_none());

        let cancelled: PickerResponse<MediaAsset> = PickerResponse::Cancelled;
        assert!(cancelled.is_cancelled());
        assert!(cancelled.selected().is_none());

        let failed: PickerResponse<MediaAsset> =
            PickerResponse::Failed(PickerError::new("permission", "Permission denied"));
        assert_eq!(failed.error().unwrap().code, "permission");
    }

    #[test]
    fn test_deliver_selected_invokes_only_select() {
        let mut selected_count = None;
        let mut errored = false;
        let response: PickerResponse<MediaAsset> = PickerResponse::Selected(vec![sample_asset()]);
        response.deliver(
            |assets| selected_count = Some(assets.len()),
            |_| errored = true,
        );
        assert_eq!(selected_count, Some(1));
        assert!(!errored);
    }

    #[test]
    fn test_deliver_cancelled_invokes_neither() {
        let mut selected = false;
        let mut errored = false;
        let response: PickerResponse<MediaAsset> = PickerResponse::Cancelled;
        response.deliver(|_| selected = true, |_| errored = true);
        assert!(!selected);
        assert!(!errored);
    }

    #[test]
    fn test_deliver_error_forwards_verbatim() {
        let mut received = None;
        let response: PickerResponse<MediaAsset> =
            PickerResponse::Failed(PickerError::new("E_NO_LIBRARY", "Photo library unavailable"));
        response.deliver(|_| {}, |err| received = Some(err));
        let err = received.expect("error callback not invoked");
        assert_eq!(err.code, "E_NO_LIBRARY");
        assert_eq!(err.message, "Photo library unavailable");
    }

    #[test]
    fn test_camera_options_default() {
        let options = CameraOptions::default();
        assert_eq!(options.media_type, MediaType::Photo);
        assert_eq!(options.camera_device, CameraDevice::Back);
        assert_eq!(options.quality, None);
        assert!(!options.save_to_photos);
    }

    #[test]
    fn test_library_options_default_selection_limit() {
        assert_eq!(LibraryOptions::default().selection_limit, 1);
    }

    #[test]
    fn test_options_serialize_camel_case() {
        let json = serde_json::to_string(&LibraryOptions::default()).unwrap();
        assert!(json.contains(r#""mediaType":"photo""#));
        assert!(json.contains(r#""selectionLimit":1"#));

        let json = serde_json::to_string(&CameraOptions::default()).unwrap();
        assert!(json.contains(r#""cameraDevice":"back""#));
        assert!(json.contains(r#""saveToPhotos":false"#));
    }
}
