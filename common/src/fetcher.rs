//! The image-list fetcher as the UI sees it: a value, or nothing plus one diagnostic line.

use crate::{api::traits::ImageListAPI, diagnostics::DiagnosticSink, types::ImageList};

/// Fetches the image list. Failures are reported once to `sink` and come back as `None`.
///
/// Use [`ImageListAPI::image_list`] directly when the failure itself matters.
pub async fn get_images<A, S>(api: &A, sink: &S) -> Option<ImageList>
where
    A: ImageListAPI,
    S: DiagnosticSink + ?Sized,
{
    match api.image_list().await {
        Ok(list) => Some(list),
        Err(e) => {
            sink.error(&e.to_string());
            None
        }
    }
}
