//! Payload to view mapping
//!
//! Decides which sections a view has. A category that is absent from the
//! stock payload gets no section at all; one that is present but empty or
//! malformed gets a section with placeholder text.

use crate::api::{GeneratedImage, StockSnapshot};
use crate::config::CategoryCaps;
use stockcard_core::{Color, FailureReason, ViewSpec, format_category};
use url::Url;

/// Title of the stock view
pub const STOCK_TITLE: &str = "🛒 Shop Stock";

/// Title of the image view
pub const IMAGE_TITLE: &str = "🖼️ Generated Image";

/// Build the stock view: one section per present category
pub fn stock_view_spec(snapshot: &StockSnapshot, caps: &CategoryCaps, accent: Color) -> ViewSpec {
    snapshot
        .present()
        .fold(ViewSpec::new(STOCK_TITLE, accent), |spec, (category, data)| {
            spec.with_section(
                category.heading(),
                format_category(data.records(), caps.cap(category)),
            )
        })
}

/// Build the image view: a single details section, the image and a link to it
///
/// Fails when the reported image URL is not an http(s) URL.
pub fn image_view_spec(
    image: &GeneratedImage,
    accent: Color,
) -> Result<ViewSpec, FailureReason> {
    let url = Url::parse(&image.image_url)
        .map_err(|e| FailureReason::malformed(format!("invalid imageUrl: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FailureReason::malformed(format!(
            "imageUrl must be http(s), got {}",
            url.scheme()
        )));
    }

    let mut details = vec![format!("**Prompt:** {}", image.prompt)];
    if let Some(id) = &image.id {
        details.push(format!("**ID:** {id}"));
    }
    if let Some(status) = &image.status {
        details.push(format!("**Status:** {status}"));
    }
    if let Some(duration) = &image.duration {
        details.push(format!("**Duration:** {duration}"));
    }

    Ok(ViewSpec::new(IMAGE_TITLE, accent)
        .with_section("Details", details.join("\n"))
        .with_image(image.image_url.clone())
        .with_link("Open Image", image.image_url.clone())
        .with_footer("Image generation"))
}
