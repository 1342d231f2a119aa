//! Media URL construction
//!
//! Builds URLs against the remote image-resizing CDN from an asset
//! reference of the form `image-<id>-<WxH>-<format>`. No local image
//! processing happens anywhere; crops, resizes and format negotiation
//! are all expressed as query parameters.

use shared::content::image::{Hotspot, ImageRef};

const CDN_BASE: &str = "https://cdn.sanity.io/images";

/// Builder for one image URL
///
/// ```ignore
/// let url = ImageUrlBuilder::new("vef3nzbe", "production")
///     .image(&image)
///     .width(600)
///     .quality(80)
///     .auto_format()
///     .url();
/// ```
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    /// Start a URL for the given image reference
    pub fn image<'a>(&self, image: &'a ImageRef) -> ImageUrl<'a> {
        ImageUrl {
            project_id: self.project_id.clone(),
            dataset: self.dataset.clone(),
            asset_ref: image.asset_ref(),
            hotspot: image.hotspot,
            width: None,
            height: None,
            quality: None,
            blur: None,
            auto_format: false,
        }
    }
}

/// One URL under construction
#[derive(Debug, Clone)]
pub struct ImageUrl<'a> {
    project_id: String,
    dataset: String,
    asset_ref: Option<&'a str>,
    hotspot: Option<Hotspot>,
    width: Option<u32>,
    height: Option<u32>,
    quality: Option<u32>,
    blur: Option<u32>,
    auto_format: bool,
}

impl ImageUrl<'_> {
    pub fn width(mut self, w: u32) -> Self {
        self.width = Some(w);
        self
    }

    pub fn height(mut self, h: u32) -> Self {
        self.height = Some(h);
        self
    }

    pub fn quality(mut self, q: u32) -> Self {
        self.quality = Some(q);
        self
    }

    pub fn blur(mut self, b: u32) -> Self {
        self.blur = Some(b);
        self
    }

    /// Let the CDN negotiate the response format (`auto=format`)
    pub fn auto_format(mut self) -> Self {
        self.auto_format = true;
        self
    }

    /// Low-resolution placeholder variant for progressive loading
    pub fn placeholder(self) -> Self {
        self.width(20).height(15).blur(50)
    }

    /// Final URL; `None` when the reference is absent or malformed
    pub fn url(self) -> Option<String> {
        let filename = parse_asset_ref(self.asset_ref?)?;
        let mut url = format!(
            "{CDN_BASE}/{}/{}/{}",
            self.project_id, self.dataset, filename
        );

        let mut params: Vec<String> = Vec::new();
        if let Some(w) = self.width {
            params.push(format!("w={w}"));
        }
        if let Some(h) = self.height {
            params.push(format!("h={h}"));
        }
        // A focal point only matters when the CDN actually has to crop,
        // which requires both target dimensions.
        if let (Some(_), Some(_), Some(hotspot)) = (self.width, self.height, self.hotspot) {
            params.push("fit=crop".to_string());
            params.push("crop=focalpoint".to_string());
            params.push(format!("fp-x={}", hotspot.x));
            params.push(format!("fp-y={}", hotspot.y));
        }
        if let Some(q) = self.quality {
            params.push(format!("q={q}"));
        }
        if let Some(b) = self.blur {
            params.push(format!("blur={b}"));
        }
        if self.auto_format {
            params.push("auto=format".to_string());
        }

        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }
        Some(url)
    }
}

/// `image-<id>-<WxH>-<fmt>` → `<id>-<WxH>.<fmt>`
fn parse_asset_ref(reference: &str) -> Option<String> {
    let rest = reference.strip_prefix("image-")?;
    let (body, format) = rest.rsplit_once('-')?;
    let (id, dimensions) = body.rsplit_once('-')?;
    if id.is_empty() || format.is_empty() {
        return None;
    }
    // Dimensions are `<width>x<height>`
    let (w, h) = dimensions.split_once('x')?;
    if w.is_empty() || h.is_empty() || !w.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !h.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{id}-{dimensions}.{format}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::content::image::AssetRef;

    fn image(reference: &str) -> ImageRef {
        ImageRef {
            asset: Some(AssetRef {
                reference: reference.to_string(),
            }),
            hotspot: None,
        }
    }

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder::new("vef3nzbe", "production")
    }

    #[test]
    fn parses_asset_reference() {
        assert_eq!(
            parse_asset_ref("image-abc123-800x600-jpg").as_deref(),
            Some("abc123-800x600.jpg")
        );
        assert_eq!(
            parse_asset_ref("image-a1b2c3d4-1920x1080-webp").as_deref(),
            Some("a1b2c3d4-1920x1080.webp")
        );
    }

    #[test]
    fn rejects_malformed_references() {
        assert!(parse_asset_ref("file-abc123-pdf").is_none());
        assert!(parse_asset_ref("image-abc123-jpg").is_none());
        assert!(parse_asset_ref("image-abc123-800x-jpg").is_none());
        assert!(parse_asset_ref("").is_none());
    }

    #[test]
    fn builds_resize_url() {
        let url = builder()
            .image(&image("image-abc123-800x600-jpg"))
            .width(600)
            .quality(80)
            .auto_format()
            .url()
            .unwrap();
        assert_eq!(
            url,
            "https://cdn.sanity.io/images/vef3nzbe/production/abc123-800x600.jpg?w=600&q=80&auto=format"
        );
    }

    #[test]
    fn hotspot_becomes_focalpoint_crop_when_both_dimensions_set() {
        let mut img = image("image-abc123-800x600-jpg");
        img.hotspot = Some(Hotspot {
            x: 0.25,
            y: 0.75,
            width: 0.5,
            height: 0.5,
        });

        let cropped = builder().image(&img).width(400).height(300).url().unwrap();
        assert!(cropped.contains("fit=crop"));
        assert!(cropped.contains("crop=focalpoint"));
        assert!(cropped.contains("fp-x=0.25"));
        assert!(cropped.contains("fp-y=0.75"));

        // Width-only resize never crops, so the focal point is dropped
        let resized = builder().image(&img).width(400).url().unwrap();
        assert!(!resized.contains("fp-x"));
    }

    #[test]
    fn placeholder_is_tiny_and_blurred() {
        let url = builder()
            .image(&image("image-abc123-800x600-jpg"))
            .placeholder()
            .url()
            .unwrap();
        assert!(url.contains("w=20"));
        assert!(url.contains("h=15"));
        assert!(url.contains("blur=50"));
    }

    #[test]
    fn absent_asset_yields_no_url() {
        let img = ImageRef::default();
        assert!(builder().image(&img).width(600).url().is_none());
    }
}
