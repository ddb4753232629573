//! Image URL derivation for assets stored alongside documents.

use serde::Deserialize;

use crate::config::ContentConfig;

/// Image field as stored in a document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ImageRef {
    #[serde(default)]
    pub asset: Option<AssetRef>,
}

/// Asset pointer inside an image field. Either a reference id or, when the
/// query dereferenced it, a direct URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct AssetRef {
    #[serde(rename = "_ref", default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ImageRef {
    pub fn from_reference(reference: &str) -> Self {
        Self {
            asset: Some(AssetRef {
                reference: Some(reference.to_string()),
                url: None,
            }),
        }
    }
}

/// Builds sized image URLs for the configured project and dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    host: String,
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    pub fn new(host: &str, project_id: &str, dataset: &str) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            dataset: dataset.to_string(),
        }
    }

    pub fn from_config(config: &ContentConfig) -> Self {
        Self::new(&config.image_host, &config.project_id, &config.dataset)
    }

    /// Resolve `image` to a URL sized `width` x `height`.
    ///
    /// Returns `None` when the field carries neither a direct URL nor a
    /// well-formed `image-<id>-<W>x<H>-<ext>` reference.
    pub fn url(&self, image: &ImageRef, width: u32, height: u32) -> Option<String> {
        let asset = image.asset.as_ref()?;

        if let Some(url) = asset.url.as_deref().filter(|u| !u.is_empty()) {
            let separator = if url.contains('?') { '&' } else { '?' };
            return Some(format!("{url}{separator}w={width}&h={height}"));
        }

        let (file_id, ext) = parse_reference(asset.reference.as_deref()?)?;
        Some(format!(
            "{}/images/{}/{}/{}.{}?w={}&h={}",
            self.host, self.project_id, self.dataset, file_id, ext, width, height
        ))
    }
}

/// Split `image-<id>-<W>x<H>-<ext>` into (`<id>-<W>x<H>`, `<ext>`).
fn parse_reference(reference: &str) -> Option<(&str, &str)> {
    let rest = reference.strip_prefix("image-")?;
    let (file_id, ext) = rest.rsplit_once('-')?;
    let (_, dimensions) = file_id.rsplit_once('-')?;
    let (w, h) = dimensions.split_once('x')?;
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !numeric(w) || !numeric(h) || ext.is_empty() {
        return None;
    }
    Some((file_id, ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder::new("https://cdn.sanity.io/", "abc123", "production")
    }

    #[test]
    fn derives_url_from_reference() {
        let image = ImageRef::from_reference("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg");
        assert_eq!(
            builder().url(&image, 600, 400).as_deref(),
            Some(
                "https://cdn.sanity.io/images/abc123/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg?w=600&h=400"
            )
        );
    }

    #[test]
    fn direct_url_gets_size_parameters() {
        let image = ImageRef {
            asset: Some(AssetRef {
                reference: None,
                url: Some("https://cdn.example.com/a.png".into()),
            }),
        };
        assert_eq!(
            builder().url(&image, 400, 400).as_deref(),
            Some("https://cdn.example.com/a.png?w=400&h=400")
        );
    }

    #[test]
    fn malformed_reference_yields_none() {
        assert_eq!(builder().url(&ImageRef::from_reference("file-abc-pdf"), 1, 1), None);
        assert_eq!(builder().url(&ImageRef::from_reference("image-abc-axb-png"), 1, 1), None);
        assert_eq!(builder().url(&ImageRef::default(), 1, 1), None);
    }
}
