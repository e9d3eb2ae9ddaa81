//! Uploaded file references

use serde::Deserialize;
use serde::Serialize;
use url::Url;

/// A file already uploaded to the file host.
///
/// The upload itself happens elsewhere; records keep the metadata the form
/// collected (`{name, size, type, url}`). Older records hold a bare URL
/// string, which deserializes with the other fields empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "AttachmentRepr")]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// MIME type as reported by the browser.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    pub url: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AttachmentRepr {
    Url(String),
    Object {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        size: Option<u64>,
        #[serde(default, rename = "type")]
        mime: Option<String>,
        url: String,
    },
}

impl From<AttachmentRepr> for Attachment {
    fn from(repr: AttachmentRepr) -> Self {
        match repr {
            AttachmentRepr::Url(url) => Attachment::new(url),
            AttachmentRepr::Object {
                name,
                size,
                mime,
                url,
            } => Attachment {
                name,
                size,
                mime,
                url,
            },
        }
    }
}

impl Attachment {
    /// Attachment known only by its URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Uploaded name, or the last path segment of the URL.
    pub fn file_name(&self) -> Option<String> {
        if let Some(name) = self.name.as_ref().filter(|n| !n.is_empty()) {
            return Some(name.clone());
        }
        let url = Url::parse(&self.url).ok()?;
        url.path_segments()?
            .filter(|s| !s.is_empty())
            .next_back()
            .map(|s| s.to_string())
    }

    /// Whether the file is an image, by MIME type or else by extension.
    pub fn is_image(&self) -> bool {
        if let Some(mime) = &self.mime {
            return mime.starts_with("image/");
        }
        self.file_name().is_some_and(|name| {
            let lower = name.to_lowercase();
            [".png", ".jpg", ".jpeg", ".gif", ".webp", ".svg"]
                .iter()
                .any(|ext| lower.ends_with(ext))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        let a = Attachment::new("https://utfs.io/f/abc123/factura.pdf");
        assert_eq!(a.file_name().as_deref(), Some("factura.pdf"));
        assert!(!a.is_image());
        assert!(Attachment::new("https://utfs.io/f/logo.PNG").is_image());
        assert_eq!(Attachment::new("not a url").file_name(), None);
    }

    #[test]
    fn test_object_form_round_trips() {
        let json = r#"{"name":"foto.jpg","size":2048,"type":"image/jpeg","url":"https://utfs.io/f/k1"}"#;
        let a: Attachment = serde_json::from_str(json).unwrap();
        assert_eq!(a.file_name().as_deref(), Some("foto.jpg"));
        assert_eq!(a.size, Some(2048));
        assert!(a.is_image());

        let back = serde_json::to_value(&a).unwrap();
        assert_eq!(back["type"], "image/jpeg");
        assert_eq!(back["url"], "https://utfs.io/f/k1");
    }

    #[test]
    fn test_bare_url_still_accepted() {
        let a: Attachment = serde_json::from_str(r#""https://utfs.io/f/a.pdf""#).unwrap();
        assert_eq!(a, Attachment::new("https://utfs.io/f/a.pdf"));
    }
}
