//! Gallery URL helpers
//!
//! Gallery pages look like `https://e-hentai.org/g/{gid}/{token}/`,
//! single image pages like `https://e-hentai.org/s/{image_token}/{gid}-{page}`.

use url::Url;

use crate::types::GalleryHost;

/// Minimum number of path segments of a gallery or image page URL
pub const MIN_GALLERY_PATH_SEGMENTS: usize = 3;

/// Non-empty path segments of a URL
fn segments(url: &Url) -> Vec<&str> {
    url.path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}

/// Parse a URL if it is long enough to point at a gallery or image page
pub fn parse_gallery_link(link: &str) -> Option<Url> {
    let url = Url::parse(link).ok()?;
    if segments(&url).len() < MIN_GALLERY_PATH_SEGMENTS {
        log::debug!("Link has too few path segments: {}", link);
        return None;
    }
    Some(url)
}

/// Extract the gallery id from a gallery page or image page URL
pub fn parse_gid(url: &Url, is_gallery_url: bool) -> Option<String> {
    let segments = segments(url);
    let gid = if is_gallery_url {
        segments.get(1).copied()
    } else {
        segments
            .get(2)
            .and_then(|segment| segment.split('-').next())
    }?;
    if gid.is_empty() {
        None
    } else {
        Some(gid.to_string())
    }
}

/// Detail page `page` of a gallery
pub fn detail_page_url(gallery_url: &str, page: u32) -> String {
    format!("{}?p={}", gallery_url, page)
}

/// Rewrite links of either mirror to point at the selected host
pub fn redirect_to_host(link: &str, host: GalleryHost) -> String {
    let target = host.domain();
    [GalleryHost::EHentai, GalleryHost::ExHentai]
        .iter()
        .map(GalleryHost::domain)
        .filter(|domain| *domain != target)
        .fold(link.to_string(), |link, domain| link.replace(domain, target))
}

/// Whether a thumbnail URL points at the multi-page viewer
pub fn is_mpv_url(link: &str) -> bool {
    Url::parse(link)
        .ok()
        .map(|url| segments(&url).first().copied() == Some("mpv"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gallery_link_requires_segments() {
        assert!(parse_gallery_link("https://e-hentai.org/g/123/abc/").is_some());
        assert!(parse_gallery_link("https://e-hentai.org/g/123").is_none());
        assert!(parse_gallery_link("not a url").is_none());
    }

    #[test]
    fn test_parse_gid_from_gallery_url() {
        let url = Url::parse("https://e-hentai.org/g/1234567/0a1b2c3d4e/").unwrap();
        assert_eq!(parse_gid(&url, true), Some("1234567".to_string()));
    }

    #[test]
    fn test_parse_gid_from_image_url() {
        let url = Url::parse("https://e-hentai.org/s/9f8e7d6c5b/1234567-12").unwrap();
        assert_eq!(parse_gid(&url, false), Some("1234567".to_string()));
    }

    #[test]
    fn test_detail_page_url() {
        assert_eq!(
            detail_page_url("https://e-hentai.org/g/1/a/", 2),
            "https://e-hentai.org/g/1/a/?p=2"
        );
    }

    #[test]
    fn test_redirect_to_host() {
        assert_eq!(
            redirect_to_host("https://e-hentai.org/g/1/a/", GalleryHost::ExHentai),
            "https://exhentai.org/g/1/a/"
        );
        assert_eq!(
            redirect_to_host("https://exhentai.org/g/1/a/", GalleryHost::EHentai),
            "https://e-hentai.org/g/1/a/"
        );
    }

    #[test]
    fn test_is_mpv_url() {
        assert!(is_mpv_url("https://e-hentai.org/mpv/1/a/#page1"));
        assert!(!is_mpv_url("https://e-hentai.org/s/abc/1-1"));
        assert!(!is_mpv_url(""));
    }
}
