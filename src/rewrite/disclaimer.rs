//! Disclaimer banner injection for per-issue news pages.

/// Substring the banner is spliced after.
pub const BODY_MARKER: &str = r#"<body style="display:none;">"#;

/// The banner itself, placed on a new line after [`BODY_MARKER`].
pub const DISCLAIMER_HTML: &str = r#"
<div style="position:fixed;z-index:1000;bottom:10px;right:10px;padding:5px;background:white;">
<i><strong>Disclaimer</strong>: <a href="https://github.com/protolambda/consensuslayernews" target="_blank">this</a>
is a parody by <a href="https://twitter.com/protolambda" target="_blank">@protolambda</a>
of <a href="https://eth2.news" target="_blank">eth2.news</a>,<br/>
renaming "eth2" to "consensus-layer" and "eth1" to "execution-layer"</i></div>"#;

/// Splice the disclaimer right after the first body marker.
///
/// Plain substring match; pages without the marker are returned unchanged.
pub fn inject_disclaimer(body: &str) -> String {
    match body.find(BODY_MARKER) {
        Some(pos) => {
            let split = pos + BODY_MARKER.len();
            let mut out = String::with_capacity(body.len() + DISCLAIMER_HTML.len());
            out.push_str(&body[..split]);
            out.push_str(DISCLAIMER_HTML);
            out.push_str(&body[split..]);
            out
        }
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injects_after_marker() {
        let page = r#"<html><body style="display:none;"><p>news</p></body></html>"#;
        let out = inject_disclaimer(page);

        let expected = format!(r#"<html>{}{}<p>news</p></body></html>"#, BODY_MARKER, DISCLAIMER_HTML);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_missing_marker_leaves_page_alone() {
        let page = "<html><body><p>news</p></body></html>";
        assert_eq!(inject_disclaimer(page), page);
    }

    #[test]
    fn test_injects_once_with_repeated_marker() {
        let page = format!("{}a{}b", BODY_MARKER, BODY_MARKER);
        let out = inject_disclaimer(&page);
        assert_eq!(out.matches(DISCLAIMER_HTML).count(), 1);
        assert!(out.starts_with(&format!("{}{}", BODY_MARKER, DISCLAIMER_HTML)));
    }
}
