//! WooCommerce detection.
//!
//! Kept outside the generic catalogue because it combines three evidence
//! kinds with a count threshold and a cart-element check, then feeds the
//! same plugin list as everything else.

use crate::config::CLASS_COUNT_THRESHOLD;
use crate::detect::version::ver_query_param;
use crate::models::PluginMatch;
use crate::page::PageDocument;

const COMMERCE_URL_MARKER: &str = "woocommerce";
const COMMERCE_CLASS_MARKERS: [&str; 2] = ["woocommerce", "wc-"];
const CART_CLASS_TOKENS: [&str; 2] = ["cart-contents", "shopping-cart"];

/// Detects an active WooCommerce install.
///
/// Positive when any script/link URL carries the marker, more than
/// `CLASS_COUNT_THRESHOLD` elements carry a commerce class, or a cart
/// indicator element exists. The returned `PluginMatch` has a version only
/// when a versioned woocommerce script was found.
pub(crate) fn detect_commerce(page: &PageDocument) -> Option<PluginMatch> {
    let url_hit = page.any_resource_contains(COMMERCE_URL_MARKER);
    let class_hit = page.count_class_contains_any(&COMMERCE_CLASS_MARKERS) > CLASS_COUNT_THRESHOLD;
    let cart_hit = CART_CLASS_TOKENS
        .iter()
        .any(|token| page.has_class_token(token));

    if !(url_hit || class_hit || cart_hit) {
        return None;
    }

    let version = page
        .script_srcs()
        .iter()
        .filter(|src| src.contains(COMMERCE_URL_MARKER))
        .find_map(|src| ver_query_param(src));

    Some(PluginMatch {
        name: "WooCommerce".to_string(),
        slug: "woocommerce".to_string(),
        version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn doc(html: &str) -> PageDocument {
        PageDocument::parse(Url::parse("https://example.com/").expect("test url"), html)
    }

    #[test]
    fn test_script_url_marker_with_version() {
        let page = doc(r#"
            <script src="/wp-content/plugins/woocommerce/assets/js/frontend/cart.min.js?ver=8.5.2"></script>
        "#);
        let plugin = detect_commerce(&page).expect("commerce detected");
        assert_eq!(plugin.slug, "woocommerce");
        assert_eq!(plugin.version.as_deref(), Some("8.5.2"));
    }

    #[test]
    fn test_link_marker_without_versioned_script() {
        let page = doc(r#"<link rel="stylesheet" href="/wp-content/plugins/woocommerce/style.css">"#);
        let plugin = detect_commerce(&page).expect("commerce detected");
        assert_eq!(plugin.version, None);
    }

    #[test]
    fn test_class_count_threshold_is_strict() {
        // Exactly five commerce-classed elements is not enough
        let five = doc(&r#"<div class="wc-item"></div>"#.repeat(5));
        assert!(detect_commerce(&five).is_none());

        let six = doc(&r#"<div class="wc-item"></div>"#.repeat(6));
        assert!(detect_commerce(&six).is_some());
    }

    #[test]
    fn test_cart_indicator_element() {
        let page = doc(r#"<a class="cart-contents" href="/cart">Cart</a>"#);
        assert!(detect_commerce(&page).is_some());

        let page = doc(r#"<div class="shopping-cart"></div>"#);
        assert!(detect_commerce(&page).is_some());
    }

    #[test]
    fn test_no_commerce_evidence() {
        let page = doc("<html><body><p>a blog</p></body></html>");
        assert!(detect_commerce(&page).is_none());
    }
}
