//! Page evidence extraction.
//!
//! The detectors never touch the HTML parser directly. Instead the fetched
//! markup is parsed once and distilled into a [`PageDocument`]: resolved
//! resource URLs, meta tags, per-element class/id hooks, and the raw markup
//! text. Everything downstream is substring matching over this evidence.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("link[href]").expect("static selector"));
static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("script[src]").expect("static selector"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector"));
static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta").expect("static selector"));
static HOOK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[class], [id]").expect("static selector"));

/// A `<meta>` tag's name/content pair. Names are lowercased at extraction.
#[derive(Debug, Clone)]
pub struct MetaTag {
    /// The `name` attribute, lowercased.
    pub name: String,
    /// The `content` attribute, verbatim.
    pub content: String,
}

/// Class and id attributes of one element, kept together so detections that
/// count elements (rather than attributes) count each element once.
#[derive(Debug, Clone)]
struct ElementHooks {
    class_attr: Option<String>,
    id_attr: Option<String>,
}

/// The evidence extracted from one fetched page.
///
/// Built once per detection run and read-only afterwards. Relative resource
/// URLs are resolved against the page URL, mirroring what a live DOM exposes
/// through `href`/`src` properties.
#[derive(Debug)]
pub struct PageDocument {
    url: Url,
    raw_html: String,
    link_hrefs: Vec<String>,
    script_srcs: Vec<String>,
    anchor_hrefs: Vec<String>,
    metas: Vec<MetaTag>,
    hooks: Vec<ElementHooks>,
}

impl PageDocument {
    /// Parses markup fetched from `url` and extracts all detection evidence.
    pub fn parse(url: Url, body: &str) -> Self {
        let document = Html::parse_document(body);

        let resolve = |raw: &str| -> String {
            url.join(raw)
                .map(|joined| joined.to_string())
                .unwrap_or_else(|_| raw.to_string())
        };

        let link_hrefs: Vec<String> = document
            .select(&LINK_SELECTOR)
            .filter_map(|el| el.value().attr("href"))
            .map(resolve)
            .collect();

        let script_srcs: Vec<String> = document
            .select(&SCRIPT_SELECTOR)
            .filter_map(|el| el.value().attr("src"))
            .map(resolve)
            .collect();

        let anchor_hrefs: Vec<String> = document
            .select(&ANCHOR_SELECTOR)
            .filter_map(|el| el.value().attr("href"))
            .map(resolve)
            .collect();

        let metas: Vec<MetaTag> = document
            .select(&META_SELECTOR)
            .filter_map(|el| {
                let name = el.value().attr("name")?;
                let content = el.value().attr("content")?;
                Some(MetaTag {
                    name: name.to_lowercase(),
                    content: content.to_string(),
                })
            })
            .collect();

        let hooks: Vec<ElementHooks> = document
            .select(&HOOK_SELECTOR)
            .map(|el| ElementHooks {
                class_attr: el.value().attr("class").map(String::from),
                id_attr: el.value().attr("id").map(String::from),
            })
            .collect();

        log::debug!(
            "Extracted evidence from {}: {} links, {} scripts, {} anchors, {} metas, {} class/id hooks",
            url,
            link_hrefs.len(),
            script_srcs.len(),
            anchor_hrefs.len(),
            metas.len(),
            hooks.len()
        );

        Self {
            url,
            raw_html: body.to_string(),
            link_hrefs,
            script_srcs,
            anchor_hrefs,
            metas,
            hooks,
        }
    }

    /// The page URL the evidence was resolved against.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The page hostname, or an empty string for hostless URLs.
    pub fn hostname(&self) -> &str {
        self.url.host_str().unwrap_or("")
    }

    /// The raw markup text, unparsed.
    pub fn raw_html(&self) -> &str {
        &self.raw_html
    }

    /// Resolved `<link href>` values in document order.
    pub fn link_hrefs(&self) -> &[String] {
        &self.link_hrefs
    }

    /// Resolved `<script src>` values in document order.
    pub fn script_srcs(&self) -> &[String] {
        &self.script_srcs
    }

    /// Resolved `<a href>` values in document order.
    pub fn anchor_hrefs(&self) -> &[String] {
        &self.anchor_hrefs
    }

    /// Contents of every `<meta name="generator">` tag, in document order.
    pub fn generator_contents(&self) -> impl Iterator<Item = &str> {
        self.metas
            .iter()
            .filter(|m| m.name == "generator")
            .map(|m| m.content.as_str())
    }

    /// Content of the first `<meta>` with the given (lowercase) name.
    pub fn meta_content(&self, name: &str) -> Option<&str> {
        self.metas
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.content.as_str())
    }

    /// Whether any `<meta>` with the given (lowercase) name exists.
    pub fn has_meta(&self, name: &str) -> bool {
        self.metas.iter().any(|m| m.name == name)
    }

    /// Whether any script src or link href contains `needle`.
    pub fn any_resource_contains(&self, needle: &str) -> bool {
        self.script_srcs.iter().any(|s| s.contains(needle))
            || self.link_hrefs.iter().any(|h| h.contains(needle))
    }

    /// Whether any element's class attribute contains `needle`.
    pub fn any_class_contains(&self, needle: &str) -> bool {
        self.hooks
            .iter()
            .filter_map(|h| h.class_attr.as_deref())
            .any(|c| c.contains(needle))
    }

    /// Number of elements whose class attribute contains any of `needles`.
    /// An element matching several needles is counted once.
    pub fn count_class_contains_any(&self, needles: &[&str]) -> usize {
        self.hooks
            .iter()
            .filter_map(|h| h.class_attr.as_deref())
            .filter(|c| needles.iter().any(|n| c.contains(n)))
            .count()
    }

    /// Number of elements whose class attribute contains any of
    /// `class_needles` or whose id attribute contains any of `id_needles`.
    /// Each element is counted at most once.
    pub fn count_hooks_matching(&self, class_needles: &[&str], id_needles: &[&str]) -> usize {
        self.hooks
            .iter()
            .filter(|h| {
                let class_hit = h
                    .class_attr
                    .as_deref()
                    .is_some_and(|c| class_needles.iter().any(|n| c.contains(n)));
                let id_hit = h
                    .id_attr
                    .as_deref()
                    .is_some_and(|i| id_needles.iter().any(|n| i.contains(n)));
                class_hit || id_hit
            })
            .count()
    }

    /// Whether any element carries the exact class token (whitespace-split).
    pub fn has_class_token(&self, token: &str) -> bool {
        self.hooks
            .iter()
            .filter_map(|h| h.class_attr.as_deref())
            .any(|c| c.split_whitespace().any(|t| t == token))
    }

    /// Joins a path against the page URL (absolute paths resolve against the
    /// origin). Returns `None` for URLs that cannot be joined.
    pub fn origin_join(&self, path: &str) -> Option<String> {
        self.url.join(path).ok().map(|u| u.to_string())
    }
}
