//! Report rendering.
//!
//! Pure presentation: turns a [`PageInfo`] into the fixed-layout terminal
//! report. Rows are only shown when the corresponding field is populated;
//! a Google Sites verdict collapses the report to the platform and builder
//! rows. Each plugin entry carries a vulnerability-lookup URL parameterized
//! by its slug.

use std::fmt::Write;

use colored::Colorize;

use crate::config::ADVISORY_SEARCH_URL;
use crate::models::PageInfo;

const LABEL_WIDTH: usize = 16;

/// Renders the detection report for one page.
pub fn render(info: &PageInfo) -> String {
    let mut out = String::new();

    // Google Sites supersedes the WordPress report entirely
    if !info.is_wordpress && info.page_builder.as_deref() == Some("Google Sites") {
        row(&mut out, "WordPress", &format!("{} No (Google Sites)", glyph_no()));
        row(&mut out, "Page builder", "Google Sites");
        return out;
    }

    let wp_status = if info.is_wordpress {
        format!("{} Yes", glyph_yes())
    } else {
        format!("{} No", glyph_no())
    };
    row(&mut out, "WordPress", &wp_status);

    if let Some(version) = &info.wp_version {
        row(&mut out, "WP version", version);
    }

    if let Some(theme) = &info.theme {
        let text = match &info.theme_version {
            Some(version) => format!("{theme} (v{version})"),
            None => theme.clone(),
        };
        row(&mut out, "Theme", &text);
    }

    if let Some(builder) = &info.page_builder {
        row(&mut out, "Page builder", builder);
    }

    if let Some(php) = &info.php_version {
        row(&mut out, "PHP version", php);
    } else if info.is_wordpress {
        row(&mut out, "PHP version", &"not detectable".dimmed().to_string());
    }

    let cf_status = if info.cloudflare {
        format!("{} Yes", glyph_yes())
    } else {
        format!("{} No", glyph_no())
    };
    row(&mut out, "Cloudflare", &cf_status);

    if let Some(version) = &info.client_library_version {
        let text = if info.client_library_outdated {
            format!("{version} {}", "⚠ outdated".red())
        } else {
            format!("{version} {}", glyph_yes())
        };
        row(&mut out, "jQuery", &text);
    }

    let sitemap_status = if info.sitemap {
        match &info.sitemap_url {
            Some(url) => format!("{} {url}", glyph_yes()),
            None => format!("{} detected", glyph_yes()),
        }
    } else {
        format!("{} not detected", glyph_no())
    };
    row(&mut out, "Sitemap", &sitemap_status);

    if info.commerce_enabled {
        row(&mut out, "WooCommerce", &format!("{} Active", glyph_yes()));
    }

    if !info.plugins.is_empty() {
        let _ = writeln!(out, "\nPlugins detected ({}):", info.plugins.len());
        for plugin in &info.plugins {
            let version = plugin
                .version
                .as_ref()
                .map(|v| format!(" v{v}"))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "  {}{} — {}{}",
                plugin.name.bold(),
                version.dimmed(),
                ADVISORY_SEARCH_URL,
                plugin.slug
            );
        }
    }

    out
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{:<LABEL_WIDTH$} {value}", format!("{label}:"));
}

fn glyph_yes() -> colored::ColoredString {
    "✓".green()
}

fn glyph_no() -> colored::ColoredString {
    "✗".red()
}
