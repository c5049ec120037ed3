//! Section capture - header/main/footer/full screenshots for one site
//!
//! Header and footer are located by scanning fixed selector candidate
//! lists, first match wins. The main band is the rectangle strictly
//! between the header's bottom edge and the footer's top edge.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use headless_chrome::protocol::cdp::Page;
use headless_chrome::Tab;

use crate::core::{CaptureOutcome, CompareError, Config, Result, SectionSet, Site, SkipReason};

/// Header selector candidates, scanned in order
pub const HEADER_SELECTORS: &[&str] = &[
    "header",
    "nav",
    "div[role=\"banner\"]",
    ".header",
    ".navbar",
    "#header",
    "#nav-main",
    "#navbar",
    ".top-bar",
    ".main-header",
    ".global-header",
    "div[data-role=\"header\"]",
    ".site-header",
    "div[class*=\"header\"]",
    "div[class*=\"navbar\"]",
    "div[class*=\"top\"]",
];

/// Footer selector candidates, scanned in order
pub const FOOTER_SELECTORS: &[&str] = &[
    "footer",
    ".footer",
    "#footer",
    "#navFooter",
    ".site-footer",
    ".bottom-bar",
    "div[role=\"contentinfo\"]",
    ".main-footer",
    ".global-footer",
    ".footer-wrapper",
    "div[class*=\"footer\"]",
    "div[class*=\"bottom\"]",
    "div[data-role=\"footer\"]",
    ".site-info",
];

/// Navigate to a site and capture its four section screenshots
///
/// Never fails the batch: every problem short of a scoring bug becomes a
/// `Skipped` outcome with a reason code, and the caller decides what to
/// log. A missing full-page file or an undersized main band only drops
/// that one section.
pub fn capture_sections(tab: &Tab, site: &Site, config: &Config) -> CaptureOutcome {
    let skip = |reason: SkipReason| CaptureOutcome::Skipped { reason };

    let folder = config.site_dir(&site.name);
    if let Err(e) = fs::create_dir_all(&folder) {
        return skip(SkipReason::Capture(e.to_string()));
    }

    tab.set_default_timeout(Duration::from_secs(config.browser.nav_timeout_secs));
    if let Err(e) = tab
        .navigate_to(&site.url)
        .and_then(|t| t.wait_until_navigated())
    {
        return skip(SkipReason::Navigation(e.to_string()));
    }

    // Let late-loading banners and sticky navs settle before measuring
    std::thread::sleep(Duration::from_millis(config.browser.settle_ms));

    let first_match =
        |selectors: &[&str]| selectors.iter().find_map(|sel| tab.find_element(sel).ok());

    let Some(header) = first_match(HEADER_SELECTORS) else {
        return skip(SkipReason::HeaderNotFound);
    };
    let Some(footer) = first_match(FOOTER_SELECTORS) else {
        return skip(SkipReason::FooterNotFound);
    };

    let (header_box, footer_box) = match (header.get_box_model(), footer.get_box_model()) {
        (Ok(h), Ok(f)) => (h, f),
        _ => return skip(SkipReason::MissingGeometry),
    };

    // `ElementQuad::most_bottom` is private in headless_chrome, so inline its
    // (largest y-coordinate) computation over the public corner fields.
    let hc = &header_box.content;
    let header_bottom = hc
        .top_right
        .y
        .max(hc.top_left.y)
        .max(hc.bottom_right.y)
        .max(hc.bottom_left.y);
    let footer_top = footer_box.content.most_top();
    let main_height = (footer_top - header_bottom).max(0.0);

    let section_path =
        |section: &str| -> PathBuf { folder.join(format!("{}_{}.png", site.name, section)) };
    let header_path = section_path("header");
    let main_path = section_path("main");
    let footer_path = section_path("footer");
    let full_path = section_path("full");

    // Full page first; its failure drops only the "full" entry
    let full = match capture_full_page(tab, config.browser.viewport_width)
        .and_then(|bytes| fs::write(&full_path, bytes).map_err(CompareError::from))
    {
        Ok(()) => {
            println!("✔️ Full-page screenshot captured for {}", site.name);
            Some(full_path)
        }
        Err(e) => {
            println!("❌ Full-page screenshot failed for {}: {}", site.name, e);
            None
        }
    };

    if let Err(e) = header
        .capture_screenshot(Page::CaptureScreenshotFormatOption::Png)
        .map_err(|e| e.to_string())
        .and_then(|bytes| fs::write(&header_path, bytes).map_err(|e| e.to_string()))
    {
        return skip(SkipReason::Capture(e));
    }

    let main = if main_height > f64::from(config.capture.min_main_height) {
        let clip = Page::Viewport {
            x: 0.0,
            y: header_bottom,
            width: f64::from(config.browser.viewport_width),
            height: main_height,
            scale: 1.0,
        };
        match tab
            .capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, Some(clip), true)
            .map_err(|e| e.to_string())
            .and_then(|bytes| fs::write(&main_path, bytes).map_err(|e| e.to_string()))
        {
            Ok(()) => Some(main_path),
            Err(e) => return skip(SkipReason::Capture(e)),
        }
    } else {
        println!("⚠️ Main section too small for {}. Skipping main.", site.name);
        None
    };

    if let Err(e) = footer
        .capture_screenshot(Page::CaptureScreenshotFormatOption::Png)
        .map_err(|e| e.to_string())
        .and_then(|bytes| fs::write(&footer_path, bytes).map_err(|e| e.to_string()))
    {
        return skip(SkipReason::Capture(e));
    }

    CaptureOutcome::Captured {
        sections: SectionSet {
            header: header_path,
            main,
            footer: footer_path,
            full,
        },
    }
}

/// Screenshot the whole document, not just the visible viewport
///
/// Chrome has no single full-page flag over CDP; measure the document
/// scroll height and clip to it. Falls back to the visible viewport when
/// the measurement comes back unusable.
fn capture_full_page(tab: &Tab, viewport_width: u32) -> Result<Vec<u8>> {
    let clip = document_viewport(tab, viewport_width);
    tab.capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, clip, true)
        .map_err(|e| CompareError::browser(e.to_string()))
}

fn document_viewport(tab: &Tab, viewport_width: u32) -> Option<Page::Viewport> {
    let measured = tab
        .evaluate(
            "Math.max(document.documentElement.scrollHeight, \
             document.body ? document.body.scrollHeight : 0)",
            false,
        )
        .ok()?;
    let height = measured.value?.as_f64()?;
    if height <= 0.0 {
        return None;
    }

    Some(Page::Viewport {
        x: 0.0,
        y: 0.0,
        width: f64::from(viewport_width),
        height,
        scale: 1.0,
    })
}
