//! Scroll-driven navigation state.
//!
//! The page is a single document with four anchored sections. On every scroll
//! tick we derive two values from the current offset and the live layout:
//!
//! - whether the navbar has crossed its visual threshold (`is_scrolled`), and
//! - which section the viewport is currently "in" (`active_section`).
//!
//! Both are pure functions of the scroll offset and the section geometry, so
//! they live here without any DOM types. The DOM wiring (reading
//! `offsetTop`/`offsetHeight`, attaching the listener) sits behind
//! `cfg(target_arch = "wasm32")` below; the listener itself is owned by the
//! navbar component and removed when that component unmounts.

/// Navbar switches from transparent to solid once the page has scrolled past
/// this many pixels.
const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// The active-section probe sits this far below the top of the viewport, so a
/// section counts as active slightly before its top edge reaches the navbar.
const ACTIVE_PROBE_OFFSET_PX: f64 = 100.0;

/// Anchored page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Gallery,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    /// The DOM element id the section is anchored to.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "hero",
            SectionId::About => "about",
            SectionId::Gallery => "gallery",
            SectionId::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Gallery => "Gallery",
            SectionId::Contact => "Contact",
        }
    }
}

/// Vertical extent of one section, captured from the live layout. Never
/// cached across ticks; geometry shifts as images load and viewports resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// True once the vertical offset is past the navbar threshold.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// The first section (in slice order) whose extent contains the probe point
/// `scroll_y + 100`. Returns `None` when the probe lands in a gap, in which
/// case callers keep the previously highlighted section.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<SectionId> {
    let probe = scroll_y + ACTIVE_PROBE_OFFSET_PX;
    sections
        .iter()
        .find(|bounds| bounds.contains(probe))
        .map(|bounds| bounds.id)
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::{SectionBounds, SectionId};
    use wasm_bindgen::JsCast;
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

    /// Current vertical scroll offset, 0.0 if the window is unavailable.
    pub fn scroll_offset() -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    /// Snapshot of every section's extent, skipping ids not yet in the DOM.
    pub fn capture_bounds() -> Vec<SectionBounds> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };

        SectionId::ALL
            .iter()
            .filter_map(|&id| {
                let element = document.get_element_by_id(id.anchor())?;
                let element: web_sys::HtmlElement = element.dyn_into().ok()?;
                Some(SectionBounds {
                    id,
                    top: f64::from(element.offset_top()),
                    height: f64::from(element.offset_height()),
                })
            })
            .collect()
    }

    /// Smooth-scroll the viewport so the section's anchor is in view.
    pub fn scroll_to(id: SectionId) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(element) = document.get_element_by_id(id.anchor()) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::{capture_bounds, scroll_offset, scroll_to};

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_offset() -> f64 {
    0.0
}

#[cfg(not(target_arch = "wasm32"))]
pub fn capture_bounds() -> Vec<SectionBounds> {
    Vec::new()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to(_id: SectionId) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        // hero: [0, 800), about: [800, 1500), gallery: [1500, 2600), contact: [2600, 3400)
        vec![
            SectionBounds {
                id: SectionId::Home,
                top: 0.0,
                height: 800.0,
            },
            SectionBounds {
                id: SectionId::About,
                top: 800.0,
                height: 700.0,
            },
            SectionBounds {
                id: SectionId::Gallery,
                top: 1500.0,
                height: 1100.0,
            },
            SectionBounds {
                id: SectionId::Contact,
                top: 2600.0,
                height: 800.0,
            },
        ]
    }

    #[test]
    fn scrolled_threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.1));
        assert!(is_scrolled(400.0));
    }

    #[test]
    fn probe_sits_100px_below_offset() {
        let sections = layout();
        // offset 650 probes 750 which is still in hero
        assert_eq!(active_section(650.0, &sections), Some(SectionId::Home));
        // offset 700 probes 800, the first pixel of about
        assert_eq!(active_section(700.0, &sections), Some(SectionId::About));
    }

    #[test]
    fn section_extents_are_half_open() {
        let sections = layout();
        // probe 1500 is exactly the start of gallery, end of about
        assert_eq!(active_section(1400.0, &sections), Some(SectionId::Gallery));
    }

    #[test]
    fn gap_in_layout_yields_none() {
        let mut sections = layout();
        // carve a gap between about and gallery
        sections[2].top = 1800.0;
        sections[2].height = 800.0;
        assert_eq!(active_section(1550.0, &sections), None);
    }

    #[test]
    fn overlapping_sections_resolve_to_first_in_order() {
        let mut sections = layout();
        // stretch about over the top of gallery
        sections[1].height = 1200.0;
        assert_eq!(active_section(1500.0, &sections), Some(SectionId::About));
    }

    #[test]
    fn empty_layout_yields_none() {
        assert_eq!(active_section(500.0, &[]), None);
    }

    #[test]
    fn anchors_match_document_ids() {
        let anchors: Vec<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["hero", "about", "gallery", "contact"]);
    }
}
