use std::rc::Rc;

use log::{debug, info};
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::config::{FRAGMENT_SCROLL_DELAY_MS, HEADER_OFFSET, SCROLL_SETTLE_DELAY_MS};
use crate::navigation::{ScrollRequest, ScrollTarget};
use crate::sections::SectionKey;
use crate::timer::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

/// The parts of the browser window the scroll logic needs.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    /// Top edge of the element with `id`, relative to the visible area.
    fn element_top(&self, id: &str) -> Option<f64>;
    fn scroll_to(&self, top: f64, mode: ScrollMode);
}

/// Document offset that puts a section just below the fixed header.
pub fn section_offset(element_top: f64, current_scroll: f64, header_offset: f64) -> f64 {
    (element_top + current_scroll - header_offset).max(0.0)
}

/// Smooth-scrolls to `key`. A section that is not in the document is not
/// an error; nothing happens and `false` is returned.
pub fn scroll_to_section<V: Viewport + ?Sized>(
    viewport: &V,
    key: SectionKey,
    header_offset: f64,
) -> bool {
    match viewport.element_top(key.as_str()) {
        Some(top) => {
            let target = section_offset(top, viewport.scroll_y(), header_offset);
            debug!("Scrolling to section {} at {}", key.as_str(), target);
            viewport.scroll_to(target, ScrollMode::Smooth);
            true
        }
        None => {
            debug!("Section {} not rendered, skipping scroll", key.as_str());
            false
        }
    }
}

pub fn reset_to_top<V: Viewport + ?Sized>(viewport: &V) {
    viewport.scroll_to(0.0, ScrollMode::Instant);
}

/// Carries out a scroll requested by navigation. Explicit navigation wins
/// over anything still pending on either timer.
pub fn perform_scroll<V, S>(viewport: Rc<V>, request: ScrollRequest, settle: &S, fragment: &S)
where
    V: Viewport + 'static,
    S: Scheduler + ?Sized,
{
    settle.cancel();
    fragment.cancel();

    match request.target {
        ScrollTarget::Section(section) => {
            scroll_to_section(&*viewport, section, HEADER_OFFSET);
        }
        ScrollTarget::Top => {
            reset_to_top(&*viewport);
            // The new page may not be laid out yet; reset once more after it is.
            settle.schedule(
                SCROLL_SETTLE_DELAY_MS,
                Box::new(move || reset_to_top(&*viewport)),
            );
        }
    }
}

/// Schedules the first-load scroll for a `#section` fragment. Unknown
/// fragments schedule nothing.
pub fn schedule_fragment_scroll<V, S>(
    viewport: Rc<V>,
    fragment: &str,
    scheduler: &S,
) -> Option<SectionKey>
where
    V: Viewport + 'static,
    S: Scheduler + ?Sized,
{
    let section = SectionKey::from_fragment(fragment)?;
    info!("Scrolling to #{} after first paint", section.as_str());
    scheduler.schedule(
        FRAGMENT_SCROLL_DELAY_MS,
        Box::new(move || {
            scroll_to_section(&*viewport, section, HEADER_OFFSET);
        }),
    );
    Some(section)
}

pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        let element = self.window.document()?.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }

    #[allow(deprecated)]
    fn scroll_to(&self, top: f64, mode: ScrollMode) {
        let mut options = ScrollToOptions::new();
        options.top(top);
        options.behavior(match mode {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
