//! Navigation shell state: routes, page transitions, the mobile menu and
//! entry-animation arming.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The six views of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Experience => "/experience",
            Route::Projects => "/projects",
            Route::Skills => "/skills",
            Route::Contact => "/contact",
        }
    }

    /// Link text in the header.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Experience => "Experience",
            Route::Projects => "Projects",
            Route::Skills => "Skills",
            Route::Contact => "Contact",
        }
    }

    /// All routes in header order.
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::About,
            Route::Experience,
            Route::Projects,
            Route::Skills,
            Route::Contact,
        ]
    }

    /// Exact path match. A trailing slash, query string or fragment is
    /// ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::all().iter().copied().find(|r| r.path() == normalized)
    }

    /// Like [`Route::from_path`], falling back to [`Route::Home`] for
    /// unknown paths.
    pub fn resolve(path: &str) -> Route {
        Route::from_path(path).unwrap_or_else(|| {
            warn!(path, "Unknown route, showing home");
            Route::Home
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Error for [`Route::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no view is mapped to {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

/// Lifecycle of the mounted view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    /// The view has just mounted and is animating in.
    Entering,
    /// No transition in progress.
    Settled,
    /// The current view is animating out; the pending route mounts next.
    Exiting,
}

impl TransitionPhase {
    /// CSS class for the page wrapper.
    pub fn css_class(&self) -> &'static str {
        match self {
            TransitionPhase::Entering => "page page-enter",
            TransitionPhase::Settled => "page",
            TransitionPhase::Exiting => "page page-exit",
        }
    }
}

/// Offsets and duration for the page swap. Entering views rise from
/// `enter_offset_px` below; exiting views move to `exit_offset_px`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageTransition {
    pub enter_offset_px: f32,
    pub exit_offset_px: f32,
    #[serde(with = "crate::config::millis")]
    pub duration: Duration,
}

impl Default for PageTransition {
    fn default() -> Self {
        Self {
            enter_offset_px: 10.0,
            exit_offset_px: -10.0,
            duration: Duration::from_millis(450),
        }
    }
}

impl PageTransition {
    /// CSS custom properties consumed by the `page-enter`/`page-exit`
    /// keyframes.
    pub fn css_vars(&self) -> String {
        format!(
            "--page-enter-offset: {}px; --page-exit-offset: {}px; --page-duration: {}ms;",
            self.enter_offset_px,
            self.exit_offset_px,
            self.duration.as_millis()
        )
    }
}

/// How elements within a freshly mounted view animate into place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryAnimationOptions {
    /// Elements to animate.
    pub selector: String,
    /// Initial downward offset.
    pub offset_px: f32,
    #[serde(with = "crate::config::millis")]
    pub duration: Duration,
    /// Extra delay per element, in document order.
    #[serde(with = "crate::config::millis")]
    pub stagger: Duration,
    /// Fraction of the element that must be visible before it animates.
    pub threshold: f32,
}

impl Default for EntryAnimationOptions {
    fn default() -> Self {
        Self {
            selector: ".animate-up".to_string(),
            offset_px: 30.0,
            duration: Duration::from_millis(900),
            stagger: Duration::from_millis(120),
            threshold: 0.1,
        }
    }
}

impl EntryAnimationOptions {
    /// Delay for the `index`-th element.
    pub fn delay_for(&self, index: usize) -> Duration {
        self.stagger * index as u32
    }
}

/// Arms entry animations for the elements of a freshly mounted view.
pub trait EntryAnimator {
    fn arm(&self, options: &EntryAnimationOptions);
}

/// Animator that only records what it was asked to arm.
#[derive(Debug, Default)]
pub struct RecordingAnimator {
    armed: Mutex<Vec<String>>,
}

impl RecordingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selectors armed so far, oldest first.
    pub fn armed(&self) -> Vec<String> {
        self.armed.lock().clone()
    }
}

impl EntryAnimator for RecordingAnimator {
    fn arm(&self, options: &EntryAnimationOptions) {
        self.armed.lock().push(options.selector.clone());
    }
}

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Already showing the route; nothing to do.
    Unchanged,
    /// The current view started exiting; call [`Navigator::finish_exit`]
    /// after the transition duration.
    Leaving { from: Route, to: Route },
}

/// Owns the route, the transition phase and the mobile menu flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    current: Route,
    pending: Option<Route>,
    phase: TransitionPhase,
    menu_open: bool,
    generation: u64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl Navigator {
    /// Starts with `initial` mounted and entering.
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            pending: None,
            phase: TransitionPhase::Entering,
            menu_open: false,
            generation: 0,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn pending(&self) -> Option<Route> {
        self.pending
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Increments on every view mount; used as the view key.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Route the header should mark active.
    pub fn highlighted(&self) -> Route {
        self.pending.unwrap_or(self.current)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Requests `to`. Always closes the mobile menu.
    pub fn navigate(&mut self, to: Route) -> NavigationOutcome {
        self.close_menu();

        if self.pending.is_none() && to == self.current {
            return NavigationOutcome::Unchanged;
        }
        if self.pending.is_some() && to == self.current {
            // Heading back before the swap: keep the mounted view.
            self.pending = None;
            self.phase = TransitionPhase::Entering;
            debug!(route = %to, "Navigation cancelled mid-exit");
            return NavigationOutcome::Unchanged;
        }

        let from = self.current;
        self.pending = Some(to);
        self.phase = TransitionPhase::Exiting;
        debug!(from = %from, to = %to, "Leaving view");
        NavigationOutcome::Leaving { from, to }
    }

    /// Mounts the pending route once the exit transition is done. Returns
    /// the newly mounted route, or `None` when nothing was pending.
    pub fn finish_exit(&mut self) -> Option<Route> {
        let next = self.pending.take()?;
        self.current = next;
        self.generation += 1;
        self.phase = TransitionPhase::Entering;
        debug!(route = %next, generation = self.generation, "View mounted");
        Some(next)
    }

    pub fn finish_enter(&mut self) {
        if self.phase == TransitionPhase::Entering {
            self.phase = TransitionPhase::Settled;
        }
    }
}
