//! Core logic for the Folio portfolio site.
//!
//! Everything here is renderer-agnostic: the static content store, the
//! theme controller, the role typewriter, the navigation state machine and
//! the contact form submitter. The Dioxus front end in `folio-site` wires
//! these into components.

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod navigation;
pub mod tasks;
pub mod theme;
pub mod typewriter;

pub use config::{SiteConfig, WindowConfig, default_data_dir};
pub use contact::{
    ContactForm, ContactSubmitter, FormRelay, HttpFormRelay, Submission, SubmissionStatus,
    DEFAULT_FORM_ENDPOINT,
};
pub use content::{ExperienceEntry, Metric, Profile, Project, SiteContent, SocialLink};
pub use error::{FolioError, FormError, RelayError, StoreError};
pub use navigation::{
    EntryAnimationOptions, EntryAnimator, NavigationOutcome, Navigator, PageTransition,
    RecordingAnimator, Route, TransitionPhase, UnknownRoute,
};
pub use tasks::ViewTasks;
pub use theme::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, PresentationScope, Theme,
    ThemeController, THEME_KEY,
};
pub use typewriter::{
    CursorBlink, Phase, Typewriter, TypewriterFrame, TypewriterTiming, run_cursor_blink,
    run_typewriter,
};
