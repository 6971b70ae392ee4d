//! Scroll-triggered entry animations.
//!
//! Each freshly mounted view hides its `.animate-up` elements, then fades
//! them in as they scroll into view. The work happens in the webview via an
//! `IntersectionObserver`; one observer is live at a time.

use dioxus::prelude::*;
use folio_core::{EntryAnimationOptions, EntryAnimator};

/// Approximates a power3 ease-out.
const EASE_OUT: &str = "cubic-bezier(0.215, 0.61, 0.355, 1)";

/// Runs the entry animation script in the current document.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptAnimator;

impl EntryAnimator for ScriptAnimator {
    fn arm(&self, options: &EntryAnimationOptions) {
        tracing::debug!(selector = %options.selector, "Arming entry animations");
        document::eval(&entry_script(options));
    }
}

/// Builds the observer script for `options`.
pub fn entry_script(options: &EntryAnimationOptions) -> String {
    // A JSON string literal is also a valid JS string literal.
    let selector = serde_json::Value::String(options.selector.clone()).to_string();
    format!(
        r#"(function () {{
  const selector = {selector};
  const offset = {offset};
  const duration = {duration};
  const stagger = {stagger};
  if (window.__folioEntryObserver) {{
    window.__folioEntryObserver.disconnect();
  }}
  const targets = Array.from(document.querySelectorAll(selector));
  targets.forEach((el) => {{
    el.style.transition = "none";
    el.style.opacity = "0";
    el.style.transform = "translateY(" + offset + "px)";
  }});
  const observer = new IntersectionObserver((entries) => {{
    let batch = 0;
    entries.forEach((entry) => {{
      if (!entry.isIntersecting) {{
        return;
      }}
      const el = entry.target;
      const delay = stagger * batch++;
      el.style.transition =
        "opacity " + duration + "ms {ease} " + delay + "ms, " +
        "transform " + duration + "ms {ease} " + delay + "ms";
      el.style.opacity = "1";
      el.style.transform = "translateY(0)";
      observer.unobserve(el);
    }});
  }}, {{ threshold: {threshold} }});
  targets.forEach((el) => observer.observe(el));
  window.__folioEntryObserver = observer;
}})();"#,
        offset = options.offset_px,
        duration = options.duration.as_millis(),
        stagger = options.stagger.as_millis(),
        threshold = options.threshold,
        ease = EASE_OUT,
    )
}
