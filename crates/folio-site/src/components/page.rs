//! Transition wrapper around the mounted view.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{EntryAnimationOptions, EntryAnimator, PageTransition, TransitionPhase};

/// Applies the enter/exit classes and arms entry animations once per mount.
///
/// The shell keys this component on the navigator generation, so every view
/// swap gets a fresh frame and a fresh animation pass.
#[component]
pub fn PageFrame(
    phase: TransitionPhase,
    transition: PageTransition,
    entry: EntryAnimationOptions,
    children: Element,
) -> Element {
    let animator = use_context::<Rc<dyn EntryAnimator>>();

    // No signal reads: runs once, after the view's DOM is in place.
    use_effect(move || animator.arm(&entry));

    rsx! {
        main {
            class: "{phase.css_class()}",
            style: "{transition.css_vars()}",
            {children}
        }
    }
}
