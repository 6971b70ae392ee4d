//! Composition root: owns the theme and navigation state for the session.

use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use tokio::time::sleep;
use tracing::{debug, info};

use folio_core::{
    ContactSubmitter, EntryAnimator, FilePreferenceStore, HttpFormRelay, MemoryPreferenceStore,
    NavigationOutcome, Navigator, PreferenceStore, Route, SiteConfig, SiteContent, Theme,
    ThemeController, TransitionPhase, TypewriterTiming,
};

use crate::animation::ScriptAnimator;
use crate::components::{Footer, Navbar, PageFrame, QuickContact};
use crate::theme::ThemedRoot;
use crate::views::{AboutView, ContactView, ExperienceView, HomeView, ProjectsView, SkillsView};

/// Root component. Expects a [`SiteConfig`] in the launch context; an
/// `Rc<dyn EntryAnimator>` there replaces the script-backed animator.
#[component]
pub fn RootApp() -> Element {
    let config = use_context::<SiteConfig>();
    let content = SiteContent::builtin();

    let controller = use_hook(|| theme_controller(&config));
    let mut theme = use_signal(|| controller.initial());
    let mut navigator = use_signal(|| Navigator::new(config.initial_route));
    let mut transition_task = use_signal(|| None::<Task>);

    use_context_provider(|| contact_submitter(&config));
    let animator = try_use_context::<Rc<dyn EntryAnimator>>();
    use_context_provider(move || animator.unwrap_or_else(|| Rc::new(ScriptAnimator)));

    let duration = config.transition.duration;

    // The first view enters like any other.
    use_effect(move || {
        transition_task.set(Some(spawn(drive_transition(navigator, duration))));
    });

    use_drop(move || {
        if let Some(task) = transition_task.write().take() {
            task.cancel();
        }
        info!("Shutting down Folio");
    });

    let on_toggle_theme = move |_| {
        let next = ThemeController::toggle(theme());
        controller.apply(next, &mut |t: Theme| theme.set(t));
        info!(theme = next.token(), "Theme toggled");
    };

    let on_navigate = use_callback(move |to: Route| {
        let was_exiting = navigator.peek().phase() == TransitionPhase::Exiting;
        let outcome = navigator.write().navigate(to);
        if let NavigationOutcome::Leaving { from, to } = outcome {
            info!(from = %from, to = %to, "Navigating");
        }
        if outcome == NavigationOutcome::Unchanged && !was_exiting {
            return;
        }
        if let Some(task) = transition_task.write().take() {
            task.cancel();
        }
        transition_task.set(Some(spawn(drive_transition(navigator, duration))));
    });
    use_context_provider(|| on_navigate);

    let on_toggle_menu = move |_| {
        let open = navigator.write().toggle_menu();
        debug!(open, "Mobile menu toggled");
    };

    let (current, active, phase, menu_open, generation) = {
        let nav = navigator.read();
        (
            nav.current(),
            nav.highlighted(),
            nav.phase(),
            nav.menu_open(),
            nav.generation(),
        )
    };

    rsx! {
        ThemedRoot {
            theme: theme(),
            div {
                class: "site",
                Navbar {
                    brand: content.profile.name.to_string(),
                    active,
                    theme: theme(),
                    menu_open,
                    on_navigate,
                    on_toggle_theme,
                    on_toggle_menu,
                }
                PageFrame {
                    key: "{generation}",
                    phase,
                    transition: config.transition,
                    entry: config.entry_animation.clone(),
                    {view_for(current, content, config.typewriter)}
                }
                Footer {
                    name: content.profile.name.to_string(),
                    email: content.profile.email.to_string(),
                    mailto: content.profile.mailto(),
                }
                QuickContact { mailto: content.profile.mailto() }
            }
        }
    }
}

/// The view mounted for `route`.
fn view_for(route: Route, content: &'static SiteContent, timing: TypewriterTiming) -> Element {
    match route {
        Route::Home => rsx! { HomeView { content, timing } },
        Route::About => rsx! { AboutView { profile: &content.profile } },
        Route::Experience => rsx! { ExperienceView { entries: content.experience } },
        Route::Projects => rsx! { ProjectsView { projects: content.projects } },
        Route::Skills => rsx! { SkillsView { skills: content.skills } },
        Route::Contact => rsx! { ContactView { profile: &content.profile } },
    }
}

/// Walks the navigator through exit (if pending) and enter.
async fn drive_transition(mut navigator: Signal<Navigator>, duration: Duration) {
    if navigator.peek().phase() == TransitionPhase::Exiting {
        sleep(duration).await;
        if let Some(route) = navigator.write().finish_exit() {
            info!(route = %route, "View mounted");
        }
    }
    sleep(duration).await;
    navigator.write().finish_enter();
}

fn theme_controller(config: &SiteConfig) -> ThemeController {
    let store: Arc<dyn PreferenceStore> = if config.ephemeral {
        Arc::new(MemoryPreferenceStore::new())
    } else {
        Arc::new(FilePreferenceStore::in_dir(&config.data_dir))
    };
    ThemeController::new(store)
}

fn contact_submitter(config: &SiteConfig) -> ContactSubmitter {
    ContactSubmitter::new(Arc::new(HttpFormRelay::new(config.form_endpoint.clone())))
}
