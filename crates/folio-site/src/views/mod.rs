//! The six views the shell can mount.

mod about;
mod contact;
mod experience;
mod home;
mod projects;
mod skills;

pub use about::AboutView;
pub use contact::ContactView;
pub use experience::ExperienceView;
pub use home::{HomeView, RoleTypewriter};
pub use projects::ProjectsView;
pub use skills::SkillsView;
