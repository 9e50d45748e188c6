#![forbid(unsafe_code)]

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod menu;
pub mod portfolio;
pub mod scroll;
pub mod section;
pub mod tween;

pub use config::{ConfigError, SceneConfig, SiteConfig};
pub use contact::{CONTACT_FIELDS, ContactDraft, ContactError, ContactField, ContactMessage, FieldKind};
pub use content::{LANGUAGES, PAGE_COUNT, PROFILE, Profile, Reveal, SKILLS, Section, Skill};
pub use error::Error;
pub use menu::{MenuController, MenuState};
pub use portfolio::Portfolio;
pub use scroll::{ScrollControls, ScrollManager};
pub use section::{
    PageCount, SectionChange, SectionError, SectionIndex, SectionIndexModel, SubscriptionId,
    clamp_progress, derive_section_index,
};
