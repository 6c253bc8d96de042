//! Settings section pattern: a titled card whose body stacks rows separated
//! by dividers.

mod section;

pub use section::{SettingsSection, SettingsSectionBody, SettingsSectionHeader, SettingsSectionRow};
