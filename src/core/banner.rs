//! The about banner: project identity plus the host platform, rendered as
//! a fixed multi-line block.

use crate::core::{app, platform};

/// Feature list shown in the banner, rendered two per line.
const FEATURES: [&str; 6] = [
    "Automated Video Processing",
    "AI-Powered Enhancements",
    "YouTube Upload Automation",
    "Multithreading Support",
    "Checkpoint System",
    "Centralized Logging & Error Handling",
];

/// Everything the banner displays. Built fresh per call, never persisted.
#[derive(Debug, Clone)]
pub struct Banner {
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub repository: &'static str,
    pub license: &'static str,
    pub platform: String,
}

impl Banner {
    /// Banner for this build, with the platform resolved from the runtime.
    pub fn resolve() -> Self {
        Self {
            name: app::NAME,
            version: app::VERSION,
            author: app::AUTHOR,
            description: app::DESCRIPTION,
            repository: app::REPOSITORY,
            license: app::LICENSE,
            platform: platform::host_platform(),
        }
    }

    /// Window title string, e.g. "AutoConveyor Version: 1.0.1".
    pub fn title(&self) -> String {
        format!("{} Version: {}", self.name, self.version)
    }

    /// Render the banner block. Pure: two calls produce identical output.
    pub fn render(&self) -> String {
        format!(
            "
🚀 {name} {version} | {platform}
    {description}

    A project developed by {author}.
    Features:
    {features}

    License: {license}
    To know more about the project, visit the GitHub Repository.
    🔗 GitHub Repository: {repository}",
            name = self.name,
            version = self.version,
            platform = self.platform,
            description = self.description,
            author = self.author,
            features = feature_lines(),
            license = self.license,
            repository = self.repository,
        )
    }
}

/// Join the feature list into checkmark-prefixed lines, two entries per line.
fn feature_lines() -> String {
    FEATURES
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|f| format!("✅ {}", f))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n    ")
}
