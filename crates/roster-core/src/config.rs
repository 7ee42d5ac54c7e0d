//! Session configuration.
//!
//! Everything has a default; a TOML file is only read when a path is
//! given explicitly.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level roster configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Emit ANSI colors.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Clear the terminal before each menu redraw.
    #[serde(default = "default_true")]
    pub clear_screen: bool,
    /// Sample data generation settings.
    #[serde(default)]
    pub sample: SampleSettings,
}

/// Settings for the sample data generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSettings {
    /// Students added per run.
    #[serde(default = "default_sample_count")]
    pub students: usize,
    /// Courses added per run.
    #[serde(default = "default_sample_count")]
    pub courses: usize,
    /// Candidate student names, drawn with replacement.
    #[serde(default = "default_student_names")]
    pub student_names: Vec<String>,
    /// Candidate course names, drawn without replacement.
    #[serde(default = "default_course_names")]
    pub course_names: Vec<String>,
}

fn default_true() -> bool {
    true
}
fn default_sample_count() -> usize {
    5
}
fn default_student_names() -> Vec<String> {
    ["John", "Jane", "Jack", "Jill", "Jenny", "Jen", "Jenifer", "Jeniffer"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_course_names() -> Vec<String> {
    [
        "Maths",
        "Physics",
        "Chemistry",
        "Biology",
        "English",
        "History",
        "Geography",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            sample: SampleSettings::default(),
        }
    }
}

impl Default for SampleSettings {
    fn default() -> Self {
        Self {
            students: default_sample_count(),
            courses: default_sample_count(),
            student_names: default_student_names(),
            course_names: default_course_names(),
        }
    }
}

/// Parse a TOML string into a `RosterConfig`.
pub fn parse_config_str(content: &str, source_path: &Path) -> Result<RosterConfig> {
    let config: RosterConfig = toml::from_str(content)
        .with_context(|| format!("failed to parse config: {}", source_path.display()))?;

    anyhow::ensure!(
        !config.sample.student_names.is_empty(),
        "sample.student_names must not be empty ({})",
        source_path.display()
    );
    anyhow::ensure!(
        !config.sample.course_names.is_empty(),
        "sample.course_names must not be empty ({})",
        source_path.display()
    );

    Ok(config)
}

/// Load config from an explicit path, or fall back to the defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<RosterConfig> {
    let Some(path) = path else {
        return Ok(RosterConfig::default());
    };

    if !path.exists() {
        anyhow::bail!("config file not found: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = parse_config_str(&content, path)?;
    tracing::info!("loaded config from {}", path.display());
    Ok(config)
}
