use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use color_eyre::{Section, eyre::eyre};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::types::GroupId;

pub const CONFIG_FILE: &str = "config.toml";
pub const BANNER_FILE: &str = "banner.inc";
pub const OUTPUT_DIR: &str = "public";
pub const OUTPUT_FILE: &str = "index.html";
pub const SERVE_ADDR: &str = "0.0.0.0:3000";
// Only these file types are served as-is next to the page. Config and
// fragment sources stay private.
pub const ASSET_EXTENSIONS: &[&str] = &[
    "css", "js", "png", "gif", "jpg", "jpeg", "ico", "svg", "webp", "html", "htm", "txt", "pdf",
];

// Portal frame. These are part of the fixed skeleton and never configurable.
pub const PORTAL_HOME: &str = "http://sourceforge.net/";
pub const PORTAL_ABOUT: &str = "http://sourceforge.net/about.php";
pub const PORTAL_PARTNERS: &str = "http://sourceforge.net/partners.php";
pub const PORTAL_CONTACT: &str = "http://sourceforge.net/contact.php";
pub const PORTAL_LOGOUT: &str = "http://sourceforge.net/account/logout.php";
pub const PORTAL_LOGO_LINK: &str = "http://sourceforge.net";
pub const PORTAL_LOGO_IMAGE: &str = "http://sourceforge.net/images/sflogo2-steel.png";
pub const TRACKING_IMAGE: &str = "http://sourceforge.net/sflogo.php";
pub const SPONSOR_LINK: &str = "http://www.valinux.com";
pub const SPONSOR_IMAGE: &str = "http://sourceforge.net/images/valogo3.png";
pub const SPACER_IMAGE: &str = "http://sourceforge.net/images/blank.gif";

/// What to do when the content fragment cannot be read.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissingContent {
    /// Render an empty content cell and log a warning.
    #[default]
    Empty,
    /// Fail the render.
    Error,
}

/// Per-project page settings, read from `config.toml`.
///
/// Every field is optional: an absent title renders as an empty `<TITLE>`,
/// an absent group id leaves the tracking parameter blank.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub group_id: Option<GroupId>,
    #[serde(alias = "content_fragment_path")]
    pub content_file: Option<PathBuf>,
    pub missing_content: MissingContent,
}

impl TryFrom<&str> for PageConfig {
    type Error = color_eyre::Report;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        toml::from_str::<PageConfig>(value)
            .map_err(|e| eyre!(e.to_string()))
            .with_note(|| "While parsing page configuration.")
    }
}

impl PageConfig {
    /// Load `config.toml` from `root`. A missing file yields the default config.
    pub fn load_at(root: &Path) -> color_eyre::Result<Self> {
        let path = root.join(CONFIG_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "no page configuration, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_note(|| format!("While reading {}", path.display()));
            }
        };

        let config = Self::try_from(raw.as_str())
            .with_note(|| format!("In configuration file {}", path.display()))?;
        debug!(?config, "loaded page configuration");
        Ok(config)
    }

    /// Content fragment path resolved against the project root.
    pub fn content_path(&self, root: &Path) -> Option<PathBuf> {
        self.content_file.as_ref().map(|p| root.join(p))
    }
}
