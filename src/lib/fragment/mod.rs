use std::{fs, path::Path};

use color_eyre::{Section, eyre::eyre};
use tracing::{debug, warn};

use crate::{
    config::{BANNER_FILE, MissingContent, PageConfig},
    types::Fragment,
};

/// Load the project content fragment named by `config`.
///
/// An unset or unreadable fragment is resolved by `config.missing_content`:
/// either an empty fragment (with a warning) or an error.
pub fn load_content(root: &Path, config: &PageConfig) -> color_eyre::Result<Fragment> {
    let Some(path) = config.content_path(root) else {
        return match config.missing_content {
            MissingContent::Empty => {
                warn!("no content_file configured, rendering empty content");
                Ok(Fragment::empty())
            }
            MissingContent::Error => Err(eyre!("no content_file configured")),
        };
    };

    match fs::read(&path) {
        Ok(bytes) => {
            debug!(path = %path.display(), bytes = bytes.len(), "loaded content fragment");
            Ok(decode(&path, bytes))
        }
        Err(e) => match config.missing_content {
            MissingContent::Empty => {
                warn!(path = %path.display(), error = %e, "content fragment unreadable, rendering empty content");
                Ok(Fragment::empty())
            }
            MissingContent::Error => Err(eyre!(
                "Failed to read content fragment {}: {e}",
                path.display()
            )),
        },
    }
}

/// Load `banner.inc` from `root` if it exists.
pub fn load_banner(root: &Path) -> color_eyre::Result<Option<Fragment>> {
    let path = root.join(BANNER_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let bytes = fs::read(&path)
        .with_note(|| format!("While reading banner fragment {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded banner fragment");
    Ok(Some(decode(&path, bytes)))
}

/// Fragments are not required to be UTF-8. Invalid sequences become U+FFFD.
fn decode(path: &Path, bytes: Vec<u8>) -> Fragment {
    match String::from_utf8(bytes) {
        Ok(html) => Fragment::new(html),
        Err(e) => {
            warn!(path = %path.display(), error = %e.utf8_error(), "fragment is not valid UTF-8, replacing invalid bytes");
            Fragment::new(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
