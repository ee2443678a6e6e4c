//! WebClip bundle generation.
//!
//! A WebClip is a `<folder>.webclip` directory holding an `Info.plist` and an
//! `icon.png`. The plist is a full-screen clip that points at no URL; only the
//! icon and title matter.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ThemeError, ThemeResult};

/// Title used when app labels are hidden. The OS then shows the app's own name.
pub const BLANK_TITLE: &str = " ";

pub const INFO_PLIST: &str = "Info.plist";
pub const ICON_FILE: &str = "icon.png";

const FOLDER_PREFIX: &str = "Cowabunga_";
const FOLDER_SUFFIX: &str = ".webclip";

/// Contents of a WebClip's Info.plist. Field order is the key order on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebClipInfo {
    pub application_bundle_identifier: String,
    pub application_bundle_version: u64,
    pub classic_mode: bool,
    pub configuration_is_managed: bool,
    pub content_mode: String,
    pub full_screen: bool,
    pub icon_is_precomposed: bool,
    pub icon_is_screen_shot_based: bool,
    pub ignore_manifest_scope: bool,
    pub is_app_clip: bool,
    pub orientations: u64,
    pub removal_disallowed: bool,
    pub sceneless_background_launch: bool,
    pub title: String,
    pub web_clip_status_bar_style: String,
}

impl WebClipInfo {
    pub fn new(display_name: &str, bundle_id: &str, is_app_clip: bool) -> Self {
        Self {
            application_bundle_identifier: bundle_id.to_string(),
            application_bundle_version: 1,
            classic_mode: false,
            configuration_is_managed: false,
            content_mode: "UIWebClipContentModeRecommended".into(),
            full_screen: true,
            icon_is_precomposed: false,
            icon_is_screen_shot_based: false,
            ignore_manifest_scope: false,
            is_app_clip,
            orientations: 0,
            removal_disallowed: false,
            sceneless_background_launch: false,
            title: display_name.to_string(),
            web_clip_status_bar_style: "UIWebClipStatusBarStyleDefault".into(),
        }
    }
}

/// Serialize the Info.plist for one WebClip as an XML property list.
pub fn make_info_plist(display_name: &str, bundle_id: &str, is_app_clip: bool) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    plist::to_writer_xml(&mut buf, &WebClipInfo::new(display_name, bundle_id, is_app_clip))
        .map_err(io::Error::other)?;
    Ok(buf)
}

/// Deterministic bundle folder name for `bundle_id`.
pub fn folder_name(bundle_id: &str) -> String {
    let sanitized: String = bundle_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{FOLDER_PREFIX}{sanitized}{FOLDER_SUFFIX}")
}

/// Create or overwrite the WebClip for `bundle_id` under `applied_root`.
///
/// The applied root must already exist. On failure the bundle folder is
/// removed (best effort) so no half-written bundle is left behind.
pub fn make_webclip(
    applied_root: &Path,
    display_name: &str,
    image: &[u8],
    bundle_id: &str,
    is_app_clip: bool,
) -> ThemeResult<PathBuf> {
    let folder = applied_root.join(folder_name(bundle_id));
    match write_bundle(&folder, display_name, image, bundle_id, is_app_clip) {
        Ok(()) => Ok(folder),
        Err(source) => {
            let _ = fs::remove_dir_all(&folder);
            Err(ThemeError::WebClipCreationFailed {
                bundle_id: bundle_id.to_string(),
                source,
            })
        }
    }
}

fn write_bundle(
    folder: &Path,
    display_name: &str,
    image: &[u8],
    bundle_id: &str,
    is_app_clip: bool,
) -> io::Result<()> {
    if !folder.exists() {
        fs::create_dir(folder)?;
    }
    let info = make_info_plist(display_name, bundle_id, is_app_clip)?;
    replace_file(&folder.join(INFO_PLIST), &info)?;
    replace_file(&folder.join(ICON_FILE), image)?;
    Ok(())
}

/// Delete-then-write. A missing previous file is fine.
pub(crate) fn replace_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let _ = fs::remove_file(path);
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plist::Value;

    #[test]
    fn test_folder_name() {
        assert_eq!(folder_name("com.apple.Phone"), "Cowabunga_com.apple.Phone.webclip");
        assert_eq!(folder_name("com.x/../y z"), "Cowabunga_com.x_.._y_z.webclip");
    }

    #[test]
    fn test_info_plist_keys_and_types() {
        let bytes = make_info_plist("Phone", "com.apple.Phone", true).unwrap();
        let v = Value::from_reader_xml(bytes.as_slice()).unwrap();
        let dict = v.as_dictionary().unwrap();
        assert_eq!(dict.len(), 15);
        assert_eq!(dict.get("ApplicationBundleIdentifier").unwrap().as_string(), Some("com.apple.Phone"));
        assert_eq!(dict.get("ApplicationBundleVersion").unwrap().as_unsigned_integer(), Some(1));
        assert_eq!(dict.get("Orientations").unwrap().as_unsigned_integer(), Some(0));
        assert_eq!(dict.get("IsAppClip").unwrap().as_boolean(), Some(true));
        assert_eq!(dict.get("FullScreen").unwrap().as_boolean(), Some(true));
        assert_eq!(dict.get("RemovalDisallowed").unwrap().as_boolean(), Some(false));
        assert_eq!(dict.get("Title").unwrap().as_string(), Some("Phone"));
        assert_eq!(
            dict.get("ContentMode").unwrap().as_string(),
            Some("UIWebClipContentModeRecommended")
        );
        assert_eq!(
            dict.get("WebClipStatusBarStyle").unwrap().as_string(),
            Some("UIWebClipStatusBarStyleDefault")
        );
        for key in [
            "ClassicMode",
            "ConfigurationIsManaged",
            "IconIsPrecomposed",
            "IconIsScreenShotBased",
            "IgnoreManifestScope",
            "ScenelessBackgroundLaunch",
        ] {
            assert_eq!(dict.get(key).unwrap().as_boolean(), Some(false), "{key}");
        }
    }

    #[test]
    fn test_make_webclip_writes_bundle() {
        let tmp = tempfile::tempdir().unwrap();
        let folder = make_webclip(tmp.path(), "Phone", b"png", "com.apple.Phone", false).unwrap();
        assert_eq!(folder, tmp.path().join("Cowabunga_com.apple.Phone.webclip"));
        assert_eq!(fs::read(folder.join(ICON_FILE)).unwrap(), b"png");
        let info: WebClipInfo = plist::from_file(folder.join(INFO_PLIST)).unwrap();
        assert_eq!(info, WebClipInfo::new("Phone", "com.apple.Phone", false));

        // second write overwrites in place
        make_webclip(tmp.path(), "Phone", b"png2", "com.apple.Phone", false).unwrap();
        assert_eq!(fs::read(folder.join(ICON_FILE)).unwrap(), b"png2");
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_make_webclip_missing_parent_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("missing");
        let err = make_webclip(&root, "Phone", b"png", "com.apple.Phone", false).unwrap_err();
        assert_eq!(err.bundle_id(), Some("com.apple.Phone"));
        assert!(!root.exists());
    }

    #[test]
    fn test_make_webclip_cleans_up_on_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let folder = tmp.path().join(folder_name("com.apple.Phone"));
        // a directory where icon.png should go makes the icon write fail
        fs::create_dir_all(folder.join(ICON_FILE)).unwrap();
        let err = make_webclip(tmp.path(), "Phone", b"png", "com.apple.Phone", false).unwrap_err();
        assert!(matches!(err, ThemeError::WebClipCreationFailed { .. }));
        assert!(!folder.exists());
    }
}
