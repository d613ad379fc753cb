//! Startup assets
//!
//! The font and the zombie sprite are read once before the first frame. A
//! session can't be shown without them, so any problem here is fatal and
//! reported with the offending path.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::Settings;

/// Raw asset bytes, handed to the presentation layer as-is
#[derive(Debug, Clone)]
pub struct Assets {
    pub font: Vec<u8>,
    pub sprite: Vec<u8>,
}

impl Assets {
    /// Read every asset named in `settings`
    pub fn load(settings: &Settings) -> Result<Self> {
        let font = read_asset(&settings.font_path()).context("failed to load font")?;
        let sprite = read_asset(&settings.sprite_path()).context("failed to load zombie sprite")?;
        log::info!(
            "Loaded assets: font {} bytes, sprite {} bytes",
            font.len(),
            sprite.len()
        );
        Ok(Self { font, sprite })
    }
}

fn read_asset(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    if bytes.is_empty() {
        bail!("{} is empty", path.display());
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn asset_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("zomboid-assets-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    fn settings_for(dir: &Path) -> Settings {
        Settings {
            asset_dir: dir.to_path_buf(),
            ..Settings::default()
        }
    }

    #[test]
    fn test_loads_both_files() {
        let dir = asset_dir("ok");
        let settings = settings_for(&dir);
        fs::write(settings.font_path(), b"font").expect("write font");
        fs::write(settings.sprite_path(), b"png!").expect("write sprite");

        let assets = Assets::load(&settings).expect("assets load");
        assert_eq!(assets.font, b"font");
        assert_eq!(assets.sprite, b"png!");
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_missing_font_names_path() {
        let dir = asset_dir("missing");
        let settings = settings_for(&dir);
        fs::write(settings.sprite_path(), b"png!").expect("write sprite");

        let err = Assets::load(&settings).expect_err("font is missing");
        let message = format!("{err:#}");
        assert!(message.contains("failed to load font"));
        assert!(message.contains("zombie.otf"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_empty_sprite_rejected() {
        let dir = asset_dir("empty");
        let settings = settings_for(&dir);
        fs::write(settings.font_path(), b"font").expect("write font");
        fs::write(settings.sprite_path(), b"").expect("write sprite");

        let err = Assets::load(&settings).expect_err("sprite is empty");
        assert!(format!("{err:#}").contains("is empty"));
        let _ = fs::remove_dir_all(dir);
    }
}
