use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use raylib::prelude::*;
use crate::constants::*;

/// Sprite files the splash scene needs.
#[derive(Debug, PartialEq, Clone)]
pub struct AssetPaths {
    pub parachute: PathBuf,
    pub cloud: PathBuf,
}

// --- Helper: Locate Sprites in the Asset Directory ---
pub fn resolve_assets(dir_path: &Path) -> Result<AssetPaths> {
    if !dir_path.is_dir() {
        bail!("Asset directory {:?} does not exist", dir_path);
    }

    let find = |name: &str| -> Result<PathBuf> {
        let path = dir_path.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            bail!("Missing sprite {:?} in {:?}", name, dir_path)
        }
    };

    Ok(AssetPaths {
        parachute: find(PARACHUTE_FILE)?,
        cloud: find(CLOUD_FILE)?,
    })
}

// --- Load Image, Create Texture ---
pub fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {:?}", image_path))?;

    // Provide extension hint for loading from memory
    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("png").to_lowercase();
    let image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| anyhow::anyhow!("Failed to load image data for {:?}: {}", image_path, e))?;

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("Failed to create texture for {:?}: {}", image_path, e))?;

    // Unload the Image data from CPU memory
    drop(image);

    log::info!("Loaded sprite {:?} ({}x{})", image_path, texture.width(), texture.height());
    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("parachute-splash-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_resolve_assets_finds_both_sprites() {
        let dir = scratch_dir("ok");
        fs::write(dir.join(PARACHUTE_FILE), b"").unwrap();
        fs::write(dir.join(CLOUD_FILE), b"").unwrap();

        let assets = resolve_assets(&dir).unwrap();
        assert_eq!(assets.parachute, dir.join(PARACHUTE_FILE));
        assert_eq!(assets.cloud, dir.join(CLOUD_FILE));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_resolve_assets_names_missing_sprite() {
        let dir = scratch_dir("missing");
        fs::write(dir.join(PARACHUTE_FILE), b"").unwrap();

        let err = resolve_assets(&dir).unwrap_err();
        assert!(err.to_string().contains(CLOUD_FILE), "{}", err);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_resolve_assets_rejects_missing_directory() {
        let dir = std::env::temp_dir().join("parachute-splash-does-not-exist");
        assert!(resolve_assets(&dir).is_err());
    }
}
