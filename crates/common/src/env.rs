//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the router is built.

use std::path::Path;

use tracing::{info, warn};

/// Static assets served next to the score page.
pub const ASSET_FILES: [&str; 2] = ["rules.pdf", "scoring.jpeg"];

/// Check the assets directory; warn on anything missing.
///
/// Missing assets are not fatal: the page still works, the asset routes just 404.
/// Returns the number of expected asset files that were found.
pub async fn ensure_env(assets_dir: &str) -> anyhow::Result<usize> {
    match tokio::fs::metadata(assets_dir).await {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(anyhow::anyhow!("{assets_dir} exists but is not a directory")),
        Err(_) => {
            warn!(%assets_dir, "assets directory not found; rules and scoring assets will 404");
            return Ok(0);
        }
    }

    let mut found = 0;
    for file in ASSET_FILES {
        let path = Path::new(assets_dir).join(file);
        if tokio::fs::metadata(&path).await.is_ok() {
            found += 1;
        } else {
            warn!(path = %path.display(), "static asset missing");
        }
    }
    info!(%assets_dir, found, expected = ASSET_FILES.len(), "assets directory checked");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_dir_is_not_fatal() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("farkle_missing_{}", uuid::Uuid::new_v4()));
        let found = ensure_env(&dir.to_string_lossy()).await?;
        assert_eq!(found, 0);
        Ok(())
    }

    #[tokio::test]
    async fn counts_present_assets() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("farkle_assets_{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join("rules.pdf"), b"%PDF-1.4").await?;

        let found = ensure_env(&dir.to_string_lossy()).await?;
        assert_eq!(found, 1);

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn file_in_place_of_dir_is_an_error() -> anyhow::Result<()> {
        let file = std::env::temp_dir().join(format!("farkle_not_dir_{}", uuid::Uuid::new_v4()));
        tokio::fs::write(&file, b"x").await?;
        assert!(ensure_env(&file.to_string_lossy()).await.is_err());
        let _ = tokio::fs::remove_file(&file).await;
        Ok(())
    }
}
