use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use uuid::Uuid;

static UPLOADS_DIR: OnceCell<PathBuf> = OnceCell::new();

/// Remember the uploads directory and make sure it exists.
pub fn initialize_storage(dir: PathBuf) -> Result<()> {
    std::fs::create_dir_all(&dir)?;
    UPLOADS_DIR
        .set(dir)
        .map_err(|_| anyhow::anyhow!("storage already initialized"))?;
    Ok(())
}

pub fn uploads_dir() -> &'static PathBuf {
    UPLOADS_DIR.get().expect("storage not initialized")
}

/// Keep only characters that are safe in a file name; everything else
/// becomes an underscore.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

/// Store one uploaded blob and return the public URL path it will be
/// served under. The uuid prefix keeps concurrent uploads of equally
/// named files apart.
pub async fn put(bytes: &[u8], original_name: &str) -> Result<String> {
    let file_name = format!("{}_{}", Uuid::new_v4(), sanitize_file_name(original_name));
    let path = uploads_dir().join(&file_name);
    tokio::fs::write(&path, bytes).await?;
    tracing::debug!("Stored upload {} ({} bytes)", path.display(), bytes.len());
    Ok(format!("/uploads/{}", file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_file_name("photo-1.png"), "photo-1.png");
        assert_eq!(sanitize_file_name("商品 写真.png"), "商品_写真.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_file_name(""), "file");
    }
}
