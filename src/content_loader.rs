use std::path::{Path, PathBuf};

use gray_matter::{engine::YAML, Matter};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::{ContentConfig, ContentSource};
use crate::error::ContentError;
use crate::models::{FrontMatter, Post};
use crate::seed;

/// Builds the catalog from whichever source the config names.
pub async fn load_catalog(config: &ContentConfig) -> Result<Catalog, ContentError> {
    let posts = match config.source {
        ContentSource::Builtin => {
            debug!("using builtin posts");
            seed::posts()
        }
        ContentSource::Directory => load_posts(&config.dir).await?,
    };
    let catalog = Catalog::new(posts)?;
    if catalog.is_empty() {
        warn!("catalog has no posts");
    }
    info!(posts = catalog.len(), source = ?config.source, "catalog ready");
    Ok(catalog)
}

/// Reads every `*.md` file in `dir`, ordered by publication date then file
/// name.
pub async fn load_posts(dir: &Path) -> Result<Vec<Post>, ContentError> {
    let mut entries = fs::read_dir(dir).await.map_err(io_error(dir))?;
    let mut loaded: Vec<(PathBuf, Post)> = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(io_error(dir))? {
        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == "md") {
            let file_content = fs::read_to_string(&path).await.map_err(io_error(&path))?;
            let post = parse_post(&path, &file_content)?;
            debug!(slug = %post.slug, path = %path.display(), "loaded post");
            loaded.push((path, post));
        }
    }

    loaded.sort_by(|(a_path, a), (b_path, b)| {
        a.published_at
            .cmp(&b.published_at)
            .then_with(|| a_path.cmp(b_path))
    });
    Ok(loaded.into_iter().map(|(_, post)| post).collect())
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ContentError {
    let path = path.to_path_buf();
    move |source| ContentError::Io { path, source }
}

pub fn parse_post(path: &Path, file_content: &str) -> Result<Post, ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse::<FrontMatter>(file_content)
        .map_err(|e| ContentError::FrontMatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let front_matter = parsed.data.ok_or_else(|| ContentError::FrontMatter {
        path: path.to_path_buf(),
        message: "missing front matter".to_string(),
    })?;
    Ok(front_matter.into_post(parsed.content))
}
