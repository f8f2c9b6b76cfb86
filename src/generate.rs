//! Pre-renders every page and API response to plain files.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::GenerateError;
use crate::models::{PostResponse, PostsResponse};
use crate::packages;
use crate::state::AppState;

pub const DEFAULT_OUT_DIR: &str = "dist";

/// Writes the whole site below `out_dir` and returns how many files were
/// written.
pub async fn generate(state: &AppState, out_dir: &Path) -> Result<usize, GenerateError> {
    if let Some(slug) = state.catalog.slugs().find(|slug| !is_safe_slug(slug)) {
        return Err(GenerateError::UnsafeSlug(slug.to_string()));
    }
    let posts = state.catalog.list_all();

    let mut written = 0;
    let renderer = &state.renderer;

    write_file(&out_dir.join("index.html"), &renderer.home(posts)).await?;
    write_file(&out_dir.join("blog/index.html"), &renderer.blog_index(posts)).await?;
    write_file(&out_dir.join("about/index.html"), &renderer.about()).await?;
    write_file(&out_dir.join("404.html"), &renderer.not_found()).await?;
    written += 4;

    write_json(&out_dir.join("api/posts.json"), &PostsResponse { posts }).await?;
    let package_data = packages::package_data().unwrap_or_else(|e| {
        warn!("Failed to read package manifest: {}", e);
        packages::empty()
    });
    write_json(&out_dir.join("api/packages.json"), &package_data).await?;
    written += 2;

    for post in posts {
        let page = out_dir.join("blog").join(&post.slug).join("index.html");
        write_file(&page, &renderer.post(post)).await?;

        let json = out_dir.join("api/post").join(format!("{}.json", post.slug));
        write_json(&json, &PostResponse { post }).await?;
        written += 2;
    }

    info!(files = written, out = %out_dir.display(), "site generated");
    Ok(written)
}

fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\'])
}

async fn write_file(path: &Path, contents: &str) -> Result<(), GenerateError> {
    let write_err = |source| GenerateError::Write {
        path: PathBuf::from(path),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(write_err)?;
    }
    fs::write(path, contents).await.map_err(write_err)?;
    debug!(path = %path.display(), "wrote");
    Ok(())
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), GenerateError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| GenerateError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    write_file(path, &json).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use crate::models::Post;
    use crate::seed;

    fn state(posts: Vec<Post>) -> AppState {
        AppState::new(&Config::default(), Catalog::new(posts).unwrap())
    }

    #[tokio::test]
    async fn writes_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(seed::posts());

        let written = generate(&state, dir.path()).await.unwrap();
        assert_eq!(written, 6 + 2 * 3);

        for rel in ["index.html", "blog/index.html", "about/index.html", "404.html"] {
            assert!(dir.path().join(rel).is_file(), "{rel}");
        }
        let post_page = std::fs::read_to_string(
            dir.path().join("blog/understanding-ssg-in-nextjs/index.html"),
        )
        .unwrap();
        assert!(post_page.contains("<h2>What is SSG?</h2>"));

        let listing: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("api/posts.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(listing["posts"].as_array().unwrap().len(), 3);

        let single: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("api/post/understanding-ssg-in-nextjs.json"))
                .unwrap(),
        )
        .unwrap();
        assert_eq!(single["post"]["title"], "Understanding Static Site Generation (SSG) in Next.js");

        let packages: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("api/packages.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(packages["projectName"], "edge-blog");
    }

    #[tokio::test]
    async fn refuses_slugs_that_escape_the_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut post = seed::posts().remove(0);
        post.slug = "../outside".into();

        let err = generate(&state(vec![post]), dir.path()).await.unwrap_err();
        assert!(matches!(err, GenerateError::UnsafeSlug(slug) if slug == "../outside"));
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn slug_safety() {
        assert!(is_safe_slug("hello-world"));
        assert!(!is_safe_slug(".."));
        assert!(!is_safe_slug("a/b"));
        assert!(!is_safe_slug("a\\b"));
    }
}
