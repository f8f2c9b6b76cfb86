use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub author: String,
    pub published_at: String,
    #[serde(default)]
    pub reading_time: String,
}

impl FrontMatter {
    pub fn into_post(self, content: String) -> Post {
        Post {
            id: self.id,
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content,
            author: self.author,
            published_at: self.published_at,
            reading_time: self.reading_time,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub published_at: String,
    pub reading_time: String,
}

#[derive(Serialize, Debug)]
pub struct PostsResponse<'a> {
    pub posts: &'a [Post],
}

#[derive(Serialize, Debug)]
pub struct PostResponse<'a> {
    pub post: &'a Post,
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl ErrorResponse {
    pub const POST_NOT_FOUND: ErrorResponse = ErrorResponse {
        error: "Post not found",
    };
}

#[derive(Serialize, Debug)]
pub struct EdgeHello {
    pub message: &'static str,
    pub runtime: &'static str,
    pub timestamp: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    #[serde(rename = "dependency")]
    Dependency,
    #[serde(rename = "devDependency")]
    DevDependency,
}

impl PackageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PackageKind::Dependency => "dependency",
            PackageKind::DevDependency => "devDependency",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: PackageKind,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PackageData {
    pub project_name: String,
    pub project_version: String,
    pub packages: Vec<PackageInfo>,
}
