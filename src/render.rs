use std::sync::LazyLock;

use chrono::{Datelike, Utc};
use htmlescape::encode_minimal;
use regex::{Captures, Regex};
use tracing::warn;

use crate::config::SiteConfig;
use crate::formatter;
use crate::markdown::render_markdown_to_html;
use crate::models::{PackageInfo, PackageKind, Post};
use crate::packages;

const LAYOUT_HTML: &str = include_str!("../content/layout.html");
const NOT_FOUND_HTML: &str = include_str!("../content/not_found.html");
const HOME_MD: &str = include_str!("../content/home.md");
const ABOUT_MD: &str = include_str!("../content/about.md");

const LATEST_POSTS: usize = 3;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{ (\w+) \}\}").unwrap());

/// Turns catalog entries into complete HTML pages.
pub struct Renderer {
    site: SiteConfig,
    escape_html: bool,
    home_intro: String,
    about: String,
}

impl Renderer {
    pub fn new(site: SiteConfig, escape_html: bool) -> Self {
        let site_name = encode_minimal(&site.name);
        let home_intro = render_markdown_to_html(HOME_MD);
        let mut about = render_markdown_to_html(ABOUT_MD).replace("{{ site_name }}", &site_name);
        match packages::package_data() {
            Ok(data) => {
                about.push_str("<h2>Packages</h2>");
                about.push_str(&package_table(&data.packages));
            }
            Err(e) => warn!("Skipping package list on about page: {}", e),
        }
        Self {
            site,
            escape_html,
            home_intro,
            about,
        }
    }

    fn page(&self, title: &str, description: &str, content: &str) -> String {
        let title = encode_minimal(title);
        let description = encode_minimal(description);
        let site_name = encode_minimal(&self.site.name);
        let year = Utc::now().year().to_string();

        // One pass, so substituted values are never scanned for placeholders.
        PLACEHOLDER
            .replace_all(LAYOUT_HTML, |caps: &Captures| match &caps[1] {
                "title" => title.clone(),
                "description" => description.clone(),
                "site_name" => site_name.clone(),
                "year" => year.clone(),
                "content" => content.to_string(),
                _ => caps[0].to_string(),
            })
            .into_owned()
    }

    pub fn home(&self, posts: &[Post]) -> String {
        let mut latest: Vec<&Post> = posts.iter().collect();
        latest.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        latest.truncate(LATEST_POSTS);

        let mut body = String::new();
        body.push_str("<section class=\"prose dark:prose-invert mx-auto\">");
        body.push_str(&self.home_intro);
        body.push_str("</section>");
        if !latest.is_empty() {
            body.push_str("<section class=\"mt-12\"><h2 class=\"text-2xl font-bold mb-6\">Latest posts</h2>");
            body.push_str(&post_cards(latest));
            body.push_str("</section>");
        }
        self.page(&self.site.title, &self.site.description, &body)
    }

    pub fn blog_index(&self, posts: &[Post]) -> String {
        let description = "Read our latest blog posts.";
        let body = format!(
            "<div class=\"space-y-8\"><section class=\"text-center\">\
             <h1 class=\"text-4xl font-bold text-gray-900 dark:text-white mb-4\">Blog</h1>\
             <p class=\"text-xl text-gray-600 dark:text-gray-300\">{}</p></section>\
             <section>{}</section></div>",
            description,
            post_cards(posts.iter())
        );
        self.page(&format!("Blog | {}", self.site.name), description, &body)
    }

    pub fn post(&self, post: &Post) -> String {
        let content = if self.escape_html {
            formatter::format_escaped(&post.content)
        } else {
            formatter::format(&post.content)
        };
        let body = format!(
            "<article class=\"prose dark:prose-invert lg:prose-lg mx-auto\">\
             <header class=\"mb-8 not-prose\">\
             <h1 class=\"text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4\">{}</h1>\
             {}</header>\
             <div class=\"prose dark:prose-invert lg:prose-lg\">{}</div></article>",
            encode_minimal(&post.title),
            byline(post),
            content
        );
        self.page(
            &format!("{} | {}", post.title, self.site.name),
            &post.excerpt,
            &body,
        )
    }

    pub fn about(&self) -> String {
        let body = format!(
            "<div class=\"prose dark:prose-invert max-w-3xl mx-auto\">{}</div>",
            self.about
        );
        self.page(
            &format!("About | {}", self.site.name),
            &format!("Learn more about {} and how it was built.", self.site.name),
            &body,
        )
    }

    pub fn not_found(&self) -> String {
        self.page(
            &format!("404 - Page Not Found | {}", self.site.name),
            "The page you are looking for does not exist.",
            NOT_FOUND_HTML,
        )
    }
}

fn byline(post: &Post) -> String {
    format!(
        "<div class=\"flex items-center text-sm text-gray-500 dark:text-gray-400 mb-4\">\
         <span>{}</span><span class=\"mx-2\">•</span>\
         <span>{}</span><span class=\"mx-2\">•</span>\
         <span>{}</span></div>",
        encode_minimal(&post.author),
        encode_minimal(&post.published_at),
        encode_minimal(&post.reading_time)
    )
}

fn package_table(packages: &[PackageInfo]) -> String {
    let mut table = String::from(
        "<div class=\"overflow-x-auto\"><table class=\"min-w-full divide-y divide-gray-200 dark:divide-gray-700\">\
         <thead><tr><th>Package Name</th><th>Version</th><th>Type</th></tr></thead><tbody>",
    );
    for package in packages {
        let badge = match package.kind {
            PackageKind::Dependency => "bg-green-100 text-green-800",
            PackageKind::DevDependency => "bg-blue-100 text-blue-800",
        };
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td><span class=\"px-2 rounded-full {badge}\">{}</span></td></tr>",
            encode_minimal(&package.name),
            encode_minimal(&package.version),
            package.kind.as_str(),
        ));
    }
    table.push_str("</tbody></table></div>");
    table
}

fn post_cards<'a>(posts: impl IntoIterator<Item = &'a Post>) -> String {
    let mut cards = String::from("<div class=\"grid gap-6 md:grid-cols-2 lg:grid-cols-3\">");
    for post in posts {
        let href = format!("/blog/{}", encode_minimal(&post.slug));
        cards.push_str(&format!(
            "<div class=\"bg-white dark:bg-gray-800 rounded-lg shadow-md p-6\">\
             <a href=\"{href}\"><h2 class=\"text-xl font-semibold mb-2\">{}</h2></a>\
             {}<p class=\"text-gray-600 dark:text-gray-300 mb-4\">{}</p>\
             <a href=\"{href}\" class=\"text-blue-600 hover:underline\">Read more</a></div>",
            encode_minimal(&post.title),
            byline(post),
            encode_minimal(&post.excerpt),
        ));
    }
    cards.push_str("</div>");
    cards
}
