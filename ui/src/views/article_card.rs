use api::SearchResult;
use dioxus::prelude::*;

/// One article in a feed.
#[component]
pub fn ArticleCard(article: SearchResult, highlighted: bool) -> Element {
    let SearchResult {
        title,
        content,
        image,
        ..
    } = article;

    rsx! {
        article {
            class: if highlighted { "article-card article-card--highlighted" } else { "article-card" },
            if let Some(src) = image {
                img { class: "article-card__image", src: "{src}", alt: "{title}" }
            }
            div { class: "article-card__body",
                h2 { class: "article-card__title", "{title}" }
                if !content.is_empty() {
                    p { class: "article-card__excerpt", "{content}" }
                }
            }
        }
    }
}

/// Feed body shared by the home and discover views.
#[component]
pub fn ArticleFeed(articles: Vec<SearchResult>) -> Element {
    rsx! {
        div { class: "article-feed",
            for (index, article) in articles.into_iter().enumerate() {
                ArticleCard { key: "{article.id}", article, highlighted: index == 0 }
            }
        }
    }
}
