use log::warn;
use yew::prelude::*;
use yew_router::components::Link;

use crate::blog::body::{parse_body, Block};
use crate::components::layout::{Footer, Header};
use crate::components::scroll_to_top::{scroll_window_to_top, ScrollToTop};
use crate::components::sections::CallToAction;
use crate::content::articles::{self, BlogArticle, ARTICLES};
use crate::seo::{use_page_meta, PageMeta};
use crate::Route;

/// Body blocks for display. The page already shows the title as its `<h1>`,
/// so a leading top-level heading repeating it is dropped.
pub fn article_blocks(article: &BlogArticle) -> Vec<Block> {
    let mut blocks = parse_body(article.body);
    if matches!(blocks.first(), Some(Block::Heading { level: 1, text }) if text == article.title) {
        blocks.remove(0);
    }
    blocks
}

fn render_block(block: &Block) -> Html {
    match block {
        Block::Heading { level: 1, text } => html! { <h2>{text}</h2> },
        Block::Heading { level: 2, text } => html! { <h3>{text}</h3> },
        Block::Heading { text, .. } => html! { <h4>{text}</h4> },
        Block::Paragraph(text) => html! { <p>{text}</p> },
        Block::BulletList(items) => html! {
            <ul>{ for items.iter().map(|item| html! { <li>{item}</li> }) }</ul>
        },
        Block::NumberedList(items) => html! {
            <ol>{ for items.iter().map(|item| html! { <li>{item}</li> }) }</ol>
        },
        Block::Separator => html! { <hr /> },
    }
}

#[hook]
fn use_scroll_to_top_on<T: PartialEq + 'static>(key: T) {
    use_effect_with_deps(
        |_| {
            scroll_window_to_top();
            || ()
        },
        key,
    );
}

#[function_component(BlogList)]
pub fn blog_list() -> Html {
    use_page_meta(PageMeta::new(
        "DPF Cleaning Blog - Expert Tips & Guides | Dodgy Garage",
        "Expert advice on DPF cleaning, AdBlue faults and EGR cooler problems from a mobile diesel specialist in Somerset.",
    ));
    use_scroll_to_top_on(());

    html! {
        <div class="blog-list-page">
            <Header section_links={false} />
            <section class="blog-list-hero">
                <h1>{"DPF Cleaning Blog"}</h1>
                <p>{"Expert tips, guides and advice on keeping your diesel running clean"}</p>
            </section>
            <section class="blog-list-section">
                { for ARTICLES.iter().map(|article| html! {
                    <div class="blog-post-preview">
                        <Link<Route> to={Route::Article { id: article.id.to_string() }}>
                            <div class="blog-preview-emoji">{article.emoji}</div>
                            <span class="blog-category">{article.category}</span>
                            <h2>{article.title}</h2>
                            <p>{article.excerpt}</p>
                            <span class="blog-date">
                                {format!("{} • {} • {}", article.author, article.date, article.read_time)}
                            </span>
                        </Link<Route>>
                    </div>
                }) }
            </section>
            <CallToAction />
            <Footer />
            <ScrollToTop />
            <style>
                {r#"
                .blog-list-hero {
                    text-align: center;
                    padding: 5rem 1rem 3rem;
                    background: linear-gradient(135deg, #111827, #1f2937);
                    color: #ffffff;
                }
                .blog-list-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .blog-list-hero p {
                    color: #d1d5db;
                }
                .blog-list-section {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                }
                .blog-post-preview {
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 2rem;
                    margin-bottom: 2rem;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .blog-post-preview:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
                }
                .blog-post-preview a {
                    color: inherit;
                    text-decoration: none;
                }
                .blog-preview-emoji {
                    font-size: 2.5rem;
                }
                .blog-category {
                    color: #FF9500;
                    font-size: 0.8rem;
                    font-weight: 700;
                    text-transform: uppercase;
                }
                .blog-post-preview p {
                    color: #4b5563;
                }
                .blog-date {
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogArticlePageProps {
    pub id: AttrValue,
}

#[function_component(BlogArticlePage)]
pub fn blog_article_page(props: &BlogArticlePageProps) -> Html {
    let article = articles::find(&props.id);

    use_page_meta(match article {
        Some(article) => PageMeta::new(
            format!("{} | Dodgy Garage", article.title),
            article.excerpt,
        ),
        None => PageMeta::new(
            "Article Not Found | Dodgy Garage",
            "The article you're looking for doesn't exist.",
        ),
    });
    use_scroll_to_top_on(props.id.clone());

    let Some(article) = article else {
        warn!("Unknown article id: {}", props.id);
        return html! {
            <div class="blog-page">
                <Header section_links={false} />
                <div class="article-missing">
                    <h1>{"Article Not Found"}</h1>
                    <p>{"Sorry, we couldn't find that article."}</p>
                    <Link<Route> to={Route::Blog} classes="back-link">{"← Back to Blog"}</Link<Route>>
                </div>
                <Footer />
                <style>{ARTICLE_CSS}</style>
            </div>
        };
    };

    let blocks = article_blocks(article);

    html! {
        <div class="blog-page">
            <Header section_links={false} />
            <article class="blog-content">
                <Link<Route> to={Route::Blog} classes="back-link">{"← Back to Blog"}</Link<Route>>
                <div class="blog-header">
                    <span class="blog-category">{article.category}</span>
                    <h1>{article.title}</h1>
                    <div class="blog-meta">
                        <span>{article.author}</span>
                        <span>{article.date}</span>
                        <span>{article.read_time}</span>
                    </div>
                </div>
                <div class="blog-body">
                    { for blocks.iter().map(render_block) }
                </div>
            </article>
            <CallToAction heading="Need Help With Your Diesel?" />
            <section class="related-articles">
                <h2>{"Related Articles"}</h2>
                <div class="related-grid">
                    { for articles::related(article.id).map(|other| html! {
                        <Link<Route> to={Route::Article { id: other.id.to_string() }} classes="related-card">
                            <span class="related-emoji">{other.emoji}</span>
                            <h3>{other.title}</h3>
                            <p>{other.excerpt}</p>
                        </Link<Route>>
                    }) }
                </div>
            </section>
            <Footer />
            <ScrollToTop />
            <style>{ARTICLE_CSS}</style>
        </div>
    }
}

const ARTICLE_CSS: &str = r#"
.blog-content,
.article-missing {
    max-width: 48rem;
    margin: 0 auto;
    padding: 3rem 1rem;
}
.article-missing {
    text-align: center;
    min-height: 50vh;
}
.back-link {
    color: #FF9500;
    text-decoration: none;
    font-weight: 600;
}
.blog-header {
    margin: 2rem 0;
    border-bottom: 1px solid #e5e7eb;
    padding-bottom: 1.5rem;
}
.blog-header h1 {
    font-size: 2.5rem;
    line-height: 1.2;
}
.blog-category {
    color: #FF9500;
    font-size: 0.8rem;
    font-weight: 700;
    text-transform: uppercase;
}
.blog-meta {
    display: flex;
    gap: 1.5rem;
    color: #6b7280;
    font-size: 0.875rem;
}
.blog-body {
    color: #374151;
    line-height: 1.8;
}
.blog-body p {
    white-space: pre-line;
}
.blog-body h2,
.blog-body h3,
.blog-body h4 {
    color: #111827;
    margin-top: 2rem;
}
.blog-body hr {
    border: none;
    border-top: 1px solid #e5e7eb;
    margin: 2rem 0;
}
.related-articles {
    max-width: 64rem;
    margin: 0 auto;
    padding: 4rem 1rem;
}
.related-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1.5rem;
}
.related-card {
    display: block;
    border: 1px solid #e5e7eb;
    border-radius: 12px;
    padding: 1.5rem;
    color: inherit;
    text-decoration: none;
}
.related-card:hover {
    border-color: #FF9500;
}
.related-emoji {
    font-size: 2rem;
}
@media (max-width: 768px) {
    .related-grid {
        grid-template-columns: 1fr;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_title_heading_is_not_repeated() {
        for article in ARTICLES {
            let blocks = article_blocks(article);
            assert!(!blocks.is_empty());
            assert_ne!(
                blocks[0],
                Block::Heading { level: 1, text: article.title.to_string() },
                "{}",
                article.id
            );
        }
    }

    #[test]
    fn other_headings_survive() {
        let article = articles::find("dpf-signs").unwrap();
        let blocks = article_blocks(article);
        assert!(blocks.iter().any(|b| matches!(b, Block::Heading { .. })));
    }
}
