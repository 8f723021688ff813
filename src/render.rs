//! Episode fragment rendering.
//!
//! Turns one [`Record`] into the fixed HTML structure the host page expects:
//! title, a hidden-payload paragraph carrying the full text via data
//! attributes, an optional read-more control, and a media block. Uses
//! [maud](https://maud.lambda.xyz/) — templates are type-checked Rust and
//! interpolation is auto-escaped.
//!
//! ## Hidden text payload
//!
//! The description and designer are never rendered as visible markup; the
//! host page's own toggle script controls presentation. They ride in
//! `data-full-text` / `data-designer` as JSON string literals, so quotes and
//! newlines are structurally escaped rather than substituted character by
//! character. Maud then entity-escapes the attribute value, and a client
//! recovers the exact text with a plain `JSON.parse` of the attribute (the
//! browser undoes the entity escaping when it reads the attribute).
//!
//! ## Media precedence
//!
//! Image (optionally wrapped in a link with an arrow glyph) → embedded
//! player frame for the external link → black placeholder block.

use crate::config::SiteConfig;
use crate::record::Record;
use maud::{Markup, PreEscaped, html};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert a video watch URL to its embeddable player form.
///
/// A `v` query parameter wins: `https://example.com/watch?v=ABC` becomes
/// `https://www.youtube.com/embed/ABC`. URLs already in embed-path form, and
/// anything else unrecognizable, pass through unchanged. Best effort only —
/// the URL is not validated.
pub fn convert_to_embed_url(url: &str) -> String {
    if let Some(id) = watch_video_id(url) {
        return format!("https://www.youtube.com/embed/{id}");
    }
    url.to_string()
}

fn watch_video_id(url: &str) -> Option<&str> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("v="))
        .filter(|id| !id.is_empty())
}

/// Render one episode fragment.
pub fn render_fragment(record: &Record, config: &SiteConfig) -> Result<Markup, RenderError> {
    let full_text = serde_json::to_string(&record.description)?;
    let designer = serde_json::to_string(record.designer.as_deref().unwrap_or(""))?;

    let show_read_more = record.description.chars().count() > config.read_more_threshold
        || record.designer.is_some();

    Ok(html! {
        div.episode {
            div.episode-content {
                // Title is trusted input, rendered unescaped like the rest
                // of the hand-written page markup
                h2.episode-title { (PreEscaped(record.title.as_str())) }
                p.episode-description data-full-text=(full_text) data-designer=(designer) {}
                @if show_read_more {
                    button.read-more-link onclick="toggleDescription(this)" style="display: none;" {
                        "Read more" span { "↓" }
                    }
                }
            }
            div.episode-image {
                (render_media(record, config))
            }
        }
    })
}

fn render_media(record: &Record, config: &SiteConfig) -> Markup {
    if let Some(file) = &record.media_file {
        let src = format!("{}/{}/{}", config.asset_dir, record.identifier, file);
        let img = html! {
            img src=(src) alt=(record.title)
                style="width: 100%; height: 100%; object-fit: cover; border-radius: 4px; cursor: pointer;";
        };
        return match &record.external_link {
            Some(link) => html! {
                a.episode-image-link href=(link) target="_blank" rel="noopener noreferrer" {
                    (img)
                    div.image-link-arrow { (arrow_glyph()) }
                }
            },
            None => img,
        };
    }

    if let Some(link) = &record.external_link {
        let embed = convert_to_embed_url(link);
        return html! {
            iframe src=(embed) frameborder="0"
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen {}
        };
    }

    html! {
        div style="width: 100%; height: 100%; background: #000;" {}
    }
}

/// Outward arrow shown over linked images.
fn arrow_glyph() -> Markup {
    html! {
        svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg" {
            path d="M5 12H19M19 12L12 5M19 12L12 19" stroke="white" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round" {}
        }
    }
}
