//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the fetch snapshot, assembles the
//! display set, and writes the final static page.
//!
//! ## Page Outcomes
//!
//! Exactly one of three mutually exclusive pages is written to
//! `index.html`:
//!
//! - **Gallery**: hero, stats, and one tile per display-set photo.
//! - **Placeholder**: the explicit "under construction" state when the
//!   display set is empty — never a bare grid with no explanation.
//! - **Error**: written by the build boundary when the fetch fails, with
//!   a manual reload affordance. The generate stage itself never produces
//!   this; it only knows how to render it.
//!
//! ## Loading Strategy
//!
//! The first [`EAGER_COUNT`] tiles load eagerly — they are above or near
//! the fold — and the rest carry `loading="lazy"`. A performance policy,
//! not a correctness one, but the split is part of the page contract and
//! covered by tests.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping. CSS is
//! inlined into `<style>`: config-derived custom properties first, then
//! the static stylesheet.

use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::assemble::{self, DisplaySet};
use crate::config::{self, SiteConfig};
use crate::types::{PhotoItem, ProjectRecord, Snapshot};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Tiles up to this index load eagerly; the rest defer until scrolled near.
pub const EAGER_COUNT: usize = 8;

/// Which of the three page outcomes was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Gallery,
    Placeholder,
    ErrorPage,
}

/// Result of a generate run, for CLI reporting.
#[derive(Debug)]
pub struct GenerateReport {
    pub outcome: PageOutcome,
    /// Photos on the page (0 for placeholder and error outcomes).
    pub tiles: usize,
    pub eager: usize,
    pub lazy: usize,
}

/// Generate the site from a fetch snapshot.
///
/// Reads `snapshot.json`, assembles the display set, and writes
/// `index.html` into `output_dir`.
pub fn generate(snapshot_path: &Path, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let snapshot_content = fs::read_to_string(snapshot_path)?;
    let snapshot: Snapshot = serde_json::from_str(&snapshot_content)?;

    let set = assemble::assemble(
        snapshot.project.as_ref(),
        snapshot.photos,
        &snapshot.config.gallery,
    );

    let page = render_page(snapshot.project.as_ref(), &set, &snapshot.config);
    write_page(output_dir, page)?;

    let tiles = set.count();
    Ok(GenerateReport {
        outcome: if tiles == 0 {
            PageOutcome::Placeholder
        } else {
            PageOutcome::Gallery
        },
        tiles,
        eager: tiles.min(EAGER_COUNT),
        lazy: tiles.saturating_sub(EAGER_COUNT),
    })
}

/// Write the fetch-failure page.
///
/// Called from the build boundary when the gallery fetch errors: the
/// rendered outcome is the error view, never an unhandled fault.
pub fn write_error_page(
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let page = render_error_page(config);
    write_page(output_dir, page)?;
    Ok(GenerateReport {
        outcome: PageOutcome::ErrorPage,
        tiles: 0,
        eager: 0,
        lazy: 0,
    })
}

fn write_page(output_dir: &Path, page: Markup) -> Result<(), GenerateError> {
    fs::create_dir_all(output_dir)?;
    fs::write(output_dir.join("index.html"), page.into_string())?;
    Ok(())
}

/// Full page CSS: config-derived custom properties, then the static sheet.
fn site_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_layout_css(&config.gallery),
        CSS_STATIC
    )
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

/// Hero section: title, tagline, and the last-update line when the
/// project record is published.
fn hero(config: &SiteConfig, project: Option<&ProjectRecord>) -> Markup {
    html! {
        header.hero {
            h1.hero-title { (config.title) }
            p.hero-tagline { (config.tagline) }
            @if let Some(project) = project {
                p.hero-updated {
                    span.pulse-dot {}
                    "Última actualización: " (format_update_date(&project.updated_at))
                }
            }
            nav.hero-actions {
                a.button-primary href="#galeria" { "Explorar Galería" }
                a.button-outline href="#acerca" { "Acerca del Proyecto" }
            }
        }
    }
}

/// Stats section: photo count, narrative style, and the fixed energy card.
fn stats_section(count: usize, narrative_style: &str) -> Markup {
    html! {
        section.stats id="acerca" {
            h2 { "La Esencia del Proyecto" }
            p.section-lead {
                "Cada imagen cuenta una historia única, conectada con la energía ancestral de nuestra tierra."
            }
            div.stats-grid {
                div.stat-card {
                    span.stat-figure { (count) }
                    h3 { "Fotografías" }
                    p { "Momentos capturados en el tiempo" }
                }
                div.stat-card {
                    span.stat-figure { (narrative_style) }
                    h3 { "Estilo" }
                    p { "Narrativa fotográfica" }
                }
                div.stat-card {
                    span.stat-figure { "Ancestral" }
                    h3 { "Energía" }
                    p { "Conectada con lo sagrado" }
                }
            }
        }
    }
}

/// One gallery tile: image with hover overlay and 1-based index badge.
fn photo_tile(index: usize, count: usize, photo: &PhotoItem) -> Markup {
    let position = index + 1;
    let fallback_title = format!("Imagen {position}");
    let alt = photo.title.clone().unwrap_or_else(|| format!("Foto {position}"));
    let loading = if index < EAGER_COUNT { "eager" } else { "lazy" };

    html! {
        figure.photo-tile {
            img src=(photo.image_url) alt=(alt) loading=(loading);
            figcaption.tile-overlay {
                h3 { (photo.title.as_deref().unwrap_or(&fallback_title)) }
                @if let Some(caption) = &photo.caption {
                    p.tile-caption { (caption) }
                }
                p.tile-index { (position) " de " (count) }
            }
        }
    }
}

/// Gallery section: the tile grid, or the explicit empty placeholder.
fn gallery_section(set: &DisplaySet) -> Markup {
    html! {
        section.gallery id="galeria" {
            h2 { "Galería Visual" }
            p.section-lead {
                "Explora cada imagen cuidadosamente seleccionada para este fotorreportaje único."
            }
            @if set.is_empty() {
                (empty_state())
            } @else {
                div.photo-grid {
                    @for (index, photo) in set.photos.iter().enumerate() {
                        (photo_tile(index, set.count(), photo))
                    }
                }
            }
        }
    }
}

/// Placeholder shown instead of an unexplained empty grid.
fn empty_state() -> Markup {
    html! {
        div.empty-state {
            span.empty-glyph { "📸" }
            h3 { "Galería en Construcción" }
            p { "Las imágenes del fotorreportaje estarán disponibles próximamente." }
        }
    }
}

/// Footer with social links and the delegated editing studio.
fn site_footer(config: &SiteConfig) -> Markup {
    html! {
        footer.site-footer {
            h3 { (config.title) }
            p { "Un fotorreportaje que conecta con la esencia ancestral." }
            nav.footer-links {
                a href="https://instagram.com" { "Instagram" }
                a href="https://behance.net" { "Behance" }
                a href="mailto:hola@chakanarebelde.com" { "Contacto" }
                a href=(config.content.studio_url) { "Studio" }
            }
            p.footer-note { "© " (config.title) ". Todos los derechos reservados." }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the landing page: gallery or placeholder outcome.
pub fn render_page(
    project: Option<&ProjectRecord>,
    set: &DisplaySet,
    config: &SiteConfig,
) -> Markup {
    let content = html! {
        main {
            (hero(config, project))
            (stats_section(set.count(), &set.narrative_style))
            (gallery_section(set))
            (site_footer(config))
        }
    };
    base_document(&config.title, &site_css(config), content)
}

/// Renders the fetch-failure page with a manual reload affordance.
pub fn render_error_page(config: &SiteConfig) -> Markup {
    let content = html! {
        main.error-page {
            div.error-panel {
                span.error-glyph { "⚠️" }
                h1 { "Error al cargar el contenido" }
                p {
                    "No pudimos conectar con la base de datos. Por favor, intenta recargar la página."
                }
                a.button-primary href="" { "Recargar Página" }
            }
        }
    };
    base_document(&config.title, &site_css(config), content)
}

/// Date portion of the content service's ISO-8601 timestamp.
fn format_update_date(updated_at: &str) -> &str {
    updated_at.split('T').next().unwrap_or(updated_at)
}

// ============================================================================
// Tests
// ============================================================================
