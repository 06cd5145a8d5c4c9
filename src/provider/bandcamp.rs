//! Bandcamp page providers.
//!
//! One [`BandcampProvider`] per page type. Each recognises its own URLs on
//! `*.bandcamp.com`, fetches the page through the injected [`PageFetcher`]
//! and extracts what it can:
//! - artist pages (`/`, `/music`): name, location, album and single URLs
//! - album pages (`/album/...`): name, artist, release date, cover, track listing
//! - track pages (`/track/...`): name, album, duration, cover
//!
//! Track listings are emitted as per-track lists (`tracks.url`, `tracks.name`,
//! `tracks.track_number`), one element per row, so they line up with the
//! album's `tracks` collection when merged.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use super::fetch::{PageFetcher, fetch_cached};
use super::{Capability, FetchCache, Provider, ProviderError, ProviderResult, Provision};
use crate::model::{AttrPath, Thing, ThingKind, Value};

/// Which kind of Bandcamp page a provider reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Artist,
    Album,
    Track,
}

impl PageKind {
    /// Classify a URL. Non-Bandcamp hosts and unknown paths yield `None`.
    pub fn of_url(url: &Url) -> Option<PageKind> {
        if !is_bandcamp_host(url) {
            return None;
        }

        let path = url.path();
        if let Some(rest) = path.strip_prefix("/album/") {
            return (!rest.is_empty()).then_some(PageKind::Album);
        }
        if let Some(rest) = path.strip_prefix("/track/") {
            return (!rest.is_empty()).then_some(PageKind::Track);
        }
        match path.trim_end_matches('/') {
            "" | "/music" => Some(PageKind::Artist),
            _ => None,
        }
    }

    /// The Thing kind pages of this type describe.
    pub fn thing_kind(self) -> ThingKind {
        match self {
            PageKind::Artist => ThingKind::Artist,
            PageKind::Album => ThingKind::Album,
            PageKind::Track => ThingKind::Track,
        }
    }

    fn provider_name(self) -> &'static str {
        match self {
            PageKind::Artist => "bandcamp-artist-page",
            PageKind::Album => "bandcamp-album-page",
            PageKind::Track => "bandcamp-track-page",
        }
    }

    fn capability_paths(self) -> &'static [&'static str] {
        match self {
            PageKind::Artist => &["name", "location", "albums.url", "singles.url"],
            PageKind::Album => &[
                "name",
                "artist",
                "release_date",
                "cover_url",
                "tracks.url",
                "tracks.name",
                "tracks.track_number",
            ],
            PageKind::Track => &["name", "album", "duration", "cover_url"],
        }
    }
}

pub fn is_bandcamp_host(url: &Url) -> bool {
    url.host_str()
        .is_some_and(|host| host.ends_with(".bandcamp.com"))
}

/// Provider for one type of Bandcamp page.
pub struct BandcampProvider {
    page: PageKind,
    fetcher: Arc<dyn PageFetcher>,
}

impl BandcampProvider {
    pub fn new(page: PageKind, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { page, fetcher }
    }

    pub fn artist(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::new(PageKind::Artist, fetcher)
    }

    pub fn album(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::new(PageKind::Album, fetcher)
    }

    pub fn track(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::new(PageKind::Track, fetcher)
    }

    /// Artist, album and track providers sharing one fetcher.
    pub fn all(fetcher: Arc<dyn PageFetcher>) -> Vec<Arc<dyn Provider>> {
        vec![
            Arc::new(Self::artist(Arc::clone(&fetcher))),
            Arc::new(Self::album(Arc::clone(&fetcher))),
            Arc::new(Self::track(fetcher)),
        ]
    }

    pub fn page(&self) -> PageKind {
        self.page
    }

    /// The first of the Thing's URLs this provider recognises.
    pub fn select_url(&self, thing: &Thing) -> Option<Url> {
        if thing.kind() != self.page.thing_kind() {
            return None;
        }
        let url = thing
            .source_urls()
            .filter_map(|url| Url::parse(url).ok())
            .find(|url| PageKind::of_url(url) == Some(self.page))?;

        // The site root may show a featured release; the grid lives on /music.
        if self.page == PageKind::Artist && url.path().trim_end_matches('/').is_empty() {
            return url.join("/music").ok();
        }
        Some(url)
    }

    /// Extract results from fetched page text.
    pub fn extract(&self, url: &Url, html: &str) -> Result<Provision, ProviderError> {
        let doc = Html::parse_document(html);
        let mut results = Provision::new();

        match self.page {
            PageKind::Artist => extract_artist(&doc, url, &mut results)?,
            PageKind::Album => extract_album(&doc, url, &mut results)?,
            PageKind::Track => extract_track(&doc, url, &mut results)?,
        }

        Ok(results)
    }
}

#[async_trait]
impl Provider for BandcampProvider {
    fn name(&self) -> &str {
        self.page.provider_name()
    }

    fn opens(&self, thing: &Thing) -> bool {
        self.select_url(thing).is_some()
    }

    fn capabilities(&self, thing: &Thing) -> Vec<Capability> {
        if thing.kind() != self.page.thing_kind() {
            return Vec::new();
        }
        self.page
            .capability_paths()
            .iter()
            .filter_map(|path| AttrPath::parse(path).ok())
            .map(|path| Capability::new(self.page.thing_kind(), path))
            .collect()
    }

    async fn open(&self, thing: &Thing, cache: &FetchCache) -> Result<Provision, ProviderError> {
        let Some(url) = self.select_url(thing) else {
            tracing::debug!("{} has no usable URL for this {}", self.name(), thing.kind());
            return Ok(Vec::new());
        };

        let page = fetch_cached(self.fetcher.as_ref(), cache, url.as_str()).await?;
        self.extract(&url, &page)
    }
}

// ============================================================================
// Extraction
// ============================================================================

fn extract_artist(doc: &Html, url: &Url, results: &mut Provision) -> Result<(), ProviderError> {
    let name = first(doc, r#"meta[property="og:site_name"]"#)
        .and_then(|meta| meta.value().attr("content"))
        .map(normalize)
        .or_else(|| first(doc, "#band-name-location .title").map(text_of))
        .filter(|name| !name.is_empty())
        .ok_or_else(|| missing(url, "an artist name"))?;
    push(results, "name", name);

    if let Some(location) = first(doc, "#band-name-location .location").map(text_of) {
        push(results, "location", location);
    }

    // Grid items link to album pages, or to track pages for singles.
    let mut albums = Vec::new();
    let mut singles = Vec::new();
    for item in all(doc, "li.music-grid-item a[href]") {
        let Some(release) = item
            .value()
            .attr("href")
            .and_then(|href| url.join(href).ok())
        else {
            continue;
        };
        match PageKind::of_url(&release) {
            Some(PageKind::Album) => albums.push(Value::Text(release.to_string())),
            Some(PageKind::Track) => singles.push(Value::Text(release.to_string())),
            _ => tracing::debug!("Skipping grid item {}", release),
        }
    }
    if !albums.is_empty() {
        push(results, "albums.url", Value::List(albums));
    }
    if !singles.is_empty() {
        push(results, "singles.url", Value::List(singles));
    }

    Ok(())
}

fn extract_album(doc: &Html, url: &Url, results: &mut Provision) -> Result<(), ProviderError> {
    push(results, "name", page_title(doc, url)?);

    if let Some(artist) = first(doc, r#"[itemprop="byArtist"]"#).map(text_of) {
        push(results, "artist", artist);
    }

    if let Some(date) = first(doc, r#"meta[itemprop="datePublished"]"#)
        .and_then(|meta| meta.value().attr("content"))
    {
        push(results, "release_date", normalize(date));
    }

    if let Some(cover) = cover_url(doc, url) {
        push(results, "cover_url", cover);
    }

    let mut rows = all(doc, "tr.track_row_view");
    if rows.is_empty() {
        rows = all(doc, r#"[itemprop="tracks"]"#);
    }
    if rows.is_empty() {
        return Ok(());
    }

    let mut urls = Vec::with_capacity(rows.len());
    let mut names = Vec::with_capacity(rows.len());
    let mut numbers = Vec::with_capacity(rows.len());

    // Blank placeholders keep the lists aligned with the rows; blanks are never merged.
    for row in rows {
        let track_url = within(row, ".title a[href]")
            .and_then(|link| link.value().attr("href"))
            .and_then(|href| url.join(href).ok())
            .map(|track| track.to_string())
            .unwrap_or_default();
        urls.push(Value::Text(track_url));

        let name = within(row, ".track-title").map(text_of).unwrap_or_default();
        names.push(Value::Text(name));

        let number = within(row, ".track-number-col")
            .map(text_of)
            .and_then(|text| text.trim_end_matches('.').parse::<i64>().ok())
            .map(Value::Integer)
            .unwrap_or_else(|| Value::Text(String::new()));
        numbers.push(number);
    }

    push(results, "tracks.url", Value::List(urls));
    push(results, "tracks.name", Value::List(names));
    push(results, "tracks.track_number", Value::List(numbers));

    Ok(())
}

fn extract_track(doc: &Html, url: &Url, results: &mut Provision) -> Result<(), ProviderError> {
    push(results, "name", page_title(doc, url)?);

    if let Some(album) = first(doc, "span.fromAlbum").map(text_of) {
        push(results, "album", album);
    }

    if let Some(seconds) = first(doc, r#"meta[itemprop="duration"]"#)
        .and_then(|meta| meta.value().attr("content"))
        .and_then(parse_duration)
    {
        push(results, "duration", seconds);
    }

    if let Some(cover) = cover_url(doc, url) {
        push(results, "cover_url", cover);
    }

    Ok(())
}

/// Album and track pages share the title markup.
fn page_title(doc: &Html, url: &Url) -> Result<String, ProviderError> {
    first(doc, "h2.trackTitle")
        .map(text_of)
        .or_else(|| {
            first(doc, r#"meta[name="title"]"#)
                .and_then(|meta| meta.value().attr("content"))
                .map(normalize)
        })
        .filter(|title| !title.is_empty())
        .ok_or_else(|| missing(url, "a page title"))
}

/// Full-size artwork: the popup link points at the `_10` size variant,
/// `_0` is the original upload.
fn cover_url(doc: &Html, url: &Url) -> Option<String> {
    let href = first(doc, "a.popupImage[href]")?.value().attr("href")?;
    let original = href.replace("_10.jpg", "_0");
    url.join(&original).ok().map(|cover| cover.to_string())
}

/// Parse a Bandcamp duration: ISO-8601 (`P00H03M20S`) or plain seconds.
pub fn parse_duration(text: &str) -> Option<i64> {
    let text = text.trim();

    if let Ok(seconds) = text.parse::<f64>() {
        return (seconds.is_finite() && seconds >= 0.0).then(|| seconds.round() as i64);
    }

    let body = text.strip_prefix('P')?;
    let mut total = 0.0_f64;
    let mut number = String::new();
    let mut seen_unit = false;

    for c in body.chars() {
        match c {
            '0'..='9' | '.' => number.push(c),
            'T' => {}
            'H' | 'M' | 'S' => {
                let n: f64 = number.parse().ok()?;
                number.clear();
                seen_unit = true;
                total += n * match c {
                    'H' => 3600.0,
                    'M' => 60.0,
                    _ => 1.0,
                };
            }
            _ => return None,
        }
    }

    (seen_unit && number.is_empty()).then(|| total.round() as i64)
}

fn push(results: &mut Provision, path: &str, value: impl Into<Value>) {
    if let Ok(path) = AttrPath::parse(path) {
        results.push(ProviderResult::new(path, value));
    }
}

fn missing(url: &Url, what: &str) -> ProviderError {
    ProviderError::MissingStructure {
        url: url.to_string(),
        what: what.to_string(),
    }
}

fn first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    doc.select(&selector).next()
}

fn all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => doc.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

fn within<'a>(element: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    element.select(&selector).next()
}

fn text_of(element: ElementRef<'_>) -> String {
    normalize(&element.text().collect::<String>())
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
