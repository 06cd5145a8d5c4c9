//! Test utilities and fixtures for art-secretary tests.
//!
//! This module provides path helpers, entity factories and canned Bandcamp
//! pages to reduce boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use art_secretary::test_utils::{album_with_tracks, paths};
//!
//! #[test]
//! fn test_something() {
//!     let album = album_with_tracks(2);
//!     let unsatisfied = filter_unsatisfied(&album, &paths(&["name", "tracks.name"]));
//!     // ... test logic
//! }
//! ```

use crate::model::{Album, AttrPath, Thing, Track};

/// Parse a dotted path, panicking on malformed input.
pub fn path(text: &str) -> AttrPath {
    AttrPath::parse(text).expect("Invalid test path")
}

/// Parse several dotted paths, preserving order.
pub fn paths(texts: &[&str]) -> Vec<AttrPath> {
    texts.iter().map(|text| path(text)).collect()
}

/// An album with an unknown name and `count` blank tracks.
pub fn album_with_tracks(count: usize) -> Thing {
    Thing::from(Album::new().with_tracks((0..count).map(|_| Track::new())))
}

pub const ARTIST_URL: &str = "https://erikscheele.bandcamp.com/music";
pub const ALBUM_URL: &str = "https://erikscheele.bandcamp.com/album/one-year-older";
pub const TRACK_URL: &str = "https://erikscheele.bandcamp.com/track/first-light";

/// Trimmed-down Bandcamp artist discography page.
pub const ARTIST_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta property="og:site_name" content="Erik Scheele">
    <meta property="og:type" content="band">
</head>
<body>
    <p id="band-name-location">
        <span class="title">Erik Scheele</span>
        <span class="location secondaryText">Stockholm, Sweden</span>
    </p>
    <ol id="music-grid" class="editable-grid music-grid">
        <li class="music-grid-item square first-four">
            <a href="/album/one-year-older">
                <div class="art"><img src="https://f4.bcbits.com/img/a0123456789_2.jpg" alt=""></div>
                <p class="title">One Year Older</p>
            </a>
        </li>
        <li class="music-grid-item square first-four">
            <a href="/track/northern-single">
                <p class="title">Northern Single</p>
            </a>
        </li>
        <li class="music-grid-item square first-four">
            <a href="/album/two-years-wiser">
                <p class="title">Two Years Wiser</p>
            </a>
        </li>
    </ol>
</body>
</html>"#;

/// Trimmed-down Bandcamp album page with three tracks; the last has no page.
pub const ALBUM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta name="title" content="One Year Older, by Erik Scheele">
</head>
<body>
    <div id="name-section">
        <h2 class="trackTitle" itemprop="name">
            One Year Older
        </h2>
        <h3 style="margin:0px;">
            by <span><a href="https://erikscheele.bandcamp.com" itemprop="byArtist">Erik Scheele</a></span>
        </h3>
    </div>
    <div id="tralbumArt">
        <a class="popupImage" href="https://f4.bcbits.com/img/a0123456789_10.jpg">
            <img src="https://f4.bcbits.com/img/a0123456789_16.jpg" alt="One Year Older">
        </a>
    </div>
    <meta itemprop="datePublished" content="20191004">
    <table class="track_list track_table" id="track_table">
        <tr class="track_row_view linked" rel="tracknum=1">
            <td class="track-number-col"><div class="track_number secondaryText">1.</div></td>
            <td class="title-col">
                <div class="title">
                    <a href="/track/first-light"><span class="track-title">First Light</span></a>
                    <span class="time secondaryText">03:20</span>
                </div>
            </td>
        </tr>
        <tr class="track_row_view linked" rel="tracknum=2">
            <td class="track-number-col"><div class="track_number secondaryText">2.</div></td>
            <td class="title-col">
                <div class="title">
                    <a href="/track/second-wind"><span class="track-title">Second Wind</span></a>
                    <span class="time secondaryText">04:13</span>
                </div>
            </td>
        </tr>
        <tr class="track_row_view" rel="tracknum=3">
            <td class="track-number-col"><div class="track_number secondaryText">3.</div></td>
            <td class="title-col">
                <div class="title">
                    <span class="track-title">Hidden Outro</span>
                </div>
            </td>
        </tr>
    </table>
</body>
</html>"#;

/// Trimmed-down Bandcamp track page.
pub const TRACK_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta name="title" content="First Light, by Erik Scheele">
</head>
<body>
    <div id="name-section">
        <h2 class="trackTitle" itemprop="name">First Light</h2>
        <h3 class="albumTitle">
            from <span class="fromAlbum">One Year Older</span>
            by <span><a href="https://erikscheele.bandcamp.com">Erik Scheele</a></span>
        </h3>
    </div>
    <div id="tralbumArt">
        <a class="popupImage" href="https://f4.bcbits.com/img/a0123456789_10.jpg">
            <img src="https://f4.bcbits.com/img/a0123456789_16.jpg" alt="First Light">
        </a>
    </div>
    <meta itemprop="duration" content="P00H03M20S">
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_with_tracks() {
        let album = album_with_tracks(3);
        assert!(!album.is_known("name"));
        assert_eq!(album.children("tracks").map(|tracks| tracks.len()), Some(3));
    }

    #[test]
    fn test_paths_preserve_order() {
        let parsed = paths(&["tracks.name", "name"]);
        assert_eq!(parsed[0].to_string(), "tracks.name");
        assert_eq!(parsed[1].to_string(), "name");
    }
}
