//! Behavioural Patterns: Iterator
//! Example: playlist traversal without exposing the underlying collection
//!
//! Run with: cargo run --bin iterator

pub struct Video {
    title: String,
}

impl Video {
    pub fn new(title: impl Into<String>) -> Self {
        Video { title: title.into() }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// The iterable contract: a playlist hands out an iterator and keeps its
/// storage private. The client never learns whether videos sit in a Vec,
/// a database page, or anything else.
pub trait Playlist {
    fn create_iterator(&self) -> PlaylistIter<'_>;
}

pub struct YouTubePlaylist {
    videos: Vec<Video>,
}

impl YouTubePlaylist {
    pub fn new() -> Self {
        YouTubePlaylist { videos: Vec::new() }
    }

    pub fn add_video(&mut self, video: Video) {
        self.videos.push(video);
    }
}

impl Playlist for YouTubePlaylist {
    fn create_iterator(&self) -> PlaylistIter<'_> {
        PlaylistIter {
            videos: &self.videos,
            position: 0,
        }
    }
}

/// Concrete iterator: insertion-order traversal. `hasNext`/`next` from the
/// classic formulation collapse into `Iterator::next` returning `Option`.
pub struct PlaylistIter<'a> {
    videos: &'a [Video],
    position: usize,
}

impl<'a> Iterator for PlaylistIter<'a> {
    type Item = &'a Video;

    fn next(&mut self) -> Option<Self::Item> {
        let video = self.videos.get(self.position)?;
        self.position += 1;
        Some(video)
    }
}

// For `for video in &playlist` without spelling out create_iterator().
impl<'a> IntoIterator for &'a YouTubePlaylist {
    type Item = &'a Video;
    type IntoIter = PlaylistIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.create_iterator()
    }
}

// =============================================================================
// Version 1: the playlist leaks its storage and the client does the walking
// =============================================================================

mod naive {
    use super::Video;

    pub struct YouTubePlaylist {
        videos: Vec<Video>,
    }

    impl YouTubePlaylist {
        pub fn new() -> Self {
            YouTubePlaylist { videos: Vec::new() }
        }

        pub fn add_video(&mut self, video: Video) {
            self.videos.push(video);
        }

        // The client now depends on videos being a slice, and every caller
        // re-implements the traversal.
        pub fn videos(&self) -> &[Video] {
            &self.videos
        }
    }
}

fn main() {
    println!("=== Version 1: Client walks the raw collection ===\n");

    let mut exposed = naive::YouTubePlaylist::new();
    exposed.add_video(Video::new("LLD Tutorial"));
    exposed.add_video(Video::new("System Designs Basics"));

    for video in exposed.videos() {
        println!("{}", video.title());
    }

    println!("\n=== Version 2: Iterator Pattern ===\n");

    let mut playlist = YouTubePlaylist::new();
    playlist.add_video(Video::new("LLD Tutorial"));
    playlist.add_video(Video::new("System Designs Basics"));

    let iterator = playlist.create_iterator();
    for video in iterator {
        println!("{}", video.title());
    }

    println!("\n=== Two independent iterators over one playlist ===\n");

    let mut first = playlist.create_iterator();
    let mut second = playlist.create_iterator();
    println!("first:  {}", first.next().unwrap().title());
    println!("first:  {}", first.next().unwrap().title());
    println!("second: {}", second.next().unwrap().title());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist() -> YouTubePlaylist {
        let mut playlist = YouTubePlaylist::new();
        playlist.add_video(Video::new("LLD Tutorial"));
        playlist.add_video(Video::new("System Designs Basics"));
        playlist.add_video(Video::new("UML Crash Course"));
        playlist
    }

    #[test]
    fn test_insertion_order_each_exactly_once() {
        let playlist = playlist();
        let titles: Vec<&str> = playlist
            .create_iterator()
            .map(|video| video.title())
            .collect();

        assert_eq!(
            titles,
            ["LLD Tutorial", "System Designs Basics", "UML Crash Course"]
        );
    }

    #[test]
    fn test_exhaustion_signalled_only_after_last_element() {
        let playlist = playlist();
        let mut iter = playlist.create_iterator();

        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        // Stays exhausted.
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_independent_iterators_do_not_interfere() {
        let playlist = playlist();
        let mut first = playlist.create_iterator();
        let mut second = playlist.create_iterator();

        first.next();
        first.next();
        assert_eq!(second.next().unwrap().title(), "LLD Tutorial");
        assert_eq!(first.next().unwrap().title(), "UML Crash Course");
    }

    #[test]
    fn test_empty_playlist_is_immediately_exhausted() {
        let playlist = YouTubePlaylist::new();
        assert!(playlist.create_iterator().next().is_none());
    }

    #[test]
    fn test_for_loop_over_reference() {
        let playlist = playlist();
        let mut count = 0;
        for video in &playlist {
            assert!(!video.title().is_empty());
            count += 1;
        }
        assert_eq!(count, 3);
    }
}
