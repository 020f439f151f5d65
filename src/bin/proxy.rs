//! Structural Patterns: Proxy
//! Example: caching proxy in front of a video downloader
//!
//! Run with: cargo run --bin proxy

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

pub trait VideoDownloader {
    fn download_video(&self, video_url: &str) -> String;
}

/// The real subject: always downloads. Counts its invocations so the proxy's
/// short-circuiting is observable.
pub struct RealVideoDownloader {
    downloads: Cell<usize>,
}

impl RealVideoDownloader {
    pub fn new() -> Self {
        RealVideoDownloader {
            downloads: Cell::new(0),
        }
    }

    pub fn download_count(&self) -> usize {
        self.downloads.get()
    }
}

impl VideoDownloader for RealVideoDownloader {
    fn download_video(&self, video_url: &str) -> String {
        self.downloads.set(self.downloads.get() + 1);
        println!("Downloading video from {}", video_url);
        format!("Video content from {}", video_url)
    }
}

/// The proxy: same contract, but caching, narration and any future access
/// control live here instead of bloating the real downloader.
pub struct CachedVideoDownloader {
    real: RealVideoDownloader,
    cache: RefCell<HashMap<String, String>>,
}

impl CachedVideoDownloader {
    pub fn new() -> Self {
        CachedVideoDownloader {
            real: RealVideoDownloader::new(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn real_download_count(&self) -> usize {
        self.real.download_count()
    }
}

impl VideoDownloader for CachedVideoDownloader {
    fn download_video(&self, video_url: &str) -> String {
        if let Some(video) = self.cache.borrow().get(video_url) {
            println!("Returning cached video for: {}", video_url);
            return video.clone();
        }

        println!("Cache miss. Downloading video ...");
        let video = self.real.download_video(video_url);
        self.cache
            .borrow_mut()
            .insert(video_url.to_string(), video.clone());
        video
    }
}

fn main() {
    println!("=== Version 1: every request hits the real downloader ===\n");

    let downloader = RealVideoDownloader::new();
    downloader.download_video("https://example.com/proxy-pattern");
    downloader.download_video("https://example.com/proxy-pattern");
    println!("Real downloads performed: {}", downloader.download_count());

    println!("\n=== Version 2: Proxy Pattern ===\n");

    let cached = CachedVideoDownloader::new();
    cached.download_video("https://example.com/proxy-pattern");
    cached.download_video("https://example.com/proxy-pattern");
    cached.download_video("https://example.com/flyweight-pattern");
    println!("Real downloads performed: {}", cached.real_download_count());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_download_served_from_cache() {
        let cached = CachedVideoDownloader::new();

        let first = cached.download_video("https://example.com/a");
        let second = cached.download_video("https://example.com/a");

        assert_eq!(first, second);
        assert_eq!(cached.real_download_count(), 1);
    }

    #[test]
    fn test_distinct_urls_each_download_once() {
        let cached = CachedVideoDownloader::new();

        cached.download_video("https://example.com/a");
        cached.download_video("https://example.com/b");
        cached.download_video("https://example.com/a");
        cached.download_video("https://example.com/b");

        assert_eq!(cached.real_download_count(), 2);
    }

    #[test]
    fn test_proxy_returns_the_real_content() {
        let cached = CachedVideoDownloader::new();
        assert_eq!(
            cached.download_video("https://example.com/a"),
            "Video content from https://example.com/a"
        );
    }

    #[test]
    fn test_real_downloader_never_caches() {
        let real = RealVideoDownloader::new();
        real.download_video("https://example.com/a");
        real.download_video("https://example.com/a");
        assert_eq!(real.download_count(), 2);
    }

    #[test]
    fn test_proxy_usable_wherever_the_trait_is_expected() {
        fn fetch(downloader: &dyn VideoDownloader, url: &str) -> String {
            downloader.download_video(url)
        }

        let cached = CachedVideoDownloader::new();
        fetch(&cached, "https://example.com/a");
        fetch(&cached, "https://example.com/a");
        assert_eq!(cached.real_download_count(), 1);
    }
}
