//! Structural Patterns: Bridge
//! Example: video players and stream qualities evolving independently
//!
//! Run with: cargo run --bin bridge

/// First dimension: how a stream is loaded.
pub trait VideoQuality {
    fn load(&self, title: &str) -> String;
}

pub struct SdQuality;

impl VideoQuality for SdQuality {
    fn load(&self, title: &str) -> String {
        format!("Streaming {} in SD Quality", title)
    }
}

pub struct HdQuality;

impl VideoQuality for HdQuality {
    fn load(&self, title: &str) -> String {
        format!("Streaming {} in HD Quality", title)
    }
}

pub struct UltraHdQuality;

impl VideoQuality for UltraHdQuality {
    fn load(&self, title: &str) -> String {
        format!("Streaming {} in 4K Ultra HD Quality", title)
    }
}

pub struct EightKQuality;

impl VideoQuality for EightKQuality {
    fn load(&self, title: &str) -> String {
        format!("Streaming {} in 8K Quality", title)
    }
}

/// Second dimension: where playback happens. Each player bridges to a
/// quality it holds, so players x qualities never multiplies into one
/// struct per combination.
pub trait VideoPlayer {
    fn play(&self, title: &str) -> String;
}

pub struct WebPlayer {
    quality: Box<dyn VideoQuality>,
}

impl WebPlayer {
    pub fn new(quality: Box<dyn VideoQuality>) -> Self {
        WebPlayer { quality }
    }
}

impl VideoPlayer for WebPlayer {
    fn play(&self, title: &str) -> String {
        let line = format!("Web Player: {}", self.quality.load(title));
        println!("{}", line);
        line
    }
}

pub struct MobilePlayer {
    quality: Box<dyn VideoQuality>,
}

impl MobilePlayer {
    pub fn new(quality: Box<dyn VideoQuality>) -> Self {
        MobilePlayer { quality }
    }
}

impl VideoPlayer for MobilePlayer {
    fn play(&self, title: &str) -> String {
        let line = format!("Mobile Player: {}", self.quality.load(title));
        println!("{}", line);
        line
    }
}

// =============================================================================
// Version 1: one struct per (player, quality) combination
// =============================================================================

mod naive {
    pub trait PlayQuality {
        fn play(&self, title: &str) -> String;
    }

    pub struct WebHdPlayer;

    impl PlayQuality for WebHdPlayer {
        fn play(&self, title: &str) -> String {
            format!("Web Player: Playing {} in HD", title)
        }
    }

    pub struct MobileHdPlayer;

    impl PlayQuality for MobileHdPlayer {
        fn play(&self, title: &str) -> String {
            format!("Mobile Player: Playing {} in HD", title)
        }
    }

    pub struct SmartTvUltraHdPlayer;

    impl PlayQuality for SmartTvUltraHdPlayer {
        fn play(&self, title: &str) -> String {
            format!("Smart TV Player: Playing {} in ultra HD", title)
        }
    }

    // A new quality now needs one more struct per device, and a new device
    // one more struct per quality.
    pub struct Web4kPlayer;

    impl PlayQuality for Web4kPlayer {
        fn play(&self, title: &str) -> String {
            format!("Web Player: Playing {} in 4K", title)
        }
    }
}

fn main() {
    println!("=== Version 1: class explosion ===\n");

    use naive::PlayQuality;
    println!("{}", naive::WebHdPlayer.play("Video 1"));
    println!("{}", naive::MobileHdPlayer.play("Video 1"));
    println!("{}", naive::SmartTvUltraHdPlayer.play("Video 1"));
    println!("{}", naive::Web4kPlayer.play("Video 1"));

    println!("\n=== Version 2: Bridge Pattern ===\n");

    let player: Box<dyn VideoPlayer> = Box::new(WebPlayer::new(Box::new(HdQuality)));
    player.play("Video 1");

    let player2: Box<dyn VideoPlayer> = Box::new(MobilePlayer::new(Box::new(EightKQuality)));
    player2.play("Video 2");

    // Any pairing works without a new struct.
    MobilePlayer::new(Box::new(SdQuality)).play("Video 3");
    WebPlayer::new(Box::new(UltraHdQuality)).play("Video 4");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualities_load_independently() {
        assert_eq!(SdQuality.load("Clip"), "Streaming Clip in SD Quality");
        assert_eq!(HdQuality.load("Clip"), "Streaming Clip in HD Quality");
        assert_eq!(
            UltraHdQuality.load("Clip"),
            "Streaming Clip in 4K Ultra HD Quality"
        );
        assert_eq!(EightKQuality.load("Clip"), "Streaming Clip in 8K Quality");
    }

    #[test]
    fn test_player_bridges_to_its_quality() {
        let player = WebPlayer::new(Box::new(HdQuality));
        assert_eq!(player.play("Video 1"), "Web Player: Streaming Video 1 in HD Quality");

        let player = MobilePlayer::new(Box::new(EightKQuality));
        assert_eq!(
            player.play("Video 2"),
            "Mobile Player: Streaming Video 2 in 8K Quality"
        );
    }

    #[test]
    fn test_every_pairing_is_expressible() {
        let qualities: Vec<Box<dyn VideoQuality>> = vec![
            Box::new(SdQuality),
            Box::new(HdQuality),
            Box::new(UltraHdQuality),
            Box::new(EightKQuality),
        ];

        for quality in qualities {
            let line = WebPlayer::new(quality).play("Video");
            assert!(line.starts_with("Web Player: Streaming Video in"));
        }
    }
}
