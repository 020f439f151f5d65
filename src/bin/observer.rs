//! Behavioural Patterns: Observer
//! Example: channel subscribers notified on every upload
//!
//! Run with: cargo run --bin observer

use std::cell::RefCell;
use std::rc::Rc;

/// One-to-many dependency: the channel changes state, every current
/// subscriber hears about it. Subscribers identify themselves so they can
/// unsubscribe later.
pub trait Subscriber {
    fn id(&self) -> &str;
    fn update(&self, channel: &str, video_title: &str);
}

pub struct EmailSubscriber {
    email: String,
    inbox: RefCell<Vec<String>>,
}

impl EmailSubscriber {
    pub fn new(email: impl Into<String>) -> Self {
        EmailSubscriber {
            email: email.into(),
            inbox: RefCell::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<String> {
        self.inbox.borrow().clone()
    }
}

impl Subscriber for EmailSubscriber {
    fn id(&self) -> &str {
        &self.email
    }

    fn update(&self, channel: &str, video_title: &str) {
        println!("Sending email to {}: {} uploaded {}", self.email, channel, video_title);
        self.inbox.borrow_mut().push(video_title.to_string());
    }
}

pub struct InAppSubscriber {
    username: String,
    notifications: RefCell<Vec<String>>,
}

impl InAppSubscriber {
    pub fn new(username: impl Into<String>) -> Self {
        InAppSubscriber {
            username: username.into(),
            notifications: RefCell::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<String> {
        self.notifications.borrow().clone()
    }
}

impl Subscriber for InAppSubscriber {
    fn id(&self) -> &str {
        &self.username
    }

    fn update(&self, channel: &str, video_title: &str) {
        println!(
            "Pushing in-app notification to {}: {} uploaded {}",
            self.username, channel, video_title
        );
        self.notifications.borrow_mut().push(video_title.to_string());
    }
}

/// The subject. Uploading stays one responsibility; the notification
/// fan-out is delegated to whoever is currently subscribed.
pub struct YouTubeChannel {
    name: String,
    subscribers: Vec<Rc<dyn Subscriber>>,
}

impl YouTubeChannel {
    pub fn new(name: impl Into<String>) -> Self {
        YouTubeChannel {
            name: name.into(),
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, subscriber: Rc<dyn Subscriber>) {
        self.subscribers.push(subscriber);
    }

    pub fn unsubscribe(&mut self, id: &str) {
        self.subscribers.retain(|subscriber| subscriber.id() != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn upload_new_video(&self, video_title: &str) {
        println!("Uploading: {}", video_title);
        for subscriber in &self.subscribers {
            subscriber.update(&self.name, video_title);
        }
    }
}

// =============================================================================
// Version 1: the upload method notifies hard-coded subscribers by hand
// =============================================================================

mod naive {
    pub struct YouTubeChannel;

    impl YouTubeChannel {
        // Uploading and notifying are welded together; adding a subscriber
        // (or a bell toggle) means editing this method.
        pub fn upload_new_video(&self, video_title: &str) {
            println!("Uploading: {}", video_title);

            println!("Sending email to user1@mail.com");
            println!("Pushing in-app notification to user1@mail.com");

            println!("Sending email to user2@mail.com");
            println!("Pushing in-app notification to user2@mail.com");
        }
    }
}

fn main() {
    println!("=== Version 1: Hard-coded notifications ===\n");

    let channel = naive::YouTubeChannel;
    channel.upload_new_video("Observer Pattern Explained");

    println!("\n=== Version 2: Observer Pattern ===\n");

    let email = Rc::new(EmailSubscriber::new("user1@mail.com"));
    let in_app = Rc::new(InAppSubscriber::new("user2"));

    let mut channel = YouTubeChannel::new("LLD Channel");
    channel.subscribe(Rc::clone(&email) as Rc<dyn Subscriber>);
    channel.subscribe(Rc::clone(&in_app) as Rc<dyn Subscriber>);

    channel.upload_new_video("Observer Pattern Explained");

    println!("\n=== Dynamic unsubscription ===\n");

    channel.unsubscribe("user1@mail.com");
    channel.upload_new_video("Strategy Pattern Explained");

    println!(
        "\nuser1 received {} notification(s), user2 received {}",
        email.received().len(),
        in_app.received().len()
    );
}
