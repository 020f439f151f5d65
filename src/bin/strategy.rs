//! Behavioural Patterns: Strategy
//! Example: interchangeable ride-matching algorithms selected at runtime
//!
//! Run with: cargo run --bin strategy

/// One algorithm family, one contract. Each strategy stands alone and the
/// service swaps them without an if-else ladder.
pub trait MatchingStrategy {
    fn match_driver(&self, location: &str) -> String;
}

pub struct NearestDriverStrategy;

impl MatchingStrategy for NearestDriverStrategy {
    fn match_driver(&self, location: &str) -> String {
        // Distance-based matching logic would live here.
        format!("Matching with the Nearest Driver to {}", location)
    }
}

pub struct SurgePriorityStrategy;

impl MatchingStrategy for SurgePriorityStrategy {
    fn match_driver(&self, location: &str) -> String {
        // Prioritise high-surge zones or premium drivers.
        format!("Matching using Surge Priority for {}", location)
    }
}

pub struct AirportQueueStrategy;

impl MatchingStrategy for AirportQueueStrategy {
    fn match_driver(&self, location: &str) -> String {
        // First-in-line driver for airport pickups.
        format!("Matching using FIFO Airport Queue for {}", location)
    }
}

pub struct RideMatchingService {
    strategy: Box<dyn MatchingStrategy>,
}

impl RideMatchingService {
    pub fn new(strategy: Box<dyn MatchingStrategy>) -> Self {
        RideMatchingService { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn MatchingStrategy>) {
        self.strategy = strategy;
    }

    pub fn match_rider(&self, location: &str) -> String {
        let outcome = self.strategy.match_driver(location);
        println!("{}", outcome);
        outcome
    }
}

// =============================================================================
// Version 1: one method, one string-typed branch per algorithm
// =============================================================================

mod naive {
    pub struct RideMatchingService;

    impl RideMatchingService {
        // Ten more strategies means ten more arms here. Nothing is
        // independently testable or swappable.
        pub fn match_rider(&self, location: &str, matching_type: &str) -> String {
            let outcome = match matching_type {
                "NEAREST" => format!("Finding nearest drivers to {}", location),
                "SURGE_QUEUE" => format!("Matching {} based on surge logic", location),
                "AIRPORT_QUEUE" => format!("Using FIFO airport queue for {}", location),
                other => format!("Unknown matching type: {}", other),
            };
            println!("{}", outcome);
            outcome
        }
    }
}

fn main() {
    println!("=== Version 1: if-else dispatch on a string ===\n");

    let naive_service = naive::RideMatchingService;
    naive_service.match_rider("Mall", "NEAREST");
    naive_service.match_rider("Terminal 2", "AIRPORT_QUEUE");

    println!("\n=== Version 2: Strategy Pattern ===\n");

    let service = RideMatchingService::new(Box::new(SurgePriorityStrategy));
    service.match_rider("Mall");

    let mut service2 = RideMatchingService::new(Box::new(AirportQueueStrategy));
    service2.match_rider("Auditorium");

    // Behaviour changes at runtime without touching the service.
    service2.set_strategy(Box::new(NearestDriverStrategy));
    service2.match_rider("Villa");
}
