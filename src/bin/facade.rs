//! Structural Patterns: Facade
//! Example: one booking call in front of five subsystem services
//!
//! Run with: cargo run --bin facade

use colored::Colorize;

pub struct PaymentService;

impl PaymentService {
    pub fn make_payment(&self, account_id: &str, amount: f64) -> String {
        format!("Payment of ${} successful for account {}", amount, account_id)
    }
}

pub struct SeatReservationService;

impl SeatReservationService {
    pub fn reserve_seat(&self, movie_id: &str, seat_number: &str) -> String {
        format!("Seat {} reserved for movie {}", seat_number, movie_id)
    }
}

pub struct NotificationService;

impl NotificationService {
    pub fn send_notification(&self, user_email: &str) -> String {
        format!("Booking confirmation sent to {}", user_email)
    }
}

pub struct LoyaltyPointsService;

impl LoyaltyPointsService {
    pub fn add_points(&self, account_id: &str, points: u32) -> String {
        format!("{} loyalty points added for account {}", points, account_id)
    }
}

pub struct TicketService;

impl TicketService {
    pub fn generate_ticket(&self, movie_id: &str, seat_number: &str) -> String {
        format!("Ticket generated for movie {} and Seat: {}", movie_id, seat_number)
    }
}

/// Every booking awards a flat 50 points.
const BOOKING_LOYALTY_POINTS: u32 = 50;

/// One entry point in front of the whole subsystem. The client states the
/// booking; the facade knows the steps and their order.
pub struct MovieBookingFacade {
    payment: PaymentService,
    reservation: SeatReservationService,
    notification: NotificationService,
    loyalty: LoyaltyPointsService,
    ticketing: TicketService,
}

impl MovieBookingFacade {
    pub fn new() -> Self {
        MovieBookingFacade {
            payment: PaymentService,
            reservation: SeatReservationService,
            notification: NotificationService,
            loyalty: LoyaltyPointsService,
            ticketing: TicketService,
        }
    }

    /// Runs payment, reservation, notification, loyalty and ticketing in
    /// that order, printing and returning the receipt lines.
    pub fn book_movie_ticket(
        &self,
        account_id: &str,
        movie_id: &str,
        seat_number: &str,
        user_email: &str,
        amount: f64,
    ) -> Vec<String> {
        let receipt = vec![
            self.payment.make_payment(account_id, amount),
            self.reservation.reserve_seat(movie_id, seat_number),
            self.notification.send_notification(user_email),
            self.loyalty.add_points(account_id, BOOKING_LOYALTY_POINTS),
            self.ticketing.generate_ticket(movie_id, seat_number),
        ];
        for line in &receipt {
            println!("{}", line);
        }
        receipt
    }
}

fn main() {
    println!("{}\n", "=== Version 1: Client drives every step ===".bold());

    // Booking a movie ticket manually: miss a step or reorder them and the
    // booking is broken, and every new venue type repeats all of this.
    println!("{}", PaymentService.make_payment("user1245", 500.0));
    println!("{}", SeatReservationService.reserve_seat("movie465", "A11"));
    println!("{}", NotificationService.send_notification("user1245@mail.com"));
    println!("{}", LoyaltyPointsService.add_points("user1245", 50));
    println!("{}", TicketService.generate_ticket("movie465", "A11"));

    println!("\n{}\n", "=== Version 2: Facade Pattern ===".bold());

    let facade = MovieBookingFacade::new();
    facade.book_movie_ticket("user1243", "movie465", "A11", "user1243@mail.com", 500.0);

    println!("\n{}", "Booking complete".green());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_runs_all_five_steps_in_order() {
        let facade = MovieBookingFacade::new();
        let receipt =
            facade.book_movie_ticket("user1243", "movie465", "A11", "user1243@mail.com", 500.0);

        assert_eq!(
            receipt,
            [
                "Payment of $500 successful for account user1243",
                "Seat A11 reserved for movie movie465",
                "Booking confirmation sent to user1243@mail.com",
                "50 loyalty points added for account user1243",
                "Ticket generated for movie movie465 and Seat: A11",
            ]
        );
    }

    #[test]
    fn test_facade_matches_the_manual_sequence() {
        let manual = vec![
            PaymentService.make_payment("u", 10.0),
            SeatReservationService.reserve_seat("m", "B2"),
            NotificationService.send_notification("u@mail.com"),
            LoyaltyPointsService.add_points("u", 50),
            TicketService.generate_ticket("m", "B2"),
        ];

        let facade = MovieBookingFacade::new();
        assert_eq!(facade.book_movie_ticket("u", "m", "B2", "u@mail.com", 10.0), manual);
    }

    #[test]
    fn test_each_service_reports_its_own_step() {
        assert_eq!(
            PaymentService.make_payment("acct", 99.5),
            "Payment of $99.5 successful for account acct"
        );
        assert_eq!(
            LoyaltyPointsService.add_points("acct", 50),
            "50 loyalty points added for account acct"
        );
    }
}
