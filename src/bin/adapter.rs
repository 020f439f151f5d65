//! Structural Patterns: Adapter
//! Example: fitting a third-party payment API behind the gateway trait
//!
//! Run with: cargo run --bin adapter

/// The contract checkout already depends on. Existing gateways implement it
/// directly.
pub trait PaymentGateway {
    fn pay(&self, order_id: &str, amount: f64) -> String;
}

pub struct PayUGateway;

impl PaymentGateway for PayUGateway {
    fn pay(&self, order_id: &str, amount: f64) -> String {
        let receipt = format!("Paying {} with amount {} by PayUPaymentGateway", order_id, amount);
        println!("{}", receipt);
        receipt
    }
}

/// Third-party SDK surface. We cannot edit it and its method does not match
/// our trait.
pub struct RazorpayApi;

impl RazorpayApi {
    pub fn make_payment(&self, order_id: &str, amount: f64) -> String {
        let receipt = format!("Making {} with amount {} by RazorpayAPI", order_id, amount);
        println!("{}", receipt);
        receipt
    }
}

/// The adapter: implements our contract, delegates to the foreign API.
/// Checkout never learns Razorpay exists.
pub struct RazorpayAdapter {
    api: RazorpayApi,
}

impl RazorpayAdapter {
    pub fn new() -> Self {
        RazorpayAdapter { api: RazorpayApi }
    }
}

impl PaymentGateway for RazorpayAdapter {
    fn pay(&self, order_id: &str, amount: f64) -> String {
        self.api.make_payment(order_id, amount)
    }
}

pub struct CheckoutService {
    gateway: Box<dyn PaymentGateway>,
}

impl CheckoutService {
    pub fn new(gateway: Box<dyn PaymentGateway>) -> Self {
        CheckoutService { gateway }
    }

    pub fn checkout(&self, order_id: &str, amount: f64) -> String {
        self.gateway.pay(order_id, amount)
    }
}

fn main() {
    println!("=== Checkout through the original gateway ===\n");

    let checkout = CheckoutService::new(Box::new(PayUGateway));
    checkout.checkout("12165", 0.5);

    println!("\n=== Same checkout, adapted third-party gateway ===\n");

    // Swapping gateways touches only the composition root.
    let checkout = CheckoutService::new(Box::new(RazorpayAdapter::new()));
    checkout.checkout("12165", 0.5);
}
