//! Structural Patterns: Decorator
//! Example: stacking pizza toppings at runtime
//!
//! Run with: cargo run --bin decorator

pub trait Pizza {
    fn description(&self) -> String;
    fn price(&self) -> f64;
}

pub struct MargheritaPizza;

impl Pizza for MargheritaPizza {
    fn description(&self) -> String {
        "Margherita Pizza".to_string()
    }

    fn price(&self) -> f64 {
        200.0
    }
}

pub struct PlainPizza;

impl Pizza for PlainPizza {
    fn description(&self) -> String {
        "Plain Pizza".to_string()
    }

    fn price(&self) -> f64 {
        100.0
    }
}

// Each decorator wraps any Pizza, including an already-decorated one, and
// the stack always bottoms out at a concrete pizza.

pub struct ExtraCheese {
    pizza: Box<dyn Pizza>,
}

impl ExtraCheese {
    pub fn new(pizza: Box<dyn Pizza>) -> Self {
        ExtraCheese { pizza }
    }
}

impl Pizza for ExtraCheese {
    fn description(&self) -> String {
        format!("{}, ExtraCheese", self.pizza.description())
    }

    fn price(&self) -> f64 {
        self.pizza.price() + 40.0
    }
}

pub struct Olives {
    pizza: Box<dyn Pizza>,
}

impl Olives {
    pub fn new(pizza: Box<dyn Pizza>) -> Self {
        Olives { pizza }
    }
}

impl Pizza for Olives {
    fn description(&self) -> String {
        format!("{}, Olives", self.pizza.description())
    }

    fn price(&self) -> f64 {
        self.pizza.price() + 30.0
    }
}

fn main() {
    println!("=== Decorator Pattern ===\n");

    let pizza = ExtraCheese::new(Box::new(MargheritaPizza));
    println!("{}", pizza.description());
    println!("{}", pizza.price());

    let pizza1 = Olives::new(Box::new(PlainPizza));
    let pizza2 = ExtraCheese::new(Box::new(pizza1));
    println!("{}", pizza2.description());
    println!("{}", pizza2.price());

    println!("\n=== Same topping twice ===\n");

    // Decorators compose freely, so double cheese is just another wrap.
    let double_cheese = ExtraCheese::new(Box::new(ExtraCheese::new(Box::new(PlainPizza))));
    println!("{}", double_cheese.description());
    println!("{}", double_cheese.price());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_pizzas() {
        assert_eq!(MargheritaPizza.description(), "Margherita Pizza");
        assert_eq!(MargheritaPizza.price(), 200.0);
        assert_eq!(PlainPizza.description(), "Plain Pizza");
        assert_eq!(PlainPizza.price(), 100.0);
    }

    #[test]
    fn test_single_decorator_adds_description_and_price() {
        let pizza = ExtraCheese::new(Box::new(MargheritaPizza));
        assert_eq!(pizza.description(), "Margherita Pizza, ExtraCheese");
        assert_eq!(pizza.price(), 240.0);
    }

    #[test]
    fn test_decorators_stack_in_wrap_order() {
        let pizza = ExtraCheese::new(Box::new(Olives::new(Box::new(PlainPizza))));
        assert_eq!(pizza.description(), "Plain Pizza, Olives, ExtraCheese");
        assert_eq!(pizza.price(), 100.0 + 30.0 + 40.0);
    }

    #[test]
    fn test_same_decorator_applied_twice() {
        let pizza = ExtraCheese::new(Box::new(ExtraCheese::new(Box::new(PlainPizza))));
        assert_eq!(pizza.description(), "Plain Pizza, ExtraCheese, ExtraCheese");
        assert_eq!(pizza.price(), 180.0);
    }

    #[test]
    fn test_decorated_pizza_is_still_a_pizza() {
        // Callers holding the trait never notice the wrapping.
        let pizzas: Vec<Box<dyn Pizza>> = vec![
            Box::new(PlainPizza),
            Box::new(Olives::new(Box::new(PlainPizza))),
        ];
        assert_eq!(pizzas[1].price() - pizzas[0].price(), 30.0);
    }
}
