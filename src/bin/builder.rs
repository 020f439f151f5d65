//! Creational Patterns: Builder
//! Example: assembling a burger meal step by step
//!
//! Run with: cargo run --bin builder

/// Immutable once built: required fields go through the builder entry point,
/// optionals default and are filled by chaining.
#[derive(Debug)]
pub struct BurgerMeal {
    bun_type: String,
    patty: String,
    toppings: Vec<String>,
    drink: Option<String>,
    side: Option<String>,
    has_cheese: bool,
}

impl BurgerMeal {
    pub fn builder(bun_type: impl Into<String>, patty: impl Into<String>) -> BurgerMealBuilder {
        BurgerMealBuilder::new(bun_type, patty)
    }

    pub fn bun_type(&self) -> &str {
        &self.bun_type
    }

    pub fn patty(&self) -> &str {
        &self.patty
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    pub fn drink(&self) -> Option<&str> {
        self.drink.as_deref()
    }

    pub fn side(&self) -> Option<&str> {
        self.side.as_deref()
    }

    pub fn has_cheese(&self) -> bool {
        self.has_cheese
    }
}

pub struct BurgerMealBuilder {
    bun_type: String,
    patty: String,
    toppings: Vec<String>,
    drink: Option<String>,
    side: Option<String>,
    has_cheese: bool,
}

impl BurgerMealBuilder {
    // Required fields up front, everything else defaults.
    pub fn new(bun_type: impl Into<String>, patty: impl Into<String>) -> Self {
        BurgerMealBuilder {
            bun_type: bun_type.into(),
            patty: patty.into(),
            toppings: Vec::new(),
            drink: None,
            side: None,
            has_cheese: false,
        }
    }

    // Each setter consumes `self` and returns it for chaining.
    pub fn with_cheese(mut self, has_cheese: bool) -> Self {
        self.has_cheese = has_cheese;
        self
    }

    pub fn with_toppings(mut self, toppings: Vec<String>) -> Self {
        self.toppings = toppings;
        self
    }

    pub fn with_drink(mut self, drink: impl Into<String>) -> Self {
        self.drink = Some(drink.into());
        self
    }

    pub fn with_side(mut self, side: impl Into<String>) -> Self {
        self.side = Some(side.into());
        self
    }

    pub fn build(self) -> BurgerMeal {
        BurgerMeal {
            bun_type: self.bun_type,
            patty: self.patty,
            toppings: self.toppings,
            drink: self.drink,
            side: self.side,
            has_cheese: self.has_cheese,
        }
    }
}

// =============================================================================
// Version 1: one constructor, callers hand-feed None for every optional
// =============================================================================

mod naive {
    #[derive(Debug)]
    pub struct BurgerMeal {
        pub bun_type: String,
        pub patty: String,
        pub toppings: Option<Vec<String>>,
        pub drink: Option<String>,
    }

    impl BurgerMeal {
        // Every call site spells out all the optionals, and adding a field
        // breaks every caller (the telescoping-constructor trap).
        pub fn new(
            bun_type: impl Into<String>,
            patty: impl Into<String>,
            toppings: Option<Vec<String>>,
            drink: Option<String>,
        ) -> Self {
            BurgerMeal {
                bun_type: bun_type.into(),
                patty: patty.into(),
                toppings,
                drink,
            }
        }
    }
}

fn main() {
    println!("=== Version 1: constructor stuffed with None ===\n");

    let meal = naive::BurgerMeal::new("wheat", "veg", None, None);
    println!("{:#?}", meal);

    println!("\n=== Version 2: Builder Pattern ===\n");

    let burger_meal = BurgerMeal::builder("wheat", "veg").build();
    println!("{:#?}", burger_meal);

    let with_cheese = BurgerMeal::builder("whole wheat", "soyabean")
        .with_cheese(true)
        .build();
    println!("{:#?}", with_cheese);

    let with_cheese_and_fries = BurgerMeal::builder("whole wheat", "soyabean")
        .with_side("fries")
        .with_cheese(true)
        .with_toppings(vec!["onion".to_string(), "jalapeno".to_string()])
        .with_drink("cola")
        .build();
    println!("{:#?}", with_cheese_and_fries);
}
