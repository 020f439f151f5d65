//! Structural Patterns: Composite
//! Example: shopping cart treating products and bundles uniformly
//!
//! Run with: cargo run --bin composite

/// Leaf and group share one contract, so the cart never asks which it is
/// holding. `render` returns the indented listing so callers decide where
/// it goes.
pub trait CartItem {
    fn price(&self) -> f64;
    fn render(&self, indent: usize) -> String;
}

pub struct Product {
    name: String,
    price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Product {
            name: name.into(),
            price,
        }
    }
}

impl CartItem for Product {
    fn price(&self) -> f64 {
        self.price
    }

    fn render(&self, indent: usize) -> String {
        format!("{}Product: {} - ${}", " ".repeat(indent), self.name, self.price)
    }
}

pub struct ProductBundle {
    bundle_name: String,
    items: Vec<Box<dyn CartItem>>,
}

impl ProductBundle {
    pub fn new(bundle_name: impl Into<String>) -> Self {
        ProductBundle {
            bundle_name: bundle_name.into(),
            items: Vec::new(),
        }
    }

    // Accepts products and other bundles alike; nesting is tree-shaped by
    // construction since adding moves the child in.
    pub fn add_item(&mut self, item: Box<dyn CartItem>) {
        self.items.push(item);
    }
}

impl CartItem for ProductBundle {
    fn price(&self) -> f64 {
        self.items.iter().map(|item| item.price()).sum()
    }

    fn render(&self, indent: usize) -> String {
        let mut lines = vec![format!("{}Bundle: {}", " ".repeat(indent), self.bundle_name)];
        for item in &self.items {
            lines.push(item.render(indent + 1));
        }
        lines.join("\n")
    }
}

// =============================================================================
// Version 1: distinct types, the cart matches on a tag everywhere
// =============================================================================

mod naive {
    pub struct Product {
        pub name: String,
        pub price: f64,
    }

    pub struct ProductBundle {
        pub bundle_name: String,
        // Bundles can only hold products; a bundle inside a bundle is
        // inexpressible here.
        pub products: Vec<Product>,
    }

    pub enum CartEntry {
        Product(Product),
        Bundle(ProductBundle),
    }

    // Price and display logic duplicated per variant, re-matched at every
    // call site.
    pub fn entry_price(entry: &CartEntry) -> f64 {
        match entry {
            CartEntry::Product(product) => product.price,
            CartEntry::Bundle(bundle) => bundle.products.iter().map(|p| p.price).sum(),
        }
    }

    pub fn render_entry(entry: &CartEntry) -> String {
        match entry {
            CartEntry::Product(product) => {
                format!(" Product: {} - ${}", product.name, product.price)
            }
            CartEntry::Bundle(bundle) => {
                let mut lines = vec![format!(" Bundle: {}", bundle.bundle_name)];
                for product in &bundle.products {
                    lines.push(format!("  Product: {} - ${}", product.name, product.price));
                }
                lines.join("\n")
            }
        }
    }
}

fn main() {
    println!("=== Version 1: tag-and-match cart ===\n");

    let cart = vec![
        naive::CartEntry::Product(naive::Product {
            name: "Book".to_string(),
            price: 500.0,
        }),
        naive::CartEntry::Bundle(naive::ProductBundle {
            bundle_name: "iPhone Combo".to_string(),
            products: vec![
                naive::Product {
                    name: "Headphones".to_string(),
                    price: 1500.0,
                },
                naive::Product {
                    name: "Charger".to_string(),
                    price: 2000.0,
                },
            ],
        }),
    ];

    let mut total = 0.0;
    for entry in &cart {
        println!("{}", naive::render_entry(entry));
        total += naive::entry_price(entry);
    }
    println!("Total Price: {}", total);

    println!("\n=== Version 2: Composite Pattern ===\n");

    let mut iphone_combo = ProductBundle::new("iPhone Combo");
    iphone_combo.add_item(Box::new(Product::new("Headphones", 1500.0)));
    iphone_combo.add_item(Box::new(Product::new("Charger", 2000.0)));

    let mut school_kit = ProductBundle::new("School Kit");
    school_kit.add_item(Box::new(Product::new("Notebook", 50.0)));
    school_kit.add_item(Box::new(Product::new("Book", 500.0)));
    school_kit.add_item(Box::new(Product::new("Pencil", 15.0)));

    let cart: Vec<Box<dyn CartItem>> = vec![
        Box::new(Product::new("Book", 500.0)),
        Box::new(iphone_combo),
        Box::new(school_kit),
    ];

    println!("Cart Details:\n");
    let mut total = 0.0;
    for item in &cart {
        total += item.price();
        println!("{}", item.render(1));
    }
    println!("Total Price: {}", total);
}
