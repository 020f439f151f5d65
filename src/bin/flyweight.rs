//! Structural Patterns: Flyweight
//! Example: a forest sharing one TreeType per species
//!
//! Run with: cargo run --bin flyweight

use colored::Colorize;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Intrinsic state: everything trees of one species have in common.
/// Extrinsic state (position) stays outside.
pub struct TreeType {
    name: String,
    color: String,
    texture: String,
}

impl TreeType {
    fn new(name: &str, color: &str, texture: &str) -> Self {
        TreeType {
            name: name.to_string(),
            color: color.to_string(),
            texture: texture.to_string(),
        }
    }

    pub fn draw(&self, x: i32, y: i32) -> String {
        format!("Drawing {} tree at ({},{})", self.name, x, y)
    }

    pub fn describe(&self) -> String {
        format!("{} ({}, {})", self.name, self.color, self.texture)
    }
}

lazy_static! {
    // Process-lifetime, unbounded, never invalidated. The mutex is only
    // what a global in Rust requires; the demos stay single-threaded.
    static ref TREE_TYPES: Mutex<HashMap<String, Arc<TreeType>>> = Mutex::new(HashMap::new());
}

fn normalized_key(name: &str, color: &str, texture: &str) -> String {
    format!("{}_{}_{}", name, color, texture).to_lowercase().trim().to_string()
}

/// Memoizing factory: equal normalized keys share one instance.
pub fn tree_type(name: &str, color: &str, texture: &str) -> Arc<TreeType> {
    let mut cache = TREE_TYPES.lock().unwrap();
    Arc::clone(
        cache
            .entry(normalized_key(name, color, texture))
            .or_insert_with(|| Arc::new(TreeType::new(name, color, texture))),
    )
}

/// Number of distinct tree types created so far in this process.
pub fn tree_type_count() -> usize {
    TREE_TYPES.lock().unwrap().len()
}

pub struct Tree {
    x: i32,
    y: i32,
    kind: Arc<TreeType>,
}

impl Tree {
    pub fn new(x: i32, y: i32, kind: Arc<TreeType>) -> Self {
        Tree { x, y, kind }
    }

    pub fn draw(&self) -> String {
        self.kind.draw(self.x, self.y)
    }
}

pub struct Forest {
    trees: Vec<Tree>,
}

impl Forest {
    pub fn new() -> Self {
        Forest { trees: Vec::new() }
    }

    pub fn plant_tree(&mut self, x: i32, y: i32, name: &str, color: &str, texture: &str) {
        self.trees.push(Tree::new(x, y, tree_type(name, color, texture)));
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    pub fn draw(&self) {
        for tree in &self.trees {
            println!("{}", tree.draw());
        }
    }
}

// =============================================================================
// Version 1: every tree owns its own copies of the shared data
// =============================================================================

mod naive {
    pub struct Tree {
        x: i32,
        y: i32,
        name: String,
        color: String,
        texture: String,
    }

    impl Tree {
        pub fn new(x: i32, y: i32, name: &str, color: &str, texture: &str) -> Self {
            Tree {
                x,
                y,
                name: name.to_string(),
                color: color.to_string(),
                texture: texture.to_string(),
            }
        }

        pub fn draw(&self) -> String {
            format!(
                "Drawing {} tree ({}, {}) at ({},{})",
                self.name, self.color, self.texture, self.x, self.y
            )
        }
    }

    pub struct Forest {
        pub trees: Vec<Tree>,
    }

    impl Forest {
        pub fn new() -> Self {
            Forest { trees: Vec::new() }
        }

        // A million oaks means a million copies of "Oak"/"Green"/"Rough".
        pub fn plant_tree(&mut self, x: i32, y: i32, name: &str, color: &str, texture: &str) {
            self.trees.push(Tree::new(x, y, name, color, texture));
        }
    }
}

fn main() {
    println!("{}\n", "=== Version 1: duplicated intrinsic state ===".bold());

    let mut naive_forest = naive::Forest::new();
    for i in 0..5 {
        naive_forest.plant_tree(i, i, "Oak", "Green", "Rough");
    }
    for tree in &naive_forest.trees {
        println!("{}", tree.draw());
    }
    println!("5 trees, 5 private copies of the species data");

    println!("\n{}\n", "=== Version 2: Flyweight Pattern ===".bold());

    let mut forest = Forest::new();
    for i in 0..100 {
        forest.plant_tree(i, i, "Oak", "Green", "Rough");
    }
    forest.plant_tree(3, 7, "Birch", "White", "Smooth");

    forest.draw();
    println!(
        "\nShared types: {} and {}",
        tree_type("Oak", "Green", "Rough").describe(),
        tree_type("Birch", "White", "Smooth").describe()
    );
    println!(
        "\n{}",
        format!(
            "{} trees drawn from {} shared tree type(s)",
            forest.tree_count(),
            tree_type_count()
        )
        .green()
    );
}
