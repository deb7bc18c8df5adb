//! Keypad Session - clicking through the calculator keypad
//!
//! Drives a [`KeypadDriver`] the way a UI would: every label is resolved to
//! a keypad button, the button is highlighted, and its token reaches the
//! engine.
//!
//! # Running
//!
//! ```bash
//! cargo run --example keypad_session -p pocket-calc
//! ```

use pocket_calc::prelude::*;

const SCRIPTS: [&str; 5] = [
    "2 + 3 * 4 =",
    "5 + 3 = = =",
    "8 1 √ x² BIN",
    "- 4 √ 5 + 1",
    "7 / 0 = 9",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut driver = KeypadDriver::new();

    println!("{}\n", driver.keypad().render());

    for script in SCRIPTS {
        println!("=== {script} ===");
        for label in script.split_whitespace() {
            driver.press(label)?;
            println!("  {label:>3} -> {}", driver.display());
        }
        let latched = driver.is_error();
        driver.clear();
        if latched {
            println!("    C -> {}", driver.display());
        }
        println!();
    }

    // Clicking by element id reaches the same buttons
    for id in ["btn-1", "btn-6", "btn-sqrt"] {
        driver.click_id(id)?;
    }
    println!("btn-1 btn-6 btn-sqrt -> {}", driver.display());
    println!("total clicks: {}", driver.clicks());

    Ok(())
}
