//! Keyboard shortcut documentation.

use wireframe_core::ShortcutRegistry;

/// Print all shortcuts to console.
pub fn print_all() {
    println!("\n=== Keyboard Shortcuts ===");
    for line in ShortcutRegistry::describe() {
        println!("{line}");
    }
    println!();
}
