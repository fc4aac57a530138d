//! Build a registry around nerv and print how the demo style rules resolve.
//!
//! Run with: cargo run --example show [theme-file.json]

use std::env;
use std::path::PathBuf;

use nerv_theme::builtin;
use nerv_theme::loader::load_theme_file;
use nerv_theme::registry::ThemeRegistry;
use nerv_theme::report::format_theme;
use nerv_theme::stylesheet::DEMO_STYLESHEET;
use nerv_theme::types::OutputFormat;

fn main() {
    let mut registry = ThemeRegistry::new(builtin::nerv());

    if let Some(path) = env::args().nth(1).map(PathBuf::from) {
        match load_theme_file(&path) {
            Ok(theme) => {
                let name = theme.name().to_string();
                registry.register(theme);
                registry
                    .set_active(&name)
                    .expect("just registered theme is selectable");
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    let theme = registry.active();
    print!("{}", format_theme(theme, OutputFormat::Human));

    println!();
    println!("Style references:");
    for (name, kind) in DEMO_STYLESHEET.typed_references() {
        let value = theme
            .resolve_value(name)
            .map_or_else(|| "<unresolved>".to_string(), |v| v.to_string());
        println!("  {:<36} {:<10} {}", name, kind.to_string(), value);
    }

    match DEMO_STYLESHEET.check(theme) {
        Ok(()) => println!("\nAll references resolve."),
        Err(e) => println!("\n{}", e),
    }
}
