//! Startup banner.

use colored::Colorize;

const BANNER: &str = r#"
    _                       ___                          _         _         _
   /_\   ____  _ _ _ ___   | __|_ _  ___ _ _ __ _ _  _  | |   __ _| |__  ___| |___ _ _
  / _ \ |_ / || | '_/ -_)  | _|| ' \/ -_) '_/ _` | || | | |__/ _` | '_ \/ -_) / -_) '_|
 /_/ \_\/__|\_,_|_| \___|  |___|_||_\___|_| \__, |\_, | |____\__,_|_.__/\___|_\___|_|
                                            |___/ |__/
"#;

/// Prints the ASCII art banner to stdout.
///
/// Suppressed with `--disable-banner`; scripts that parse stdout should
/// pass it.
pub fn print() {
    println!("{}", BANNER.cyan());
}
