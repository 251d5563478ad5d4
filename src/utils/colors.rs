//! ANSI helpers for terminal output.

use std::fmt;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const RED: &str = "\x1b[31m";

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}✅ {RESET}{msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}⚠️ {RESET}{msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}❌ {RESET}{msg}");
}

/// Grey secondary lines (gaps, hints) so entry rows stand out.
pub fn dim<T: fmt::Display>(msg: T) -> String {
    format!("{GREY}{msg}{RESET}")
}
