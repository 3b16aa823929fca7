//! Method → ANSI color lookup for the console line.

/// Dims the frame around a request line.
pub const GRAY: &str = "\x1b[90m";
/// Restores the terminal's default attributes.
pub const RESET: &str = "\x1b[0m";

/// Display color of an HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodColor {
    Green,
    Yellow,
    Red,
    Cyan,
    White,
}

impl MethodColor {
    /// Pick the color for a method name.
    ///
    /// Matching is exact and case-sensitive: only the upper-case names
    /// `GET`, `POST`, `DELETE` and `PUT` get a dedicated color.
    pub fn for_method(method: &str) -> Self {
        match method {
            "GET" => MethodColor::Green,
            "POST" => MethodColor::Yellow,
            "DELETE" => MethodColor::Red,
            "PUT" => MethodColor::Cyan,
            _ => MethodColor::White,
        }
    }

    pub fn ansi_code(self) -> &'static str {
        match self {
            MethodColor::Green => "\x1b[32m",
            MethodColor::Yellow => "\x1b[33m",
            MethodColor::Red => "\x1b[31m",
            MethodColor::Cyan => "\x1b[36m",
            MethodColor::White => "\x1b[37m",
        }
    }
}
