//! Constants used throughout the cte library

// Key construction
pub const DEFAULT_SEPARATOR: &str = "_";
pub const KEY_FILL: char = '_';
pub const DEFAULT_MAX_DEPTH: usize = 64;

// Assignment syntax
pub const ASSIGN: char = '=';
pub const COMMENT: char = '#';
pub const NEWLINE: char = '\n';

// Literals
pub const TRUE_LITERAL: &str = "true";
pub const FALSE_LITERAL: &str = "false";
pub const NAN_LITERAL: &str = "nan";
pub const INF_LITERAL: &str = "inf";
pub const NEG_INF_LITERAL: &str = "-inf";

// Quoting
pub const BACKSLASH: char = '\\';
pub const DOUBLE_QUOTE: char = '"';
pub const DOLLAR: char = '$';
pub const BACKTICK: char = '`';

/// Floats with a magnitude outside `[FLOAT_EXP_LOWER, FLOAT_EXP_UPPER)` use exponent notation
pub const FLOAT_EXP_LOWER: f64 = 1e-5;
pub const FLOAT_EXP_UPPER: f64 = 1e16;
