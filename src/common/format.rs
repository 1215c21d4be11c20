//! A centralized module for user-facing formatting utilities.

/// Formats a temperature the way it is printed to the user.
///
/// Integral values keep a trailing `.0` (`212.0`, not `212`); everything else
/// uses the shortest representation that round-trips.
pub fn format_temperature(value: f64) -> String {
    format!("{value:?}")
}
