//! Display helpers for prices and fixed-width terminal cells.

use unicode_width::UnicodeWidthChar;

/// Formats a price with the currency prefix and two decimal places.
///
/// ```rust
/// use carte_util::format_price;
///
/// assert_eq!(format_price("R", 120.5), "R120.50");
/// ```
pub fn format_price(currency_symbol: &str, price: f64) -> String {
    format!("{currency_symbol}{price:.2}")
}

/// Cuts `text` so it fits in `max_width` terminal columns, appending an
/// ellipsis when anything was dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_always_show_two_decimals() {
        assert_eq!(format_price("R", 45.0), "R45.00");
        assert_eq!(format_price("$", 0.5), "$0.50");
        assert_eq!(format_price("", 9.999), "10.00");
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("Bobotie", 10), "Bobotie");
        assert_eq!(truncate_to_width("Bobotie", 5), "Bobo…");
        assert_eq!(truncate_to_width("寿司寿司", 5), "寿司…");
        assert_eq!(truncate_to_width("anything", 0), "");
    }
}
