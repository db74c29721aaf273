// hashmark - Free and Open Source Software Statement
//
// This project, hashmark, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 0.2.0
//
// This file provides utility functions for formatting benchmark output in
// hashmark, located in the utils subdirectory. It formats hash rates in
// scaled units and raw counts with thousands separators for consistent
// output in logs.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

const RATE_UNITS: [&str; 6] = ["H/s", "KH/s", "MH/s", "GH/s", "TH/s", "PH/s"];

/// Utility functions for formatting benchmark statistics
pub struct FormatUtils;

impl FormatUtils {
    /// Format a hash rate in the smallest unit that keeps the scaled value
    /// below 1000 (H/s through PH/s), with two fractional digits. At the
    /// largest unit the value is reported unscaled further.
    pub fn format_hashrate(rate: f64) -> String {
        let mut scaled = rate;
        let mut unit = 0;
        while scaled >= 1000.0 && unit < RATE_UNITS.len() - 1 {
            scaled /= 1000.0;
            unit += 1;
        }
        format!("{:.2} {}", scaled, RATE_UNITS[unit])
    }

    /// Format a raw hash count with comma thousands separators.
    pub fn format_count(count: u64) -> String {
        let digits = count.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashrate_base_unit() {
        assert_eq!(FormatUtils::format_hashrate(0.0), "0.00 H/s");
        assert_eq!(FormatUtils::format_hashrate(950.0), "950.00 H/s");
        assert_eq!(FormatUtils::format_hashrate(999.99), "999.99 H/s");
    }

    #[test]
    fn test_hashrate_scaled_units() {
        assert_eq!(FormatUtils::format_hashrate(1000.0), "1.00 KH/s");
        assert_eq!(FormatUtils::format_hashrate(1500.0), "1.50 KH/s");
        assert_eq!(FormatUtils::format_hashrate(2_500_000.0), "2.50 MH/s");
        assert_eq!(FormatUtils::format_hashrate(7_200_000_000.0), "7.20 GH/s");
        assert_eq!(FormatUtils::format_hashrate(3.1e12), "3.10 TH/s");
    }

    #[test]
    fn test_hashrate_caps_at_largest_unit() {
        // Beyond PH/s the value is no longer scaled down
        assert_eq!(FormatUtils::format_hashrate(1e15), "1.00 PH/s");
        assert_eq!(FormatUtils::format_hashrate(1e18), "1000.00 PH/s");
    }

    #[test]
    fn test_count_separators() {
        assert_eq!(FormatUtils::format_count(0), "0");
        assert_eq!(FormatUtils::format_count(999), "999");
        assert_eq!(FormatUtils::format_count(1000), "1,000");
        assert_eq!(FormatUtils::format_count(1_234_567), "1,234,567");
        assert_eq!(FormatUtils::format_count(42_000_000_000), "42,000,000,000");
    }
}

// Changelog:
// - v0.2.0 (2025-08-25): Replaced threshold ladder with a unit table walk,
//   extending coverage through TH/s and PH/s.
// - v0.1.0: Initial hashrate and count formatting.
