// Property-based tests for balance display conversions

use blockchain::types::{lamports_to_sol, token_display_amount, LAMPORTS_PER_SOL};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any lamport value, the display balance is the raw value divided
    /// by 10^9.
    #[test]
    fn prop_lamports_to_sol_divides_by_fixed_divisor(lamports in 0u64..=u64::MAX) {
        prop_assert_eq!(
            lamports_to_sol(lamports),
            lamports as f64 / 1_000_000_000.0
        );
    }

    /// Whole multiples of one SOL display as whole numbers.
    #[test]
    fn prop_whole_sol_displays_exact(sol in 0u64..1_000_000u64) {
        let lamports = sol * LAMPORTS_PER_SOL;
        prop_assert_eq!(lamports_to_sol(lamports), sol as f64);
    }

    /// Zero-decimals tokens display the raw amount unchanged.
    #[test]
    fn prop_zero_decimals_passthrough(raw_amount in 0u64..=u64::MAX) {
        prop_assert_eq!(token_display_amount(raw_amount, 0), raw_amount as f64);
    }

    /// Whole multiples of 10^decimals display as whole numbers.
    #[test]
    fn prop_whole_units_display_exact(units in 0u64..1_000_000u64, decimals in 1u8..=9u8) {
        let raw_amount = units * 10u64.pow(decimals as u32);
        prop_assert_eq!(token_display_amount(raw_amount, decimals), units as f64);
    }
}
