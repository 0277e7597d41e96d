//! # Algebraic Properties
//!
//! IEEE-754 agreement, commutativity and identities for finite operands,
//! plus the zero-divisor sentinel.

#[cfg(test)]
mod tests {
    use calc_arithmetic::{
        add, checked_divide, divide, multiply, subtract, ArithmeticApi, CalculatorService,
        Operation,
    };
    use proptest::prelude::*;

    fn finite() -> impl Strategy<Value = f64> {
        proptest::num::f64::NORMAL
            | proptest::num::f64::SUBNORMAL
            | proptest::num::f64::ZERO
    }

    fn nonzero_finite() -> impl Strategy<Value = f64> {
        proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL
    }

    proptest! {
        #[test]
        fn add_matches_ieee(a in finite(), b in finite()) {
            prop_assert_eq!(add(a, b).to_bits(), (a + b).to_bits());
        }

        #[test]
        fn subtract_matches_ieee(a in finite(), b in finite()) {
            prop_assert_eq!(subtract(a, b).to_bits(), (a - b).to_bits());
        }

        #[test]
        fn multiply_matches_ieee(a in finite(), b in finite()) {
            prop_assert_eq!(multiply(a, b).to_bits(), (a * b).to_bits());
        }

        #[test]
        fn divide_matches_ieee_for_nonzero_divisor(a in finite(), b in nonzero_finite()) {
            prop_assert_eq!(divide(a, b).to_bits(), (a / b).to_bits());
        }

        #[test]
        fn divide_by_zero_is_sentinel(a in finite()) {
            prop_assert_eq!(divide(a, 0.0), 0.0);
            prop_assert_eq!(divide(a, -0.0), 0.0);
        }

        #[test]
        fn checked_divide_agrees_except_at_zero(a in finite(), b in finite()) {
            match checked_divide(a, b) {
                Ok(q) => prop_assert_eq!(q.to_bits(), divide(a, b).to_bits()),
                Err(_) => prop_assert!(b == 0.0),
            }
        }

        #[test]
        fn add_is_commutative(a in finite(), b in finite()) {
            prop_assert_eq!(add(a, b).to_bits(), add(b, a).to_bits());
        }

        #[test]
        fn multiply_is_commutative(a in finite(), b in finite()) {
            prop_assert_eq!(multiply(a, b).to_bits(), multiply(b, a).to_bits());
        }

        #[test]
        fn identities(a in finite()) {
            // `add(-0.0, 0.0)` is `+0.0`, so compare by value
            prop_assert_eq!(add(a, 0.0), a);
            prop_assert_eq!(multiply(a, 1.0).to_bits(), a.to_bits());
            prop_assert_eq!(divide(a, 1.0).to_bits(), a.to_bits());
        }

        #[test]
        fn default_service_agrees_with_pure_functions(
            a in proptest::num::f64::ANY,
            b in proptest::num::f64::ANY,
            op in prop::sample::select(Operation::ALL.to_vec()),
        ) {
            let calc: CalculatorService = CalculatorService::default();
            let served = calc.evaluate(op, a, b).unwrap();
            prop_assert_eq!(served.to_bits(), op.apply(a, b).to_bits());
        }
    }
}
