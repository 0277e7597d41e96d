//! # Concrete Scenarios
//!
//! The reference examples, run through every public surface: the free
//! functions, `Operation::apply` and the service port.

#[cfg(test)]
mod tests {
    use calc_arithmetic::{
        add, divide, multiply, subtract, ArithmeticApi, CalculatorService, Operation,
        ZERO_DIVISOR_SENTINEL,
    };

    const SCENARIOS: [(Operation, f64, f64, f64); 5] = [
        (Operation::Add, 2.0, 3.0, 5.0),
        (Operation::Subtract, 5.0, 3.0, 2.0),
        (Operation::Multiply, 4.0, 2.5, 10.0),
        (Operation::Divide, 10.0, 2.0, 5.0),
        (Operation::Divide, 7.0, 0.0, 0.0),
    ];

    #[test]
    fn test_free_functions() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(subtract(5.0, 3.0), 2.0);
        assert_eq!(multiply(4.0, 2.5), 10.0);
        assert_eq!(divide(10.0, 2.0), 5.0);
        assert_eq!(divide(7.0, 0.0), 0.0);
    }

    #[test]
    fn test_operation_apply() {
        for (op, a, b, expected) in SCENARIOS {
            assert_eq!(op.apply(a, b), expected, "{a} {op} {b}");
        }
    }

    #[test]
    fn test_service_port() {
        crate::init_test_tracing();
        let calc: CalculatorService = CalculatorService::default();

        for (op, a, b, expected) in SCENARIOS {
            assert_eq!(calc.evaluate(op, a, b), Ok(expected), "{a} {op} {b}");
        }
    }

    #[test]
    fn test_sentinel_is_indistinguishable_from_zero_quotient() {
        assert_eq!(divide(7.0, 0.0), divide(0.0, 7.0));
        assert_eq!(divide(7.0, 0.0), ZERO_DIVISOR_SENTINEL);
    }

    #[test]
    fn test_port_as_trait_object() {
        let service: CalculatorService = CalculatorService::default();
        let calc: Box<dyn ArithmeticApi> = Box::new(service);
        assert_eq!(calc.divide(1.0, 4.0), Ok(0.25));
        assert_eq!(calc.divide(1.0, 0.0), Ok(0.0));
    }
}
