//! Demonstration data for the two pipelines: a fibonacci function serves
//! both as the rendered source specimen and as the report's table data.

use crate::error::Error;

/// The source specimen rendered by the graph pipeline. Kept to constructs
/// the lowering supports: conditionals, a range loop, indexed assignment, a
/// list literal, panic, and return.
pub const FIBONACCI_SOURCE: &str = r#"
fn fibonacci(n: i64) {
    if n < 0 {
        panic!("n must not be negative");
    }
    let fib = [1, 1];
    if n == 0 {
        return [];
    } else if n <= 2 {
        return fib;
    }
    for i in 2..n {
        fib[i] = fib[i - 1] + fib[i - 2];
    }
    return fib;
}
"#;

/// Returns the fibonacci sequence of length `n`. A negative length fails
/// with [`Error::InvalidLength`]; length zero is an empty sequence.
pub fn fibonacci(n: i64) -> Result<Vec<u64>, Error> {
    if n < 0 {
        return Err(Error::InvalidLength(n));
    }
    let n = n as usize;
    let mut fib = vec![1; n];
    for i in 2..n {
        fib[i] = fib[i - 1] + fib[i - 2];
    }
    Ok(fib)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_length_is_rejected() {
        let err = fibonacci(-1).unwrap_err();
        assert!(matches!(err, Error::InvalidLength(-1)));
    }

    #[test]
    fn short_and_empty_sequences() {
        assert_eq!(fibonacci(0).unwrap(), Vec::<u64>::new());
        assert_eq!(fibonacci(1).unwrap(), vec![1]);
        assert_eq!(fibonacci(2).unwrap(), vec![1, 1]);
    }

    #[test]
    fn sequence_of_length_five() {
        assert_eq!(fibonacci(5).unwrap(), vec![1, 1, 2, 3, 5]);
    }

    #[test]
    fn specimen_source_lowers_cleanly() {
        crate::tree::lower_source(FIBONACCI_SOURCE).unwrap();
    }
}
