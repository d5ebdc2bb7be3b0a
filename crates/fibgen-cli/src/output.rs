use fibonacci_rs::Sequence;

/// Header line followed by the comma-joined terms, each newline-terminated.
pub fn render(count: i64, sequence: &Sequence) -> String {
    format!("Fibonacci sequence (first {count} numbers):\n{sequence}\n")
}
