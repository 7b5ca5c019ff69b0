/// Reverse the input and alternate case, starting upper-case at index 0.
///
/// Only ASCII case mapping is applied.
pub fn generate_alternating_caps_string(accumulator: &str) -> String {
    accumulator
        .chars()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}
