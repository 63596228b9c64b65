use crate::array::ValueArray;
use crate::value::Value;
use std::fmt;

impl fmt::Display for ValueArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = render(self.values(), self.shape(), self.rank());
        match self.label() {
            Some(label) => write!(f, "ValueArray(\n    {},\n    label={}\n)", body, label),
            None => write!(f, "ValueArray(\n    {}\n)", body),
        }
    }
}

// Innermost rows on one line; outer dimensions separated by one newline per
// remaining depth and aligned under the opening bracket.
fn render(values: &[Value], shape: &[usize], rank: usize) -> String {
    let depth = shape.len();
    if depth <= 1 {
        let items: Vec<String> = values.iter().map(|v| format!("{:.2}", v.data())).collect();
        return format!("[{}]", items.join(", "));
    }
    let chunk = shape[1..].iter().product::<usize>().max(1);
    let separator = format!(",{}{}", "\n".repeat(depth - 1), " ".repeat(5 + rank - depth));
    let parts: Vec<String> = values
        .chunks(chunk)
        .map(|sub| render(sub, &shape[1..], rank))
        .collect();
    format!("[{}]", parts.join(&separator))
}
