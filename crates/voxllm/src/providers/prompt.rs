//! Outbound prompt composition shared by every adapter.

/// Label placed between the instruction and the text it operates on.
/// Vendors have only ever seen this exact string; keep it byte-for-byte.
pub const TEXT_LABEL: &str = "טקסט:";

/// Join an instruction and its source text the way every vendor receives it:
/// `"{instruction}\n\nטקסט:\n{text}"`. Without a source text the instruction is
/// the whole prompt.
pub fn compose_prompt(instruction: &str, source_text: Option<&str>) -> String {
    match source_text {
        Some(text) => format!("{instruction}\n\n{TEXT_LABEL}\n{text}"),
        None => instruction.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_with_text() {
        assert_eq!(
            compose_prompt("Fix the grammar", Some("hello wrld")),
            "Fix the grammar\n\nטקסט:\nhello wrld"
        );
    }

    #[test]
    fn test_compose_keeps_whitespace() {
        assert_eq!(compose_prompt(" ", Some(" ")), " \n\nטקסט:\n ");
    }

    #[test]
    fn test_compose_without_text() {
        assert_eq!(compose_prompt("Translate this", None), "Translate this");
    }
}
