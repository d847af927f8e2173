//! Character-safe text helpers used by the renderers.

/// Horizontal rule used between report sections.
pub fn divider(ch: char) -> String {
  ch.to_string().repeat(80)
}

/// The first `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
  match text.char_indices().nth(max_chars) {
    Some((idx, _)) => &text[..idx],
    None => text,
  }
}

/// `text` cut to `max_chars` characters, with `...` appended only when
/// something was cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
  let cut = truncate_chars(text, max_chars);
  if cut.len() < text.len() {
    format!("{cut}...")
  } else {
    text.to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_truncate_chars() {
    assert_eq!(truncate_chars("hello", 3), "hel");
    assert_eq!(truncate_chars("hi", 3), "hi");
    assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
  }

  #[test]
  fn test_excerpt() {
    assert_eq!(excerpt("short", 200), "short");
    assert_eq!(excerpt("abcdef", 3), "abc...");
    assert_eq!(excerpt("abc", 3), "abc");
    assert_eq!(excerpt(&"x".repeat(201), 200), format!("{}...", "x".repeat(200)));
  }

  #[test]
  fn test_divider() {
    assert_eq!(divider('=').chars().count(), 80);
  }
}
