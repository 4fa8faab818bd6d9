//! Cursor-aware editing helpers. Cursors count chars, not bytes.

pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

pub fn clamp_cursor(cursor: usize, value: &str) -> usize {
    cursor.min(char_count(value))
}

pub fn insert_char(value: &mut String, cursor: &mut usize, ch: char) {
    let pos = clamp_cursor(*cursor, value);
    value.insert(byte_index_at_char(value, pos), ch);
    *cursor = pos + 1;
}

pub fn backspace_char(value: &mut String, cursor: &mut usize) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos == 0 {
        return false;
    }
    value.remove(byte_index_at_char(value, pos - 1));
    *cursor = pos - 1;
    true
}

pub fn delete_char(value: &mut String, cursor: &mut usize) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos >= char_count(value) {
        return false;
    }
    value.remove(byte_index_at_char(value, pos));
    *cursor = pos;
    true
}

pub fn delete_word_left(value: &mut String, cursor: &mut usize) -> bool {
    let mut chars: Vec<char> = value.chars().collect();
    let pos = (*cursor).min(chars.len());

    let mut start = pos;
    while start > 0 && chars[start - 1].is_whitespace() {
        start -= 1;
    }
    while start > 0 && !chars[start - 1].is_whitespace() {
        start -= 1;
    }
    if start == pos {
        return false;
    }

    chars.drain(start..pos);
    *value = chars.into_iter().collect();
    *cursor = start;
    true
}

pub fn move_left(cursor: &mut usize, value: &str) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos == 0 {
        return false;
    }
    *cursor = pos - 1;
    true
}

pub fn move_right(cursor: &mut usize, value: &str) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos >= char_count(value) {
        return false;
    }
    *cursor = pos + 1;
    true
}

fn byte_index_at_char(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

#[cfg(test)]
mod tests {
    use super::{backspace_char, delete_char, delete_word_left, insert_char, move_left};

    #[test]
    fn edits_respect_multibyte_chars() {
        let mut value = String::from("Jön");
        let mut cursor = 2;
        insert_char(&mut value, &mut cursor, 'x');
        assert_eq!(value, "Jöxn");
        assert_eq!(cursor, 3);

        assert!(backspace_char(&mut value, &mut cursor));
        assert!(backspace_char(&mut value, &mut cursor));
        assert_eq!(value, "Jn");
        assert_eq!(cursor, 1);

        assert!(delete_char(&mut value, &mut cursor));
        assert_eq!(value, "J");
        assert!(!delete_char(&mut value, &mut cursor));
    }

    #[test]
    fn delete_word_left_eats_trailing_space_and_word() {
        let mut value = String::from("Jon Snow  ");
        let mut cursor = value.chars().count();
        assert!(delete_word_left(&mut value, &mut cursor));
        assert_eq!(value, "Jon ");
        assert_eq!(cursor, 4);

        let mut cursor = 0;
        assert!(!delete_word_left(&mut value, &mut cursor));
        assert!(!move_left(&mut cursor, &value));
    }
}
