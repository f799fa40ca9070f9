/// Insert `separator` between digit groups sized by `pattern`
///
/// Groups are taken from the least significant digit: the first pattern
/// entry sizes the rightmost group, following entries size the next groups
/// and the last entry repeats. An empty pattern disables grouping.
pub(crate) fn group_digits(digits: &str, pattern: &[usize], separator: char) -> String {
    let mut sizes = pattern.iter().copied();
    let mut size = match sizes.next() {
        Some(size) if size > 0 => size,
        _ => return digits.to_string(),
    };

    let mut groups: Vec<&str> = Vec::with_capacity(digits.len() / size + 1);
    let mut end = digits.len();
    while end > size {
        groups.push(&digits[end - size..end]);
        end -= size;
        match sizes.next() {
            Some(0) => break,
            Some(next) => size = next,
            None => {}
        }
    }
    groups.push(&digits[..end]);
    groups.reverse();

    let mut result = String::with_capacity(digits.len() + groups.len() * separator.len_utf8());
    for (idx, group) in groups.iter().enumerate() {
        if idx > 0 {
            result.push(separator);
        }
        result.push_str(group);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_western_grouping() {
        assert_eq!(group_digits("1234568", &[3], ','), "1,234,568");
        assert_eq!(group_digits("1000", &[3], ','), "1,000");
        assert_eq!(group_digits("999", &[3], ','), "999");
        assert_eq!(group_digits("0", &[3], ','), "0");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_digits("1234568", &[3, 2], ','), "12,34,568");
        assert_eq!(group_digits("123456789", &[3, 2], ','), "12,34,56,789");
        assert_eq!(group_digits("12345", &[3, 2], ','), "12,345");
    }

    #[test]
    fn test_no_grouping() {
        assert_eq!(group_digits("1234568", &[], ','), "1234568");
        assert_eq!(group_digits("1234568", &[0], ','), "1234568");
    }

    #[test]
    fn test_multibyte_separator() {
        assert_eq!(group_digits("1234568", &[3], '\u{a0}'), "1\u{a0}234\u{a0}568");
    }
}
