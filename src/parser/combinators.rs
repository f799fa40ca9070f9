use winnow::token::take_while;
use winnow::{ModalResult, Parser};

/// Parse a non-empty run of ASCII digits
pub(super) fn digit_run<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)
}
