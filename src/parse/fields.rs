use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_till},
    combinator::rest,
    sequence::separated_pair,
};

/// Header line as `name ":" value` where the name is everything before the
/// first colon.
pub fn field_line(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(field_name, tag(":"), rest).parse(input)
}

fn field_name(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == ':').parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_line() {
        let (remain, (name, value)) = field_line("n1:v1").unwrap();
        assert_eq!(remain, "");
        assert_eq!(name, "n1");
        assert_eq!(value, "v1");

        let (_remain, (name, value)) = field_line("n1: a:b:c").unwrap();
        assert_eq!(name, "n1");
        assert_eq!(value, " a:b:c");
    }

    #[test]
    fn test_field_line_missing_colon() {
        assert!(field_line("n1 v1").is_err());
        assert!(field_line("").is_err());
    }
}
