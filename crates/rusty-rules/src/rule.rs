//! Rule annotations
//!
//! An annotation is the string attached to a field, `name:parameter`. The
//! name picks the rule and the parameter is handed to that rule's parser
//! untouched.
//!
//! | Tag   | Rule                      |
//! |-------|---------------------------|
//! | `len` | [`RuleName::Length`]      |
//! | `in`  | [`RuleName::Membership`]  |
//! | `min` | [`RuleName::Minimum`]     |
//! | `max` | [`RuleName::Maximum`]     |

use std::fmt;

use crate::error::SyntaxError;

/// The fixed set of rules the engine knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    Length,
    Membership,
    Minimum,
    Maximum,
}

impl RuleName {
    pub const ALL: [RuleName; 4] = [
        RuleName::Length,
        RuleName::Membership,
        RuleName::Minimum,
        RuleName::Maximum,
    ];

    /// Look up a rule by its annotation tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "len" => Some(RuleName::Length),
            "in" => Some(RuleName::Membership),
            "min" => Some(RuleName::Minimum),
            "max" => Some(RuleName::Maximum),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            RuleName::Length => "len",
            RuleName::Membership => "in",
            RuleName::Minimum => "min",
            RuleName::Maximum => "max",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A field annotation split into rule name and raw parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation<'a> {
    pub name: &'a str,
    pub param: &'a str,
}

impl<'a> Annotation<'a> {
    /// Split on the first `:`. Everything after it is the parameter.
    pub fn parse(raw: &'a str) -> Result<Self, SyntaxError> {
        raw.split_once(':')
            .map(|(name, param)| Annotation { name, param })
            .ok_or_else(|| SyntaxError::MissingParameter(raw.to_string()))
    }

    pub fn rule(&self) -> Option<RuleName> {
        RuleName::from_tag(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("len:5", "len", "5")]
    #[case("in:a,b,c", "in", "a,b,c")]
    #[case("min:", "min", "")]
    #[case("in:a:b", "in", "a:b")]
    #[case(":5", "", "5")]
    fn test_parse_splits_on_first_colon(
        #[case] raw: &str,
        #[case] name: &str,
        #[case] param: &str,
    ) {
        assert_eq!(Annotation::parse(raw), Ok(Annotation { name, param }));
    }

    #[test]
    fn test_parse_requires_parameter_section() {
        assert_eq!(
            Annotation::parse("len"),
            Err(SyntaxError::MissingParameter("len".to_string()))
        );
    }

    #[test]
    fn test_rule_lookup() {
        for rule in RuleName::ALL {
            assert_eq!(RuleName::from_tag(rule.tag()), Some(rule));
        }
        assert_eq!(RuleName::from_tag("regex"), None);
        assert_eq!(RuleName::from_tag("LEN"), None);
        assert_eq!(
            Annotation::parse("max:3").unwrap().rule(),
            Some(RuleName::Maximum)
        );
        assert_eq!(RuleName::Membership.to_string(), "in");
    }
}
