//! Turns raw input lines into a typed sequence of items

use crate::config::DataType;
use crate::error::Warning;

/// Parsed items; the element type follows the active [`DataType`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Items {
    Numbers(Vec<i64>),
    Text(Vec<String>),
}

impl Items {
    pub fn len(&self) -> usize {
        match self {
            Items::Numbers(numbers) => numbers.len(),
            Items::Text(text) => text.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parser output plus the tokens that had to be skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub items: Items,
    pub warnings: Vec<Warning>,
}

/// Parse `lines` according to `data_type`
pub fn parse(data_type: DataType, lines: Vec<String>) -> Parsed {
    match data_type {
        DataType::Line => Parsed {
            items: Items::Text(lines),
            warnings: Vec::new(),
        },
        DataType::Word => Parsed {
            items: Items::Text(parse_words(&lines)),
            warnings: Vec::new(),
        },
        DataType::Long => {
            let (numbers, warnings) = parse_numbers(&lines);
            Parsed {
                items: Items::Numbers(numbers),
                warnings,
            }
        }
    }
}

fn tokens(lines: &[String]) -> impl Iterator<Item = &str> + '_ {
    lines.iter().flat_map(|line| line.split_whitespace())
}

/// Whitespace separated tokens in encounter order
pub fn parse_words(lines: &[String]) -> Vec<String> {
    tokens(lines).map(str::to_string).collect()
}

/// Base-10 integers; tokens that do not parse are skipped with a warning
pub fn parse_numbers(lines: &[String]) -> (Vec<i64>, Vec<Warning>) {
    let mut numbers = Vec::new();
    let mut warnings = Vec::new();

    for token in tokens(lines) {
        match token.parse::<i64>() {
            Ok(number) => numbers.push(number),
            Err(_) => warnings.push(Warning::NotALong(token.to_string())),
        }
    }

    (numbers, warnings)
}
